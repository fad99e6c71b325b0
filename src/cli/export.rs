//! Export command implementation.

use std::path::PathBuf;

use clap::Args;

use crate::config::Settings;
use crate::error::Result;
use crate::output::{display_path, Printer};
use crate::png::write_png;

use super::files::{ensure_writable, read_image};
use super::values;

/// Export an image as an 8-bit greyscale PNG
#[derive(Args, Debug)]
pub struct ExportArgs {
    /// Image to read (`-` for stdin)
    #[arg(required = true)]
    pub file: PathBuf,

    /// PNG file to write
    #[arg(long, short)]
    pub output: PathBuf,

    /// Integer upscaling factor
    #[arg(long, default_value = "1", value_parser = values::scale)]
    pub scale: u32,

    /// Overwrite an existing output file
    #[arg(long)]
    pub force: bool,
}

pub fn run(args: ExportArgs, settings: &Settings, printer: &Printer) -> Result<()> {
    printer.status("Reading", &display_path(&args.file));
    let image = read_image(&args.file, &settings.decode_options())?;

    ensure_writable(&args.output, args.force)?;
    write_png(&image, &args.output, args.scale)?;
    printer.status("Exported", &display_path(&args.output));
    Ok(())
}
