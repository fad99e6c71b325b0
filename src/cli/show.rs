//! Show command implementation.
//!
//! Prints image attributes followed by the exact pixel values.

use std::io::{self, Write};
use std::path::PathBuf;

use clap::Args;

use crate::codec::render_pixels;
use crate::config::Settings;
use crate::error::{PgmError, Result};
use crate::output::{display_path, Printer};

use super::files::read_image;

/// Print image attributes and pixel values
#[derive(Args, Debug)]
pub struct ShowArgs {
    /// Image to read (`-` for stdin)
    #[arg(required = true)]
    pub file: PathBuf,

    /// Print attributes as JSON instead of text, without pixels
    #[arg(long)]
    pub json: bool,
}

pub fn run(args: ShowArgs, settings: &Settings, printer: &Printer) -> Result<()> {
    printer.status("Reading", &display_path(&args.file));
    let image = read_image(&args.file, &settings.decode_options())?;

    let mut out = io::stdout().lock();
    if args.json {
        let json = serde_json::to_string_pretty(&image.info()).map_err(|e| {
            PgmError::invalid_state(format!("Failed to serialize attributes: {}", e))
        })?;
        writeln!(out, "{}", json)?;
    } else {
        write!(out, "{}", image.info())?;
        render_pixels(&image, &mut out, None)?;
    }

    Ok(())
}
