//! Mark and reveal command implementations.
//!
//! `mark` hides a digit string in the ones digit of the leading pixels;
//! `reveal` reads it back.

use std::io::{self, Write};
use std::path::PathBuf;

use clap::Args;

use crate::codec::{encode, render_pixels};
use crate::config::Settings;
use crate::error::Result;
use crate::output::{display_path, plural, Printer};
use crate::transform::extract_info;
use crate::types::ImageSlot;

use super::files::{create_output, load, read_image};
use super::values;

/// Embed a digit string into an image
#[derive(Args, Debug)]
pub struct MarkArgs {
    /// Image to read (`-` for stdin)
    #[arg(required = true)]
    pub file: PathBuf,

    /// Digits to embed
    #[arg(long, short)]
    pub text: String,

    /// Output file; without it the marked pixels are printed
    #[arg(long, short)]
    pub output: Option<PathBuf>,

    /// Overwrite an existing output file
    #[arg(long)]
    pub force: bool,
}

pub fn run(args: MarkArgs, settings: &Settings, printer: &Printer) -> Result<()> {
    let mut slot = ImageSlot::empty();
    printer.status("Reading", &display_path(&args.file));
    load(&mut slot, &args.file, &settings.decode_options())?;

    slot.embed(&args.text)?;
    printer.info("Marked", &plural(args.text.len(), "digit", "digits"));

    let image = slot.get()?;
    match &args.output {
        Some(path) => {
            let mut out = create_output(Some(path.as_path()), args.force)?;
            encode(image, &mut out, settings.standard_comment)?;
            printer.status("Wrote", &display_path(path));
        }
        None => render_pixels(image, &mut io::stdout().lock(), None)?,
    }

    Ok(())
}

/// Read back digits embedded with `mark`
#[derive(Args, Debug)]
pub struct RevealArgs {
    /// Image to read (`-` for stdin)
    #[arg(required = true)]
    pub file: PathBuf,

    /// Number of digits to read
    #[arg(long, short, value_parser = values::count)]
    pub len: usize,
}

pub fn run_reveal(args: RevealArgs, settings: &Settings, printer: &Printer) -> Result<()> {
    printer.status("Reading", &display_path(&args.file));
    let image = read_image(&args.file, &settings.decode_options())?;

    let digits = extract_info(&image, args.len)?;
    writeln!(io::stdout().lock(), "{}", digits)?;
    Ok(())
}
