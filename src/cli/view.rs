//! View command implementation.
//!
//! Character view: each pixel is drawn with a glyph picked by grey level.

use std::io;
use std::path::PathBuf;

use clap::Args;

use crate::codec::render_pixels;
use crate::config::Settings;
use crate::error::Result;
use crate::output::{display_path, Printer};

use super::files::read_image;

/// Display an image with characters standing for grey levels
#[derive(Args, Debug)]
pub struct ViewArgs {
    /// Image to read (`-` for stdin)
    #[arg(required = true)]
    pub file: PathBuf,

    /// Characters from darkest to brightest (default from pgm.yaml)
    #[arg(long, short)]
    pub glyphs: Option<String>,
}

pub fn run(args: ViewArgs, settings: &Settings, printer: &Printer) -> Result<()> {
    printer.status("Reading", &display_path(&args.file));
    let image = read_image(&args.file, &settings.decode_options())?;

    let glyphs = args.glyphs.as_deref().unwrap_or(&settings.glyphs);
    render_pixels(&image, &mut io::stdout().lock(), Some(glyphs))
}
