//! Create command implementation.
//!
//! Builds a new image from explicit values and writes it with its own
//! comment line.

use std::io::{self, BufRead};
use std::path::PathBuf;

use clap::Args;

use crate::codec::{encode, Tokenizer};
use crate::error::{PgmError, Result};
use crate::output::{display_path, plural, Printer};
use crate::types::Image;

use super::files::create_output;
use super::values;

/// Create a new image from explicit values
#[derive(Args, Debug)]
pub struct CreateArgs {
    /// File to write
    #[arg(required = true)]
    pub output: PathBuf,

    /// Width in pixels (1-100)
    #[arg(long, value_parser = values::side)]
    pub width: usize,

    /// Height in pixels (1-100)
    #[arg(long, value_parser = values::side)]
    pub height: usize,

    /// Maximum grey level (1-255)
    #[arg(long, value_parser = values::grey_max)]
    pub grey_max: u8,

    /// Comment line, without the leading `#`
    #[arg(long, default_value = "")]
    pub comment: String,

    /// Pixel values, row-major; read from stdin when omitted
    #[arg(value_parser = values::pixel)]
    pub pixels: Vec<u8>,

    /// Overwrite an existing output file
    #[arg(long)]
    pub force: bool,
}

pub fn run(args: CreateArgs, printer: &Printer) -> Result<()> {
    let count = args.width * args.height;
    let pixels = if args.pixels.is_empty() {
        let waiting = format!("for {} on stdin", plural(count, "pixel", "pixels"));
        printer.info("Waiting", &waiting);
        read_pixels(io::stdin().lock(), count)?
    } else {
        args.pixels.clone()
    };

    let image = build(&args, pixels)?;
    let mut out = create_output(Some(args.output.as_path()), args.force)?;
    encode(&image, &mut out, false)?;

    printer.status(
        "Created",
        &format!(
            "{} ({}x{}, max {})",
            display_path(&args.output),
            image.width(),
            image.height(),
            image.grey_max()
        ),
    );
    Ok(())
}

fn build(args: &CreateArgs, pixels: Vec<u8>) -> Result<Image> {
    Image::new(args.width, args.height, args.grey_max, pixels)?.with_comment(args.comment.as_str())
}

/// Read exactly `count` pixel values from a token stream.
fn read_pixels<R: BufRead>(reader: R, count: usize) -> Result<Vec<u8>> {
    let mut tokens = Tokenizer::new(reader);
    let mut pixels = Vec::with_capacity(count);
    for _ in 0..count {
        let at = tokens.location();
        let value = tokens.read_unsigned()?;
        let value = u8::try_from(value)
            .map_err(|_| PgmError::format(format!("pixel value {} exceeds 255", value), at))?;
        pixels.push(value);
    }
    Ok(pixels)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    fn args(output: PathBuf, pixels: Vec<u8>) -> CreateArgs {
        CreateArgs {
            output,
            width: 2,
            height: 2,
            grey_max: 9,
            comment: " hand made".to_string(),
            pixels,
            force: false,
        }
    }

    #[test]
    fn test_create_writes_own_comment() {
        let dir = tempdir().unwrap();
        let output = dir.path().join("new.pgm");

        run(args(output.clone(), vec![1, 2, 3, 4]), &Printer::plain()).unwrap();

        let text = std::fs::read_to_string(&output).unwrap();
        assert_eq!(text, "P2\n# hand made\n2 2\n9\n1 2 \n3 4 \n");
    }

    #[test]
    fn test_create_rejects_pixel_above_max() {
        let dir = tempdir().unwrap();
        let output = dir.path().join("new.pgm");

        let err = run(args(output.clone(), vec![1, 2, 3, 10]), &Printer::plain()).unwrap_err();
        assert!(err.is_invalid_argument());
        assert!(!output.exists());
    }

    #[test]
    fn test_create_rejects_wrong_count() {
        let dir = tempdir().unwrap();
        let output = dir.path().join("new.pgm");

        let err = run(args(output, vec![1, 2, 3]), &Printer::plain()).unwrap_err();
        assert!(err.is_invalid_argument());
    }

    #[test]
    fn test_read_pixels() {
        assert_eq!(read_pixels(&b"1 2\n3"[..], 3).unwrap(), vec![1, 2, 3]);
        assert!(read_pixels(&b"1 2"[..], 3).unwrap_err().is_format());
        assert!(read_pixels(&b"256"[..], 1).unwrap_err().is_format());
    }
}
