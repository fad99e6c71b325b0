//! Check command implementation.
//!
//! Decodes each file and reports which ones are well formed.

use std::path::PathBuf;

use clap::Args;

use crate::config::Settings;
use crate::error::Result;
use crate::output::{display_path, plural, Printer};

use super::files::read_image;

/// Check that files decode
#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Files to check
    #[arg(required = true)]
    pub files: Vec<PathBuf>,
}

/// Returns the first failure after reporting every file.
pub fn run(args: CheckArgs, settings: &Settings, printer: &Printer) -> Result<()> {
    let options = settings.decode_options();
    let mut first_error = None;
    let mut failed = 0;

    for file in &args.files {
        let display = display_path(file);
        match read_image(file, &options) {
            Ok(image) => printer.status(
                "Ok",
                &format!(
                    "{} {}",
                    display,
                    printer.dim(&format!(
                        "({}x{}, max {})",
                        image.width(),
                        image.height(),
                        image.grey_max()
                    ))
                ),
            ),
            Err(e) => {
                printer.error("Failed", &format!("{}: {}", display, e));
                failed += 1;
                first_error.get_or_insert(e);
            }
        }
    }

    let total = args.files.len();
    match first_error {
        Some(e) => {
            printer.warning(
                "Checked",
                &format!("{}, {} failed", plural(total, "file", "files"), failed),
            );
            Err(e)
        }
        None => {
            printer.status("Checked", &plural(total, "file", "files"));
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_check_reports_first_failure() {
        let dir = tempdir().unwrap();
        let good = dir.path().join("good.pgm");
        let bad = dir.path().join("bad.pgm");
        std::fs::write(&good, "P2\n1 1\n1\n0\n").unwrap();
        std::fs::write(&bad, "P2\n1 1\n300\n0\n").unwrap();

        let ok = CheckArgs {
            files: vec![good.clone()],
        };
        assert!(run(ok, &Settings::default(), &Printer::plain()).is_ok());

        let mixed = CheckArgs {
            files: vec![good, bad],
        };
        let err = run(mixed, &Settings::default(), &Printer::plain()).unwrap_err();
        assert!(err.is_format());
    }
}
