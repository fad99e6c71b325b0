//! File helpers shared by the subcommands.

use std::fs::File;
use std::io::{self, BufReader, BufWriter, Write};
use std::path::Path;

use crate::codec::{decode_with, DecodeOptions};
use crate::error::{PgmError, Result};
use crate::types::{Image, ImageSlot};

/// Path meaning stdin/stdout.
const STDIO: &str = "-";

/// Decode `path` (or stdin for `-`) into `slot`.
pub fn load(slot: &mut ImageSlot, path: &Path, options: &DecodeOptions) -> Result<()> {
    if path == Path::new(STDIO) {
        slot.load(io::stdin().lock(), options)?;
        return Ok(());
    }

    let file = File::open(path).map_err(|e| PgmError::Io {
        path: path.to_path_buf(),
        message: format!("Failed to open image: {}", e),
    })?;
    slot.load(BufReader::new(file), options)?;
    Ok(())
}

/// Decode a single file.
pub fn read_image(path: &Path, options: &DecodeOptions) -> Result<Image> {
    let mut slot = ImageSlot::empty();
    load(&mut slot, path, options)?;
    slot.into_inner()
        .ok_or_else(|| PgmError::invalid_state("no image decoded"))
}

/// Open an output sink: stdout when `path` is `None` or `-`.
///
/// Existing files are refused unless `force` is set.
pub fn create_output(path: Option<&Path>, force: bool) -> Result<Box<dyn Write>> {
    match path {
        None => Ok(Box::new(io::stdout().lock())),
        Some(p) if p == Path::new(STDIO) => Ok(Box::new(io::stdout().lock())),
        Some(p) => {
            ensure_writable(p, force)?;
            let file = File::create(p).map_err(|e| PgmError::Io {
                path: p.to_path_buf(),
                message: format!("Failed to create file: {}", e),
            })?;
            Ok(Box::new(BufWriter::new(file)))
        }
    }
}

/// Refuse to clobber an existing file without `--force`.
pub fn ensure_writable(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        return Err(PgmError::invalid_argument(format!(
            "{} already exists",
            path.display()
        ))
        .with_help("Use --force to overwrite"));
    }
    Ok(())
}
