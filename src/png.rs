//! PNG output for greyscale images.
//!
//! Grey levels are stretched from `0..=grey_max` to `0..=255`.

use std::path::Path;

use image::{GrayImage, ImageBuffer, Luma};

use crate::error::{PgmError, Result};
use crate::types::Image;

/// Convert to an 8-bit greyscale buffer with integer upscaling.
pub fn to_gray_image(image: &Image, scale: u32) -> GrayImage {
    let scale = scale.max(1);
    let width = image.width() as u32 * scale;
    let height = image.height() as u32 * scale;
    let max = u32::from(image.grey_max());

    ImageBuffer::from_fn(width, height, |x, y| {
        let value = image
            .pixel((x / scale) as usize, (y / scale) as usize)
            .unwrap_or(0);
        Luma([(u32::from(value) * 255 / max) as u8])
    })
}

/// Write an image to a PNG file.
///
/// # Arguments
///
/// * `image` - The image to write
/// * `path` - Output file path
/// * `scale` - Integer scale factor (1 = no scaling)
pub fn write_png(image: &Image, path: &Path, scale: u32) -> Result<()> {
    if image.pixel_count() == 0 {
        return Err(PgmError::invalid_argument("cannot export an image with no pixels"));
    }

    to_gray_image(image, scale).save(path).map_err(|e| PgmError::Io {
        path: path.to_path_buf(),
        message: format!("Failed to write PNG: {}", e),
    })
}
