//! Pixel effects: negative, flips and rotation.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::types::Image;

/// Index arithmetic used by the flips.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum FlipMode {
    /// True mirror: column `w` takes column `width - 1 - w`.
    #[default]
    Mirror,
    /// Column `w` takes column `width - w`, so every row is shifted by one
    /// and the first column reads the next row's first pixel. Reads past the
    /// end of the buffer give 0.
    Legacy,
}

/// Replace every pixel `p` with `grey_max - p`.
pub fn negative(image: &mut Image) {
    let max = image.grey_max;
    for p in &mut image.pixels {
        *p = max - *p;
    }
}

/// Mirror each row left to right.
pub fn flip_horizontal(image: &mut Image, mode: FlipMode) {
    let (width, height) = (image.width, image.height);
    let source = image.pixels.clone();

    for h in 0..height {
        for w in 0..width {
            let column = match mode {
                FlipMode::Mirror => width - 1 - w,
                FlipMode::Legacy => width - w,
            };
            image.pixels[h * width + w] = read_or_zero(&source, h * width + column);
        }
    }
}

/// Mirror each column top to bottom.
pub fn flip_vertical(image: &mut Image, mode: FlipMode) {
    let (width, height) = (image.width, image.height);
    let source = image.pixels.clone();

    for h in 0..height {
        let row = match mode {
            FlipMode::Mirror => height - 1 - h,
            FlipMode::Legacy => height - h,
        };
        for w in 0..width {
            image.pixels[h * width + w] = read_or_zero(&source, row * width + w);
        }
    }
}

/// Rotate 90 degrees clockwise. Width and height swap.
pub fn rotate_clockwise(image: &mut Image) {
    let (width, height) = (image.width, image.height);
    let out_width = height;
    let mut rotated = vec![0; image.pixels.len()];

    for h in 0..height {
        for w in 0..width {
            rotated[w * out_width + (out_width - h - 1)] = image.pixels[h * width + w];
        }
    }

    image.width = height;
    image.height = width;
    image.pixels = rotated;
}

fn read_or_zero(pixels: &[u8], index: usize) -> u8 {
    pixels.get(index).copied().unwrap_or(0)
}
