//! The PGM image value.

use serde::Serialize;

use crate::error::{PgmError, Result};

/// Largest accepted width.
pub const MAX_WIDTH: usize = 300;

/// Largest accepted height.
pub const MAX_HEIGHT: usize = 300;

/// Largest accepted grey max.
pub const MAX_GREY: u8 = 255;

/// Longest comment, in characters.
pub const MAX_COMMENT_LEN: usize = 254;

/// A plain-text greyscale image.
///
/// Every `Image` is valid: dimensions are within `MAX_WIDTH` x `MAX_HEIGHT`,
/// `grey_max` is at least 1, the pixel buffer holds exactly
/// `width * height` row-major values, and no value exceeds `grey_max`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Image {
    pub(crate) comment: String,
    pub(crate) width: usize,
    pub(crate) height: usize,
    pub(crate) grey_max: u8,
    pub(crate) pixels: Vec<u8>,
}

impl Image {
    /// Build an image from its parts, checking every bound.
    pub fn new(width: usize, height: usize, grey_max: u8, pixels: Vec<u8>) -> Result<Self> {
        check_header(width, height, grey_max)?;

        if pixels.len() != width * height {
            return Err(PgmError::invalid_argument(format!(
                "expected {} pixels for a {}x{} image, got {}",
                width * height,
                width,
                height,
                pixels.len()
            )));
        }

        if let Some((index, &value)) = pixels.iter().enumerate().find(|&(_, &p)| p > grey_max) {
            return Err(PgmError::invalid_argument(format!(
                "pixel {} has value {} above grey max {}",
                index, value, grey_max
            )));
        }

        Ok(Self {
            comment: String::new(),
            width,
            height,
            grey_max,
            pixels,
        })
    }

    /// An image with every pixel set to `value`.
    pub fn filled(width: usize, height: usize, grey_max: u8, value: u8) -> Result<Self> {
        Self::new(width, height, grey_max, vec![value; width * height])
    }

    /// Builder-style comment setter.
    pub fn with_comment(mut self, comment: impl Into<String>) -> Result<Self> {
        self.set_comment(comment)?;
        Ok(self)
    }

    pub fn set_comment(&mut self, comment: impl Into<String>) -> Result<()> {
        let comment = comment.into();
        if comment.contains('\n') {
            return Err(PgmError::invalid_argument("comment must be a single line"));
        }
        if comment.chars().count() > MAX_COMMENT_LEN {
            return Err(PgmError::invalid_argument(format!(
                "comment is longer than {} characters",
                MAX_COMMENT_LEN
            )));
        }
        self.comment = comment;
        Ok(())
    }

    pub fn comment(&self) -> &str {
        &self.comment
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn grey_max(&self) -> u8 {
        self.grey_max
    }

    /// Row-major pixel values.
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    pub fn pixel_count(&self) -> usize {
        self.pixels.len()
    }

    /// Pixel at column `x`, row `y`, if in bounds.
    pub fn pixel(&self, x: usize, y: usize) -> Option<u8> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.pixels.get(y * self.width + x).copied()
    }

    /// Iterate over rows, top to bottom. A zero-width image still yields
    /// `height` empty rows.
    pub fn rows(&self) -> impl Iterator<Item = &[u8]> + '_ {
        let width = self.width;
        (0..self.height).map(move |y| &self.pixels[y * width..(y + 1) * width])
    }

    /// Attribute summary for display.
    pub fn info(&self) -> ImageInfo {
        ImageInfo {
            width: self.width,
            height: self.height,
            grey_max: self.grey_max,
            pixel_count: self.pixels.len(),
            comment: self.comment.clone(),
        }
    }
}

/// Check header values against the format bounds.
pub(crate) fn check_header(width: usize, height: usize, grey_max: u8) -> Result<()> {
    if width > MAX_WIDTH || height > MAX_HEIGHT {
        return Err(PgmError::invalid_argument(format!(
            "image size {}x{} exceeds {}x{}",
            width, height, MAX_WIDTH, MAX_HEIGHT
        )));
    }
    if grey_max == 0 {
        return Err(PgmError::invalid_argument("grey max must be at least 1"));
    }
    Ok(())
}

/// Image attributes, as printed by `pgm show`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImageInfo {
    pub width: usize,
    pub height: usize,
    pub grey_max: u8,
    pub pixel_count: usize,
    pub comment: String,
}

impl std::fmt::Display for ImageInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Descriptor: P2")?;
        writeln!(f, "Width: {}", self.width)?;
        writeln!(f, "Height: {}", self.height)?;
        writeln!(f, "Grey max: {}", self.grey_max)?;
        writeln!(f, "Pixels: {}", self.pixel_count)?;
        if !self.comment.is_empty() {
            writeln!(f, "Comment: {}", self.comment)?;
        }
        Ok(())
    }
}
