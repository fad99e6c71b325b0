//! In-place image transforms.
//!
//! Transforms never change the comment or grey max. Rotation swaps width and
//! height; everything else keeps the dimensions.

mod geometry;
mod stego;

pub use geometry::{flip_horizontal, flip_vertical, negative, rotate_clockwise, FlipMode};
pub use stego::{embed_info, extract_info, MIN_EMBED_GREY_MAX};

use std::fmt;

use crate::types::Image;

/// A single image effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Transform {
    Negative,
    FlipHorizontal(FlipMode),
    FlipVertical(FlipMode),
    /// 90 degrees clockwise
    Rotate90,
    Rotate180,
    /// 270 degrees clockwise, i.e. 90 counter-clockwise
    Rotate270,
}

impl Transform {
    pub fn apply(self, image: &mut Image) {
        match self {
            Transform::Negative => negative(image),
            Transform::FlipHorizontal(mode) => flip_horizontal(image, mode),
            Transform::FlipVertical(mode) => flip_vertical(image, mode),
            Transform::Rotate90 => rotate_clockwise(image),
            Transform::Rotate180 => {
                rotate_clockwise(image);
                rotate_clockwise(image);
            }
            Transform::Rotate270 => {
                rotate_clockwise(image);
                rotate_clockwise(image);
                rotate_clockwise(image);
            }
        }
    }
}

impl fmt::Display for Transform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Transform::Negative => write!(f, "negative"),
            Transform::FlipHorizontal(_) => write!(f, "horizontal flip"),
            Transform::FlipVertical(_) => write!(f, "vertical flip"),
            Transform::Rotate90 => write!(f, "rotate 90"),
            Transform::Rotate180 => write!(f, "rotate 180"),
            Transform::Rotate270 => write!(f, "rotate 270"),
        }
    }
}
