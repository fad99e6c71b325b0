//! Core domain types for pgmtool.
//!
//! - `Image` - a validated P2 greyscale image
//! - `ImageSlot` - holds at most one image for a session
//! - `ImageInfo` - printable image attributes

pub mod image;
mod slot;

pub use image::{Image, ImageInfo, MAX_COMMENT_LEN, MAX_GREY, MAX_HEIGHT, MAX_WIDTH};
pub use slot::ImageSlot;
