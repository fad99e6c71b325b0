//! pgmtool - plain-text PGM (P2) image library
//!
//! Reads and writes P2 greyscale images, renders them as numbers or
//! characters, and applies simple in-place effects (negative, flips,
//! rotations) plus a digit watermark.

pub mod cli;
pub mod codec;
pub mod config;
pub mod error;
pub mod output;
pub mod png;
pub mod transform;
pub mod types;

pub use codec::{
    decode, decode_with, encode, encode_to_string, parse_unsigned, render_pixels, DecodeOptions,
    Location, Tokenizer, STANDARD_COMMENT,
};
pub use config::Settings;
pub use error::{PgmError, Result};
pub use transform::{
    embed_info, extract_info, flip_horizontal, flip_vertical, negative, rotate_clockwise,
    FlipMode, Transform,
};
pub use types::{Image, ImageInfo, ImageSlot};
