//! Text codec for PGM (P2) images.
//!
//! # Format
//!
//! ```text
//! P2
//! # optional comment line
//! <width> <height>
//! <grey max>
//! <width * height whitespace separated values, row-major>
//! ```
//!
//! Width and height are limited to 300, grey max to `1..=255`.
//!
//! # Usage
//!
//! ```ignore
//! use pgmtool::codec::{decode, encode};
//!
//! let file = std::io::BufReader::new(std::fs::File::open("in.pgm")?);
//! let image = decode(file)?;
//! encode(&image, &mut std::io::stdout(), false)?;
//! ```

mod decode;
mod encode;
mod location;
mod render;
pub mod tokenizer;

pub use decode::{decode, decode_with, DecodeOptions};
pub use encode::{encode, encode_to_string, STANDARD_COMMENT};
pub use location::Location;
pub use render::render_pixels;
pub use tokenizer::{parse_unsigned, Tokenizer};
