//! PGM (P2) document encoding.

use std::io::Write;

use crate::error::Result;
use crate::types::Image;

use super::render_pixels;

/// Banner written in place of the image comment when requested.
pub const STANDARD_COMMENT: &str = "# PGM image output by pgmtool";

/// Write `image` as a P2 document.
///
/// The second line is either [`STANDARD_COMMENT`] or `#` followed by the
/// image's own comment.
pub fn encode<W: Write>(image: &Image, out: &mut W, use_standard_comment: bool) -> Result<()> {
    writeln!(out, "P2")?;
    if use_standard_comment {
        writeln!(out, "{}", STANDARD_COMMENT)?;
    } else {
        writeln!(out, "#{}", image.comment())?;
    }
    writeln!(out, "{} {}", image.width(), image.height())?;
    writeln!(out, "{}", image.grey_max())?;
    render_pixels(image, out, None)?;
    out.flush()?;
    Ok(())
}

/// Encode into an in-memory string.
pub fn encode_to_string(image: &Image, use_standard_comment: bool) -> Result<String> {
    let mut out = Vec::new();
    encode(image, &mut out, use_standard_comment)?;
    // only ASCII digits, spaces and the UTF-8 comment are written
    Ok(String::from_utf8_lossy(&out).into_owned())
}
