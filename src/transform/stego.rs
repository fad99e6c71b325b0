//! Digit watermarking in the last decimal digit of each pixel.
//!
//! Digit `i` of the message replaces the ones digit of pixel `i`. When the
//! result would exceed `grey_max` it is lowered by ten, which keeps the digit
//! and stays in range. Reading `pixel % 10` recovers the message.

use crate::error::{PgmError, Result};
use crate::types::Image;

/// Smallest grey max that leaves room for every digit.
pub const MIN_EMBED_GREY_MAX: u8 = 9;

/// Write the digits of `info` into the first `info.len()` pixels.
///
/// Fails with `InvalidState` when `grey_max` is below 9, and with
/// `InvalidArgument` when `info` has a non-digit character or more digits
/// than the image has pixels. The image is unchanged on failure.
pub fn embed_info(image: &mut Image, info: &str) -> Result<()> {
    if image.grey_max < MIN_EMBED_GREY_MAX {
        return Err(PgmError::invalid_state(format!(
            "cannot embed: grey max {} is below {}",
            image.grey_max, MIN_EMBED_GREY_MAX
        ))
        .with_help("The image needs at least ten grey levels"));
    }

    if let Some(c) = info.chars().find(|c| !c.is_ascii_digit()) {
        return Err(PgmError::invalid_argument(format!(
            "cannot embed {:?}: only the digits 0-9 can be embedded",
            c
        )));
    }

    if info.len() > image.pixels.len() {
        return Err(PgmError::invalid_argument(format!(
            "cannot embed {} digits into {} pixels",
            info.len(),
            image.pixels.len()
        )));
    }

    let max = u16::from(image.grey_max);
    for (pixel, digit) in image.pixels.iter_mut().zip(info.bytes()) {
        let mut value = u16::from(*pixel) / 10 * 10 + u16::from(digit - b'0');
        if value > max {
            value -= 10;
        }
        *pixel = value as u8;
    }

    Ok(())
}

/// Read back `len` embedded digits.
pub fn extract_info(image: &Image, len: usize) -> Result<String> {
    if len > image.pixels.len() {
        return Err(PgmError::invalid_argument(format!(
            "cannot read {} digits from {} pixels",
            len,
            image.pixels.len()
        )));
    }

    Ok(image.pixels[..len]
        .iter()
        .map(|&p| char::from(b'0' + p % 10))
        .collect())
}
