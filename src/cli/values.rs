//! Numeric argument parsers built on the PGM tokenizer.

use crate::codec::parse_unsigned;

/// Largest width/height accepted by `pgm create`.
pub const CREATE_MAX_SIDE: u64 = 100;

fn parse_in_range(text: &str, min: u64, max: u64) -> Result<u64, String> {
    let value = parse_unsigned(text).map_err(|_| format!("{:?} is not a number", text))?;
    if value < min || value > max {
        return Err(format!("expected a number in {}..={}", min, max));
    }
    Ok(value)
}

/// Width or height for a new image.
pub fn side(text: &str) -> Result<usize, String> {
    parse_in_range(text, 1, CREATE_MAX_SIDE).map(|v| v as usize)
}

pub fn grey_max(text: &str) -> Result<u8, String> {
    parse_in_range(text, 1, 255).map(|v| v as u8)
}

/// A pixel value; the grey max bound is checked when the image is built.
pub fn pixel(text: &str) -> Result<u8, String> {
    parse_in_range(text, 0, 255).map(|v| v as u8)
}

pub fn count(text: &str) -> Result<usize, String> {
    parse_in_range(text, 0, usize::MAX as u64).map(|v| v as usize)
}

pub fn scale(text: &str) -> Result<u32, String> {
    parse_in_range(text, 1, 64).map(|v| v as u32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_side() {
        assert_eq!(side("12"), Ok(12));
        assert_eq!(side(" 100 "), Ok(100));
        assert!(side("0").is_err());
        assert!(side("101").is_err());
        assert!(side("1x").is_err());
    }

    #[test]
    fn test_grey_max() {
        assert_eq!(grey_max("255"), Ok(255));
        assert!(grey_max("0").is_err());
        assert!(grey_max("256").is_err());
    }

    #[test]
    fn test_pixel() {
        assert_eq!(pixel("0"), Ok(0));
        assert!(pixel("-1").is_err());
    }

    #[test]
    fn test_scale() {
        assert_eq!(scale("4"), Ok(4));
        assert!(scale("0").is_err());
    }
}
