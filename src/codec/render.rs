//! Pixel grid rendering: exact values or character view.

use std::io::Write;

use crate::error::{PgmError, Result};
use crate::types::Image;

/// Write the pixel grid of `image` to `out`.
///
/// Without glyphs every pixel is printed as its decimal value followed by a
/// space, one row per line. With glyphs the range `0..=grey_max` is split
/// into `glyphs.len()` equal buckets and each pixel prints the glyph of its
/// bucket, with no separator.
pub fn render_pixels<W: Write>(image: &Image, out: &mut W, glyphs: Option<&str>) -> Result<()> {
    match glyphs {
        None => render_values(image, out),
        Some(glyphs) => {
            let glyphs: Vec<char> = glyphs.chars().collect();
            if glyphs.is_empty() {
                return Err(PgmError::invalid_argument("glyph set is empty")
                    .with_help("Pass at least one character, darkest first"));
            }
            render_glyphs(image, out, &glyphs)
        }
    }
}

fn render_values<W: Write>(image: &Image, out: &mut W) -> Result<()> {
    for row in image.rows() {
        for value in row {
            write!(out, "{} ", value)?;
        }
        writeln!(out)?;
    }
    Ok(())
}

fn render_glyphs<W: Write>(image: &Image, out: &mut W, glyphs: &[char]) -> Result<()> {
    let last = glyphs.len() - 1;
    let bucket_width = f32::from(image.grey_max) / glyphs.len() as f32;

    let mut line = String::with_capacity(image.width + 1);
    for row in image.rows() {
        line.clear();
        for &value in row {
            line.push(glyphs[bucket(value, bucket_width, last)]);
        }
        line.push('\n');
        out.write_all(line.as_bytes())?;
    }
    Ok(())
}

/// `value == grey_max` lands one past the last bucket and is pulled back.
fn bucket(value: u8, bucket_width: f32, last: usize) -> usize {
    ((f32::from(value) / bucket_width) as usize).min(last)
}

#[cfg(test)]
mod tests {
    use super::*;
    use insta::assert_snapshot;
    use pretty_assertions::assert_eq;

    fn render(image: &Image, glyphs: Option<&str>) -> String {
        let mut out = Vec::new();
        render_pixels(image, &mut out, glyphs).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_exact_values() {
        let image = Image::new(3, 2, 255, vec![0, 10, 255, 7, 8, 9]).unwrap();
        assert_eq!(render(&image, None), "0 10 255 \n7 8 9 \n");
    }

    #[test]
    fn test_exact_values_zero_width() {
        let image = Image::new(0, 2, 9, vec![]).unwrap();
        assert_eq!(render(&image, None), "\n\n");
    }

    #[test]
    fn test_character_view_gradient() {
        let pixels: Vec<u8> = (0..=9).collect();
        let image = Image::new(5, 2, 9, pixels).unwrap();
        let text = render(&image, Some("-.:#"));
        assert_snapshot!(text.trim_end(), @r"
        ---..
        ::###
        ");
    }

    #[test]
    fn test_character_view_max_value_clamped() {
        let image = Image::new(2, 1, 8, vec![0, 8]).unwrap();
        assert_eq!(render(&image, Some("ab")), "ab\n");
    }

    #[test]
    fn test_single_glyph() {
        let image = Image::new(3, 1, 255, vec![0, 100, 255]).unwrap();
        assert_eq!(render(&image, Some("#")), "###\n");
    }

    #[test]
    fn test_empty_glyphs_rejected() {
        let image = Image::new(1, 1, 9, vec![0]).unwrap();
        let mut out = Vec::new();
        let err = render_pixels(&image, &mut out, Some("")).unwrap_err();
        assert!(err.is_invalid_argument());
        assert!(out.is_empty());
    }

    #[test]
    fn test_bucket_boundaries() {
        // grey max 9 over 4 glyphs: buckets are 2.25 wide
        let image = Image::new(5, 1, 9, vec![2, 3, 5, 6, 7]).unwrap();
        assert_eq!(render(&image, Some("abcd")), "abccd\n");
        assert_eq!(bucket(5, 2.25, 3), 2);
        assert_eq!(bucket(9, 2.25, 3), 3);
    }

    #[test]
    fn test_full_range_buckets() {
        let image = Image::new(4, 1, 255, vec![0, 128, 191, 255]).unwrap();
        assert_eq!(render(&image, Some("abcd")), "accd\n");
    }
}
