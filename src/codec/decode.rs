//! PGM (P2) document decoding.

use std::io::BufRead;

use crate::error::{PgmError, Result};
use crate::types::image::{Image, MAX_COMMENT_LEN, MAX_GREY, MAX_HEIGHT, MAX_WIDTH};

use super::tokenizer::{is_space, Tokenizer};

/// Decoder settings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DecodeOptions {
    /// Store the `#` comment line in the decoded image. Off by default: the
    /// comment is skipped and the image comment stays empty.
    pub keep_comment: bool,
}

impl DecodeOptions {
    pub fn keep_comment(mut self, keep: bool) -> Self {
        self.keep_comment = keep;
        self
    }
}

/// Decode a P2 document with default options.
pub fn decode<R: BufRead>(reader: R) -> Result<Image> {
    decode_with(reader, &DecodeOptions::default())
}

/// Decode a P2 document.
///
/// Nothing is returned unless the header and all `width * height` pixels
/// parse and fall within bounds.
pub fn decode_with<R: BufRead>(reader: R, options: &DecodeOptions) -> Result<Image> {
    let mut tokens = Tokenizer::new(reader);

    read_magic(&mut tokens)?;
    let comment = read_comment(&mut tokens)?;

    let width = read_bounded(&mut tokens, "width", 0, MAX_WIDTH as u64)? as usize;
    let height = read_bounded(&mut tokens, "height", 0, MAX_HEIGHT as u64)? as usize;
    let grey_max = read_bounded(&mut tokens, "grey max", 1, u64::from(MAX_GREY))? as u8;

    let count = width * height;
    let mut pixels = Vec::with_capacity(count);
    for index in 0..count {
        let at = tokens.location();
        let value = tokens.read_unsigned().map_err(|e| {
            if e.is_format() {
                PgmError::format(
                    format!("pixel {} of {}: {}", index + 1, count, format_message(&e)),
                    at,
                )
            } else {
                e
            }
        })?;
        if value > u64::from(grey_max) {
            return Err(PgmError::format(
                format!("pixel value {} exceeds grey max {}", value, grey_max),
                at,
            ));
        }
        pixels.push(value as u8);
    }

    let mut image = Image {
        comment: String::new(),
        width,
        height,
        grey_max,
        pixels,
    };
    if options.keep_comment {
        if let Some(text) = comment {
            image.comment = text;
        }
    }
    Ok(image)
}

/// `P2` followed by nothing but whitespace up to the line feed.
fn read_magic<R: BufRead>(tokens: &mut Tokenizer<R>) -> Result<()> {
    let start = tokens.location();
    let magic = [tokens.next_byte()?, tokens.next_byte()?];
    if magic != [Some(b'P'), Some(b'2')] {
        return Err(PgmError::format("bad magic, expected P2", start)
            .with_help("Only plain-text greyscale (P2) files are supported"));
    }

    loop {
        let at = tokens.location();
        match tokens.next_byte()? {
            Some(b'\n') => return Ok(()),
            Some(b) if is_space(b) => continue,
            Some(b) => {
                return Err(PgmError::format(
                    format!("unexpected {:?} after magic number", b as char),
                    at,
                ))
            }
            None => return Err(PgmError::format("unexpected end of input after magic", at)),
        }
    }
}

/// Optional `#` line directly after the magic line.
fn read_comment<R: BufRead>(tokens: &mut Tokenizer<R>) -> Result<Option<String>> {
    let at = tokens.location();
    match tokens.peek_byte()? {
        None => Err(PgmError::format("unexpected end of input before header", at)),
        Some(b'#') => {
            tokens.next_byte()?;
            let mut text = Vec::new();
            loop {
                let at = tokens.location();
                match tokens.next_byte()? {
                    Some(b'\n') => break,
                    Some(b) => text.push(b),
                    None => {
                        return Err(PgmError::format(
                            "unexpected end of input in comment line",
                            at,
                        ))
                    }
                }
            }
            if text.last() == Some(&b'\r') {
                text.pop();
            }
            let comment: String = String::from_utf8_lossy(&text)
                .chars()
                .take(MAX_COMMENT_LEN)
                .collect();
            Ok(Some(comment))
        }
        Some(_) => Ok(None),
    }
}

fn read_bounded<R: BufRead>(
    tokens: &mut Tokenizer<R>,
    field: &str,
    min: u64,
    max: u64,
) -> Result<u64> {
    let at = tokens.location();
    let value = tokens.read_unsigned().map_err(|e| {
        if e.is_format() {
            PgmError::format(format!("{}: {}", field, format_message(&e)), at)
        } else {
            e
        }
    })?;
    if value < min || value > max {
        return Err(PgmError::format(
            format!("{} {} is outside {}..={}", field, value, min, max),
            at,
        ));
    }
    Ok(value)
}

fn format_message(err: &PgmError) -> String {
    match err {
        PgmError::Format { message, .. } => message.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decode_str(source: &str) -> Result<Image> {
        decode(source.as_bytes())
    }

    #[test]
    fn test_decode_with_comment() {
        let image = decode_str("P2\n# test\n2 2\n9\n1 2 3 4\n").unwrap();
        assert_eq!(image.width(), 2);
        assert_eq!(image.height(), 2);
        assert_eq!(image.grey_max(), 9);
        assert_eq!(image.pixels(), &[1, 2, 3, 4]);
    }

    #[test]
    fn test_comment_dropped_by_default() {
        let image = decode_str("P2\n# test\n1 1\n9\n1\n").unwrap();
        assert_eq!(image.comment(), "");
    }

    #[test]
    fn test_comment_kept_when_asked() {
        let options = DecodeOptions::default().keep_comment(true);
        let image = decode_with(&b"P2\n# test\r\n1 1\n9\n1\n"[..], &options).unwrap();
        assert_eq!(image.comment(), " test");
    }

    #[test]
    fn test_long_comment_truncated() {
        let source = format!("P2\n#{}\n1 1\n9\n1\n", "c".repeat(400));
        let options = DecodeOptions::default().keep_comment(true);
        let image = decode_with(source.as_bytes(), &options).unwrap();
        assert_eq!(image.comment().len(), MAX_COMMENT_LEN);
    }

    #[test]
    fn test_decode_without_comment() {
        let image = decode_str("P2\n3 1\n255\n0 128 255").unwrap();
        assert_eq!(image.pixels(), &[0, 128, 255]);
    }

    #[test]
    fn test_trailing_spaces_on_magic_line() {
        assert!(decode_str("P2  \t\n1 1\n1\n0\n").is_ok());
    }

    #[test]
    fn test_bad_magic() {
        assert!(decode_str("P5\n1 1\n1\n0\n").unwrap_err().is_format());
        assert!(decode_str("p2\n1 1\n1\n0\n").unwrap_err().is_format());
        assert!(decode_str("P").unwrap_err().is_format());
        assert!(decode_str("").unwrap_err().is_format());
    }

    #[test]
    fn test_garbage_after_magic() {
        assert!(decode_str("P2 x\n1 1\n1\n0\n").unwrap_err().is_format());
        assert!(decode_str("P2 1 1 1 0").unwrap_err().is_format());
    }

    #[test]
    fn test_end_of_input_after_magic_line() {
        assert!(decode_str("P2\n").unwrap_err().is_format());
    }

    #[test]
    fn test_unterminated_comment() {
        assert!(decode_str("P2\n# no newline").unwrap_err().is_format());
    }

    #[test]
    fn test_header_bounds() {
        assert!(decode_str("P2\n301 1\n9\n").unwrap_err().is_format());
        assert!(decode_str("P2\n1 301\n9\n").unwrap_err().is_format());
        assert!(decode_str("P2\n1 1\n0\n0\n").unwrap_err().is_format());
        assert!(decode_str("P2\n1 1\n256\n0\n").unwrap_err().is_format());
    }

    #[test]
    fn test_zero_dimensions() {
        let image = decode_str("P2\n0 0\n1\n").unwrap();
        assert_eq!(image.pixel_count(), 0);
    }

    #[test]
    fn test_missing_pixels() {
        assert!(decode_str("P2\n2 2\n9\n1 2 3\n").unwrap_err().is_format());
    }

    #[test]
    fn test_non_numeric_pixel() {
        assert!(decode_str("P2\n2 1\n9\n1 a\n").unwrap_err().is_format());
    }

    #[test]
    fn test_pixel_above_grey_max_rejected() {
        let err = decode_str("P2\n2 1\n9\n1 10\n").unwrap_err();
        match err {
            PgmError::Format { location, .. } => assert_eq!(location.line, 4),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_extra_tokens_ignored() {
        let image = decode_str("P2\n1 1\n9\n1 2 3\n").unwrap();
        assert_eq!(image.pixels(), &[1]);
    }

    #[test]
    fn test_second_comment_rejected() {
        assert!(decode_str("P2\n# a\n# b\n1 1\n9\n1\n")
            .unwrap_err()
            .is_format());
    }
}
