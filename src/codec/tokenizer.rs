//! Whitespace-delimited unsigned integer reader.

use std::io::BufRead;

use crate::error::{PgmError, Result};

use super::Location;

/// Longest digit run accepted for a single number.
pub const MAX_DIGITS: usize = 49;

/// Whitespace as the C locale defines it (includes vertical tab).
pub(crate) fn is_space(byte: u8) -> bool {
    matches!(byte, b' ' | b'\t' | b'\n' | b'\x0b' | b'\x0c' | b'\r')
}

/// Byte-level reader over a buffered stream with one byte of lookahead.
pub struct Tokenizer<R> {
    inner: R,
    location: Location,
}

impl<R: BufRead> Tokenizer<R> {
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            location: Location::default(),
        }
    }

    /// Position of the next unread byte.
    pub fn location(&self) -> Location {
        self.location
    }

    /// Look at the next byte without consuming it.
    pub fn peek_byte(&mut self) -> Result<Option<u8>> {
        let buf = self.inner.fill_buf()?;
        Ok(buf.first().copied())
    }

    /// Consume and return the next byte, `None` at end of input.
    pub fn next_byte(&mut self) -> Result<Option<u8>> {
        let byte = self.peek_byte()?;
        if let Some(b) = byte {
            self.inner.consume(1);
            self.location.advance(b);
        }
        Ok(byte)
    }

    /// Read the next unsigned integer.
    ///
    /// Leading whitespace is skipped and the whitespace byte ending the
    /// number is consumed. End of input directly after the digits is fine.
    /// A value too large for `u64` saturates; callers apply their own bounds.
    pub fn read_unsigned(&mut self) -> Result<u64> {
        let first = loop {
            let at = self.location;
            match self.next_byte()? {
                Some(b) if is_space(b) => continue,
                Some(b) if b.is_ascii_digit() => break b,
                Some(b) => {
                    return Err(PgmError::format(
                        format!("expected a number, found {:?}", b as char),
                        at,
                    ))
                }
                None => {
                    return Err(PgmError::format(
                        "expected a number, found end of input",
                        at,
                    ))
                }
            }
        };

        let start = self.location;
        let mut value = u64::from(first - b'0');
        let mut digits = 1;

        loop {
            let at = self.location;
            match self.next_byte()? {
                None => break,
                Some(b) if is_space(b) => break,
                Some(b) if b.is_ascii_digit() => {
                    digits += 1;
                    if digits > MAX_DIGITS {
                        return Err(PgmError::format(
                            format!("number is longer than {} digits", MAX_DIGITS),
                            start,
                        ));
                    }
                    value = value
                        .checked_mul(10)
                        .and_then(|v| v.checked_add(u64::from(b - b'0')))
                        .unwrap_or(u64::MAX);
                }
                Some(b) => {
                    return Err(PgmError::format(
                        format!("unexpected {:?} inside a number", b as char),
                        at,
                    ))
                }
            }
        }

        Ok(value)
    }
}

/// Parse an unsigned integer from a string.
///
/// Same rules as [`Tokenizer::read_unsigned`], with the end of the string
/// acting as end of input. Text after the number's terminating whitespace is
/// ignored.
pub fn parse_unsigned(text: &str) -> Result<u64> {
    Tokenizer::new(text.as_bytes()).read_unsigned()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn read_all(source: &str) -> Result<Vec<u64>> {
        let mut tokenizer = Tokenizer::new(source.as_bytes());
        let mut values = Vec::new();
        while tokenizer.peek_byte()?.is_some() {
            values.push(tokenizer.read_unsigned()?);
        }
        Ok(values)
    }

    #[test]
    fn test_number_at_end_of_stream() {
        assert_eq!(parse_unsigned("42").unwrap(), 42);
    }

    #[test]
    fn test_leading_whitespace() {
        assert_eq!(parse_unsigned(" \t\r\n\x0b\x0c7 ").unwrap(), 7);
    }

    #[test]
    fn test_trailing_garbage_inside_number() {
        let err = parse_unsigned("  42x").unwrap_err();
        assert!(err.is_format());
    }

    #[test]
    fn test_non_digit_start() {
        assert!(parse_unsigned("x42").unwrap_err().is_format());
        assert!(parse_unsigned("-1").unwrap_err().is_format());
        assert!(parse_unsigned("+1").unwrap_err().is_format());
    }

    #[test]
    fn test_empty_input() {
        assert!(parse_unsigned("").unwrap_err().is_format());
        assert!(parse_unsigned("   ").unwrap_err().is_format());
    }

    #[test]
    fn test_digit_limit() {
        let ok = "1".repeat(MAX_DIGITS);
        assert!(parse_unsigned(&ok).is_ok());

        let too_long = "1".repeat(50);
        assert!(parse_unsigned(&too_long).unwrap_err().is_format());
    }

    #[test]
    fn test_overflow_saturates() {
        let huge = "9".repeat(30);
        assert_eq!(parse_unsigned(&huge).unwrap(), u64::MAX);
    }

    #[test]
    fn test_leading_zeros() {
        assert_eq!(parse_unsigned("007").unwrap(), 7);
    }

    #[test]
    fn test_text_after_number_ignored() {
        assert_eq!(parse_unsigned("12 abc").unwrap(), 12);
    }

    #[test]
    fn test_stream_sequence() {
        assert_eq!(read_all("1 2\n3\t4").unwrap(), vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_terminator_consumed() {
        let mut tokenizer = Tokenizer::new(&b"5\n#"[..]);
        assert_eq!(tokenizer.read_unsigned().unwrap(), 5);
        assert_eq!(tokenizer.peek_byte().unwrap(), Some(b'#'));
    }

    #[test]
    fn test_error_location() {
        let mut tokenizer = Tokenizer::new(&b"1\n 2y"[..]);
        tokenizer.read_unsigned().unwrap();
        match tokenizer.read_unsigned().unwrap_err() {
            PgmError::Format { location, .. } => {
                assert_eq!(location.line, 2);
                assert_eq!(location.column, 3);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
