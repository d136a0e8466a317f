//! Decoding input into Unicode scalar values.

use std::io::{self, BufRead, ErrorKind};
use std::str::Chars;

use crate::error::{Error, Result};

pub fn is_high_surrogate(unit: u16) -> bool {
    (0xD800..=0xDBFF).contains(&unit)
}

pub fn is_low_surrogate(unit: u16) -> bool {
    (0xDC00..=0xDFFF).contains(&unit)
}

/// Scalar for a single UTF-16 unit; surrogates are rejected
pub fn from_unit(unit: u16) -> Result<char> {
    char::from_u32(u32::from(unit)).ok_or(Error::SurrogateUnit(unit))
}

/// Scalar for a surrogate pair; both roles must match
pub fn from_pair(high: u16, low: u16) -> Result<char> {
    if !is_high_surrogate(high) {
        return Err(Error::NotHighSurrogate(high));
    }
    if !is_low_surrogate(low) {
        return Err(Error::NotLowSurrogate(low));
    }

    let code = 0x10000 + ((u32::from(high) - 0xD800) << 10) + (u32::from(low) - 0xDC00);
    char::from_u32(code).ok_or(Error::NotLowSurrogate(low))
}

/// A forward-only supply of scalars for the tokenizer
pub trait ScalarSource {
    /// Next scalar, `None` at end of input
    fn read_scalar(&mut self) -> Option<char>;

    /// IO failure that ended the input early, if any
    fn take_error(&mut self) -> Option<io::Error> {
        None
    }
}

pub struct StrScalars<'a> {
    chars: Chars<'a>,
}

impl<'a> StrScalars<'a> {
    pub fn new(text: &'a str) -> Self {
        Self { chars: text.chars() }
    }
}

impl ScalarSource for StrScalars<'_> {
    fn read_scalar(&mut self) -> Option<char> {
        self.chars.next()
    }
}

pub struct StringScalars {
    text: String,
    pos: usize,
}

impl StringScalars {
    pub fn new(text: String) -> Self {
        Self { text, pos: 0 }
    }
}

impl ScalarSource for StringScalars {
    fn read_scalar(&mut self) -> Option<char> {
        let c = self.text[self.pos..].chars().next()?;
        self.pos += c.len_utf8();
        Some(c)
    }
}

/// Merges surrogate pairs from a stream of UTF-16 units.
///
/// A lone low surrogate is skipped. A high surrogate at end of input ends the
/// stream. A high surrogate followed by anything other than a low surrogate is
/// dropped and the unit after it is decoded on its own.
pub struct Utf16Scalars<I> {
    units: I,
    pending: Option<u16>,
}

impl<I: Iterator<Item = u16>> Utf16Scalars<I> {
    pub fn new(units: I) -> Self {
        Self {
            units,
            pending: None,
        }
    }

    fn next_unit(&mut self) -> Option<u16> {
        self.pending.take().or_else(|| self.units.next())
    }
}

impl<I: Iterator<Item = u16>> ScalarSource for Utf16Scalars<I> {
    fn read_scalar(&mut self) -> Option<char> {
        loop {
            let unit = self.next_unit()?;

            if is_low_surrogate(unit) {
                tracing::trace!("skipping unpaired low surrogate {unit:#06x}");
                continue;
            }

            if !is_high_surrogate(unit) {
                return from_unit(unit).ok();
            }

            let Some(low) = self.units.next() else {
                tracing::trace!("high surrogate {unit:#06x} at end of input");
                return None;
            };

            match from_pair(unit, low) {
                Ok(c) => return Some(c),
                Err(_) => {
                    tracing::trace!("dropping unpaired high surrogate {unit:#06x}");
                    self.pending = Some(low);
                }
            }
        }
    }
}

/// Incremental UTF-8 decoding over a buffered reader.
///
/// Invalid bytes are skipped and decoding resumes at the next lead byte. A
/// sequence cut short by end of input ends the stream. Any IO error other than
/// `Interrupted` ends the stream and is kept for [`ScalarSource::take_error`].
pub struct ReadScalars<R> {
    reader: R,
    error: Option<io::Error>,
    failed: bool,
}

impl<R: BufRead> ReadScalars<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            error: None,
            failed: false,
        }
    }

    fn peek_byte(&mut self) -> Option<u8> {
        loop {
            match self.reader.fill_buf() {
                Ok([]) => return None,
                Ok([first, ..]) => return Some(*first),
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => {
                    tracing::warn!("Input ended by IO error: {}", e);
                    self.error = Some(e);
                    self.failed = true;
                    return None;
                }
            }
        }
    }
}

impl<R: BufRead> ScalarSource for ReadScalars<R> {
    fn read_scalar(&mut self) -> Option<char> {
        if self.failed {
            return None;
        }

        loop {
            let lead = self.peek_byte()?;
            self.reader.consume(1);

            let width = match lead {
                0x00..=0x7F => return Some(char::from(lead)),
                0xC2..=0xDF => 2,
                0xE0..=0xEF => 3,
                0xF0..=0xF4 => 4,
                _ => {
                    tracing::trace!("skipping invalid UTF-8 lead byte {lead:#04x}");
                    continue;
                }
            };

            let mut bytes = [lead, 0, 0, 0];
            let mut complete = true;
            for slot in bytes.iter_mut().take(width).skip(1) {
                match self.peek_byte() {
                    Some(b) if b & 0xC0 == 0x80 => {
                        *slot = b;
                        self.reader.consume(1);
                    }
                    Some(_) => {
                        complete = false;
                        break;
                    }
                    None => return None,
                }
            }

            if !complete {
                tracing::trace!("skipping truncated UTF-8 sequence");
                continue;
            }

            match std::str::from_utf8(&bytes[..width]) {
                Ok(s) => return s.chars().next(),
                Err(_) => {
                    tracing::trace!("skipping invalid UTF-8 sequence");
                    continue;
                }
            }
        }
    }

    fn take_error(&mut self) -> Option<io::Error> {
        self.error.take()
    }
}

#[cfg(test)]
mod tests {
    use std::io::{BufReader, Read};

    use super::*;

    fn drain(mut source: impl ScalarSource) -> String {
        let mut out = String::new();
        while let Some(c) = source.read_scalar() {
            out.push(c);
        }
        out
    }

    #[test]
    fn single_unit_rejects_surrogates() {
        assert_eq!(from_unit(0x0041).unwrap(), 'A');
        assert!(matches!(from_unit(0xD83D), Err(Error::SurrogateUnit(0xD83D))));
        assert!(matches!(from_unit(0xDE00), Err(Error::SurrogateUnit(0xDE00))));
    }

    #[test]
    fn pair_rejects_wrong_roles() {
        assert_eq!(from_pair(0xD83D, 0xDE00).unwrap(), '😀');
        assert!(matches!(from_pair(0x0041, 0xDE00), Err(Error::NotHighSurrogate(0x0041))));
        assert!(matches!(from_pair(0xD83D, 0x0041), Err(Error::NotLowSurrogate(0x0041))));
        assert!(matches!(from_pair(0xDE00, 0xD83D), Err(Error::NotHighSurrogate(0xDE00))));
    }

    #[test]
    fn utf16_pairs_are_merged() {
        let units: Vec<u16> = "a😀b".encode_utf16().collect();
        assert_eq!(drain(Utf16Scalars::new(units.into_iter())), "a😀b");
    }

    #[test]
    fn utf16_lone_low_surrogate_is_skipped() {
        let units = vec![0x0061, 0xDE00, 0x0062];
        assert_eq!(drain(Utf16Scalars::new(units.into_iter())), "ab");
    }

    #[test]
    fn utf16_high_surrogate_at_end_ends_stream() {
        let units = vec![0x0061, 0xD83D];
        assert_eq!(drain(Utf16Scalars::new(units.into_iter())), "a");
    }

    #[test]
    fn utf16_unpaired_high_surrogate_keeps_next_unit() {
        let units = vec![0x0061, 0xD83D, 0x0062, 0x0063];
        assert_eq!(drain(Utf16Scalars::new(units.into_iter())), "abc");
    }

    #[test]
    fn owned_string_source() {
        assert_eq!(drain(StringScalars::new("naïve 😀".to_string())), "naïve 😀");
    }

    #[test]
    fn reader_decodes_utf8() {
        let source = ReadScalars::new(BufReader::new("ünïcödé 😀".as_bytes()));
        assert_eq!(drain(source), "ünïcödé 😀");
    }

    #[test]
    fn reader_skips_invalid_bytes() {
        let bytes: &[u8] = b"ab\xFFcd\xE2\x82z";
        assert_eq!(drain(ReadScalars::new(bytes)), "abcdz");
    }

    #[test]
    fn reader_truncated_sequence_ends_stream() {
        let bytes: &[u8] = b"ab\xE2\x82";
        assert_eq!(drain(ReadScalars::new(bytes)), "ab");
    }

    #[test]
    fn reader_with_tiny_buffer() {
        // multi-byte sequences straddle buffer refills
        let reader = BufReader::with_capacity(1, "€uro ✓".as_bytes());
        assert_eq!(drain(ReadScalars::new(reader)), "€uro ✓");
    }

    struct FailingReader {
        served: bool,
    }

    impl Read for FailingReader {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            if self.served {
                return Err(io::Error::other("disk on fire"));
            }
            self.served = true;
            buf[..2].copy_from_slice(b"ok");
            Ok(2)
        }
    }

    #[test]
    fn reader_error_ends_stream_and_is_kept() {
        let mut source = ReadScalars::new(BufReader::new(FailingReader { served: false }));
        assert_eq!(source.read_scalar(), Some('o'));
        assert_eq!(source.read_scalar(), Some('k'));
        assert_eq!(source.read_scalar(), None);
        assert_eq!(source.read_scalar(), None);

        let err = source.take_error().unwrap();
        assert_eq!(err.to_string(), "disk on fire");
        assert!(source.take_error().is_none());
    }
}
