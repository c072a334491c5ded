//! Character sources with single-slot pushback.
//!
//! The lexer consumes any [`CharSource`]: "read one character or
//! end-of-input" plus "push back exactly the most recently read
//! character". One slot is all the lexer ever needs.

use std::io::BufRead;

use crate::error::{Error, Result};

/// A sequential character source supporting one character of unread.
pub trait CharSource {
    /// Reads the next character, or `None` at end of input.
    fn read_char(&mut self) -> Result<Option<char>>;

    /// Pushes back the most recently read character so the next
    /// `read_char` returns it again.
    ///
    /// The buffer holds a single character; unreading twice without an
    /// intervening read is a caller bug.
    fn unread(&mut self, ch: char);
}

/// [`CharSource`] over any buffered byte reader, decoding UTF-8 one
/// scalar value at a time.
pub struct PushbackReader<R> {
    inner: R,
    pushback: Option<char>,
}

impl<R: BufRead> PushbackReader<R> {
    /// Wraps a buffered reader
    pub fn new(inner: R) -> Self {
        PushbackReader {
            inner,
            pushback: None,
        }
    }

    fn next_byte(&mut self) -> Result<Option<u8>> {
        let buf = self.inner.fill_buf()?;
        let byte = match buf.first() {
            Some(b) => *b,
            None => return Ok(None),
        };
        self.inner.consume(1);
        Ok(Some(byte))
    }
}

impl<R: BufRead> CharSource for PushbackReader<R> {
    fn read_char(&mut self) -> Result<Option<char>> {
        if let Some(ch) = self.pushback.take() {
            return Ok(Some(ch));
        }

        let first = match self.next_byte()? {
            Some(b) => b,
            None => return Ok(None),
        };
        let len = utf8_sequence_len(first).ok_or(Error::InvalidUtf8)?;
        let mut bytes = [first, 0, 0, 0];
        for slot in bytes.iter_mut().take(len).skip(1) {
            // A truncated sequence at end of stream is invalid too.
            *slot = self.next_byte()?.ok_or(Error::InvalidUtf8)?;
        }
        let decoded = std::str::from_utf8(&bytes[..len]).map_err(|_| Error::InvalidUtf8)?;
        Ok(decoded.chars().next())
    }

    fn unread(&mut self, ch: char) {
        debug_assert!(
            self.pushback.is_none(),
            "pushback slot already occupied; the lexer never unreads twice"
        );
        self.pushback = Some(ch);
    }
}

/// Expected sequence length for a UTF-8 leading byte, `None` for a
/// continuation or invalid leading byte.
fn utf8_sequence_len(byte: u8) -> Option<usize> {
    match byte {
        0x00..=0x7F => Some(1),
        0xC2..=0xDF => Some(2),
        0xE0..=0xEF => Some(3),
        0xF0..=0xF4 => Some(4),
        _ => None,
    }
}

/// Infallible [`CharSource`] over an in-memory string, the natural fit
/// for one REPL line.
pub struct StrSource<'a> {
    chars: std::str::Chars<'a>,
    pushback: Option<char>,
}

impl<'a> StrSource<'a> {
    /// Creates a source reading from the start of `text`
    pub fn new(text: &'a str) -> Self {
        StrSource {
            chars: text.chars(),
            pushback: None,
        }
    }
}

impl<'a> From<&'a str> for StrSource<'a> {
    fn from(text: &'a str) -> Self {
        StrSource::new(text)
    }
}

impl CharSource for StrSource<'_> {
    fn read_char(&mut self) -> Result<Option<char>> {
        if let Some(ch) = self.pushback.take() {
            return Ok(Some(ch));
        }
        Ok(self.chars.next())
    }

    fn unread(&mut self, ch: char) {
        debug_assert!(
            self.pushback.is_none(),
            "pushback slot already occupied; the lexer never unreads twice"
        );
        self.pushback = Some(ch);
    }
}
