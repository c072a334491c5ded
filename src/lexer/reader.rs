use tracing::trace;

use super::classify::{self, PendingKind};
use super::source::CharSource;
use super::token::{Kind, Token};
use crate::error::Result;

/// Incremental token reader for Clojure-style forms.
///
/// One instance serves one logical input stream (a REPL line, or a buffer
/// that grows across lines). Each [`read_token`](Self::read_token) call
/// consumes just enough characters for one token; the cumulative number
/// of characters consumed is available as [`advance`](Self::advance), so
/// a caller can recover the exact consumed substring for any token.
///
/// The reader holds no other state between calls. A token cut short by
/// end of input comes back with `complete == false` together with
/// everything captured so far; to resume, the caller re-presents the
/// remaining input from the position the advance counter indicates.
///
/// Not thread-safe: callers serialize access.
#[derive(Debug, Default)]
pub struct TokenReader {
    advance: u64,
}

impl TokenReader {
    /// Creates a reader positioned at the start of a logical stream
    pub fn new() -> Self {
        TokenReader::default()
    }

    /// Cumulative count of characters consumed since creation or the
    /// last [`reset`](Self::reset), net of pushback
    pub fn advance(&self) -> u64 {
        self.advance
    }

    /// Zeroes the advance counter for reuse on a new logical stream.
    /// The underlying source is untouched.
    pub fn reset(&mut self) {
        self.advance = 0;
    }

    fn read<S: CharSource>(&mut self, src: &mut S) -> Result<Option<char>> {
        let out = src.read_char()?;
        if out.is_some() {
            self.advance += 1;
        }
        Ok(out)
    }

    fn unread<S: CharSource>(&mut self, src: &mut S, ch: Option<char>) {
        if let Some(c) = ch {
            src.unread(c);
            self.advance -= 1;
        }
    }

    /// Consumes and discards whitespace and comma separators, returning
    /// the next significant character, or `None` at end of input. Every
    /// consumed character counts toward the advance.
    pub fn advance_to_dispatch_char<S: CharSource>(&mut self, src: &mut S) -> Result<Option<char>> {
        loop {
            match self.read(src)? {
                Some(c) if classify::is_separator(c) => continue,
                other => return Ok(other),
            }
        }
    }

    /// Reads exactly one token.
    ///
    /// Never fails on malformed text: unclassifiable characters come back
    /// as [`Kind::Unknown`] and truncation is reported through the
    /// completeness flag. Once end of input has been observed, every
    /// further call returns the [`Kind::Eof`] marker without consuming
    /// anything.
    pub fn read_token<S: CharSource>(&mut self, src: &mut S) -> Result<Token> {
        let dispatch_char = self.advance_to_dispatch_char(src)?;
        let token = match (classify::classify(dispatch_char), dispatch_char) {
            (PendingKind::Eof, _) | (_, None) => Token::bare(Kind::Eof, true),
            (pending, Some(first)) => match pending {
                PendingKind::Symbol => self.read_symbol(src, first)?,
                PendingKind::SymbolOrNumber => self.read_symbol_or_number(src, first)?,
                PendingKind::String => self.read_string(src, first)?,
                PendingKind::Number => self.read_number(src, first)?,
                PendingKind::Char => self.read_char_literal(src, first)?,
                PendingKind::Comment => self.read_comment(src, first)?,
                PendingKind::Quote => Token::bare(Kind::Quote, true),
                PendingKind::Unquote => Token::bare(Kind::Unquote, true),
                PendingKind::Deref => Token::bare(Kind::Deref, true),
                PendingKind::Meta => Token::bare(Kind::Meta, true),
                PendingKind::SyntaxQuote => Token::bare(Kind::SyntaxQuote, true),
                PendingKind::Open => read_open(first),
                PendingKind::Close => read_close(first),
                PendingKind::Arg => Token::bare(Kind::Arg, true),
                PendingKind::Dispatch => self.read_dispatch(src)?,
                PendingKind::Invalid => Token::with_content(Kind::Unknown, first.to_string(), true),
                PendingKind::Eof => Token::bare(Kind::Eof, true),
            },
        };
        trace!(kind = ?token.kind, complete = token.complete, advance = self.advance, "read token");
        Ok(token)
    }

    /// Bare symbol: runs until a separator or terminating macro
    /// character, which stays in the source for the next call.
    fn read_symbol<S: CharSource>(&mut self, src: &mut S, first: char) -> Result<Token> {
        let mut text = String::new();
        text.push(first);
        loop {
            match self.read(src)? {
                Some(c) if !classify::is_separator(c) && !classify::is_terminating_macro_char(c) => {
                    text.push(c)
                }
                terminal => {
                    self.unread(src, terminal);
                    return Ok(Token::with_content(Kind::Symbol, text, true));
                }
            }
        }
    }

    /// `+` or `-` lead: one character of lookahead decides. A digit makes
    /// it a number with the sign as first character; anything else
    /// (including end of input) makes it an ordinary symbol.
    fn read_symbol_or_number<S: CharSource>(&mut self, src: &mut S, sign: char) -> Result<Token> {
        let peeked = self.read(src)?;
        self.unread(src, peeked);
        if peeked.is_some_and(|c| c.is_ascii_digit()) {
            self.read_number(src, sign)
        } else {
            self.read_symbol(src, sign)
        }
    }

    /// Number: payload is opaque text, validated downstream. Unlike the
    /// symbol scan, every macro character terminates it.
    fn read_number<S: CharSource>(&mut self, src: &mut S, first: char) -> Result<Token> {
        let mut text = String::new();
        text.push(first);
        loop {
            let ch = self.read(src)?;
            if classify::is_basic_terminal(ch) {
                self.unread(src, ch);
                return Ok(Token::with_content(Kind::Number, text, true));
            }
            if let Some(c) = ch {
                text.push(c);
            }
        }
    }

    /// String: content keeps the opening quote, a backslash escapes the
    /// following character verbatim (macro characters included), and only
    /// an unescaped closing quote completes it.
    fn read_string<S: CharSource>(&mut self, src: &mut S, first: char) -> Result<Token> {
        let mut text = String::new();
        text.push(first);
        let mut complete = false;
        while let Some(c) = self.read(src)? {
            text.push(c);
            if c == '"' {
                complete = true;
                break;
            }
            if c == '\\' {
                match self.read(src)? {
                    Some(escaped) => text.push(escaped),
                    // Input ended right after the backslash.
                    None => break,
                }
            }
        }
        Ok(Token::with_content(Kind::String, text, complete))
    }

    /// Character literal: `\` plus everything up to the next terminal.
    /// Multi-character names like `\return` are captured without
    /// validation.
    fn read_char_literal<S: CharSource>(&mut self, src: &mut S, first: char) -> Result<Token> {
        let mut text = String::new();
        text.push(first);
        loop {
            match self.read(src)? {
                Some(c) if !classify::is_separator(c) && !classify::is_terminating_macro_char(c) => {
                    text.push(c)
                }
                terminal => {
                    self.unread(src, terminal);
                    return Ok(Token::with_content(Kind::Char, text, true));
                }
            }
        }
    }

    /// Comment: `;` through and including the line terminator, or to end
    /// of input (still complete either way).
    fn read_comment<S: CharSource>(&mut self, src: &mut S, first: char) -> Result<Token> {
        let mut text = String::new();
        text.push(first);
        while let Some(c) = self.read(src)? {
            text.push(c);
            if c == '\n' || c == '\r' {
                break;
            }
        }
        Ok(Token::with_content(Kind::Comment, text, true))
    }

    /// Dispatch `#`: peeks exactly one character. An opener that starts a
    /// structural form (`#(`, `#{`) is pushed back so the next call emits
    /// the matching open token; end of input yields an incomplete
    /// dispatch; anything else becomes the token's payload.
    fn read_dispatch<S: CharSource>(&mut self, src: &mut S) -> Result<Token> {
        match self.read(src)? {
            None => Ok(Token::bare(Kind::Dispatch, false)),
            Some(c @ ('(' | '{')) => {
                self.unread(src, Some(c));
                Ok(Token::bare(Kind::Dispatch, true))
            }
            Some(c) => Ok(Token::with_content(Kind::Dispatch, c.to_string(), true)),
        }
    }
}

// The two bracket mappings are driven by the classifier; reaching them
// with any other character is a driver bug, not a parse error.

fn read_open(ch: char) -> Token {
    let kind = match ch {
        '(' => Kind::ListOpen,
        '[' => Kind::VectorOpen,
        '{' => Kind::MapOpen,
        other => unreachable!("non-open character passed to read_open: {other:?}"),
    };
    Token::bare(kind, true)
}

fn read_close(ch: char) -> Token {
    let kind = match ch {
        ')' => Kind::ListClose,
        ']' => Kind::VectorClose,
        '}' => Kind::MapClose,
        other => unreachable!("non-close character passed to read_close: {other:?}"),
    };
    Token::bare(kind, true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::StrSource;

    fn lex_all(input: &str) -> Vec<Token> {
        let mut reader = TokenReader::new();
        let mut src = StrSource::new(input);
        let mut out = Vec::new();
        loop {
            let token = reader.read_token(&mut src).unwrap();
            let done = token.kind == Kind::Eof;
            out.push(token);
            if done {
                break;
            }
        }
        out
    }

    #[test]
    fn test_symbol_scan_pushes_back_terminal() {
        let mut reader = TokenReader::new();
        let mut src = StrSource::new("foo)");
        let token = reader.read_token(&mut src).unwrap();
        assert_eq!(token, Token::with_content(Kind::Symbol, "foo", true));
        assert_eq!(reader.advance(), 3);
        // The `)` is still there for the next call.
        let token = reader.read_token(&mut src).unwrap();
        assert_eq!(token.kind, Kind::ListClose);
        assert_eq!(reader.advance(), 4);
    }

    #[test]
    fn test_symbol_termination_policy() {
        // `^` splits, `#` `'` `%` do not.
        let tokens = lex_all("asdf^asdf");
        assert_eq!(tokens[0], Token::with_content(Kind::Symbol, "asdf", true));
        assert_eq!(tokens[1].kind, Kind::Meta);
        assert_eq!(tokens[2], Token::with_content(Kind::Symbol, "asdf", true));

        let tokens = lex_all("asdf#asdf");
        assert_eq!(
            tokens[0],
            Token::with_content(Kind::Symbol, "asdf#asdf", true)
        );
        let tokens = lex_all("asdf'asdf");
        assert_eq!(
            tokens[0],
            Token::with_content(Kind::Symbol, "asdf'asdf", true)
        );
    }

    #[test]
    fn test_sign_disambiguation() {
        assert_eq!(lex_all("+1")[0], Token::with_content(Kind::Number, "+1", true));
        assert_eq!(lex_all("-1")[0], Token::with_content(Kind::Number, "-1", true));
        assert_eq!(lex_all("+")[0], Token::with_content(Kind::Symbol, "+", true));
        assert_eq!(lex_all("-")[0], Token::with_content(Kind::Symbol, "-", true));
        assert_eq!(
            lex_all("+foo")[0],
            Token::with_content(Kind::Symbol, "+foo", true)
        );
    }

    #[test]
    fn test_string_completeness() {
        assert_eq!(
            lex_all("\"abc\"")[0],
            Token::with_content(Kind::String, "\"abc\"", true)
        );
        assert_eq!(
            lex_all("\"abc")[0],
            Token::with_content(Kind::String, "\"abc", false)
        );
    }

    #[test]
    fn test_string_escape_spans_quote() {
        let tokens = lex_all("\"a\\\"b\"");
        assert_eq!(
            tokens[0],
            Token::with_content(Kind::String, "\"a\\\"b\"", true)
        );
        assert_eq!(tokens[1].kind, Kind::Eof);
    }

    #[test]
    fn test_string_ending_in_backslash_is_incomplete() {
        assert_eq!(
            lex_all("\"abc\\")[0],
            Token::with_content(Kind::String, "\"abc\\", false)
        );
    }

    #[test]
    fn test_comment_with_and_without_newline() {
        assert_eq!(
            lex_all("; foo\n")[0],
            Token::with_content(Kind::Comment, "; foo\n", true)
        );
        assert_eq!(
            lex_all("; foo")[0],
            Token::with_content(Kind::Comment, "; foo", true)
        );
    }

    #[test]
    fn test_dispatch_forms() {
        // Payload retained for e.g. `#_`, `#'`.
        assert_eq!(
            lex_all("#_")[0],
            Token::with_content(Kind::Dispatch, "_", true)
        );
        // Structural opener pushed back.
        let tokens = lex_all("#{}");
        assert_eq!(tokens[0], Token::bare(Kind::Dispatch, true));
        assert_eq!(tokens[1].kind, Kind::MapOpen);
        assert_eq!(tokens[2].kind, Kind::MapClose);
        // Lone `#` at end of input is the incomplete case.
        assert_eq!(lex_all("#")[0], Token::bare(Kind::Dispatch, false));
    }

    #[test]
    fn test_character_literals() {
        assert_eq!(
            lex_all("\\return")[0],
            Token::with_content(Kind::Char, "\\return", true)
        );
        let tokens = lex_all("\\a\\b");
        assert_eq!(tokens[0], Token::with_content(Kind::Char, "\\a", true));
        assert_eq!(tokens[1], Token::with_content(Kind::Char, "\\b", true));
    }

    #[test]
    fn test_no_bracket_balancing() {
        let tokens = lex_all("(]");
        assert_eq!(tokens[0].kind, Kind::ListOpen);
        assert_eq!(tokens[1].kind, Kind::VectorClose);
        assert_eq!(tokens[2].kind, Kind::Eof);
    }

    #[test]
    fn test_eof_idempotence() {
        let mut reader = TokenReader::new();
        let mut src = StrSource::new("x");
        assert_eq!(reader.read_token(&mut src).unwrap().kind, Kind::Symbol);
        for _ in 0..3 {
            assert_eq!(reader.read_token(&mut src).unwrap().kind, Kind::Eof);
            assert_eq!(reader.advance(), 1);
        }
    }

    #[test]
    fn test_reset_keeps_source_position() {
        let mut reader = TokenReader::new();
        let mut src = StrSource::new("foo bar");
        reader.read_token(&mut src).unwrap();
        assert_eq!(reader.advance(), 3);
        reader.reset();
        assert_eq!(reader.advance(), 0);
        // Scanning continues from where the source was left.
        let token = reader.read_token(&mut src).unwrap();
        assert_eq!(token, Token::with_content(Kind::Symbol, "bar", true));
        assert_eq!(reader.advance(), 4);
    }
}
