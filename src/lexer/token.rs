use serde::{Deserialize, Serialize};

/// A single token produced by one [`read_token`] call.
///
/// Tokens are plain value objects owned by the caller. A token may be
/// *incomplete*: the input ended in the middle of a construct that needs
/// more characters to finish (an unterminated string, or a dispatch `#`
/// with nothing after it). Interactive callers use that flag to request
/// another line instead of reporting a parse error.
///
/// [`read_token`]: crate::lexer::TokenReader::read_token
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// The kind of token
    pub kind: Kind,
    /// Captured text, for kinds that carry any.
    ///
    /// For `Symbol`, `Number`, `Char`, `Comment`, and `Unknown` this is
    /// the exact consumed text. For `String` it includes the opening
    /// quote (and the closing quote when complete). For `Dispatch` it is
    /// the single continuation character, absent when that character was
    /// pushed back or the input ended at the `#`.
    pub content: Option<String>,
    /// Whether the token is complete in its current form
    pub complete: bool,
}

impl Token {
    /// Creates a token with captured content
    pub fn with_content(kind: Kind, content: impl Into<String>, complete: bool) -> Self {
        Token {
            kind,
            content: Some(content.into()),
            complete,
        }
    }

    /// Creates a contentless token
    pub fn bare(kind: Kind, complete: bool) -> Self {
        Token {
            kind,
            content: None,
            complete,
        }
    }

    /// Number of characters of input this token accounts for, net of any
    /// trailing pushback performed while scanning it.
    ///
    /// `Eof` renders as zero characters, the single-character kinds as
    /// one, content-bearing kinds as their content length. `Dispatch`
    /// counts the `#` plus its payload (if any was retained).
    pub fn rendered_len(&self) -> u64 {
        let content_len = || self.content.as_deref().map_or(0, |s| s.chars().count()) as u64;
        match self.kind {
            Kind::Eof => 0,
            Kind::Dispatch => 1 + content_len(),
            Kind::Symbol
            | Kind::String
            | Kind::Number
            | Kind::Char
            | Kind::Comment
            | Kind::Unknown => content_len(),
            _ => 1,
        }
    }
}

/// The lexical vocabulary.
///
/// Bracket kinds are split per bracket pair; the lexer performs no
/// balancing, so a `ListOpen` may well be followed by a `VectorClose`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Kind {
    /// Bare symbol (also operators and other non-numeric words)
    Symbol,
    /// String literal, possibly unterminated
    String,
    /// Numeric literal, captured as opaque text without validation
    Number,
    /// Character literal such as `\a` or `\return`, name unvalidated
    Char,
    /// Line comment from `;` through the line terminator
    Comment,
    /// `'`
    Quote,
    /// `~`
    Unquote,
    /// `@`
    Deref,
    /// `^`
    Meta,
    /// `` ` ``
    SyntaxQuote,
    /// `(`
    ListOpen,
    /// `)`
    ListClose,
    /// `[`
    VectorOpen,
    /// `]`
    VectorClose,
    /// `{`
    MapOpen,
    /// `}`
    MapClose,
    /// `%` argument placeholder inside `#(...)` function literals
    Arg,
    /// `#` dispatch, carrying its one-character continuation when the
    /// continuation is not itself a structural opener
    Dispatch,
    /// End of input marker
    Eof,
    /// A significant character the classifier could not place
    Unknown,
}

impl Kind {
    /// The fixed one-character rendering for kinds whose text is implied
    /// entirely by the kind itself.
    pub fn fixed_char(&self) -> Option<char> {
        match self {
            Kind::Quote => Some('\''),
            Kind::Unquote => Some('~'),
            Kind::Deref => Some('@'),
            Kind::Meta => Some('^'),
            Kind::SyntaxQuote => Some('`'),
            Kind::ListOpen => Some('('),
            Kind::ListClose => Some(')'),
            Kind::VectorOpen => Some('['),
            Kind::VectorClose => Some(']'),
            Kind::MapOpen => Some('{'),
            Kind::MapClose => Some('}'),
            Kind::Arg => Some('%'),
            _ => None,
        }
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match (&self.kind, &self.content) {
            (Kind::Dispatch, Some(c)) => write!(f, "#{}", c),
            (Kind::Dispatch, None) => write!(f, "#"),
            (_, Some(c)) => write!(f, "{}", c),
            (Kind::Eof, None) => write!(f, "<eof>"),
            (kind, None) => match kind.fixed_char() {
                Some(ch) => write!(f, "{}", ch),
                None => write!(f, "<invalid>"),
            },
        }
    }
}
