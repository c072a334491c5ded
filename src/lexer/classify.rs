//! Leading-character classification.
//!
//! A fixed table over the ASCII range maps the first significant
//! character of a token to the coarse [`PendingKind`] bucket that selects
//! a sub-scanner. Characters outside the table lex as bare symbols.

/// Coarse classification bucket, used only to pick a sub-scanner.
///
/// Several buckets fan out to multiple final token kinds: `Open` yields
/// list/vector/map-open depending on the bracket, and `SymbolOrNumber`
/// resolves after one character of lookahead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum PendingKind {
    Symbol,
    SymbolOrNumber,
    String,
    Number,
    Char,
    Comment,
    Quote,
    Unquote,
    Deref,
    Meta,
    SyntaxQuote,
    Open,
    Close,
    Arg,
    Dispatch,
    Invalid,
    Eof,
}

/// Whitespace and the comma separator are skipped before classification
/// and terminate bare-symbol scans.
pub(crate) fn is_separator(ch: char) -> bool {
    ch == ',' || ch.is_whitespace()
}

/// Classifies the next significant character (or end-of-input) into the
/// bucket that selects a sub-scanner.
pub(crate) fn classify(ch: Option<char>) -> PendingKind {
    let ch = match ch {
        None => return PendingKind::Eof,
        Some(c) => c,
    };
    if is_separator(ch) {
        return PendingKind::Invalid;
    }
    pending_for(ch)
}

/// The dispatch table proper. Unmapped characters (including everything
/// beyond ASCII) default to the bare-symbol bucket.
fn pending_for(ch: char) -> PendingKind {
    match ch {
        '0'..='9' => PendingKind::Number,
        '+' | '-' => PendingKind::SymbolOrNumber,
        '"' => PendingKind::String,
        ';' => PendingKind::Comment,
        '\'' => PendingKind::Quote,
        '@' => PendingKind::Deref,
        '^' => PendingKind::Meta,
        '`' => PendingKind::SyntaxQuote,
        '~' => PendingKind::Unquote,
        '(' | '[' | '{' => PendingKind::Open,
        ')' | ']' | '}' => PendingKind::Close,
        '\\' => PendingKind::Char,
        '%' => PendingKind::Arg,
        '#' => PendingKind::Dispatch,
        _ => PendingKind::Symbol,
    }
}

/// A character with macro significance: it introduces a structural or
/// quoting construct rather than participating in an ordinary symbol.
pub(crate) fn is_macro_char(ch: char) -> bool {
    !ch.is_ascii_digit() && ch != '+' && ch != '-' && pending_for(ch) != PendingKind::Symbol
}

/// Macro characters that unconditionally end an in-progress symbol,
/// number, or character-literal scan.
///
/// `#`, `'`, and `%` are deliberately excluded: they may appear inside a
/// bare symbol without separating whitespace (`asdf#asdf` is one symbol),
/// while every other macro character splits the scan (`asdf^asdf` lexes
/// as symbol, meta, symbol).
pub(crate) fn is_terminating_macro_char(ch: char) -> bool {
    ch != '#' && ch != '\'' && ch != '%' && is_macro_char(ch)
}

/// A character that ends a bare-symbol/number scan: end-of-input,
/// separator, whitespace, or any macro-significant character.
pub(crate) fn is_basic_terminal(ch: Option<char>) -> bool {
    match ch {
        None => true,
        Some(c) => is_separator(c) || is_macro_char(c),
    }
}
