use crate::lexer::Kind;

/// Visual style buckets for syntax-highlighting consumers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Style {
    /// Bare symbols and unknown characters
    Plain,
    /// String and character literals
    Literal,
    /// Numeric literals
    Number,
    /// Comments
    Comment,
    /// Brackets
    Delimiter,
    /// Quote, unquote, deref, meta, syntax-quote, arg, dispatch
    Macro,
}

/// Maps a token kind to its display style.
pub fn style_for(kind: Kind) -> Style {
    match kind {
        Kind::String | Kind::Char => Style::Literal,
        Kind::Number => Style::Number,
        Kind::Comment => Style::Comment,
        Kind::ListOpen
        | Kind::ListClose
        | Kind::VectorOpen
        | Kind::VectorClose
        | Kind::MapOpen
        | Kind::MapClose => Style::Delimiter,
        Kind::Quote
        | Kind::Unquote
        | Kind::Deref
        | Kind::Meta
        | Kind::SyntaxQuote
        | Kind::Arg
        | Kind::Dispatch => Style::Macro,
        Kind::Symbol | Kind::Eof | Kind::Unknown => Style::Plain,
    }
}
