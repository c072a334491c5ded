//! Incremental lexical analysis for Clojure-style forms.
//!
//! Classifies a character stream into tokens one [`TokenReader::read_token`]
//! call at a time, modeling partial input explicitly so an interactive
//! reader can tell "needs more input" apart from "malformed input".

mod classify;
mod reader;
mod source;
mod token;

pub use reader::TokenReader;
pub use source::{CharSource, PushbackReader, StrSource};
pub use token::{Kind, Token};
