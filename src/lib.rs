//! # cljlex - Incremental Lexer for Clojure-Style Forms
//!
//! An incremental lexer built for interactive line readers: it classifies
//! a character stream into tokens one call at a time and explicitly
//! models *partial* input, so a REPL can decide whether to ask for more
//! input before handing a form to a parser.
//!
//! ## Quick Start
//!
//! ```rust
//! use cljlex::{Kind, StrSource, TokenReader};
//!
//! # fn main() -> cljlex::Result<()> {
//! let mut reader = TokenReader::new();
//! let mut src = StrSource::new("(foo \"bar\" 42)");
//!
//! loop {
//!     let token = reader.read_token(&mut src)?;
//!     if token.kind == Kind::Eof {
//!         break;
//!     }
//!     println!("{:?} {}", token.kind, token);
//! }
//! assert_eq!(reader.advance(), 14);
//! # Ok(())
//! # }
//! ```
//!
//! ## Partial input
//!
//! Truncated constructs are not errors. An unterminated string or a
//! dangling dispatch `#` at end of input comes back as a token with
//! `complete == false`, carrying everything captured so far:
//!
//! ```rust
//! use cljlex::{Kind, StrSource, TokenReader};
//!
//! # fn main() -> cljlex::Result<()> {
//! let mut reader = TokenReader::new();
//! let mut src = StrSource::new("\"abc");
//! let token = reader.read_token(&mut src)?;
//! assert_eq!(token.kind, Kind::String);
//! assert_eq!(token.content.as_deref(), Some("\"abc"));
//! assert!(!token.complete);
//! # Ok(())
//! # }
//! ```
//!
//! The [`repl`] module holds the boundaries an interactive front end
//! plugs into: [`repl::line_status`] decides whether accumulated input is
//! ready for parsing, [`repl::Completer`] is the candidate-search seam
//! for name completion, and [`repl::style_for`] buckets token kinds for
//! highlighting.
//!
//! ## Architecture
//!
//! ```text
//! Character source → classifier → sub-scanner → Token
//! ```
//!
//! - [`TokenReader`] - the driver: skips separators, classifies the next
//!   significant character, runs one sub-scanner, returns one token
//! - [`Token`] / [`Kind`] - the token vocabulary
//! - [`CharSource`] - any sequential character source with a single slot
//!   of pushback; [`PushbackReader`] adapts a byte reader,
//!   [`StrSource`] an in-memory line
//!
//! The reader never builds a tree, never balances brackets, and never
//! validates numeral grammar; those belong to downstream layers.

/// Version of the cljlex crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod error;
pub mod lexer;
pub mod repl;

// Re-export main types
pub use error::{Error, Result};
pub use lexer::{CharSource, Kind, PushbackReader, StrSource, Token, TokenReader};
