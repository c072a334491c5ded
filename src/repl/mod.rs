//! Boundaries for the interactive consumers of the token stream.
//!
//! The line-editing front end itself lives outside this crate; these
//! modules define what it plugs into: a completeness checker deciding
//! whether to prompt for more input, a candidate-search boundary for name
//! completion, and a token-kind-to-style mapping for highlighting.

mod check;
mod complete;
mod highlight;

pub use check::{line_status, InputStatus, ReadinessChecker};
pub use complete::{Candidate, Completer, StaticCompleter};
pub use highlight::{style_for, Style};
