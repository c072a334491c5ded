//! Error types for the cljlex character-source boundary

use thiserror::Error;

/// Errors the lexer can surface to a caller.
///
/// Malformed *input text* never produces an error: every character
/// sequence lexes to some token, and truncation is reported in-band
/// through the token's completeness flag. The only failure points are in
/// the underlying byte source.
#[derive(Error, Debug)]
pub enum Error {
    /// The underlying reader failed
    ///
    /// **Triggered by:** any I/O failure while pulling bytes from a
    /// `BufRead`-backed source
    #[error("I/O error reading source: {0}")]
    Io(#[from] std::io::Error),

    /// The byte stream is not valid UTF-8
    ///
    /// **Triggered by:** an invalid or truncated UTF-8 sequence in the
    /// source stream
    #[error("invalid UTF-8 sequence in source stream")]
    InvalidUtf8,
}

/// Result type for cljlex operations
pub type Result<T> = std::result::Result<T, Error>;
