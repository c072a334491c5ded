use crate::error::Result;
use crate::lexer::{Kind, StrSource, Token, TokenReader};

/// Whether accumulated input is ready to hand to a full parser.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputStatus {
    /// Every token is complete and no opened bracket is pending
    Ready,
    /// An incomplete token or an unclosed bracket needs more input
    NeedsMore,
}

/// Folds a token stream into an [`InputStatus`].
///
/// The lexer itself never balances brackets, so this consumer tracks the
/// open-bracket depth on its own, alongside any token the lexer flagged
/// incomplete. Surplus close brackets are left for the parser to reject;
/// they never make input "incomplete".
#[derive(Debug, Default)]
pub struct ReadinessChecker {
    depth: u64,
    incomplete: bool,
}

impl ReadinessChecker {
    /// Creates a checker with no observed tokens
    pub fn new() -> Self {
        ReadinessChecker::default()
    }

    /// Feeds one token to the checker
    pub fn observe(&mut self, token: &Token) {
        if !token.complete {
            self.incomplete = true;
        }
        match token.kind {
            Kind::ListOpen | Kind::VectorOpen | Kind::MapOpen => self.depth += 1,
            Kind::ListClose | Kind::VectorClose | Kind::MapClose => {
                self.depth = self.depth.saturating_sub(1);
            }
            _ => {}
        }
    }

    /// Status of everything observed so far
    pub fn status(&self) -> InputStatus {
        if self.incomplete || self.depth > 0 {
            InputStatus::NeedsMore
        } else {
            InputStatus::Ready
        }
    }
}

/// Lexes a whole line (or accumulated buffer) and reports whether it is
/// ready for parsing.
pub fn line_status(line: &str) -> Result<InputStatus> {
    let mut reader = TokenReader::new();
    let mut src = StrSource::new(line);
    let mut checker = ReadinessChecker::new();
    loop {
        let token = reader.read_token(&mut src)?;
        if token.kind == Kind::Eof {
            return Ok(checker.status());
        }
        checker.observe(&token);
    }
}
