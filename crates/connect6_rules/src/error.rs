//! Error type for rule violations and malformed input.

use tracing::instrument;

/// Error raised by board, vertex and game operations.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum RulesError {
    /// Argument could not be parsed or is out of range.
    #[display("{}", _0)]
    InvalidArgument(String),

    /// Move breaks a rule of the game (occupied intersection).
    #[display("{}", _0)]
    IllegalMove(String),

    /// A game invariant failed after a state transition.
    #[display("Invariant violation: {}", _0)]
    InvariantViolation(String),
}

impl RulesError {
    /// Creates an [`RulesError::InvalidArgument`].
    #[instrument(skip(message))]
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument(message.into())
    }

    /// Creates an [`RulesError::IllegalMove`].
    #[instrument(skip(message))]
    pub fn illegal_move(message: impl Into<String>) -> Self {
        Self::IllegalMove(message.into())
    }
}

impl std::error::Error for RulesError {}
