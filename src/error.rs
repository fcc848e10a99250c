//! Error kinds surfaced by command handlers.

use connect6_rules::RulesError;
use tracing::instrument;

/// Failure of a single protocol command. Every kind is turned into a `?`
/// reply at the dispatch boundary; none of them stop the engine.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum CommandError {
    /// The request line itself is malformed.
    #[display("{}", _0)]
    Parse(String),

    /// An argument is missing, unparseable or out of range.
    #[display("{}", _0)]
    InvalidArgument(String),

    /// No handler is registered under this name.
    #[display("unknown command: {}", _0)]
    UnknownCommand(String),

    /// The move breaks a rule of the game.
    #[display("{}", _0)]
    IllegalMove(String),
}

impl CommandError {
    /// Creates a [`CommandError::InvalidArgument`].
    #[instrument(skip(message))]
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument(message.into())
    }
}

impl std::error::Error for CommandError {}

impl From<RulesError> for CommandError {
    fn from(err: RulesError) -> Self {
        match err {
            RulesError::InvalidArgument(message) => Self::InvalidArgument(message),
            RulesError::IllegalMove(message) => Self::IllegalMove(message),
            err @ RulesError::InvariantViolation(_) => Self::IllegalMove(err.to_string()),
        }
    }
}
