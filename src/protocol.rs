//! Wire grammar: request lines in, `=`/`?` replies out.
//!
//! ```text
//! request  = [id] command {arg}
//! success  = "= " [id " "] message "\n\n"
//! failure  = "? " message "\n\n"
//! ```

use crate::error::CommandError;
use tracing::instrument;

/// A parsed request line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    /// Request id, digits only, echoed on success.
    pub id: Option<String>,
    /// Command name as typed.
    pub command: String,
    /// Remaining tokens.
    pub args: Vec<String>,
}

impl Request {
    /// Parses one input line.
    ///
    /// Returns `Ok(None)` for blank lines and `#` comments, which get no
    /// reply. The first token is an id only if it is made of ASCII digits.
    ///
    /// # Errors
    ///
    /// Returns [`CommandError::Parse`] for an id with no command after it.
    #[instrument]
    pub fn parse(line: &str) -> Result<Option<Self>, CommandError> {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            return Ok(None);
        }

        let mut tokens = line.split_whitespace();
        let first = match tokens.next() {
            Some(token) => token,
            None => return Ok(None),
        };

        let (id, command) = if first.bytes().all(|b| b.is_ascii_digit()) {
            let command = tokens
                .next()
                .ok_or_else(|| CommandError::Parse(format!("missing command after id {}", first)))?;
            (Some(first.to_string()), command)
        } else {
            (None, first)
        };

        Ok(Some(Self {
            id,
            command: command.to_string(),
            args: tokens.map(str::to_string).collect(),
        }))
    }

    /// Argument at `index`, or an error naming what was expected.
    pub fn arg(&self, index: usize, what: &str) -> Result<&str, CommandError> {
        self.args
            .get(index)
            .map(String::as_str)
            .ok_or_else(|| CommandError::invalid_argument(format!("missing argument: {}", what)))
    }
}

/// A reply ready to be written to the sink.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Response {
    /// `= [id ]message`
    Success {
        /// Echoed request id.
        id: Option<String>,
        /// Reply body, possibly multi-line.
        message: String,
    },
    /// `? message`
    Failure {
        /// Error text.
        message: String,
    },
}

impl Response {
    /// Builds a success reply.
    pub fn success(id: Option<String>, message: impl Into<String>) -> Self {
        Self::Success {
            id,
            message: message.into(),
        }
    }

    /// Builds a failure reply.
    pub fn failure(message: impl Into<String>) -> Self {
        Self::Failure {
            message: message.into(),
        }
    }

    /// Reply body without the status prefix.
    pub fn message(&self) -> &str {
        match self {
            Response::Success { message, .. } | Response::Failure { message } => message,
        }
    }
}

impl std::fmt::Display for Response {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Response::Success { id: Some(id), message } => write!(f, "= {} {}\n\n", id, message),
            Response::Success { id: None, message } => write!(f, "= {}\n\n", message),
            Response::Failure { message } => write!(f, "? {}\n\n", message),
        }
    }
}
