//! Core domain types for Connect6.

use crate::error::RulesError;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Stone color.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display, strum::EnumIter,
)]
pub enum Stone {
    /// Black moves first.
    Black,
    /// White.
    White,
}

impl Stone {
    /// Lower-case color name as used on the wire (`black`, `white`).
    pub fn wire_name(self) -> &'static str {
        match self {
            Stone::Black => "black",
            Stone::White => "white",
        }
    }

    /// Parses a color token: `B`, `W`, `black` or `white`, any case.
    #[instrument]
    pub fn from_token(token: &str) -> Result<Self, RulesError> {
        if token.eq_ignore_ascii_case("b") || token.eq_ignore_ascii_case("black") {
            Ok(Stone::Black)
        } else if token.eq_ignore_ascii_case("w") || token.eq_ignore_ascii_case("white") {
            Ok(Stone::White)
        } else {
            Err(RulesError::invalid_argument(format!("invalid color: {}", token)))
        }
    }
}

/// A single intersection of the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Cell {
    /// No stone.
    #[default]
    Empty,
    /// Intersection holding a stone.
    Occupied(Stone),
}

impl Cell {
    /// Text symbol used by the board dump: `.`, `X` or `O`.
    pub fn symbol(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::Occupied(Stone::Black) => 'X',
            Cell::Occupied(Stone::White) => 'O',
        }
    }

    /// Returns the stone on this cell, if any.
    pub fn stone(self) -> Option<Stone> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(stone) => Some(stone),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_tokens() {
        assert_eq!(Stone::from_token("B").unwrap(), Stone::Black);
        assert_eq!(Stone::from_token("w").unwrap(), Stone::White);
        assert_eq!(Stone::from_token("WHITE").unwrap(), Stone::White);
        assert_eq!(Stone::from_token("black").unwrap(), Stone::Black);
    }

    #[test]
    fn test_bad_color_token() {
        let err = Stone::from_token("red").unwrap_err();
        assert!(matches!(err, RulesError::InvalidArgument(_)));
        assert_eq!(err.to_string(), "invalid color: red");
    }

    #[test]
    fn test_cell_symbols() {
        assert_eq!(Cell::Empty.symbol(), '.');
        assert_eq!(Cell::Occupied(Stone::Black).symbol(), 'X');
        assert_eq!(Cell::Occupied(Stone::White).symbol(), 'O');
    }
}
