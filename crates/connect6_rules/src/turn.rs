//! Four-ply turn cycle.
//!
//! Each round is Black, Black, White, White. A new game opens on
//! [`TurnPhase::BlackSecond`] so Black's opening turn is a single stone.

use crate::types::Stone;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Which ply of the round is next.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display, strum::EnumIter,
)]
pub enum TurnPhase {
    /// First stone of a Black turn.
    BlackFirst,
    /// Second stone of a Black turn.
    BlackSecond,
    /// First stone of a White turn.
    WhiteFirst,
    /// Second stone of a White turn.
    WhiteSecond,
}

impl TurnPhase {
    /// Phase of a fresh game.
    pub const OPENING: TurnPhase = TurnPhase::BlackSecond;

    /// Position in the round, 0..4.
    pub fn index(self) -> usize {
        match self {
            TurnPhase::BlackFirst => 0,
            TurnPhase::BlackSecond => 1,
            TurnPhase::WhiteFirst => 2,
            TurnPhase::WhiteSecond => 3,
        }
    }

    /// Phase at position `index` modulo 4.
    pub fn from_index(index: usize) -> Self {
        match index % 4 {
            0 => TurnPhase::BlackFirst,
            1 => TurnPhase::BlackSecond,
            2 => TurnPhase::WhiteFirst,
            _ => TurnPhase::WhiteSecond,
        }
    }

    /// The following phase.
    pub fn next(self) -> Self {
        Self::from_index(self.index() + 1)
    }

    /// Color that plays this ply.
    pub fn color(self) -> Stone {
        match self {
            TurnPhase::BlackFirst | TurnPhase::BlackSecond => Stone::Black,
            TurnPhase::WhiteFirst | TurnPhase::WhiteSecond => Stone::White,
        }
    }
}

/// Tracks the current [`TurnPhase`]. There is no terminal state; the end of
/// the game is decided by the win detector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TurnSequencer {
    phase: TurnPhase,
}

impl TurnSequencer {
    /// Creates a sequencer at the opening phase.
    #[instrument]
    pub fn new() -> Self {
        Self {
            phase: TurnPhase::OPENING,
        }
    }

    /// Current phase.
    pub fn phase(&self) -> TurnPhase {
        self.phase
    }

    /// Color to move next.
    pub fn color_to_move(&self) -> Stone {
        self.phase.color()
    }

    /// Moves to the next ply.
    pub fn advance(&mut self) {
        self.phase = self.phase.next();
    }

    /// Returns to the opening phase.
    pub fn reset(&mut self) {
        self.phase = TurnPhase::OPENING;
    }
}

impl Default for TurnSequencer {
    fn default() -> Self {
        Self::new()
    }
}
