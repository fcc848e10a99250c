//! Turn cycle invariant: one phase per accepted ply.

use super::Invariant;
use crate::{Game, TurnPhase};

/// Invariant: the turn phase is the opening phase advanced once per move in
/// the history, passes included.
pub struct TurnCycleInvariant;

impl Invariant<Game> for TurnCycleInvariant {
    fn holds(game: &Game) -> bool {
        let expected = TurnPhase::from_index(TurnPhase::OPENING.index() + game.history().len());
        game.phase() == expected
    }

    fn description() -> &'static str {
        "Turn phase advances once per ply from the opening phase"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Stone, Vertex};

    #[test]
    fn test_holds_through_a_round() {
        let mut game = Game::default();
        for color in [Stone::Black, Stone::White, Stone::White, Stone::Black, Stone::Black] {
            game.play(color, Vertex::Pass).unwrap();
            assert!(TurnCycleInvariant::holds(&game));
        }
    }

    #[test]
    fn test_skipped_ply_violates() {
        let mut game = Game::default();
        game.turn.advance();
        assert!(!TurnCycleInvariant::holds(&game));
    }
}
