//! First-class invariants for Connect6.
//!
//! Invariants are logical properties that must hold after every accepted
//! move. [`Game`](crate::Game) checks them in debug builds; they can also be
//! tested independently.

pub mod board_shape;
pub mod history_consistent;
pub mod turn_cycle;

pub use board_shape::BoardShapeInvariant;
pub use history_consistent::HistoryConsistentInvariant;
pub use turn_cycle::TurnCycleInvariant;

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
///
/// Implemented for tuples of [`Invariant`]s.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set, collecting every violation.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();

        if !I1::holds(state) {
            violations.push(InvariantViolation::new(I1::description()));
        }

        if !I2::holds(state) {
            violations.push(InvariantViolation::new(I2::description()));
        }

        if !I3::holds(state) {
            violations.push(InvariantViolation::new(I3::description()));
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

impl<S, I1, I2> InvariantSet<S> for (I1, I2)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();

        if !I1::holds(state) {
            violations.push(InvariantViolation::new(I1::description()));
        }

        if !I2::holds(state) {
            violations.push(InvariantViolation::new(I2::description()));
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

/// All Connect6 game invariants as a composable set.
pub type Connect6Invariants = (
    BoardShapeInvariant,
    HistoryConsistentInvariant,
    TurnCycleInvariant,
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Coord, Game, Stone, Vertex};

    #[test]
    fn test_invariant_set_holds_for_new_game() {
        let game = Game::default();
        assert!(Connect6Invariants::check_all(&game).is_ok());
    }

    #[test]
    fn test_invariant_set_holds_after_moves() {
        let mut game = Game::new(9).unwrap();
        game.play(Stone::Black, Vertex::Point(Coord::new(4, 4))).unwrap();
        game.play(Stone::White, Vertex::Point(Coord::new(3, 3))).unwrap();
        game.play(Stone::White, Vertex::Pass).unwrap();
        assert!(Connect6Invariants::check_all(&game).is_ok());
    }

    #[test]
    fn test_invariant_set_detects_violations() {
        let mut game = Game::new(9).unwrap();
        game.play(Stone::Black, Vertex::Point(Coord::new(4, 4))).unwrap();

        // Stone with no history entry, and a turn that skipped a ply.
        game.board.place(Coord::new(0, 0), Stone::White).unwrap();
        game.turn.advance();

        let violations = Connect6Invariants::check_all(&game).unwrap_err();
        assert_eq!(violations.len(), 2);
    }

    #[test]
    fn test_two_invariants_as_set() {
        let game = Game::default();
        type TwoInvariants = (BoardShapeInvariant, TurnCycleInvariant);
        assert!(TwoInvariants::check_all(&game).is_ok());
    }
}
