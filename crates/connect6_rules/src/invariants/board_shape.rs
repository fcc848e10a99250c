//! Board shape invariant: the grid is square and within the size bounds.

use super::Invariant;
use crate::Game;
use crate::board::{MAX_BOARD_SIZE, MIN_BOARD_SIZE};

/// Invariant: the board holds exactly `size × size` cells and the size is
/// accepted.
pub struct BoardShapeInvariant;

impl Invariant<Game> for BoardShapeInvariant {
    fn holds(game: &Game) -> bool {
        let size = game.board().size();
        (MIN_BOARD_SIZE..=MAX_BOARD_SIZE).contains(&size) && game.board().cells().len() == size * size
    }

    fn description() -> &'static str {
        "Board is square with an accepted size"
    }
}
