//! History consistency invariant: placed stones match the move history.

use super::Invariant;
use crate::{Cell, Game, Vertex};

/// Invariant: every non-pass move in the history occupies its vertex with its
/// own color, and no other stones are on the board.
///
/// Holds because a cell, once occupied, is never overwritten.
pub struct HistoryConsistentInvariant;

impl Invariant<Game> for HistoryConsistentInvariant {
    fn holds(game: &Game) -> bool {
        let mut placed = 0;
        for mov in game.history() {
            if let Vertex::Point(coord) = mov.vertex {
                if game.board().get(coord) != Some(Cell::Occupied(mov.color)) {
                    return false;
                }
                placed += 1;
            }
        }
        placed == game.board().stone_count()
    }

    fn description() -> &'static str {
        "Stones on the board match the non-pass moves in history"
    }
}
