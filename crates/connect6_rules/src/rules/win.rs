//! Win detection: runs of six or more stones of one color.

use crate::board::Board;
use crate::types::{Cell, Stone};
use crate::vertex::Coord;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Minimum run length that wins.
pub const WIN_LENGTH: usize = 6;

/// Line direction scanned by the detector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    /// Along a row, left to right.
    Horizontal,
    /// Down a column.
    Vertical,
    /// Down and to the right.
    Diagonal,
    /// Down and to the left.
    AntiDiagonal,
}

impl Direction {
    /// All directions in scan order.
    pub const ALL: [Direction; 4] = [
        Direction::Horizontal,
        Direction::Vertical,
        Direction::Diagonal,
        Direction::AntiDiagonal,
    ];

    /// `(row, col)` step of this direction.
    pub fn delta(self) -> (isize, isize) {
        match self {
            Direction::Horizontal => (0, 1),
            Direction::Vertical => (1, 0),
            Direction::Diagonal => (1, 1),
            Direction::AntiDiagonal => (1, -1),
        }
    }
}

/// A maximal line of same-colored stones at least [`WIN_LENGTH`] long.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Run {
    /// Color of the stones.
    pub color: Stone,
    /// First cell in scan direction.
    pub start: Coord,
    /// Last cell in scan direction.
    pub end: Coord,
    /// Direction walked from `start` to `end`.
    pub direction: Direction,
    /// Every cell of the run, in order.
    pub cells: Vec<Coord>,
}

/// Finds every winning run on the board.
///
/// Runs come out in row-major order of their start cell, then in
/// [`Direction::ALL`] order. A cell only starts a run when the cell before it
/// in that direction is off the board or not the same color, so each
/// physical line is reported once.
#[instrument(skip(board), fields(size = board.size()))]
pub fn find_runs(board: &Board) -> Vec<Run> {
    let size = board.size() as isize;
    let mut runs = Vec::new();

    for row in 0..size {
        for col in 0..size {
            let Some(Cell::Occupied(color)) = board.get_signed(row, col) else {
                continue;
            };
            for direction in Direction::ALL {
                let (dr, dc) = direction.delta();
                if board.get_signed(row - dr, col - dc) == Some(Cell::Occupied(color)) {
                    continue;
                }

                let mut cells = Vec::new();
                let (mut r, mut c) = (row, col);
                while board.get_signed(r, c) == Some(Cell::Occupied(color)) {
                    cells.push(Coord::new(r as usize, c as usize));
                    r += dr;
                    c += dc;
                }

                if cells.len() >= WIN_LENGTH {
                    let start = cells[0];
                    let end = cells[cells.len() - 1];
                    debug!(?color, %start, %end, length = cells.len(), "Winning run found");
                    runs.push(Run {
                        color,
                        start,
                        end,
                        direction,
                        cells,
                    });
                }
            }
        }
    }

    runs
}

/// Color of the first winning run, if any.
#[instrument(skip(board))]
pub fn winner(board: &Board) -> Option<Stone> {
    find_runs(board).first().map(|run| run.color)
}
