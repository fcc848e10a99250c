//! Square Connect6 board of configurable size.

use crate::error::RulesError;
use crate::types::{Cell, Stone};
use crate::vertex::{self, Coord, Vertex};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Smallest accepted board size.
pub const MIN_BOARD_SIZE: usize = 2;
/// Largest accepted board size.
pub const MAX_BOARD_SIZE: usize = 100;
/// Board size of a fresh engine.
pub const DEFAULT_BOARD_SIZE: usize = 19;

/// N×N grid of cells.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    size: usize,
    /// Cells in row-major order.
    cells: Vec<Cell>,
}

impl Board {
    /// Creates an empty board.
    ///
    /// # Errors
    ///
    /// Returns [`RulesError::InvalidArgument`] if `size` is outside
    /// [`MIN_BOARD_SIZE`]..=[`MAX_BOARD_SIZE`].
    #[instrument]
    pub fn new(size: usize) -> Result<Self, RulesError> {
        check_size(size)?;
        Ok(Self {
            size,
            cells: vec![Cell::Empty; size * size],
        })
    }

    /// Side length of the board.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Replaces the grid with an empty one of the new size. The board is left
    /// untouched when the size is rejected.
    #[instrument(skip(self), fields(old_size = self.size))]
    pub fn resize(&mut self, size: usize) -> Result<(), RulesError> {
        check_size(size)?;
        self.size = size;
        self.cells = vec![Cell::Empty; size * size];
        debug!(size, "Board resized");
        Ok(())
    }

    /// Empties every cell, keeping the size.
    pub fn clear(&mut self) {
        self.cells.fill(Cell::Empty);
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Returns true if `(row, col)` lies on the board.
    pub fn contains(&self, row: isize, col: isize) -> bool {
        row >= 0 && col >= 0 && (row as usize) < self.size && (col as usize) < self.size
    }

    /// Gets the cell at `coord`, or `None` off the board.
    pub fn get(&self, coord: Coord) -> Option<Cell> {
        self.index(coord).map(|i| self.cells[i])
    }

    /// Gets the cell at a signed position, or `None` off the board.
    pub fn get_signed(&self, row: isize, col: isize) -> Option<Cell> {
        if self.contains(row, col) {
            self.get(Coord::new(row as usize, col as usize))
        } else {
            None
        }
    }

    /// Checks if the cell at `coord` is on the board and empty.
    pub fn is_empty_at(&self, coord: Coord) -> bool {
        matches!(self.get(coord), Some(Cell::Empty))
    }

    /// Places a stone.
    ///
    /// # Errors
    ///
    /// Returns [`RulesError::InvalidArgument`] if `coord` is off the board and
    /// [`RulesError::IllegalMove`] if the cell already holds a stone.
    #[instrument(skip(self))]
    pub fn place(&mut self, coord: Coord, stone: Stone) -> Result<(), RulesError> {
        let index = self.index(coord).ok_or_else(|| {
            RulesError::invalid_argument(format!("coordinate off the board: {}", coord))
        })?;
        if self.cells[index] != Cell::Empty {
            return Err(RulesError::illegal_move(format!(
                "vertex {} is already occupied",
                self.coord_to_vertex(coord)
            )));
        }
        self.cells[index] = Cell::Occupied(stone);
        Ok(())
    }

    /// Lazily yields every empty coordinate in row-major order. The iterator
    /// can be cloned to restart from the same point.
    pub fn empty_cells(&self) -> EmptyCells<'_> {
        EmptyCells {
            board: self,
            next: 0,
        }
    }

    /// Number of stones on the board.
    pub fn stone_count(&self) -> usize {
        self.cells.iter().filter(|c| **c != Cell::Empty).count()
    }

    /// Parses vertex text against this board.
    pub fn parse_vertex(&self, text: &str) -> Result<Vertex, RulesError> {
        Vertex::parse(text, self.size)
    }

    /// Converts a point vertex such as `D4` into a coordinate.
    pub fn vertex_to_coord(&self, text: &str) -> Result<Coord, RulesError> {
        vertex::vertex_to_coord(text, self.size)
    }

    /// Converts a coordinate on this board into vertex text.
    pub fn coord_to_vertex(&self, coord: Coord) -> String {
        vertex::coord_to_vertex(coord, self.size)
    }

    /// Formats the board one row per line, top row first, cells separated by
    /// spaces.
    pub fn display(&self) -> String {
        self.cells
            .chunks(self.size)
            .map(|row| {
                row.iter()
                    .map(|c| c.symbol().to_string())
                    .collect::<Vec<_>>()
                    .join(" ")
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn index(&self, coord: Coord) -> Option<usize> {
        if coord.row < self.size && coord.col < self.size {
            Some(coord.row * self.size + coord.col)
        } else {
            None
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self {
            size: DEFAULT_BOARD_SIZE,
            cells: vec![Cell::Empty; DEFAULT_BOARD_SIZE * DEFAULT_BOARD_SIZE],
        }
    }
}

fn check_size(size: usize) -> Result<(), RulesError> {
    if (MIN_BOARD_SIZE..=MAX_BOARD_SIZE).contains(&size) {
        Ok(())
    } else {
        Err(RulesError::invalid_argument("unacceptable size"))
    }
}

/// Iterator over the empty cells of a [`Board`], see [`Board::empty_cells`].
#[derive(Debug, Clone)]
pub struct EmptyCells<'a> {
    board: &'a Board,
    next: usize,
}

impl Iterator for EmptyCells<'_> {
    type Item = Coord;

    fn next(&mut self) -> Option<Coord> {
        let size = self.board.size;
        while self.next < self.board.cells.len() {
            let index = self.next;
            self.next += 1;
            if self.board.cells[index] == Cell::Empty {
                return Some(Coord::new(index / size, index % size));
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(self.board.cells.len() - self.next))
    }
}
