//! Move generation for `genmove`.

use connect6_rules::{Board, Coord, Stone};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::IteratorRandom;
use tracing::{debug, instrument};

/// Picks the next stone for a color.
pub trait MoveGenerator {
    /// Chooses an empty coordinate, or `None` when the board has no empty
    /// cell (the caller passes).
    fn select(&mut self, board: &Board, color: Stone) -> Option<Coord>;
}

/// Reference generator: a uniformly random empty cell.
#[derive(Debug, Clone)]
pub struct RandomMoveGenerator<R = StdRng> {
    rng: R,
}

impl<R: rand::Rng> RandomMoveGenerator<R> {
    /// Wraps an existing random source.
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RandomMoveGenerator<StdRng> {
    /// Deterministic generator for a fixed seed.
    #[instrument]
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    /// Generator seeded from the operating system.
    #[instrument]
    pub fn from_os_rng() -> Self {
        Self::new(StdRng::from_os_rng())
    }
}

impl<R: rand::Rng> MoveGenerator for RandomMoveGenerator<R> {
    #[instrument(skip(self, board), fields(size = board.size()))]
    fn select(&mut self, board: &Board, _color: Stone) -> Option<Coord> {
        let choice = board.empty_cells().choose(&mut self.rng);
        debug!(?choice, "Random move selected");
        choice
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_board_yields_none() {
        let mut board = Board::new(2).unwrap();
        for coord in board.clone().empty_cells() {
            board.place(coord, Stone::White).unwrap();
        }
        let mut generator = RandomMoveGenerator::seeded(1);
        assert_eq!(generator.select(&board, Stone::Black), None);
    }

    #[test]
    fn test_single_empty_cell_is_chosen() {
        let mut board = Board::new(3).unwrap();
        let last = Coord::new(2, 1);
        for coord in board.clone().empty_cells().filter(|c| *c != last) {
            board.place(coord, Stone::Black).unwrap();
        }
        let mut generator = RandomMoveGenerator::seeded(99);
        assert_eq!(generator.select(&board, Stone::White), Some(last));
    }

    #[test]
    fn test_same_seed_same_moves() {
        let board = Board::default();
        let mut a = RandomMoveGenerator::seeded(2024);
        let mut b = RandomMoveGenerator::seeded(2024);
        for _ in 0..10 {
            assert_eq!(a.select(&board, Stone::Black), b.select(&board, Stone::Black));
        }
    }

    #[test]
    fn test_choice_is_empty_cell() {
        let mut board = Board::new(4).unwrap();
        board.place(Coord::new(0, 0), Stone::Black).unwrap();
        let mut generator = RandomMoveGenerator::seeded(7);
        for _ in 0..50 {
            let coord = generator.select(&board, Stone::White).unwrap();
            assert!(board.is_empty_at(coord));
        }
    }
}
