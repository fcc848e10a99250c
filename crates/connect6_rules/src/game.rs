//! Game state: board, turn cycle, history and recorded winner.

use crate::action::Move;
use crate::board::Board;
use crate::error::RulesError;
use crate::invariants::{Connect6Invariants, InvariantSet};
use crate::rules;
use crate::turn::{TurnPhase, TurnSequencer};
use crate::types::Stone;
use crate::vertex::{Coord, Vertex};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// A single Connect6 game.
///
/// Moves are accepted for either color at any time; the turn sequencer only
/// reports who is expected to move. The winner is recorded when a query asks
/// the win detector to decide the game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    pub(crate) board: Board,
    pub(crate) turn: TurnSequencer,
    pub(crate) history: Vec<Move>,
    pub(crate) winner: Option<Stone>,
}

impl Game {
    /// Creates a game on an empty board.
    ///
    /// # Errors
    ///
    /// Returns [`RulesError::InvalidArgument`] for an unacceptable size.
    #[instrument]
    pub fn new(size: usize) -> Result<Self, RulesError> {
        Ok(Self {
            board: Board::new(size)?,
            turn: TurnSequencer::new(),
            history: Vec::new(),
            winner: None,
        })
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the move history.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Returns the current turn phase.
    pub fn phase(&self) -> TurnPhase {
        self.turn.phase()
    }

    /// Color expected to play next.
    pub fn side_to_move(&self) -> Stone {
        self.turn.color_to_move()
    }

    /// Winner recorded by the last decision, if any.
    pub fn winner(&self) -> Option<Stone> {
        self.winner
    }

    /// Starts over on an empty board of a new size. Nothing changes if the
    /// size is rejected.
    #[instrument(skip(self))]
    pub fn resize(&mut self, size: usize) -> Result<(), RulesError> {
        self.board.resize(size)?;
        self.reset();
        info!(size, "New game");
        Ok(())
    }

    /// Starts over on an empty board of the current size.
    #[instrument(skip(self))]
    pub fn clear(&mut self) {
        self.board.clear();
        self.reset();
        info!(size = self.board.size(), "Board cleared");
    }

    /// Plays a ply for `color`: places a stone unless the vertex is a pass,
    /// records the move and advances the turn.
    ///
    /// # Errors
    ///
    /// Returns [`RulesError::IllegalMove`] if the vertex is occupied, leaving
    /// the game unchanged. Debug builds check the invariants after the move is
    /// applied and return [`RulesError::InvariantViolation`] if one fails; the
    /// move stays applied in that case.
    #[instrument(skip(self))]
    pub fn play(&mut self, color: Stone, vertex: Vertex) -> Result<(), RulesError> {
        if let Vertex::Point(coord) = vertex {
            self.board.place(coord, color)?;
        }
        self.history.push(Move::new(color, vertex));
        self.turn.advance();
        debug!(
            %color,
            vertex = %vertex.to_text(self.board.size()),
            phase = %self.turn.phase(),
            "Move played"
        );

        #[cfg(debug_assertions)]
        self.check_invariants()?;

        Ok(())
    }

    /// Every winning run on the board.
    pub fn runs(&self) -> Vec<rules::Run> {
        rules::find_runs(&self.board)
    }

    /// Runs the win detector and records the winner if the game is decided.
    /// Returns the recorded winner.
    #[instrument(skip(self))]
    pub fn decide(&mut self) -> Option<Stone> {
        if let Some(run) = self.runs().into_iter().next() {
            if self.winner.is_none() {
                info!(winner = %run.color, start = %run.start, end = %run.end, "Game decided");
            }
            self.winner = Some(run.color);
        }
        self.winner
    }

    /// Legal moves: empty when the game is decided, otherwise every empty
    /// cell in row-major order.
    #[instrument(skip(self))]
    pub fn legal_moves(&mut self) -> Vec<Coord> {
        if self.decide().is_some() {
            Vec::new()
        } else {
            self.board.empty_cells().collect()
        }
    }

    fn reset(&mut self) {
        self.history.clear();
        self.turn.reset();
        self.winner = None;
    }

    #[cfg_attr(not(debug_assertions), allow(dead_code))]
    fn check_invariants(&self) -> Result<(), RulesError> {
        Connect6Invariants::check_all(self).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            RulesError::InvariantViolation(descriptions)
        })
    }
}

impl Default for Game {
    fn default() -> Self {
        Self {
            board: Board::default(),
            turn: TurnSequencer::new(),
            history: Vec::new(),
            winner: None,
        }
    }
}
