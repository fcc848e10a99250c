//! Connect6 game logic.
//!
//! Connect6 is played on a square grid. Black opens with a single stone,
//! after which each side places two stones per turn. The first unbroken line
//! of six or more stones wins.
//!
//! # Architecture
//!
//! - [`Board`]: square grid, vertex conversion and the empty-cell sequence
//! - [`TurnSequencer`]: the four-ply Black, Black, White, White cycle
//! - [`rules`]: win detection
//! - [`invariants`]: properties checked after every move in debug builds
//! - [`Game`]: board, turn, history and recorded winner together
//!
//! # Example
//!
//! ```
//! use connect6_rules::{Game, Stone};
//!
//! let mut game = Game::new(19).unwrap();
//! let vertex = game.board().parse_vertex("K10").unwrap();
//! game.play(Stone::Black, vertex).unwrap();
//! assert_eq!(game.side_to_move(), Stone::White);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod board;
mod error;
mod game;
pub mod invariants;
pub mod rules;
mod turn;
mod types;
mod vertex;

pub use action::Move;
pub use board::{Board, DEFAULT_BOARD_SIZE, EmptyCells, MAX_BOARD_SIZE, MIN_BOARD_SIZE};
pub use error::RulesError;
pub use game::Game;
pub use rules::{Direction, Run, WIN_LENGTH, find_runs, winner};
pub use turn::{TurnPhase, TurnSequencer};
pub use types::{Cell, Stone};
pub use vertex::{COLUMN_LETTERS, Coord, PASS_TOKEN, Vertex, column_label, coord_to_vertex, parse_column, vertex_to_coord};
