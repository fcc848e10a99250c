//! Game rules for Connect6.
//!
//! Pure functions over a [`Board`](crate::Board), kept apart from board
//! storage so the game and the protocol layer can share them.

pub mod win;

pub use win::{Direction, Run, WIN_LENGTH, find_runs, winner};
