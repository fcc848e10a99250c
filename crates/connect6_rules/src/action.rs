//! Moves as first-class domain events.

use crate::types::Stone;
use crate::vertex::Vertex;
use derive_new::new;
use serde::{Deserialize, Serialize};

/// One ply: a color placing a stone at a vertex, or passing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, new)]
pub struct Move {
    /// Color making the move.
    pub color: Stone,
    /// Where the stone went.
    pub vertex: Vertex,
}

impl Move {
    /// Returns true if this ply placed no stone.
    pub fn is_pass(&self) -> bool {
        self.vertex.is_pass()
    }
}
