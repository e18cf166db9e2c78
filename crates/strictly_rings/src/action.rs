//! First-class move type.
//!
//! A move names the rings the player lifted and where they should go. It can
//! be validated against a board before anything is mutated.

use super::types::{PegId, RingId};
use serde::{Deserialize, Serialize};

/// Move of a lifted run from one peg to another.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PegMove {
    /// Peg the run was lifted from.
    pub from: PegId,
    /// Destination peg.
    pub to: PegId,
    /// Lifted rings, bottom-to-top.
    pub rings: Vec<RingId>,
}

impl PegMove {
    /// Creates a new move.
    pub fn new(from: PegId, to: PegId, rings: Vec<RingId>) -> Self {
        Self { from, to, rings }
    }

    /// Number of rings moved.
    pub fn count(&self) -> usize {
        self.rings.len()
    }
}

impl std::fmt::Display for PegMove {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ring(s): {} -> {}", self.rings.len(), self.from, self.to)
    }
}
