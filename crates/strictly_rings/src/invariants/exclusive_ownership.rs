//! Ownership invariant: each ring sits on exactly one peg, once.

use super::Invariant;
use crate::Board;
use std::collections::HashSet;

/// Invariant: no ring id appears twice across the board.
pub struct ExclusiveOwnershipInvariant;

impl Invariant<Board> for ExclusiveOwnershipInvariant {
    fn holds(board: &Board) -> bool {
        let mut seen = HashSet::with_capacity(board.ring_count());
        board
            .pegs()
            .iter()
            .flat_map(|peg| peg.rings())
            .all(|ring| seen.insert(ring.id()))
    }

    fn description() -> &'static str {
        "Each ring is owned by exactly one peg"
    }
}
