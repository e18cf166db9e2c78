//! Capacity invariant: no peg ever holds more rings than its capacity.

use super::Invariant;
use crate::Board;

/// Invariant: every peg satisfies `len <= capacity`, and all pegs share the
/// board's capacity.
pub struct CapacityBoundedInvariant;

impl Invariant<Board> for CapacityBoundedInvariant {
    fn holds(board: &Board) -> bool {
        board
            .pegs()
            .iter()
            .all(|peg| peg.capacity() == board.capacity() && peg.len() <= peg.capacity())
    }

    fn description() -> &'static str {
        "Every peg stays within the shared capacity"
    }
}
