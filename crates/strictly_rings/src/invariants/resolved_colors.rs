//! Color invariant: every ring knows its true color.

use super::Invariant;
use crate::{Board, RingColor};

/// Invariant: no ring's true color is `Mystery`.
///
/// Unresolved mysteries load as inert `White` rings instead.
pub struct ResolvedColorsInvariant;

impl Invariant<Board> for ResolvedColorsInvariant {
    fn holds(board: &Board) -> bool {
        board
            .pegs()
            .iter()
            .flat_map(|peg| peg.rings())
            .all(|ring| ring.true_color() != RingColor::Mystery)
    }

    fn description() -> &'static str {
        "Every ring has a resolved true color"
    }
}
