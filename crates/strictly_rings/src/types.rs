//! Core domain types for the ring sorting puzzle.

use serde::{Deserialize, Serialize};

/// Color of a ring.
///
/// `White` is the neutral placeholder color and never counts toward sorting.
/// `Mystery` hides a ring's true color until the ring is revealed.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum RingColor {
    /// Unassigned or neutral color.
    White,
    /// Red.
    Red,
    /// Blue.
    Blue,
    /// Green.
    Green,
    /// Yellow.
    Yellow,
    /// Orange.
    Orange,
    /// Hidden color, resolved through a mystery assignment.
    Mystery,
}

impl RingColor {
    /// Returns true if rings of this color can make up a sorted peg.
    pub fn is_sortable(self) -> bool {
        !matches!(self, RingColor::White | RingColor::Mystery)
    }

    /// Single-letter label used by text board renderings.
    pub fn symbol(self) -> char {
        match self {
            RingColor::White => 'W',
            RingColor::Red => 'R',
            RingColor::Blue => 'B',
            RingColor::Green => 'G',
            RingColor::Yellow => 'Y',
            RingColor::Orange => 'O',
            RingColor::Mystery => '?',
        }
    }
}

/// Identity of a physical ring within a loaded level.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
)]
#[display("ring#{}", _0)]
pub struct RingId(pub u32);

/// Index of a peg within the active level (0-based).
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
)]
#[display("peg {}", _0)]
pub struct PegId(pub usize);

impl PegId {
    /// Returns the peg's position in the board.
    pub fn index(self) -> usize {
        self.0
    }
}
