//! Notifications for the presentation layer.
//!
//! The session queues events as it changes state. A renderer drains them and
//! keeps its own visuals keyed by [`PegId`] and [`RingId`].

use super::types::{PegId, RingColor, RingId};
use serde::{Deserialize, Serialize};

/// Something the presentation layer should mirror.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum SessionEvent {
    /// Every peg and ring of the previous level is gone.
    LevelCleared,
    /// A peg was created for the new level.
    PegCreated {
        /// The new peg.
        peg: PegId,
    },
    /// A ring was created and placed on top of `peg`.
    RingCreated {
        /// Owning peg.
        peg: PegId,
        /// The new ring.
        ring: RingId,
        /// Color to draw.
        color: RingColor,
    },
    /// A mystery ring now shows its true color.
    RingRevealed {
        /// The revealed ring.
        ring: RingId,
        /// Its true color.
        color: RingColor,
    },
    /// A run was selected on `peg`.
    RunLifted {
        /// Source peg.
        peg: PegId,
        /// Lifted rings, bottom-to-top.
        rings: Vec<RingId>,
    },
    /// The selection on `peg` was dropped; lifted rings settle back.
    SelectionCleared {
        /// Source peg.
        peg: PegId,
    },
    /// Rings moved between pegs.
    MoveSucceeded {
        /// Source peg.
        from: PegId,
        /// Destination peg.
        to: PegId,
        /// Moved rings, bottom-to-top.
        rings: Vec<RingId>,
    },
    /// The destination refused the run.
    MoveRejected {
        /// Source peg.
        from: PegId,
        /// Destination peg.
        to: PegId,
    },
    /// All colors are consolidated.
    WinConditionMet {
        /// Level that was won.
        level_index: usize,
    },
}
