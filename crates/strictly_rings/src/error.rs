//! Error types for pegs, level configuration, moves and sessions.

use super::types::PegId;
use derive_more::{Display, Error};
use tracing::instrument;

/// Contract violation on a single peg operation.
///
/// Callers are expected to pre-check with `can_accept`, `can_accept_run`
/// or a non-empty test, so these never surface through `GameSession`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum PegError {
    /// The peg is already at capacity.
    #[display("Peg is full (capacity {})", capacity)]
    CapacityExceeded {
        /// Capacity of the peg.
        capacity: usize,
    },

    /// The peg has no rings, or fewer than were requested.
    #[display("Peg is empty")]
    EmptyPeg,
}

impl std::error::Error for PegError {}

/// What is wrong with a level pack or level definition.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum ConfigurationErrorKind {
    /// `peg_count` disagrees with the number of authored peg configs.
    #[display("peg_count is {} but {} peg configs were given", expected, actual)]
    PegCountMismatch {
        /// Declared peg count.
        expected: usize,
        /// Number of peg configs.
        actual: usize,
    },

    /// A mystery assignment resolves to `Mystery`.
    #[display("mystery assignment at peg {} ring {} must name a real color", peg, ring)]
    UnresolvableMystery {
        /// Peg index.
        peg: usize,
        /// Ring index from the bottom.
        ring: usize,
    },

    /// Pegs must hold at least one ring.
    #[display("peg capacity must be at least 1")]
    ZeroCapacity,

    /// Capacity is beyond what any level could use.
    #[display("peg capacity {} exceeds the limit of {}", capacity, max)]
    CapacityTooLarge {
        /// Requested capacity.
        capacity: usize,
        /// Largest accepted capacity.
        max: usize,
    },

    /// A level index outside the pack was requested.
    #[display("level {} does not exist (pack has {})", index, count)]
    UnknownLevel {
        /// Requested index.
        index: usize,
        /// Levels in the pack.
        count: usize,
    },

    /// The level pack could not be read.
    #[display("failed to read level pack: {}", _0)]
    Read(String),

    /// The level pack could not be parsed.
    #[display("failed to parse level pack: {}", _0)]
    Parse(String),
}

/// Inconsistent level data. Loading aborts and no partial level is presented.
#[derive(Debug, Clone, Display, Error)]
#[display("Configuration error: {} at {}:{}", kind, file, line)]
pub struct ConfigurationError {
    /// What went wrong.
    pub kind: ConfigurationErrorKind,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigurationError {
    /// Creates a new configuration error with caller location tracking.
    #[track_caller]
    #[instrument]
    pub fn new(kind: ConfigurationErrorKind) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            kind,
            line: loc.line(),
            file: loc.file(),
        }
    }

    /// Returns what went wrong.
    pub fn kind(&self) -> &ConfigurationErrorKind {
        &self.kind
    }
}

/// Error that can occur when validating or applying a move.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The lifted run no longer sits on top of its source peg.
    #[display("Lifted run is no longer on top of {}", source_peg)]
    SelectionStateMismatch {
        /// Peg the run was lifted from.
        source_peg: PegId,
    },

    /// The destination cannot take the run.
    #[display("{} cannot accept the run", to)]
    DestinationRejects {
        /// Destination peg.
        to: PegId,
    },

    /// A peg operation broke its contract.
    #[display("Peg contract violated: {}", _0)]
    Peg(PegError),

    /// An invariant was violated (postcondition failure).
    #[display("Invariant violation: {}", _0)]
    InvariantViolation(String),
}

impl std::error::Error for MoveError {}

impl From<PegError> for MoveError {
    fn from(err: PegError) -> Self {
        MoveError::Peg(err)
    }
}

/// Error returned by session operations.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum SessionError {
    /// The peg is not part of the active level.
    #[display("{} is not part of the active level", _0)]
    UnknownPeg(PegId),

    /// A move broke a peg contract or board invariant after passing its
    /// preconditions. Indicates an engine bug.
    #[display("Move failed: {}", _0)]
    Move(MoveError),
}

impl std::error::Error for SessionError {}
