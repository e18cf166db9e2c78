//! Strictly Rings - rules engine for a peg-and-ring color sorting puzzle.
//!
//! Pegs hold stacks of rings under a shared capacity. Some rings start as
//! mysteries whose true color is hidden until the player lifts them. The
//! player wins by consolidating every color onto its own full peg.
//!
//! # Architecture
//!
//! - **Ring / Peg**: stack discipline, capacity, run extraction, sortedness
//! - **Board**: the pegs of one level, with atomic ring transfers
//! - **Session**: selection state machine, move contracts, win checks
//! - **Campaign**: progression through a TOML level pack
//!
//! Rendering and input are left to the caller, which drives the session with
//! [`GameSession::select_peg`] and mirrors [`SessionEvent`]s.
//!
//! # Example
//!
//! ```
//! use strictly_rings::{GameSession, LevelDefinition, PegId, RingColor::*, SelectOutcome};
//!
//! let mut session = GameSession::default();
//! let level = LevelDefinition::new(2, vec![vec![Red, Red, Red], vec![Red]], vec![]);
//! session.load_level(0, level).unwrap();
//!
//! session.select_peg(PegId(1)).unwrap();
//! let outcome = session.select_peg(PegId(0)).unwrap();
//! assert!(matches!(outcome, SelectOutcome::Moved { won: true, .. }));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod board;
mod campaign;
mod config;
mod error;
mod events;
mod level;
mod peg;
mod ring;
mod session;
mod types;

pub mod contracts;
pub mod invariants;
pub mod rules;

// Crate-level exports - Domain types
pub use types::{PegId, RingColor, RingId};

// Crate-level exports - Pieces
pub use board::{Board, PlacedRing};
pub use peg::Peg;
pub use ring::Ring;

// Crate-level exports - Level data and configuration
pub use config::{GameConfig, MAX_PEG_CAPACITY};
pub use level::{LevelDefinition, MysteryAssignment};

// Crate-level exports - Session and progression
pub use action::PegMove;
pub use campaign::{Campaign, CampaignStatus, Progress};
pub use events::SessionEvent;
pub use session::{GameSession, MAX_RINGS_PER_PEG, SelectOutcome, SelectionState};

// Crate-level exports - Errors
pub use error::{ConfigurationError, ConfigurationErrorKind, MoveError, PegError, SessionError};

// Crate-level exports - Contracts, invariants and rules
pub use contracts::{Contract, MoveContract};
pub use invariants::{Invariant, InvariantSet, RingSortInvariants};
pub use rules::WinSummary;
