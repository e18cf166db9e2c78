//! Game session: owns the active level and drives the selection state machine.
//!
//! The session moves between two states. In `Idle` nothing is lifted. In
//! `Selecting` a run of rings is marked as lifted from a source peg; the rings
//! stay on that peg until a move succeeds. Every move attempt, successful or
//! not, returns the session to `Idle`.

use super::action::PegMove;
use super::board::Board;
use super::contracts::{Contract, MoveContract};
use super::error::{ConfigurationError, MoveError, SessionError};
use super::events::SessionEvent;
use super::level::LevelDefinition;
use super::ring::Ring;
use super::rules::{self, WinSummary};
use super::types::{PegId, RingId};
use serde::{Deserialize, Serialize};
use tracing::{debug, error, info, instrument, warn};

/// Rings per peg unless a level pack says otherwise.
pub const MAX_RINGS_PER_PEG: usize = 4;

/// Current player selection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SelectionState {
    /// Nothing is lifted.
    #[default]
    Idle,
    /// A run is lifted from `source`.
    Selecting {
        /// Peg the run belongs to.
        source: PegId,
        /// Lifted rings, bottom-to-top.
        lifted: Vec<RingId>,
    },
}

impl SelectionState {
    /// Returns true when nothing is lifted.
    pub fn is_idle(&self) -> bool {
        matches!(self, SelectionState::Idle)
    }
}

/// Result of selecting a peg.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SelectOutcome {
    /// Idle click on an empty peg.
    Ignored {
        /// The clicked peg.
        peg: PegId,
    },
    /// A run was lifted.
    Lifted {
        /// Source peg.
        source: PegId,
        /// Rings in the run.
        count: usize,
        /// Mystery ring revealed by this selection, if any.
        revealed: Option<RingId>,
    },
    /// The source peg was clicked again.
    Deselected {
        /// Source peg.
        source: PegId,
    },
    /// The run moved.
    Moved {
        /// Source peg.
        from: PegId,
        /// Destination peg.
        to: PegId,
        /// Rings moved.
        count: usize,
        /// True if this move won the level.
        won: bool,
    },
    /// The destination refused the run; nothing moved.
    Rejected {
        /// Source peg.
        from: PegId,
        /// Destination peg.
        to: PegId,
    },
    /// The lifted run no longer matched the source peg; selection dropped.
    Aborted {
        /// Source peg.
        source: PegId,
    },
}

#[derive(Debug, Clone)]
struct LoadedLevel {
    index: usize,
    definition: LevelDefinition,
}

/// One player's session on one level.
#[derive(Debug, Clone)]
pub struct GameSession {
    capacity: usize,
    board: Board,
    selection: SelectionState,
    level: Option<LoadedLevel>,
    events: Vec<SessionEvent>,
}

impl GameSession {
    /// Creates a session with no level loaded.
    #[instrument]
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            board: Board::new(0, capacity),
            selection: SelectionState::Idle,
            level: None,
            events: Vec::new(),
        }
    }

    /// Loads a level, replacing whatever was loaded before.
    ///
    /// The definition is validated first; on error the current level is kept.
    #[instrument(skip(self, definition), fields(capacity = self.capacity))]
    pub fn load_level(
        &mut self,
        level_index: usize,
        definition: LevelDefinition,
    ) -> Result<(), ConfigurationError> {
        definition.validate(self.capacity)?;

        if self.level.is_some() {
            debug!("Clearing current level");
            self.events.push(SessionEvent::LevelCleared);
        }

        let (board, placed) = Board::populate(&definition, self.capacity);
        self.events.extend(
            board
                .pegs()
                .iter()
                .map(|peg| SessionEvent::PegCreated { peg: peg.id() }),
        );
        self.events
            .extend(placed.iter().map(|p| SessionEvent::RingCreated {
                peg: p.peg,
                ring: p.ring,
                color: p.display_color,
            }));

        info!(
            level = level_index + 1,
            pegs = board.pegs().len(),
            rings = board.ring_count(),
            "Level loaded"
        );
        self.board = board;
        self.selection = SelectionState::Idle;
        self.level = Some(LoadedLevel {
            index: level_index,
            definition,
        });
        Ok(())
    }

    /// Handles a click on a peg.
    #[instrument(skip(self))]
    pub fn select_peg(&mut self, peg: PegId) -> Result<SelectOutcome, SessionError> {
        if self.board.peg(peg).is_none() {
            return Err(SessionError::UnknownPeg(peg));
        }

        match std::mem::take(&mut self.selection) {
            SelectionState::Idle => Ok(self.lift(peg)),
            SelectionState::Selecting { source, .. } if source == peg => {
                debug!(%source, "Deselected by clicking the source peg");
                self.events.push(SessionEvent::SelectionCleared { peg: source });
                Ok(SelectOutcome::Deselected { source })
            }
            SelectionState::Selecting { source, lifted } => {
                self.attempt_move(PegMove::new(source, peg, lifted))
            }
        }
    }

    /// Drops the current selection, if any. Returns true if something was lifted.
    #[instrument(skip(self))]
    pub fn deselect(&mut self) -> bool {
        match std::mem::take(&mut self.selection) {
            SelectionState::Idle => false,
            SelectionState::Selecting { source, .. } => {
                self.events.push(SessionEvent::SelectionCleared { peg: source });
                true
            }
        }
    }

    fn lift(&mut self, peg: PegId) -> SelectOutcome {
        let Some(source) = self.board.peg_mut(peg) else {
            return SelectOutcome::Ignored { peg };
        };
        if source.is_empty() {
            debug!(%peg, "Clicked an empty peg; nothing to select");
            return SelectOutcome::Ignored { peg };
        }

        let revealed = source.top_mut().and_then(|top| {
            let color = top.true_color();
            top.reveal().then_some((top.id(), color))
        });
        let lifted: Vec<RingId> = source.top_run().iter().map(Ring::id).collect();

        if let Some((ring, color)) = revealed {
            self.events.push(SessionEvent::RingRevealed { ring, color });
        }
        self.events.push(SessionEvent::RunLifted {
            peg,
            rings: lifted.clone(),
        });
        debug!(%peg, count = lifted.len(), "Run lifted");

        let count = lifted.len();
        self.selection = SelectionState::Selecting {
            source: peg,
            lifted,
        };
        SelectOutcome::Lifted {
            source: peg,
            count,
            revealed: revealed.map(|(ring, _)| ring),
        }
    }

    fn attempt_move(&mut self, mov: PegMove) -> Result<SelectOutcome, SessionError> {
        debug!(%mov, "Attempting move");

        match MoveContract::pre(&self.board, &mov) {
            Ok(()) => {}
            Err(MoveError::SelectionStateMismatch { source_peg }) => {
                warn!(
                    %source_peg,
                    "Selected run is no longer on top of its peg; resetting selection"
                );
                self.events.push(SessionEvent::SelectionCleared { peg: source_peg });
                return Ok(SelectOutcome::Aborted { source: source_peg });
            }
            Err(MoveError::DestinationRejects { to }) => {
                debug!(from = %mov.from, %to, "Destination cannot accept the run");
                self.events.push(SessionEvent::MoveRejected { from: mov.from, to });
                self.events.push(SessionEvent::SelectionCleared { peg: mov.from });
                return Ok(SelectOutcome::Rejected { from: mov.from, to });
            }
            Err(e) => return Err(SessionError::Move(e)),
        }

        #[cfg(debug_assertions)]
        let before = self.board.clone();

        if let Err(e) = self.board.transfer(mov.from, mov.to, mov.count()) {
            error!(error = %e, "Transfer failed after preconditions passed");
            return Err(SessionError::Move(e));
        }

        #[cfg(debug_assertions)]
        MoveContract::post(&before, &self.board).map_err(SessionError::Move)?;

        let won = self.check_win_condition();
        info!(%mov, won, "Move succeeded");
        self.events.push(SessionEvent::MoveSucceeded {
            from: mov.from,
            to: mov.to,
            rings: mov.rings.clone(),
        });
        if won {
            info!(level = self.level_index().map(|i| i + 1), "Level cleared");
            self.events.push(SessionEvent::WinConditionMet {
                level_index: self.level_index().unwrap_or_default(),
            });
        }

        Ok(SelectOutcome::Moved {
            from: mov.from,
            to: mov.to,
            count: mov.count(),
            won,
        })
    }

    /// Sums up the sorted pegs on the board.
    pub fn win_summary(&self) -> WinSummary {
        rules::evaluate(&self.board)
    }

    /// Checks whether every color is consolidated on its own completed peg.
    ///
    /// Always false when no level is loaded.
    #[instrument(skip(self))]
    pub fn check_win_condition(&self) -> bool {
        let Some(level) = &self.level else {
            return false;
        };
        let expected_colors = level.definition.total_distinct_colors();
        let expected_rings = level.definition.total_ring_count();
        let summary = self.win_summary();
        debug!(expected_colors, expected_rings, "Checking win condition");
        summary.is_win(expected_colors, expected_rings)
    }

    /// Takes all pending presentation events, oldest first.
    pub fn drain_events(&mut self) -> Vec<SessionEvent> {
        std::mem::take(&mut self.events)
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the current selection.
    pub fn selection(&self) -> &SelectionState {
        &self.selection
    }

    /// Returns the shared peg capacity.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Index of the loaded level.
    pub fn level_index(&self) -> Option<usize> {
        self.level.as_ref().map(|l| l.index)
    }

    /// Definition of the loaded level.
    pub fn level(&self) -> Option<&LevelDefinition> {
        self.level.as_ref().map(|l| &l.definition)
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new(MAX_RINGS_PER_PEG)
    }
}
