//! Contract-based validation for moves.
//!
//! Contracts formalize Hoare-style reasoning: {P} action {Q}.

use super::action::PegMove;
use super::error::MoveError;
use super::invariants::{InvariantSet, RingSortInvariants};
use super::{Board, Peg};
use tracing::{instrument, warn};

// ─────────────────────────────────────────────────────────────
//  Contract Trait
// ─────────────────────────────────────────────────────────────

/// A contract defines preconditions and postconditions for state transitions.
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), MoveError>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), MoveError>;
}

// ─────────────────────────────────────────────────────────────
//  Move Preconditions
// ─────────────────────────────────────────────────────────────

/// Precondition: the lifted rings are still the top run of the source peg.
pub struct RunStillOnTop;

impl RunStillOnTop {
    /// Fails with `SelectionStateMismatch` unless `mov.rings` is exactly the source's top run.
    #[instrument(skip(board))]
    pub fn check(mov: &PegMove, board: &Board) -> Result<(), MoveError> {
        let mismatch = MoveError::SelectionStateMismatch {
            source_peg: mov.from,
        };
        let source = board.peg(mov.from).ok_or_else(|| mismatch.clone())?;
        let on_top = source.top_run().iter().map(|r| r.id());
        if mov.rings.is_empty() || !on_top.eq(mov.rings.iter().copied()) {
            warn!(from = %mov.from, "Lifted run does not match source peg");
            return Err(mismatch);
        }
        Ok(())
    }
}

/// Precondition: the destination accepts the source's top run.
pub struct DestinationAccepts;

impl DestinationAccepts {
    /// Fails with `DestinationRejects` unless the destination can take the source's top run.
    #[instrument(skip(board))]
    pub fn check(mov: &PegMove, board: &Board) -> Result<(), MoveError> {
        let rejected = MoveError::DestinationRejects { to: mov.to };
        if mov.from == mov.to {
            return Err(rejected);
        }
        let run = board.peg(mov.from).map(Peg::top_run).unwrap_or_default();
        match board.peg(mov.to) {
            Some(dest) if dest.can_accept_run(run) => Ok(()),
            _ => Err(rejected),
        }
    }
}

/// Composite precondition: a move is legal if the run is still lifted and
/// the destination takes it.
pub struct LegalMove;

impl LegalMove {
    /// Validates all preconditions for a move.
    #[instrument(skip(board))]
    pub fn check(mov: &PegMove, board: &Board) -> Result<(), MoveError> {
        RunStillOnTop::check(mov, board)?;
        DestinationAccepts::check(mov, board)?;
        Ok(())
    }
}

// ─────────────────────────────────────────────────────────────
//  Move Contract (Pre + Post)
// ─────────────────────────────────────────────────────────────

/// Contract for move actions.
///
/// Preconditions:
/// - Lifted run is still the source's top run
/// - Destination accepts the run
///
/// Postconditions:
/// - Board invariants hold
/// - Ring count is conserved
pub struct MoveContract;

impl Contract<Board, PegMove> for MoveContract {
    fn pre(board: &Board, action: &PegMove) -> Result<(), MoveError> {
        LegalMove::check(action, board)
    }

    fn post(before: &Board, after: &Board) -> Result<(), MoveError> {
        RingSortInvariants::check_all(after).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            MoveError::InvariantViolation(format!("Postcondition failed: {}", descriptions))
        })?;

        if before.ring_count() != after.ring_count() {
            return Err(MoveError::InvariantViolation(format!(
                "Ring count changed from {} to {}",
                before.ring_count(),
                after.ring_count()
            )));
        }
        Ok(())
    }
}
