//! First-class board invariants.
//!
//! Invariants are logical properties that must hold after every transition.
//! They are testable independently and document what the engine guarantees.

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
///
/// Implemented for tuples of invariants.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set, collecting every violation.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

fn collect<S, I: Invariant<S>>(state: &S, violations: &mut Vec<InvariantViolation>) {
    if !I::holds(state) {
        violations.push(InvariantViolation::new(I::description()));
    }
}

impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();
        collect::<S, I1>(state, &mut violations);
        collect::<S, I2>(state, &mut violations);
        collect::<S, I3>(state, &mut violations);

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

impl<S, I1, I2> InvariantSet<S> for (I1, I2)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();
        collect::<S, I1>(state, &mut violations);
        collect::<S, I2>(state, &mut violations);

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

pub mod capacity_bounded;
pub mod exclusive_ownership;
pub mod resolved_colors;

pub use capacity_bounded::CapacityBoundedInvariant;
pub use exclusive_ownership::ExclusiveOwnershipInvariant;
pub use resolved_colors::ResolvedColorsInvariant;

/// All board invariants as a composable set.
pub type RingSortInvariants = (
    CapacityBoundedInvariant,
    ExclusiveOwnershipInvariant,
    ResolvedColorsInvariant,
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Board, LevelDefinition, PegId, Ring, RingColor, RingId};

    fn sample_board() -> Board {
        let level = LevelDefinition::new(
            3,
            vec![
                vec![RingColor::Red, RingColor::Blue],
                vec![RingColor::Blue],
                vec![],
            ],
            vec![],
        );
        Board::populate(&level, 4).0
    }

    #[test]
    fn test_invariant_set_holds_for_fresh_board() {
        assert!(RingSortInvariants::check_all(&sample_board()).is_ok());
    }

    #[test]
    fn test_invariant_set_holds_after_transfer() {
        let mut board = sample_board();
        board.transfer(PegId(0), PegId(1), 1).unwrap();
        assert!(RingSortInvariants::check_all(&board).is_ok());
    }

    #[test]
    fn test_invariant_set_reports_every_violation() {
        let mut board = sample_board();
        let pegs = board.pegs_mut();
        // Duplicate a ring and overfill a peg in one go.
        let copy = pegs[0].rings()[0].clone();
        let overfill = pegs[2].rings_mut();
        overfill.push(copy);
        overfill.extend((10..14).map(|i| Ring::plain(RingId(i), RingColor::Green)));

        let violations = RingSortInvariants::check_all(&board).unwrap_err();
        assert_eq!(violations.len(), 2);
    }

    #[test]
    fn test_two_invariants_as_set() {
        type TwoInvariants = (CapacityBoundedInvariant, ResolvedColorsInvariant);
        assert!(TwoInvariants::check_all(&sample_board()).is_ok());
    }
}
