//! A peg: a capacity-bounded stack of rings.

use super::error::PegError;
use super::ring::Ring;
use super::types::{PegId, RingColor};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// A peg holding rings bottom-to-top.
///
/// Invariant: `0 <= rings.len() <= capacity`. The last element is the top.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Peg {
    id: PegId,
    capacity: usize,
    rings: Vec<Ring>,
}

impl Peg {
    /// Creates an empty peg.
    pub fn new(id: PegId, capacity: usize) -> Self {
        Self {
            id,
            capacity,
            rings: Vec::new(),
        }
    }

    /// Returns the peg's identity.
    pub fn id(&self) -> PegId {
        self.id
    }

    /// Returns the maximum number of rings.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns the rings bottom-to-top.
    pub fn rings(&self) -> &[Ring] {
        &self.rings
    }

    /// Number of rings on the peg.
    pub fn len(&self) -> usize {
        self.rings.len()
    }

    /// Returns true if the peg holds no rings.
    pub fn is_empty(&self) -> bool {
        self.rings.is_empty()
    }

    /// Returns true if the peg is at capacity.
    pub fn is_full(&self) -> bool {
        self.rings.len() >= self.capacity
    }

    /// Slots still free.
    pub fn free_slots(&self) -> usize {
        self.capacity.saturating_sub(self.rings.len())
    }

    /// Places a ring on top.
    ///
    /// The caller must already have removed the ring from its previous owner.
    #[instrument(skip(self, ring), fields(peg = %self.id, ring = %ring.id()))]
    pub fn push(&mut self, ring: Ring) -> Result<(), PegError> {
        if self.is_full() {
            return Err(PegError::CapacityExceeded {
                capacity: self.capacity,
            });
        }
        self.rings.push(ring);
        Ok(())
    }

    /// Removes and returns the top ring.
    #[instrument(skip(self), fields(peg = %self.id))]
    pub fn pop(&mut self) -> Result<Ring, PegError> {
        self.rings.pop().ok_or(PegError::EmptyPeg)
    }

    /// Returns the top ring without removing it.
    pub fn peek_top(&self) -> Option<&Ring> {
        self.rings.last()
    }

    /// Mutable access to the top ring, used for reveals.
    pub(crate) fn top_mut(&mut self) -> Option<&mut Ring> {
        self.rings.last_mut()
    }

    #[cfg(test)]
    pub(crate) fn rings_mut(&mut self) -> &mut Vec<Ring> {
        &mut self.rings
    }

    /// True color of the top ring, if any.
    pub fn top_color(&self) -> Option<RingColor> {
        self.peek_top().map(Ring::true_color)
    }

    /// Checks whether a single ring may be placed on this peg.
    pub fn can_accept(&self, ring: &Ring) -> bool {
        if self.is_full() {
            return false;
        }
        match self.top_color() {
            None => true,
            Some(top) => ring.true_color() == top,
        }
    }

    /// Checks whether a run (bottom-to-top) may be placed on this peg.
    ///
    /// Only the boundary color is compared; a run extracted by [`Peg::top_run`]
    /// is homogeneous.
    pub fn can_accept_run(&self, run: &[Ring]) -> bool {
        let Some(bottom) = run.first() else {
            return false;
        };
        if self.rings.len() + run.len() > self.capacity {
            return false;
        }
        match self.top_color() {
            None => true,
            Some(top) => bottom.true_color() == top,
        }
    }

    /// Length of the top run: the contiguous rings from the top sharing its true color.
    pub fn top_run_len(&self) -> usize {
        let Some(color) = self.top_color() else {
            return 0;
        };
        self.rings
            .iter()
            .rev()
            .take_while(|ring| ring.true_color() == color)
            .count()
    }

    /// Returns the top run bottom-to-top, so it can be replayed with `push`.
    pub fn top_run(&self) -> &[Ring] {
        &self.rings[self.rings.len() - self.top_run_len()..]
    }

    /// Checks whether this peg is complete: full, and every ring shares one
    /// sortable true color.
    ///
    /// An empty peg counts as sorted. A homogeneous peg below capacity does not.
    pub fn is_sorted(&self) -> bool {
        let Some(color) = self.top_color() else {
            return true;
        };
        if !color.is_sortable() {
            return false;
        }
        self.rings.len() == self.capacity && self.rings.iter().all(|r| r.true_color() == color)
    }

    /// Pushes a run bottom-to-top. Atomic: nothing is pushed if it would overflow.
    #[instrument(skip(self, run), fields(peg = %self.id, count = run.len()))]
    pub fn push_run(&mut self, run: Vec<Ring>) -> Result<(), PegError> {
        if run.len() > self.free_slots() {
            return Err(PegError::CapacityExceeded {
                capacity: self.capacity,
            });
        }
        self.rings.extend(run);
        debug!(len = self.rings.len(), "Run pushed");
        Ok(())
    }

    /// Pops `count` rings and returns them bottom-to-top.
    ///
    /// Fails with `EmptyPeg` if the peg holds fewer than `count` rings.
    #[instrument(skip(self), fields(peg = %self.id))]
    pub fn pop_run(&mut self, count: usize) -> Result<Vec<Ring>, PegError> {
        if count > self.rings.len() {
            return Err(PegError::EmptyPeg);
        }
        let at = self.rings.len() - count;
        Ok(self.rings.split_off(at))
    }
}
