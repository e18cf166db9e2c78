//! The active set of pegs for a loaded level.

use super::error::{MoveError, PegError};
use super::level::LevelDefinition;
use super::peg::Peg;
use super::ring::Ring;
use super::types::{PegId, RingColor, RingId};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

/// Ring placed while building a board, reported so the caller can mirror it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlacedRing {
    /// Peg holding the ring.
    pub peg: PegId,
    /// The ring's identity.
    pub ring: RingId,
    /// Color shown when placed.
    pub display_color: RingColor,
}

/// Ordered pegs sharing one capacity. Owns every ring of the level.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    capacity: usize,
    pegs: Vec<Peg>,
}

impl Board {
    /// Creates a board of empty pegs.
    pub fn new(peg_count: usize, capacity: usize) -> Self {
        Self {
            capacity,
            pegs: (0..peg_count).map(|i| Peg::new(PegId(i), capacity)).collect(),
        }
    }

    /// Builds a board from a level definition that has already been validated.
    ///
    /// Mystery entries without an assignment become `White`. A peg stops
    /// filling once it reaches capacity. Both cases are logged.
    #[instrument(skip(level), fields(peg_count = level.peg_count()))]
    pub fn populate(level: &LevelDefinition, capacity: usize) -> (Self, Vec<PlacedRing>) {
        let mut board = Self::new(*level.peg_count(), capacity);
        let mut placed = Vec::with_capacity(level.total_ring_count());
        let mut next_id = 0u32;

        for (p, (config, peg)) in level.pegs().iter().zip(board.pegs.iter_mut()).enumerate() {
            for (r, &authored) in config.iter().enumerate() {
                if peg.is_full() {
                    warn!(
                        peg = p,
                        capacity,
                        skipped = config.len() - r,
                        "Peg reached capacity during load; skipping remaining rings"
                    );
                    break;
                }

                let hidden = if authored == RingColor::Mystery {
                    let found = level.mystery_color(p, r);
                    if found.is_none() {
                        warn!(
                            peg = p,
                            ring = r,
                            "Mystery ring has no assigned color; defaulting to white"
                        );
                    }
                    found
                } else {
                    None
                };

                let ring = Ring::new(RingId(next_id), authored, hidden);
                next_id += 1;
                placed.push(PlacedRing {
                    peg: peg.id(),
                    ring: ring.id(),
                    display_color: ring.display_color(),
                });
                // Fullness was checked above.
                if let Err(e) = peg.push(ring) {
                    warn!(peg = p, error = %e, "Ring could not be placed");
                }
            }
        }

        debug!(rings = placed.len(), "Board populated");
        (board, placed)
    }

    /// Shared peg capacity.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// All pegs in order.
    pub fn pegs(&self) -> &[Peg] {
        &self.pegs
    }

    /// Looks up a peg.
    pub fn peg(&self, id: PegId) -> Option<&Peg> {
        self.pegs.get(id.index())
    }

    pub(crate) fn peg_mut(&mut self, id: PegId) -> Option<&mut Peg> {
        self.pegs.get_mut(id.index())
    }

    #[cfg(test)]
    pub(crate) fn pegs_mut(&mut self) -> &mut Vec<Peg> {
        &mut self.pegs
    }

    /// Number of rings on the board.
    pub fn ring_count(&self) -> usize {
        self.pegs.iter().map(Peg::len).sum()
    }

    /// Moves the top `count` rings of `from` onto `to`, preserving order.
    ///
    /// Room and availability are checked before anything moves, so a failure
    /// leaves the board untouched. Color legality is the caller's concern.
    #[instrument(skip(self))]
    pub fn transfer(&mut self, from: PegId, to: PegId, count: usize) -> Result<(), MoveError> {
        let available = self
            .peg(from)
            .map(Peg::len)
            .ok_or(MoveError::SelectionStateMismatch { source_peg: from })?;
        let dest = self.peg(to).ok_or(MoveError::DestinationRejects { to })?;
        if from == to || count > dest.free_slots() {
            return Err(MoveError::DestinationRejects { to });
        }
        if count > available {
            return Err(PegError::EmptyPeg.into());
        }

        let run = self.pegs[from.index()].pop_run(count)?;
        self.pegs[to.index()].push_run(run)?;
        debug!(%from, %to, count, "Rings transferred");
        Ok(())
    }

    /// Formats the board one peg per line, bottom-to-top.
    ///
    /// Hidden rings show as `?`; empty slots as `.`.
    pub fn display(&self) -> String {
        let mut result = String::new();
        for peg in &self.pegs {
            result.push_str(&format!("{:>2} |", peg.id().index()));
            for ring in peg.rings() {
                result.push(ring.display_color().symbol());
            }
            for _ in 0..peg.free_slots() {
                result.push('.');
            }
            result.push('\n');
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::level::MysteryAssignment;
    use RingColor::*;

    #[test]
    fn test_populate_resolves_mysteries() {
        let level = LevelDefinition::new(
            2,
            vec![vec![Red, Mystery], vec![Mystery]],
            vec![MysteryAssignment::new(0, 1, Blue)],
        );
        let (board, placed) = Board::populate(&level, 4);
        assert_eq!(placed.len(), 3);
        let top = board.peg(PegId(0)).unwrap().peek_top().unwrap();
        assert_eq!(top.display_color(), Mystery);
        assert_eq!(top.true_color(), Blue);
        let orphan = board.peg(PegId(1)).unwrap().peek_top().unwrap();
        assert_eq!(orphan.true_color(), White);
    }

    #[test]
    fn test_populate_stops_at_capacity() {
        let level = LevelDefinition::new(1, vec![vec![Red, Red, Blue]], vec![]);
        let (board, placed) = Board::populate(&level, 2);
        assert_eq!(placed.len(), 2);
        assert_eq!(board.ring_count(), 2);
        assert_eq!(board.peg(PegId(0)).unwrap().top_color(), Some(Red));
    }

    #[test]
    fn test_ring_ids_are_unique() {
        let level = LevelDefinition::new(2, vec![vec![Red, Red], vec![Blue]], vec![]);
        let (_, placed) = Board::populate(&level, 4);
        let ids: Vec<_> = placed.iter().map(|p| p.ring).collect();
        assert_eq!(ids, vec![RingId(0), RingId(1), RingId(2)]);
    }

    #[test]
    fn test_transfer_checks_room_first() {
        let level = LevelDefinition::new(2, vec![vec![Red, Red], vec![Red, Red, Red]], vec![]);
        let (mut board, _) = Board::populate(&level, 4);
        let before = board.clone();
        assert!(board.transfer(PegId(0), PegId(1), 2).is_err());
        assert_eq!(board, before);
        assert!(board.transfer(PegId(0), PegId(1), 1).is_ok());
        assert_eq!(board.peg(PegId(1)).unwrap().len(), 4);
    }

    #[test]
    fn test_transfer_more_than_available_is_empty_peg() {
        let level = LevelDefinition::new(2, vec![vec![Red, Red], vec![]], vec![]);
        let (mut board, _) = Board::populate(&level, 4);
        let before = board.clone();
        assert_eq!(
            board.transfer(PegId(0), PegId(1), 3),
            Err(MoveError::Peg(PegError::EmptyPeg))
        );
        assert_eq!(board, before);
    }

    #[test]
    fn test_display_marks_empty_slots() {
        let level = LevelDefinition::new(2, vec![vec![Red, Mystery], vec![]], vec![]);
        let (board, _) = Board::populate(&level, 3);
        assert_eq!(board.display(), " 0 |R?.\n 1 |...\n");
    }
}
