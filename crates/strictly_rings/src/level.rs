//! Static level data and its derived queries.

use super::error::{ConfigurationError, ConfigurationErrorKind};
use super::types::RingColor;
use derive_getters::Getters;
use derive_new::new;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use tracing::{instrument, warn};

/// True color of one mystery ring, addressed by peg and position from the bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, new)]
pub struct MysteryAssignment {
    /// Peg index (0-based).
    pub peg: usize,
    /// Ring index on that peg (0-based from the bottom).
    pub ring: usize,
    /// Hidden color of the ring.
    pub color: RingColor,
}

/// Authored description of one level.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters, new)]
pub struct LevelDefinition {
    /// Number of pegs in the level.
    peg_count: usize,
    /// Initial ring colors per peg, bottom-to-top.
    pegs: Vec<Vec<RingColor>>,
    /// Hidden colors for `Mystery` entries in `pegs`.
    #[serde(default)]
    mystery: Vec<MysteryAssignment>,
}

impl LevelDefinition {
    /// Looks up the hidden color for the ring at `(peg, ring)`.
    pub fn mystery_color(&self, peg: usize, ring: usize) -> Option<RingColor> {
        self.mystery
            .iter()
            .find(|m| m.peg == peg && m.ring == ring)
            .map(|m| m.color)
    }

    /// True color a ring will have once loaded.
    ///
    /// Unresolved mystery entries fall back to `White`.
    pub fn resolved_color(&self, peg: usize, ring: usize, authored: RingColor) -> RingColor {
        if authored == RingColor::Mystery {
            self.mystery_color(peg, ring).unwrap_or(RingColor::White)
        } else {
            authored
        }
    }

    /// Counts distinct sortable true colors across all authored rings.
    pub fn total_distinct_colors(&self) -> usize {
        let mut colors = BTreeSet::new();
        for (p, config) in self.pegs.iter().enumerate() {
            for (r, &authored) in config.iter().enumerate() {
                let color = self.resolved_color(p, r, authored);
                if color.is_sortable() {
                    colors.insert(color);
                }
            }
        }
        colors.len()
    }

    /// Total number of authored rings.
    pub fn total_ring_count(&self) -> usize {
        self.pegs.iter().map(Vec::len).sum()
    }

    /// Validates the definition against a peg capacity.
    ///
    /// A peg count mismatch and a mystery assignment naming `Mystery` are
    /// fatal. Unresolved mysteries, stray assignments and pegs authored over
    /// capacity are logged and tolerated.
    #[instrument(skip(self), fields(peg_count = self.peg_count))]
    pub fn validate(&self, capacity: usize) -> Result<(), ConfigurationError> {
        if self.pegs.len() != self.peg_count {
            return Err(ConfigurationError::new(
                ConfigurationErrorKind::PegCountMismatch {
                    expected: self.peg_count,
                    actual: self.pegs.len(),
                },
            ));
        }

        if let Some(bad) = self.mystery.iter().find(|m| m.color == RingColor::Mystery) {
            return Err(ConfigurationError::new(
                ConfigurationErrorKind::UnresolvableMystery {
                    peg: bad.peg,
                    ring: bad.ring,
                },
            ));
        }

        for assignment in &self.mystery {
            let slot = self
                .pegs
                .get(assignment.peg)
                .and_then(|config| config.get(assignment.ring));
            if slot != Some(&RingColor::Mystery) {
                warn!(
                    peg = assignment.peg,
                    ring = assignment.ring,
                    "Mystery assignment does not point at a mystery ring; ignored"
                );
            }
        }

        for (p, config) in self.pegs.iter().enumerate() {
            if config.len() > capacity {
                warn!(
                    peg = p,
                    rings = config.len(),
                    capacity,
                    "Peg authored over capacity; extra rings will be skipped"
                );
            }
        }

        Ok(())
    }
}
