//! A single ring, with a displayed color and a true color.

use super::types::{RingColor, RingId};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

/// A ring sitting on a peg.
///
/// All matching and sorting logic compares true colors. The displayed color
/// differs only while a mystery ring is unrevealed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ring {
    id: RingId,
    display_color: RingColor,
    true_color: RingColor,
}

impl Ring {
    /// Creates a ring.
    ///
    /// For a `Mystery` display color the true color is `true_color_if_mystery`
    /// (`White` when absent); otherwise the true color equals the display color.
    /// A true color of `Mystery` is never stored; it falls back to `White`.
    #[instrument]
    pub fn new(
        id: RingId,
        display_color: RingColor,
        true_color_if_mystery: Option<RingColor>,
    ) -> Self {
        let true_color = if display_color == RingColor::Mystery {
            match true_color_if_mystery {
                Some(color) if color != RingColor::Mystery => color,
                Some(_) => {
                    warn!(ring = %id, "Mystery ring cannot hide another mystery; using white");
                    RingColor::White
                }
                None => RingColor::White,
            }
        } else {
            display_color
        };
        Self {
            id,
            display_color,
            true_color,
        }
    }

    /// Creates a ring showing its own color.
    pub fn plain(id: RingId, color: RingColor) -> Self {
        Self::new(id, color, None)
    }

    /// Creates a mystery ring hiding `true_color`.
    pub fn mystery(id: RingId, true_color: RingColor) -> Self {
        Self::new(id, RingColor::Mystery, Some(true_color))
    }

    /// Returns the ring's identity.
    pub fn id(&self) -> RingId {
        self.id
    }

    /// Returns the color currently shown to the player.
    pub fn display_color(&self) -> RingColor {
        self.display_color
    }

    /// Returns the color used for matching and sorting.
    pub fn true_color(&self) -> RingColor {
        self.true_color
    }

    /// Returns true while the ring still hides its true color.
    pub fn is_hidden(&self) -> bool {
        self.display_color == RingColor::Mystery
    }

    /// Shows the true color of a mystery ring.
    ///
    /// One-way. Returns true if this call changed the displayed color.
    #[instrument(skip(self), fields(ring = %self.id))]
    pub fn reveal(&mut self) -> bool {
        if !self.is_hidden() {
            return false;
        }
        self.display_color = self.true_color;
        debug!(color = %self.true_color, "Mystery ring revealed");
        true
    }
}
