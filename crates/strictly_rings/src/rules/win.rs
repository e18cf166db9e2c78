//! Win detection over a board.

use crate::{Board, RingColor};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use tracing::{debug, instrument};

/// What the sorted pegs of a board add up to.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WinSummary {
    /// Distinct true colors found on sorted, non-empty pegs.
    pub sorted_colors: BTreeSet<RingColor>,
    /// Rings sitting on sorted pegs.
    pub rings_on_sorted_pegs: usize,
    /// Non-empty pegs that are sorted.
    pub sorted_peg_count: usize,
}

impl WinSummary {
    /// Applies the win condition against the level's expected totals.
    ///
    /// Every expected color must be sorted, every ring must sit on a sorted
    /// peg, and there must be at least one sorted peg per color. Two sorted
    /// pegs sharing a color are counted once in `sorted_colors`.
    pub fn is_win(&self, expected_colors: usize, expected_rings: usize) -> bool {
        self.sorted_colors.len() == expected_colors
            && self.rings_on_sorted_pegs == expected_rings
            && self.sorted_peg_count >= expected_colors
    }
}

/// Collects the sorted pegs of a board. Empty pegs are skipped.
#[instrument(skip(board))]
pub fn evaluate(board: &Board) -> WinSummary {
    let mut summary = WinSummary::default();
    for peg in board.pegs().iter().filter(|p| !p.is_empty()) {
        if !peg.is_sorted() {
            continue;
        }
        if let Some(color) = peg.top_color() {
            summary.sorted_colors.insert(color);
            summary.rings_on_sorted_pegs += peg.len();
            summary.sorted_peg_count += 1;
        }
    }
    debug!(
        sorted_pegs = summary.sorted_peg_count,
        rings = summary.rings_on_sorted_pegs,
        colors = summary.sorted_colors.len(),
        "Win summary"
    );
    summary
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::LevelDefinition;
    use RingColor::*;

    fn board(pegs: Vec<Vec<RingColor>>) -> (Board, LevelDefinition) {
        let level = LevelDefinition::new(pegs.len(), pegs, vec![]);
        (Board::populate(&level, 4).0, level)
    }

    #[test]
    fn test_two_full_pegs_win() {
        let (board, level) = board(vec![vec![Red; 4], vec![Blue; 4]]);
        let summary = evaluate(&board);
        assert_eq!(level.total_distinct_colors(), 2);
        assert_eq!(level.total_ring_count(), 8);
        assert!(summary.is_win(2, 8));
    }

    #[test]
    fn test_mixed_peg_is_not_a_win() {
        let (board, level) = board(vec![vec![Red, Red, Red, Blue], vec![Blue; 4]]);
        let summary = evaluate(&board);
        assert!(!summary.is_win(level.total_distinct_colors(), level.total_ring_count()));
    }

    #[test]
    fn test_empty_pegs_are_skipped() {
        let (board, _) = board(vec![vec![Green; 4], vec![]]);
        let summary = evaluate(&board);
        assert_eq!(summary.sorted_peg_count, 1);
        assert!(summary.is_win(1, 4));
    }

    #[test]
    fn test_partial_peg_blocks_win() {
        let (board, _) = board(vec![vec![Red; 4], vec![Blue; 3], vec![Blue]]);
        assert!(!evaluate(&board).is_win(2, 8));
    }

    #[test]
    fn test_duplicate_color_pegs_count_once() {
        let (board, _) = board(vec![vec![Red; 4], vec![Red; 4]]);
        let summary = evaluate(&board);
        assert_eq!(summary.sorted_colors.len(), 1);
        assert_eq!(summary.sorted_peg_count, 2);
        assert!(summary.is_win(1, 8));
    }
}
