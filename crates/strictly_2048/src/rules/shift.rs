//! Sliding and merging tiles.

use serde::{Deserialize, Serialize};
use tracing::{instrument, trace};

use crate::types::{Board, Direction, EMPTY, Position};

/// Cells that already received a merge during the current move.
///
/// A tile produced by a merge cannot absorb another tile until the next
/// move starts with a fresh mask.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MergeMask(u16);

impl MergeMask {
    /// Creates an empty mask.
    pub fn new() -> Self {
        Self::default()
    }

    /// Checks if `pos` was merged into during this move.
    pub fn contains(self, pos: Position) -> bool {
        self.0 & (1 << pos.to_index()) != 0
    }

    /// Records a merge into `pos`.
    pub fn insert(&mut self, pos: Position) {
        self.0 |= 1 << pos.to_index();
    }

    /// Number of cells merged into.
    pub fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    /// Checks if no merge happened.
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }
}

/// What happened to one tile during a shift.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Slide {
    /// The tile did not move (or the cell was empty).
    Stayed,
    /// The tile slid through empty cells.
    Moved {
        /// Where the tile started.
        from: Position,
        /// Where the tile came to rest.
        to: Position,
    },
    /// The tile slid (possibly zero cells) and merged into its neighbor.
    Merged {
        /// Where the tile started.
        from: Position,
        /// The cell that now holds the merged tile.
        into: Position,
        /// Value of the merged tile.
        value: u32,
    },
}

/// Totals for a whole directional move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ShiftSummary {
    /// Tiles that slid without merging.
    pub moved: usize,
    /// Merges performed.
    pub merged: usize,
    /// Sum of the values produced by merges.
    pub score_gained: u32,
}

impl ShiftSummary {
    /// Checks if the move changed the board.
    pub fn changed(&self) -> bool {
        self.moved > 0 || self.merged > 0
    }
}

/// Checks if the tile at `pos` could take one step in `direction`.
///
/// True iff the neighbor is on the board and is either empty or holds the
/// same value. Cells on the board edge in `direction` return false.
#[instrument(level = "trace", skip(board), ret)]
pub fn can_shift(board: &Board, direction: Direction, pos: Position) -> bool {
    pos.step(direction).is_some_and(|next| {
        let target = board.get(next);
        target == EMPTY || target == board.get(pos)
    })
}

/// Slides the tile at `from` as far as it goes in `direction`.
///
/// The tile advances one cell at a time while the next cell is empty. If it
/// then meets an equal tile that has not merged yet this move, the two
/// combine into the neighbor and the walk stops; a tile merges at most once.
#[instrument(level = "trace", skip(board, merged))]
pub fn shift(board: &mut Board, direction: Direction, from: Position, merged: &mut MergeMask) -> Slide {
    let value = board.get(from);
    if value == EMPTY {
        return Slide::Stayed;
    }

    let mut cursor = from;
    while let Some(next) = cursor.step(direction) {
        let target = board.get(next);
        if target == EMPTY {
            board.set(next, value);
            board.set(cursor, EMPTY);
            cursor = next;
        } else if target == value && !merged.contains(next) {
            let combined = value.saturating_mul(2);
            board.set(next, combined);
            board.set(cursor, EMPTY);
            merged.insert(next);
            trace!(%from, into = %next, value = combined, "Merged tiles");
            return Slide::Merged {
                from,
                into: next,
                value: combined,
            };
        } else {
            break;
        }
    }

    if cursor == from {
        Slide::Stayed
    } else {
        Slide::Moved { from, to: cursor }
    }
}

/// Shifts every occupied cell in `direction`, in scan order.
///
/// A cell absorbs at most one merge per call, so `[2, 2, 2, 2]` moved left
/// ends as `[4, 4, 0, 0]`. A cascade that merges again after merging would
/// collapse the same row to `[8, 0, 0, 0]`; that is not how this game plays.
#[instrument(skip(board))]
pub fn shift_all(board: &mut Board, direction: Direction) -> ShiftSummary {
    let mut merged = MergeMask::new();
    let mut summary = ShiftSummary::default();

    for pos in direction.scan_order() {
        if pos.step(direction).is_none() || board.is_empty(pos) {
            continue;
        }
        match shift(board, direction, pos, &mut merged) {
            Slide::Stayed => {}
            Slide::Moved { .. } => summary.moved += 1,
            Slide::Merged { value, .. } => {
                summary.merged += 1;
                summary.score_gained = summary.score_gained.saturating_add(value);
            }
        }
    }

    summary
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(cells: [u32; 4]) -> Board {
        Board::from_rows([cells, [0; 4], [0; 4], [0; 4]])
    }

    #[test]
    fn test_can_shift_into_empty_or_equal() {
        let board = row([2, 0, 2, 4]);
        assert!(can_shift(&board, Direction::Right, Position::new(0, 0)));
        assert!(!can_shift(&board, Direction::Right, Position::new(2, 0)));
        assert!(can_shift(&board, Direction::Down, Position::new(3, 0)));
        assert!(!can_shift(&board, Direction::Up, Position::new(3, 0)));
        assert!(!can_shift(&board, Direction::Right, Position::new(3, 0)));
    }

    #[test]
    fn test_shift_single_tile_runs_to_edge() {
        let mut board = row([0, 0, 0, 8]);
        let slide = shift(&mut board, Direction::Left, Position::new(3, 0), &mut MergeMask::new());
        assert_eq!(slide, Slide::Moved {
            from: Position::new(3, 0),
            to: Position::new(0, 0),
        });
        assert_eq!(board, row([8, 0, 0, 0]));
    }

    #[test]
    fn test_shift_stops_after_merge() {
        let mut board = row([4, 0, 2, 2]);
        let slide = shift(&mut board, Direction::Left, Position::new(3, 0), &mut MergeMask::new());
        assert_eq!(slide, Slide::Merged {
            from: Position::new(3, 0),
            into: Position::new(2, 0),
            value: 4,
        });
        assert_eq!(board, row([4, 0, 4, 0]));
    }

    #[test]
    fn test_merged_cell_refuses_second_merge() {
        let mut board = row([4, 0, 0, 0]);
        let mut merged = MergeMask::new();
        merged.insert(Position::new(0, 0));
        board.set(Position::new(1, 0), 4);
        let slide = shift(&mut board, Direction::Left, Position::new(1, 0), &mut merged);
        assert_eq!(slide, Slide::Stayed);
        assert_eq!(board, row([4, 4, 0, 0]));
    }

    #[test]
    fn test_shift_all_merges_pairs_once() {
        let mut board = row([2, 2, 2, 2]);
        let summary = shift_all(&mut board, Direction::Left);
        assert_eq!(board, row([4, 4, 0, 0]));
        assert_eq!(summary.merged, 2);
        assert_eq!(summary.score_gained, 8);
    }

    #[test]
    fn test_merge_mask_counts() {
        let mut mask = MergeMask::new();
        assert!(mask.is_empty());
        mask.insert(Position::new(3, 3));
        mask.insert(Position::new(0, 0));
        assert_eq!(mask.len(), 2);
        assert!(mask.contains(Position::new(3, 3)));
        assert!(!mask.contains(Position::new(1, 0)));
    }
}
