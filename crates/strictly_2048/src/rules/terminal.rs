//! Game-over detection.

use super::shift::can_shift;
use crate::types::{Board, Direction, Position};

/// Checks if no tile can move or merge in any direction.
pub fn is_locked(board: &Board) -> bool {
    !Position::all().any(|pos| {
        Direction::ALL
            .into_iter()
            .any(|direction| can_shift(board, direction, pos))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_checkerboard_is_locked() {
        let board = Board::from_rows([[2, 4, 2, 4], [4, 2, 4, 2], [2, 4, 2, 4], [4, 2, 4, 2]]);
        assert!(is_locked(&board));
    }

    #[test]
    fn test_single_gap_unlocks() {
        let board = Board::from_rows([[2, 4, 2, 4], [4, 2, 4, 2], [2, 4, 0, 4], [4, 2, 4, 2]]);
        assert!(!is_locked(&board));
    }

    #[test]
    fn test_equal_neighbors_unlock_full_board() {
        let board = Board::from_rows([[2, 4, 2, 4], [4, 2, 4, 2], [2, 4, 2, 4], [4, 2, 4, 4]]);
        assert!(!is_locked(&board));
    }

    #[test]
    fn test_empty_board_is_not_locked() {
        assert!(!is_locked(&Board::new()));
    }
}
