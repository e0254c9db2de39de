//! Moves as first-class results.
//!
//! A key press becomes a [`MoveOutcome`] describing what changed, or a
//! [`MoveError`] when the game refuses the move.

use serde::{Deserialize, Serialize};

use crate::rules::ShiftSummary;
use crate::types::{Direction, Position};

/// How a game reacts to moves at the edges of normal play.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MovePolicy {
    /// Spawn a tile even when the move changed nothing.
    pub spawn_on_noop: bool,
    /// Keep processing moves after the game-over flag is set.
    pub accept_moves_after_game_over: bool,
}

/// Summary of one directional move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveOutcome {
    /// Direction of travel.
    pub direction: Direction,
    /// Tiles that slid without merging.
    pub moved: usize,
    /// Merges performed.
    pub merged: usize,
    /// Score added by this move.
    pub score_gained: u32,
    /// Cell that received the new tile, if any.
    pub spawned: Option<Position>,
}

impl MoveOutcome {
    pub(crate) fn new(direction: Direction, summary: ShiftSummary, spawned: Option<Position>) -> Self {
        Self {
            direction,
            moved: summary.moved,
            merged: summary.merged,
            score_gained: summary.score_gained,
            spawned,
        }
    }

    /// Checks if any tile moved or merged.
    pub fn changed(&self) -> bool {
        self.moved > 0 || self.merged > 0
    }
}

impl std::fmt::Display for MoveOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}: {} moved, {} merged, +{}",
            self.direction, self.moved, self.merged, self.score_gained
        )
    }
}

/// Error returned when a move is refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum MoveError {
    /// The game is over and the policy does not accept further moves.
    #[display("Game is already over")]
    GameOver,
}
