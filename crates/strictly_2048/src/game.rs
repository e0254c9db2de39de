//! The game state machine: board, score and game-over flag.

use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

use crate::action::{MoveError, MoveOutcome, MovePolicy};
use crate::random::RandomSource;
use crate::rules::{self, MergeMask, ShiftSummary, Slide};
use crate::types::{Board, Direction, Position};

/// A game of 2048.
///
/// The game-over flag is only as fresh as the last call to
/// [`recompute_game_over`](Game::recompute_game_over); moves do not update it.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Game {
    board: Board,
    score: u32,
    game_over: bool,
}

impl Game {
    /// Creates a new game with a freshly seeded board.
    #[instrument(skip(random))]
    pub fn new<R: RandomSource + ?Sized>(random: &mut R) -> Self {
        let mut game = Self::default();
        game.init(random);
        game
    }

    /// Creates a game from an existing board and score.
    pub fn from_parts(board: Board, score: u32) -> Self {
        Self {
            board,
            score,
            game_over: false,
        }
    }

    /// Starts over: clears score and flag and seeds a new board.
    #[instrument(skip(self, random))]
    pub fn init<R: RandomSource + ?Sized>(&mut self, random: &mut R) {
        self.score = 0;
        self.game_over = false;
        let seeded = rules::seed_board(&mut self.board, random);
        info!(seeded, "New game");
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the score.
    pub fn score(&self) -> u32 {
        self.score
    }

    /// Returns the game-over flag as of the last recompute.
    pub fn is_over(&self) -> bool {
        self.game_over
    }

    /// Checks if the tile at `pos` could take one step in `direction`.
    #[instrument(level = "trace", skip(self))]
    pub fn can_shift(&self, direction: Direction, pos: Position) -> bool {
        rules::can_shift(&self.board, direction, pos)
    }

    /// Shifts a single tile, crediting any merge to the score.
    #[instrument(skip(self, merged), fields(score = self.score))]
    pub fn shift(&mut self, direction: Direction, pos: Position, merged: &mut MergeMask) -> Slide {
        let slide = rules::shift(&mut self.board, direction, pos, merged);
        if let Slide::Merged { value, .. } = slide {
            self.score = self.score.saturating_add(value);
        }
        slide
    }

    /// Shifts every tile in `direction`, crediting merges to the score.
    #[instrument(skip(self), fields(score = self.score))]
    pub fn shift_all(&mut self, direction: Direction) -> ShiftSummary {
        let summary = rules::shift_all(&mut self.board, direction);
        self.score = self.score.saturating_add(summary.score_gained);
        summary
    }

    /// Places a tile in a random empty cell. No-op on a full board.
    #[instrument(skip(self, random))]
    pub fn spawn_tile<R: RandomSource + ?Sized>(&mut self, random: &mut R) -> Option<Position> {
        rules::spawn_tile(&mut self.board, random)
    }

    /// Recomputes and returns the game-over flag.
    #[instrument(skip(self), ret)]
    pub fn recompute_game_over(&mut self) -> bool {
        self.game_over = rules::is_locked(&self.board);
        self.game_over
    }

    /// Handles one directional key press: shift everything, then spawn.
    ///
    /// Whether a move that changed nothing still spawns, and whether moves
    /// are accepted once the game is over, is decided by `policy`.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::GameOver`] if the flag is set and the policy
    /// refuses moves after game over.
    #[instrument(skip(self, random), fields(score = self.score))]
    pub fn apply_move<R: RandomSource + ?Sized>(
        &mut self,
        direction: Direction,
        random: &mut R,
        policy: MovePolicy,
    ) -> Result<MoveOutcome, MoveError> {
        if self.game_over && !policy.accept_moves_after_game_over {
            return Err(MoveError::GameOver);
        }

        let summary = self.shift_all(direction);
        let spawned = if summary.changed() || policy.spawn_on_noop {
            self.spawn_tile(random)
        } else {
            None
        };

        let outcome = MoveOutcome::new(direction, summary, spawned);
        debug!(%outcome, "Move applied");
        Ok(outcome)
    }
}

impl std::fmt::Display for Game {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Score: {}", self.score)?;
        write!(f, "{}", self.board.display())
    }
}
