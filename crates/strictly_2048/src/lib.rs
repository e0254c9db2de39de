//! Strictly 2048 - pure game logic for the 4×4 tile-sliding puzzle.
//!
//! The crate owns the board state machine and nothing else: rendering,
//! input and the choice of random generator are supplied by the caller.
//!
//! # Architecture
//!
//! - **Types**: [`Board`], [`Position`] and [`Direction`]
//! - **Rules**: pure functions for shifting, spawning and terminal detection
//! - **Game**: [`Game`] ties board, score and game-over flag together
//! - **Invariants**: properties every reachable game satisfies
//!
//! # Example
//!
//! ```
//! use strictly_2048::{Direction, Game, MovePolicy, ScriptedRandom};
//!
//! let mut random = ScriptedRandom::new([0, 0]);
//! let mut game = Game::new(&mut random);
//! let outcome = game
//!     .apply_move(Direction::Left, &mut random, MovePolicy::default())
//!     .expect("fresh game accepts moves");
//! assert_eq!(outcome.score_gained, 4);
//! assert_eq!(game.score(), 4);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod game;
mod invariants;
mod random;
pub mod rules;
mod types;

pub use action::{MoveError, MoveOutcome, MovePolicy};
pub use game::Game;
pub use invariants::{
    GameInvariants, Invariant, InvariantSet, InvariantViolation, PowerOfTwoTiles,
    ScoreMatchesTiles,
};
pub use random::{RandomSource, ScriptedRandom, StdRandom};
pub use rules::{MergeMask, ShiftSummary, Slide};
pub use types::{Board, CELLS, Direction, EMPTY, MAX_INITIAL_TILES, Position, SIZE, SPAWN_VALUE};
