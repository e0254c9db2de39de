//! Game rules for 2048.
//!
//! Pure functions over [`Board`](crate::Board). Score and game-over
//! bookkeeping live in [`Game`](crate::Game); the rules only report what
//! happened to the tiles.

pub mod shift;
pub mod spawn;
pub mod terminal;

pub use shift::{MergeMask, ShiftSummary, Slide, can_shift, shift, shift_all};
pub use spawn::{seed_board, spawn_tile};
pub use terminal::is_locked;
