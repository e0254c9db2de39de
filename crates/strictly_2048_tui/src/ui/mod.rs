//! Board rendering through the [`Surface`](crate::Surface) boundary.

mod board;
pub mod palette;

pub use board::{BoardGeometry, BoardPainter, GAME_OVER_TEXT, HELP_TEXT};
