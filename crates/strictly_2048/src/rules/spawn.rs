//! Placing new tiles.

use tracing::{debug, instrument};

use crate::random::RandomSource;
use crate::types::{Board, EMPTY, MAX_INITIAL_TILES, Position, SPAWN_VALUE};

/// Draw that suppresses a tile while seeding a new board.
const SUPPRESS_DRAW: u32 = 2;

/// Fills a board for a new game and returns how many tiles were placed.
///
/// Cells are visited in row-major order. Until [`MAX_INITIAL_TILES`] tiles
/// are down, each cell gets a tile unless a draw from `0..=2` comes up `2`.
/// Every cell after the cap is cleared without drawing.
#[instrument(skip(board, random))]
pub fn seed_board<R: RandomSource + ?Sized>(board: &mut Board, random: &mut R) -> usize {
    let mut seeded = 0;
    for pos in Position::all() {
        let value = if seeded == MAX_INITIAL_TILES || random.uniform_int(0, 2) == SUPPRESS_DRAW {
            EMPTY
        } else {
            SPAWN_VALUE
        };
        board.set(pos, value);
        if value != EMPTY {
            seeded += 1;
        }
    }
    debug!(seeded, "Seeded board");
    seeded
}

/// Places a tile in a uniformly chosen empty cell.
///
/// Returns `None` without drawing when the board is full.
#[instrument(skip(board, random))]
pub fn spawn_tile<R: RandomSource + ?Sized>(board: &mut Board, random: &mut R) -> Option<Position> {
    let empty = board.empty_positions();
    let last = u32::try_from(empty.len()).ok()?.checked_sub(1)?;
    let pos = *empty.get(random.uniform_int(0, last) as usize)?;
    board.set(pos, SPAWN_VALUE);
    debug!(%pos, "Spawned tile");
    Some(pos)
}
