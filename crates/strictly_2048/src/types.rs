//! Core domain types for 2048.

use serde::{Deserialize, Serialize};

/// Width and height of the board.
pub const SIZE: usize = 4;

/// Number of cells on the board.
pub const CELLS: usize = SIZE * SIZE;

/// Value of an empty cell.
pub const EMPTY: u32 = 0;

/// Value of every tile placed by `init` and by spawning.
pub const SPAWN_VALUE: u32 = 2;

/// Upper bound on tiles seeded by a new game.
pub const MAX_INITIAL_TILES: usize = 2;

/// Direction of travel for a move.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
    strum::EnumIter,
)]
pub enum Direction {
    /// Toward row 0.
    Up,
    /// Toward the last row.
    Down,
    /// Toward column 0.
    Left,
    /// Toward the last column.
    Right,
}

impl Direction {
    /// All four directions.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Cells in the order a move must process them.
    ///
    /// Lines are walked starting at the edge the tiles travel toward, so a
    /// tile that has already moved is never picked up again later in the
    /// same pass. Moving left walks each row with `x` ascending, moving
    /// right walks it with `x` descending, and likewise for columns.
    pub fn scan_order(self) -> [Position; CELLS] {
        let mut order = [Position::new(0, 0); CELLS];
        for line in 0..SIZE {
            for step in 0..SIZE {
                let along = match self {
                    Direction::Left | Direction::Up => step,
                    Direction::Right | Direction::Down => SIZE - 1 - step,
                };
                order[line * SIZE + step] = match self {
                    Direction::Left | Direction::Right => Position::new(along, line),
                    Direction::Up | Direction::Down => Position::new(line, along),
                };
            }
        }
        order
    }
}

/// A cell on the board. `x` is the column, `y` the row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    /// Column, `0..SIZE`.
    pub x: usize,
    /// Row, `0..SIZE`.
    pub y: usize,
}

impl Position {
    /// Creates a position. Callers keep both coordinates below [`SIZE`].
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// Row-major linear index (0-15).
    pub fn to_index(self) -> usize {
        self.y * SIZE + self.x
    }

    /// Creates a position from a row-major index.
    pub fn from_index(index: usize) -> Option<Self> {
        (index < CELLS).then(|| Self::new(index % SIZE, index / SIZE))
    }

    /// The neighboring cell in `direction`, if it is on the board.
    pub fn step(self, direction: Direction) -> Option<Self> {
        match direction {
            Direction::Up => self.y.checked_sub(1).map(|y| Self::new(self.x, y)),
            Direction::Down => (self.y + 1 < SIZE).then(|| Self::new(self.x, self.y + 1)),
            Direction::Left => self.x.checked_sub(1).map(|x| Self::new(x, self.y)),
            Direction::Right => (self.x + 1 < SIZE).then(|| Self::new(self.x + 1, self.y)),
        }
    }

    /// All 16 positions in row-major order.
    pub fn all() -> impl Iterator<Item = Position> {
        (0..CELLS).map(|index| Self::new(index % SIZE, index / SIZE))
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// 4×4 grid of tile values; `0` is an empty cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Board {
    /// Rows top to bottom, each left to right.
    cells: [[u32; SIZE]; SIZE],
}

impl Board {
    /// Creates an empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a board from rows, top row first.
    pub fn from_rows(cells: [[u32; SIZE]; SIZE]) -> Self {
        Self { cells }
    }

    /// Returns the rows, top row first.
    pub fn rows(&self) -> &[[u32; SIZE]; SIZE] {
        &self.cells
    }

    /// Value at `pos`.
    pub fn get(&self, pos: Position) -> u32 {
        self.cells[pos.y][pos.x]
    }

    /// Sets the value at `pos`.
    pub fn set(&mut self, pos: Position, value: u32) {
        self.cells[pos.y][pos.x] = value;
    }

    /// Checks if the cell at `pos` is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos) == EMPTY
    }

    /// Positions of every empty cell, row-major.
    pub fn empty_positions(&self) -> Vec<Position> {
        Position::all().filter(|pos| self.is_empty(*pos)).collect()
    }

    /// Number of occupied cells.
    pub fn tile_count(&self) -> usize {
        Position::all().filter(|pos| !self.is_empty(*pos)).count()
    }

    /// Sum of all tile values.
    pub fn sum(&self) -> u64 {
        self.cells.iter().flatten().map(|&v| u64::from(v)).sum()
    }

    /// Largest tile on the board, `0` when empty.
    pub fn max_tile(&self) -> u32 {
        self.cells.iter().flatten().copied().max().unwrap_or(EMPTY)
    }

    /// Formats the board as a human-readable grid.
    pub fn display(&self) -> String {
        self.cells
            .iter()
            .map(|row| {
                row.iter()
                    .map(|&v| {
                        if v == EMPTY {
                            format!("{:>5}", ".")
                        } else {
                            format!("{v:>5}")
                        }
                    })
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_stays_on_board() {
        let corner = Position::new(0, 0);
        assert_eq!(corner.step(Direction::Up), None);
        assert_eq!(corner.step(Direction::Left), None);
        assert_eq!(corner.step(Direction::Right), Some(Position::new(1, 0)));
        assert_eq!(corner.step(Direction::Down), Some(Position::new(0, 1)));

        let far = Position::new(3, 3);
        assert_eq!(far.step(Direction::Down), None);
        assert_eq!(far.step(Direction::Right), None);
    }

    #[test]
    fn test_index_is_row_major() {
        assert_eq!(Position::new(1, 0).to_index(), 1);
        assert_eq!(Position::new(0, 1).to_index(), 4);
        assert_eq!(Position::from_index(15), Some(Position::new(3, 3)));
        assert_eq!(Position::from_index(16), None);
    }

    #[test]
    fn test_scan_order_starts_at_leading_edge() {
        let left = Direction::Left.scan_order();
        assert_eq!(&left[..4], &[
            Position::new(0, 0),
            Position::new(1, 0),
            Position::new(2, 0),
            Position::new(3, 0),
        ]);

        let right = Direction::Right.scan_order();
        assert_eq!(right[0], Position::new(3, 0));
        assert_eq!(right[3], Position::new(0, 0));

        let up = Direction::Up.scan_order();
        assert_eq!(up[1], Position::new(0, 1));

        let down = Direction::Down.scan_order();
        assert_eq!(down[0], Position::new(0, 3));
        assert_eq!(down[4], Position::new(1, 3));
    }

    #[test]
    fn test_scan_order_visits_every_cell_once() {
        for direction in Direction::ALL {
            let mut seen = [false; CELLS];
            for pos in direction.scan_order() {
                assert!(!seen[pos.to_index()], "{direction} visits {pos} twice");
                seen[pos.to_index()] = true;
            }
            assert!(seen.iter().all(|&s| s));
        }
    }

    #[test]
    fn test_board_sum_and_max() {
        let board = Board::from_rows([[2, 0, 0, 0], [0, 4, 0, 0], [0, 0, 0, 0], [0, 0, 0, 8]]);
        assert_eq!(board.sum(), 14);
        assert_eq!(board.max_tile(), 8);
        assert_eq!(board.tile_count(), 3);
        assert_eq!(board.empty_positions().len(), 13);
    }
}
