//! Colors for the board and tiles.

use crate::surface::Rgba;

/// Window background.
pub const BACKGROUND: Rgba = Rgba::opaque(240, 240, 240);

/// Board frame behind the cells.
pub const BOARD: Rgba = Rgba::opaque(187, 173, 160);

/// Empty cell.
pub const EMPTY_CELL: Rgba = Rgba::opaque(204, 192, 179);

/// Tile numbers.
pub const TILE_TEXT: Rgba = Rgba::opaque(30, 30, 30);

/// Score and overlay text.
pub const TEXT: Rgba = Rgba::opaque(0, 0, 0);

/// Key help line.
pub const HELP_TEXT: Rgba = Rgba::opaque(119, 110, 101);

/// Tiles above 2048.
pub const SUPER_TILE: Rgba = Rgba::opaque(60, 58, 50);

const TILES: [(u32, Rgba); 11] = [
    (2, Rgba::opaque(238, 228, 218)),
    (4, Rgba::opaque(237, 224, 200)),
    (8, Rgba::opaque(242, 177, 121)),
    (16, Rgba::opaque(245, 149, 99)),
    (32, Rgba::opaque(246, 124, 96)),
    (64, Rgba::opaque(246, 94, 59)),
    (128, Rgba::opaque(237, 207, 115)),
    (256, Rgba::opaque(237, 204, 98)),
    (512, Rgba::opaque(237, 200, 80)),
    (1024, Rgba::opaque(237, 197, 63)),
    (2048, Rgba::opaque(237, 194, 45)),
];

/// Fill color for a cell holding `value`.
pub fn tile_color(value: u32) -> Rgba {
    if value == 0 {
        return EMPTY_CELL;
    }
    TILES
        .iter()
        .find(|(tile, _)| *tile == value)
        .map_or(SUPER_TILE, |(_, color)| *color)
}
