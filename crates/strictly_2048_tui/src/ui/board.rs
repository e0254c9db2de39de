//! 2048 board rendering.

use strictly_2048::{Game, Position, SIZE};

use super::palette;
use crate::surface::{Point, Size, Surface};

/// Message shown over the board once no move is left.
pub const GAME_OVER_TEXT: &str = "Game Over!";

/// Key help shown on the last row.
pub const HELP_TEXT: &str = "arrows move | r restart | q quit";

/// Where the board sits and how big its cells are, in terminal cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardGeometry {
    /// Top-left corner of the first cell.
    pub origin: Point,
    /// Distance from one cell to the next.
    pub stride: Size,
    /// Gap between cells.
    pub padding: Size,
}

impl Default for BoardGeometry {
    fn default() -> Self {
        Self {
            origin: Point::new(2, 2),
            stride: Size::new(8, 4),
            padding: Size::new(1, 1),
        }
    }
}

impl BoardGeometry {
    /// Extent of one cell.
    pub fn cell_size(&self) -> Size {
        Size::new(
            self.stride.width.saturating_sub(self.padding.width),
            self.stride.height.saturating_sub(self.padding.height),
        )
    }

    /// Top-left corner of the cell at `pos`.
    pub fn cell_origin(&self, pos: Position) -> Point {
        Point::new(
            self.origin.x + self.stride.width * pos.x as u16,
            self.origin.y + self.stride.height * pos.y as u16,
        )
    }

    /// Top-left corner of the board frame.
    pub fn frame_origin(&self) -> Point {
        Point::new(
            self.origin.x.saturating_sub(self.padding.width),
            self.origin.y.saturating_sub(self.padding.height),
        )
    }

    /// Extent of the board frame.
    pub fn frame_size(&self) -> Size {
        Size::new(
            self.stride.width * SIZE as u16 + self.padding.width,
            self.stride.height * SIZE as u16 + self.padding.height,
        )
    }

    /// Extent of the whole window: board plus margins.
    pub fn window_size(&self) -> Size {
        Size::new(
            self.origin.x + self.stride.width * SIZE as u16 + self.padding.width * 3,
            self.origin.y + self.stride.height * SIZE as u16 + self.padding.height * 3,
        )
    }
}

/// Paints a [`Game`] onto a [`Surface`].
#[derive(Debug, Clone, Copy, Default)]
pub struct BoardPainter {
    geometry: BoardGeometry,
}

impl BoardPainter {
    /// Creates a painter for the given layout.
    pub fn new(geometry: BoardGeometry) -> Self {
        Self { geometry }
    }

    /// Returns the layout.
    pub fn geometry(&self) -> &BoardGeometry {
        &self.geometry
    }

    /// Paints one full frame. Does not present it.
    pub fn paint<S: Surface + ?Sized>(&self, surface: &mut S, game: &Game) {
        let window = self.geometry.window_size();
        surface.fill_rect(Point::default(), window, palette::BACKGROUND);
        surface.fill_rect(
            self.geometry.frame_origin(),
            self.geometry.frame_size(),
            palette::BOARD,
        );

        for pos in Position::all() {
            self.paint_cell(surface, pos, game.board().get(pos));
        }

        surface.draw_text(&format!("Score: {}", game.score()), palette::TEXT, Point::default());

        if game.is_over() {
            let size = surface.measure_text(GAME_OVER_TEXT);
            let origin = Point::new(
                (window.width / 2).saturating_sub(size.width / 2),
                (window.height / 2).saturating_sub(size.height / 2),
            );
            surface.draw_text(GAME_OVER_TEXT, palette::TEXT, origin);
        }

        surface.draw_text(
            HELP_TEXT,
            palette::HELP_TEXT,
            Point::new(0, window.height.saturating_sub(1)),
        );
    }

    fn paint_cell<S: Surface + ?Sized>(&self, surface: &mut S, pos: Position, value: u32) {
        let origin = self.geometry.cell_origin(pos);
        let cell = self.geometry.cell_size();
        surface.fill_rect(origin, cell, palette::tile_color(value));

        if value == 0 {
            return;
        }
        let label = value.to_string();
        let text = surface.measure_text(&label);
        let at = Point::new(
            origin.x + cell.width.saturating_sub(text.width) / 2,
            origin.y + cell.height.saturating_sub(text.height) / 2,
        );
        surface.draw_text(&label, palette::TILE_TEXT, at);
    }
}
