//! Drawing surface: filled rectangles and text at cell positions.

use std::io::{self, Stdout};

use crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Terminal,
    backend::{Backend, CrosstermBackend},
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
};
use tracing::{debug, info, instrument};
use unicode_width::UnicodeWidthStr;

/// A cell coordinate on the surface, origin top-left.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Point {
    /// Column.
    pub x: u16,
    /// Row.
    pub y: u16,
}

impl Point {
    /// Creates a point.
    pub const fn new(x: u16, y: u16) -> Self {
        Self { x, y }
    }
}

/// Extent in cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Size {
    /// Columns.
    pub width: u16,
    /// Rows.
    pub height: u16,
}

impl Size {
    /// Creates a size.
    pub const fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// An RGBA color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgba {
    /// Red.
    pub r: u8,
    /// Green.
    pub g: u8,
    /// Blue.
    pub b: u8,
    /// Alpha.
    pub a: u8,
}

impl Rgba {
    /// Creates a color.
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Creates an opaque color.
    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }
}

impl From<Rgba> for Color {
    fn from(color: Rgba) -> Self {
        // Terminals have no alpha channel.
        Color::Rgb(color.r, color.g, color.b)
    }
}

/// Something the game can be painted on.
///
/// Calls between two [`present`](Surface::present) calls make up one frame.
pub trait Surface {
    /// Fills a rectangle with a solid color.
    fn fill_rect(&mut self, origin: Point, size: Size, color: Rgba);

    /// Draws `text` with its first character at `origin`.
    fn draw_text(&mut self, text: &str, color: Rgba, origin: Point);

    /// Returns the extent `text` occupies when drawn.
    fn measure_text(&self, text: &str) -> Size;

    /// Shows everything drawn since the last present.
    fn present(&mut self) -> anyhow::Result<()>;
}

#[derive(Debug, Clone)]
enum DrawOp {
    Fill { area: Rect, color: Color },
    Text { origin: Point, text: String, color: Color },
}

impl DrawOp {
    fn apply(&self, buf: &mut Buffer, bounds: Rect) {
        match self {
            DrawOp::Fill { area, color } => {
                let clipped = area.intersection(bounds);
                if !clipped.is_empty() {
                    buf.set_style(clipped, Style::default().bg(*color));
                }
            }
            DrawOp::Text { origin, text, color } => {
                if origin.x < bounds.left()
                    || origin.y < bounds.top()
                    || origin.x >= bounds.right()
                    || origin.y >= bounds.bottom()
                {
                    return;
                }
                let max_width = usize::from(bounds.right() - origin.x);
                buf.set_stringn(origin.x, origin.y, text, max_width, Style::default().fg(*color));
            }
        }
    }
}

/// [`Surface`] on a ratatui terminal.
///
/// Draw calls are queued and replayed into a single `Terminal::draw` on
/// present, so each frame reaches the terminal as one diff.
#[derive(Debug)]
pub struct TerminalSurface<B: Backend> {
    terminal: Terminal<B>,
    pending: Vec<DrawOp>,
}

impl<B: Backend> TerminalSurface<B> {
    /// Wraps a terminal.
    pub fn new(terminal: Terminal<B>) -> Self {
        Self {
            terminal,
            pending: Vec::new(),
        }
    }

    /// Returns the underlying terminal.
    pub fn terminal(&self) -> &Terminal<B> {
        &self.terminal
    }
}

impl<B> Surface for TerminalSurface<B>
where
    B: Backend,
    <B as Backend>::Error: Send + Sync + 'static,
{
    fn fill_rect(&mut self, origin: Point, size: Size, color: Rgba) {
        self.pending.push(DrawOp::Fill {
            area: Rect::new(origin.x, origin.y, size.width, size.height),
            color: color.into(),
        });
    }

    fn draw_text(&mut self, text: &str, color: Rgba, origin: Point) {
        self.pending.push(DrawOp::Text {
            origin,
            text: text.to_string(),
            color: color.into(),
        });
    }

    fn measure_text(&self, text: &str) -> Size {
        let width = u16::try_from(text.width()).unwrap_or(u16::MAX);
        Size::new(width, 1)
    }

    fn present(&mut self) -> anyhow::Result<()> {
        let ops = std::mem::take(&mut self.pending);
        self.terminal.draw(|frame| {
            let bounds = frame.area();
            let buf = frame.buffer_mut();
            for op in &ops {
                op.apply(buf, bounds);
            }
        })?;
        Ok(())
    }
}

/// Raw-mode alternate-screen session on stdout. Restores the terminal on drop.
#[derive(Debug)]
pub struct TerminalSession {
    _private: (),
}

impl TerminalSession {
    /// Switches the terminal into raw mode on the alternate screen.
    #[instrument]
    pub fn enter() -> anyhow::Result<(Self, Terminal<CrosstermBackend<Stdout>>)> {
        enable_raw_mode()?;
        let session = Self { _private: () };
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;
        terminal.hide_cursor()?;
        info!("Terminal session started");
        Ok((session, terminal))
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        debug!("Restoring terminal");
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen, crossterm::cursor::Show);
    }
}
