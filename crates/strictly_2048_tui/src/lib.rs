//! Terminal frontend for strictly_2048.
//!
//! # Architecture
//!
//! - **Surface**: the rectangle-and-text drawing boundary, backed by ratatui
//! - **Input**: crossterm key events mapped to [`Command`]s
//! - **UI**: [`BoardPainter`] lays the board out on a [`Surface`]
//! - **Controller**: [`GameController`] runs the frame loop
//! - **Config**: [`AppConfig`] loaded from TOML, overridden by the [`Cli`]

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod config;
mod controller;
mod input;
mod logging;
mod surface;
pub mod ui;

pub use cli::Cli;
pub use config::{AppConfig, ConfigError};
pub use controller::{Flow, GameController};
pub use input::{Command, CrosstermInput, InputSource, command_for_key};
pub use logging::init_file_tracing;
pub use surface::{Point, Rgba, Size, Surface, TerminalSession, TerminalSurface};
pub use ui::{BoardGeometry, BoardPainter};
