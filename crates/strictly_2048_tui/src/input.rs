//! Keyboard input mapped to game commands.

use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use strictly_2048::Direction;
use tracing::trace;

/// What the player asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Slide every tile in a direction.
    Move(Direction),
    /// Start a new game.
    Reset,
    /// Leave the game.
    Quit,
}

/// Maps a key press to a command.
///
/// Arrow keys, `h`/`j`/`k`/`l` and `w`/`a`/`s`/`d` move; `r` restarts;
/// `q`, `Esc` and `Ctrl+C` quit. Everything else is ignored.
pub fn command_for_key(key: KeyEvent) -> Option<Command> {
    if key.kind == KeyEventKind::Release {
        return None;
    }
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return matches!(key.code, KeyCode::Char('c')).then_some(Command::Quit);
    }

    let command = match key.code {
        KeyCode::Up | KeyCode::Char('k' | 'w') => Command::Move(Direction::Up),
        KeyCode::Down | KeyCode::Char('j' | 's') => Command::Move(Direction::Down),
        KeyCode::Left | KeyCode::Char('h' | 'a') => Command::Move(Direction::Left),
        KeyCode::Right | KeyCode::Char('l' | 'd') => Command::Move(Direction::Right),
        KeyCode::Char('r' | 'R') => Command::Reset,
        KeyCode::Char('q' | 'Q') | KeyCode::Esc => Command::Quit,
        _ => return None,
    };
    Some(command)
}

/// Source of player commands.
pub trait InputSource {
    /// Waits up to `timeout` for the next command.
    ///
    /// Returns `Ok(None)` when the wait ends without a command.
    fn poll_command(&mut self, timeout: Duration) -> anyhow::Result<Option<Command>>;
}

/// Reads commands from the terminal via crossterm.
#[derive(Debug, Default)]
pub struct CrosstermInput;

impl InputSource for CrosstermInput {
    fn poll_command(&mut self, timeout: Duration) -> anyhow::Result<Option<Command>> {
        if !event::poll(timeout)? {
            return Ok(None);
        }
        match event::read()? {
            Event::Key(key) => {
                let command = command_for_key(key);
                trace!(?key, ?command, "Key event");
                Ok(command)
            }
            _ => Ok(None),
        }
    }
}
