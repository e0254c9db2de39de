//! Game controller: the frame loop tying input, game and surface together.

use std::time::Duration;

use anyhow::Result;
use strictly_2048::{Game, GameInvariants, InvariantSet, MovePolicy, RandomSource};
use tracing::{debug, info, instrument, warn};

use crate::config::AppConfig;
use crate::input::{Command, InputSource};
use crate::surface::Surface;
use crate::ui::BoardPainter;

/// Whether the loop keeps going after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Keep running.
    Continue,
    /// Leave the loop.
    Quit,
}

/// Drives one game session.
///
/// The controller owns the [`Game`] and is handed its collaborators at
/// construction: where randomness comes from, where frames are painted and
/// where commands are read.
#[derive(Debug)]
pub struct GameController<R, S, I> {
    game: Game,
    random: R,
    surface: S,
    input: I,
    painter: BoardPainter,
    policy: MovePolicy,
    frame_interval: Duration,
}

impl<R, S, I> GameController<R, S, I>
where
    R: RandomSource,
    S: Surface,
    I: InputSource,
{
    /// Creates a controller and starts a new game.
    #[instrument(skip_all)]
    pub fn new(mut random: R, surface: S, input: I, config: &AppConfig) -> Self {
        let game = Game::new(&mut random);
        info!(policy = ?config.move_policy(), "Creating GameController");
        Self {
            game,
            random,
            surface,
            input,
            painter: BoardPainter::default(),
            policy: config.move_policy(),
            frame_interval: config.frame_interval(),
        }
    }

    /// Replaces the game, e.g. to resume from a known board.
    pub fn with_game(mut self, game: Game) -> Self {
        self.game = game;
        self
    }

    /// Replaces the painter.
    pub fn with_painter(mut self, painter: BoardPainter) -> Self {
        self.painter = painter;
        self
    }

    /// Returns the current game.
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Returns the surface.
    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Applies one command to the game.
    pub fn handle(&mut self, command: Command) -> Flow {
        match command {
            Command::Move(direction) => {
                match self.game.apply_move(direction, &mut self.random, self.policy) {
                    Ok(outcome) => debug!(%outcome, score = self.game.score(), "Move"),
                    Err(e) => debug!(error = %e, %direction, "Move ignored"),
                }
                Flow::Continue
            }
            Command::Reset => {
                info!(score = self.game.score(), "Restarting game");
                self.game.init(&mut self.random);
                Flow::Continue
            }
            Command::Quit => {
                info!(score = self.game.score(), "Player quit");
                Flow::Quit
            }
        }
    }

    /// Recomputes game over, checks invariants, paints and presents.
    pub fn draw(&mut self) -> Result<()> {
        let was_over = self.game.is_over();
        if self.game.recompute_game_over() && !was_over {
            info!(
                score = self.game.score(),
                max_tile = self.game.board().max_tile(),
                "Game over"
            );
        }

        if cfg!(debug_assertions)
            && let Err(violations) = GameInvariants::check_all(&self.game)
        {
            for violation in violations {
                warn!(%violation, board = ?self.game.board(), "Invariant check failed");
            }
        }

        self.painter.paint(&mut self.surface, &self.game);
        self.surface.present()
    }

    /// Runs one frame: wait for a command, apply it, redraw.
    pub fn frame(&mut self) -> Result<Flow> {
        if let Some(command) = self.input.poll_command(self.frame_interval)?
            && self.handle(command) == Flow::Quit
        {
            return Ok(Flow::Quit);
        }
        self.draw()?;
        Ok(Flow::Continue)
    }

    /// Runs frames until the player quits.
    #[instrument(skip(self))]
    pub fn run(&mut self) -> Result<()> {
        info!("Starting game loop");
        self.draw()?;
        while self.frame()? == Flow::Continue {}
        info!(score = self.game.score(), "Game loop finished");
        Ok(())
    }
}
