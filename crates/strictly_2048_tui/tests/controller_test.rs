//! Tests for the frame loop with scripted input and randomness.

use std::collections::VecDeque;
use std::time::Duration;

use ratatui::{Terminal, backend::TestBackend, buffer::Buffer, style::Color};
use strictly_2048::{Board, Direction, Game, Position, ScriptedRandom};
use strictly_2048_tui::{
    AppConfig, BoardGeometry, BoardPainter, Command, Flow, GameController, InputSource, Point,
    Size, TerminalSurface,
    ui::{GAME_OVER_TEXT, HELP_TEXT, palette},
};

/// Replays a fixed list of commands, then reports no input.
struct ScriptedInput {
    commands: VecDeque<Command>,
}

impl ScriptedInput {
    fn new(commands: impl IntoIterator<Item = Command>) -> Self {
        Self {
            commands: commands.into_iter().collect(),
        }
    }
}

impl InputSource for ScriptedInput {
    fn poll_command(&mut self, _timeout: Duration) -> anyhow::Result<Option<Command>> {
        Ok(self.commands.pop_front())
    }
}

type TestController = GameController<ScriptedRandom, TerminalSurface<TestBackend>, ScriptedInput>;

fn controller(draws: &[u32], commands: &[Command], config: &AppConfig) -> TestController {
    let terminal = Terminal::new(TestBackend::new(40, 24)).expect("test terminal");
    GameController::new(
        ScriptedRandom::new(draws.iter().copied()),
        TerminalSurface::new(terminal),
        ScriptedInput::new(commands.iter().copied()),
        config,
    )
}

fn buffer(controller: &TestController) -> &Buffer {
    controller.surface().terminal().backend().buffer()
}

fn row_text(buf: &Buffer, y: u16) -> String {
    (0..buf.area.width).map(|x| buf[(x, y)].symbol()).collect()
}

fn locked_game() -> Game {
    let board = Board::from_rows([[2, 4, 2, 4], [4, 2, 4, 2], [2, 4, 2, 4], [4, 2, 4, 2]]);
    Game::from_parts(board, 32)
}

#[test]
fn test_new_controller_starts_seeded_game() {
    let controller = controller(&[0, 0], &[], &AppConfig::default());
    assert_eq!(controller.game().board().tile_count(), 2);
    assert_eq!(controller.game().score(), 0);
}

#[test]
fn test_frame_applies_move_and_draws_score() {
    let mut controller = controller(&[0, 0, 0], &[Command::Move(Direction::Left)], &AppConfig::default());

    assert_eq!(controller.frame().expect("frame"), Flow::Continue);

    let game = controller.game();
    assert_eq!(game.score(), 4);
    assert_eq!(game.board().get(Position::new(0, 0)), 4);
    assert_eq!(game.board().get(Position::new(1, 0)), 2);
    assert!(row_text(buffer(&controller), 0).starts_with("Score: 4"));
}

#[test]
fn test_frame_without_input_still_draws() {
    let mut controller = controller(&[0, 0], &[], &AppConfig::default());
    assert_eq!(controller.frame().expect("frame"), Flow::Continue);
    assert!(row_text(buffer(&controller), 0).starts_with("Score: 0"));
}

#[test]
fn test_quit_stops_before_drawing() {
    let mut controller = controller(&[0, 0], &[Command::Quit], &AppConfig::default());
    assert_eq!(controller.frame().expect("frame"), Flow::Quit);
    assert!(row_text(buffer(&controller), 0).trim().is_empty());
}

#[test]
fn test_run_until_quit() {
    let commands = [
        Command::Move(Direction::Right),
        Command::Reset,
        Command::Move(Direction::Down),
        Command::Quit,
    ];
    let mut controller = controller(&[0, 0, 0], &commands, &AppConfig::default());
    controller.run().expect("run");

    let game = controller.game();
    assert_eq!(game.board().tile_count(), 3);
    assert_eq!(game.score(), 0);
    assert!(!game.is_over());
}

#[test]
fn test_locked_board_shows_game_over_and_ignores_moves() {
    let mut controller = controller(&[0, 0], &[], &AppConfig::default()).with_game(locked_game());
    controller.draw().expect("draw");
    assert!(controller.game().is_over());
    assert!(row_text(buffer(&controller), 10).contains(GAME_OVER_TEXT));

    assert_eq!(controller.handle(Command::Move(Direction::Up)), Flow::Continue);
    assert_eq!(*controller.game().board(), *locked_game().board());
}

#[test]
fn test_reset_leaves_game_over() {
    let mut controller = controller(&[0, 0], &[], &AppConfig::default()).with_game(locked_game());
    controller.draw().expect("draw");
    assert!(controller.game().is_over());

    controller.handle(Command::Reset);
    controller.draw().expect("draw");
    assert!(!controller.game().is_over());
    assert_eq!(controller.game().score(), 0);
    assert!(!row_text(buffer(&controller), 10).contains(GAME_OVER_TEXT));
}

#[test]
fn test_noop_move_spawns_when_configured() {
    let config = AppConfig::from_toml("spawn_on_noop = true").expect("config");
    let mut controller = controller(&[0, 0], &[], &config);
    // Both tiles sit on the left edge of the top row, so Up changes nothing.
    controller.handle(Command::Move(Direction::Up));
    assert_eq!(controller.game().board().tile_count(), 3);

    let mut strict = self::controller(&[0, 0], &[], &AppConfig::default());
    strict.handle(Command::Move(Direction::Up));
    assert_eq!(strict.game().board().tile_count(), 2);
}

#[test]
fn test_custom_painter_changes_layout() {
    let painter = BoardPainter::new(BoardGeometry {
        origin: Point::new(1, 2),
        stride: Size::new(6, 3),
        padding: Size::new(1, 1),
    });
    assert_eq!(painter.geometry().cell_size(), Size::new(5, 2));
    assert_eq!(painter.geometry().window_size(), Size::new(28, 17));

    let mut controller = controller(&[0, 0], &[], &AppConfig::default()).with_painter(painter);
    controller.draw().expect("draw");

    let buf = buffer(&controller);
    assert_eq!(buf[(3, 2)].symbol(), "2");
    assert_eq!(buf[(9, 2)].symbol(), "2");
    assert_eq!(buf[(3, 2)].bg, Color::from(palette::tile_color(2)));
    assert!(row_text(buf, 16).starts_with(HELP_TEXT));
    assert!(!row_text(buf, 20).contains(HELP_TEXT));
}
