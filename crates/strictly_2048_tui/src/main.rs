//! Strictly 2048 - terminal game.

#![warn(missing_docs)]

use anyhow::{Context, Result};
use clap::Parser;
use strictly_2048::StdRandom;
use strictly_2048_tui::{
    AppConfig, Cli, CrosstermInput, GameController, TerminalSession, TerminalSurface,
    init_file_tracing,
};
use tracing::{error, info};

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let mut config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("Failed to load {}", cli.config.display()))?;
    if let Some(seed) = cli.seed {
        config = config.with_seed(seed);
    }
    if let Some(log_file) = cli.log_file {
        config = config.with_log_file(log_file);
    }

    init_file_tracing(config.log_file(), config.log_filter())?;
    info!("Starting Strictly 2048");

    let random = match config.seed() {
        Some(seed) => StdRandom::seeded(*seed),
        None => StdRandom::from_entropy(),
    };
    info!(seed = random.seed(), "Random source ready");

    let (session, terminal) = TerminalSession::enter()?;
    let mut controller =
        GameController::new(random, TerminalSurface::new(terminal), CrosstermInput, &config);
    let result = controller.run();
    drop(session);

    if let Err(e) = &result {
        error!(error = ?e, "Game loop error");
    }
    result
}
