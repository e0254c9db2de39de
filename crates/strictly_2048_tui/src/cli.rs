//! Command-line interface for strictly_2048.

use std::path::PathBuf;

use clap::Parser;

/// Strictly 2048 - slide tiles, merge equal pairs, reach 2048
#[derive(Parser, Debug)]
#[command(name = "strictly_2048")]
#[command(about = "Terminal 2048", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML config file (defaults are used if it doesn't exist)
    #[arg(short, long, default_value = "strictly_2048.toml")]
    pub config: PathBuf,

    /// Seed for the tile generator, overrides the config file
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Log file, overrides the config file
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_defaults_and_overrides() {
        let cli = Cli::parse_from(["strictly_2048"]);
        assert_eq!(cli.config, PathBuf::from("strictly_2048.toml"));
        assert_eq!(cli.seed, None);

        let cli = Cli::parse_from(["strictly_2048", "--seed", "12", "--log-file", "play.log"]);
        assert_eq!(cli.seed, Some(12));
        assert_eq!(cli.log_file, Some(PathBuf::from("play.log")));
    }
}
