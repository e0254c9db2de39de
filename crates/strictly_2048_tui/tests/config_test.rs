//! Tests for loading configuration files from disk.

use std::io::Write;
use std::path::PathBuf;

use strictly_2048::MovePolicy;
use strictly_2048_tui::AppConfig;

#[test]
fn test_missing_file_gives_defaults() {
    let dir = tempfile::tempdir().expect("tempdir");
    let config = AppConfig::load_or_default(dir.path().join("absent.toml")).expect("load");
    assert_eq!(config, AppConfig::default());
}

#[test]
fn test_file_is_parsed() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    writeln!(
        file,
        r#"
seed = 42
accept_moves_after_game_over = true
frame_interval_ms = 16
log_file = "play.log"
log_filter = "strictly_2048=debug"
"#
    )
    .expect("write config");

    let config = AppConfig::load_or_default(file.path()).expect("load");
    assert_eq!(*config.seed(), Some(42));
    assert_eq!(
        config.move_policy(),
        MovePolicy {
            spawn_on_noop: false,
            accept_moves_after_game_over: true,
        }
    );
    assert_eq!(config.frame_interval().as_millis(), 16);
    assert_eq!(config.log_file(), &PathBuf::from("play.log"));
    assert_eq!(config.log_filter(), "strictly_2048=debug");
}

#[test]
fn test_invalid_file_reports_error() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    writeln!(file, "spawn_on_noop = \"sometimes\"").expect("write config");

    let err = AppConfig::load_or_default(file.path()).expect_err("invalid config");
    assert!(err.message.starts_with("Failed to parse config"));
}

#[test]
fn test_overrides_apply_on_top_of_file() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    writeln!(file, "seed = 1").expect("write config");

    let config = AppConfig::from_file(file.path())
        .expect("load")
        .with_seed(7)
        .with_log_file(PathBuf::from("other.log"));
    assert_eq!(*config.seed(), Some(7));
    assert_eq!(config.log_file(), &PathBuf::from("other.log"));
}
