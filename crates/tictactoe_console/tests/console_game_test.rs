//! Scripted console games end to end.

use std::io::{Cursor, Write};
use tictactoe_console::{ConsoleConfig, ConsoleGame};
use tictactoe_engine::{Cell, Outcome, Player};

/// Human always tries cells 1..9 in order; taken cells are re-prompted.
fn sweeping_script() -> String {
    "1\n2\n3\n4\n5\n6\n7\n8\n9\n".repeat(5)
}

fn run(script: &str, config: &ConsoleConfig) -> (Outcome, String) {
    let mut output = Vec::new();
    let outcome = ConsoleGame::new(Cursor::new(script.as_bytes()), &mut output, config)
        .run()
        .expect("game finishes");
    (outcome, String::from_utf8(output).unwrap())
}

#[test]
fn test_human_first_never_beats_computer() {
    let (outcome, output) = run(&sweeping_script(), &ConsoleConfig::default());
    assert_ne!(outcome, Outcome::Win(Player::Min));
    assert!(output.trim_end().ends_with("The computer wins.") || output.trim_end().ends_with("draw."));
}

#[test]
fn test_computer_first_never_loses() {
    let config = ConsoleConfig::default().with_computer_first(true);
    let (outcome, output) = run(&sweeping_script(), &config);
    assert_ne!(outcome, Outcome::Win(Player::Min));
    assert!(output.starts_with("___\n___\n___"));
}

#[test]
fn test_corner_opening_is_answered_in_center() {
    let mut output = Vec::new();
    let mut game = ConsoleGame::new(Cursor::new(&b"1\n"[..]), &mut output, &ConsoleConfig::default());
    assert!(game.run().is_err());
    assert_eq!(game.board().get(0), Cell::Min);
    assert_eq!(game.board().get(4), Cell::Max);
}

#[test]
fn test_config_file_markers_are_used() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        file,
        r#"
computer_first = false

[markers]
empty = "."
max = "C"
min = "H"
"#
    )
    .unwrap();

    let config = ConsoleConfig::load_or_default(file.path()).unwrap();
    let (_, output) = run(&sweeping_script(), &config);
    assert!(output.starts_with("...\n...\n..."));
    assert!(output.contains("Player H, enter a cell (1-9): "));
    assert!(output.contains("HC."));
}

#[test]
fn test_missing_config_uses_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let config = ConsoleConfig::load_or_default(dir.path().join("absent.toml")).unwrap();
    assert_eq!(config, ConsoleConfig::default());
}

#[test]
fn test_malformed_config_is_rejected() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "computer_first = \"sometimes\"").unwrap();
    let err = ConsoleConfig::from_file(file.path()).unwrap_err();
    assert!(err.message.contains("Failed to parse config"));
}
