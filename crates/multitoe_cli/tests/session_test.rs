//! Tests for the terminal session, driven through scripted input.

use multitoe_cli::{Prompter, Session, SessionConfig};
use std::io::{Cursor, Write};

fn run(input: &str, config: SessionConfig) -> (anyhow::Result<()>, String) {
    let prompter = Prompter::new(Cursor::new(input.as_bytes().to_vec()), Vec::new());
    let mut session = Session::new(prompter, config);
    let result = session.run();
    let output = String::from_utf8(session.into_prompter().into_output()).unwrap();
    (result, output)
}

fn lines(parts: &[&str]) -> String {
    parts.iter().map(|p| format!("{}\n", p)).collect()
}

const TWO_HUMANS: &[&str] = &["3", "2", "Ada", "X", "1", "Bob", "O", "1"];

#[test]
fn test_human_game_to_a_win() {
    let mut input = TWO_HUMANS.to_vec();
    // X takes the top row, O plays the middle row
    input.extend(["0", "0", "1", "0", "0", "1", "1", "1", "0", "2", "n"]);

    let (result, out) = run(&lines(&input), SessionConfig::default());
    result.unwrap();

    assert!(out.contains("WELCOME TO TIC-TAC-TOE GAME"));
    assert!(out.contains("=== Player 2 Configuration ==="));
    assert!(out.contains("Bob's turn (Symbol: O)"));
    assert!(out.contains("Ada WINS!"));
    assert!(out.contains("Total moves: 5"));
    assert!(out.contains("Thank you for playing! Goodbye!"));
}

#[test]
fn test_rejected_move_reprompts_same_player() {
    let mut input = TWO_HUMANS.to_vec();
    input.extend([
        "1", "1", // X center
        "1", "1", // O tries the center again
        "5", "0", // O off the board
        "0", "0", // O corner
        "0", "1", "2", "2", "2", "1", "n",
    ]);

    let (result, out) = run(&lines(&input), SessionConfig::default());
    result.unwrap();

    assert!(out.contains("Error: Cell (1, 1) is already occupied"));
    assert!(out.contains("Error: Position (5, 0) is out of bounds. Valid range: 0-2"));
    assert!(out.contains("Please try again."));
    assert!(out.contains("Ada WINS!"));
    assert!(out.contains("Total moves: 5"));
}

#[test]
fn test_draw_then_replay() {
    let mut input = TWO_HUMANS.to_vec();
    for (row, col) in [
        (0, 0),
        (0, 1),
        (0, 2),
        (1, 1),
        (1, 0),
        (1, 2),
        (2, 1),
        (2, 0),
        (2, 2),
    ] {
        input.push(["0", "1", "2"][row]);
        input.push(["0", "1", "2"][col]);
    }
    input.push("y");
    // Second round starts with Ada again
    input.extend(["0", "0", "1", "0", "0", "1", "1", "1", "0", "2", "n"]);

    let (result, out) = run(&lines(&input), SessionConfig::default());
    result.unwrap();

    assert!(out.contains("IT'S A DRAW!"));
    assert!(out.contains("Total moves: 9"));
    assert!(out.contains("Board has been reset. Starting new game..."));
    assert!(out.contains("Ada WINS!"));
}

#[test]
fn test_duplicate_symbols_fail_setup() {
    let input = lines(&["3", "2", "Ada", "X", "1", "Bob", "X", "1"]);
    let (result, _) = run(&input, SessionConfig::default());

    let err = result.unwrap_err();
    let chain = format!("{:#}", err);
    assert!(chain.contains("Game initialization failed"));
    assert!(chain.contains("Duplicate symbol 'X'"));
}

#[test]
fn test_single_player_fails_setup() {
    let input = lines(&["3", "1", "Solo", "X", "1"]);
    let (result, _) = run(&input, SessionConfig::default());
    assert!(format!("{:#}", result.unwrap_err()).contains("at least 2 players"));
}

#[test]
fn test_end_of_input_exits_cleanly() {
    let (result, out) = run("", SessionConfig::default());
    result.unwrap();
    assert!(out.contains("Input closed. Goodbye!"));

    // Mid-game as well
    let mut input = TWO_HUMANS.to_vec();
    input.extend(["1", "1"]);
    let (result, out) = run(&lines(&input), SessionConfig::default());
    result.unwrap();
    assert!(out.contains("Input closed. Goodbye!"));
}

fn computers_config() -> SessionConfig {
    SessionConfig::from_toml(
        r#"
        think_delay_ms = 0
        seed = 11
        board_size = 3

        [[players]]
        name = "Hal"
        symbol = "X"
        kind = "computer"

        [[players]]
        name = "Joshua"
        symbol = "O"
        kind = "computer"
        "#,
    )
    .unwrap()
}

#[test]
fn test_configured_computers_play_without_prompts() {
    let (result, out) = run("n\n", computers_config());
    result.unwrap();

    assert!(!out.contains("Enter board size"));
    assert!(!out.contains("Configuration ==="));
    assert!(out.contains("Hal (computer) is thinking..."));
    // The first computer on an empty board always takes the center
    assert!(out.contains("Hal chose position (1, 1)"));
    assert!(out.contains("WINS!") || out.contains("IT'S A DRAW!"));
}

#[test]
fn test_seeded_sessions_match() {
    let (_, first) = run("y\nn\n", computers_config());
    let (_, second) = run("y\nn\n", computers_config());
    assert_eq!(first, second);
    assert!(first.contains("Board has been reset"));
}

#[test]
fn test_config_file_discovered_from_explicit_path() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "board_size = 5\nthink_delay_ms = 0").unwrap();

    let config = SessionConfig::discover(Some(file.path())).unwrap();
    assert_eq!(*config.board_size(), Some(5));
    assert_eq!(*config.think_delay_ms(), 0);
}

#[test]
fn test_missing_explicit_config_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = SessionConfig::discover(Some(&dir.path().join("absent.toml"))).unwrap_err();
    assert!(err.message.contains("Failed to read config file"));
}
