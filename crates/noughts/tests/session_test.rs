//! Scripted terminal sessions.

use noughts::{Mode, Session, SessionConfig};
use noughts_core::{GameStatus, Player};
use std::io::Cursor;
use std::time::Duration;

fn config(mode: Mode, computer: Player) -> SessionConfig {
    SessionConfig {
        mode,
        computer,
        delay: Duration::ZERO,
    }
}

fn run(config: SessionConfig, script: &str) -> (String, GameStatus, Mode) {
    let mut out = Vec::new();
    let mut session = Session::new(config, Cursor::new(script.as_bytes().to_vec()), &mut out);
    session.run().expect("session runs to completion");
    let status = session.game().status();
    let mode = session.mode();
    drop(session);
    (String::from_utf8(out).unwrap(), status, mode)
}

#[test]
fn test_friends_play_to_a_win() {
    let (text, status, _) = run(config(Mode::Friend, Player::O), "1\n4\n2\n5\n3\nq\n");

    assert!(text.starts_with("Player X's turn"));
    assert!(text.contains("Player O's turn"));
    assert!(text.contains("X wins!"));
    assert!(text.contains("Bye!"));
    assert_eq!(status, GameStatus::Won(Player::X));
}

#[test]
fn test_taken_square_is_reported_and_ignored() {
    let (text, _, _) = run(config(Mode::Friend, Player::O), "5\ncenter\n1\nq\n");

    assert!(text.contains("Center is already taken."));
    // The refused attempt does not pass the turn: X is announced only at
    // the start and after O's retry.
    assert_eq!(text.matches("Player X's turn").count(), 2);
}

#[test]
fn test_unknown_input_shows_help() {
    let (text, _, _) = run(config(Mode::Friend, Player::O), "banana\n\nq\n");
    assert!(text.contains("Enter a square 1-9"));
}

#[test]
fn test_computer_never_loses_a_scripted_game() {
    let (text, status, _) = run(config(Mode::Computer, Player::O), "1\n2\n3\n4\n5\n6\n7\n8\n9\nq\n");

    assert!(text.starts_with("You're X. Good luck!"));
    assert!(text.contains("Computer plays"));
    assert!(text.contains("Computer wins!") || text.contains("It's a draw!"));
    assert!(!text.contains("X wins!"));
    assert!(status.is_terminal());
    assert_ne!(status, GameStatus::Won(Player::X));
}

#[test]
fn test_computer_opens_as_x() {
    let (text, _, _) = run(config(Mode::Computer, Player::X), "q\n");

    assert!(text.starts_with("You're O. Good luck!"));
    // Every opening draws, so the first square wins the tie.
    assert!(text.contains("Computer plays Top-left."));
    assert!(text.contains("Your turn!"));
}

#[test]
fn test_mode_toggle_restarts() {
    let (text, status, mode) = run(config(Mode::Computer, Player::O), "5\nm\nq\n");

    assert_eq!(mode, Mode::Friend);
    assert_eq!(status, GameStatus::InProgress);
    assert!(text.contains("Player X's turn"));
}

#[test]
fn test_moves_after_the_end_are_refused() {
    let (text, _, _) = run(config(Mode::Friend, Player::O), "1\n4\n2\n5\n3\n9\nr\nq\n");

    assert!(text.contains("The game is over."));
    // Reset prints the opening status a second time.
    assert_eq!(text.matches("Player X's turn").count(), 4);
}

#[test]
fn test_end_of_input_ends_session() {
    let (text, status, _) = run(config(Mode::Friend, Player::O), "5\n");
    assert!(!text.contains("Bye!"));
    assert_eq!(status, GameStatus::InProgress);
}
