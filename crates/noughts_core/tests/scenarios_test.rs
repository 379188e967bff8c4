//! End-to-end scenarios through the public interface.

use noughts_core::{
    Board, DRAW_SCORE, GameStatus, IllegalMoveError, NoLegalMovesError, Player, Position,
    analyze, apply_move, best_move, evaluate, is_legal_move, new_game,
};

#[test]
fn test_empty_board_center_never_dominated() {
    let board = Board::new();
    let scored = analyze(&board, Player::O).expect("empty board has moves");
    assert_eq!(scored.len(), 9);

    let best = scored.iter().map(|m| m.score).max().unwrap();
    let center = scored
        .iter()
        .find(|m| m.index == Position::Center.to_index())
        .unwrap();
    assert_eq!(center.score, best);

    // Every opening draws under perfect play, so the first index wins the tie.
    assert!(scored.iter().all(|m| m.score == DRAW_SCORE));
    assert_eq!(best_move(&board, Player::O), Ok(0));
}

#[test]
fn test_completing_a_row_wins() {
    let board: Board = "XX.OO....".parse().unwrap();
    assert!(is_legal_move(&board, 2));

    let board = apply_move(&board, 2, Player::X).unwrap();
    assert_eq!(evaluate(&board), GameStatus::Won(Player::X));
}

#[test]
fn test_full_board_without_line_is_draw() {
    let board: Board = "XOXXOOOXX".parse().unwrap();
    assert_eq!(evaluate(&board), GameStatus::Draw);
}

#[test]
fn test_only_empty_square_is_chosen() {
    let board: Board = "XOXXOOOX.".parse().unwrap();
    assert_eq!(evaluate(&board), GameStatus::InProgress);
    assert_eq!(best_move(&board, Player::X), Ok(8));
    assert_eq!(best_move(&board, Player::O), Ok(8));
}

#[test]
fn test_search_leaves_callers_board_unchanged() {
    let board: Board = "X...O...X".parse().unwrap();
    let copy = board;
    best_move(&board, Player::O).unwrap();
    analyze(&board, Player::X).unwrap();
    assert_eq!(board, copy);
}

#[test]
fn test_search_refuses_finished_boards() {
    let drawn: Board = "XOXXOOOXX".parse().unwrap();
    assert_eq!(best_move(&drawn, Player::X), Err(NoLegalMovesError));

    // Empty squares remain but X already owns the left column.
    let won: Board = "XO.XO.X..".parse().unwrap();
    assert_eq!(best_move(&won, Player::O), Err(NoLegalMovesError));
}

#[test]
fn test_illegal_moves_are_rejected() {
    let board: Board = "X........".parse().unwrap();
    assert_eq!(
        apply_move(&board, 0, Player::O),
        Err(IllegalMoveError::Occupied { index: 0 })
    );
    assert_eq!(
        apply_move(&board, 9, Player::O),
        Err(IllegalMoveError::OutOfBounds { index: 9 })
    );
    assert!(!is_legal_move(&board, 0));
    assert!(!is_legal_move(&board, 9));
}

#[test]
fn test_computer_as_x_blocks() {
    let mut game = new_game();
    for index in [4, 0, 2, 6] {
        game.play(index).unwrap();
    }
    // O threatens the left column; 1 would lose where 3 does not.
    assert_eq!(game.to_move(), Player::X);
    assert_eq!(game.computer_move(), Ok(3));
}
