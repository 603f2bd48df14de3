use super::*;
use crate::board::Board;

#[test]
fn start_position_is_balanced() {
    assert_eq!(evaluate(&Board::start_position()), 0);
}

#[test]
fn a_missing_queen_swings_the_score() {
    // Black's queen is gone; white to move sees +900.
    let board = Board::from_fen("rnb1kbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w - - 0 1").unwrap();
    assert_eq!(evaluate(&board), 900);
}

#[test]
fn the_score_is_from_the_side_to_move_perspective() {
    let white_view =
        Board::from_fen("rnb1kbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w - - 0 1").unwrap();
    let black_view =
        Board::from_fen("rnb1kbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR b - - 0 1").unwrap();
    assert_eq!(evaluate(&white_view), -evaluate(&black_view));
}
