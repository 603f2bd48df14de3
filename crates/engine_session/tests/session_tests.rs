//! Tests for the session capability surface the GUI drives.

use board_core::{codec, Color, Square};
use engine_session::{FenError, GameSession, MoveError, PlayerKind, Promotion};

fn sq(id: &str) -> Square {
    Square::from_id(id).unwrap()
}

#[test]
fn a_new_session_reports_the_start_position() {
    let session = GameSession::new();
    let codes = session.get_board();
    assert_eq!(codes, codec::encode_codes(
        &codec::parse_placement(codec::START_POSITION_FEN).unwrap(),
    ));
    assert_eq!(session.side_to_move(), Color::White);
    assert!(!session.is_computer_move());
    assert!(!session.is_checkmate());
    assert!(!session.is_draw());
}

#[test]
fn set_board_replaces_the_position() {
    let mut session = GameSession::new();
    session.set_board("8/8/8/3qk3/8/3QK3/8/8 w - - 0 1").unwrap();
    let codes = session.get_board();
    assert_eq!(codes[sq("d5").index()], 9); // black queen
    assert_eq!(codes[sq("d3").index()], 10); // white queen
    assert_eq!(codes.iter().filter(|&&code| code != 0).count(), 4);
}

#[test]
fn set_board_rejects_bad_input_without_state_change() {
    let mut session = GameSession::new();
    let before = session.get_board();
    assert!(matches!(
        session.set_board("9q/8/8/8/8/8/8/8 w - - 0 1"),
        Err(FenError::Notation(_))
    ));
    assert_eq!(session.get_board(), before);
}

#[test]
fn player_control_decides_is_computer_move() {
    let mut session = GameSession::new();
    session.set_players(PlayerKind::Human, PlayerKind::Computer);
    assert!(!session.is_computer_move());

    session.make_move(sq("e2"), sq("e4"), Promotion::None).unwrap();
    assert!(session.is_computer_move());
}

#[test]
fn reset_board_restores_position_and_human_control() {
    let mut session = GameSession::new();
    session.set_players(PlayerKind::Computer, PlayerKind::Computer);
    session.make_computer_move().unwrap();

    session.reset_board();
    assert_eq!(session.get_board(), GameSession::new().get_board());
    assert!(!session.is_computer_move(), "reset returns control to humans");
    assert_eq!(session.last_move(), None);
}

#[test]
fn legality_answers_match_move_application() {
    let mut session = GameSession::new();
    assert!(session.is_move_legal(sq("e2"), sq("e4")));
    assert!(session.is_move_legal(sq("g1"), sq("f3")));
    assert!(!session.is_move_legal(sq("e2"), sq("e5")));
    assert!(!session.is_move_legal(sq("e7"), sq("e5")), "not black's turn");
    assert!(!session.is_move_legal(sq("e4"), sq("e5")), "empty square");

    assert_eq!(
        session.make_move(sq("e2"), sq("e5"), Promotion::None),
        Err(MoveError::Illegal {
            from: sq("e2"),
            to: sq("e5")
        })
    );

    session.make_move(sq("e2"), sq("e4"), Promotion::None).unwrap();
    assert_eq!(session.side_to_move(), Color::Black);
    assert_eq!(session.last_move(), Some((sq("e2"), sq("e4"))));
}

#[test]
fn an_illegal_move_changes_nothing() {
    let mut session = GameSession::new();
    let before = session.get_board();
    let _ = session.make_move(sq("d1"), sq("d5"), Promotion::None);
    assert_eq!(session.get_board(), before);
    assert_eq!(session.side_to_move(), Color::White);
}

#[test]
fn promoting_advance_requires_a_choice() {
    let mut session = GameSession::new();
    session
        .set_board("5k2/1P6/8/8/3K4/8/8/8 w KQkq - 0 1")
        .unwrap();

    let before = session.get_board();
    assert_eq!(
        session.make_move(sq("b7"), sq("b8"), Promotion::None),
        Err(MoveError::PromotionRequired {
            from: sq("b7"),
            to: sq("b8")
        })
    );
    assert_eq!(session.get_board(), before, "rejected move leaves no trace");

    session
        .make_move(sq("b7"), sq("b8"), Promotion::from_code(1))
        .unwrap();
    assert_eq!(session.get_board()[sq("b8").index()], 10); // white queen
}

#[test]
fn promotion_choice_is_ignored_for_ordinary_moves() {
    let mut session = GameSession::new();
    session
        .make_move(sq("e2"), sq("e4"), Promotion::Rook)
        .unwrap();
    assert_eq!(session.get_board()[sq("e4").index()], 2); // still a pawn
}

#[test]
fn unrecognized_promotion_codes_map_to_none() {
    assert_eq!(Promotion::from_code(0), Promotion::None);
    assert_eq!(Promotion::from_code(1), Promotion::Queen);
    assert_eq!(Promotion::from_code(2), Promotion::Rook);
    assert_eq!(Promotion::from_code(3), Promotion::Bishop);
    assert_eq!(Promotion::from_code(4), Promotion::Knight);
    assert_eq!(Promotion::from_code(5), Promotion::None);
    assert_eq!(Promotion::from_code(255), Promotion::None);
}

#[test]
fn checkmate_is_reported_after_the_mating_move() {
    let mut session = GameSession::new();
    session
        .set_board("6k1/5ppp/8/1R6/8/2K5/8/8 w KQkq - 0 1")
        .unwrap();
    session.make_move(sq("b5"), sq("b8"), Promotion::None).unwrap();

    assert!(session.is_checkmate());
    assert!(!session.is_draw());
}

#[test]
fn stalemate_is_reported_as_a_draw() {
    let mut session = GameSession::new();
    session.set_board("k7/2K5/1Q6/8/8/8/8/8 b - - 0 1").unwrap();
    assert!(session.is_draw());
    assert!(!session.is_checkmate());
}

#[test]
fn the_computer_plays_a_legal_move_and_yields_the_turn() {
    let mut session = GameSession::new();
    session.set_players(PlayerKind::Human, PlayerKind::Computer);
    session.make_move(sq("e2"), sq("e4"), Promotion::None).unwrap();

    assert!(session.is_computer_move());
    session.make_computer_move().unwrap();
    assert_eq!(session.side_to_move(), Color::White);
    assert!(!session.is_computer_move());
    assert!(session.last_move().is_some());

    // Exactly one black reply happened: still 32 pieces or 31 after a capture
    // (no capture is available on move one, so 32).
    let occupied = session.get_board().iter().filter(|&&code| code != 0).count();
    assert_eq!(occupied, 32);
}

#[test]
fn the_computer_reports_when_no_move_exists() {
    let mut session = GameSession::new();
    session.set_board("k7/2K5/1Q6/8/8/8/8/8 b - - 0 1").unwrap();
    session.set_players(PlayerKind::Computer, PlayerKind::Computer);
    assert_eq!(session.make_computer_move(), Err(MoveError::NoMovesAvailable));
}
