use super::*;

#[test]
fn placement_letters_round_trip() {
    for ch in ['P', 'N', 'B', 'R', 'Q', 'K', 'p', 'n', 'b', 'r', 'q', 'k'] {
        let piece = Piece::from_placement_char(ch).unwrap();
        assert_eq!(piece.placement_char(), ch);
        assert_eq!(
            piece.color,
            if ch.is_ascii_uppercase() {
                Color::White
            } else {
                Color::Black
            }
        );
    }
    assert_eq!(Piece::from_placement_char('x'), None);
    assert_eq!(Piece::from_placement_char('1'), None);
    assert_eq!(Piece::from_placement_char('/'), None);
}

#[test]
fn codes_follow_the_odd_black_even_white_table() {
    let expected = [
        (1, Color::Black, PieceKind::Pawn),
        (2, Color::White, PieceKind::Pawn),
        (3, Color::Black, PieceKind::Knight),
        (4, Color::White, PieceKind::Knight),
        (5, Color::Black, PieceKind::Bishop),
        (6, Color::White, PieceKind::Bishop),
        (7, Color::Black, PieceKind::Rook),
        (8, Color::White, PieceKind::Rook),
        (9, Color::Black, PieceKind::Queen),
        (10, Color::White, PieceKind::Queen),
        (11, Color::Black, PieceKind::King),
        (12, Color::White, PieceKind::King),
    ];
    for (code, color, kind) in expected {
        let piece = Piece::from_code(code).unwrap();
        assert_eq!(piece, Piece::new(color, kind));
        assert_eq!(piece.code(), code);
    }
    assert_eq!(Piece::from_code(0), None);
    assert_eq!(Piece::from_code(13), None);
}

#[test]
fn identity_ids_are_five_characters() {
    let e4 = Square::from_id("e4").unwrap();
    let white_pawn = Piece::new(Color::White, PieceKind::Pawn);
    assert_eq!(white_pawn.identity_id(e4), "wP-e4");
    assert_eq!(white_pawn.identity_id(e4).len(), 5);

    let h1 = Square::from_id("h1").unwrap();
    let black_queen = Piece::new(Color::Black, PieceKind::Queen);
    assert_eq!(black_queen.identity_id(h1), "bQ-h1");
}

#[test]
fn class_names_are_two_tokens() {
    assert_eq!(
        Piece::new(Color::White, PieceKind::Pawn).class_name(),
        "piece white-pawn"
    );
    assert_eq!(
        Piece::new(Color::Black, PieceKind::Knight).class_name(),
        "piece black-knight"
    );
}
