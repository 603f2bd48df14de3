use super::*;
use board_core::codec;

fn sq(id: &str) -> Square {
    Square::from_id(id).unwrap()
}

#[test]
fn render_reproduces_the_parsed_placement_set() {
    let placements = codec::parse_placement(codec::START_POSITION_FEN).unwrap();
    let mut surface = BoardSurface::new();
    surface.render(&placements);

    let mut expected = placements.clone();
    let mut read_back = surface.placements();
    expected.sort_by_key(|(square, _)| square.index());
    read_back.sort_by_key(|(square, _)| square.index());
    assert_eq!(expected, read_back);
    assert_eq!(surface.piece_count(), 32);
}

#[test]
fn render_clears_the_previous_position() {
    let mut surface = BoardSurface::new();
    surface.render(&codec::parse_placement(codec::START_POSITION_FEN).unwrap());
    surface.render(&codec::parse_placement("8/8/8/3k4/8/3K4/8/8").unwrap());
    assert_eq!(surface.piece_count(), 2);
    assert!(surface.is_occupied(sq("d5")));
    assert!(!surface.is_occupied(sq("e1")));
}

#[test]
fn clear_is_idempotent() {
    let mut surface = BoardSurface::new();
    surface.render(&codec::parse_placement(codec::START_POSITION_FEN).unwrap());

    surface.clear();
    let after_one = surface.placements();
    surface.clear();
    let after_two = surface.placements();

    assert!(after_one.is_empty());
    assert_eq!(after_one, after_two);
    assert_eq!(surface.piece_count(), 0);
}

#[test]
fn visuals_carry_identity_and_class_tags() {
    let mut surface = BoardSurface::new();
    surface.render(&codec::parse_placement(codec::START_POSITION_FEN).unwrap());

    let visual = surface.piece_at(sq("e2")).unwrap();
    assert_eq!(visual.identity, "wP-e2");
    assert_eq!(visual.class_name, "piece white-pawn");

    let visual = surface.piece_at(sq("d8")).unwrap();
    assert_eq!(visual.identity, "bQ-d8");
    assert_eq!(visual.class_name, "piece black-queen");
}

#[test]
fn identities_resolve_back_to_their_square() {
    let mut surface = BoardSurface::new();
    surface.render(&codec::parse_placement(codec::START_POSITION_FEN).unwrap());

    assert_eq!(surface.find_identity("wP-e2"), Some(sq("e2")));
    assert_eq!(surface.find_identity("bR-a8"), Some(sq("a8")));
    assert_eq!(surface.find_identity("wQ-e5"), None);
}

#[test]
fn duplicate_placements_keep_the_first_piece() {
    let mut surface = BoardSurface::new();
    let d5 = sq("d5");
    let first = board_core::Piece::new(board_core::Color::White, board_core::PieceKind::Rook);
    let second = board_core::Piece::new(board_core::Color::Black, board_core::PieceKind::Queen);
    surface.render(&[(d5, first), (d5, second)]);

    assert_eq!(surface.piece_count(), 1);
    assert_eq!(surface.piece_at(d5).unwrap().piece, first);
}
