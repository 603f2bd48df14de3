use super::*;
use board_core::codec;

fn sq(id: &str) -> Square {
    Square::from_id(id).unwrap()
}

fn start_surface() -> BoardSurface {
    let mut surface = BoardSurface::new();
    surface.render(&codec::parse_placement(codec::START_POSITION_FEN).unwrap());
    surface
}

#[test]
fn a_drag_from_an_empty_square_starts_nothing() {
    let surface = start_surface();
    let mut input = InputController::new();
    assert!(!input.drag_started(&surface, sq("e4")));
    assert!(!input.is_dragging());
    assert_eq!(input.dropped(&surface, sq("e5")), None);
}

#[test]
fn a_drop_on_an_empty_square_is_a_quiet_move() {
    let surface = start_surface();
    let mut input = InputController::new();
    assert!(input.drag_started(&surface, sq("e2")));

    let intent = input.dropped(&surface, sq("e4")).unwrap();
    assert_eq!(intent.from, sq("e2"));
    assert_eq!(intent.to, sq("e4"));
    assert_eq!(intent.kind, DropKind::Quiet);
    assert!(!input.is_dragging(), "the payload is consumed");
}

#[test]
fn a_drop_on_an_occupied_square_is_a_capture() {
    let surface = start_surface();
    let mut input = InputController::new();
    input.drag_started(&surface, sq("e2"));

    // Occupancy alone decides the classification; e7 holds a black pawn.
    let intent = input.dropped(&surface, sq("e7")).unwrap();
    assert_eq!(intent.kind, DropKind::Capture);
}

#[test]
fn a_self_drop_resolves_to_nothing() {
    let surface = start_surface();
    let mut input = InputController::new();
    input.drag_started(&surface, sq("e2"));
    assert_eq!(input.dropped(&surface, sq("e2")), None);
    assert!(!input.is_dragging());
}

#[test]
fn an_aborted_drag_leaves_no_payload() {
    let surface = start_surface();
    let mut input = InputController::new();
    input.drag_started(&surface, sq("e2"));
    input.drag_aborted();
    assert_eq!(input.dropped(&surface, sq("e4")), None);
}

#[test]
fn a_stale_payload_is_ignored() {
    let mut surface = start_surface();
    let mut input = InputController::new();
    input.drag_started(&surface, sq("e2"));

    // The surface re-renders underneath the drag; the payload no longer
    // resolves to any cell.
    surface.render(&codec::parse_placement("8/8/8/3k4/8/3K4/8/8").unwrap());
    assert_eq!(input.dropped(&surface, sq("e4")), None);
}

#[test]
fn the_drag_source_tracks_the_payload() {
    let surface = start_surface();
    let mut input = InputController::new();
    assert_eq!(input.drag_source(&surface), None);

    input.drag_started(&surface, sq("g1"));
    assert_eq!(input.drag_source(&surface), Some(sq("g1")));
}
