use super::*;

fn sq(id: &str) -> Square {
    Square::from_id(id).unwrap()
}

fn canvas(surface: &BoardSurface, flipped: bool) -> BoardCanvas<'_> {
    BoardCanvas::new(surface, None, None, flipped)
}

#[test]
fn the_top_left_square_is_a8_when_white_is_at_the_bottom() {
    let surface = BoardSurface::new();
    let board = canvas(&surface, false);

    assert_eq!(board.square_at(Point::new(1.0, 1.0)), Some(sq("a8")));
    assert_eq!(
        board.square_at(Point::new(SQUARE_SIZE * 7.5, SQUARE_SIZE * 7.5)),
        Some(sq("h1"))
    );
    assert_eq!(board.origin_of(sq("a8")), Point::new(0.0, 0.0));
    assert_eq!(
        board.origin_of(sq("h1")),
        Point::new(SQUARE_SIZE * 7.0, SQUARE_SIZE * 7.0)
    );
}

#[test]
fn flipping_puts_h1_in_the_top_left() {
    let surface = BoardSurface::new();
    let board = canvas(&surface, true);

    assert_eq!(board.square_at(Point::new(1.0, 1.0)), Some(sq("h1")));
    assert_eq!(
        board.square_at(Point::new(SQUARE_SIZE * 7.5, SQUARE_SIZE * 7.5)),
        Some(sq("a8"))
    );
}

#[test]
fn positions_outside_the_grid_map_to_no_square() {
    let surface = BoardSurface::new();
    let board = canvas(&surface, false);
    assert_eq!(board.square_at(Point::new(-1.0, 10.0)), None);
    assert_eq!(board.square_at(Point::new(SQUARE_SIZE * 8.0 + 1.0, 10.0)), None);
    assert_eq!(board.square_at(Point::new(10.0, SQUARE_SIZE * 8.0 + 1.0)), None);
}

#[test]
fn hit_testing_inverts_the_square_origins() {
    let surface = BoardSurface::new();
    for flipped in [false, true] {
        let board = canvas(&surface, flipped);
        for square in Square::all() {
            let origin = board.origin_of(square);
            let center = Point::new(origin.x + SQUARE_SIZE / 2.0, origin.y + SQUARE_SIZE / 2.0);
            assert_eq!(board.square_at(center), Some(square), "flipped={flipped}");
        }
    }
}
