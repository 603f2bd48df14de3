//! Canvas widget for the board: draws the surface and turns mouse
//! press/release gestures into drag-and-drop messages.

use board_core::Square;
use iced::mouse;
use iced::widget::canvas::{self, event, Canvas, Frame, Geometry, Program, Text};
use iced::{alignment, Element, Pixels, Point, Rectangle, Renderer, Size, Theme};

use crate::styles::{self, SQUARE_SIZE};
use crate::surface::BoardSurface;

/// Messages emitted by board interactions.
#[derive(Debug, Clone)]
pub enum BoardMessage {
    DragStarted(Square),
    /// Cursor movement while a drag is active; carries no data, it only
    /// forces a redraw so the lifted piece follows the cursor.
    DragMoved,
    Dropped(Square),
    DragAborted,
}

/// Renders the board and captures drag gestures.
pub struct BoardCanvas<'a> {
    surface: &'a BoardSurface,
    drag_source: Option<Square>,
    last_move: Option<(Square, Square)>,
    flipped: bool,
}

impl<'a> BoardCanvas<'a> {
    pub fn new(
        surface: &'a BoardSurface,
        drag_source: Option<Square>,
        last_move: Option<(Square, Square)>,
        flipped: bool,
    ) -> Self {
        Self {
            surface,
            drag_source,
            last_move,
            flipped,
        }
    }

    pub fn view(self) -> Element<'a, BoardMessage> {
        Canvas::new(self)
            .width(styles::BOARD_SIZE)
            .height(styles::BOARD_SIZE)
            .into()
    }

    /// Top-left corner of a square in canvas coordinates.
    fn origin_of(&self, square: Square) -> Point {
        let (column, row) = if self.flipped {
            (8 - square.file(), square.rank() - 1)
        } else {
            (square.file() - 1, 8 - square.rank())
        };
        Point::new(column as f32 * SQUARE_SIZE, row as f32 * SQUARE_SIZE)
    }

    /// The square under a canvas-local position.
    fn square_at(&self, position: Point) -> Option<Square> {
        let column = (position.x / SQUARE_SIZE).floor() as i32;
        let row = (position.y / SQUARE_SIZE).floor() as i32;
        if !(0..8).contains(&column) || !(0..8).contains(&row) {
            return None;
        }
        let (file, rank) = if self.flipped {
            (8 - column as u8, row as u8 + 1)
        } else {
            (column as u8 + 1, 8 - row as u8)
        };
        Square::new(file, rank).ok()
    }

    fn fill_square(&self, frame: &mut Frame, square: Square, color: iced::Color) {
        frame.fill_rectangle(
            self.origin_of(square),
            Size::new(SQUARE_SIZE, SQUARE_SIZE),
            color,
        );
    }

    fn draw_piece(&self, frame: &mut Frame, square: Square, center: Point) {
        if let Some(visual) = self.surface.piece_at(square) {
            frame.fill_text(Text {
                content: styles::piece_glyph(visual.piece.kind).to_string(),
                position: center,
                color: styles::piece_color(visual.piece.color),
                size: Pixels(SQUARE_SIZE * 0.75),
                horizontal_alignment: alignment::Horizontal::Center,
                vertical_alignment: alignment::Vertical::Center,
                shaping: iced::widget::text::Shaping::Advanced,
                ..Text::default()
            });
        }
    }

    fn center_of(&self, square: Square) -> Point {
        let origin = self.origin_of(square);
        Point::new(origin.x + SQUARE_SIZE / 2.0, origin.y + SQUARE_SIZE / 2.0)
    }
}

impl<'a> Program<BoardMessage> for BoardCanvas<'a> {
    type State = ();

    fn update(
        &self,
        _state: &mut Self::State,
        event: canvas::Event,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> (event::Status, Option<BoardMessage>) {
        match event {
            canvas::Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left)) => {
                if let Some(square) = cursor.position_in(bounds).and_then(|p| self.square_at(p)) {
                    return (event::Status::Captured, Some(BoardMessage::DragStarted(square)));
                }
                (event::Status::Ignored, None)
            }
            canvas::Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left)) => {
                if self.drag_source.is_none() {
                    return (event::Status::Ignored, None);
                }
                match cursor.position_in(bounds).and_then(|p| self.square_at(p)) {
                    Some(square) => (event::Status::Captured, Some(BoardMessage::Dropped(square))),
                    None => (event::Status::Captured, Some(BoardMessage::DragAborted)),
                }
            }
            canvas::Event::Mouse(mouse::Event::CursorMoved { .. })
                if self.drag_source.is_some() =>
            {
                (event::Status::Captured, Some(BoardMessage::DragMoved))
            }
            _ => (event::Status::Ignored, None),
        }
    }

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());

        for square in Square::all() {
            let shade = if (square.file() + square.rank()) % 2 == 0 {
                styles::DARK_SQUARE
            } else {
                styles::LIGHT_SQUARE
            };
            self.fill_square(&mut frame, square, shade);
        }

        if let Some((from, to)) = self.last_move {
            self.fill_square(&mut frame, from, styles::LAST_MOVE_OVERLAY);
            self.fill_square(&mut frame, to, styles::LAST_MOVE_OVERLAY);
        }
        if let Some(source) = self.drag_source {
            self.fill_square(&mut frame, source, styles::DRAG_SOURCE_SQUARE);
        }

        // The lifted piece follows the cursor; everything else sits on its
        // square.
        let floating = match (self.drag_source, cursor.position_in(bounds)) {
            (Some(source), Some(position)) => Some((source, position)),
            _ => None,
        };
        for square in Square::all() {
            match floating {
                Some((source, _)) if source == square => {}
                _ => self.draw_piece(&mut frame, square, self.center_of(square)),
            }
        }
        if let Some((source, position)) = floating {
            self.draw_piece(&mut frame, source, position);
        }

        vec![frame.into_geometry()]
    }

    fn mouse_interaction(
        &self,
        _state: &Self::State,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> mouse::Interaction {
        if self.drag_source.is_some() {
            return mouse::Interaction::Grabbing;
        }
        let over_piece = cursor
            .position_in(bounds)
            .and_then(|p| self.square_at(p))
            .map(|square| self.surface.is_occupied(square))
            .unwrap_or(false);
        if over_piece {
            mouse::Interaction::Grab
        } else {
            mouse::Interaction::default()
        }
    }
}

#[cfg(test)]
#[path = "board_view_tests.rs"]
mod board_view_tests;
