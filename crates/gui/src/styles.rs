//! Styling constants and piece glyphs.

use board_core::{Color as PieceColor, PieceKind};
use iced::Color;

// Board colors
pub const LIGHT_SQUARE: Color = Color::from_rgb(0.94, 0.85, 0.71); // Wheat
pub const DARK_SQUARE: Color = Color::from_rgb(0.71, 0.53, 0.39); // Sienna
pub const DRAG_SOURCE_SQUARE: Color = Color::from_rgb(0.68, 0.85, 0.37); // Yellow-green
pub const LAST_MOVE_OVERLAY: Color = Color::from_rgba(0.9, 0.9, 0.0, 0.4); // Yellow overlay

pub const WHITE_PIECE: Color = Color::from_rgb(0.98, 0.98, 0.96);
pub const BLACK_PIECE: Color = Color::from_rgb(0.12, 0.1, 0.08);

// Dimensions
pub const SQUARE_SIZE: f32 = 70.0;
pub const BOARD_SIZE: f32 = SQUARE_SIZE * 8.0;
pub const PANEL_WIDTH: f32 = 320.0;

/// Unicode glyph for a piece. The filled set is used for both colors and
/// tinted, so the silhouette stays consistent on either square shade.
pub fn piece_glyph(kind: PieceKind) -> char {
    match kind {
        PieceKind::King => '\u{265A}',   // ♚
        PieceKind::Queen => '\u{265B}',  // ♛
        PieceKind::Rook => '\u{265C}',   // ♜
        PieceKind::Bishop => '\u{265D}', // ♝
        PieceKind::Knight => '\u{265E}', // ♞
        PieceKind::Pawn => '\u{265F}',   // ♟
    }
}

pub fn piece_color(color: PieceColor) -> Color {
    match color {
        PieceColor::White => WHITE_PIECE,
        PieceColor::Black => BLACK_PIECE,
    }
}
