use std::fmt;

use crate::Square;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Color {
    White,
    Black,
}

impl Color {
    pub fn other(self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Lowercase color name, used in style class names.
    pub fn name(self) -> &'static str {
        match self {
            Color::White => "white",
            Color::Black => "black",
        }
    }

    /// Single-letter prefix used in piece identity ids.
    pub fn initial(self) -> char {
        match self {
            Color::White => 'w',
            Color::Black => 'b',
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    pub const ALL: [PieceKind; 6] = [
        PieceKind::Pawn,
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Rook,
        PieceKind::Queen,
        PieceKind::King,
    ];

    pub fn idx(self) -> usize {
        match self {
            PieceKind::Pawn => 0,
            PieceKind::Knight => 1,
            PieceKind::Bishop => 2,
            PieceKind::Rook => 3,
            PieceKind::Queen => 4,
            PieceKind::King => 5,
        }
    }

    /// Uppercase placement letter, the same for both colors.
    pub fn letter(self) -> char {
        match self {
            PieceKind::Pawn => 'P',
            PieceKind::Knight => 'N',
            PieceKind::Bishop => 'B',
            PieceKind::Rook => 'R',
            PieceKind::Queen => 'Q',
            PieceKind::King => 'K',
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            PieceKind::Pawn => "pawn",
            PieceKind::Knight => "knight",
            PieceKind::Bishop => "bishop",
            PieceKind::Rook => "rook",
            PieceKind::Queen => "queen",
            PieceKind::King => "king",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Piece {
    pub color: Color,
    pub kind: PieceKind,
}

impl Piece {
    pub fn new(color: Color, kind: PieceKind) -> Self {
        Self { color, kind }
    }

    /// Decodes a placement letter; uppercase selects white, lowercase black.
    /// Returns `None` for anything that is not a piece letter.
    pub fn from_placement_char(ch: char) -> Option<Piece> {
        let color = if ch.is_ascii_uppercase() {
            Color::White
        } else {
            Color::Black
        };
        let kind = match ch.to_ascii_lowercase() {
            'p' => PieceKind::Pawn,
            'n' => PieceKind::Knight,
            'b' => PieceKind::Bishop,
            'r' => PieceKind::Rook,
            'q' => PieceKind::Queen,
            'k' => PieceKind::King,
            _ => return None,
        };
        Some(Piece { color, kind })
    }

    pub fn placement_char(self) -> char {
        match self.color {
            Color::White => self.kind.letter(),
            Color::Black => self.kind.letter().to_ascii_lowercase(),
        }
    }

    /// Numeric cell code: 0 is empty, odd codes are black, even codes white,
    /// ordered pawn(1,2) < knight(3,4) < bishop(5,6) < rook(7,8) <
    /// queen(9,10) < king(11,12).
    pub fn code(self) -> u8 {
        let base = self.kind.idx() as u8 * 2 + 1;
        match self.color {
            Color::Black => base,
            Color::White => base + 1,
        }
    }

    /// Decodes a numeric cell code in 1-12. 0 (empty) and out-of-range
    /// values yield `None`.
    pub fn from_code(code: u8) -> Option<Piece> {
        if !(1..=12).contains(&code) {
            return None;
        }
        let color = if code % 2 == 1 {
            Color::Black
        } else {
            Color::White
        };
        let kind = PieceKind::ALL[(code as usize - 1) / 2];
        Some(Piece { color, kind })
    }

    /// Stable visual identity id: color initial + placement letter + `-` +
    /// square id. Always 5 characters (`"wP-e4"`).
    pub fn identity_id(self, square: Square) -> String {
        format!("{}{}-{}", self.color.initial(), self.kind.letter(), square)
    }

    /// Deterministic style class: `"piece "` + color + `-` + kind name.
    pub fn class_name(self) -> String {
        format!("piece {}-{}", self.color.name(), self.kind.name())
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.color.name(), self.kind.name())
    }
}

#[cfg(test)]
#[path = "piece_tests.rs"]
mod piece_tests;
