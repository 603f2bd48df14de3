//! The authoritative game board: piece placement plus the move-relevant
//! state (side to move, castling rights, en-passant target, clocks).

use board_core::{codec, Color, Piece, PieceKind, Square};
use tracing::warn;

use crate::FenError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CastlingRights {
    pub white_king_side: bool,
    pub white_queen_side: bool,
    pub black_king_side: bool,
    pub black_queen_side: bool,
}

impl CastlingRights {
    pub fn all() -> Self {
        Self {
            white_king_side: true,
            white_queen_side: true,
            black_king_side: true,
            black_queen_side: true,
        }
    }

    pub fn none() -> Self {
        Self {
            white_king_side: false,
            white_queen_side: false,
            black_king_side: false,
            black_queen_side: false,
        }
    }
}

/// One move request against the board. Castling is encoded as the king's
/// two-file hop; en-passant as the capturing pawn's diagonal step onto the
/// vacated square.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Move {
    pub from: Square,
    pub to: Square,
    pub promotion: Option<PieceKind>,
    pub en_passant: bool,
    pub castle: bool,
}

impl Move {
    pub fn new(from: Square, to: Square) -> Self {
        Self {
            from,
            to,
            promotion: None,
            en_passant: false,
            castle: false,
        }
    }

    pub fn promoting(from: Square, to: Square, kind: PieceKind) -> Self {
        Self {
            promotion: Some(kind),
            ..Self::new(from, to)
        }
    }
}

#[derive(Clone, Debug)]
pub struct Board {
    cells: [Option<Piece>; 64],
    pub side_to_move: Color,
    pub castling: CastlingRights,
    pub en_passant: Option<Square>,
    pub halfmove_clock: u32,
    pub fullmove_number: u32,
}

impl Board {
    /// The standard initial position.
    pub fn start_position() -> Self {
        let mut cells = [None; 64];
        for square in Square::all() {
            let piece = match square.rank() {
                2 => Some(Piece::new(Color::White, PieceKind::Pawn)),
                7 => Some(Piece::new(Color::Black, PieceKind::Pawn)),
                rank @ (1 | 8) => {
                    let color = if rank == 1 { Color::White } else { Color::Black };
                    let kind = match square.file() {
                        1 | 8 => PieceKind::Rook,
                        2 | 7 => PieceKind::Knight,
                        3 | 6 => PieceKind::Bishop,
                        4 => PieceKind::Queen,
                        _ => PieceKind::King,
                    };
                    Some(Piece::new(color, kind))
                }
                _ => None,
            };
            cells[square.index()] = piece;
        }

        Self {
            cells,
            side_to_move: Color::White,
            castling: CastlingRights::all(),
            en_passant: None,
            halfmove_clock: 0,
            fullmove_number: 1,
        }
    }

    /// Ingests a textual position. Only the placement field is mandatory;
    /// missing metadata falls back to white to move, full castling rights,
    /// no en-passant square and fresh clocks. Chess legality of the
    /// resulting position is not validated.
    pub fn from_fen(fen: &str) -> Result<Self, FenError> {
        let mut fields = fen.split_whitespace();

        let mut cells = [None; 64];
        for (square, piece) in codec::parse_placement(fields.next().unwrap_or(""))? {
            cells[square.index()] = Some(piece);
        }

        let side_to_move = match fields.next() {
            None | Some("w") => Color::White,
            Some("b") => Color::Black,
            Some(other) => return Err(FenError::InvalidSideToMove(other.to_string())),
        };

        let castling = match fields.next() {
            None => CastlingRights::all(),
            Some("-") => CastlingRights::none(),
            Some(field) => {
                let mut castling = CastlingRights::none();
                for ch in field.chars() {
                    match ch {
                        'K' => castling.white_king_side = true,
                        'Q' => castling.white_queen_side = true,
                        'k' => castling.black_king_side = true,
                        'q' => castling.black_queen_side = true,
                        _ => return Err(FenError::InvalidCastling(field.to_string())),
                    }
                }
                castling
            }
        };

        let en_passant = match fields.next() {
            None | Some("-") => None,
            Some(field) => Some(
                Square::from_id(field)
                    .map_err(|_| FenError::InvalidEnPassant(field.to_string()))?,
            ),
        };

        let halfmove_clock = match fields.next() {
            None => 0,
            Some(field) => field
                .parse()
                .map_err(|_| FenError::InvalidClock(field.to_string()))?,
        };
        let fullmove_number = match fields.next() {
            None => 1,
            Some(field) => field
                .parse()
                .map_err(|_| FenError::InvalidClock(field.to_string()))?,
        };

        Ok(Self {
            cells,
            side_to_move,
            castling,
            en_passant,
            halfmove_clock,
            fullmove_number,
        })
    }

    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        self.cells[square.index()]
    }

    pub fn set_piece(&mut self, square: Square, piece: Option<Piece>) {
        self.cells[square.index()] = piece;
    }

    pub fn king_square(&self, color: Color) -> Option<Square> {
        Square::all().find(|&square| {
            self.piece_at(square) == Some(Piece::new(color, PieceKind::King))
        })
    }

    /// The numeric 64-cell form in scan order.
    pub fn to_codes(&self) -> [u8; 64] {
        let mut codes = [0u8; 64];
        for (index, cell) in self.cells.iter().enumerate() {
            if let Some(piece) = cell {
                codes[index] = piece.code();
            }
        }
        codes
    }

    /// Applies a move, trusting that it came from move generation. Handles
    /// captures, en-passant removal, the castling rook hop, promotion
    /// replacement, right revocation and the clocks.
    pub fn make_move(&mut self, mv: Move) {
        let moved = match self.piece_at(mv.from) {
            Some(piece) => piece,
            None => {
                warn!(from = %mv.from, to = %mv.to, "make_move on an empty square, ignoring");
                return;
            }
        };

        let mut is_capture = self.piece_at(mv.to).is_some();
        let forward: i8 = match moved.color {
            Color::White => 1,
            Color::Black => -1,
        };

        // En-passant removes the pawn behind the arrival square.
        if mv.en_passant {
            if let Some(captured_square) = mv.to.offset(0, -forward) {
                self.set_piece(captured_square, None);
                is_capture = true;
            }
        }

        self.set_piece(mv.from, None);
        let arriving = match mv.promotion {
            Some(kind) => Piece::new(moved.color, kind),
            None => moved,
        };
        self.set_piece(mv.to, Some(arriving));

        // The castling king hop drags the rook over.
        if mv.castle {
            let (rook_from, rook_to) = if mv.to.file() > mv.from.file() {
                (mv.to.offset(1, 0), mv.to.offset(-1, 0))
            } else {
                (mv.to.offset(-2, 0), mv.to.offset(1, 0))
            };
            if let (Some(rook_from), Some(rook_to)) = (rook_from, rook_to) {
                let rook = self.piece_at(rook_from);
                self.set_piece(rook_from, None);
                self.set_piece(rook_to, rook);
            }
        }

        self.revoke_castling_rights(moved, mv);

        // A double pawn push leaves an en-passant target behind.
        self.en_passant = None;
        if moved.kind == PieceKind::Pawn
            && (mv.from.rank() as i8 - mv.to.rank() as i8).abs() == 2
        {
            self.en_passant = mv.from.offset(0, forward);
        }

        if moved.kind == PieceKind::Pawn || is_capture {
            self.halfmove_clock = 0;
        } else {
            self.halfmove_clock += 1;
        }
        if self.side_to_move == Color::Black {
            self.fullmove_number += 1;
        }
        self.side_to_move = self.side_to_move.other();
    }

    fn revoke_castling_rights(&mut self, moved: Piece, mv: Move) {
        let touches = |square: Square, file: u8, rank: u8| {
            square.file() == file && square.rank() == rank
        };

        if moved.kind == PieceKind::King {
            match moved.color {
                Color::White => {
                    self.castling.white_king_side = false;
                    self.castling.white_queen_side = false;
                }
                Color::Black => {
                    self.castling.black_king_side = false;
                    self.castling.black_queen_side = false;
                }
            }
        }

        // A rook leaving or anything landing on a corner kills that right.
        for square in [mv.from, mv.to] {
            if touches(square, 1, 1) {
                self.castling.white_queen_side = false;
            }
            if touches(square, 8, 1) {
                self.castling.white_king_side = false;
            }
            if touches(square, 1, 8) {
                self.castling.black_queen_side = false;
            }
            if touches(square, 8, 8) {
                self.castling.black_king_side = false;
            }
        }
    }
}

#[cfg(test)]
#[path = "board_tests.rs"]
mod board_tests;
