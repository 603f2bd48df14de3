//! Move generation and position predicates.
//!
//! Generation is per-square over rank/file deltas; legality filters
//! pseudo-moves by applying them to a scratch board and testing whether the
//! mover's own king is left attacked.

use board_core::{Color, Piece, PieceKind, Square};

use crate::board::{Board, Move};

const KNIGHT_DELTAS: [(i8, i8); 8] = [
    (1, 2),
    (2, 1),
    (2, -1),
    (1, -2),
    (-1, -2),
    (-2, -1),
    (-2, 1),
    (-1, 2),
];

const KING_DELTAS: [(i8, i8); 8] = [
    (1, 1),
    (1, 0),
    (1, -1),
    (0, -1),
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, 1),
];

const DIAGONAL_DIRS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, -1), (-1, 1)];
const ORTHOGONAL_DIRS: [(i8, i8); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

const PROMOTION_KINDS: [PieceKind; 4] = [
    PieceKind::Queen,
    PieceKind::Rook,
    PieceKind::Bishop,
    PieceKind::Knight,
];

/// All legal moves for the piece on `from`, empty when the square is empty
/// or holds the waiting side's piece.
pub fn legal_moves_from(board: &Board, from: Square) -> Vec<Move> {
    let piece = match board.piece_at(from) {
        Some(piece) if piece.color == board.side_to_move => piece,
        _ => return Vec::new(),
    };

    let mut moves = Vec::with_capacity(16);
    pseudo_moves_from(board, from, piece, &mut moves);
    moves.retain(|&mv| !leaves_king_exposed(board, mv));
    moves
}

/// All legal moves for the side to move.
pub fn all_legal_moves(board: &Board) -> Vec<Move> {
    let mut moves = Vec::with_capacity(64);
    for from in Square::all() {
        if let Some(piece) = board.piece_at(from) {
            if piece.color == board.side_to_move {
                pseudo_moves_from(board, from, piece, &mut moves);
            }
        }
    }
    moves.retain(|&mv| !leaves_king_exposed(board, mv));
    moves
}

fn leaves_king_exposed(board: &Board, mv: Move) -> bool {
    let mover = board.side_to_move;
    let mut scratch = board.clone();
    scratch.make_move(mv);
    in_check(&scratch, mover)
}

pub fn in_check(board: &Board, color: Color) -> bool {
    match board.king_square(color) {
        Some(king) => is_square_attacked(board, king, color.other()),
        None => false,
    }
}

/// Whether any piece of `by` attacks `target`.
pub fn is_square_attacked(board: &Board, target: Square, by: Color) -> bool {
    // Pawns attack diagonally toward their direction of travel, so the
    // target sees them one rank against that direction.
    let pawn_rank: i8 = match by {
        Color::White => -1,
        Color::Black => 1,
    };
    for delta_file in [-1, 1] {
        if holds(board, target.offset(delta_file, pawn_rank), by, PieceKind::Pawn) {
            return true;
        }
    }

    for (delta_file, delta_rank) in KNIGHT_DELTAS {
        if holds(board, target.offset(delta_file, delta_rank), by, PieceKind::Knight) {
            return true;
        }
    }

    for (delta_file, delta_rank) in KING_DELTAS {
        if holds(board, target.offset(delta_file, delta_rank), by, PieceKind::King) {
            return true;
        }
    }

    slider_attacks(board, target, by, &DIAGONAL_DIRS, PieceKind::Bishop)
        || slider_attacks(board, target, by, &ORTHOGONAL_DIRS, PieceKind::Rook)
}

fn holds(board: &Board, square: Option<Square>, color: Color, kind: PieceKind) -> bool {
    square
        .and_then(|square| board.piece_at(square))
        .map(|piece| piece == Piece::new(color, kind))
        .unwrap_or(false)
}

fn slider_attacks(
    board: &Board,
    target: Square,
    by: Color,
    dirs: &[(i8, i8)],
    kind: PieceKind,
) -> bool {
    for &(delta_file, delta_rank) in dirs {
        let mut cursor = target.offset(delta_file, delta_rank);
        while let Some(square) = cursor {
            if let Some(piece) = board.piece_at(square) {
                if piece.color == by
                    && (piece.kind == kind || piece.kind == PieceKind::Queen)
                {
                    return true;
                }
                break;
            }
            cursor = square.offset(delta_file, delta_rank);
        }
    }
    false
}

fn pseudo_moves_from(board: &Board, from: Square, piece: Piece, out: &mut Vec<Move>) {
    match piece.kind {
        PieceKind::Pawn => pawn_moves(board, from, piece.color, out),
        PieceKind::Knight => step_moves(board, from, piece.color, &KNIGHT_DELTAS, out),
        PieceKind::Bishop => slide_moves(board, from, piece.color, &DIAGONAL_DIRS, out),
        PieceKind::Rook => slide_moves(board, from, piece.color, &ORTHOGONAL_DIRS, out),
        PieceKind::Queen => {
            slide_moves(board, from, piece.color, &DIAGONAL_DIRS, out);
            slide_moves(board, from, piece.color, &ORTHOGONAL_DIRS, out);
        }
        PieceKind::King => {
            step_moves(board, from, piece.color, &KING_DELTAS, out);
            castle_moves(board, from, piece.color, out);
        }
    }
}

fn step_moves(
    board: &Board,
    from: Square,
    color: Color,
    deltas: &[(i8, i8)],
    out: &mut Vec<Move>,
) {
    for &(delta_file, delta_rank) in deltas {
        if let Some(to) = from.offset(delta_file, delta_rank) {
            match board.piece_at(to) {
                None => out.push(Move::new(from, to)),
                Some(piece) if piece.color != color => out.push(Move::new(from, to)),
                Some(_) => {}
            }
        }
    }
}

fn slide_moves(
    board: &Board,
    from: Square,
    color: Color,
    dirs: &[(i8, i8)],
    out: &mut Vec<Move>,
) {
    for &(delta_file, delta_rank) in dirs {
        let mut cursor = from.offset(delta_file, delta_rank);
        while let Some(to) = cursor {
            match board.piece_at(to) {
                None => {
                    out.push(Move::new(from, to));
                    cursor = to.offset(delta_file, delta_rank);
                }
                Some(piece) => {
                    if piece.color != color {
                        out.push(Move::new(from, to));
                    }
                    break;
                }
            }
        }
    }
}

fn pawn_moves(board: &Board, from: Square, color: Color, out: &mut Vec<Move>) {
    let forward: i8 = match color {
        Color::White => 1,
        Color::Black => -1,
    };
    let start_rank = match color {
        Color::White => 2,
        Color::Black => 7,
    };
    let promotion_rank = match color {
        Color::White => 8,
        Color::Black => 1,
    };

    let push = |from: Square, to: Square, out: &mut Vec<Move>| {
        if to.rank() == promotion_rank {
            for kind in PROMOTION_KINDS {
                out.push(Move::promoting(from, to, kind));
            }
        } else {
            out.push(Move::new(from, to));
        }
    };

    // Single and double advances need clear squares.
    if let Some(to) = from.offset(0, forward) {
        if board.piece_at(to).is_none() {
            push(from, to, out);
            if from.rank() == start_rank {
                if let Some(two) = to.offset(0, forward) {
                    if board.piece_at(two).is_none() {
                        out.push(Move::new(from, two));
                    }
                }
            }
        }
    }

    // Diagonal captures, including the en-passant target square.
    for delta_file in [-1, 1] {
        if let Some(to) = from.offset(delta_file, forward) {
            match board.piece_at(to) {
                Some(piece) if piece.color != color => push(from, to, out),
                Some(_) => {}
                None => {
                    if board.en_passant == Some(to) {
                        let mut mv = Move::new(from, to);
                        mv.en_passant = true;
                        out.push(mv);
                    }
                }
            }
        }
    }
}

fn castle_moves(board: &Board, from: Square, color: Color, out: &mut Vec<Move>) {
    let home_rank = match color {
        Color::White => 1,
        Color::Black => 8,
    };
    if from.file() != 5 || from.rank() != home_rank {
        return;
    }
    if in_check(board, color) {
        return;
    }

    let (king_side, queen_side) = match color {
        Color::White => (board.castling.white_king_side, board.castling.white_queen_side),
        Color::Black => (board.castling.black_king_side, board.castling.black_queen_side),
    };
    let enemy = color.other();
    let rook = Piece::new(color, PieceKind::Rook);

    // King side: f and g clear and unattacked, rook still home on h.
    if king_side {
        let path_clear = files_empty(board, &[6, 7], home_rank);
        let path_safe = !attacked_file(board, 6, home_rank, enemy)
            && !attacked_file(board, 7, home_rank, enemy);
        if path_clear && path_safe && piece_on_file(board, 8, home_rank) == Some(rook) {
            if let Some(to) = from.offset(2, 0) {
                let mut mv = Move::new(from, to);
                mv.castle = true;
                out.push(mv);
            }
        }
    }

    // Queen side: b, c and d clear; c and d unattacked; rook home on a.
    if queen_side {
        let path_clear = files_empty(board, &[2, 3, 4], home_rank);
        let path_safe = !attacked_file(board, 3, home_rank, enemy)
            && !attacked_file(board, 4, home_rank, enemy);
        if path_clear && path_safe && piece_on_file(board, 1, home_rank) == Some(rook) {
            if let Some(to) = from.offset(-2, 0) {
                let mut mv = Move::new(from, to);
                mv.castle = true;
                out.push(mv);
            }
        }
    }
}

fn piece_on_file(board: &Board, file: u8, rank: u8) -> Option<Piece> {
    Square::new(file, rank).ok().and_then(|square| board.piece_at(square))
}

fn files_empty(board: &Board, files: &[u8], rank: u8) -> bool {
    files
        .iter()
        .all(|&file| piece_on_file(board, file, rank).is_none())
}

fn attacked_file(board: &Board, file: u8, rank: u8, by: Color) -> bool {
    Square::new(file, rank)
        .map(|square| is_square_attacked(board, square, by))
        .unwrap_or(false)
}

/// No legal moves while in check.
pub fn is_checkmate(board: &Board) -> bool {
    in_check(board, board.side_to_move) && all_legal_moves(board).is_empty()
}

/// No legal moves while not in check.
pub fn is_stalemate(board: &Board) -> bool {
    !in_check(board, board.side_to_move) && all_legal_moves(board).is_empty()
}

/// Stalemate, the fifty-move rule, or insufficient mating material.
/// Threefold repetition is out of scope here: the session keeps no move
/// history.
pub fn is_draw(board: &Board) -> bool {
    is_stalemate(board) || is_fifty_move_draw(board) || has_insufficient_material(board)
}

pub fn is_fifty_move_draw(board: &Board) -> bool {
    board.halfmove_clock >= 100
}

/// King vs king, or king and one minor piece vs king.
pub fn has_insufficient_material(board: &Board) -> bool {
    let mut minor_pieces = 0usize;
    for square in Square::all() {
        match board.piece_at(square).map(|piece| piece.kind) {
            None | Some(PieceKind::King) => {}
            Some(PieceKind::Bishop) | Some(PieceKind::Knight) => minor_pieces += 1,
            Some(_) => return false,
        }
    }
    minor_pieces <= 1
}
