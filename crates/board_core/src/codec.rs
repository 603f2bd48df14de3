//! Conversion between the two board encodings and the `(Square, Piece)`
//! placement sequence consumed by the renderer.
//!
//! The textual form is a FEN placement field: one token per rank from 8 down
//! to 1, digits for runs of empty squares, letters for pieces (uppercase
//! white). The numeric form is the 64-cell code sequence the engine session
//! reports, in the same a8-to-h1 scan order. Both decoders produce the same
//! intermediate sequence, which keeps the formats interchangeable.

use tracing::warn;

use crate::{NotationError, Piece, Square};

/// Placement field plus metadata for the standard initial position.
pub const START_POSITION_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

/// Parses the placement field of a textual position.
///
/// Unrecognized characters are logged and skipped; a space terminates the
/// field (trailing metadata is not interpreted here). Rank/file bounds
/// violations surface as the square constructor's hard error and abort the
/// parse.
pub fn parse_placement(text: &str) -> Result<Vec<(Square, Piece)>, NotationError> {
    let mut placements = Vec::with_capacity(32);
    let mut rank: i16 = 8;
    let mut file: i16 = 1;

    for ch in text.chars() {
        if let Some(digit) = ch.to_digit(10) {
            file += digit as i16;
        } else if ch == '/' {
            rank -= 1;
            file = 1;
        } else if ch == ' ' {
            break;
        } else if let Some(piece) = Piece::from_placement_char(ch) {
            let square = Square::new(clamp_coord(file), clamp_coord(rank))?;
            placements.push((square, piece));
            file += 1;
        } else {
            warn!(character = %ch, "unrecognized placement character, skipping");
        }
    }

    Ok(placements)
}

// Cursor values that left u8 range map to 0, which the square constructor
// rejects as an invalid coordinate.
fn clamp_coord(value: i16) -> u8 {
    u8::try_from(value).unwrap_or(0)
}

/// Decodes the numeric position form: exactly 64 cell codes in scan order.
///
/// Code 0 is an empty cell; 1-12 decode per the piece code table; anything
/// else is logged and skipped.
pub fn parse_codes(cells: &[u8]) -> Result<Vec<(Square, Piece)>, NotationError> {
    if cells.len() != 64 {
        return Err(NotationError::WrongCellCount(cells.len()));
    }

    let mut placements = Vec::with_capacity(32);
    for (index, &code) in cells.iter().enumerate() {
        if code == 0 {
            continue;
        }
        match Piece::from_code(code) {
            Some(piece) => placements.push((Square::from_index(index)?, piece)),
            None => warn!(code, index, "unrecognized cell code, skipping"),
        }
    }

    Ok(placements)
}

/// Encodes a placement sequence back into the numeric form. The inverse of
/// [`parse_codes`] for well-formed input; later entries overwrite earlier
/// ones on the same square.
pub fn encode_codes<'a, I>(placements: I) -> [u8; 64]
where
    I: IntoIterator<Item = &'a (Square, Piece)>,
{
    let mut cells = [0u8; 64];
    for &(square, piece) in placements {
        cells[square.index()] = piece.code();
    }
    cells
}

#[cfg(test)]
#[path = "codec_tests.rs"]
mod codec_tests;
