//! The rendered-board model: what the screen currently shows.
//!
//! The surface is display state only. It is rebuilt from the session's
//! authoritative position after every applied move and never mutated
//! piecewise, so it cannot drift from the engine's truth.

use board_core::{Piece, Square};
use tracing::warn;

/// One piece visual attached to a square: the piece itself, its stable
/// identity id (the drag payload) and its style class.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PieceVisual {
    pub piece: Piece,
    pub identity: String,
    pub class_name: String,
}

#[derive(Clone, Debug)]
pub struct BoardSurface {
    cells: [Option<PieceVisual>; 64],
}

impl Default for BoardSurface {
    fn default() -> Self {
        Self {
            cells: std::array::from_fn(|_| None),
        }
    }
}

impl BoardSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Removes every piece visual. Idempotent; the squares themselves are
    /// fixed and survive.
    pub fn clear(&mut self) {
        for cell in &mut self.cells {
            *cell = None;
        }
    }

    /// Clears and repopulates the surface from a placement sequence.
    /// A second placement onto the same square is logged and dropped; the
    /// rest of the render continues.
    pub fn render(&mut self, placements: &[(Square, Piece)]) {
        self.clear();
        for &(square, piece) in placements {
            let cell = &mut self.cells[square.index()];
            if let Some(existing) = cell {
                warn!(
                    square = %square,
                    occupied_by = %existing.identity,
                    "placement onto an occupied square, skipping"
                );
                continue;
            }
            *cell = Some(PieceVisual {
                piece,
                identity: piece.identity_id(square),
                class_name: piece.class_name(),
            });
        }
    }

    pub fn piece_at(&self, square: Square) -> Option<&PieceVisual> {
        self.cells[square.index()].as_ref()
    }

    /// The occupancy query drop classification relies on.
    pub fn is_occupied(&self, square: Square) -> bool {
        self.cells[square.index()].is_some()
    }

    /// Finds the square holding the visual with the given identity id.
    pub fn find_identity(&self, identity: &str) -> Option<Square> {
        Square::all().find(|&square| {
            self.piece_at(square)
                .map(|visual| visual.identity == identity)
                .unwrap_or(false)
        })
    }

    /// Reads the surface back as a placement sequence, in scan order.
    pub fn placements(&self) -> Vec<(Square, Piece)> {
        Square::all()
            .filter_map(|square| self.piece_at(square).map(|visual| (square, visual.piece)))
            .collect()
    }

    pub fn piece_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }
}

#[cfg(test)]
#[path = "surface_tests.rs"]
mod surface_tests;
