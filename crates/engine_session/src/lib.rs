pub mod board;
pub mod eval;
pub mod rules;
pub mod search;
pub mod session;

pub use board::{Board, CastlingRights, Move};
pub use session::GameSession;

use std::fmt;

use board_core::{NotationError, PieceKind, Square};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Who supplies moves for one side of the game.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlayerKind {
    #[default]
    Human,
    Computer,
}

impl fmt::Display for PlayerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlayerKind::Human => write!(f, "Human"),
            PlayerKind::Computer => write!(f, "Computer"),
        }
    }
}

/// Promotion choice carried by every move request. Code 0 is "no
/// promotion"; 1-4 select the replacement piece. Unrecognized codes map to
/// `None`, which the session rejects for an actual promoting advance.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Promotion {
    #[default]
    None,
    Queen,
    Rook,
    Bishop,
    Knight,
}

impl Promotion {
    pub fn code(self) -> u8 {
        match self {
            Promotion::None => 0,
            Promotion::Queen => 1,
            Promotion::Rook => 2,
            Promotion::Bishop => 3,
            Promotion::Knight => 4,
        }
    }

    pub fn from_code(code: u8) -> Promotion {
        match code {
            1 => Promotion::Queen,
            2 => Promotion::Rook,
            3 => Promotion::Bishop,
            4 => Promotion::Knight,
            _ => Promotion::None,
        }
    }

    pub fn kind(self) -> Option<PieceKind> {
        match self {
            Promotion::None => None,
            Promotion::Queen => Some(PieceKind::Queen),
            Promotion::Rook => Some(PieceKind::Rook),
            Promotion::Bishop => Some(PieceKind::Bishop),
            Promotion::Knight => Some(PieceKind::Knight),
        }
    }
}

/// Why a requested move was not applied. `Illegal` and `PromotionRequired`
/// are normal negative outcomes of speculative drops, not session faults.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoveError {
    #[error("move {from}-{to} is not legal in the current position")]
    Illegal { from: Square, to: Square },

    #[error("move {from}-{to} is a promoting advance and needs a promotion choice")]
    PromotionRequired { from: Square, to: Square },

    #[error("no legal moves available for the side to move")]
    NoMovesAvailable,
}

/// Errors while ingesting a textual position.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FenError {
    #[error(transparent)]
    Notation(#[from] NotationError),

    #[error("invalid side-to-move field {0:?}")]
    InvalidSideToMove(String),

    #[error("invalid castling field {0:?}")]
    InvalidCastling(String),

    #[error("invalid en-passant field {0:?}")]
    InvalidEnPassant(String),

    #[error("invalid clock field {0:?}")]
    InvalidClock(String),
}
