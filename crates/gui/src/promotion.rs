//! The pawn-promotion interaction: a two-state machine that intercepts a
//! pawn landing on its far rank, holds the move while the prompt is open,
//! and resumes it once the user submits a choice.

use std::fmt;

use board_core::{Color, PieceKind, Square};

use crate::input::MoveIntent;
use crate::surface::BoardSurface;

/// The fixed choice enumeration offered by the prompt, wire codes 1-4.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PromotionChoice {
    Queen,
    Rook,
    Bishop,
    Knight,
}

impl PromotionChoice {
    pub const ALL: [PromotionChoice; 4] = [
        PromotionChoice::Queen,
        PromotionChoice::Rook,
        PromotionChoice::Bishop,
        PromotionChoice::Knight,
    ];

    pub fn code(self) -> u8 {
        match self {
            PromotionChoice::Queen => 1,
            PromotionChoice::Rook => 2,
            PromotionChoice::Bishop => 3,
            PromotionChoice::Knight => 4,
        }
    }
}

impl fmt::Display for PromotionChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PromotionChoice::Queen => write!(f, "Queen"),
            PromotionChoice::Rook => write!(f, "Rook"),
            PromotionChoice::Bishop => write!(f, "Bishop"),
            PromotionChoice::Knight => write!(f, "Knight"),
        }
    }
}

/// Prompt state. The stored intent exists only while the prompt is open;
/// everything else about the move lives with the engine session.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum PromotionPrompt {
    #[default]
    Idle,
    AwaitingChoice {
        from: Square,
        to: Square,
        selected: Option<PromotionChoice>,
    },
}

impl PromotionPrompt {
    pub fn new() -> Self {
        Self::default()
    }

    /// The `Idle → AwaitingChoice` transition: intercepts the intent iff
    /// the dragged piece is a pawn headed for its far rank. Returns whether
    /// the move is now suspended behind the prompt.
    pub fn intercept(&mut self, surface: &BoardSurface, intent: MoveIntent) -> bool {
        let piece = match surface.piece_at(intent.from) {
            Some(visual) => visual.piece,
            None => return false,
        };
        if piece.kind != PieceKind::Pawn {
            return false;
        }
        let far_rank = match piece.color {
            Color::White => 8,
            Color::Black => 1,
        };
        if intent.to.rank() != far_rank {
            return false;
        }

        *self = PromotionPrompt::AwaitingChoice {
            from: intent.from,
            to: intent.to,
            selected: None,
        };
        true
    }

    pub fn is_open(&self) -> bool {
        matches!(self, PromotionPrompt::AwaitingChoice { .. })
    }

    pub fn selected(&self) -> Option<PromotionChoice> {
        match self {
            PromotionPrompt::AwaitingChoice { selected, .. } => *selected,
            PromotionPrompt::Idle => None,
        }
    }

    pub fn select(&mut self, choice: PromotionChoice) {
        if let PromotionPrompt::AwaitingChoice { selected, .. } = self {
            *selected = Some(choice);
        }
    }

    /// The `AwaitingChoice → Idle` transition: closes the prompt and yields
    /// the suspended move with the chosen wire code. No selection submits
    /// code 0 ("no promotion"), which the session rejects for a promoting
    /// advance.
    pub fn take_submission(&mut self) -> Option<(Square, Square, u8)> {
        match std::mem::take(self) {
            PromotionPrompt::AwaitingChoice { from, to, selected } => {
                Some((from, to, selected.map(PromotionChoice::code).unwrap_or(0)))
            }
            PromotionPrompt::Idle => None,
        }
    }

    /// Drops any suspended move, e.g. when the board is reset while the
    /// prompt is open.
    pub fn cancel(&mut self) {
        *self = PromotionPrompt::Idle;
    }
}

#[cfg(test)]
#[path = "promotion_tests.rs"]
mod promotion_tests;
