//! Drag-and-drop to move-intent translation.
//!
//! The controller owns the pending drag payload (the dragged piece's
//! identity id) and resolves drops into `(source, destination)` intents.
//! Every square accepts a drop; legality is the dispatcher's business.

use board_core::Square;
use tracing::{debug, warn};

use crate::surface::BoardSurface;

/// How a drop landed: on an empty square or on an occupied one. Decided by
/// an occupancy query against the surface, never by inspecting id strings.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DropKind {
    Quiet,
    Capture,
}

/// A resolved gesture, ready for the promotion check and the dispatcher.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MoveIntent {
    pub from: Square,
    pub to: Square,
    pub kind: DropKind,
}

#[derive(Clone, Debug, Default)]
pub struct InputController {
    payload: Option<String>,
}

impl InputController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the identity of the piece under `square` as the drag
    /// payload. Returns whether a drag actually began (empty squares start
    /// nothing).
    pub fn drag_started(&mut self, surface: &BoardSurface, square: Square) -> bool {
        match surface.piece_at(square) {
            Some(visual) => {
                self.payload = Some(visual.identity.clone());
                true
            }
            None => false,
        }
    }

    /// A release outside the board: the gesture ends with no intent.
    pub fn drag_aborted(&mut self) {
        self.payload = None;
    }

    pub fn is_dragging(&self) -> bool {
        self.payload.is_some()
    }

    /// The square the current payload sits on, for highlighting.
    pub fn drag_source(&self, surface: &BoardSurface) -> Option<Square> {
        self.payload
            .as_deref()
            .and_then(|identity| surface.find_identity(identity))
    }

    /// Resolves a drop onto `target` into a move intent. Consumes the
    /// payload either way. Returns `None` for drops with no active payload,
    /// stale payloads and self-drops.
    pub fn dropped(&mut self, surface: &BoardSurface, target: Square) -> Option<MoveIntent> {
        let payload = self.payload.take()?;

        let from = match surface.find_identity(&payload) {
            Some(square) => square,
            None => {
                warn!(identity = %payload, "drag payload no longer on the surface, ignoring drop");
                return None;
            }
        };

        // Dropping a piece on itself is a no-op, not an error.
        if from == target {
            return None;
        }

        let kind = if surface.is_occupied(target) {
            DropKind::Capture
        } else {
            DropKind::Quiet
        };
        debug!(from = %from, to = %target, ?kind, "drop resolved");

        Some(MoveIntent {
            from,
            to: target,
            kind,
        })
    }
}

#[cfg(test)]
#[path = "input_tests.rs"]
mod input_tests;
