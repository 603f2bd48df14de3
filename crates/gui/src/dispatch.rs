//! The move dispatcher: the single path by which moves reach the engine
//! session, plus the one-ply step of the computer-move loop.
//!
//! Both entry points are plain functions over the session and the surface
//! so the whole protocol is testable without a running UI.

use board_core::{codec, Square};
use engine_session::{GameSession, Promotion};
use tracing::{debug, error};

use crate::surface::BoardSurface;

pub const CHECKMATE_MESSAGE: &str = "Checkmate!";
pub const DRAW_MESSAGE: &str = "Draw!";

/// Where control goes after a move is applied.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TurnStatus {
    HumanTurn,
    ComputerTurn,
    GameOver(String),
}

/// Attempts one move. An illegal or promotion-starved request ends
/// silently with `None` and no state change; an applied move re-renders the
/// surface and reports where control goes next.
pub fn attempt_move(
    session: &mut GameSession,
    surface: &mut BoardSurface,
    from: Square,
    to: Square,
    promotion: Promotion,
) -> Option<TurnStatus> {
    if !session.is_move_legal(from, to) {
        debug!(from = %from, to = %to, "speculative drop was not legal");
        return None;
    }
    if let Err(err) = session.make_move(from, to, promotion) {
        debug!(from = %from, to = %to, %err, "move rejected");
        return None;
    }

    refresh(surface, session);
    Some(turn_status(session))
}

/// One ply of the computer-move loop: the session chooses and applies a
/// move, the surface re-renders, and the caller learns whether to schedule
/// another ply.
pub fn computer_ply(session: &mut GameSession, surface: &mut BoardSurface) -> TurnStatus {
    if let Err(err) = session.make_computer_move() {
        debug!(%err, "computer had no move to make");
        return turn_status(session);
    }
    refresh(surface, session);
    turn_status(session)
}

/// Re-fetches the authoritative position and re-renders the surface.
pub fn refresh(surface: &mut BoardSurface, session: &GameSession) {
    match codec::parse_codes(&session.get_board()) {
        Ok(placements) => surface.render(&placements),
        Err(err) => error!(%err, "session reported an unrenderable position"),
    }
}

/// Terminal conditions first, then side control.
pub fn turn_status(session: &GameSession) -> TurnStatus {
    if session.is_checkmate() {
        TurnStatus::GameOver(CHECKMATE_MESSAGE.to_string())
    } else if session.is_draw() {
        TurnStatus::GameOver(DRAW_MESSAGE.to_string())
    } else if session.is_computer_move() {
        TurnStatus::ComputerTurn
    } else {
        TurnStatus::HumanTurn
    }
}

#[cfg(test)]
#[path = "dispatch_tests.rs"]
mod dispatch_tests;
