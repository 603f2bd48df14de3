//! The capability surface the GUI synchronizes against. The session owns
//! the one authoritative position; the UI only ever requests mutations and
//! re-fetches the numeric form afterwards.

use board_core::{Color, Square};
use rand::thread_rng;
use tracing::debug;

use crate::board::{Board, Move};
use crate::rules;
use crate::search;
use crate::{FenError, MoveError, PlayerKind, Promotion};

const DEFAULT_SEARCH_DEPTH: u8 = 3;

#[derive(Clone, Debug)]
pub struct GameSession {
    board: Board,
    white_player: PlayerKind,
    black_player: PlayerKind,
    search_depth: u8,
    last_move: Option<(Square, Square)>,
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}

impl GameSession {
    /// A session in the standard initial position with both sides human,
    /// identical to the state after [`reset_board`](Self::reset_board).
    pub fn new() -> Self {
        Self {
            board: Board::start_position(),
            white_player: PlayerKind::Human,
            black_player: PlayerKind::Human,
            search_depth: DEFAULT_SEARCH_DEPTH,
            last_move: None,
        }
    }

    /// Replaces the current position. Validates the encoding, not the chess
    /// legality of the result. Player control is untouched.
    pub fn set_board(&mut self, fen: &str) -> Result<(), FenError> {
        self.board = Board::from_fen(fen)?;
        self.last_move = None;
        Ok(())
    }

    /// Configures which sides are computer-controlled.
    pub fn set_players(&mut self, white: PlayerKind, black: PlayerKind) {
        self.white_player = white;
        self.black_player = black;
    }

    /// Back to the standard initial position and human/human control.
    /// Callers that want computer control must call
    /// [`set_players`](Self::set_players) after, never before, a reset.
    pub fn reset_board(&mut self) {
        self.board = Board::start_position();
        self.white_player = PlayerKind::Human;
        self.black_player = PlayerKind::Human;
        self.last_move = None;
    }

    pub fn set_search_depth(&mut self, depth: u8) {
        self.search_depth = depth.max(1);
    }

    pub fn side_to_move(&self) -> Color {
        self.board.side_to_move
    }

    pub fn last_move(&self) -> Option<(Square, Square)> {
        self.last_move
    }

    pub fn is_move_legal(&self, from: Square, to: Square) -> bool {
        rules::legal_moves_from(&self.board, from)
            .iter()
            .any(|mv| mv.to == to)
    }

    /// Applies a human move. The promotion choice is consulted only when
    /// the move is a promoting pawn advance: such an advance without a
    /// choice is rejected with no state change, while a choice on any other
    /// move is ignored.
    pub fn make_move(
        &mut self,
        from: Square,
        to: Square,
        promotion: Promotion,
    ) -> Result<(), MoveError> {
        let candidates: Vec<Move> = rules::legal_moves_from(&self.board, from)
            .into_iter()
            .filter(|mv| mv.to == to)
            .collect();
        if candidates.is_empty() {
            return Err(MoveError::Illegal { from, to });
        }

        let chosen = if candidates.iter().any(|mv| mv.promotion.is_some()) {
            let kind = promotion
                .kind()
                .ok_or(MoveError::PromotionRequired { from, to })?;
            candidates
                .into_iter()
                .find(|mv| mv.promotion == Some(kind))
                .ok_or(MoveError::Illegal { from, to })?
        } else {
            candidates[0]
        };

        self.apply(chosen);
        Ok(())
    }

    /// The numeric 64-cell position in scan order.
    pub fn get_board(&self) -> [u8; 64] {
        self.board.to_codes()
    }

    pub fn is_checkmate(&self) -> bool {
        rules::is_checkmate(&self.board)
    }

    pub fn is_draw(&self) -> bool {
        rules::is_draw(&self.board)
    }

    /// Whether the side to move is computer-controlled.
    pub fn is_computer_move(&self) -> bool {
        match self.board.side_to_move {
            Color::White => self.white_player == PlayerKind::Computer,
            Color::Black => self.black_player == PlayerKind::Computer,
        }
    }

    /// Selects and applies one move for the side to move.
    pub fn make_computer_move(&mut self) -> Result<(), MoveError> {
        let chosen = search::choose_move(&self.board, self.search_depth, &mut thread_rng())
            .ok_or(MoveError::NoMovesAvailable)?;
        debug!(from = %chosen.from, to = %chosen.to, "computer move selected");
        self.apply(chosen);
        Ok(())
    }

    fn apply(&mut self, mv: Move) {
        self.board.make_move(mv);
        self.last_move = Some((mv.from, mv.to));
    }

    /// Direct board access for rule-level tests.
    pub fn board(&self) -> &Board {
        &self.board
    }
}
