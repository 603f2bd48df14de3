//! Negamax alpha-beta search over the material evaluation.
//!
//! The search exists to give computer-controlled sides plausible moves, not
//! to be strong: fixed depth, no transposition table, no quiescence. Root
//! moves are shuffled so games against the computer vary.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::board::{Board, Move};
use crate::eval::evaluate;
use crate::rules::{all_legal_moves, in_check, is_fifty_move_draw};

/// Scores outside any material swing; deeper mates score slightly lower so
/// the search prefers the faster one.
const MATE_SCORE: i32 = 100_000;
const SCORE_BOUND: i32 = 10 * MATE_SCORE;

/// Picks a move for the side to move, or `None` when the game is over.
pub fn choose_move<R: Rng>(board: &Board, depth: u8, rng: &mut R) -> Option<Move> {
    let mut moves = all_legal_moves(board);
    if moves.is_empty() {
        return None;
    }
    moves.shuffle(rng);

    let mut best = moves[0];
    let mut best_score = -SCORE_BOUND;
    let mut alpha = -SCORE_BOUND;

    for mv in moves {
        let mut next = board.clone();
        next.make_move(mv);
        let score = -negamax(&next, depth.saturating_sub(1), -SCORE_BOUND, -alpha);
        if score > best_score {
            best_score = score;
            best = mv;
        }
        if score > alpha {
            alpha = score;
        }
    }

    Some(best)
}

fn negamax(board: &Board, depth: u8, mut alpha: i32, beta: i32) -> i32 {
    if is_fifty_move_draw(board) {
        return 0;
    }

    let moves = all_legal_moves(board);
    if moves.is_empty() {
        if in_check(board, board.side_to_move) {
            // Mated; deeper remaining depth means a faster mate for the
            // opponent, which must look worse for us.
            return -(MATE_SCORE + depth as i32);
        }
        return 0;
    }

    if depth == 0 {
        return evaluate(board);
    }

    let mut best = -SCORE_BOUND;
    for mv in moves {
        let mut next = board.clone();
        next.make_move(mv);
        let score = -negamax(&next, depth - 1, -beta, -alpha);

        if score > best {
            best = score;
        }
        if best > alpha {
            alpha = best;
        }
        if alpha >= beta {
            break;
        }
    }

    best
}

#[cfg(test)]
#[path = "search_tests.rs"]
mod search_tests;
