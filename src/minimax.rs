//! Depth-limited negamax search with a pluggable evaluator.
//!
//! Every value is from the perspective of the player to move at that node,
//! so a child's best result is negated to score the branch for the parent.

use std::rc::Rc;

use crate::playout::{Scorer, game_winner};
use crate::position::{Position, apply_move};

/// Sentinel for a position the player to move has already won. Strictly
/// larger in magnitude than anything an evaluator may return, so decided
/// games dominate heuristic scores.
pub const MAX_SCORE: i32 = 999_999;

/// Sentinel for a position the player to move has already lost.
pub const MIN_SCORE: i32 = -999_999;

/// Best achievable outcome for the player to move, searching `max_depth`
/// plies deep and falling back to `evaluate` at the horizon.
///
/// Finished games return the win/loss sentinel before the evaluator is ever
/// consulted. The branch set is never empty below a running position, since
/// `legal_moves` always contains at least the pass move.
pub fn best_result<F>(
    position: &Rc<Position>,
    max_depth: u32,
    evaluate: &F,
    scorer: &dyn Scorer,
) -> i32
where
    F: Fn(&Position) -> i32,
{
    if position.is_over() {
        return if game_winner(position, scorer) == position.next_player() {
            MAX_SCORE
        } else {
            MIN_SCORE
        };
    }
    if max_depth == 0 {
        return evaluate(position);
    }

    let mut best_so_far = MIN_SCORE;
    for candidate in position.legal_moves() {
        let next = apply_move(position, candidate);
        let opponent_best = best_result(&next, max_depth - 1, evaluate, scorer);
        let our_result = -opponent_best;
        if our_result > best_so_far {
            best_so_far = our_result;
        }
    }
    best_so_far
}
