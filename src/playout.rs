//! Random game simulation and terminal scoring.
//!
//! A rollout plays uniformly random moves until the game ends, then asks a
//! [`Scorer`] who won. Resignations never reach the scorer: the winner of a
//! resigned game is the player who did not resign, and that is resolved
//! locally in [`game_winner`].

use std::rc::Rc;

use crate::agent::{Agent, RandomBot};
use crate::board::{Board, Move, Player, Point};
use crate::constants::DEFAULT_KOMI;
use crate::position::{Position, apply_move};

/// Decides the winner of a finished game.
pub trait Scorer {
    /// Only called on positions where `is_over()` is true and the game was
    /// not decided by resignation.
    fn winner(&self, position: &Position) -> Player;
}

/// Area scoring: every stone counts one point, and an empty point bordered
/// by stones of a single color counts for that color. White receives komi.
pub struct AreaScorer {
    komi: f64,
}

impl AreaScorer {
    pub fn new(komi: f64) -> AreaScorer {
        AreaScorer { komi }
    }
}

impl Default for AreaScorer {
    fn default() -> Self {
        AreaScorer::new(DEFAULT_KOMI)
    }
}

impl Scorer for AreaScorer {
    fn winner(&self, position: &Position) -> Player {
        let board = position.board();
        let mut black = 0.0;
        let mut white = self.komi;
        for row in 1..=board.num_rows() {
            for col in 1..=board.num_cols() {
                let point = Point::new(row, col);
                let color = match board.get(point) {
                    Some(color) => Some(color),
                    None => bordering_color(board, point),
                };
                match color {
                    Some(Player::Black) => black += 1.0,
                    Some(Player::White) => white += 1.0,
                    None => {}
                }
            }
        }
        if black > white { Player::Black } else { Player::White }
    }
}

/// The single color surrounding an empty point, if any. A point touching
/// both colors, or touching another empty point, is neutral.
fn bordering_color(board: &Board, point: Point) -> Option<Player> {
    let mut color = None;
    for neighbor in point.neighbors() {
        if !board.is_on_grid(neighbor) {
            continue;
        }
        match board.get(neighbor) {
            None => return None,
            Some(c) => match color {
                None => color = Some(c),
                Some(seen) if seen != c => return None,
                Some(_) => {}
            },
        }
    }
    color
}

/// The winner of a finished game. Resignation is resolved here; double-pass
/// endings are delegated to the scorer.
pub fn game_winner(position: &Position, scorer: &dyn Scorer) -> Player {
    assert!(position.is_over(), "game_winner called on a running game");
    if position.last_move() == Some(Move::Resign) {
        // The player to move after a resignation is the non-resigner.
        return position.next_player();
    }
    scorer.winner(position)
}

/// Play a game out with uniformly random moves and report the winner.
///
/// Termination is guaranteed: superko forbids repeating any board with the
/// same player to move, and the random bot passes once only eye-filling
/// moves remain.
pub fn simulate_random_game(
    position: &Rc<Position>,
    rng: &mut fastrand::Rng,
    scorer: &dyn Scorer,
) -> Player {
    let mut bot = RandomBot::with_seed(rng.u64(..));
    let mut game = Rc::clone(position);
    while !game.is_over() {
        let mv = bot.select_move(&game);
        game = apply_move(&game, mv);
    }
    game_winner(&game, scorer)
}
