//! Tengen: a small Go engine.
//!
//! This crate implements the rules of Go (stone placement, capture, the
//! positional superko rule) together with two game-tree search strategies:
//! Monte Carlo Tree Search with UCT selection, and depth-limited negamax
//! with a pluggable static evaluator.
//!
//! ## Modules
//!
//! - [`constants`] - Default engine parameters
//! - [`board`] - Points, moves, groups and the capture algorithm
//! - [`position`] - Immutable game states, legality and ko enforcement
//! - [`agent`] - The move-source trait and a uniformly random bot
//! - [`playout`] - Random game simulation and terminal scoring
//! - [`mcts`] - Monte Carlo Tree Search with UCT selection
//! - [`minimax`] - Depth-limited negamax search
//!
//! ## Example
//!
//! ```
//! use tengen::agent::Agent;
//! use tengen::board::{Move, Point};
//! use tengen::mcts::MctsAgent;
//! use tengen::position::{Position, apply_move};
//!
//! // Create a new 5x5 game and play a stone.
//! let pos = Position::new_game(5);
//! let pos = apply_move(&pos, Move::Play(Point::new(3, 3)));
//!
//! // Run a short MCTS search to find a response.
//! let mut bot = MctsAgent::with_seed(10, 1.4, 42);
//! let best = bot.select_move(&pos);
//! assert!(pos.is_valid_move(best));
//! ```

pub mod agent;
pub mod board;
pub mod constants;
pub mod mcts;
pub mod minimax;
pub mod playout;
pub mod position;
