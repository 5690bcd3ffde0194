//! Default engine parameters.
//!
//! Everything here can be overridden per call; these are the values the CLI
//! and the convenience constructors fall back to.

/// Default board size (NxN). Standard Go sizes are 9, 13, or 19.
pub const DEFAULT_BOARD_SIZE: usize = 9;

/// Compensation points for White moving second.
pub const DEFAULT_KOMI: f64 = 7.5;

/// Default number of MCTS rounds per move.
pub const DEFAULT_NUM_ROUNDS: u32 = 500;

/// Default UCT exploration temperature, roughly sqrt(2).
pub const DEFAULT_TEMPERATURE: f64 = 1.4;
