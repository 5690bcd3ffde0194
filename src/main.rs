//! Tengen: a small Go engine.
//!
//! ## Usage
//!
//! - `tengen demo` - pick one MCTS move from an empty board
//! - `tengen selfplay` - play a full game between two MCTS bots

use anyhow::{Result, ensure};
use clap::{Parser, Subcommand};
use log::info;

use tengen::agent::Agent;
use tengen::board::{Player, str_coord};
use tengen::constants::{DEFAULT_BOARD_SIZE, DEFAULT_NUM_ROUNDS, DEFAULT_TEMPERATURE};
use tengen::mcts::MctsAgent;
use tengen::playout::{AreaScorer, game_winner};
use tengen::position::{Position, apply_move};

/// Tengen: a small Go MCTS engine
#[derive(Parser)]
#[command(name = "tengen")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Pick one move with MCTS from an empty board
    Demo {
        /// Board size (NxN)
        #[arg(long, default_value_t = DEFAULT_BOARD_SIZE)]
        size: usize,
        /// MCTS rounds for the single search
        #[arg(long, default_value_t = 100)]
        rounds: u32,
    },
    /// Play a full game between two MCTS bots
    Selfplay {
        /// Board size (NxN)
        #[arg(long, default_value_t = DEFAULT_BOARD_SIZE)]
        size: usize,
        /// MCTS rounds per move
        #[arg(long, default_value_t = DEFAULT_NUM_ROUNDS)]
        rounds: u32,
        /// UCT exploration temperature
        #[arg(long, default_value_t = DEFAULT_TEMPERATURE)]
        temperature: f64,
        /// Seed for a reproducible game
        #[arg(long)]
        seed: Option<u64>,
    },
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Demo { size, rounds }) => run_demo(size, rounds),
        Some(Commands::Selfplay { size, rounds, temperature, seed }) => {
            run_selfplay(size, rounds, temperature, seed)
        }
        None => run_demo(DEFAULT_BOARD_SIZE, 100),
    }
}

fn check_size(size: usize) -> Result<()> {
    ensure!((2..=19).contains(&size), "board size must be between 2 and 19");
    Ok(())
}

fn run_demo(size: usize, rounds: u32) -> Result<()> {
    check_size(size)?;
    println!("Running {rounds} MCTS rounds on an empty {size}x{size} board...");

    let pos = Position::new_game(size);
    let mut bot = MctsAgent::new(rounds, DEFAULT_TEMPERATURE);
    let best = bot.select_move(&pos);
    println!("Best move: {}", str_coord(best));
    Ok(())
}

fn run_selfplay(size: usize, rounds: u32, temperature: f64, seed: Option<u64>) -> Result<()> {
    check_size(size)?;

    let (mut black, mut white) = match seed {
        Some(seed) => (
            MctsAgent::with_seed(rounds, temperature, seed),
            MctsAgent::with_seed(rounds, temperature, seed.wrapping_add(1)),
        ),
        None => (
            MctsAgent::new(rounds, temperature),
            MctsAgent::new(rounds, temperature),
        ),
    };

    let mut game = Position::new_game(size);
    let mut move_number = 0;
    while !game.is_over() {
        move_number += 1;
        let player = game.next_player();
        let mv = match player {
            Player::Black => black.select_move(&game),
            Player::White => white.select_move(&game),
        };
        info!("move {move_number}: {player} plays {}", str_coord(mv));
        println!("{move_number:3}. {player} {}", str_coord(mv));
        game = apply_move(&game, mv);
    }

    let winner = game_winner(&game, &AreaScorer::default());
    println!("Game over after {move_number} moves: {winner} wins");
    Ok(())
}
