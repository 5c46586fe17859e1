//! Command-line interface for the console game.

use clap::Parser;
use solved_tictactoe::DEFAULT_SEED;

/// Console tic-tac-toe - play against a perfect-play minimax engine
#[derive(Parser, Debug)]
#[command(name = "solved_console")]
#[command(about = "Play tic-tac-toe against the minimax engine", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Seed for the engine's opening-move randomization
    #[arg(long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Glyph for the human player (X or O); prompts interactively when omitted
    #[arg(long)]
    pub glyph: Option<char>,

    /// Whether the human moves first; prompts interactively when omitted
    #[arg(long)]
    pub first: Option<bool>,
}
