//! Turn-loop orchestration between the human and the engine.

use anyhow::Result;
use solved_tictactoe::{Board, Engine, Move, Player, game_over, wins};
use tracing::{debug, info};

use crate::cli::Cli;
use crate::input;
use crate::render::{self, Glyphs};

/// Runs one game from setup to the end-of-game banner.
pub fn run(cli: &Cli) -> Result<()> {
    let mut board = Board::new();
    let mut engine = Engine::with_seed(cli.seed);
    let mut history: Vec<Move> = Vec::new();

    let Some(glyphs) = setup_glyphs(cli)? else {
        return bye();
    };
    let Some(human_first) = setup_first(cli)? else {
        return bye();
    };

    info!(seed = cli.seed, human_first, "starting game");

    if !human_first {
        computer_turn(&mut engine, &mut board, &glyphs, &mut history);
    }

    while !board.empty_cells().is_empty() && !game_over(&board) {
        if !human_turn(&mut board, &glyphs, &mut history)? {
            return bye();
        }
        computer_turn(&mut engine, &mut board, &glyphs, &mut history);
    }

    announce(&board, &glyphs);
    info!(moves = history.len(), "game finished");
    Ok(())
}

/// The human picks a square; occupied squares earn a `Bad move` re-prompt.
///
/// Returns `Ok(false)` when stdin is exhausted.
fn human_turn(board: &mut Board, glyphs: &Glyphs, history: &mut Vec<Move>) -> Result<bool> {
    if board.empty_cells().is_empty() || game_over(board) {
        return Ok(true);
    }

    println!("\nHuman turn [{}]", glyphs.human);
    render::render(board, glyphs);

    loop {
        let Some(pos) = input::read_move()? else {
            return Ok(false);
        };
        match board.try_place(pos, Player::Human) {
            Ok(()) => {
                let mv = Move::new(Player::Human, pos);
                debug!(%mv, "move applied");
                history.push(mv);
                return Ok(true);
            }
            Err(err) => {
                debug!(%err, "rejected move");
                println!("Bad move");
            }
        }
    }
}

/// The engine plays, if the game is still live.
fn computer_turn(engine: &mut Engine, board: &mut Board, glyphs: &Glyphs, history: &mut Vec<Move>) {
    if board.empty_cells().is_empty() || game_over(board) {
        return;
    }

    println!("\nComputer turn [{}]", glyphs.computer);
    render::render(board, glyphs);

    if let Some(pos) = engine.ai_turn(board) {
        let mv = Move::new(Player::Computer, pos);
        debug!(%mv, "move applied");
        history.push(mv);
    }
}

/// Prints the final board and the outcome banner.
fn announce(board: &Board, glyphs: &Glyphs) {
    if wins(board, Player::Human) {
        println!("\nHuman turn [{}]", glyphs.human);
        render::render(board, glyphs);
        println!("YOU WIN!");
    } else if wins(board, Player::Computer) {
        println!("\nComputer turn [{}]", glyphs.computer);
        render::render(board, glyphs);
        println!("YOU LOSE!");
    } else {
        render::render(board, glyphs);
        println!("DRAW!");
    }
}

fn bye() -> Result<()> {
    println!("Bye");
    Ok(())
}

/// Resolves the human's glyph from the CLI or an interactive prompt.
fn setup_glyphs(cli: &Cli) -> Result<Option<Glyphs>> {
    let choice = match cli.glyph {
        Some(c) if c.eq_ignore_ascii_case(&'x') => Some('X'),
        Some(c) if c.eq_ignore_ascii_case(&'o') => Some('O'),
        Some(other) => anyhow::bail!("glyph must be X or O, got {other:?}"),
        None => input::choose_glyph()?,
    };
    Ok(choice.map(Glyphs::from_human_choice))
}

/// Resolves who moves first from the CLI or an interactive prompt.
fn setup_first(cli: &Cli) -> Result<Option<bool>> {
    match cli.first {
        Some(first) => Ok(Some(first)),
        None => Ok(input::choose_first()?),
    }
}
