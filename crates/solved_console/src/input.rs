//! Line-oriented prompts for the human player.
//!
//! Every prompt loops until it gets a usable answer. Malformed input earns
//! a `Bad choice` and a re-prompt; an exhausted stdin returns `None` so the
//! caller can say goodbye. I/O failures never reach the game core.

use solved_tictactoe::Position;
use std::io::{self, Write};

/// Reads one trimmed line after printing `prompt`.
///
/// Returns `Ok(None)` when stdin is exhausted (the player left).
fn read_line(prompt: &str) -> io::Result<Option<String>> {
    print!("{prompt}");
    io::stdout().flush()?;

    let mut line = String::new();
    if io::stdin().read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

/// Prompts for the human's glyph until `X` or `O` is entered.
pub fn choose_glyph() -> io::Result<Option<char>> {
    loop {
        let Some(line) = read_line("\nChoose X or O\nChosen: ")? else {
            return Ok(None);
        };
        match line.to_uppercase().as_str() {
            "X" => return Ok(Some('X')),
            "O" => return Ok(Some('O')),
            _ => println!("Bad choice"),
        }
    }
}

/// Prompts whether the human starts first (`y`/`n`).
pub fn choose_first() -> io::Result<Option<bool>> {
    loop {
        let Some(line) = read_line("First to start?[y/n]: ")? else {
            return Ok(None);
        };
        match line.to_uppercase().as_str() {
            "Y" => return Ok(Some(true)),
            "N" => return Ok(Some(false)),
            _ => println!("Bad choice"),
        }
    }
}

/// Prompts for a move on the numeric keypad (1-9).
///
/// Only parse errors are handled here; the caller rejects occupied squares
/// and re-prompts.
pub fn read_move() -> io::Result<Option<Position>> {
    loop {
        let Some(line) = read_line("Use numpad (1..9): ")? else {
            return Ok(None);
        };
        match line.parse::<u8>().ok().and_then(Position::from_keypad) {
            Some(pos) => return Ok(Some(pos)),
            None => println!("Bad choice"),
        }
    }
}
