//! Console board rendering with player-chosen glyphs.

use solved_tictactoe::{Board, Player, Position, Square};

/// Display glyphs for the two players.
#[derive(Debug, Clone, Copy)]
pub struct Glyphs {
    /// Glyph shown for the human's squares.
    pub human: char,
    /// Glyph shown for the computer's squares.
    pub computer: char,
}

impl Glyphs {
    /// Builds the glyph pair from the human's choice; the computer takes
    /// the remaining glyph.
    pub fn from_human_choice(human: char) -> Self {
        let computer = if human == 'X' { 'O' } else { 'X' };
        Self { human, computer }
    }

    /// Glyph shown for `player`.
    pub fn for_player(&self, player: Player) -> char {
        match player {
            Player::Human => self.human,
            Player::Computer => self.computer,
        }
    }
}

/// Prints the board with a separator line above and below each row.
pub fn render(board: &Board, glyphs: &Glyphs) {
    const LINE: &str = "---------------";

    println!("\n{LINE}");
    for row in Position::ALL.chunks(3) {
        for &pos in row {
            let symbol = match board.get(pos) {
                Square::Empty => ' ',
                Square::Occupied(player) => glyphs.for_player(player),
            };
            print!("| {symbol} |");
        }
        println!("\n{LINE}");
    }
}
