//! Exhaustive minimax search for tic-tac-toe.
//!
//! The engine explores the full remaining game tree: branching factor at
//! most 9, depth at most 9, no pruning. Terminal detection keeps the
//! effective tree far below 9! nodes, and the whole search completes well
//! inside interactive latency on a 3x3 board.

use crate::position::Position;
use crate::rules::{game_over, wins};
use crate::types::{Board, Player, Square};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, instrument};

/// Seed used when the caller does not supply one. A fixed default keeps
/// opening moves reproducible across runs.
pub const DEFAULT_SEED: u64 = 2294;

/// Scores a position from the computer's perspective.
///
/// Returns +1 if the computer has won, -1 if the human has won, and 0
/// otherwise. The 0 arm covers draws and depth-exhausted interior nodes;
/// with depth equal to the remaining empty-cell count it only ever fires
/// on true draws.
pub fn evaluate(board: &Board) -> i32 {
    if wins(board, Player::Computer) {
        1
    } else if wins(board, Player::Human) {
        -1
    } else {
        0
    }
}

/// Best move found by a search, with its game-theoretic score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchResult {
    /// The best move, or `None` when the node was evaluated without
    /// trying a move (terminal or depth-exhausted leaf).
    pub position: Option<Position>,
    /// Score from the computer's perspective under optimal play.
    pub score: i32,
}

/// Full-depth minimax over the remaining game tree.
///
/// Candidates are explored in place: place `player` on an empty square,
/// evaluate the subtree with the opposing player at `depth - 1`, then
/// reset the square to empty. The board is restored on every exit path,
/// so it is bit-for-bit identical before and after the call.
///
/// Ties keep the earliest candidate in row-major order: `best` is only
/// replaced on strict improvement. This tie-break is part of the
/// function's contract, not an implementation accident.
pub fn minimax(board: &mut Board, depth: u8, player: Player) -> SearchResult {
    let mut best = SearchResult {
        position: None,
        score: match player {
            Player::Computer => i32::MIN,
            Player::Human => i32::MAX,
        },
    };

    if depth == 0 || game_over(board) {
        return SearchResult {
            position: None,
            score: evaluate(board),
        };
    }

    for pos in board.empty_cells() {
        board.set(pos, Square::Occupied(player));
        let child = minimax(board, depth - 1, player.opponent());
        board.set(pos, Square::Empty);

        let improves = match player {
            Player::Computer => child.score > best.score,
            Player::Human => child.score < best.score,
        };
        if improves {
            best = SearchResult {
                position: Some(pos),
                score: child.score,
            };
        }
    }

    best
}

/// Move selection for the computer player.
///
/// Owns the random source used by the opening shortcut, so a run is
/// reproducible for a given seed. Construct one engine per game and thread
/// it through the turn loop; never share a board between two concurrent
/// searches.
#[derive(Debug)]
pub struct Engine {
    rng: StdRng,
}

impl Engine {
    /// Creates an engine seeded with [`DEFAULT_SEED`].
    pub fn new() -> Self {
        Self::with_seed(DEFAULT_SEED)
    }

    /// Creates an engine whose opening randomization derives from `seed`.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Plays the computer's move on `board`, if the game is still live.
    ///
    /// No-op when the board is exhausted or a player has already won. On an
    /// empty board the full 9-ply search is skipped in favor of a uniformly
    /// random square: all openings are symmetric-equivalent under optimal
    /// play, and the empty-board search is the most expensive call in the
    /// system. Every later turn runs `minimax` at the true remaining depth.
    ///
    /// Mutates the board at most once and returns the position played.
    #[instrument(skip_all)]
    pub fn ai_turn(&mut self, board: &mut Board) -> Option<Position> {
        let depth = board.empty_cells().len();
        if depth == 0 || game_over(board) {
            return None;
        }

        let pos = if depth == 9 {
            // Random pick on an empty board cannot collide.
            Position::ALL[self.rng.random_range(0..Position::ALL.len())]
        } else {
            let result = minimax(board, depth as u8, Player::Computer);
            debug!(?result, depth, "search complete");
            result.position?
        };

        // A search move targets an empty square and the opening pick is on
        // an empty board, so placement cannot fail.
        board.try_place(pos, Player::Computer).ok()?;
        Some(pos)
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_evaluate_wins_consistency() {
        let mut board = Board::new();
        assert_eq!(evaluate(&board), 0);

        for pos in [Position::TopLeft, Position::TopCenter, Position::TopRight] {
            board.set(pos, Square::Occupied(Player::Computer));
        }
        assert!(wins(&board, Player::Computer));
        assert_eq!(evaluate(&board), 1);

        let mut board = Board::new();
        for pos in [Position::TopLeft, Position::Center, Position::BottomRight] {
            board.set(pos, Square::Occupied(Player::Human));
        }
        assert!(wins(&board, Player::Human));
        assert_eq!(evaluate(&board), -1);
    }

    #[test]
    fn test_terminal_node_has_no_position() {
        let mut board = Board::new();
        for pos in [Position::TopLeft, Position::TopCenter, Position::TopRight] {
            board.set(pos, Square::Occupied(Player::Computer));
        }
        let depth = board.empty_cells().len() as u8;
        let result = minimax(&mut board, depth, Player::Human);
        assert_eq!(result.position, None);
        assert_eq!(result.score, 1);
    }

    #[test]
    fn test_depth_zero_evaluates_in_place() {
        let mut board = Board::new();
        board.set(Position::Center, Square::Occupied(Player::Human));
        let result = minimax(&mut board, 0, Player::Computer);
        assert_eq!(result.position, None);
        assert_eq!(result.score, 0);
    }

    #[test]
    fn test_seeded_opening_is_deterministic() {
        let mut a = Engine::with_seed(42);
        let mut b = Engine::with_seed(42);
        let mut board_a = Board::new();
        let mut board_b = Board::new();
        assert_eq!(a.ai_turn(&mut board_a), b.ai_turn(&mut board_b));
        assert_eq!(board_a, board_b);
        assert_eq!(board_a.empty_cells().len(), 8);
    }

    #[test]
    fn test_ai_turn_noop_after_win() {
        let mut board = Board::new();
        for pos in [Position::TopLeft, Position::TopCenter, Position::TopRight] {
            board.set(pos, Square::Occupied(Player::Human));
        }
        let before = board.clone();
        let mut engine = Engine::new();
        assert_eq!(engine.ai_turn(&mut board), None);
        assert_eq!(board, before);
    }
}
