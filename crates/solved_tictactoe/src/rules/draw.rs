//! Draw detection logic for tic-tac-toe.

use super::win::check_winner;
use crate::types::{Board, Square};
use tracing::instrument;

/// Checks if the board is full (all squares occupied).
#[instrument]
pub fn is_full(board: &Board) -> bool {
    board.squares().iter().all(|s| *s != Square::Empty)
}

/// A draw is a full board with no winner.
#[instrument]
pub fn is_draw(board: &Board) -> bool {
    is_full(board) && check_winner(board).is_none()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::position::Position;
    use crate::types::Player;

    #[test]
    fn test_empty_board_not_full() {
        let board = Board::new();
        assert!(!is_full(&board));
        assert!(!is_draw(&board));
    }

    #[test]
    fn test_partial_board_not_full() {
        let mut board = Board::new();
        board.set(Position::Center, Square::Occupied(Player::Human));
        assert!(!is_full(&board));
    }

    #[test]
    fn test_full_board() {
        let mut board = Board::new();
        for pos in Position::ALL {
            board.set(pos, Square::Occupied(Player::Human));
        }
        assert!(is_full(&board));
    }

    #[test]
    fn test_draw_detection() {
        let mut board = Board::new();
        // Draw scenario: H C H / C H H / C H C
        board.set(Position::TopLeft, Square::Occupied(Player::Human));
        board.set(Position::TopCenter, Square::Occupied(Player::Computer));
        board.set(Position::TopRight, Square::Occupied(Player::Human));
        board.set(Position::MiddleLeft, Square::Occupied(Player::Computer));
        board.set(Position::Center, Square::Occupied(Player::Human));
        board.set(Position::MiddleRight, Square::Occupied(Player::Human));
        board.set(Position::BottomLeft, Square::Occupied(Player::Computer));
        board.set(Position::BottomCenter, Square::Occupied(Player::Human));
        board.set(Position::BottomRight, Square::Occupied(Player::Computer));

        assert!(is_draw(&board));
    }

    #[test]
    fn test_not_draw_if_winner() {
        let mut board = Board::new();
        // Computer wins top row
        board.set(Position::TopLeft, Square::Occupied(Player::Computer));
        board.set(Position::TopCenter, Square::Occupied(Player::Computer));
        board.set(Position::TopRight, Square::Occupied(Player::Computer));
        board.set(Position::MiddleLeft, Square::Occupied(Player::Human));
        board.set(Position::Center, Square::Occupied(Player::Human));

        assert!(!is_draw(&board));
    }
}
