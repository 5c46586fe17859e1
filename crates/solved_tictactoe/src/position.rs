//! Board positions with row/column and numeric-keypad addressing.

use serde::{Deserialize, Serialize};

/// A position on the tic-tac-toe board (0-8, row-major).
///
/// Variant declaration order is row-major, so iteration via
/// `strum::IntoEnumIterator` visits the grid top-left to bottom-right.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter,
)]
pub enum Position {
    /// Top-left (position 0)
    TopLeft,
    /// Top-center (position 1)
    TopCenter,
    /// Top-right (position 2)
    TopRight,
    /// Middle-left (position 3)
    MiddleLeft,
    /// Center (position 4)
    Center,
    /// Middle-right (position 5)
    MiddleRight,
    /// Bottom-left (position 6)
    BottomLeft,
    /// Bottom-center (position 7)
    BottomCenter,
    /// Bottom-right (position 8)
    BottomRight,
}

impl Position {
    /// Get label for this position (for display).
    pub fn label(&self) -> &'static str {
        match self {
            Position::TopLeft => "Top-left",
            Position::TopCenter => "Top-center",
            Position::TopRight => "Top-right",
            Position::MiddleLeft => "Middle-left",
            Position::Center => "Center",
            Position::MiddleRight => "Middle-right",
            Position::BottomLeft => "Bottom-left",
            Position::BottomCenter => "Bottom-center",
            Position::BottomRight => "Bottom-right",
        }
    }

    /// Converts position to board index (0-8).
    pub fn to_index(self) -> usize {
        match self {
            Position::TopLeft => 0,
            Position::TopCenter => 1,
            Position::TopRight => 2,
            Position::MiddleLeft => 3,
            Position::Center => 4,
            Position::MiddleRight => 5,
            Position::BottomLeft => 6,
            Position::BottomCenter => 7,
            Position::BottomRight => 8,
        }
    }

    /// Row coordinate (0-2).
    pub fn row(self) -> usize {
        self.to_index() / 3
    }

    /// Column coordinate (0-2).
    pub fn col(self) -> usize {
        self.to_index() % 3
    }

    /// Creates position from board index.
    pub fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Position::TopLeft),
            1 => Some(Position::TopCenter),
            2 => Some(Position::TopRight),
            3 => Some(Position::MiddleLeft),
            4 => Some(Position::Center),
            5 => Some(Position::MiddleRight),
            6 => Some(Position::BottomLeft),
            7 => Some(Position::BottomCenter),
            8 => Some(Position::BottomRight),
            _ => None,
        }
    }

    /// Creates position from (row, column) coordinates, each in 0-2.
    pub fn from_row_col(row: usize, col: usize) -> Option<Self> {
        if row < 3 && col < 3 {
            Self::from_index(row * 3 + col)
        } else {
            None
        }
    }

    /// Creates position from a numeric-keypad digit (1-9).
    ///
    /// Digit `d` maps to row `(d - 1) / 3`, column `(d - 1) % 3`, reading
    /// the grid left to right, top to bottom.
    pub fn from_keypad(digit: u8) -> Option<Self> {
        if (1..=9).contains(&digit) {
            Self::from_index(usize::from(digit) - 1)
        } else {
            None
        }
    }

    /// All 9 positions in row-major order.
    pub const ALL: [Position; 9] = [
        Position::TopLeft,
        Position::TopCenter,
        Position::TopRight,
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ];
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_round_trip() {
        for (i, pos) in Position::ALL.iter().enumerate() {
            assert_eq!(pos.to_index(), i);
            assert_eq!(Position::from_index(i), Some(*pos));
        }
        assert_eq!(Position::from_index(9), None);
    }

    #[test]
    fn test_row_col_coordinates() {
        assert_eq!((Position::TopLeft.row(), Position::TopLeft.col()), (0, 0));
        assert_eq!((Position::Center.row(), Position::Center.col()), (1, 1));
        assert_eq!(
            (Position::BottomRight.row(), Position::BottomRight.col()),
            (2, 2)
        );
        assert_eq!(
            (Position::MiddleRight.row(), Position::MiddleRight.col()),
            (1, 2)
        );
    }

    #[test]
    fn test_from_row_col() {
        assert_eq!(Position::from_row_col(0, 2), Some(Position::TopRight));
        assert_eq!(Position::from_row_col(2, 0), Some(Position::BottomLeft));
        assert_eq!(Position::from_row_col(3, 0), None);
        assert_eq!(Position::from_row_col(0, 3), None);
    }

    #[test]
    fn test_keypad_mapping() {
        assert_eq!(Position::from_keypad(1), Some(Position::TopLeft));
        assert_eq!(Position::from_keypad(5), Some(Position::Center));
        assert_eq!(Position::from_keypad(6), Some(Position::MiddleRight));
        assert_eq!(Position::from_keypad(9), Some(Position::BottomRight));
        assert_eq!(Position::from_keypad(0), None);
        assert_eq!(Position::from_keypad(10), None);
    }

    #[test]
    fn test_iteration_matches_all() {
        let iterated: Vec<Position> = <Position as strum::IntoEnumIterator>::iter().collect();
        assert_eq!(iterated, Position::ALL);
    }
}
