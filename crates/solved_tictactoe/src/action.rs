//! First-class move types for tic-tac-toe.
//!
//! Moves are domain events, not side effects. They can be validated
//! independently of execution and logged for replay.

use crate::position::Position;
use crate::types::{Board, Player, Square};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A move in tic-tac-toe: a player placing their mark at a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The player making the move.
    pub player: Player,
    /// The position where the player places their mark.
    pub position: Position,
}

impl Move {
    /// Creates a new move.
    pub fn new(player: Player, position: Position) -> Self {
        Self { player, position }
    }

    /// Returns the player making this move.
    pub fn player(&self) -> Player {
        self.player
    }

    /// Returns the position of this move.
    pub fn position(&self) -> Position {
        self.position
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?} -> {}", self.player, self.position.label())
    }
}

/// Error that can occur when validating or applying a move.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The square at the position is already occupied.
    #[display("Square {:?} is already occupied", _0)]
    SquareOccupied(Position),
}

impl std::error::Error for MoveError {}

impl Board {
    /// A move is legal iff the target square is empty.
    pub fn is_valid_move(&self, pos: Position) -> bool {
        self.is_empty(pos)
    }

    /// Places `player` at `pos` if the square is empty.
    ///
    /// This is the sole mutation entry point for gameplay; rejection leaves
    /// the board unchanged and the caller re-prompts or picks another move.
    ///
    /// # Errors
    ///
    /// Returns `MoveError::SquareOccupied` if the square is taken.
    #[instrument(skip(self))]
    pub fn try_place(&mut self, pos: Position, player: Player) -> Result<(), MoveError> {
        if !self.is_valid_move(pos) {
            return Err(MoveError::SquareOccupied(pos));
        }
        self.set(pos, Square::Occupied(player));
        Ok(())
    }
}
