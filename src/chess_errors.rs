//! Errors used throughout the rule engine.
//!
//! `ChessErrors` is the single error type returned by game-flow operations
//! and the text-format parsers. Expected outcomes are not errors: an AI with
//! no available move returns `None`, and an unusable promotion choice falls
//! back to a queen.

use thiserror::Error;

use crate::game_state::chess_types::{Color, Square};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChessErrors {
    /// A square index outside `0..64` was passed in.
    #[error("square index {0} is off the board")]
    InvalidSquare(u8),

    /// The source square of a move holds no piece.
    #[error("no piece on source square {0}")]
    EmptySourceSquare(Square),

    /// The piece on the source square belongs to the side not on move.
    #[error("piece on square {square} does not belong to {side}, who is on move")]
    NotYourTurn { square: Square, side: Color },

    /// The move breaks the movement rules of the piece.
    #[error("move {from} -> {to} is not legal")]
    IllegalMove { from: Square, to: Square },

    /// Board layout text could not be read.
    #[error("invalid FEN: {0}")]
    InvalidFen(String),

    /// Coordinate or move text could not be read.
    #[error("invalid algebraic text: {0}")]
    InvalidAlgebraic(String),
}

pub type ChessResult<T> = Result<T, ChessErrors>;
