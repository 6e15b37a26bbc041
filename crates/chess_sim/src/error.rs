//! Error types for game-state operations.

use thiserror::Error;

use crate::types::{Color, Square};

/// Errors raised by [`GameState`](crate::GameState) and the text parsers.
///
/// Rule violations inside move generation never surface here: an
/// impossible move simply isn't generated.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// The move is not among the current valid moves.
    #[error("Illegal move: {from}{to}")]
    IllegalMove { from: Square, to: Square },

    /// No piece stands on the start square.
    #[error("No piece at square {0}")]
    EmptySquare(Square),

    /// A board handed to `GameState::from_board` has two kings of one color.
    #[error("More than one {0} king on the board")]
    DuplicateKing(Color),

    /// Text that does not name a square (`a1`..`h8`).
    #[error("Invalid square name: {0:?}")]
    InvalidSquare(String),

    /// Text that is not a four-character coordinate move such as `e2e4`.
    #[error("Invalid move text: {0:?}")]
    InvalidMoveText(String),
}

/// Result type alias for game-state operations
pub type GameResult<T> = Result<T, GameError>;
