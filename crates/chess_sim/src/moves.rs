use std::fmt;
use std::hash::{Hash, Hasher};

use crate::board::Board;
use crate::types::*;

/// A single ply, with snapshots of the moving and captured pieces taken
/// when the move was built.
///
/// Two moves are equal when their start and end squares are; the
/// snapshots do not take part in comparison.
#[derive(Clone, Copy, Debug)]
pub struct Move {
    pub start: Square,
    pub end: Square,
    pub piece_moved: Option<Piece>,
    pub piece_captured: Option<Piece>,
    id: i32,
}

impl Move {
    /// Snapshot `board` at `start` and `end`. An off-board square reads as
    /// empty, so such a move carries no moved piece.
    pub fn new(start: Square, end: Square, board: &Board) -> Self {
        Self {
            start,
            end,
            piece_moved: board.get(start),
            piece_captured: board.get(end),
            id: start.row as i32 * 1000
                + start.col as i32 * 100
                + end.row as i32 * 10
                + end.col as i32,
        }
    }

    /// Composite key of both squares: `startRow startCol endRow endCol` as
    /// decimal digits.
    pub fn id(&self) -> i32 {
        self.id
    }

    pub fn is_capture(&self) -> bool {
        self.piece_captured.is_some()
    }

    /// Coordinate notation, e.g. `e2e4`.
    pub fn notation(&self) -> String {
        format!("{}{}", self.start, self.end)
    }
}

impl PartialEq for Move {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}
impl Eq for Move {}

impl Hash for Move {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.start, self.end)
    }
}

#[cfg(test)]
#[path = "moves_tests.rs"]
mod moves_tests;
