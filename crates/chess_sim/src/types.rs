use std::fmt;
use std::str::FromStr;

use crate::error::GameError;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Color {
    White,
    Black,
}
impl Color {
    pub const ALL: [Color; 2] = [Color::White, Color::Black];

    pub fn other(self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }
    pub fn idx(self) -> usize {
        match self {
            Color::White => 0,
            Color::Black => 1,
        }
    }
    /// First character of a piece identity (`w` / `b`).
    pub fn letter(self) -> char {
        match self {
            Color::White => 'w',
            Color::Black => 'b',
        }
    }
    /// Row a pawn of this color moves towards, one step at a time.
    pub fn forward(self) -> i8 {
        match self {
            Color::White => -1,
            Color::Black => 1,
        }
    }
    pub fn pawn_start_row(self) -> i8 {
        match self {
            Color::White => 6,
            Color::Black => 1,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::White => write!(f, "White"),
            Color::Black => write!(f, "Black"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    pub const ALL: [PieceKind; 6] = [
        PieceKind::Pawn,
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Rook,
        PieceKind::Queen,
        PieceKind::King,
    ];

    /// Second character of a piece identity. Pawns use a lowercase `p`.
    pub fn letter(self) -> char {
        match self {
            PieceKind::Pawn => 'p',
            PieceKind::Knight => 'N',
            PieceKind::Bishop => 'B',
            PieceKind::Rook => 'R',
            PieceKind::Queen => 'Q',
            PieceKind::King => 'K',
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Piece {
    pub color: Color,
    pub kind: PieceKind,
}

impl Piece {
    pub const fn new(color: Color, kind: PieceKind) -> Self {
        Self { color, kind }
    }

    /// Two-character identity used to key piece images, e.g. `wp` or `bK`.
    pub fn id(self) -> &'static str {
        const IDS: [[&str; 6]; 2] = [
            ["wp", "wN", "wB", "wR", "wQ", "wK"],
            ["bp", "bN", "bB", "bR", "bQ", "bK"],
        ];
        IDS[self.color.idx()][self.kind as usize]
    }

    /// All twelve distinct pieces, white first.
    pub fn all() -> impl Iterator<Item = Piece> {
        Color::ALL
            .into_iter()
            .flat_map(|c| PieceKind::ALL.into_iter().map(move |k| Piece::new(c, k)))
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// A board coordinate. Row 0 is black's back rank (rank 8), row 7 is
/// white's (rank 1); col 0 is the a-file.
///
/// Components are signed so direction offsets can be added freely; use
/// [`Square::offset`] or [`Square::on_board`] before indexing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Square {
    pub row: i8,
    pub col: i8,
}

impl Square {
    pub const fn new(row: i8, col: i8) -> Self {
        Self { row, col }
    }

    pub fn on_board(self) -> bool {
        (0..8).contains(&self.row) && (0..8).contains(&self.col)
    }

    /// The square `dr` rows and `dc` cols away, if it is on the board.
    pub fn offset(self, dr: i8, dc: i8) -> Option<Square> {
        let to = Square::new(self.row + dr, self.col + dc);
        to.on_board().then_some(to)
    }

    pub fn file_char(self) -> char {
        if (0..8).contains(&self.col) {
            (b'a' + self.col as u8) as char
        } else {
            '?'
        }
    }

    pub fn rank_char(self) -> char {
        if (0..8).contains(&self.row) {
            (b'8' - self.row as u8) as char
        } else {
            '?'
        }
    }

    /// Iterate all 64 squares, row by row from row 0.
    pub fn all() -> impl Iterator<Item = Square> {
        (0..8).flat_map(|r| (0..8).map(move |c| Square::new(r, c)))
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.file_char(), self.rank_char())
    }
}

impl FromStr for Square {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let b = s.as_bytes();
        if b.len() != 2 {
            return Err(GameError::InvalidSquare(s.to_string()));
        }
        let f = b[0];
        let r = b[1];
        if !(b'a'..=b'h').contains(&f) || !(b'1'..=b'8').contains(&r) {
            return Err(GameError::InvalidSquare(s.to_string()));
        }
        Ok(Square::new((b'8' - r) as i8, (f - b'a') as i8))
    }
}

#[cfg(test)]
#[path = "types_tests.rs"]
mod types_tests;
