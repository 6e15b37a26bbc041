use std::fmt;

use crate::moves::Move;
use crate::types::*;

/// The 8×8 grid. `None` is an empty square.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Board([[Option<Piece>; 8]; 8]);

impl Default for Board {
    fn default() -> Self {
        Self::startpos()
    }
}

impl Board {
    pub fn empty() -> Self {
        Board([[None; 8]; 8])
    }

    pub fn startpos() -> Self {
        let mut b = Self::empty();

        // Pawns
        for c in 0..8 {
            b.0[1][c] = Some(Piece::new(Color::Black, PieceKind::Pawn));
            b.0[6][c] = Some(Piece::new(Color::White, PieceKind::Pawn));
        }
        // Back ranks
        let back = [
            PieceKind::Rook,
            PieceKind::Knight,
            PieceKind::Bishop,
            PieceKind::Queen,
            PieceKind::King,
            PieceKind::Bishop,
            PieceKind::Knight,
            PieceKind::Rook,
        ];
        for (c, &kind) in back.iter().enumerate() {
            b.0[0][c] = Some(Piece::new(Color::Black, kind));
            b.0[7][c] = Some(Piece::new(Color::White, kind));
        }
        b
    }

    /// Piece on `sq`. Off-board squares read as empty.
    pub fn get(&self, sq: Square) -> Option<Piece> {
        if sq.on_board() {
            self.0[sq.row as usize][sq.col as usize]
        } else {
            None
        }
    }

    /// Place `pc` on `sq`; writes to off-board squares are dropped.
    pub fn set(&mut self, sq: Square, pc: Option<Piece>) {
        debug_assert!(sq.on_board(), "write to off-board square {sq:?}");
        if sq.on_board() {
            self.0[sq.row as usize][sq.col as usize] = pc;
        }
    }

    /// Rows in render order (row 0 first).
    pub fn rows(&self) -> &[[Option<Piece>; 8]; 8] {
        &self.0
    }

    /// Every occupied square with its piece.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(|sq| self.get(sq).map(|pc| (sq, pc)))
    }

    pub fn king_squares(&self, c: Color) -> impl Iterator<Item = Square> + '_ {
        self.pieces()
            .filter(move |(_, pc)| pc.color == c && pc.kind == PieceKind::King)
            .map(|(sq, _)| sq)
    }

    /// A copy of the board with `mv` applied: the start square is cleared
    /// and the moved piece overwrites whatever stood on the end square.
    pub fn with_move(&self, mv: &Move) -> Board {
        let mut next = *self;
        next.set(mv.start, None);
        next.set(mv.end, mv.piece_moved);
        next
    }
}

impl fmt::Display for Board {
    /// One line per row, two-character identities, `--` for empty squares.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.0 {
            let cells: Vec<&str> = row.iter().map(|pc| pc.map_or("--", |p| p.id())).collect();
            writeln!(f, "{}", cells.join(" "))?;
        }
        Ok(())
    }
}
