//! Per-piece move rules.
//!
//! Everything here is pseudo-legal: moves follow the piece's pattern and
//! board occupancy but may leave the mover's own king attacked. Filtering
//! happens in [`GameState::valid_moves`](crate::GameState::valid_moves).

use crate::{board::Board, moves::Move, types::*};

pub const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

pub const KING_OFFSETS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
    (1, 0),
    (1, -1),
    (0, -1),
];

pub const ORTHOGONALS: [(i8, i8); 4] = [(-1, 0), (0, -1), (1, 0), (0, 1)];
pub const DIAGONALS: [(i8, i8); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

/// Pseudo-legal moves for whatever stands on `from`.
///
/// Turn-gated: a piece whose color is not `to_move` yields nothing, as does
/// an empty square.
pub fn piece_moves(board: &Board, from: Square, to_move: Color) -> Vec<Move> {
    let mut out = Vec::new();
    piece_moves_into(board, from, to_move, &mut out);
    out
}

/// Append the pseudo-legal moves of the piece on `from` to `out`.
pub fn piece_moves_into(board: &Board, from: Square, to_move: Color, out: &mut Vec<Move>) {
    let pc = match board.get(from) {
        Some(p) => p,
        None => return,
    };
    if pc.color != to_move {
        return;
    }
    match pc.kind {
        PieceKind::Pawn => gen_pawn(board, from, pc.color, out),
        PieceKind::Knight => gen_steps(board, from, pc.color, out, &KNIGHT_OFFSETS),
        PieceKind::Bishop => gen_slider(board, from, pc.color, out, &DIAGONALS),
        PieceKind::Rook => gen_slider(board, from, pc.color, out, &ORTHOGONALS),
        PieceKind::Queen => {
            gen_slider(board, from, pc.color, out, &DIAGONALS);
            gen_slider(board, from, pc.color, out, &ORTHOGONALS);
        }
        PieceKind::King => gen_steps(board, from, pc.color, out, &KING_OFFSETS),
    }
}

/// Pseudo-legal moves of every piece belonging to `to_move`.
pub fn all_pseudo_moves(board: &Board, to_move: Color) -> Vec<Move> {
    let mut out = Vec::with_capacity(64);
    for sq in Square::all() {
        piece_moves_into(board, sq, to_move, &mut out);
    }
    out
}

/// True if any pseudo-legal move of `attacker` ends on `target`.
///
/// The attacker's moves are generated as if it were their turn; the board
/// is never touched.
pub fn square_attacked_by(board: &Board, target: Square, attacker: Color) -> bool {
    let mut buf = Vec::with_capacity(32);
    for sq in Square::all() {
        buf.clear();
        piece_moves_into(board, sq, attacker, &mut buf);
        if buf.iter().any(|mv| mv.end == target) {
            return true;
        }
    }
    false
}

fn gen_pawn(board: &Board, from: Square, c: Color, out: &mut Vec<Move>) {
    let dir = c.forward();

    // forward 1, then forward 2 from the start row
    if let Some(to) = from.offset(dir, 0) {
        if board.get(to).is_none() {
            out.push(Move::new(from, to, board));

            if from.row == c.pawn_start_row() {
                if let Some(to2) = from.offset(2 * dir, 0) {
                    if board.get(to2).is_none() {
                        out.push(Move::new(from, to2, board));
                    }
                }
            }
        }
    }

    // captures
    for dc in [-1, 1] {
        if let Some(to) = from.offset(dir, dc) {
            match board.get(to) {
                Some(target) if target.color != c => out.push(Move::new(from, to, board)),
                _ => {}
            }
        }
    }
}

fn gen_steps(board: &Board, from: Square, c: Color, out: &mut Vec<Move>, deltas: &[(i8, i8)]) {
    for &(dr, dc) in deltas {
        if let Some(to) = from.offset(dr, dc) {
            match board.get(to) {
                None => out.push(Move::new(from, to, board)),
                Some(pc) if pc.color != c => out.push(Move::new(from, to, board)),
                _ => {}
            }
        }
    }
}

fn gen_slider(board: &Board, from: Square, c: Color, out: &mut Vec<Move>, dirs: &[(i8, i8)]) {
    for &(dr, dc) in dirs {
        let mut cur = from;
        while let Some(to) = cur.offset(dr, dc) {
            match board.get(to) {
                None => out.push(Move::new(from, to, board)),
                Some(pc) if pc.color != c => {
                    out.push(Move::new(from, to, board));
                    break;
                }
                _ => break,
            }
            cur = to;
        }
    }
}

#[cfg(test)]
#[path = "rules_tests.rs"]
mod rules_tests;
