use std::time::Instant;

use rayon::prelude::*;

use chess_sim::{Board, Color, GameState, Piece, PieceKind, Square, perft, perft_divide};

const FULL_PERFT_ENV: &str = "FULL_PERFT";

/// Known node counts from the initial position. Castling, en passant and
/// promotion first occur at depth 5, so these hold for the reduced rules.
const STARTPOS_COUNTS: &[(u8, u64)] = &[(1, 20), (2, 400), (3, 8_902), (4, 197_281)];

/// Parallel perft: each root move is searched on its own clone.
fn par_perft(state: &GameState, depth: u8) -> u64 {
    if depth == 0 {
        return 1;
    }
    state
        .legal_moves()
        .par_iter()
        .map(|&mv| {
            let mut child = state.clone();
            child.make_move(mv);
            perft(&mut child, depth - 1)
        })
        .sum()
}

#[test]
fn perft_from_startpos() {
    let full = std::env::var(FULL_PERFT_ENV).is_ok();
    let state = GameState::new();

    for &(depth, expected) in STARTPOS_COUNTS {
        if !full && depth > 3 {
            eprintln!(
                "Skipping depth {} (expected {} nodes); set {}=1 to run all.",
                depth, expected, FULL_PERFT_ENV
            );
            continue;
        }
        let start = Instant::now();
        let got = par_perft(&state, depth);
        assert!(
            got == expected,
            "Perft mismatch at depth {}: expected {}, got {}",
            depth,
            expected,
            got
        );
        println!("depth {} -> {} nodes in {:.3?}", depth, got, start.elapsed());
    }
}

#[test]
fn perft_serial_matches_parallel() {
    let mut state = GameState::new();
    assert_eq!(perft(&mut state, 2), par_perft(&state, 2));
    // The walk leaves the state exactly as it found it
    assert_eq!(*state.board(), Board::startpos());
    assert!(state.move_log().is_empty());
}

#[test]
fn perft_divide_startpos() {
    let mut state = GameState::new();
    let divide = perft_divide(&mut state, 2);
    assert_eq!(divide.len(), 20);
    assert!(divide.iter().all(|(_, n)| *n == 20));
    assert!(divide.iter().any(|(mv, _)| mv == "g1f3"));
}

#[test]
fn perft_rook_endgame() {
    // 8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - -
    let mut board = Board::empty();
    let pieces = [
        ("c7", Color::Black, PieceKind::Pawn),
        ("d6", Color::Black, PieceKind::Pawn),
        ("a5", Color::White, PieceKind::King),
        ("b5", Color::White, PieceKind::Pawn),
        ("h5", Color::Black, PieceKind::Rook),
        ("b4", Color::White, PieceKind::Rook),
        ("f4", Color::Black, PieceKind::Pawn),
        ("h4", Color::Black, PieceKind::King),
        ("e2", Color::White, PieceKind::Pawn),
        ("g2", Color::White, PieceKind::Pawn),
    ];
    for (name, color, kind) in pieces {
        let sq: Square = name.parse().unwrap();
        board.set(sq, Some(Piece::new(color, kind)));
    }
    let mut state = GameState::from_board(board, Color::White).unwrap();

    // Depth 3 would need en passant
    assert_eq!(perft(&mut state, 1), 14);
    assert_eq!(perft(&mut state, 2), 191);
}
