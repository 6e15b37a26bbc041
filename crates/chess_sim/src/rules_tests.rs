use super::*;

fn sq(name: &str) -> Square {
    name.parse().unwrap()
}

fn board_with(pieces: &[(&str, Color, PieceKind)]) -> Board {
    let mut b = Board::empty();
    for &(name, color, kind) in pieces {
        b.set(sq(name), Some(Piece::new(color, kind)));
    }
    b
}

fn ends(moves: &[Move]) -> Vec<String> {
    let mut v: Vec<String> = moves.iter().map(|m| m.end.to_string()).collect();
    v.sort();
    v
}

#[test]
fn test_knight_offsets() {
    let b = board_with(&[("d4", Color::White, PieceKind::Knight)]);
    let moves = piece_moves(&b, sq("d4"), Color::White);
    assert_eq!(moves.len(), 8);
    for mv in &moves {
        let d = (mv.end.row - mv.start.row, mv.end.col - mv.start.col);
        assert!(KNIGHT_OFFSETS.contains(&d), "unexpected knight delta {d:?}");
    }

    // Corner knight only has two jumps
    let b = board_with(&[("a1", Color::White, PieceKind::Knight)]);
    assert_eq!(ends(&piece_moves(&b, sq("a1"), Color::White)), ["b3", "c2"]);
}

#[test]
fn test_knight_skips_allies_takes_enemies() {
    let b = board_with(&[
        ("a1", Color::White, PieceKind::Knight),
        ("b3", Color::White, PieceKind::Pawn),
        ("c2", Color::Black, PieceKind::Pawn),
    ]);
    let moves = piece_moves(&b, sq("a1"), Color::White);
    assert_eq!(ends(&moves), ["c2"]);
    assert!(moves[0].is_capture());
}

#[test]
fn test_turn_gate() {
    let b = Board::startpos();
    assert!(piece_moves(&b, sq("g1"), Color::Black).is_empty());
    assert!(piece_moves(&b, sq("g8"), Color::White).is_empty());
    assert_eq!(piece_moves(&b, sq("g1"), Color::White).len(), 2);
    // Empty square
    assert!(piece_moves(&b, sq("e4"), Color::White).is_empty());
}

#[test]
fn test_king_steps() {
    let b = board_with(&[("e4", Color::Black, PieceKind::King)]);
    let moves = piece_moves(&b, sq("e4"), Color::Black);
    assert_eq!(moves.len(), 8);
    for mv in &moves {
        let d = (mv.end.row - mv.start.row, mv.end.col - mv.start.col);
        assert!(KING_OFFSETS.contains(&d));
    }

    let b = board_with(&[("h8", Color::Black, PieceKind::King)]);
    assert_eq!(piece_moves(&b, sq("h8"), Color::Black).len(), 3);
}

#[test]
fn test_rook_stops_at_blockers() {
    let b = board_with(&[
        ("a1", Color::White, PieceKind::Rook),
        ("a3", Color::White, PieceKind::Pawn),
        ("d1", Color::Black, PieceKind::Knight),
    ]);
    let moves = piece_moves(&b, sq("a1"), Color::White);
    // a2 up to the ally, b1 c1 and the capture on d1
    assert_eq!(ends(&moves), ["a2", "b1", "c1", "d1"]);
}

#[test]
fn test_slider_counts_on_empty_board() {
    let rook = board_with(&[("d4", Color::White, PieceKind::Rook)]);
    assert_eq!(piece_moves(&rook, sq("d4"), Color::White).len(), 14);

    let bishop = board_with(&[("d4", Color::White, PieceKind::Bishop)]);
    assert_eq!(piece_moves(&bishop, sq("d4"), Color::White).len(), 13);

    let queen = board_with(&[("d4", Color::White, PieceKind::Queen)]);
    assert_eq!(piece_moves(&queen, sq("d4"), Color::White).len(), 27);
}

#[test]
fn test_queen_is_rook_plus_bishop() {
    let pieces = [
        ("c3", Color::Black, PieceKind::Pawn),
        ("f6", Color::White, PieceKind::Pawn),
        ("d7", Color::Black, PieceKind::Pawn),
        ("g4", Color::White, PieceKind::Knight),
    ];
    let mut with = pieces.to_vec();
    with.push(("d4", Color::White, PieceKind::Queen));
    let queen = piece_moves(&board_with(&with), sq("d4"), Color::White);

    with.pop();
    with.push(("d4", Color::White, PieceKind::Rook));
    let mut union = piece_moves(&board_with(&with), sq("d4"), Color::White);
    with.pop();
    with.push(("d4", Color::White, PieceKind::Bishop));
    union.extend(piece_moves(&board_with(&with), sq("d4"), Color::White));

    assert_eq!(ends(&queen), ends(&union));
}

#[test]
fn test_sliders_never_jump() {
    let b = board_with(&[
        ("d4", Color::White, PieceKind::Queen),
        ("d6", Color::Black, PieceKind::Pawn),
        ("b4", Color::White, PieceKind::Pawn),
        ("f6", Color::Black, PieceKind::Bishop),
        ("b2", Color::White, PieceKind::Knight),
        ("g4", Color::Black, PieceKind::Rook),
    ]);
    let moves = piece_moves(&b, sq("d4"), Color::White);
    assert!(!moves.is_empty());
    for mv in &moves {
        let dr = (mv.end.row - mv.start.row).signum();
        let dc = (mv.end.col - mv.start.col).signum();
        let mut cur = mv.start.offset(dr, dc).unwrap();
        while cur != mv.end {
            assert!(b.get(cur).is_none(), "{mv} jumps over {cur}");
            cur = cur.offset(dr, dc).unwrap();
        }
        if let Some(pc) = b.get(mv.end) {
            assert_eq!(pc.color, Color::Black);
        }
    }
    assert!(ends(&moves).contains(&"g4".to_string()));
    assert!(!ends(&moves).contains(&"h4".to_string()));
    assert!(!ends(&moves).contains(&"b4".to_string()));
}

#[test]
fn test_pawn_pushes() {
    let b = Board::startpos();
    assert_eq!(ends(&piece_moves(&b, sq("e2"), Color::White)), ["e3", "e4"]);
    assert_eq!(ends(&piece_moves(&b, sq("d7"), Color::Black)), ["d5", "d6"]);

    // Double push needs the square in between to be empty too
    let blocked = board_with(&[
        ("e2", Color::White, PieceKind::Pawn),
        ("e3", Color::Black, PieceKind::Knight),
    ]);
    assert!(piece_moves(&blocked, sq("e2"), Color::White).is_empty());

    let far_blocked = board_with(&[
        ("e2", Color::White, PieceKind::Pawn),
        ("e4", Color::Black, PieceKind::Knight),
    ]);
    assert_eq!(ends(&piece_moves(&far_blocked, sq("e2"), Color::White)), ["e3"]);

    // Off the start row there is no double push
    let moved = board_with(&[("e3", Color::White, PieceKind::Pawn)]);
    assert_eq!(ends(&piece_moves(&moved, sq("e3"), Color::White)), ["e4"]);
}

#[test]
fn test_pawn_captures_only_enemies() {
    let b = board_with(&[
        ("e2", Color::White, PieceKind::Pawn),
        ("d3", Color::Black, PieceKind::Pawn),
        ("f3", Color::White, PieceKind::Knight),
    ]);
    assert_eq!(ends(&piece_moves(&b, sq("e2"), Color::White)), ["d3", "e3", "e4"]);

    // Edge files capture on one side only
    let b = board_with(&[
        ("a7", Color::Black, PieceKind::Pawn),
        ("b6", Color::White, PieceKind::Pawn),
        ("h6", Color::White, PieceKind::Pawn),
    ]);
    assert_eq!(ends(&piece_moves(&b, sq("a7"), Color::Black)), ["a5", "a6", "b6"]);
}

#[test]
fn test_pawn_on_last_row_is_stuck() {
    let b = board_with(&[
        ("c8", Color::White, PieceKind::Pawn),
        ("c1", Color::Black, PieceKind::Pawn),
    ]);
    assert!(piece_moves(&b, sq("c8"), Color::White).is_empty());
    assert!(piece_moves(&b, sq("c1"), Color::Black).is_empty());
}

#[test]
fn test_square_attacked_by() {
    let b = Board::startpos();
    // d2/f2 pawns would move there; f1 bishop is blocked
    assert!(square_attacked_by(&b, sq("e3"), Color::White));
    assert!(square_attacked_by(&b, sq("f6"), Color::Black));
    assert!(!square_attacked_by(&b, sq("e4"), Color::Black));
    assert!(!square_attacked_by(&b, sq("e5"), Color::White));

    // Does not depend on whose turn it is and leaves the board alone
    let copy = b;
    assert!(square_attacked_by(&b, sq("c3"), Color::White));
    assert_eq!(b, copy);
}

#[test]
fn test_all_pseudo_moves_start() {
    let b = Board::startpos();
    assert_eq!(all_pseudo_moves(&b, Color::White).len(), 20);
    assert_eq!(all_pseudo_moves(&b, Color::Black).len(), 20);
}
