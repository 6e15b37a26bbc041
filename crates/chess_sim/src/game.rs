use tracing::{debug, info, warn};

use crate::{
    board::Board,
    error::{GameError, GameResult},
    moves::Move,
    rules,
    types::*,
};

/// The game in progress: board, turn, move log and terminal flags.
#[derive(Clone, Debug)]
pub struct GameState {
    board: Board,
    side_to_move: Color,
    move_log: Vec<Move>,
    white_king_location: Option<Square>,
    black_king_location: Option<Square>,
    check_mate: bool,
    stale_mate: bool,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    /// Standard initial position, white to move.
    pub fn new() -> Self {
        Self {
            board: Board::startpos(),
            side_to_move: Color::White,
            move_log: Vec::new(),
            white_king_location: Some(Square::new(7, 4)),
            black_king_location: Some(Square::new(0, 4)),
            check_mate: false,
            stale_mate: false,
        }
    }

    /// Start from an arbitrary board. A side may have no king (it is then
    /// never in check) but not two.
    pub fn from_board(board: Board, side_to_move: Color) -> GameResult<Self> {
        let mut kings = [None, None];
        for c in Color::ALL {
            let mut found = board.king_squares(c);
            kings[c.idx()] = found.next();
            if found.next().is_some() {
                return Err(GameError::DuplicateKing(c));
            }
        }
        Ok(Self {
            board,
            side_to_move,
            move_log: Vec::new(),
            white_king_location: kings[Color::White.idx()],
            black_king_location: kings[Color::Black.idx()],
            check_mate: false,
            stale_mate: false,
        })
    }

    pub fn board(&self) -> &Board {
        &self.board
    }
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }
    pub fn white_to_move(&self) -> bool {
        self.side_to_move == Color::White
    }
    pub fn move_log(&self) -> &[Move] {
        &self.move_log
    }
    pub fn last_move(&self) -> Option<&Move> {
        self.move_log.last()
    }
    pub fn king_location(&self, c: Color) -> Option<Square> {
        match c {
            Color::White => self.white_king_location,
            Color::Black => self.black_king_location,
        }
    }
    /// Set by the last [`valid_moves`](Self::valid_moves) call.
    pub fn check_mate(&self) -> bool {
        self.check_mate
    }
    /// Set by the last [`valid_moves`](Self::valid_moves) call.
    pub fn stale_mate(&self) -> bool {
        self.stale_mate
    }
    pub fn is_over(&self) -> bool {
        self.check_mate || self.stale_mate
    }

    fn set_king_location(&mut self, c: Color, sq: Square) {
        match c {
            Color::White => self.white_king_location = Some(sq),
            Color::Black => self.black_king_location = Some(sq),
        }
    }

    /// Apply `mv` unconditionally. The moved piece recorded in `mv`
    /// overwrites the end square, the move is logged and the turn passes.
    pub fn make_move(&mut self, mv: Move) {
        if mv.piece_moved.is_none() {
            warn!(%mv, "applying a move with no moved piece");
        }
        self.board.set(mv.start, None);
        self.board.set(mv.end, mv.piece_moved);
        self.move_log.push(mv);
        self.side_to_move = self.side_to_move.other();

        if let Some(pc) = mv.piece_moved {
            if pc.kind == PieceKind::King {
                self.set_king_location(pc.color, mv.end);
            }
        }
        debug!(%mv, to_move = %self.side_to_move, "made move");
    }

    /// Take back the last move. Returns `None` when the log is empty.
    pub fn undo_move(&mut self) -> Option<Move> {
        let mv = self.move_log.pop()?;
        self.board.set(mv.start, mv.piece_moved);
        self.board.set(mv.end, mv.piece_captured);
        self.side_to_move = self.side_to_move.other();

        if let Some(pc) = mv.piece_moved {
            if pc.kind == PieceKind::King {
                self.set_king_location(pc.color, mv.start);
            }
        }
        debug!(%mv, to_move = %self.side_to_move, "undid move");
        Some(mv)
    }

    /// Pseudo-legal moves of the side to move.
    pub fn all_possible_moves(&self) -> Vec<Move> {
        rules::all_pseudo_moves(&self.board, self.side_to_move)
    }

    /// Can the opponent of the side to move reach `(row, col)`?
    pub fn square_under_attack(&self, row: i8, col: i8) -> bool {
        rules::square_attacked_by(&self.board, Square::new(row, col), self.side_to_move.other())
    }

    /// Is the side to move's king attacked?
    pub fn in_check(&self) -> bool {
        match self.king_location(self.side_to_move) {
            Some(k) => self.square_under_attack(k.row, k.col),
            None => false,
        }
    }

    /// Would playing `mv` leave the mover's own king attacked?
    fn leaves_king_exposed(&self, mv: &Move) -> bool {
        let mover = self.side_to_move;
        let king = match mv.piece_moved {
            Some(pc) if pc.kind == PieceKind::King => Some(mv.end),
            _ => self.king_location(mover),
        };
        match king {
            Some(k) => rules::square_attacked_by(&self.board.with_move(mv), k, mover.other()),
            None => false,
        }
    }

    /// Valid moves without touching the checkmate/stalemate flags.
    pub fn legal_moves(&self) -> Vec<Move> {
        let mut moves = self.all_possible_moves();
        moves.retain(|mv| !self.leaves_king_exposed(mv));
        moves
    }

    /// Valid moves for the side to move. Updates the checkmate and
    /// stalemate flags: with no moves left it is checkmate if the king is
    /// attacked and stalemate otherwise; with moves left both are cleared.
    pub fn valid_moves(&mut self) -> Vec<Move> {
        let moves = self.legal_moves();
        if moves.is_empty() {
            if self.in_check() {
                self.check_mate = true;
                self.stale_mate = false;
                info!(loser = %self.side_to_move, "checkmate");
            } else {
                self.stale_mate = true;
                self.check_mate = false;
                info!(to_move = %self.side_to_move, "stalemate");
            }
        } else {
            self.check_mate = false;
            self.stale_mate = false;
        }
        moves
    }

    /// The valid move from `from` to `to`, if there is one.
    pub fn find_valid_move(&self, from: Square, to: Square) -> Option<Move> {
        let probe = Move::new(from, to, &self.board);
        self.legal_moves().into_iter().find(|mv| *mv == probe)
    }

    /// Play `from` → `to` if it is valid, refreshing the terminal flags for
    /// the side now to move.
    pub fn play(&mut self, from: Square, to: Square) -> GameResult<Move> {
        if self.board.get(from).is_none() {
            return Err(GameError::EmptySquare(from));
        }
        let mv = self
            .find_valid_move(from, to)
            .ok_or(GameError::IllegalMove { from, to })?;
        self.make_move(mv);
        self.valid_moves();
        Ok(mv)
    }

    /// Resolve coordinate text such as `e2e4` to a current valid move.
    pub fn parse_move(&self, text: &str) -> GameResult<Move> {
        if text.len() != 4 || !text.is_ascii() {
            return Err(GameError::InvalidMoveText(text.to_string()));
        }
        let from: Square = text[0..2].parse()?;
        let to: Square = text[2..4].parse()?;
        self.find_valid_move(from, to)
            .ok_or(GameError::IllegalMove { from, to })
    }

    /// Parse and play coordinate text such as `e2e4`.
    pub fn play_notation(&mut self, text: &str) -> GameResult<Move> {
        let mv = self.parse_move(text)?;
        self.play(mv.start, mv.end)
    }
}

#[cfg(test)]
#[path = "game_tests.rs"]
mod game_tests;
