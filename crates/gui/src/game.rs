//! Click-to-move input on top of the game state

use chess_sim::{Color, GameState, Move, Square};
use std::collections::HashSet;
use tracing::{debug, warn};

/// What the status line reports
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    InProgress,
    Check,
    Checkmate { winner: Color },
    Stalemate,
}

/// A game being played on screen
#[derive(Debug, Clone)]
pub struct PlaySession {
    pub game: GameState,
    /// Currently selected square (for move input)
    pub selected_square: Option<Square>,
    /// Valid destinations from the selected square
    pub legal_targets: HashSet<Square>,
}

impl Default for PlaySession {
    fn default() -> Self {
        Self::new()
    }
}

impl PlaySession {
    pub fn new() -> Self {
        Self {
            game: GameState::new(),
            selected_square: None,
            legal_targets: HashSet::new(),
        }
    }

    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Handle a click on `sq`.
    ///
    /// Clicking a piece of the side to move selects it. With a piece
    /// selected, clicking one of its destinations plays the move. Anything
    /// else clears the selection.
    pub fn select_square(&mut self, sq: Square) {
        if self.game.is_over() {
            self.clear_selection();
            return;
        }

        if let Some(piece) = self.game.board().get(sq) {
            if piece.color == self.game.side_to_move() {
                self.selected_square = Some(sq);
                self.update_legal_targets();
                return;
            }
        }

        if let Some(from) = self.selected_square {
            if self.legal_targets.contains(&sq) {
                match self.game.play(from, sq) {
                    Ok(mv) => debug!(%mv, "played"),
                    Err(e) => warn!("rejected click move: {e}"),
                }
            }
        }

        self.clear_selection();
    }

    fn clear_selection(&mut self) {
        self.selected_square = None;
        self.legal_targets.clear();
    }

    fn update_legal_targets(&mut self) {
        self.legal_targets.clear();

        if let Some(from) = self.selected_square {
            self.legal_targets.extend(
                self.game
                    .legal_moves()
                    .into_iter()
                    .filter(|mv| mv.start == from)
                    .map(|mv| mv.end),
            );
        }
    }

    /// Take back the last move and refresh the terminal flags.
    pub fn undo(&mut self) -> Option<Move> {
        let mv = self.game.undo_move();
        if mv.is_some() {
            self.game.valid_moves();
        }
        self.clear_selection();
        mv
    }

    pub fn last_move(&self) -> Option<(Square, Square)> {
        self.game.last_move().map(|mv| (mv.start, mv.end))
    }

    pub fn can_undo(&self) -> bool {
        !self.game.move_log().is_empty()
    }

    pub fn outcome(&self) -> Outcome {
        if self.game.check_mate() {
            Outcome::Checkmate {
                winner: self.game.side_to_move().other(),
            }
        } else if self.game.stale_mate() {
            Outcome::Stalemate
        } else if self.game.in_check() {
            Outcome::Check
        } else {
            Outcome::InProgress
        }
    }

    /// Status line text
    pub fn status(&self) -> String {
        let side = self.game.side_to_move();
        match self.outcome() {
            Outcome::InProgress => format!("{side} to move"),
            Outcome::Check => format!("{side} to move: check"),
            Outcome::Checkmate { winner } => format!("Checkmate! {winner} wins"),
            Outcome::Stalemate => "Stalemate".to_string(),
        }
    }

    /// Numbered move list, one line per full move
    pub fn move_lines(&self) -> Vec<String> {
        self.game
            .move_log()
            .chunks(2)
            .enumerate()
            .map(|(i, pair)| {
                let white = pair[0].notation();
                let black = pair.get(1).map(|m| m.notation()).unwrap_or_default();
                format!("{}. {} {}", i + 1, white, black).trim_end().to_string()
            })
            .collect()
    }
}
