//! Game logic for a two-player chess board simulator.
//!
//! The board is a plain 8×8 array. Move generation is brute force: every
//! pseudo-legal candidate is simulated on a board copy and dropped if it
//! leaves the mover's king attacked. Castling, en passant and promotion are
//! not part of the rules.

pub mod board;
pub mod error;
pub mod game;
pub mod moves;
pub mod perft;
pub mod rules;
pub mod types;

pub use board::*;
pub use error::*;
pub use game::*;
pub use moves::*;
pub use perft::{perft, perft_divide};
pub use rules::{all_pseudo_moves, piece_moves, square_attacked_by};
pub use types::*;
