//! Board state tracking and pseudo-legal move generation.
//!
//! An 8x8 occupant grid with the side to move and an undo stack. Moves are
//! generated by movement rules alone: there is no check filtering, castling,
//! en passant or promotion.
//!
//! # Example
//! ```
//! use chess_core::board::GameState;
//!
//! let mut game = GameState::new();
//! let moves = game.generate_moves();
//! assert_eq!(moves.len(), 20);
//!
//! game.apply(moves[0]);
//! game.undo();
//! assert_eq!(game.history_len(), 0);
//! ```

mod builder;
mod config;
mod error;
mod fen;
mod make_unmake;
pub mod movegen;
pub mod prelude;
mod state;
mod types;

#[cfg(test)]
mod tests;

pub use builder::GameBuilder;
pub use config::{RulesConfig, SlideRule};
pub use error::{MoveError, PlacementError, SquareError};
pub use state::{Board, GameState};
pub use types::{Color, Move, MoveList, Occupant, PieceKind, Square};
