//! Prelude module for convenient imports.
//!
//! ```
//! use chess_core::board::prelude::*;
//! ```

pub use super::{
    Board, Color, GameBuilder, GameState, Move, MoveError, MoveList, Occupant, PieceKind,
    PlacementError, RulesConfig, SlideRule, Square, SquareError,
};
