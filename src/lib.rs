pub mod board;
pub mod session;

pub use board::{
    Board, Color, GameBuilder, GameState, Move, MoveError, MoveList, Occupant, PieceKind,
    PlacementError, RulesConfig, SlideRule, Square, SquareError,
};
