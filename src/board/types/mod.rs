//! Core value types.
//!
//! - `PieceKind`, `Color` and `Occupant` - what can stand on a square
//! - `Square` - (row, column) board coordinate
//! - `Move` and `MoveList` - move snapshots and enumeration results

mod moves;
mod piece;
mod square;

pub use moves::{Move, MoveList};
pub use piece::{Color, Occupant, PieceKind};
pub use square::Square;
