//! Board module tests.
//!
//! Tests are organized into separate files by category:
//! - `movegen.rs` - Per-piece move generation and enumeration order
//! - `slide_rules.rs` - Ray scanning under each `SlideRule`
//! - `make_unmake.rs` - Apply/undo correctness
//! - `edge_cases.rs` - Behaviour the pseudo-legal rules deliberately allow
//! - `perft.rs` - Node counts from the initial position
//! - `proptest.rs` - Property-based tests

use crate::board::{Color, GameBuilder, GameState, PieceKind, Square};

mod make_unmake;

pub(super) fn sq(row: usize, col: usize) -> Square {
    Square::new(row, col).expect("test square out of range")
}

/// Destinations of every generated move starting on `from`, sorted.
pub(super) fn destinations(state: &GameState, from: Square) -> Vec<Square> {
    let mut targets: Vec<Square> = state
        .generate_moves()
        .from_square(from)
        .map(|m| m.end())
        .collect();
    targets.sort();
    targets
}

/// A lone piece of `color` on `square`, with `color` to move.
pub(super) fn lone(square: Square, color: Color, kind: PieceKind) -> GameBuilder {
    GameBuilder::new().piece(square, color, kind).side_to_move(color)
}
