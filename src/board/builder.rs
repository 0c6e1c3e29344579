//! Fluent builder for constructing game positions.
//!
//! Allows creating positions piece by piece rather than parsing FEN strings.
//!
//! # Example
//! ```
//! use chess_core::board::{Color, GameBuilder, PieceKind, Square};
//!
//! let state = GameBuilder::new()
//!     .piece(Square::new(4, 4).unwrap(), Color::White, PieceKind::Knight)
//!     .piece(Square::new(0, 4).unwrap(), Color::Black, PieceKind::King)
//!     .side_to_move(Color::White)
//!     .build();
//! assert_eq!(state.generate_moves().len(), 8);
//! ```

use super::{Board, Color, GameState, Occupant, PieceKind, RulesConfig, SlideRule, Square};

/// A fluent builder for constructing `GameState` positions.
#[derive(Clone, Debug)]
pub struct GameBuilder {
    board: Board,
    side_to_move: Color,
    config: RulesConfig,
}

impl Default for GameBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl GameBuilder {
    /// Create a builder with an empty board and White to move.
    #[must_use]
    pub fn new() -> Self {
        GameBuilder {
            board: Board::empty(),
            side_to_move: Color::White,
            config: RulesConfig::default(),
        }
    }

    /// Create a builder starting from the standard initial position.
    #[must_use]
    pub fn starting_position() -> Self {
        GameBuilder {
            board: Board::standard(),
            ..Self::new()
        }
    }

    /// Start from an existing board.
    #[must_use]
    pub fn from_board(board: Board) -> Self {
        GameBuilder {
            board,
            ..Self::new()
        }
    }

    /// Place a piece, replacing whatever stood on the square.
    #[must_use]
    pub fn piece(mut self, square: Square, color: Color, kind: PieceKind) -> Self {
        self.board.set(square, Occupant::Piece(color, kind));
        self
    }

    /// Empty a square.
    #[must_use]
    pub fn clear(mut self, square: Square) -> Self {
        self.board.set(square, Occupant::Empty);
        self
    }

    #[must_use]
    pub const fn side_to_move(mut self, color: Color) -> Self {
        self.side_to_move = color;
        self
    }

    #[must_use]
    pub const fn slide_rule(mut self, rule: SlideRule) -> Self {
        self.config.slide_rule = rule;
        self
    }

    #[must_use]
    pub const fn config(mut self, config: RulesConfig) -> Self {
        self.config = config;
        self
    }

    /// Build the game with an empty history.
    #[must_use]
    pub fn build(self) -> GameState {
        GameState::from_board(self.board, self.side_to_move, self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(row: usize, col: usize) -> Square {
        Square::new(row, col).unwrap()
    }

    #[test]
    fn test_starting_position() {
        let built = GameBuilder::starting_position().build();
        let standard = GameState::new();
        assert_eq!(built.board(), standard.board());
        assert_eq!(built.white_to_move(), standard.white_to_move());
    }

    #[test]
    fn test_empty_board() {
        let state = GameBuilder::new()
            .piece(sq(7, 4), Color::White, PieceKind::King)
            .piece(sq(0, 4), Color::Black, PieceKind::King)
            .build();

        assert!(!state.piece_at(sq(7, 4)).is_empty());
        assert!(!state.piece_at(sq(0, 4)).is_empty());
        assert!(state.piece_at(sq(7, 0)).is_empty());
    }

    #[test]
    fn test_side_to_move_and_rule() {
        let state = GameBuilder::new()
            .side_to_move(Color::Black)
            .slide_rule(SlideRule::SweepShort)
            .build();

        assert!(!state.white_to_move());
        assert_eq!(state.config().slide_rule, SlideRule::SweepShort);
    }

    #[test]
    fn test_clear_square() {
        let state = GameBuilder::starting_position().clear(sq(7, 0)).build();

        assert!(state.piece_at(sq(7, 0)).is_empty());
        assert!(!state.piece_at(sq(7, 1)).is_empty());
    }
}
