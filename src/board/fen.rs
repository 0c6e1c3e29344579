use std::str::FromStr;

use super::error::PlacementError;
use super::{Board, Color, GameState, Occupant, PieceKind, RulesConfig, Square};

impl Board {
    /// Parse the piece-placement field of a FEN string
    /// (e.g. `rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR`).
    ///
    /// The first rank listed is rank 8, which is row 0.
    pub fn from_placement(placement: &str) -> Result<Self, PlacementError> {
        let ranks: Vec<&str> = placement.split('/').collect();
        if ranks.len() != 8 {
            return Err(PlacementError::WrongRankCount { found: ranks.len() });
        }

        let mut board = Board::empty();
        for (row, rank_str) in ranks.iter().enumerate() {
            let mut col = 0;
            for c in rank_str.chars() {
                if let Some(skip) = c.to_digit(10) {
                    col += skip as usize;
                    continue;
                }
                let kind = PieceKind::from_char(c).ok_or(PlacementError::InvalidPiece { char: c })?;
                let color = if c.is_ascii_uppercase() {
                    Color::White
                } else {
                    Color::Black
                };
                let sq = Square::new(row, col).ok_or(PlacementError::BadFileCount {
                    rank: 8 - row,
                    files: col + 1,
                })?;
                board.set(sq, Occupant::Piece(color, kind));
                col += 1;
            }
            if col != 8 {
                return Err(PlacementError::BadFileCount {
                    rank: 8 - row,
                    files: col,
                });
            }
        }
        Ok(board)
    }

    /// Render the board as a FEN piece-placement field.
    #[must_use]
    pub fn to_placement(&self) -> String {
        let mut ranks: Vec<String> = Vec::with_capacity(8);
        for row in self.rows() {
            let mut rank = String::new();
            let mut empty = 0;
            for occ in row {
                match *occ {
                    Occupant::Empty => empty += 1,
                    Occupant::Piece(color, kind) => {
                        if empty > 0 {
                            rank.push_str(&empty.to_string());
                            empty = 0;
                        }
                        rank.push(kind.to_fen_char(color));
                    }
                }
            }
            if empty > 0 {
                rank.push_str(&empty.to_string());
            }
            ranks.push(rank);
        }
        ranks.join("/")
    }
}

impl FromStr for Board {
    type Err = PlacementError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Board::from_placement(s.trim())
    }
}

impl GameState {
    /// Build a game from the placement and side-to-move fields of a FEN
    /// string. Castling, en passant and clock fields are ignored if present.
    pub fn try_from_fen(fen: &str) -> Result<Self, PlacementError> {
        let mut parts = fen.split_whitespace();
        let board = Board::from_placement(parts.next().unwrap_or(""))?;
        let side = match parts.next() {
            None | Some("w") => Color::White,
            Some("b") => Color::Black,
            Some(other) => {
                return Err(PlacementError::InvalidSideToMove {
                    found: other.to_string(),
                })
            }
        };
        Ok(GameState::from_board(board, side, RulesConfig::default()))
    }

    /// Build a game from FEN.
    ///
    /// # Panics
    /// Panics if the FEN string is invalid. Use `try_from_fen` for fallible parsing.
    #[must_use]
    pub fn from_fen(fen: &str) -> Self {
        Self::try_from_fen(fen).expect("Invalid FEN string")
    }

    /// Placement and side to move, e.g. `rnbqkbnr/.../RNBQKBNR w`.
    #[must_use]
    pub fn to_fen(&self) -> String {
        let side = if self.white_to_move { 'w' } else { 'b' };
        format!("{} {}", self.board.to_placement(), side)
    }
}
