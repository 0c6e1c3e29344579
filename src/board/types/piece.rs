//! Piece, color and square occupant types.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::error::PlacementError;

/// Chess piece kinds.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum PieceKind {
    Pawn,
    Rook,
    Knight,
    Bishop,
    Queen,
    King,
}

impl PieceKind {
    /// All piece kinds in index order
    pub const ALL: [PieceKind; 6] = [
        PieceKind::Pawn,
        PieceKind::Rook,
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Queen,
        PieceKind::King,
    ];

    #[inline]
    #[must_use]
    pub(crate) const fn index(self) -> usize {
        match self {
            PieceKind::Pawn => 0,
            PieceKind::Rook => 1,
            PieceKind::Knight => 2,
            PieceKind::Bishop => 3,
            PieceKind::Queen => 4,
            PieceKind::King => 5,
        }
    }

    /// Parse a piece kind from a FEN letter, ignoring case
    #[must_use]
    pub fn from_char(c: char) -> Option<PieceKind> {
        match c.to_ascii_lowercase() {
            'p' => Some(PieceKind::Pawn),
            'r' => Some(PieceKind::Rook),
            'n' => Some(PieceKind::Knight),
            'b' => Some(PieceKind::Bishop),
            'q' => Some(PieceKind::Queen),
            'k' => Some(PieceKind::King),
            _ => None,
        }
    }

    /// Lowercase FEN letter
    #[inline]
    #[must_use]
    pub const fn to_char(self) -> char {
        match self {
            PieceKind::Pawn => 'p',
            PieceKind::Rook => 'r',
            PieceKind::Knight => 'n',
            PieceKind::Bishop => 'b',
            PieceKind::Queen => 'q',
            PieceKind::King => 'k',
        }
    }

    /// FEN letter with case chosen by color (uppercase for White)
    #[inline]
    #[must_use]
    pub fn to_fen_char(self, color: Color) -> char {
        let c = self.to_char();
        if color == Color::White {
            c.to_ascii_uppercase()
        } else {
            c
        }
    }

    /// Returns true for Rook, Bishop and Queen
    #[inline]
    #[must_use]
    pub const fn is_slider(self) -> bool {
        matches!(self, PieceKind::Rook | PieceKind::Bishop | PieceKind::Queen)
    }
}

/// Side colors.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Color {
    White,
    Black,
}

impl Color {
    pub const BOTH: [Color; 2] = [Color::White, Color::Black];

    /// Returns the opposite color
    #[inline]
    #[must_use]
    pub const fn opponent(self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Row step a pawn of this color advances by (White moves toward row 0)
    #[inline]
    #[must_use]
    pub(crate) const fn pawn_direction(self) -> isize {
        match self {
            Color::White => -1,
            Color::Black => 1,
        }
    }

    /// Row from which a pawn may advance two squares
    #[inline]
    #[must_use]
    pub(crate) const fn pawn_start_row(self) -> usize {
        match self {
            Color::White => 6,
            Color::Black => 1,
        }
    }

    /// Row holding this color's pieces in the standard position
    #[inline]
    #[must_use]
    pub(crate) const fn back_row(self) -> usize {
        match self {
            Color::White => 7,
            Color::Black => 0,
        }
    }

    /// Single-letter prefix used in occupant codes
    #[inline]
    #[must_use]
    pub const fn code_char(self) -> char {
        match self {
            Color::White => 'w',
            Color::Black => 'b',
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::White => write!(f, "White"),
            Color::Black => write!(f, "Black"),
        }
    }
}

/// Contents of a single board square.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Occupant {
    #[default]
    Empty,
    Piece(Color, PieceKind),
}

impl Occupant {
    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        matches!(self, Occupant::Empty)
    }

    #[inline]
    #[must_use]
    pub const fn color(self) -> Option<Color> {
        match self {
            Occupant::Empty => None,
            Occupant::Piece(color, _) => Some(color),
        }
    }

    #[inline]
    #[must_use]
    pub const fn kind(self) -> Option<PieceKind> {
        match self {
            Occupant::Empty => None,
            Occupant::Piece(_, kind) => Some(kind),
        }
    }

    /// Two-character display code: `--` for empty, otherwise color letter
    /// followed by the piece letter (`wp`, `bR`, `wN`, ...). Pawns use a
    /// lowercase `p`, every other kind is uppercase.
    #[must_use]
    pub const fn code(self) -> &'static str {
        use Color::{Black, White};
        use PieceKind::{Bishop, King, Knight, Pawn, Queen, Rook};

        match self {
            Occupant::Empty => "--",
            Occupant::Piece(White, Pawn) => "wp",
            Occupant::Piece(White, Rook) => "wR",
            Occupant::Piece(White, Knight) => "wN",
            Occupant::Piece(White, Bishop) => "wB",
            Occupant::Piece(White, Queen) => "wQ",
            Occupant::Piece(White, King) => "wK",
            Occupant::Piece(Black, Pawn) => "bp",
            Occupant::Piece(Black, Rook) => "bR",
            Occupant::Piece(Black, Knight) => "bN",
            Occupant::Piece(Black, Bishop) => "bB",
            Occupant::Piece(Black, Queen) => "bQ",
            Occupant::Piece(Black, King) => "bK",
        }
    }
}

impl fmt::Display for Occupant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Occupant {
    type Err = PlacementError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "--" {
            return Ok(Occupant::Empty);
        }
        let mut chars = s.chars();
        let (Some(color), Some(piece), None) = (chars.next(), chars.next(), chars.next()) else {
            return Err(PlacementError::InvalidCode {
                code: s.to_string(),
            });
        };
        let color = match color {
            'w' => Color::White,
            'b' => Color::Black,
            _ => {
                return Err(PlacementError::InvalidCode {
                    code: s.to_string(),
                })
            }
        };
        let kind = PieceKind::from_char(piece).ok_or_else(|| PlacementError::InvalidCode {
            code: s.to_string(),
        })?;
        Ok(Occupant::Piece(color, kind))
    }
}
