//! Error types for board operations.

use std::fmt;

/// Error type for square construction and parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SquareError {
    /// Row or column outside 0-7
    OutOfBounds { row: usize, col: usize },
    /// Invalid algebraic notation
    InvalidNotation { notation: String },
}

impl fmt::Display for SquareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SquareError::OutOfBounds { row, col } => {
                write!(f, "Square ({row}, {col}) out of bounds (must be 0-7)")
            }
            SquareError::InvalidNotation { notation } => {
                write!(f, "Invalid square notation '{notation}'")
            }
        }
    }
}

impl std::error::Error for SquareError {}

/// Error type for move parsing and checked application
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveError {
    /// Move string must be exactly 4 characters (e.g. "e2e4")
    InvalidLength { len: usize },
    /// One of the endpoints is not a valid square
    InvalidSquare(SquareError),
    /// Move is not in the enumerated move set for the side to move
    NotInMoveSet { notation: String },
}

impl fmt::Display for MoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveError::InvalidLength { len } => {
                write!(f, "Move must be 4 characters, found {len}")
            }
            MoveError::InvalidSquare(err) => write!(f, "Invalid move endpoint: {err}"),
            MoveError::NotInMoveSet { notation } => {
                write!(f, "Move '{notation}' is not available in this position")
            }
        }
    }
}

impl std::error::Error for MoveError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            MoveError::InvalidSquare(err) => Some(err),
            _ => None,
        }
    }
}

impl From<SquareError> for MoveError {
    fn from(err: SquareError) -> Self {
        MoveError::InvalidSquare(err)
    }
}

/// Error type for piece-placement (FEN board field) and occupant code parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlacementError {
    /// Placement must describe exactly 8 ranks
    WrongRankCount { found: usize },
    /// Invalid piece character in placement string
    InvalidPiece { char: char },
    /// A rank describes more or fewer than 8 files
    BadFileCount { rank: usize, files: usize },
    /// Invalid side to move (must be 'w' or 'b')
    InvalidSideToMove { found: String },
    /// Invalid two-character occupant code
    InvalidCode { code: String },
}

impl fmt::Display for PlacementError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlacementError::WrongRankCount { found } => {
                write!(f, "Placement must have 8 ranks, found {found}")
            }
            PlacementError::InvalidPiece { char } => {
                write!(f, "Invalid piece character '{char}' in placement")
            }
            PlacementError::BadFileCount { rank, files } => {
                write!(f, "Rank {rank} describes {files} files, expected 8")
            }
            PlacementError::InvalidSideToMove { found } => {
                write!(f, "Invalid side to move '{found}', expected 'w' or 'b'")
            }
            PlacementError::InvalidCode { code } => {
                write!(f, "Invalid occupant code '{code}'")
            }
        }
    }
}

impl std::error::Error for PlacementError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_square_error_out_of_bounds() {
        let err = SquareError::OutOfBounds { row: 9, col: 3 };
        assert!(err.to_string().contains('9'));
        assert!(err.to_string().contains('3'));
    }

    #[test]
    fn test_square_error_invalid_notation() {
        let err = SquareError::InvalidNotation {
            notation: "xyz".to_string(),
        };
        assert!(err.to_string().contains("xyz"));
    }

    #[test]
    fn test_move_error_wraps_square_error() {
        let err: MoveError = SquareError::InvalidNotation {
            notation: "z9".to_string(),
        }
        .into();
        assert!(err.to_string().contains("z9"));
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_move_error_not_in_move_set() {
        let err = MoveError::NotInMoveSet {
            notation: "e2e5".to_string(),
        };
        assert!(err.to_string().contains("e2e5"));
        assert!(std::error::Error::source(&err).is_none());
    }

    #[test]
    fn test_placement_error_messages() {
        let err = PlacementError::WrongRankCount { found: 7 };
        assert!(err.to_string().contains('7'));
        let err = PlacementError::BadFileCount { rank: 2, files: 9 };
        assert!(err.to_string().contains('9'));
        let err = PlacementError::InvalidPiece { char: 'z' };
        assert!(err.to_string().contains("'z'"));
    }
}
