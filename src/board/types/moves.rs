//! Move type and move list.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::Index;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::piece::Occupant;
use super::square::Square;
use crate::board::error::{MoveError, SquareError};
use crate::board::Board;

/// A move snapshot: endpoints plus what stood on them when it was created.
///
/// The mover and the captured occupant are read from the board at
/// construction and never refer back to it, so later board mutation does not
/// affect a recorded move.
///
/// Equality and hashing only look at the endpoints (see [`Move::id`]). Two
/// moves with the same start and end squares compare equal even when they
/// were built against different boards.
#[derive(Clone, Copy)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Move {
    start: Square,
    end: Square,
    piece_moved: Occupant,
    piece_captured: Occupant,
}

impl Move {
    /// Build a move from `start` to `end`, reading both occupants from `board`.
    #[must_use]
    pub fn new(start: Square, end: Square, board: &Board) -> Self {
        Move {
            start,
            end,
            piece_moved: board.piece_at(start),
            piece_captured: board.piece_at(end),
        }
    }

    /// Build a move from raw `(row, col)` pairs.
    ///
    /// Fails with [`SquareError::OutOfBounds`] if either endpoint is off the board.
    pub fn from_coords(
        start: (usize, usize),
        end: (usize, usize),
        board: &Board,
    ) -> Result<Self, SquareError> {
        let start = Square::try_from(start)?;
        let end = Square::try_from(end)?;
        Ok(Move::new(start, end, board))
    }

    /// Parse coordinate notation such as `e2e4` against `board`.
    pub fn parse(notation: &str, board: &Board) -> Result<Self, MoveError> {
        let notation = notation.trim();
        if notation.len() != 4 || !notation.is_ascii() {
            return Err(MoveError::InvalidLength {
                len: notation.chars().count(),
            });
        }
        let start: Square = notation[..2].parse()?;
        let end: Square = notation[2..].parse()?;
        Ok(Move::new(start, end, board))
    }

    #[inline]
    #[must_use]
    pub const fn start(self) -> Square {
        self.start
    }

    #[inline]
    #[must_use]
    pub const fn end(self) -> Square {
        self.end
    }

    /// Occupant of the start square when the move was built
    #[inline]
    #[must_use]
    pub const fn piece_moved(self) -> Occupant {
        self.piece_moved
    }

    /// Occupant of the end square when the move was built (possibly empty)
    #[inline]
    #[must_use]
    pub const fn piece_captured(self) -> Occupant {
        self.piece_captured
    }

    #[inline]
    #[must_use]
    pub const fn is_capture(self) -> bool {
        !self.piece_captured.is_empty()
    }

    /// Identity key: `start_row*1000 + start_col*100 + end_row*10 + end_col`.
    #[inline]
    #[must_use]
    pub const fn id(self) -> u16 {
        (self.start.row() * 1000 + self.start.col() * 100 + self.end.row() * 10 + self.end.col())
            as u16
    }
}

impl PartialEq for Move {
    fn eq(&self, other: &Self) -> bool {
        self.id() == other.id()
    }
}

impl Eq for Move {}

impl Hash for Move {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id().hash(state);
    }
}

impl fmt::Debug for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Move({}{} {}", self.start, self.end, self.piece_moved)?;
        if self.is_capture() {
            write!(f, " x{}", self.piece_captured)?;
        }
        write!(f, ")")
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.start, self.end)
    }
}

/// Ordered list of moves produced by one enumeration pass.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MoveList {
    moves: Vec<Move>,
}

impl MoveList {
    #[must_use]
    pub fn new() -> Self {
        MoveList { moves: Vec::new() }
    }

    pub(crate) fn push(&mut self, mv: Move) {
        self.moves.push(mv);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[Move] {
        &self.moves
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Move> {
        self.moves.iter()
    }

    /// Membership by identity key.
    #[must_use]
    pub fn contains(&self, mv: &Move) -> bool {
        self.moves.contains(mv)
    }

    /// The listed move with the same identity key as `mv`, if any.
    #[must_use]
    pub fn find(&self, mv: &Move) -> Option<Move> {
        self.moves.iter().find(|m| *m == mv).copied()
    }

    /// Moves starting on `from`, in list order
    pub fn from_square(&self, from: Square) -> impl Iterator<Item = Move> + '_ {
        self.moves.iter().copied().filter(move |m| m.start == from)
    }
}

impl<'a> IntoIterator for &'a MoveList {
    type Item = &'a Move;
    type IntoIter = std::slice::Iter<'a, Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.moves.iter()
    }
}

impl IntoIterator for MoveList {
    type Item = Move;
    type IntoIter = std::vec::IntoIter<Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.moves.into_iter()
    }
}

impl Index<usize> for MoveList {
    type Output = Move;

    fn index(&self, idx: usize) -> &Self::Output {
        &self.moves[idx]
    }
}
