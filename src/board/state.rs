use std::fmt;

use super::{Color, Move, Occupant, PieceKind, RulesConfig, Square};

const BACK_ROW: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// The 8x8 occupant grid. Every cell always holds exactly one `Occupant`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Board {
    squares: [[Occupant; 8]; 8],
}

impl Board {
    #[must_use]
    pub const fn empty() -> Self {
        Board {
            squares: [[Occupant::Empty; 8]; 8],
        }
    }

    /// The standard initial position (Black on rows 0-1, White on rows 6-7).
    #[must_use]
    pub fn standard() -> Self {
        let mut board = Board::empty();
        for color in Color::BOTH {
            let back = color.back_row();
            let pawns = color.pawn_start_row();
            for (col, &kind) in BACK_ROW.iter().enumerate() {
                board.squares[back][col] = Occupant::Piece(color, kind);
                board.squares[pawns][col] = Occupant::Piece(color, PieceKind::Pawn);
            }
        }
        board
    }

    #[inline]
    #[must_use]
    pub fn piece_at(&self, sq: Square) -> Occupant {
        self.squares[sq.row()][sq.col()]
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self, sq: Square) -> bool {
        self.piece_at(sq).is_empty()
    }

    #[inline]
    pub(crate) fn set(&mut self, sq: Square, occupant: Occupant) {
        self.squares[sq.row()][sq.col()] = occupant;
    }

    /// Read-only view of the grid, row 0 first
    #[must_use]
    pub fn rows(&self) -> &[[Occupant; 8]; 8] {
        &self.squares
    }

    /// The grid as two-character occupant codes (`--`, `wp`, `bR`, ...)
    #[must_use]
    pub fn codes(&self) -> [[&'static str; 8]; 8] {
        self.squares.map(|row| row.map(Occupant::code))
    }

    /// Every square with its occupant, row-major from a8
    pub fn iter(&self) -> impl Iterator<Item = (Square, Occupant)> + '_ {
        Square::all().map(move |sq| (sq, self.piece_at(sq)))
    }

    /// Number of pieces of `color` on the board
    #[must_use]
    pub fn count(&self, color: Color) -> usize {
        self.iter()
            .filter(|(_, occ)| occ.color() == Some(color))
            .count()
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::standard()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, row) in self.squares.iter().enumerate() {
            write!(f, "{} ", 8 - idx)?;
            for occ in row {
                write!(f, " {occ}")?;
            }
            writeln!(f)?;
        }
        write!(f, "   a  b  c  d  e  f  g  h")
    }
}

/// Board, side to move and the stack of applied moves.
///
/// The board is always the starting board with every move still on the
/// history stack applied in order. Mutation goes through
/// [`GameState::apply`] and [`GameState::undo`] only.
#[derive(Clone, Debug)]
pub struct GameState {
    pub(crate) board: Board,
    pub(crate) white_to_move: bool,
    pub(crate) history: Vec<Move>,
    pub(crate) config: RulesConfig,
}

impl GameState {
    /// Standard initial position, White to move, default rules.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(RulesConfig::default())
    }

    #[must_use]
    pub fn with_config(config: RulesConfig) -> Self {
        Self::from_board(Board::standard(), Color::White, config)
    }

    #[must_use]
    pub fn from_board(board: Board, side_to_move: Color, config: RulesConfig) -> Self {
        GameState {
            board,
            white_to_move: side_to_move == Color::White,
            history: Vec::new(),
            config,
        }
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn piece_at(&self, sq: Square) -> Occupant {
        self.board.piece_at(sq)
    }

    #[must_use]
    pub fn white_to_move(&self) -> bool {
        self.white_to_move
    }

    #[must_use]
    pub fn side_to_move(&self) -> Color {
        if self.white_to_move {
            Color::White
        } else {
            Color::Black
        }
    }

    /// Applied moves, oldest first
    #[must_use]
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    #[must_use]
    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    #[must_use]
    pub fn last_move(&self) -> Option<Move> {
        self.history.last().copied()
    }

    #[must_use]
    pub fn config(&self) -> RulesConfig {
        self.config
    }
}

impl Default for GameState {
    fn default() -> Self {
        GameState::new()
    }
}
