//! Pseudo-legal move generation.
//!
//! One generator per piece kind. Generators borrow the board immutably and
//! only append to the caller's accumulator, so separate passes over the same
//! board can run independently. No check filtering, castling, en passant or
//! promotion is performed.

mod kings;
mod knights;
mod pawns;
mod sliders;

use super::{Board, Color, GameState, Move, MoveList, Occupant, PieceKind, SlideRule, Square};

/// Signature shared by every per-kind generator.
pub type Generator = fn(Square, &Board, Color, SlideRule, &mut MoveList);

/// Generators indexed by `PieceKind::index()`.
const GENERATORS: [Generator; 6] = [
    pawns::pawn_moves,
    sliders::rook_moves,
    knights::knight_moves,
    sliders::bishop_moves,
    sliders::queen_moves,
    kings::king_moves,
];

/// Append the candidate moves of a `color` `kind` standing on `from`.
pub fn generate_piece_moves(
    kind: PieceKind,
    from: Square,
    board: &Board,
    color: Color,
    rule: SlideRule,
    moves: &mut MoveList,
) {
    GENERATORS[kind.index()](from, board, color, rule, moves);
}

/// Fixed-offset movement shared by knights and kings: every on-board target
/// not holding a piece of `color`.
fn step_moves(
    from: Square,
    board: &Board,
    color: Color,
    offsets: &[(isize, isize)],
    moves: &mut MoveList,
) {
    for &(dr, dc) in offsets {
        if let Some(to) = from.offset(dr, dc) {
            if board.piece_at(to).color() != Some(color) {
                moves.push(Move::new(from, to, board));
            }
        }
    }
}

impl Board {
    /// All pseudo-legal moves for `color`, scanning squares row-major from a8
    /// and keeping each generator's internal order.
    #[must_use]
    pub fn pseudo_moves(&self, color: Color, rule: SlideRule) -> MoveList {
        let mut moves = MoveList::new();
        for (sq, occ) in self.iter() {
            if let Occupant::Piece(owner, kind) = occ {
                if owner == color {
                    generate_piece_moves(kind, sq, self, color, rule, &mut moves);
                }
            }
        }
        moves
    }
}

impl GameState {
    /// Every pseudo-legal move for the side to move. Recomputed on each call.
    #[must_use]
    pub fn generate_moves(&self) -> MoveList {
        let color = self.side_to_move();
        let moves = self.board.pseudo_moves(color, self.config.slide_rule);
        #[cfg(feature = "logging")]
        log::trace!("{} moves available for {}", moves.len(), color);
        moves
    }

    /// Moves a caller may play. No king-safety filtering is applied, so this
    /// is the same set as [`GameState::generate_moves`].
    #[must_use]
    pub fn valid_moves(&self) -> MoveList {
        self.generate_moves()
    }

    /// Count leaf nodes of the pseudo-legal move tree to `depth` plies.
    pub fn perft(&mut self, depth: usize) -> u64 {
        if depth == 0 {
            return 1;
        }

        let moves = self.generate_moves();
        if depth == 1 {
            return moves.len() as u64;
        }

        let mut nodes = 0;
        for mv in moves {
            self.apply(mv);
            nodes += self.perft(depth - 1);
            self.undo();
        }
        nodes
    }
}
