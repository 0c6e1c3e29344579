use super::super::{Board, Color, Move, MoveList, SlideRule, Square};

/// Single and double advances, then captures toward column -1 and +1.
///
/// A pawn already on its far row has nothing ahead and yields no moves.
pub(crate) fn pawn_moves(
    from: Square,
    board: &Board,
    color: Color,
    _rule: SlideRule,
    moves: &mut MoveList,
) {
    let dir = color.pawn_direction();
    let Some(one) = from.offset(dir, 0) else {
        return;
    };

    if board.is_empty(one) {
        moves.push(Move::new(from, one, board));
        if from.row() == color.pawn_start_row() {
            if let Some(two) = from.offset(2 * dir, 0) {
                if board.is_empty(two) {
                    moves.push(Move::new(from, two, board));
                }
            }
        }
    }

    for dc in [-1, 1] {
        if let Some(to) = from.offset(dir, dc) {
            if board.piece_at(to).color() == Some(color.opponent()) {
                moves.push(Move::new(from, to, board));
            }
        }
    }
}
