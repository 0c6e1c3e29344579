use super::super::{Board, Color, MoveList, SlideRule, Square};

const KING_OFFSETS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Adjacent squares only; castling is not generated.
pub(crate) fn king_moves(
    from: Square,
    board: &Board,
    color: Color,
    _rule: SlideRule,
    moves: &mut MoveList,
) {
    super::step_moves(from, board, color, &KING_OFFSETS, moves);
}
