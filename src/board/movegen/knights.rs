use super::super::{Board, Color, MoveList, SlideRule, Square};

const KNIGHT_OFFSETS: [(isize, isize); 8] = [
    (-2, -1),
    (-2, 1),
    (2, -1),
    (2, 1),
    (-1, -2),
    (1, -2),
    (-1, 2),
    (1, 2),
];

pub(crate) fn knight_moves(
    from: Square,
    board: &Board,
    color: Color,
    _rule: SlideRule,
    moves: &mut MoveList,
) {
    super::step_moves(from, board, color, &KNIGHT_OFFSETS, moves);
}
