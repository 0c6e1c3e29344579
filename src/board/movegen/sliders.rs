use super::super::{Board, Color, Move, MoveList, Occupant, SlideRule, Square};

const ORTHOGONAL: [(isize, isize); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];
const DIAGONAL: [(isize, isize); 4] = [(1, 1), (-1, 1), (1, -1), (-1, -1)];

pub(crate) fn rook_moves(
    from: Square,
    board: &Board,
    color: Color,
    rule: SlideRule,
    moves: &mut MoveList,
) {
    slide(from, board, color, rule, &ORTHOGONAL, moves);
}

pub(crate) fn bishop_moves(
    from: Square,
    board: &Board,
    color: Color,
    rule: SlideRule,
    moves: &mut MoveList,
) {
    slide(from, board, color, rule, &DIAGONAL, moves);
}

/// Diagonal rays first, then orthogonal.
pub(crate) fn queen_moves(
    from: Square,
    board: &Board,
    color: Color,
    rule: SlideRule,
    moves: &mut MoveList,
) {
    slide(from, board, color, rule, &DIAGONAL, moves);
    slide(from, board, color, rule, &ORTHOGONAL, moves);
}

fn slide(
    from: Square,
    board: &Board,
    color: Color,
    rule: SlideRule,
    directions: &[(isize, isize)],
    moves: &mut MoveList,
) {
    for &(dr, dc) in directions {
        let mut to = from;
        while let Some(next) = to.offset(dr, dc) {
            to = next;
            // SweepShort never lands on the last square of a ray.
            if rule.stops_short() && to.offset(dr, dc).is_none() {
                break;
            }
            match board.piece_at(to) {
                Occupant::Empty => moves.push(Move::new(from, to, board)),
                Occupant::Piece(other, _) => {
                    if other != color {
                        moves.push(Move::new(from, to, board));
                    }
                    if rule.stops_at_blocker() {
                        break;
                    }
                }
            }
        }
    }
}
