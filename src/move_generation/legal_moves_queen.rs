use crate::game_state::board::Board;
use crate::game_state::checkers_types::{Color, Square, DIAGONALS};
use crate::moves::checkers_move::Move;

/// Long-range captures: exactly one enemy piece on the ray, landing on any
/// empty cell behind it up to the next occupied cell or the edge.
pub fn generate_queen_captures(board: &Board, from: Square, side: Color, out: &mut Vec<Move>) {
    for (dx, dy) in DIAGONALS {
        let mut jumped: Option<Square> = None;
        let mut cursor = from.offset(dx, dy);

        while let Some(sq) = cursor {
            match board.get(sq).color() {
                Some(owner) if owner == side || jumped.is_some() => break,
                Some(_) => jumped = Some(sq),
                None => {
                    if let Some(over) = jumped {
                        out.push(Move::capture(from, sq, over));
                    }
                }
            }
            cursor = sq.offset(dx, dy);
        }
    }
}

/// Any distance along a diagonal through empty cells.
pub fn generate_queen_slides(board: &Board, from: Square, out: &mut Vec<Move>) {
    for (dx, dy) in DIAGONALS {
        let mut cursor = from.offset(dx, dy);
        while let Some(sq) = cursor {
            if !board.get(sq).is_empty() {
                break;
            }
            out.push(Move::quiet(from, sq));
            cursor = sq.offset(dx, dy);
        }
    }
}
