use crate::game_state::board::Board;
use crate::game_state::checkers_types::{Color, Square, DIAGONALS};
use crate::moves::checkers_move::Move;

/// Short jumps over an adjacent enemy piece, in all four diagonals.
pub fn generate_pawn_captures(board: &Board, from: Square, side: Color, out: &mut Vec<Move>) {
    for (dx, dy) in DIAGONALS {
        let (Some(over), Some(to)) = (from.offset(dx, dy), from.offset(2 * dx, 2 * dy)) else {
            continue;
        };
        if !board.get(to).is_empty() {
            continue;
        }
        match board.get(over).color() {
            Some(owner) if owner != side => out.push(Move::capture(from, to, over)),
            _ => {}
        }
    }
}

/// Single forward steps into empty cells.
pub fn generate_pawn_steps(board: &Board, from: Square, side: Color, out: &mut Vec<Move>) {
    let dx = side.forward();
    for dy in [-1i8, 1i8] {
        let Some(to) = from.offset(dx, dy) else {
            continue;
        };
        if board.get(to).is_empty() {
            out.push(Move::quiet(from, to));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{generate_pawn_captures, generate_pawn_steps};
    use crate::game_state::board::Board;
    use crate::game_state::checkers_types::{Cell, Color, Square};

    #[test]
    fn pawn_steps_forward_only() {
        let mut board = Board::new_empty();
        let from = Square::new(4, 3);
        board.set(from, Cell::LightPawn);

        let mut light = Vec::new();
        generate_pawn_steps(&board, from, Color::Light, &mut light);
        let targets: Vec<Square> = light.iter().map(|m| m.to).collect();
        assert_eq!(targets, vec![Square::new(3, 2), Square::new(3, 4)]);

        board.set(from, Cell::DarkPawn);
        let mut dark = Vec::new();
        generate_pawn_steps(&board, from, Color::Dark, &mut dark);
        assert!(dark.iter().all(|m| m.to.x == 5));
    }

    #[test]
    fn pawn_captures_backwards_but_not_own_pieces() {
        let mut board = Board::new_empty();
        let from = Square::new(3, 3);
        board.set(from, Cell::LightPawn);
        board.set(Square::new(4, 4), Cell::DarkPawn);
        board.set(Square::new(2, 2), Cell::LightPawn);
        board.set(Square::new(2, 4), Cell::DarkQueen);
        board.set(Square::new(1, 5), Cell::DarkPawn);

        let mut out = Vec::new();
        generate_pawn_captures(&board, from, Color::Light, &mut out);

        assert_eq!(out.len(), 1);
        assert_eq!(out[0].to, Square::new(5, 5));
        assert_eq!(out[0].captured, Some(Square::new(4, 4)));
    }

    #[test]
    fn pawn_capture_needs_room_on_the_board() {
        let mut board = Board::new_empty();
        let from = Square::new(1, 1);
        board.set(from, Cell::LightPawn);
        board.set(Square::new(0, 0), Cell::DarkPawn);

        let mut out = Vec::new();
        generate_pawn_captures(&board, from, Color::Light, &mut out);
        assert!(out.is_empty());
    }
}
