use crate::game_state::board::Board;
use crate::game_state::checkers_types::Cell;
use crate::moves::checkers_move::Move;

/// Board transition: returns the snapshot after `mv`, leaving `board` intact.
///
/// The captured piece is removed and a pawn reaching its promotion row is
/// crowned on the spot, including in the middle of a capture chain.
pub fn apply_move(board: &Board, mv: Move) -> Board {
    let mut next = *board;

    if let Some(captured) = mv.captured {
        next.set(captured, Cell::Empty);
    }

    let mut moving = next.get(mv.from);
    if let Some(side) = moving.color() {
        if moving.is_pawn() && mv.to.x == side.promotion_row() {
            moving = moving.promoted();
        }
    }

    next.set(mv.to, moving);
    next.set(mv.from, Cell::Empty);
    next
}

#[cfg(test)]
mod tests {
    use super::apply_move;
    use crate::game_state::board::Board;
    use crate::game_state::checkers_types::{Cell, Square};
    use crate::move_generation::move_generator::generate_piece_moves;
    use crate::moves::checkers_move::Move;

    #[test]
    fn quiet_move_relocates_and_leaves_input_untouched() {
        let board = Board::new_game();
        let mv = Move::quiet(Square::new(5, 0), Square::new(4, 1));
        let next = apply_move(&board, mv);

        assert_eq!(next.get(Square::new(5, 0)), Cell::Empty);
        assert_eq!(next.get(Square::new(4, 1)), Cell::LightPawn);
        assert_eq!(board.get(Square::new(5, 0)), Cell::LightPawn);
    }

    #[test]
    fn capture_clears_jumped_piece() {
        let mut board = Board::new_empty();
        board.set(Square::new(4, 3), Cell::LightPawn);
        board.set(Square::new(3, 4), Cell::DarkPawn);
        let mv = Move::capture(Square::new(4, 3), Square::new(2, 5), Square::new(3, 4));
        let next = apply_move(&board, mv);

        assert_eq!(next.get(Square::new(3, 4)), Cell::Empty);
        assert_eq!(next.get(Square::new(2, 5)), Cell::LightPawn);
        assert_eq!(next.piece_count(crate::game_state::checkers_types::Color::Dark), 0);
    }

    #[test]
    fn pawns_promote_on_their_last_row() {
        let mut board = Board::new_empty();
        board.set(Square::new(1, 2), Cell::LightPawn);
        board.set(Square::new(6, 5), Cell::DarkPawn);

        let light = apply_move(&board, Move::quiet(Square::new(1, 2), Square::new(0, 3)));
        assert_eq!(light.get(Square::new(0, 3)), Cell::LightQueen);

        let dark = apply_move(&board, Move::quiet(Square::new(6, 5), Square::new(7, 4)));
        assert_eq!(dark.get(Square::new(7, 4)), Cell::DarkQueen);
    }

    #[test]
    fn promotion_mid_chain_switches_to_queen_captures() {
        // Light pawn jumps onto row 0 and, now a queen, can continue along a
        // long diagonal that a pawn could not reach.
        let mut board = Board::new_empty();
        board.set(Square::new(2, 1), Cell::LightPawn);
        board.set(Square::new(1, 2), Cell::DarkPawn);
        board.set(Square::new(2, 5), Cell::DarkPawn);

        let first = Move::capture(Square::new(2, 1), Square::new(0, 3), Square::new(1, 2));
        let next = apply_move(&board, first);
        assert_eq!(next.get(Square::new(0, 3)), Cell::LightQueen);

        let follow = generate_piece_moves(&next, Square::new(0, 3));
        assert!(follow.mandatory_capture);
        assert!(follow
            .moves
            .iter()
            .all(|m| m.captured == Some(Square::new(2, 5))));
        assert_eq!(follow.len(), 2);
    }
}
