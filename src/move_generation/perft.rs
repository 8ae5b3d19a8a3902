//! Turn-level perft for validating the move generator.
//!
//! A capture chain counts as one turn, so each leaf is a distinct sequence of
//! complete turns, alternating sides.

use crate::game_state::board::Board;
use crate::game_state::checkers_types::{Color, Square};
use crate::move_generation::legal_move_apply::apply_move;
use crate::move_generation::move_generator::{generate_color_moves, generate_piece_moves};

pub fn perft(board: &Board, side: Color, depth: u8) -> u64 {
    if depth == 0 {
        return 1;
    }

    let list = generate_color_moves(board, side);
    let mut nodes = 0u64;
    for mv in list.moves {
        let next = apply_move(board, mv);
        nodes += if mv.is_capture() {
            perft_chain(&next, side, mv.to, depth)
        } else {
            perft(&next, side.opposite(), depth - 1)
        };
    }
    nodes
}

fn perft_chain(board: &Board, side: Color, piece: Square, depth: u8) -> u64 {
    let follow = generate_piece_moves(board, piece);
    if !follow.mandatory_capture {
        return perft(board, side.opposite(), depth - 1);
    }

    follow
        .moves
        .into_iter()
        .map(|mv| perft_chain(&apply_move(board, mv), side, mv.to, depth))
        .sum()
}

#[cfg(test)]
mod tests {
    use super::perft;
    use crate::game_state::board::Board;
    use crate::game_state::checkers_rules::FIRST_TO_MOVE;
    use crate::game_state::checkers_types::{Cell, Color, Square};

    #[test]
    fn perft_from_starting_position() {
        let board = Board::new_game();
        let expected = [1u64, 7, 49, 302, 1469];
        for (depth, &nodes) in expected.iter().enumerate() {
            assert_eq!(
                perft(&board, FIRST_TO_MOVE, depth as u8),
                nodes,
                "perft depth {depth}"
            );
        }
    }

    #[test]
    fn capture_chain_counts_as_a_single_turn() {
        let mut board = Board::new_empty();
        board.set(Square::new(6, 1), Cell::LightPawn);
        board.set(Square::new(5, 2), Cell::DarkPawn);
        board.set(Square::new(3, 4), Cell::DarkPawn);

        // One chain (two jumps) is the only legal turn.
        assert_eq!(perft(&board, Color::Light, 1), 1);
    }
}
