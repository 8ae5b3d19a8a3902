//! Legal move generation with mandatory-capture priority.
//!
//! Generation is pure and deterministic (row-major scan, fixed diagonal
//! order). Randomised ordering is applied on top by the bot through
//! `MoveShuffler`, so perft and tests can use the raw order.

use crate::game_state::board::Board;
use crate::game_state::checkers_types::{Color, Square};
use crate::move_generation::legal_moves_pawn::{generate_pawn_captures, generate_pawn_steps};
use crate::move_generation::legal_moves_queen::{generate_queen_captures, generate_queen_slides};
use crate::moves::checkers_move::MoveList;

/// Moves of the piece standing on `from`.
///
/// When the piece has any capture only captures are returned and
/// `mandatory_capture` is set. An empty cell yields an empty list.
pub fn generate_piece_moves(board: &Board, from: Square) -> MoveList {
    let cell = board.get(from);
    let Some(side) = cell.color() else {
        return MoveList::default();
    };

    let mut moves = Vec::with_capacity(8);
    if cell.is_queen() {
        generate_queen_captures(board, from, side, &mut moves);
    } else {
        generate_pawn_captures(board, from, side, &mut moves);
    }

    if !moves.is_empty() {
        return MoveList {
            moves,
            mandatory_capture: true,
        };
    }

    if cell.is_queen() {
        generate_queen_slides(board, from, &mut moves);
    } else {
        generate_pawn_steps(board, from, side, &mut moves);
    }

    MoveList {
        moves,
        mandatory_capture: false,
    }
}

/// All legal moves for `side`.
///
/// The first capturing piece found discards the quiet moves gathered so far;
/// from then on only capturing pieces contribute.
pub fn generate_color_moves(board: &Board, side: Color) -> MoveList {
    let mut out = MoveList::default();

    for (square, cell) in board.squares() {
        if !cell.belongs_to(side) {
            continue;
        }
        let piece = generate_piece_moves(board, square);

        if piece.mandatory_capture && !out.mandatory_capture {
            out.mandatory_capture = true;
            out.moves.clear();
        }
        if piece.mandatory_capture || !out.mandatory_capture {
            out.moves.extend(piece.moves);
        }
    }

    out
}
