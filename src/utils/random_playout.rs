//! Seeded random games for position batteries.
//!
//! Plays uniformly random complete turns from a start position and records
//! every position reached, together with the side to move there. Used by
//! property tests and benchmarks that need many varied, reproducible boards.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::game_state::board::Board;
use crate::game_state::checkers_types::Color;
use crate::move_generation::legal_move_apply::apply_move;
use crate::move_generation::move_generator::{generate_color_moves, generate_piece_moves};

/// Play up to `max_turns` random turns; stops early when a side is stuck.
pub fn random_playout(start: &Board, side: Color, seed: u64, max_turns: usize) -> Vec<(Board, Color)> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut board = *start;
    let mut side = side;
    let mut positions = Vec::with_capacity(max_turns);

    for _ in 0..max_turns {
        let list = generate_color_moves(&board, side);
        if list.is_empty() {
            break;
        }

        let mut mv = list.moves[rng.random_range(0..list.len())];
        board = apply_move(&board, mv);
        while mv.is_capture() {
            let follow = generate_piece_moves(&board, mv.to);
            if !follow.mandatory_capture {
                break;
            }
            mv = follow.moves[rng.random_range(0..follow.len())];
            board = apply_move(&board, mv);
        }

        side = side.opposite();
        positions.push((board, side));
    }

    positions
}
