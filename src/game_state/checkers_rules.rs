//! Fixed rules constants and the standard starting layout.

use crate::game_state::checkers_types::{Cell, Color};

pub const BOARD_SIZE: usize = 8;

/// Rows initially filled with dark pawns; light mirrors them at the bottom.
pub const PAWN_ROWS: usize = 3;

/// Side that moves first from the starting layout.
pub const FIRST_TO_MOVE: Color = Color::Light;

/// Playable squares are the dark squares, where `(x + y)` is odd.
#[inline]
pub const fn is_playable(x: usize, y: usize) -> bool {
    (x + y) % 2 == 1
}

pub fn starting_cells() -> [[Cell; BOARD_SIZE]; BOARD_SIZE] {
    let mut cells = [[Cell::Empty; BOARD_SIZE]; BOARD_SIZE];
    for (x, row) in cells.iter_mut().enumerate() {
        for (y, cell) in row.iter_mut().enumerate() {
            if !is_playable(x, y) {
                continue;
            }
            if x < PAWN_ROWS {
                *cell = Cell::DarkPawn;
            } else if x >= BOARD_SIZE - PAWN_ROWS {
                *cell = Cell::LightPawn;
            }
        }
    }
    cells
}
