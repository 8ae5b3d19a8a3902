//! Immutable-by-convention board snapshot.
//!
//! `Board` is a small `Copy` value: every hypothetical move in search produces
//! a fresh snapshot, so sibling branches never observe each other's changes
//! and backtracking needs no undo stack.

use crate::errors::{BotError, BotResult};
use crate::game_state::checkers_rules::{starting_cells, BOARD_SIZE};
use crate::game_state::checkers_types::{Cell, Color, Square};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [[Cell; BOARD_SIZE]; BOARD_SIZE],
}

impl Default for Board {
    fn default() -> Self {
        Self::new_empty()
    }
}

impl Board {
    #[inline]
    pub fn new_empty() -> Self {
        Self {
            cells: [[Cell::Empty; BOARD_SIZE]; BOARD_SIZE],
        }
    }

    #[inline]
    pub fn new_game() -> Self {
        Self {
            cells: starting_cells(),
        }
    }

    #[inline]
    pub fn from_cells(cells: [[Cell; BOARD_SIZE]; BOARD_SIZE]) -> Self {
        Self { cells }
    }

    /// Build a snapshot from raw cell codes, validating shape and values.
    pub fn from_codes<R: AsRef<[u8]>>(rows: &[R]) -> BotResult<Self> {
        if rows.len() != BOARD_SIZE {
            return Err(BotError::InvalidBoardState(format!(
                "expected {BOARD_SIZE} rows, got {}",
                rows.len()
            )));
        }

        let mut board = Self::new_empty();
        for (x, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != BOARD_SIZE {
                return Err(BotError::InvalidBoardState(format!(
                    "row {x} has {} cells, expected {BOARD_SIZE}",
                    row.len()
                )));
            }
            for (y, &code) in row.iter().enumerate() {
                board.cells[x][y] = Cell::from_code(code).ok_or_else(|| {
                    BotError::InvalidBoardState(format!("cell ({x}, {y}) has unknown code {code}"))
                })?;
            }
        }
        Ok(board)
    }

    pub fn to_codes(&self) -> [[u8; BOARD_SIZE]; BOARD_SIZE] {
        let mut codes = [[0u8; BOARD_SIZE]; BOARD_SIZE];
        for (x, row) in self.cells.iter().enumerate() {
            for (y, cell) in row.iter().enumerate() {
                codes[x][y] = cell.code();
            }
        }
        codes
    }

    #[inline]
    pub fn get(&self, square: Square) -> Cell {
        self.cells[square.x as usize][square.y as usize]
    }

    #[inline]
    pub fn set(&mut self, square: Square, cell: Cell) {
        self.cells[square.x as usize][square.y as usize] = cell;
    }

    /// Checked lookup for caller-supplied coordinates.
    pub fn cell_at(&self, x: usize, y: usize) -> BotResult<Cell> {
        if x >= BOARD_SIZE || y >= BOARD_SIZE {
            return Err(BotError::InvalidPosition {
                x,
                y,
                reason: "coordinates outside the 8x8 board",
            });
        }
        Ok(self.cells[x][y])
    }

    /// Row-major iteration over every square and its contents.
    pub fn squares(&self) -> impl Iterator<Item = (Square, Cell)> + '_ {
        self.cells.iter().enumerate().flat_map(|(x, row)| {
            row.iter()
                .enumerate()
                .map(move |(y, &cell)| (Square::new(x as u8, y as u8), cell))
        })
    }

    pub fn count(&self, cell: Cell) -> usize {
        self.squares().filter(|&(_, c)| c == cell).count()
    }

    pub fn piece_count(&self, color: Color) -> usize {
        self.squares().filter(|&(_, c)| c.belongs_to(color)).count()
    }
}

/// Read-only source of the live game board.
///
/// The bot pulls one snapshot per request and never writes back; committing
/// a chosen turn is the caller's job.
pub trait BoardSource {
    fn snapshot(&self) -> Board;
}

impl BoardSource for Board {
    fn snapshot(&self) -> Board {
        *self
    }
}

impl<T: BoardSource + ?Sized> BoardSource for &T {
    fn snapshot(&self) -> Board {
        (**self).snapshot()
    }
}

impl<T: BoardSource + ?Sized> BoardSource for std::rc::Rc<std::cell::RefCell<T>> {
    fn snapshot(&self) -> Board {
        self.borrow().snapshot()
    }
}
