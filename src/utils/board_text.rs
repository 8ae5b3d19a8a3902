//! Plain-text board diagrams.
//!
//! One line per row, top row (light's promotion row) first: `.` empty,
//! `w`/`b` light/dark pawn, `W`/`B` light/dark queen. Spaces inside a row are
//! ignored and blank lines are skipped, so rendered output parses back.

use crate::errors::{BotError, BotResult};
use crate::game_state::board::Board;
use crate::game_state::checkers_rules::BOARD_SIZE;
use crate::game_state::checkers_types::{Cell, Square};

pub fn parse_board(text: &str) -> BotResult<Board> {
    let rows: Vec<&str> = text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();

    if rows.len() != BOARD_SIZE {
        return Err(BotError::InvalidBoardState(format!(
            "board diagram must have {BOARD_SIZE} rows, got {}",
            rows.len()
        )));
    }

    let mut board = Board::new_empty();
    for (x, row) in rows.iter().enumerate() {
        let cells: Vec<char> = row.chars().filter(|c| !c.is_whitespace()).collect();
        if cells.len() != BOARD_SIZE {
            return Err(BotError::InvalidBoardState(format!(
                "row {x} must have {BOARD_SIZE} cells, got {}",
                cells.len()
            )));
        }
        for (y, ch) in cells.into_iter().enumerate() {
            let cell = cell_from_char(ch).ok_or_else(|| {
                BotError::InvalidBoardState(format!("unknown cell '{ch}' at ({x}, {y})"))
            })?;
            board.set(Square::new(x as u8, y as u8), cell);
        }
    }

    Ok(board)
}

pub fn render_board(board: &Board) -> String {
    let mut out = String::with_capacity(BOARD_SIZE * (BOARD_SIZE * 2 + 1));
    for x in 0..BOARD_SIZE {
        for y in 0..BOARD_SIZE {
            if y > 0 {
                out.push(' ');
            }
            out.push(cell_to_char(board.get(Square::new(x as u8, y as u8))));
        }
        out.push('\n');
    }
    out
}

fn cell_from_char(ch: char) -> Option<Cell> {
    match ch {
        '.' => Some(Cell::Empty),
        'w' => Some(Cell::LightPawn),
        'b' => Some(Cell::DarkPawn),
        'W' => Some(Cell::LightQueen),
        'B' => Some(Cell::DarkQueen),
        _ => None,
    }
}

fn cell_to_char(cell: Cell) -> char {
    match cell {
        Cell::Empty => '.',
        Cell::LightPawn => 'w',
        Cell::DarkPawn => 'b',
        Cell::LightQueen => 'W',
        Cell::DarkQueen => 'B',
    }
}

#[cfg(test)]
mod tests {
    use super::{parse_board, render_board};
    use crate::errors::BotError;
    use crate::game_state::board::Board;
    use crate::game_state::checkers_types::{Cell, Square};

    #[test]
    fn renders_the_starting_position() {
        let text = render_board(&Board::new_game());
        let first = text.lines().next().expect("eight lines");
        assert_eq!(first, ". b . b . b . b");
        assert_eq!(text.lines().count(), 8);
        assert_eq!(parse_board(&text).expect("rendered text parses"), Board::new_game());
    }

    #[test]
    fn parses_queens_and_compact_rows() {
        let board = parse_board(
            "
            ........
            ...B....
            ........
            ........
            ........
            ......W.
            ........
            ........
            ",
        )
        .expect("diagram should parse");
        assert_eq!(board.get(Square::new(1, 3)), Cell::DarkQueen);
        assert_eq!(board.get(Square::new(5, 6)), Cell::LightQueen);
    }

    #[test]
    fn rejects_bad_diagrams() {
        assert!(matches!(
            parse_board("........\n"),
            Err(BotError::InvalidBoardState(_))
        ));
        let bad_char = "x.......\n".repeat(8);
        assert!(matches!(
            parse_board(&bad_char),
            Err(BotError::InvalidBoardState(_))
        ));
        let short_row = format!("{}.......\n", "........\n".repeat(7));
        assert!(matches!(
            parse_board(&short_row),
            Err(BotError::InvalidBoardState(_))
        ));
    }
}
