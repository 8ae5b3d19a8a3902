/// Core value types of the draughts board: sides, cell contents and squares.
///
/// Cell codes follow the classic numeric layout: `0` empty, `1` light pawn,
/// `2` dark pawn, `3` light queen, `4` dark queen. Parity of a non-empty code
/// gives the color and codes `>= 3` are queens.

/// Side to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Light,
    Dark,
}

impl Color {
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Color::Light => 0,
            Color::Dark => 1,
        }
    }

    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Color::Light => Color::Dark,
            Color::Dark => Color::Light,
        }
    }

    /// Row a pawn of this color promotes on.
    #[inline]
    pub const fn promotion_row(self) -> u8 {
        match self {
            Color::Light => 0,
            Color::Dark => 7,
        }
    }

    /// Row delta of a forward pawn step.
    #[inline]
    pub const fn forward(self) -> i8 {
        match self {
            Color::Light => -1,
            Color::Dark => 1,
        }
    }
}

/// Contents of one board cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    #[default]
    Empty,
    LightPawn,
    DarkPawn,
    LightQueen,
    DarkQueen,
}

impl Cell {
    #[inline]
    pub const fn code(self) -> u8 {
        match self {
            Cell::Empty => 0,
            Cell::LightPawn => 1,
            Cell::DarkPawn => 2,
            Cell::LightQueen => 3,
            Cell::DarkQueen => 4,
        }
    }

    #[inline]
    pub const fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(Cell::Empty),
            1 => Some(Cell::LightPawn),
            2 => Some(Cell::DarkPawn),
            3 => Some(Cell::LightQueen),
            4 => Some(Cell::DarkQueen),
            _ => None,
        }
    }

    #[inline]
    pub const fn pawn(color: Color) -> Self {
        match color {
            Color::Light => Cell::LightPawn,
            Color::Dark => Cell::DarkPawn,
        }
    }

    #[inline]
    pub const fn queen(color: Color) -> Self {
        match color {
            Color::Light => Cell::LightQueen,
            Color::Dark => Cell::DarkQueen,
        }
    }

    #[inline]
    pub const fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }

    #[inline]
    pub const fn is_queen(self) -> bool {
        matches!(self, Cell::LightQueen | Cell::DarkQueen)
    }

    #[inline]
    pub const fn is_pawn(self) -> bool {
        matches!(self, Cell::LightPawn | Cell::DarkPawn)
    }

    #[inline]
    pub const fn color(self) -> Option<Color> {
        match self {
            Cell::Empty => None,
            Cell::LightPawn | Cell::LightQueen => Some(Color::Light),
            Cell::DarkPawn | Cell::DarkQueen => Some(Color::Dark),
        }
    }

    #[inline]
    pub fn belongs_to(self, color: Color) -> bool {
        self.color() == Some(color)
    }

    /// Pawns become queens of the same color; queens are unchanged.
    #[inline]
    pub const fn promoted(self) -> Self {
        match self {
            Cell::LightPawn => Cell::LightQueen,
            Cell::DarkPawn => Cell::DarkQueen,
            other => other,
        }
    }
}

/// Board coordinate: `x` is the row (0 at the top, light's promotion row),
/// `y` is the column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Square {
    pub x: u8,
    pub y: u8,
}

impl Square {
    #[inline]
    pub const fn new(x: u8, y: u8) -> Self {
        Self { x, y }
    }

    /// Step by a signed delta, returning `None` when leaving the board.
    #[inline]
    pub fn offset(self, dx: i8, dy: i8) -> Option<Self> {
        let x = self.x as i8 + dx;
        let y = self.y as i8 + dy;
        if (0..8).contains(&x) && (0..8).contains(&y) {
            Some(Self::new(x as u8, y as u8))
        } else {
            None
        }
    }
}

impl std::fmt::Display for Square {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{},{}", self.x, self.y)
    }
}

/// The four diagonal directions as `(dx, dy)`.
pub const DIAGONALS: [(i8, i8); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];
