//! Move and turn representations.

use crate::game_state::checkers_types::Square;

/// One relocation of a piece, optionally jumping an enemy piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub from: Square,
    pub to: Square,
    pub captured: Option<Square>,
}

impl Move {
    #[inline]
    pub const fn quiet(from: Square, to: Square) -> Self {
        Self {
            from,
            to,
            captured: None,
        }
    }

    #[inline]
    pub const fn capture(from: Square, to: Square, captured: Square) -> Self {
        Self {
            from,
            to,
            captured: Some(captured),
        }
    }

    #[inline]
    pub const fn is_capture(&self) -> bool {
        self.captured.is_some()
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.captured {
            Some(c) => write!(f, "{} -> {} [x {}]", self.from, self.to, c),
            None => write!(f, "{} -> {}", self.from, self.to),
        }
    }
}

/// Everything one side does on its move: a single step, or a capture chain
/// where every move after the first starts where the previous one landed.
pub type Turn = Vec<Move>;

/// Moves generated for a side or a single piece.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MoveList {
    pub moves: Vec<Move>,
    /// True when every move in `moves` is a capture.
    pub mandatory_capture: bool,
}

impl MoveList {
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.moves.len()
    }
}
