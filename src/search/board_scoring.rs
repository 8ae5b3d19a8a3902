//! Pluggable leaf evaluation.
//!
//! Scores are material ratios `opponent / own` seen from a perspective side:
//! lower is better for that side, `0.0` means the opponent has nothing left and
//! `NO_MATERIAL_SCORE` means the perspective side has nothing left.

use crate::game_state::board::Board;
use crate::game_state::checkers_types::{Cell, Color};

/// Sentinel for "no pieces left" and for positions without a legal move.
pub const NO_MATERIAL_SCORE: f64 = 1e9;

/// Per-row bonus for pawn advancement in the potential scorer.
pub const ADVANCEMENT_BONUS: f64 = 0.05;

pub trait BoardScorer {
    fn score(&self, board: &Board, perspective: Color) -> f64;
}

/// Pawn and queen counts, queens weighted 4.
#[derive(Debug, Clone, Copy, Default)]
pub struct MaterialScorer;

impl MaterialScorer {
    pub const QUEEN_WEIGHT: f64 = 4.0;
}

impl BoardScorer for MaterialScorer {
    fn score(&self, board: &Board, perspective: Color) -> f64 {
        let tally = MaterialTally::count(board, 0.0);
        tally.ratio(perspective, Self::QUEEN_WEIGHT)
    }
}

/// Material plus a bonus for pawns that have advanced towards promotion,
/// queens weighted 5 to stay ahead of a fully advanced pawn.
#[derive(Debug, Clone, Copy, Default)]
pub struct PotentialScorer;

impl PotentialScorer {
    pub const QUEEN_WEIGHT: f64 = 5.0;
}

impl BoardScorer for PotentialScorer {
    fn score(&self, board: &Board, perspective: Color) -> f64 {
        let tally = MaterialTally::count(board, ADVANCEMENT_BONUS);
        tally.ratio(perspective, Self::QUEEN_WEIGHT)
    }
}

/// Scorer selection as configured by `Bot.BotScoringType`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScoringMode {
    #[default]
    Number,
    NumberAndPotential,
}

impl ScoringMode {
    /// Parses a configuration value, `None` for anything unrecognised.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "Number" => Some(ScoringMode::Number),
            "NumberAndPotential" => Some(ScoringMode::NumberAndPotential),
            _ => None,
        }
    }
}

impl BoardScorer for ScoringMode {
    fn score(&self, board: &Board, perspective: Color) -> f64 {
        match self {
            ScoringMode::Number => MaterialScorer.score(board, perspective),
            ScoringMode::NumberAndPotential => PotentialScorer.score(board, perspective),
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
struct MaterialTally {
    pawns: [f64; 2],
    queens: [f64; 2],
}

impl MaterialTally {
    fn count(board: &Board, advancement_bonus: f64) -> Self {
        let mut tally = Self::default();
        for (square, cell) in board.squares() {
            match cell {
                Cell::Empty => {}
                Cell::LightPawn => {
                    tally.pawns[Color::Light.index()] +=
                        1.0 + advancement_bonus * f64::from(7 - square.x);
                }
                Cell::DarkPawn => {
                    tally.pawns[Color::Dark.index()] += 1.0 + advancement_bonus * f64::from(square.x);
                }
                Cell::LightQueen => tally.queens[Color::Light.index()] += 1.0,
                Cell::DarkQueen => tally.queens[Color::Dark.index()] += 1.0,
            }
        }
        tally
    }

    fn ratio(&self, perspective: Color, queen_weight: f64) -> f64 {
        let own = perspective.index();
        let other = perspective.opposite().index();

        if self.pawns[own] + self.queens[own] == 0.0 {
            return NO_MATERIAL_SCORE;
        }
        if self.pawns[other] + self.queens[other] == 0.0 {
            return 0.0;
        }
        (self.pawns[other] + self.queens[other] * queen_weight)
            / (self.pawns[own] + self.queens[own] * queen_weight)
    }
}

#[cfg(test)]
mod tests {
    use super::{BoardScorer, MaterialScorer, PotentialScorer, ScoringMode, NO_MATERIAL_SCORE};
    use crate::game_state::board::Board;
    use crate::game_state::checkers_types::{Cell, Color, Square};

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn starting_position_is_balanced() {
        let board = Board::new_game();
        for mode in [ScoringMode::Number, ScoringMode::NumberAndPotential] {
            assert_close(mode.score(&board, Color::Light), 1.0);
            assert_close(mode.score(&board, Color::Dark), 1.0);
        }
    }

    #[test]
    fn sentinels_for_missing_material() {
        let mut board = Board::new_empty();
        board.set(Square::new(3, 2), Cell::LightQueen);
        board.set(Square::new(6, 1), Cell::LightPawn);

        for mode in [ScoringMode::Number, ScoringMode::NumberAndPotential] {
            assert_eq!(mode.score(&board, Color::Light), 0.0);
            assert_eq!(mode.score(&board, Color::Dark), NO_MATERIAL_SCORE);
        }
    }

    #[test]
    fn empty_board_counts_as_no_material_for_perspective() {
        assert_eq!(
            MaterialScorer.score(&Board::new_empty(), Color::Light),
            NO_MATERIAL_SCORE
        );
    }

    #[test]
    fn queens_weigh_four_in_basic_mode() {
        let mut board = Board::new_empty();
        board.set(Square::new(0, 1), Cell::DarkQueen);
        board.set(Square::new(7, 0), Cell::LightPawn);
        board.set(Square::new(7, 2), Cell::LightPawn);

        assert_close(MaterialScorer.score(&board, Color::Light), 4.0 / 2.0);
        assert_close(MaterialScorer.score(&board, Color::Dark), 2.0 / 4.0);
    }

    #[test]
    fn potential_mode_rewards_advanced_pawns() {
        let mut board = Board::new_empty();
        board.set(Square::new(2, 1), Cell::LightPawn);
        board.set(Square::new(0, 1), Cell::DarkPawn);

        // light: 1 + 0.05 * 5, dark: 1 + 0.05 * 0
        assert_close(PotentialScorer.score(&board, Color::Light), 1.0 / 1.25);
        assert_close(PotentialScorer.score(&board, Color::Dark), 1.25);
    }

    #[test]
    fn scoring_mode_parse_rejects_unknown_values() {
        assert_eq!(ScoringMode::parse("Number"), Some(ScoringMode::Number));
        assert_eq!(
            ScoringMode::parse("NumberAndPotential"),
            Some(ScoringMode::NumberAndPotential)
        );
        assert_eq!(ScoringMode::parse("Neural"), None);
    }
}
