//! Depth-limited minimax with optional alpha-beta pruning.
//!
//! Plies alternate strictly with depth: even depths belong to the opponent of
//! the side that started the search (minimising), odd depths to that side
//! (maximising). A capture chain stays at the same depth and keeps the side to
//! move until the capturing piece has nothing left to take.
//!
//! Leaves are scored from the opponent's perspective with a `BoardScorer`, so
//! the ratio grows as the searching side gets ahead and can be maximised.

use crate::game_state::board::Board;
use crate::game_state::checkers_types::{Color, Square};
use crate::move_generation::legal_move_apply::apply_move;
use crate::move_generation::move_generator::{generate_color_moves, generate_piece_moves};
use crate::move_generation::move_shuffler::MoveShuffler;
use crate::moves::checkers_move::MoveList;
use crate::search::board_scoring::{BoardScorer, ScoringMode, NO_MATERIAL_SCORE};

/// Below every reachable score.
pub const ALPHA_FLOOR: f64 = -1.0;

/// Above every reachable score.
pub const BETA_CEILING: f64 = NO_MATERIAL_SCORE + 1.0;

/// Offset applied to the value returned from a cut-off node. It makes a pruned
/// branch look slightly worse to the parent than an equal, fully searched one.
pub const PRUNE_NUDGE: f64 = 1.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchConfig {
    pub max_depth: usize,
    pub scoring: ScoringMode,
    pub pruning: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_depth: 3,
            scoring: ScoringMode::Number,
            pruning: true,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SearchStats {
    pub nodes: u64,
    pub prunes: u64,
    pub best_score: f64,
}

/// State shared by every node of one top-level search.
pub struct Searcher<'a> {
    config: SearchConfig,
    root: Color,
    shuffler: &'a mut MoveShuffler,
    stats: SearchStats,
}

impl<'a> Searcher<'a> {
    pub fn new(config: SearchConfig, root: Color, shuffler: &'a mut MoveShuffler) -> Self {
        Self {
            config,
            root,
            shuffler,
            stats: SearchStats::default(),
        }
    }

    #[inline]
    pub fn root(&self) -> Color {
        self.root
    }

    #[inline]
    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    #[inline]
    pub(crate) fn stats_mut(&mut self) -> &mut SearchStats {
        &mut self.stats
    }

    /// Side-wide move list in shuffled order.
    pub(crate) fn shuffled_moves(&mut self, board: &Board, side: Color) -> MoveList {
        let mut list = generate_color_moves(board, side);
        self.shuffler.shuffle(&mut list.moves);
        list
    }

    /// Minimax value of `board` with `side` to move at `depth`.
    ///
    /// `chain` names the piece that just captured and must keep capturing
    /// if it can; `None` means `side` starts a fresh turn.
    pub fn evaluate(
        &mut self,
        board: &Board,
        side: Color,
        depth: usize,
        mut alpha: f64,
        mut beta: f64,
        chain: Option<Square>,
    ) -> f64 {
        self.stats.nodes += 1;
        debug_assert_eq!(
            side == self.root,
            depth % 2 == 1,
            "side to move must follow depth parity"
        );

        if depth == self.config.max_depth {
            return self.config.scoring.score(board, self.root.opposite());
        }

        let list = match chain {
            Some(piece) => {
                let follow = generate_piece_moves(board, piece);
                if !follow.mandatory_capture {
                    return self.evaluate(board, side.opposite(), depth + 1, alpha, beta, None);
                }
                follow
            }
            None => self.shuffled_moves(board, side),
        };

        let maximizing = depth % 2 == 1;
        if list.is_empty() {
            // The side to move is stuck and loses.
            return if maximizing { 0.0 } else { NO_MATERIAL_SCORE };
        }

        let mut min_score = BETA_CEILING;
        let mut max_score = ALPHA_FLOOR;

        for mv in list.moves {
            let next = apply_move(board, mv);
            let score = if !list.mandatory_capture && chain.is_none() {
                self.evaluate(&next, side.opposite(), depth + 1, alpha, beta, None)
            } else {
                self.evaluate(&next, side, depth, alpha, beta, Some(mv.to))
            };

            min_score = min_score.min(score);
            max_score = max_score.max(score);

            if maximizing {
                alpha = alpha.max(max_score);
            } else {
                beta = beta.min(min_score);
            }

            if self.config.pruning && alpha >= beta {
                self.stats.prunes += 1;
                return if maximizing {
                    max_score + PRUNE_NUDGE
                } else {
                    min_score - PRUNE_NUDGE
                };
            }
        }

        if maximizing {
            max_score
        } else {
            min_score
        }
    }
}
