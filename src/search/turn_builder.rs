//! Root search that returns a whole turn.
//!
//! A capture chain is one turn but each jump is searched as its own recursive
//! step. Every step gets a node in a flat arena recording its best move and
//! the index of the node that continues the chain, so the chosen turn can be
//! read back as a linked list starting at node 0 once the recursion unwinds.

use log::trace;

use crate::game_state::board::Board;
use crate::game_state::checkers_types::{Color, Square};
use crate::move_generation::legal_move_apply::apply_move;
use crate::move_generation::move_generator::generate_piece_moves;
use crate::moves::checkers_move::{Move, Turn};
use crate::search::minimax::{Searcher, ALPHA_FLOOR, BETA_CEILING};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct SearchNode {
    best_move: Option<Move>,
    next: Option<usize>,
}

/// Arena of chain-step nodes, reused across searches.
#[derive(Debug, Default)]
pub struct TurnBuilder {
    nodes: Vec<SearchNode>,
}

impl TurnBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Best complete turn for the searcher's root side; empty when that side
    /// has no legal move.
    pub fn find_best_turn(&mut self, searcher: &mut Searcher<'_>, board: &Board) -> Turn {
        self.nodes.clear();
        let side = searcher.root();
        let best = self.first_turn(searcher, board, side, None, ALPHA_FLOOR);
        searcher.stats_mut().best_score = best;
        self.reconstruct()
    }

    /// Number of chain-step nodes created by the last search.
    #[inline]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    fn first_turn(
        &mut self,
        searcher: &mut Searcher<'_>,
        board: &Board,
        side: Color,
        chain: Option<Square>,
        alpha: f64,
    ) -> f64 {
        let state = self.nodes.len();
        self.nodes.push(SearchNode::default());

        let list = match chain {
            None => searcher.shuffled_moves(board, side),
            Some(piece) => {
                let follow = generate_piece_moves(board, piece);
                if !follow.mandatory_capture {
                    // Chain finished: the opponent replies.
                    return searcher.evaluate(board, side.opposite(), 0, alpha, BETA_CEILING, None);
                }
                follow
            }
        };

        let mut best_score = ALPHA_FLOOR;
        for mv in list.moves {
            let next = apply_move(board, mv);
            let child = self.nodes.len();
            let score = if list.mandatory_capture {
                self.first_turn(searcher, &next, side, Some(mv.to), best_score)
            } else {
                searcher.evaluate(&next, side.opposite(), 0, best_score, BETA_CEILING, None)
            };

            if chain.is_none() {
                trace!("root candidate {mv} scored {score}");
            }

            if score > best_score {
                best_score = score;
                self.nodes[state] = SearchNode {
                    best_move: Some(mv),
                    next: list.mandatory_capture.then_some(child),
                };
            }
        }

        best_score
    }

    fn reconstruct(&self) -> Turn {
        let mut turn = Turn::new();
        let mut cursor = Some(0usize);
        while let Some(state) = cursor {
            let Some(node) = self.nodes.get(state) else {
                break;
            };
            let Some(mv) = node.best_move else {
                break;
            };
            turn.push(mv);
            cursor = node.next;
        }
        turn
    }
}
