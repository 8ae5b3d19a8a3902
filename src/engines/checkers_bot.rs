//! Caller-facing bot: best-turn search and move listing for display.
//!
//! The bot reads the live board through a `BoardSource`, never mutates it,
//! and keeps the last listed moves readable so a UI can highlight them.

use log::debug;

use crate::engines::bot_config::BotConfig;
use crate::errors::{BotError, BotResult};
use crate::game_state::board::BoardSource;
use crate::game_state::checkers_types::{Color, Square};
use crate::move_generation::move_generator::{generate_color_moves, generate_piece_moves};
use crate::move_generation::move_shuffler::{MoveShuffler, SeedPolicy};
use crate::moves::checkers_move::{Move, MoveList, Turn};
use crate::search::minimax::{SearchStats, Searcher};
use crate::search::turn_builder::TurnBuilder;

pub struct CheckersBot<B: BoardSource> {
    board: B,
    config: BotConfig,
    max_depth: usize,
    shuffler: MoveShuffler,
    turn_builder: TurnBuilder,
    last_list: MoveList,
    last_stats: SearchStats,
}

impl<B: BoardSource> CheckersBot<B> {
    pub fn new(board: B, config: BotConfig) -> Self {
        let policy = config.seed_policy();
        Self::with_seed_policy(board, config, policy)
    }

    /// Same as `new` but with an explicit shuffling seed, overriding
    /// `Bot.NoRandom`.
    pub fn with_seed_policy(board: B, config: BotConfig, policy: SeedPolicy) -> Self {
        let max_depth = config.max_depth;
        Self {
            board,
            config,
            max_depth,
            shuffler: MoveShuffler::new(policy),
            turn_builder: TurnBuilder::new(),
            last_list: MoveList::default(),
            last_stats: SearchStats::default(),
        }
    }

    #[inline]
    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    #[inline]
    pub fn set_max_depth(&mut self, max_depth: usize) {
        self.max_depth = max_depth;
    }

    #[inline]
    pub fn config(&self) -> &BotConfig {
        &self.config
    }

    #[inline]
    pub fn board_source(&self) -> &B {
        &self.board
    }

    /// Moves from the last `list_moves` / `list_moves_at` call.
    #[inline]
    pub fn last_moves(&self) -> &[Move] {
        &self.last_list.moves
    }

    /// Whether the last listed moves are forced captures.
    #[inline]
    pub fn mandatory_capture(&self) -> bool {
        self.last_list.mandatory_capture
    }

    #[inline]
    pub fn last_stats(&self) -> SearchStats {
        self.last_stats
    }

    /// Best complete turn for `color` on the current board.
    ///
    /// Returns an empty turn when `color` has no legal move.
    pub fn find_best_turns(&mut self, color: Color) -> Turn {
        let board = self.board.snapshot();
        self.shuffler.reset();

        let search_config = self.config.search_config(self.max_depth);
        let mut searcher = Searcher::new(search_config, color, &mut self.shuffler);
        let turn = self.turn_builder.find_best_turn(&mut searcher, &board);
        self.last_stats = searcher.stats();

        debug!(
            "search color={color:?} depth={} pruning={} nodes={} prunes={} best_score={} turn_len={}",
            self.max_depth,
            search_config.pruning,
            self.last_stats.nodes,
            self.last_stats.prunes,
            self.last_stats.best_score,
            turn.len()
        );

        turn
    }

    /// All legal moves for `color`, in shuffled order.
    pub fn list_moves(&mut self, color: Color) -> &MoveList {
        let board = self.board.snapshot();
        let mut list = generate_color_moves(&board, color);
        self.shuffler.shuffle(&mut list.moves);
        self.last_list = list;
        &self.last_list
    }

    /// Legal moves of the piece on `(x, y)`, ignoring other pieces' captures.
    pub fn list_moves_at(&mut self, x: usize, y: usize) -> BotResult<&MoveList> {
        let board = self.board.snapshot();
        if board.cell_at(x, y)?.is_empty() {
            return Err(BotError::InvalidPosition {
                x,
                y,
                reason: "no piece on this square",
            });
        }
        self.last_list = generate_piece_moves(&board, Square::new(x as u8, y as u8));
        Ok(&self.last_list)
    }
}
