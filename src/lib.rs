//! Crate root module declarations for the checkers bot.
//!
//! This file exposes the board model, move generation, search, the bot facade
//! and text utilities so the binary, benches and embedding applications can
//! import stable module paths.

pub mod errors;

pub mod game_state {
    pub mod board;
    pub mod checkers_rules;
    pub mod checkers_types;
}

pub mod moves {
    pub mod checkers_move;
}

pub mod move_generation {
    pub mod legal_move_apply;
    pub mod legal_moves_pawn;
    pub mod legal_moves_queen;
    pub mod move_generator;
    pub mod move_shuffler;
    pub mod perft;
}

pub mod search {
    pub mod board_scoring;
    pub mod minimax;
    pub mod turn_builder;
}

pub mod engines {
    pub mod bot_config;
    pub mod checkers_bot;
}

pub mod utils {
    pub mod board_text;
    pub mod random_playout;
}
