//! Error types shared by the board model, configuration and bot facade.
//!
//! Search itself never fails: boards are validated when they are built, so
//! only the entry points that accept raw caller input return `BotResult`.

/// Represents all possible error types surfaced by the checkers bot.
#[derive(thiserror::Error, Debug)]
pub enum BotError {
    /// Coordinates outside the board, or a cell that cannot be queried.
    #[error("invalid position ({x}, {y}): {reason}")]
    InvalidPosition {
        x: usize,
        y: usize,
        reason: &'static str,
    },

    /// A snapshot that is not 8x8 or holds an unknown cell code.
    #[error("invalid board state: {0}")]
    InvalidBoardState(String),

    /// A settings document that is structurally unusable.
    #[error("invalid settings: {0}")]
    Settings(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

pub type BotResult<T> = Result<T, BotError>;
