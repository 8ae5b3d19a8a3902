//! Command-line front end: suggest a turn for a board diagram.
//!
//! Run with:
//! `cargo run --release -- --start --color light`
//! `cargo run --release -- --settings settings.json --color dark < board.txt`
//!
//! Logging goes to stderr; set `RUST_LOG=debug` for per-search statistics.

use std::io::{self, Read};

use checkers_bot::engines::bot_config::{BotConfig, Settings};
use checkers_bot::engines::checkers_bot::CheckersBot;
use checkers_bot::game_state::board::Board;
use checkers_bot::game_state::checkers_types::Color;
use checkers_bot::utils::board_text::{parse_board, render_board};
use log::info;

struct CliArgs {
    settings: Option<String>,
    color: Color,
    depth: Option<usize>,
    start: bool,
}

fn parse_args() -> Result<CliArgs, String> {
    let mut args = CliArgs {
        settings: None,
        color: Color::Light,
        depth: None,
        start: false,
    };

    let mut iter = std::env::args().skip(1);
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--settings" => {
                args.settings = Some(iter.next().ok_or("--settings needs a path")?);
            }
            "--color" => {
                let value = iter.next().ok_or("--color needs light or dark")?;
                args.color = match value.to_ascii_lowercase().as_str() {
                    "light" | "white" => Color::Light,
                    "dark" | "black" => Color::Dark,
                    other => return Err(format!("unknown color '{other}'")),
                };
            }
            "--depth" => {
                let value = iter.next().ok_or("--depth needs a number")?;
                let depth = value
                    .parse::<usize>()
                    .map_err(|_| format!("invalid depth '{value}'"))?;
                args.depth = Some(depth);
            }
            "--start" => args.start = true,
            other => return Err(format!("unknown argument '{other}'")),
        }
    }

    Ok(args)
}

fn main() -> Result<(), String> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Stderr)
        .init();

    let args = parse_args()?;

    let config = match &args.settings {
        Some(path) => {
            let settings = Settings::load(path).map_err(|e| e.to_string())?;
            BotConfig::from_settings(&settings)
        }
        None => BotConfig::default(),
    };

    let board = if args.start {
        Board::new_game()
    } else {
        let mut text = String::new();
        io::stdin()
            .read_to_string(&mut text)
            .map_err(|e| format!("failed to read board from stdin: {e}"))?;
        parse_board(&text).map_err(|e| e.to_string())?
    };

    let depth = args.depth.unwrap_or_else(|| config.level_for(args.color));
    let mut bot = CheckersBot::new(board, config);
    bot.set_max_depth(depth);

    info!("searching {:?} at depth {depth}\n{}", args.color, render_board(&board));
    let turn = bot.find_best_turns(args.color);
    let stats = bot.last_stats();
    info!("nodes {} prunes {} score {}", stats.nodes, stats.prunes, stats.best_score);

    if turn.is_empty() {
        println!("no legal moves");
    }
    for mv in &turn {
        println!("{mv}");
    }

    Ok(())
}
