//! Bot configuration read from a JSON settings document.
//!
//! Lookups are string keyed (`section`, `key`) and typed. Heuristic options
//! that hold an unrecognised value fall back to their defaults with a warning
//! instead of failing, since they never affect move legality.

use std::path::Path;

use log::warn;
use serde_json::Value;

use crate::errors::{BotError, BotResult};
use crate::game_state::checkers_types::Color;
use crate::move_generation::move_shuffler::SeedPolicy;
use crate::search::board_scoring::ScoringMode;
use crate::search::minimax::SearchConfig;

pub const DEFAULT_MAX_DEPTH: usize = 3;

/// Parsed settings document.
#[derive(Debug, Clone, Default)]
pub struct Settings {
    root: Value,
}

impl Settings {
    pub fn from_json_str(json: &str) -> BotResult<Self> {
        let root: Value = serde_json::from_str(json)?;
        if !root.is_object() {
            return Err(BotError::Settings(
                "top level of the settings document must be an object".to_owned(),
            ));
        }
        Ok(Self { root })
    }

    pub fn load(path: impl AsRef<Path>) -> BotResult<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    /// Raw value at `section.key`, or at top level `key` when `section` is empty.
    pub fn get(&self, section: &str, key: &str) -> Option<&Value> {
        if section.is_empty() {
            self.root.get(key)
        } else {
            self.root.get(section)?.get(key)
        }
    }

    pub fn get_bool(&self, section: &str, key: &str) -> Option<bool> {
        self.get(section, key)?.as_bool()
    }

    pub fn get_str(&self, section: &str, key: &str) -> Option<&str> {
        self.get(section, key)?.as_str()
    }

    pub fn get_u64(&self, section: &str, key: &str) -> Option<u64> {
        self.get(section, key)?.as_u64()
    }
}

/// Search-effort setting: `O0` searches exhaustively, every other level
/// enables alpha-beta pruning.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Optimization {
    O0,
    Pruning(String),
}

impl Default for Optimization {
    fn default() -> Self {
        Optimization::Pruning("O1".to_owned())
    }
}

impl Optimization {
    pub fn parse(value: &str) -> Self {
        if value == "O0" {
            Optimization::O0
        } else {
            Optimization::Pruning(value.to_owned())
        }
    }

    #[inline]
    pub fn pruning_enabled(&self) -> bool {
        !matches!(self, Optimization::O0)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct BotConfig {
    pub no_random: bool,
    pub scoring: ScoringMode,
    pub optimization: Optimization,
    pub max_depth: usize,
    pub white_level: Option<usize>,
    pub black_level: Option<usize>,
}

impl Default for BotConfig {
    fn default() -> Self {
        Self {
            no_random: false,
            scoring: ScoringMode::default(),
            optimization: Optimization::default(),
            max_depth: DEFAULT_MAX_DEPTH,
            white_level: None,
            black_level: None,
        }
    }
}

impl BotConfig {
    pub fn from_settings(settings: &Settings) -> Self {
        let defaults = Self::default();

        let no_random = read_or_warn(
            settings.get("Bot", "NoRandom"),
            Value::as_bool,
            "Bot.NoRandom",
            defaults.no_random,
        );

        let scoring = match settings.get_str("Bot", "BotScoringType") {
            Some(raw) => ScoringMode::parse(raw).unwrap_or_else(|| {
                warn!("unknown Bot.BotScoringType '{raw}', using {:?}", defaults.scoring);
                defaults.scoring
            }),
            None => defaults.scoring,
        };

        let optimization = settings
            .get_str("Bot", "Optimization")
            .map(Optimization::parse)
            .unwrap_or(defaults.optimization);

        let max_depth = read_or_warn(
            settings.get("", "MaxDepth"),
            as_depth,
            "MaxDepth",
            defaults.max_depth,
        );

        Self {
            no_random,
            scoring,
            optimization,
            max_depth,
            white_level: settings.get("Bot", "WhiteBotLevel").and_then(as_depth),
            black_level: settings.get("Bot", "BlackBotLevel").and_then(as_depth),
        }
    }

    #[inline]
    pub fn seed_policy(&self) -> SeedPolicy {
        if self.no_random {
            SeedPolicy::Fixed(0)
        } else {
            SeedPolicy::Clock
        }
    }

    /// Search depth for the bot playing `color`.
    pub fn level_for(&self, color: Color) -> usize {
        let level = match color {
            Color::Light => self.white_level,
            Color::Dark => self.black_level,
        };
        level.unwrap_or(self.max_depth)
    }

    pub fn search_config(&self, max_depth: usize) -> SearchConfig {
        SearchConfig {
            max_depth,
            scoring: self.scoring,
            pruning: self.optimization.pruning_enabled(),
        }
    }
}

fn as_depth(value: &Value) -> Option<usize> {
    value.as_u64().and_then(|v| usize::try_from(v).ok())
}

fn read_or_warn<T: std::fmt::Debug>(
    value: Option<&Value>,
    convert: impl Fn(&Value) -> Option<T>,
    name: &str,
    default: T,
) -> T {
    match value {
        None => default,
        Some(raw) => convert(raw).unwrap_or_else(|| {
            warn!("unusable {name} value {raw}, using {default:?}");
            default
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::{BotConfig, Optimization, Settings, DEFAULT_MAX_DEPTH};
    use crate::errors::BotError;
    use crate::game_state::checkers_types::Color;
    use crate::move_generation::move_shuffler::SeedPolicy;
    use crate::search::board_scoring::ScoringMode;

    const SETTINGS: &str = r#"{
        "WindowSize": { "Width": 0, "Hight": 0 },
        "Bot": {
            "IsWhiteBot": false,
            "IsBlackBot": true,
            "WhiteBotLevel": 2,
            "BlackBotLevel": 5,
            "BotScoringType": "NumberAndPotential",
            "NoRandom": true,
            "Optimization": "O0"
        },
        "MaxDepth": 4
    }"#;

    #[test]
    fn reads_typed_bot_options() {
        let settings = Settings::from_json_str(SETTINGS).expect("settings should parse");
        let config = BotConfig::from_settings(&settings);

        assert!(config.no_random);
        assert_eq!(config.seed_policy(), SeedPolicy::Fixed(0));
        assert_eq!(config.scoring, ScoringMode::NumberAndPotential);
        assert_eq!(config.optimization, Optimization::O0);
        assert!(!config.search_config(3).pruning);
        assert_eq!(config.max_depth, 4);
        assert_eq!(config.level_for(Color::Light), 2);
        assert_eq!(config.level_for(Color::Dark), 5);
    }

    #[test]
    fn unknown_values_fall_back_to_defaults() {
        let settings = Settings::from_json_str(
            r#"{ "Bot": { "BotScoringType": "Neural", "Optimization": "O3", "NoRandom": "yes" } }"#,
        )
        .expect("settings should parse");
        let config = BotConfig::from_settings(&settings);

        assert_eq!(config.scoring, ScoringMode::Number);
        assert!(config.optimization.pruning_enabled());
        assert!(!config.no_random);
        assert_eq!(config.seed_policy(), SeedPolicy::Clock);
        assert_eq!(config.max_depth, DEFAULT_MAX_DEPTH);
        assert_eq!(config.level_for(Color::Dark), DEFAULT_MAX_DEPTH);
    }

    #[test]
    fn string_keyed_lookups() {
        let settings = Settings::from_json_str(SETTINGS).expect("settings should parse");
        assert_eq!(settings.get_bool("Bot", "IsBlackBot"), Some(true));
        assert_eq!(settings.get_str("Bot", "Optimization"), Some("O0"));
        assert_eq!(settings.get_u64("", "MaxDepth"), Some(4));
        assert_eq!(settings.get_u64("Bot", "Missing"), None);
        assert_eq!(settings.get_bool("Nope", "NoRandom"), None);
    }

    #[test]
    fn rejects_malformed_documents() {
        assert!(matches!(
            Settings::from_json_str("{ not json"),
            Err(BotError::Json(_))
        ));
        assert!(matches!(
            Settings::from_json_str("[1, 2]"),
            Err(BotError::Settings(_))
        ));
    }

    #[test]
    fn load_reports_missing_files() {
        assert!(matches!(
            Settings::load("/definitely/not/here/settings.json"),
            Err(BotError::Io(_))
        ));
    }
}
