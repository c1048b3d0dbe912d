//! Runtime configuration for hosts of the rules engine.
//!
//! Values come from `DUO_CHESS_*` environment variables. Unparseable values
//! are logged and replaced by the default.

use std::str::FromStr;

use crate::engines::engine_difficulty::Difficulty;
use crate::game_state::chess_types::CastlingPolicy;

pub const ENV_CASTLING: &str = "DUO_CHESS_CASTLING";
pub const ENV_DIFFICULTY: &str = "DUO_CHESS_DIFFICULTY";
pub const ENV_MAX_PLIES: &str = "DUO_CHESS_MAX_PLIES";
pub const ENV_SEED: &str = "DUO_CHESS_SEED";
pub const ENV_LOG: &str = "DUO_CHESS_LOG";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub castling_policy: CastlingPolicy,
    pub cpu_difficulty: Difficulty,
    /// Cap for self-play, which has no draw detection of its own.
    pub max_plies: u16,
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            castling_policy: CastlingPolicy::Simplified,
            cpu_difficulty: Difficulty::Intermediate,
            max_plies: 200,
            seed: None,
        }
    }
}

impl GameConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        Self {
            castling_policy: parse_or(&lookup, ENV_CASTLING, defaults.castling_policy),
            cpu_difficulty: parse_or(&lookup, ENV_DIFFICULTY, defaults.cpu_difficulty),
            max_plies: parse_or(&lookup, ENV_MAX_PLIES, defaults.max_plies),
            seed: lookup(ENV_SEED).and_then(|raw| match raw.trim().parse::<u64>() {
                Ok(seed) => Some(seed),
                Err(_) => {
                    log::warn!("ignoring {ENV_SEED}={raw}: not an unsigned integer");
                    None
                }
            }),
        }
    }
}

fn parse_or<T, F>(lookup: &F, key: &str, default: T) -> T
where
    T: FromStr,
    F: Fn(&str) -> Option<String>,
{
    let Some(raw) = lookup(key) else {
        return default;
    };
    match raw.trim().parse::<T>() {
        Ok(value) => value,
        Err(_) => {
            log::warn!("ignoring {key}={raw}: using default");
            default
        }
    }
}

impl FromStr for CastlingPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "simplified" => Ok(CastlingPolicy::Simplified),
            "fully-legal" | "fully_legal" | "full" => Ok(CastlingPolicy::FullyLegal),
            other => Err(format!("unknown castling policy: {other}")),
        }
    }
}
