//! Runner configuration from environment variables.
//!
//! - `PAIRS_SEED`: RNG seed for the first deal (default: from the system clock)
//! - `PAIRS_MUTE`: set to "1" or "true" to silence the terminal bell
//! - `PAIRS_LOG_PATH`: log file (default: "tui-pairs.log")
//! - `RUST_LOG`: tracing filter directive (default: "info")
//!
//! Unparseable values fall back to the defaults.

use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

pub const DEFAULT_LOG_PATH: &str = "tui-pairs.log";
pub const DEFAULT_LOG_FILTER: &str = "info";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub seed: u32,
    pub muted: bool,
    pub log_path: PathBuf,
    pub log_filter: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            seed: clock_seed(),
            muted: false,
            log_path: PathBuf::from(DEFAULT_LOG_PATH),
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup (the environment in production, a map in tests).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let non_empty = |key: &str| {
            lookup(key)
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
        };

        let seed = non_empty("PAIRS_SEED")
            .and_then(|s| s.parse().ok())
            .unwrap_or_else(clock_seed);

        let muted = non_empty("PAIRS_MUTE")
            .map(|v| v == "1" || v.to_lowercase() == "true")
            .unwrap_or(false);

        let log_path = non_empty("PAIRS_LOG_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_LOG_PATH));

        let log_filter = non_empty("RUST_LOG").unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());

        Self {
            seed,
            muted,
            log_path,
            log_filter,
        }
    }
}

fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ (d.as_secs() as u32))
        .unwrap_or(1)
}
