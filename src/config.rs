//! Runtime configuration from environment variables.

use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use tui_frogger::types::{DEFAULT_FPS, DEFAULT_TPS};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Seed for entity speeds.
    pub seed: u32,
    /// Rendered frames per second.
    pub fps: u32,
    /// World updates per second.
    pub tps: u32,
    /// Where to write logs. Logging is off when unset, since stdout is the
    /// game screen.
    pub log_path: Option<PathBuf>,
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key/value source. Missing or unparseable values fall
    /// back to defaults.
    pub fn from_lookup(get: impl Fn(&str) -> Option<String>) -> Self {
        let number = |key: &str| -> Option<u32> {
            get(key)
                .and_then(|s| s.trim().parse().ok())
                .filter(|&v: &u32| v > 0)
        };

        let seed = get("FROGGER_SEED")
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or_else(clock_seed);

        let log_path = get("FROGGER_LOG_PATH")
            .map(|s| s.trim().to_string())
            .and_then(|s| if s.is_empty() { None } else { Some(PathBuf::from(s)) });

        Self {
            seed,
            fps: number("FROGGER_FPS").unwrap_or(DEFAULT_FPS),
            tps: number("FROGGER_TPS").unwrap_or(DEFAULT_TPS),
            log_path,
        }
    }
}

fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ (d.as_secs() as u32))
        .unwrap_or(1)
}
