//! Game configuration.

use crate::opponents::StrategyKind;
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

/// Settings for a play session, usually read from a TOML file.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct GameConfig {
    /// Opponent to play against.
    #[serde(default)]
    strategy: StrategyKind,

    /// RNG seed for the random opponent.
    #[serde(default)]
    seed: Option<u64>,

    /// Pause before the opponent answers in the terminal UI.
    #[serde(default = "default_opponent_delay_ms")]
    opponent_delay_ms: u64,

    /// Where the terminal UI writes its log.
    #[serde(default = "default_log_file")]
    log_file: PathBuf,
}

fn default_opponent_delay_ms() -> u64 {
    400
}

fn default_log_file() -> PathBuf {
    PathBuf::from("tictactoe_vs_ai.log")
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            strategy: StrategyKind::default(),
            seed: None,
            opponent_delay_ms: default_opponent_delay_ms(),
            log_file: default_log_file(),
        }
    }
}

impl GameConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(strategy = %config.strategy, "Config loaded successfully");
        Ok(config)
    }

    /// Reads `path` if it exists, otherwise falls back to defaults.
    ///
    /// A file that exists but cannot be read or parsed is still an error.
    #[instrument(skip(path))]
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) if path.exists() => Self::from_file(path),
            Some(path) => {
                debug!(path = %path.display(), "No config file, using defaults");
                Ok(Self::default())
            }
            None => Ok(Self::default()),
        }
    }

    /// Applies command-line overrides.
    pub fn with_overrides(mut self, strategy: Option<StrategyKind>, seed: Option<u64>) -> Self {
        if let Some(strategy) = strategy {
            self.strategy = strategy;
        }
        if seed.is_some() {
            self.seed = seed;
        }
        self
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error at the caller's location.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
