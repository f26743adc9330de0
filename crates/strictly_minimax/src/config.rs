//! Search configuration.

use crate::error::ConfigError;
use crate::search::{AlphaBeta, Memoized, Minimax, Search};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Available search strategies.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum Algorithm {
    /// Full-tree minimax.
    Minimax,
    /// Minimax with alpha-beta pruning.
    #[default]
    AlphaBeta,
    /// Full-tree minimax with a transposition table.
    Memoized,
}

impl Algorithm {
    /// Builds a fresh searcher for this strategy.
    pub fn searcher(self) -> Box<dyn Search> {
        match self {
            Algorithm::Minimax => Box::new(Minimax::new()),
            Algorithm::AlphaBeta => Box::new(AlphaBeta::new()),
            Algorithm::Memoized => Box::new(Memoized::new()),
        }
    }
}

/// Configuration for the search engine.
#[derive(Debug, Clone, Default, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Strategy used to pick moves.
    #[serde(default)]
    algorithm: Algorithm,
}

impl SearchConfig {
    /// Creates a configuration using `algorithm`.
    pub fn new(algorithm: Algorithm) -> Self {
        Self { algorithm }
    }

    /// Returns a copy with the algorithm replaced.
    pub fn with_algorithm(mut self, algorithm: Algorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    /// Loads configuration from TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(algorithm = %config.algorithm, "Config loaded successfully");
        Ok(config)
    }

    /// Builds the configured searcher.
    pub fn searcher(&self) -> Box<dyn Search> {
        self.algorithm.searcher()
    }
}
