//! Configuration system for ChainForge.
//!
//! Load move selector configuration from TOML or YAML to control selection
//! order and doability policy without code changes.
//!
//! # Examples
//!
//! ```
//! use chainforge_config::{MoveSelectorConfig, SelectionOrderConfig};
//!
//! let config = MoveSelectorConfig::from_toml_str(r#"
//!     [chained_change]
//!     selection_order = "shuffled"
//!     random_seed = 7
//! "#).unwrap();
//!
//! let selector = config.chained_change;
//! assert_eq!(selector.selection_order, SelectionOrderConfig::Shuffled);
//! assert!(!selector.allow_no_op_moves);
//! ```
//!
//! Use default config when file is missing:
//!
//! ```
//! use chainforge_config::MoveSelectorConfig;
//!
//! let config = MoveSelectorConfig::load("moves.toml").unwrap_or_default();
//! assert!(!config.chained_change.allow_unassigned);
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Root move selector configuration.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct MoveSelectorConfig {
    /// Chained change move selector settings.
    #[serde(default)]
    pub chained_change: ChainedChangeMoveSelectorConfig,
}

impl MoveSelectorConfig {
    /// Creates a new default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a file, picking the format by extension.
    ///
    /// `.yaml` and `.yml` are parsed as YAML, everything else as TOML.
    ///
    /// # Errors
    ///
    /// Returns error if the file doesn't exist or fails to parse or validate.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        match path.extension().and_then(|e| e.to_str()) {
            Some("yaml") | Some("yml") => Self::from_yaml_file(path),
            _ => Self::from_toml_file(path),
        }
    }

    /// Loads configuration from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads configuration from a YAML file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    /// Parses configuration from a YAML string.
    pub fn from_yaml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks cross-field constraints serde cannot express.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.chained_change.validate()
    }
}

/// Chained change move selector configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct ChainedChangeMoveSelectorConfig {
    /// Order in which (entity, value) pairs are generated.
    #[serde(default)]
    pub selection_order: SelectionOrderConfig,

    /// Whether a move to the value the entity already trails is doable.
    ///
    /// When false, doability rejects moves whose target equals the entity's
    /// current value.
    #[serde(default)]
    pub allow_no_op_moves: bool,

    /// Whether moves that unassign an entity are generated.
    ///
    /// Only has an effect for variables that allow unassigned entities.
    #[serde(default)]
    pub allow_unassigned: bool,

    /// Seed for shuffled selection; required for reproducible runs.
    #[serde(default)]
    pub random_seed: Option<u64>,
}

impl ChainedChangeMoveSelectorConfig {
    /// Creates a new default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the selection order.
    pub fn with_selection_order(mut self, order: SelectionOrderConfig) -> Self {
        self.selection_order = order;
        self
    }

    /// Sets whether no-op moves are doable.
    pub fn with_allow_no_op_moves(mut self, allow: bool) -> Self {
        self.allow_no_op_moves = allow;
        self
    }

    /// Sets whether unassigning moves are generated.
    pub fn with_allow_unassigned(mut self, allow: bool) -> Self {
        self.allow_unassigned = allow;
        self
    }

    /// Sets the random seed.
    pub fn with_random_seed(mut self, seed: u64) -> Self {
        self.random_seed = Some(seed);
        self
    }

    /// Checks cross-field constraints.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.random_seed.is_some() && self.selection_order == SelectionOrderConfig::Original {
            return Err(ConfigError::Invalid(
                "random_seed has no effect with selection_order = \"original\"".to_string(),
            ));
        }
        Ok(())
    }
}

/// Selection order of generated moves.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SelectionOrderConfig {
    /// Entities in index order, values anchors first then entities.
    #[default]
    Original,
    /// All moves shuffled once per iteration.
    Shuffled,
}
