//! Configuration types for strategy selection

use serde::{Deserialize, Serialize};
use std::path::Path;
use std::str::FromStr;

use crate::ConfigError;

/// Placement strategy configuration
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StrategyConfig {
    /// Strategy used to order candidate nodes
    pub strategy: StrategyKind,
}

impl StrategyConfig {
    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Parse configuration from a TOML document
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }
}

/// Placement strategy
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StrategyKind {
    /// Least loaded feasible node first
    #[default]
    Spread,
    /// Most loaded feasible node first
    Binpack,
}

impl StrategyKind {
    /// Name of the strategy as used in configuration
    pub fn as_str(&self) -> &'static str {
        match self {
            StrategyKind::Spread => "spread",
            StrategyKind::Binpack => "binpack",
        }
    }
}

impl std::fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StrategyKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "spread" => Ok(StrategyKind::Spread),
            "binpack" => Ok(StrategyKind::Binpack),
            other => Err(ConfigError::Parse(format!("unknown strategy: {}", other))),
        }
    }
}
