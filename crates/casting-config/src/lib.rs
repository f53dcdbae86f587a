//! Configuration system for the casting solver.
//!
//! Load solver configuration from TOML or YAML files to control seeding,
//! construction order and the repair budget without code changes.
//!
//! # Examples
//!
//! Load configuration from TOML string:
//!
//! ```
//! use casting_config::{ConstructionHeuristicType, SolverConfig};
//!
//! let config = SolverConfig::from_toml_str(r#"
//!     random_seed = 7
//!
//!     [construction]
//!     construction_heuristic_type = "first_fit"
//!
//!     [repair]
//!     attempts_per_role = 12
//! "#).unwrap();
//!
//! assert_eq!(config.random_seed, Some(7));
//! assert_eq!(
//!     config.construction.construction_heuristic_type,
//!     ConstructionHeuristicType::FirstFit
//! );
//! assert_eq!(config.repair.attempt_budget(10), 120);
//! ```
//!
//! Use default config when file is missing:
//!
//! ```
//! use casting_config::SolverConfig;
//!
//! let config = SolverConfig::load("casting.toml").unwrap_or_default();
//! // Proceeds with defaults if file doesn't exist
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Upper bound on `attempts_per_role`; larger values only burn time once the
/// repair loop has plateaued.
pub const MAX_ATTEMPTS_PER_ROLE: u64 = 1_000_000;

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

/// Main solver configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct SolverConfig {
    /// Environment mode affecting reproducibility.
    #[serde(default)]
    pub environment_mode: EnvironmentMode,

    /// Random seed for reproducible results.
    #[serde(default)]
    pub random_seed: Option<u64>,

    /// Greedy construction configuration.
    #[serde(default)]
    pub construction: ConstructionConfig,

    /// Local-search repair configuration.
    #[serde(default)]
    pub repair: RepairConfig,
}

impl SolverConfig {
    /// Creates a new default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a file, choosing the format by extension.
    ///
    /// `.yaml` and `.yml` files are read as YAML, anything else as TOML.
    ///
    /// # Errors
    ///
    /// Returns error if the file doesn't exist, can't be parsed, or holds
    /// invalid values.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let is_yaml = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml"));
        let config = if is_yaml {
            Self::from_yaml_file(path)?
        } else {
            Self::from_toml_file(path)?
        };
        config.validate()?;
        Ok(config)
    }

    /// Loads configuration from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    /// Loads configuration from a YAML file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    /// Parses configuration from a YAML string.
    pub fn from_yaml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(s)?)
    }

    /// Checks value ranges that the type system can't express.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.repair.attempts_per_role > MAX_ATTEMPTS_PER_ROLE {
            return Err(ConfigError::Invalid(format!(
                "repair.attempts_per_role = {} exceeds {}",
                self.repair.attempts_per_role, MAX_ATTEMPTS_PER_ROLE
            )));
        }
        Ok(())
    }

    /// Sets the random seed.
    pub fn with_random_seed(mut self, seed: u64) -> Self {
        self.random_seed = Some(seed);
        self
    }

    /// Sets the number of repair attempts per role.
    pub fn with_attempts_per_role(mut self, attempts: u64) -> Self {
        self.repair.attempts_per_role = attempts;
        self
    }

    /// Sets the construction heuristic.
    pub fn with_construction_heuristic(mut self, heuristic: ConstructionHeuristicType) -> Self {
        self.construction.construction_heuristic_type = heuristic;
        self
    }

    /// Disables the repair phase.
    pub fn without_repair(mut self) -> Self {
        self.repair.enabled = false;
        self
    }

    /// Returns the seed the solver should use, if any.
    ///
    /// Reproducible mode without an explicit seed falls back to seed 0.
    pub fn effective_seed(&self) -> Option<u64> {
        match (self.random_seed, self.environment_mode) {
            (Some(seed), _) => Some(seed),
            (None, EnvironmentMode::Reproducible) => Some(0),
            (None, EnvironmentMode::NonReproducible) => None,
        }
    }
}

/// Environment mode affecting solver behavior.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EnvironmentMode {
    /// Non-reproducible mode: the repair phase draws from OS entropy.
    #[default]
    NonReproducible,

    /// Reproducible mode with deterministic behavior.
    Reproducible,
}

/// Greedy construction configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct ConstructionConfig {
    /// Order in which each role's eligible actors are tried.
    #[serde(default)]
    pub construction_heuristic_type: ConstructionHeuristicType,
}

/// Construction heuristic types.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ConstructionHeuristicType {
    /// Try actors in input order.
    FirstFit,

    /// Try the most versatile actors first.
    #[default]
    FirstFitDecreasing,
}

/// Local-search repair configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, rename_all = "snake_case")]
pub struct RepairConfig {
    /// Whether the repair phase runs at all.
    pub enabled: bool,

    /// Merge attempts per role.
    pub attempts_per_role: u64,

    /// Hard cap on the total number of attempts.
    pub attempt_limit: Option<u64>,
}

impl Default for RepairConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            attempts_per_role: 7,
            attempt_limit: None,
        }
    }
}

impl RepairConfig {
    /// Returns the number of merge attempts for a problem with
    /// `role_count` roles.
    pub fn attempt_budget(&self, role_count: usize) -> u64 {
        if !self.enabled {
            return 0;
        }
        let budget = self.attempts_per_role.saturating_mul(role_count as u64);
        match self.attempt_limit {
            Some(limit) => budget.min(limit),
            None => budget,
        }
    }
}
