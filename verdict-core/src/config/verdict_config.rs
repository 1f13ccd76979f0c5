//! Top-level Verdict configuration with layered resolution.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::{AggregationConfig, ScoringConfig};
use crate::errors::ConfigError;

/// Name of the project-level config file.
pub const PROJECT_CONFIG_FILE: &str = "verdict.toml";

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. Programmatic overrides (applied via `apply_overrides`)
/// 2. Environment variables (`VERDICT_*`)
/// 3. Project config (`verdict.toml` in project root)
/// 4. User config (`~/.verdict/config.toml`)
/// 5. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct VerdictConfig {
    pub scoring: ScoringConfig,
    pub aggregation: AggregationConfig,
}

/// Override values supplied by the embedding application.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub confidence: Option<f64>,
    pub top_n: Option<usize>,
    pub parallel: Option<bool>,
    pub bucket_weights: Option<[f64; 4]>,
}

impl VerdictConfig {
    /// Load configuration with layered resolution rooted at `root`.
    pub fn load(root: &Path, overrides: Option<&ConfigOverrides>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        // Layer 4 (lowest priority): user config
        if let Some(user_config_path) = Self::user_config_path() {
            if user_config_path.exists() {
                match Self::merge_toml_file(&mut config, &user_config_path) {
                    Ok(()) => {}
                    Err(err @ ConfigError::ParseError { .. }) => return Err(err),
                    Err(err) => {
                        // Unreadable user config is not fatal.
                        tracing::warn!(error = %err, "skipping user config");
                    }
                }
            }
        }

        // Layer 3: project config
        let project_config_path = root.join(PROJECT_CONFIG_FILE);
        if project_config_path.exists() {
            Self::merge_toml_file(&mut config, &project_config_path)?;
        }

        // Layer 2: environment variables
        Self::apply_env_overrides(&mut config);

        // Layer 1 (highest priority): programmatic overrides
        if let Some(overrides) = overrides {
            Self::apply_overrides(&mut config, overrides);
        }

        Self::validate(&config)?;

        tracing::debug!(?config, "configuration resolved");
        Ok(config)
    }

    /// Load configuration from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })?;
        Self::validate(&config)?;
        Ok(config)
    }

    /// Validate the configuration values.
    pub fn validate(config: &VerdictConfig) -> Result<(), ConfigError> {
        if let Some(confidence) = config.scoring.confidence {
            if !(confidence > 0.0 && confidence < 1.0) {
                return Err(ConfigError::ValidationFailed {
                    field: "scoring.confidence".to_string(),
                    message: "must lie strictly between 0.0 and 1.0".to_string(),
                });
            }
        }
        if config.scoring.top_n == Some(0) {
            return Err(ConfigError::ValidationFailed {
                field: "scoring.top_n".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        if let Some(weights) = config.aggregation.bucket_weights {
            if weights.iter().any(|w| !w.is_finite() || *w < 0.0) {
                return Err(ConfigError::ValidationFailed {
                    field: "aggregation.bucket_weights".to_string(),
                    message: "weights must be non-negative finite numbers".to_string(),
                });
            }
        }
        Ok(())
    }

    /// Returns the user config path: `~/.verdict/config.toml`.
    fn user_config_path() -> Option<PathBuf> {
        home_dir().map(|h| h.join(".verdict").join("config.toml"))
    }

    /// Merge a TOML file into the existing config.
    /// Unknown keys are ignored.
    fn merge_toml_file(config: &mut VerdictConfig, path: &Path) -> Result<(), ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;

        let file_config: VerdictConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        Self::merge(config, &file_config);
        Ok(())
    }

    /// Merge `other` into `base`; only `Some` values in `other` win.
    fn merge(base: &mut VerdictConfig, other: &VerdictConfig) {
        if other.scoring.confidence.is_some() {
            base.scoring.confidence = other.scoring.confidence;
        }
        if other.scoring.top_n.is_some() {
            base.scoring.top_n = other.scoring.top_n;
        }
        if other.scoring.parallel.is_some() {
            base.scoring.parallel = other.scoring.parallel;
        }
        if other.aggregation.bucket_weights.is_some() {
            base.aggregation.bucket_weights = other.aggregation.bucket_weights;
        }
    }

    /// Apply environment variable overrides. Unparseable values are skipped.
    /// Pattern: `VERDICT_SCORING_CONFIDENCE`, `VERDICT_AGGREGATION_BUCKET_WEIGHTS`, etc.
    fn apply_env_overrides(config: &mut VerdictConfig) {
        if let Ok(val) = std::env::var("VERDICT_SCORING_CONFIDENCE") {
            if let Ok(v) = val.parse::<f64>() {
                config.scoring.confidence = Some(v);
            }
        }
        if let Ok(val) = std::env::var("VERDICT_SCORING_TOP_N") {
            if let Ok(v) = val.parse::<usize>() {
                config.scoring.top_n = Some(v);
            }
        }
        if let Ok(val) = std::env::var("VERDICT_SCORING_PARALLEL") {
            if let Ok(v) = val.parse::<bool>() {
                config.scoring.parallel = Some(v);
            }
        }
        if let Ok(val) = std::env::var("VERDICT_AGGREGATION_BUCKET_WEIGHTS") {
            if let Some(weights) = parse_weights(&val) {
                config.aggregation.bucket_weights = Some(weights);
            }
        }
    }

    /// Apply programmatic overrides (highest priority).
    pub fn apply_overrides(config: &mut VerdictConfig, overrides: &ConfigOverrides) {
        if let Some(v) = overrides.confidence {
            config.scoring.confidence = Some(v);
        }
        if let Some(v) = overrides.top_n {
            config.scoring.top_n = Some(v);
        }
        if let Some(v) = overrides.parallel {
            config.scoring.parallel = Some(v);
        }
        if let Some(v) = overrides.bucket_weights {
            config.aggregation.bucket_weights = Some(v);
        }
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }
}

/// Parse exactly four comma-separated weights, e.g. `"28,27,23,22"`.
fn parse_weights(val: &str) -> Option<[f64; 4]> {
    let parsed: Vec<f64> = val
        .split(',')
        .map(|part| part.trim().parse::<f64>())
        .collect::<Result<_, _>>()
        .ok()?;
    parsed.try_into().ok()
}

/// Cross-platform home directory resolution.
fn home_dir() -> Option<PathBuf> {
    std::env::var_os("HOME")
        .or_else(|| std::env::var_os("USERPROFILE"))
        .map(PathBuf::from)
}
