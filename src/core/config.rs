//! Configuration types for scaling and ordering.
//!
//! Configuration is plain serde data, loadable from YAML and validated before
//! use. Every field has a default so partial files are accepted.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::core::errors::{Result, RankscaleError};

/// Top-level configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RankscaleConfig {
    /// Feature scaling settings
    pub scaling: ScalingConfig,

    /// Sample ordering settings
    pub sort: SortConfig,
}

impl RankscaleConfig {
    /// Parse configuration from a YAML string
    pub fn from_yaml_str(content: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a YAML file
    pub fn from_yaml_file(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let content = std::fs::read_to_string(&path).map_err(|e| {
            RankscaleError::io(format!("Failed to read config file: {}", path.display()), e)
        })?;

        Self::from_yaml_str(&content)
    }

    /// Serialize configuration to YAML
    pub fn to_yaml_string(&self) -> Result<String> {
        serde_yaml::to_string(self).map_err(Into::into)
    }

    /// Validate configuration settings
    pub fn validate(&self) -> Result<()> {
        self.scaling.validate()?;
        self.sort.validate()?;
        Ok(())
    }
}

/// Feature scaling configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScalingConfig {
    /// Scheme used by [`FeatureScaler::apply`](crate::core::scoring::FeatureScaler::apply)
    pub scheme: ScalingScheme,

    /// What to do when a required statistic is absent
    pub missing_statistics: MissingStatisticsPolicy,

    /// Divisors with absolute value at or below this are degenerate
    pub degenerate_epsilon: f64,
}

impl Default for ScalingConfig {
    fn default() -> Self {
        Self {
            scheme: ScalingScheme::MinMax,
            missing_statistics: MissingStatisticsPolicy::Skip,
            degenerate_epsilon: 0.0,
        }
    }
}

impl ScalingConfig {
    /// Validate scaling configuration
    pub fn validate(&self) -> Result<()> {
        if !self.degenerate_epsilon.is_finite() || self.degenerate_epsilon < 0.0 {
            return Err(RankscaleError::config_field(
                format!(
                    "degenerate_epsilon must be finite and non-negative, got {}",
                    self.degenerate_epsilon
                ),
                "scaling.degenerate_epsilon",
            ));
        }
        Ok(())
    }
}

/// Available scaling schemes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScalingScheme {
    /// Min-max normalization to the [0, 1] range
    MinMax,
    /// Z-score standardization
    ZScore,
}

/// Policy for scaling calls made before statistics are attached
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MissingStatisticsPolicy {
    /// Leave the feature untouched and report a skipped outcome
    Skip,
    /// Return a `MissingStatistics` error
    Fail,
}

/// Sample ordering configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SortConfig {
    /// Reject inputs longer than this
    pub max_len: Option<usize>,
}

impl SortConfig {
    /// Validate sort configuration
    pub fn validate(&self) -> Result<()> {
        if self.max_len == Some(0) {
            return Err(RankscaleError::config_field(
                "max_len must be greater than 0 when set",
                "sort.max_len",
            ));
        }
        Ok(())
    }
}
