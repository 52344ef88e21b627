//! Per-feature scaling.
//!
//! [`FeatureScaler`] rewrites a [`Feature`]'s working value into min-max
//! normalized or standardized space using the statistics already attached to
//! the feature. A call made before its statistics are attached is either
//! skipped (reported through [`ScaleOutcome::Skipped`]) or rejected, depending
//! on [`MissingStatisticsPolicy`]. Degenerate divisors and non-finite inputs
//! are always errors and leave the feature untouched.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::core::config::{MissingStatisticsPolicy, ScalingConfig, ScalingScheme};
use crate::core::errors::{RankscaleError, Result};
use crate::core::featureset::{Feature, Representation};

/// Statistic a scaling operation depends on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MissingStatistic {
    /// `min_observed`
    MinObserved,
    /// `max_observed`
    MaxObserved,
    /// `mean`
    Mean,
    /// `std_dev`
    StdDev,
}

impl MissingStatistic {
    /// Field name of the statistic
    pub fn as_str(self) -> &'static str {
        match self {
            Self::MinObserved => "min_observed",
            Self::MaxObserved => "max_observed",
            Self::Mean => "mean",
            Self::StdDev => "std_dev",
        }
    }
}

impl fmt::Display for MissingStatistic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of a scaling call that did not fail
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScaleOutcome {
    /// The feature was rewritten
    Applied,
    /// The feature was left untouched because a statistic is absent
    Skipped(MissingStatistic),
}

impl ScaleOutcome {
    /// True if the feature was rewritten
    pub fn is_applied(self) -> bool {
        matches!(self, Self::Applied)
    }
}

const NORMALIZE: &str = "normalize";
const NORMALIZE_STD_DEV: &str = "normalize_std_dev";
const STANDARDIZE: &str = "standardize";

/// Applies min-max normalization and standardization to features in place.
#[derive(Debug, Clone, Default)]
pub struct FeatureScaler {
    config: ScalingConfig,
}

impl FeatureScaler {
    /// Create a scaler with the given configuration
    pub fn new(config: ScalingConfig) -> Self {
        Self { config }
    }

    /// Configuration in use
    pub fn config(&self) -> &ScalingConfig {
        &self.config
    }

    /// Replace `value` with `(value - min_observed) / (max_observed - min_observed)`.
    pub fn normalize(&self, feature: &mut Feature) -> Result<ScaleOutcome> {
        let Some(low) = feature.min_observed else {
            return self.missing(NORMALIZE, MissingStatistic::MinObserved, feature);
        };
        let Some(high) = feature.max_observed else {
            return self.missing(NORMALIZE, MissingStatistic::MaxObserved, feature);
        };

        let scaled = self.min_max(NORMALIZE, feature.value(), low, high, feature)?;
        feature.set_scaled(scaled, Representation::Normalized);

        tracing::debug!(feature = %feature.display_label(), value = scaled, "Normalized feature");
        Ok(ScaleOutcome::Applied)
    }

    /// Rescale `std_dev` onto [0, 1] using caller-supplied bounds.
    ///
    /// Used to bring the standard deviations of several features onto a common
    /// axis. `value` and the representation are not touched.
    pub fn normalize_std_dev(
        &self,
        feature: &mut Feature,
        min_bound: f64,
        max_bound: f64,
    ) -> Result<ScaleOutcome> {
        let Some(std_dev) = feature.std_dev else {
            return self.missing(NORMALIZE_STD_DEV, MissingStatistic::StdDev, feature);
        };

        let scaled = self.min_max(NORMALIZE_STD_DEV, std_dev, min_bound, max_bound, feature)?;
        feature.std_dev = Some(scaled);
        Ok(ScaleOutcome::Applied)
    }

    /// Replace `value` with `(value - mean) / std_dev`.
    pub fn standardize(&self, feature: &mut Feature) -> Result<ScaleOutcome> {
        let Some(mean) = feature.mean else {
            return self.missing(STANDARDIZE, MissingStatistic::Mean, feature);
        };
        let Some(std_dev) = feature.std_dev else {
            return self.missing(STANDARDIZE, MissingStatistic::StdDev, feature);
        };

        if !(feature.value().is_finite() && mean.is_finite() && std_dev.is_finite()) {
            return Err(non_finite(STANDARDIZE, feature));
        }
        if std_dev.abs() <= self.config.degenerate_epsilon {
            return Err(RankscaleError::DegenerateRange {
                operation: STANDARDIZE,
                low: mean,
                high: mean + std_dev,
                feature: feature.display_label(),
            });
        }

        let scaled = (feature.value() - mean) / std_dev;
        if !scaled.is_finite() {
            return Err(non_finite(STANDARDIZE, feature));
        }
        feature.set_scaled(scaled, Representation::Standardized);

        tracing::debug!(feature = %feature.display_label(), value = scaled, "Standardized feature");
        Ok(ScaleOutcome::Applied)
    }

    /// Scale with the configured scheme
    pub fn apply(&self, feature: &mut Feature) -> Result<ScaleOutcome> {
        self.apply_scheme(feature, self.config.scheme)
    }

    /// Scale with an explicit scheme
    pub fn apply_scheme(&self, feature: &mut Feature, scheme: ScalingScheme) -> Result<ScaleOutcome> {
        match scheme {
            ScalingScheme::MinMax => self.normalize(feature),
            ScalingScheme::ZScore => self.standardize(feature),
        }
    }

    /// Rescale the standard deviations of `features` onto a shared [0, 1] axis.
    ///
    /// The bounds are the smallest and largest standard deviation present.
    /// The sum of those standard deviations is stored in `sum_std_dev` of each
    /// rescaled feature; features without a standard deviation are left as
    /// they are. Returns the number of features rescaled. Nothing is modified
    /// if an error is returned.
    pub fn rescale_std_devs(&self, features: &mut [Feature]) -> Result<usize> {
        let mut low = f64::INFINITY;
        let mut high = f64::NEG_INFINITY;
        let mut sum = 0.0;
        let mut present = 0usize;

        for feature in features.iter() {
            match feature.std_dev {
                Some(sd) if !sd.is_finite() => return Err(non_finite(NORMALIZE_STD_DEV, feature)),
                Some(sd) => {
                    low = low.min(sd);
                    high = high.max(sd);
                    sum += sd;
                    present += 1;
                }
                None if self.config.missing_statistics == MissingStatisticsPolicy::Fail => {
                    return Err(RankscaleError::MissingStatistics {
                        operation: NORMALIZE_STD_DEV,
                        statistic: MissingStatistic::StdDev.as_str(),
                        feature: feature.display_label(),
                    });
                }
                None => {}
            }
        }

        if present == 0 {
            return Ok(0);
        }
        if (high - low).abs() <= self.config.degenerate_epsilon {
            return Err(RankscaleError::DegenerateRange {
                operation: NORMALIZE_STD_DEV,
                low,
                high,
                feature: String::new(),
            });
        }

        if !sum.is_finite() {
            return Err(RankscaleError::NonFinite {
                operation: NORMALIZE_STD_DEV,
                feature: String::new(),
            });
        }

        let mut rescaled = 0;
        for feature in features.iter_mut() {
            if self.normalize_std_dev(feature, low, high)?.is_applied() {
                feature.sum_std_dev = Some(sum);
                rescaled += 1;
            }
        }

        tracing::debug!(rescaled, low, high, sum, "Rescaled standard deviations");
        Ok(rescaled)
    }

    fn min_max(
        &self,
        operation: &'static str,
        x: f64,
        low: f64,
        high: f64,
        feature: &Feature,
    ) -> Result<f64> {
        if !(x.is_finite() && low.is_finite() && high.is_finite()) {
            return Err(non_finite(operation, feature));
        }

        let range = high - low;
        if range.abs() <= self.config.degenerate_epsilon {
            return Err(RankscaleError::DegenerateRange {
                operation,
                low,
                high,
                feature: feature.display_label(),
            });
        }

        let scaled = (x - low) / range;
        if scaled.is_finite() {
            Ok(scaled)
        } else {
            Err(non_finite(operation, feature))
        }
    }

    fn missing(
        &self,
        operation: &'static str,
        statistic: MissingStatistic,
        feature: &Feature,
    ) -> Result<ScaleOutcome> {
        match self.config.missing_statistics {
            MissingStatisticsPolicy::Skip => {
                tracing::warn!(
                    feature = %feature.display_label(),
                    statistic = statistic.as_str(),
                    "Skipping {operation}: statistic not attached"
                );
                Ok(ScaleOutcome::Skipped(statistic))
            }
            MissingStatisticsPolicy::Fail => Err(RankscaleError::MissingStatistics {
                operation,
                statistic: statistic.as_str(),
                feature: feature.display_label(),
            }),
        }
    }
}

fn non_finite(operation: &'static str, feature: &Feature) -> RankscaleError {
    RankscaleError::NonFinite {
        operation,
        feature: feature.display_label(),
    }
}

#[cfg(test)]
#[path = "scaler_tests.rs"]
mod tests;
