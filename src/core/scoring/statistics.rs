//! Dataset statistics feeding the scaler.
//!
//! One [`FeatureStatistics`] record describes one feature column across the
//! whole dataset. Records are computed once and attached to every feature of
//! that column before any scaling call.

use serde::{Deserialize, Serialize};

use crate::core::errors::{RankscaleError, Result};
use crate::core::featureset::Feature;

/// Statistical measures of one feature column
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureStatistics {
    /// Minimum value observed
    pub min: f64,
    /// Maximum value observed
    pub max: f64,
    /// Arithmetic mean
    pub mean: f64,
    /// Population standard deviation
    pub std_dev: f64,
    /// Number of finite values the record was computed from
    pub n_samples: usize,
}

impl FeatureStatistics {
    /// Calculate statistics from a column of values.
    ///
    /// NaN and infinite values are ignored.
    pub fn from_values(values: &[f64]) -> Result<Self> {
        let finite: Vec<f64> = values.iter().copied().filter(|v| v.is_finite()).collect();
        let n = finite.len();

        if n == 0 {
            return Err(RankscaleError::validation(
                "No finite values provided for feature statistics",
            ));
        }

        let mean = finite.iter().sum::<f64>() / n as f64;
        let variance = finite.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / n as f64;
        let (min, max) = finite
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &x| {
                (lo.min(x), hi.max(x))
            });

        Ok(Self {
            min,
            max,
            mean,
            std_dev: variance.sqrt(),
            n_samples: n,
        })
    }

    /// Compute one record per column over rows of equal length
    pub fn fit_columns<R: AsRef<[f64]>>(rows: &[R]) -> Result<Vec<Self>> {
        let Some(first) = rows.first() else {
            return Err(RankscaleError::validation("No rows provided for fitting"));
        };
        let width = first.as_ref().len();

        if let Some(pos) = rows.iter().position(|r| r.as_ref().len() != width) {
            return Err(RankscaleError::validation_field(
                format!(
                    "Row {pos} has {} values, expected {width}",
                    rows[pos].as_ref().len()
                ),
                "rows",
            ));
        }

        let mut column = Vec::with_capacity(rows.len());
        (0..width)
            .map(|col| {
                column.clear();
                column.extend(rows.iter().map(|r| r.as_ref()[col]));
                Self::from_values(&column).map_err(|e| e.with_context(format!("column {col}")))
            })
            .collect()
    }

    /// Attach these statistics to a feature
    pub fn attach(&self, feature: &mut Feature) {
        feature.min_observed = Some(self.min);
        feature.max_observed = Some(self.max);
        feature.mean = Some(self.mean);
        feature.std_dev = Some(self.std_dev);
    }
}
