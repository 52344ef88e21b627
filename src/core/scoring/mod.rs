//! Feature scaling.
//!
//! This module provides:
//! - Dataset statistics for each feature column
//! - Min-max normalization and standardization of individual features

pub mod scaler;
pub mod statistics;

pub use scaler::{FeatureScaler, MissingStatistic, ScaleOutcome};
pub use statistics::FeatureStatistics;
