//! Feature data model.
//!
//! A [`Feature`] is one named numeric measurement of a sample together with the
//! dataset-wide statistics an external aggregation pass attached to it. The
//! scaling operations in [`crate::core::scoring`] rewrite its working value in
//! place and record which representation the value is currently in.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Representation the working value of a feature is currently expressed in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Representation {
    /// Value as constructed
    #[default]
    Raw,
    /// Min-max normalized into [0, 1]
    Normalized,
    /// Z-score standardized
    Standardized,
}

/// A named, mutable numeric measurement with attached statistics.
///
/// The working value is only rewritten by the scaling operations, so it can
/// not drift from the recorded [`Representation`]:
///
/// ```compile_fail
/// let mut feature = rankscale::Feature::new(1.0);
/// feature.value = 2.0;
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Feature {
    label: Option<String>,
    raw_value: f64,
    value: f64,

    /// Weight multiplier, stored for downstream weighted distances
    pub weight: f64,

    /// Minimum observed across the dataset
    pub min_observed: Option<f64>,

    /// Maximum observed across the dataset
    pub max_observed: Option<f64>,

    /// Dataset mean
    pub mean: Option<f64>,

    /// Dataset standard deviation
    pub std_dev: Option<f64>,

    /// Sum of standard deviations across the features of a sample
    pub sum_std_dev: Option<f64>,

    representation: Representation,
}

impl Feature {
    /// Create an unlabeled feature
    pub fn new(value: f64) -> Self {
        Self {
            label: None,
            raw_value: value,
            value,
            weight: 1.0,
            min_observed: None,
            max_observed: None,
            mean: None,
            std_dev: None,
            sum_std_dev: None,
            representation: Representation::Raw,
        }
    }

    /// Create a labeled feature
    pub fn labeled(label: impl Into<String>, value: f64) -> Self {
        Self {
            label: Some(label.into()),
            ..Self::new(value)
        }
    }

    /// Attach the observed bounds used by min-max normalization
    pub fn with_bounds(mut self, min_observed: f64, max_observed: f64) -> Self {
        self.min_observed = Some(min_observed);
        self.max_observed = Some(max_observed);
        self
    }

    /// Attach the moments used by standardization
    pub fn with_moments(mut self, mean: f64, std_dev: f64) -> Self {
        self.mean = Some(mean);
        self.std_dev = Some(std_dev);
        self
    }

    /// Set the weight multiplier
    pub fn with_weight(mut self, weight: f64) -> Self {
        self.weight = weight;
        self
    }

    /// Feature name, if any
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    /// Current working value
    pub fn value(&self) -> f64 {
        self.value
    }

    /// Value the feature was constructed with
    pub fn raw_value(&self) -> f64 {
        self.raw_value
    }

    /// Current representation of [`Feature::value`]
    pub fn representation(&self) -> Representation {
        self.representation
    }

    /// True when the value is min-max normalized
    pub fn is_normalized(&self) -> bool {
        self.representation == Representation::Normalized
    }

    /// True when the value is standardized
    pub fn is_standardized(&self) -> bool {
        self.representation == Representation::Standardized
    }

    /// Restore the constructed value and the raw representation.
    ///
    /// Scaling is applied to the current value, so switching schemes without a
    /// reset rescales an already-scaled number.
    pub fn reset(&mut self) {
        self.value = self.raw_value;
        self.representation = Representation::Raw;
    }

    pub(crate) fn set_scaled(&mut self, value: f64, representation: Representation) {
        self.value = value;
        self.representation = representation;
    }

    /// Label used in diagnostics and errors
    pub(crate) fn display_label(&self) -> String {
        self.label.clone().unwrap_or_default()
    }
}

impl fmt::Display for Feature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:\t{}", self.label.as_deref().unwrap_or(""), self.value)
    }
}
