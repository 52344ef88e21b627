//! # rankscale-rs: Feature Scaling and Sample Ranking
//!
//! The data-preparation core of a distance-based (nearest-neighbour style)
//! classifier:
//!
//! - **Scaling**: min-max normalization and standardization of individual
//!   features against dataset statistics, with explicit outcomes for missing
//!   statistics and errors for degenerate ranges
//! - **Ordering**: an in-place quicksort over samples that define their own
//!   total order, hardened against deep recursion and broken comparators
//!
//! ## Architecture
//!
//! ```text
//! dataset ──► FeatureStatistics ──► FeatureScaler ──► SampleSorter ──► decision
//!             (per column)          (per feature)     (ranked samples)  (caller)
//! ```
//!
//! ## Quick Start
//!
//! ```rust
//! use rankscale::core::featureset::Feature;
//! use rankscale::core::ordering::rank_by_key;
//! use rankscale::core::scoring::{FeatureScaler, FeatureStatistics};
//!
//! # fn main() -> rankscale::Result<()> {
//! let column = [4.0, 8.0, 6.0];
//! let stats = FeatureStatistics::from_values(&column)?;
//!
//! let scaler = FeatureScaler::default();
//! let mut features: Vec<Feature> = column.iter().map(|&v| Feature::new(v)).collect();
//! for feature in &mut features {
//!     stats.attach(feature);
//!     assert!(scaler.normalize(feature)?.is_applied());
//! }
//!
//! let ranked = rank_by_key(features, |f| (f.value() - 0.4).abs())?;
//! assert_eq!(ranked[0].item.raw_value(), 6.0);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![warn(unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

// Core scaling and ordering modules
pub mod core {
    //! Core data model, scaling, and ordering.

    pub mod config;
    pub mod errors;
    pub mod featureset;
    pub mod ordering;
    pub mod scoring;
}

// Re-export primary types for convenience
pub use crate::core::config::RankscaleConfig;
pub use crate::core::errors::{RankscaleError, Result, ResultExt};
pub use crate::core::featureset::{Feature, Representation};
pub use crate::core::ordering::{SampleOrder, SampleSorter};
pub use crate::core::scoring::{FeatureScaler, ScaleOutcome};

/// Library version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
