//! Sample ordering.
//!
//! This module provides:
//! - The [`SampleOrder`] capability samples implement
//! - An in-place, non-stable quicksort over such samples
//! - [`Ranked`] pairs for ordering items by a computed key

pub mod quicksort;
pub mod ranked;

pub use quicksort::{sort_samples, SampleOrder, SampleSorter, SortReport};
pub use ranked::{rank_by_key, Ranked};
