//! Key/item pairs for ranking samples by a score such as distance-to-query.

use serde::{Deserialize, Serialize};

use crate::core::errors::Result;
use crate::core::ordering::quicksort::{sort_samples, SampleOrder};

/// An item paired with the key it is ranked by.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ranked<T> {
    /// Ranking key, ascending
    pub key: f64,
    /// The ranked item
    pub item: T,
}

impl<T> Ranked<T> {
    /// Pair an item with its key
    pub fn new(key: f64, item: T) -> Self {
        Self { key, item }
    }

    /// Drop the key
    pub fn into_item(self) -> T {
        self.item
    }
}

impl<T> SampleOrder for Ranked<T> {
    fn is_less_or_equal(&self, other: &Self) -> bool {
        self.key <= other.key
    }

    fn is_greater(&self, other: &Self) -> bool {
        self.key > other.key
    }
}

/// Key every item with `key_fn` and return the pairs sorted ascending by key.
///
/// A NaN key makes the order partial and fails with
/// [`RankscaleError::InvalidComparator`](crate::core::errors::RankscaleError::InvalidComparator).
pub fn rank_by_key<T, I, F>(items: I, mut key_fn: F) -> Result<Vec<Ranked<T>>>
where
    I: IntoIterator<Item = T>,
    F: FnMut(&T) -> f64,
{
    let mut ranked: Vec<Ranked<T>> = items
        .into_iter()
        .map(|item| Ranked::new(key_fn(&item), item))
        .collect();

    sort_samples(&mut ranked)?;
    Ok(ranked)
}
