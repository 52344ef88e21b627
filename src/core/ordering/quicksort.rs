//! In-place quicksort over samples that define their own order.
//!
//! The partition scheme takes the first element of each range as pivot and
//! walks two cursors towards each other: the left one skips elements that are
//! `<=` the pivot, the right one skips elements that are `>` it. Ties go to the
//! left partition, so the sort is not stable.
//!
//! Pending ranges live on an explicit work stack instead of the call stack.
//! The smaller side of every partition is processed first, which keeps the
//! stack at O(log n) entries even for sorted or all-equal input, where the
//! first-element pivot degrades to O(n^2) comparisons.

use crate::core::config::SortConfig;
use crate::core::errors::{RankscaleError, Result};

/// Total order capability a sample exposes to the sorter.
///
/// For any two samples exactly one of `a.is_less_or_equal(b)` and
/// `a.is_greater(b)` must hold, and `a.is_less_or_equal(a)` must hold.
/// The sorter checks this on every comparison and fails with
/// [`RankscaleError::InvalidComparator`] instead of looping.
pub trait SampleOrder {
    /// `self <= other`
    fn is_less_or_equal(&self, other: &Self) -> bool;

    /// `self > other`
    fn is_greater(&self, other: &Self) -> bool;
}

impl<T: SampleOrder + ?Sized> SampleOrder for &T {
    fn is_less_or_equal(&self, other: &Self) -> bool {
        (**self).is_less_or_equal(*other)
    }

    fn is_greater(&self, other: &Self) -> bool {
        (**self).is_greater(*other)
    }
}

macro_rules! impl_sample_order {
    ($($t:ty),* $(,)?) => {
        $(
            impl SampleOrder for $t {
                #[inline]
                fn is_less_or_equal(&self, other: &Self) -> bool {
                    self <= other
                }

                #[inline]
                fn is_greater(&self, other: &Self) -> bool {
                    self > other
                }
            }
        )*
    };
}

impl_sample_order!(f32, f64, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

/// Counters collected while sorting
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SortReport {
    /// Number of elements sorted
    pub len: usize,
    /// Partition passes performed
    pub partitions: usize,
    /// Pivot comparisons performed
    pub comparisons: usize,
    /// Largest number of pending ranges held at once
    pub max_pending: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Side {
    LessOrEqual,
    Greater,
}

/// Quicksort over [`SampleOrder`] samples.
#[derive(Debug, Clone, Default)]
pub struct SampleSorter {
    config: SortConfig,
}

impl SampleSorter {
    /// Create a sorter with the given configuration
    pub fn new(config: SortConfig) -> Self {
        Self { config }
    }

    /// Sort `samples` ascending in place and hand the same slice back.
    pub fn sort<'a, S: SampleOrder>(&self, samples: &'a mut [S]) -> Result<&'a mut [S]> {
        self.sort_with_report(samples)?;
        Ok(samples)
    }

    /// Sort `samples` ascending in place and report the work done.
    ///
    /// On error the slice holds a permutation of its input.
    pub fn sort_with_report<S: SampleOrder>(&self, samples: &mut [S]) -> Result<SortReport> {
        let len = samples.len();
        if let Some(limit) = self.config.max_len {
            if len > limit {
                return Err(RankscaleError::ResourceExhaustion {
                    message: format!("cannot sort {len} samples"),
                    limit,
                });
            }
        }

        let mut report = SortReport {
            len,
            ..SortReport::default()
        };
        if len < 2 {
            return Ok(report);
        }

        let mut pending: Vec<(usize, usize)> = vec![(0, len - 1)];
        report.max_pending = 1;

        while let Some((start, end)) = pending.pop() {
            let (split, right_start) = partition(samples, start, end, &mut report)?;
            report.partitions += 1;

            tracing::trace!(start, end, split, "Partitioned range");

            let left = (split > start + 1).then(|| (start, split - 1));
            let right = (right_start < end).then_some((right_start, end));

            match (left, right) {
                (Some(l), Some(r)) => {
                    // Smaller range on top so it is processed first
                    if l.1 - l.0 < r.1 - r.0 {
                        pending.push(r);
                        pending.push(l);
                    } else {
                        pending.push(l);
                        pending.push(r);
                    }
                }
                (Some(range), None) | (None, Some(range)) => pending.push(range),
                (None, None) => {}
            }
            report.max_pending = report.max_pending.max(pending.len());
        }

        tracing::debug!(
            len = report.len,
            partitions = report.partitions,
            comparisons = report.comparisons,
            max_pending = report.max_pending,
            "Sorted samples"
        );
        Ok(report)
    }
}

/// Sort `samples` ascending in place with the default configuration.
pub fn sort_samples<S: SampleOrder>(samples: &mut [S]) -> Result<&mut [S]> {
    SampleSorter::default().sort(samples)
}

/// Partition `samples[start..=end]` around `samples[start]`.
///
/// Returns the pivot's final position and the first index of the right
/// partition. The pivot stays at `start` until the final swap: the left cursor
/// moves past it on its first step and the right cursor never passes it.
fn partition<S: SampleOrder>(
    samples: &mut [S],
    start: usize,
    end: usize,
    report: &mut SortReport,
) -> Result<(usize, usize)> {
    let (mut left, mut right) = (start, end);

    while left < right {
        while left <= end && classify(samples, left, start, report)? == Side::LessOrEqual {
            left += 1;
        }
        while classify(samples, right, start, report)? == Side::Greater {
            right -= 1;
        }
        if left < right {
            samples.swap(left, right);
        }
    }

    samples.swap(right, start);
    Ok((right, left))
}

fn classify<S: SampleOrder>(
    samples: &[S],
    index: usize,
    pivot: usize,
    report: &mut SortReport,
) -> Result<Side> {
    report.comparisons += 1;

    let (sample, pivot_sample) = (&samples[index], &samples[pivot]);
    let side = match (
        sample.is_less_or_equal(pivot_sample),
        sample.is_greater(pivot_sample),
    ) {
        (true, false) => Side::LessOrEqual,
        (false, true) if index != pivot => Side::Greater,
        _ => {
            return Err(RankscaleError::InvalidComparator {
                index,
                pivot_index: pivot,
            })
        }
    };
    Ok(side)
}

#[cfg(test)]
#[path = "quicksort_tests.rs"]
mod tests;
