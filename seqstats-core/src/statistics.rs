//! Summary statistics for sample sequences.
//!
//! This file ties the accumulators, the median selector and the run finder
//! together behind one extension trait.
//!

use crate::accumulators::{AverageAccumulator, Greater, Less, MaxAccumulator, MinAccumulator};
use crate::errors::{Result, SeqStatsError};
use crate::median::calc_median;
use crate::models::SampleStatistics;
use crate::runs::{RunMarker, find_run};

/// Trait for computing descriptive statistics of an integer sequence.
///
/// Every per-statistic method answers `None` (or an empty run) for an empty
/// sequence. [`summarize`](SequenceStatistics::summarize) instead refuses
/// empty input, since a summary without data has nothing to report.
pub trait SequenceStatistics {
    /// Smallest sample, or `None` if there are none.
    fn minimum(&self) -> Option<i32>;

    /// Largest sample, or `None` if there are none.
    fn maximum(&self) -> Option<i32>;

    /// Arithmetic mean, computed from pre-divided terms so it never overflows.
    fn average(&self) -> Option<f64>;

    /// Median via order statistics. The sequence itself is left untouched.
    fn median(&self) -> Option<f64>;

    /// Longest strictly increasing contiguous run.
    fn longest_ascending_run(&self) -> RunMarker;

    /// Longest strictly decreasing contiguous run.
    fn longest_descending_run(&self) -> RunMarker;

    /// Compute every statistic at once.
    ///
    /// Min, max and mean are gathered in a single shared pass. Fails with
    /// [`SeqStatsError::EmptyInput`] on an empty sequence.
    fn summarize(&self) -> Result<SampleStatistics>;
}

impl SequenceStatistics for [i32] {
    fn minimum(&self) -> Option<i32> {
        let mut min = MinAccumulator::new();
        self.iter().for_each(|&v| min.accumulate(v));
        min.result()
    }

    fn maximum(&self) -> Option<i32> {
        let mut max = MaxAccumulator::new();
        self.iter().for_each(|&v| max.accumulate(v));
        max.result()
    }

    fn average(&self) -> Option<f64> {
        let mut avg = AverageAccumulator::new(self.len());
        self.iter().for_each(|&v| avg.accumulate(v));
        avg.result()
    }

    fn median(&self) -> Option<f64> {
        calc_median(self)
    }

    fn longest_ascending_run(&self) -> RunMarker {
        find_run(self, Less)
    }

    fn longest_descending_run(&self) -> RunMarker {
        find_run(self, Greater)
    }

    fn summarize(&self) -> Result<SampleStatistics> {
        if self.is_empty() {
            return Err(SeqStatsError::EmptyInput);
        }

        let mut min = MinAccumulator::new();
        let mut max = MaxAccumulator::new();
        let mut avg = AverageAccumulator::new(self.len());

        // single pass over the samples for all three accumulators
        for &value in self {
            min.accumulate(value);
            max.accumulate(value);
            avg.accumulate(value);
        }

        let ascending = self.longest_ascending_run();
        let descending = self.longest_descending_run();

        Ok(SampleStatistics {
            count: self.len(),
            min: min.result().ok_or(SeqStatsError::EmptyInput)?,
            max: max.result().ok_or(SeqStatsError::EmptyInput)?,
            average: avg.result().ok_or(SeqStatsError::EmptyInput)?,
            median: self.median().ok_or(SeqStatsError::EmptyInput)?,
            ascending_run: ascending.to_vec(self),
            descending_run: descending.to_vec(self),
        })
    }
}
