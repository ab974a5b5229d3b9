#[cfg(feature = "serde")]
use serde::Serialize;

/// Statistics summary for one sample sequence.
///
/// Produced by [`crate::SequenceStatistics::summarize`]. Runs are copied out
/// of the analysed sequence, so the summary does not borrow from it.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct SampleStatistics {
    /// Number of samples analysed
    pub count: usize,
    /// Smallest sample
    pub min: i32,
    /// Largest sample
    pub max: i32,
    /// Arithmetic mean
    pub average: f64,
    /// Median (mean of the two middle samples for even counts)
    pub median: f64,
    /// Longest strictly increasing contiguous run, first one on ties
    pub ascending_run: Vec<i32>,
    /// Longest strictly decreasing contiguous run, first one on ties
    pub descending_run: Vec<i32>,
}
