//! Descriptive statistics for sequences of integers.
//!
//! This crate provides the computation engine behind `seqstats`:
//!
//! - Running accumulators for the minimum, maximum and mean of a sequence
//! - Median selection via order statistics (no full sort)
//! - Detection of the longest strictly ascending and descending contiguous runs
//!
//! # Example
//!
//! ```
//! use seqstats_core::SequenceStatistics;
//!
//! let samples = vec![1, 2, 3, 2, 1, 4, 5, 6, 7, 8];
//! let stats = samples.summarize().unwrap();
//!
//! assert_eq!(stats.min, 1);
//! assert_eq!(stats.max, 8);
//! assert_eq!(stats.ascending_run, vec![1, 4, 5, 6, 7, 8]);
//! assert_eq!(stats.descending_run, vec![3, 2, 1]);
//! ```

pub mod accumulators;
pub mod errors;
pub mod median;
pub mod models;
pub mod runs;
pub mod statistics;

// re-exports
pub use accumulators::{
    AverageAccumulator, Comparator, ExtremumAccumulator, Greater, Less, MaxAccumulator,
    MinAccumulator,
};
pub use errors::SeqStatsError;
pub use median::calc_median;
pub use models::SampleStatistics;
pub use runs::{RunMarker, find_run};
pub use statistics::SequenceStatistics;
