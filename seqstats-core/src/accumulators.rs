//! Single-pass accumulators for the minimum, maximum and mean of a sequence.
//!
//! Every accumulator starts without a value and is fed one sample at a time.
//! Absence of data is always reported as `None`, never as a sentinel.

/// A strict ordering between two samples.
///
/// `compare(lhs, rhs)` returns `true` when `lhs` must be placed before `rhs`.
/// Implementations are zero-sized strategy types used as generic parameters.
pub trait Comparator: Copy + Default {
    fn compare(&self, lhs: i32, rhs: i32) -> bool;
}

/// Strict less-than: selects minima and strictly increasing runs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Less;

/// Strict greater-than: selects maxima and strictly decreasing runs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Greater;

impl Comparator for Less {
    fn compare(&self, lhs: i32, rhs: i32) -> bool {
        lhs < rhs
    }
}

impl Comparator for Greater {
    fn compare(&self, lhs: i32, rhs: i32) -> bool {
        lhs > rhs
    }
}

///
/// Keeps the "best" sample seen so far under the comparator `C`.
///
/// The first sample is adopted unconditionally; any later sample replaces the
/// current one only if it is strictly better.
///
#[derive(Debug, Clone, Default)]
pub struct ExtremumAccumulator<C: Comparator> {
    result: Option<i32>,
    comparator: C,
}

pub type MinAccumulator = ExtremumAccumulator<Less>;
pub type MaxAccumulator = ExtremumAccumulator<Greater>;

impl<C: Comparator> ExtremumAccumulator<C> {
    pub fn new() -> Self {
        ExtremumAccumulator {
            result: None,
            comparator: C::default(),
        }
    }

    pub fn accumulate(&mut self, value: i32) {
        match self.result {
            Some(current) if !self.comparator.compare(value, current) => {}
            _ => self.result = Some(value),
        }
    }

    pub fn result(&self) -> Option<i32> {
        self.result
    }
}

///
/// Running arithmetic mean over a sequence of known length.
///
/// Each sample is divided by the total count before it is added, so the
/// running total never grows past the magnitude of the largest sample. This
/// trades a little floating point rounding for immunity to integer overflow.
///
/// # Panics
///
/// `accumulate` panics when called more times than the count the accumulator
/// was created with.
///
#[derive(Debug, Clone)]
pub struct AverageAccumulator {
    total: f64,
    count: usize,
    seen: usize,
}

impl AverageAccumulator {
    pub fn new(count: usize) -> Self {
        AverageAccumulator {
            total: 0.0,
            count,
            seen: 0,
        }
    }

    pub fn accumulate(&mut self, value: i32) {
        assert!(
            self.seen < self.count,
            "AverageAccumulator fed more than the {} samples it was created for",
            self.count
        );
        self.seen += 1;
        self.total += value as f64 / self.count as f64;
    }

    pub fn result(&self) -> Option<f64> {
        match self.count {
            0 => None,
            _ => Some(self.total),
        }
    }
}
