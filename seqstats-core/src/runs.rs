//! Longest strictly monotonic contiguous runs.

use std::ops::Range;

use crate::accumulators::Comparator;

/// Half-open index range `[start, end)` into a sample sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RunMarker {
    pub start: usize,
    pub end: usize,
}

impl RunMarker {
    pub fn new(start: usize, end: usize) -> Self {
        debug_assert!(start <= end, "run marker start {start} is past end {end}");
        RunMarker { start, end }
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }

    /// Borrow the marked values out of the sequence the marker was computed on.
    pub fn slice<'a>(&self, samples: &'a [i32]) -> &'a [i32] {
        &samples[self.range()]
    }

    /// Copy the marked values into an owned vector.
    pub fn to_vec(&self, samples: &[i32]) -> Vec<i32> {
        self.slice(samples).to_vec()
    }
}

///
/// Find the longest contiguous run in which every adjacent pair satisfies
/// `comparator`.
///
/// A run is closed as soon as the comparison fails and replaces the best run
/// only if it is strictly longer, so among runs of equal length the first one
/// wins. The run still open when the scan ends is considered as well.
///
/// An empty sequence yields `[0, 0)`. Any non-empty sequence yields a run of
/// at least one element.
///
/// # Arguments
/// - samples: sequence to scan
/// - comparator: strict order that adjacent elements of the run must follow
///
pub fn find_run<C: Comparator>(samples: &[i32], comparator: C) -> RunMarker {
    if samples.is_empty() {
        return RunMarker::default();
    }

    let mut best = RunMarker::new(0, 1);
    let mut start = 0;

    for (idx, pair) in samples.windows(2).enumerate() {
        if comparator.compare(pair[0], pair[1]) {
            continue;
        }
        // pair[1] sits at idx + 1 and opens the next run
        let end = idx + 1;
        if end - start > best.len() {
            best = RunMarker::new(start, end);
        }
        start = end;
    }

    if samples.len() - start > best.len() {
        best = RunMarker::new(start, samples.len());
    }

    best
}
