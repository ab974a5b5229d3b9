///
/// Calculate the median of a sequence using order statistics.
///
/// Works on a private copy of `samples`, so the caller's slice is never
/// reordered. Selection uses [`slice::select_nth_unstable`], which runs in
/// O(n) time in the worst case.
///
/// For an even number of samples the upper middle element is selected first.
/// After that partition every element to its left is no larger than it, so
/// the lower middle element is simply the maximum of the left partition.
///
/// Returns `None` for an empty sequence.
///
pub fn calc_median(samples: &[i32]) -> Option<f64> {
    if samples.is_empty() {
        return None;
    }

    let mut data = samples.to_vec();
    let mid = data.len() / 2;
    let (lower, upper_mid, _) = data.select_nth_unstable(mid);
    let upper_mid = *upper_mid as f64;

    if samples.len() % 2 == 1 {
        return Some(upper_mid);
    }

    // lower is non-empty here: even length >= 2 means mid >= 1
    let lower_mid = lower.iter().copied().max()? as f64;

    Some((lower_mid + upper_mid) / 2.0)
}
