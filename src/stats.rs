//! Descriptive statistics over `f64` slices.
//!
//! Every statistic comes in two forms: a plain function returning `f64`
//! with a sentinel for invalid input, and a `try_*` function returning
//! [`Result`] with a [`StatsError`] naming the cause.
//!
//! # Sentinels
//!
//! | Function | Empty input | Other failure |
//! |---|---|---|
//! | [`mean`], [`median`], [`variance`], [`standard_deviation`] | `0.0` | `0.0` on allocation failure (median) |
//! | [`range`], [`mode`] | `-1.0` | `-1.0` on allocation failure (mode) |
//! | [`percentile`] | `-1.0` | `-1.0` for `p ∉ [0, 100]` or allocation failure |
//!
//! Sentinels overlap with legitimate results: the variance of a constant
//! dataset is `0.0`, and `-1.0` is a perfectly good mode or percentile of
//! negative data. Validate the input first, or use the `try_*` variants.
//!
//! # Algorithms
//!
//! - **Mean**: plain left-to-right summation.
//! - **Variance**: population variance (divide by `n`), two-pass.
//! - **Median / Mode / Percentile**: sort an owned copy of the input in
//!   ascending order. The caller's slice is never modified.
//! - **Percentile**: linear interpolation between closest ranks,
//!   `idx = p/100 · (n − 1)`.
//!
//! NaN and infinite values are outside the contract of this module. The
//! functions do not panic on them but the results are unspecified.
//! `-0.0` and `0.0` compare equal, so they keep their input order in the
//! sorted copy.

use crate::error::StatsError;

/// Returns the smallest and largest value of `data` in a single pass.
///
/// # Returns
/// - `None` if `data` is empty.
///
/// # Examples
/// ```
/// use u_statutil::stats::min_max;
/// assert_eq!(min_max(&[3.0, 1.0, 4.0, 1.0, 5.0]), Some((1.0, 5.0)));
/// assert_eq!(min_max(&[]), None);
/// ```
pub fn min_max(data: &[f64]) -> Option<(f64, f64)> {
    let (&first, rest) = data.split_first()?;
    let mut min = first;
    let mut max = first;
    for &x in rest {
        if x < min {
            min = x;
        }
        if x > max {
            max = x;
        }
    }
    Some((min, max))
}

/// Copies `data` into a new buffer sorted in ascending order.
///
/// The buffer is reserved with [`Vec::try_reserve_exact`], so running out
/// of memory is reported instead of aborting. The sort is stable and orders
/// by `<`; only NaN falls back to [`f64::total_cmp`].
///
/// # Errors
/// [`StatsError::AllocationFailed`] if the copy cannot be allocated.
pub fn sorted_copy(data: &[f64]) -> Result<Vec<f64>, StatsError> {
    let mut sorted = Vec::new();
    sorted
        .try_reserve_exact(data.len())
        .map_err(|_| StatsError::AllocationFailed { len: data.len() })?;
    sorted.extend_from_slice(data);
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or_else(|| a.total_cmp(b)));
    Ok(sorted)
}

fn non_empty(data: &[f64]) -> Result<&[f64], StatsError> {
    if data.is_empty() {
        Err(StatsError::EmptyData)
    } else {
        Ok(data)
    }
}

/// Computes the arithmetic mean.
///
/// # Returns
/// - `0.0` if `data` is empty.
///
/// # Examples
/// ```
/// use u_statutil::stats::mean;
/// assert_eq!(mean(&[1.0, 2.0, 3.0, 4.0, 5.0]), 3.0);
/// assert_eq!(mean(&[]), 0.0);
/// ```
pub fn mean(data: &[f64]) -> f64 {
    try_mean(data).unwrap_or(0.0)
}

/// Checked form of [`mean`].
///
/// # Errors
/// [`StatsError::EmptyData`] if `data` is empty.
pub fn try_mean(data: &[f64]) -> Result<f64, StatsError> {
    let data = non_empty(data)?;
    let sum: f64 = data.iter().sum();
    Ok(sum / data.len() as f64)
}

/// Computes the median without mutating the input.
///
/// Sorts a copy, then returns the middle element, or the average of the
/// two middle elements when the length is even.
///
/// # Complexity
/// Time: O(n log n), Space: O(n)
///
/// # Returns
/// - `0.0` if `data` is empty or the copy cannot be allocated.
///
/// # Examples
/// ```
/// use u_statutil::stats::median;
/// assert_eq!(median(&[1.0, 3.0, 2.0, 5.0, 4.0]), 3.0);
/// assert_eq!(median(&[1.0, 3.0, 2.0, 4.0]), 2.5);
/// ```
pub fn median(data: &[f64]) -> f64 {
    try_median(data).unwrap_or(0.0)
}

/// Checked form of [`median`].
///
/// # Errors
/// - [`StatsError::EmptyData`] if `data` is empty.
/// - [`StatsError::AllocationFailed`] if the sorted copy cannot be allocated.
pub fn try_median(data: &[f64]) -> Result<f64, StatsError> {
    let sorted = sorted_copy(non_empty(data)?)?;
    median_sorted(&sorted)
}

/// Computes the median of **pre-sorted** data without copying.
///
/// The caller must guarantee that `sorted_data` is in non-decreasing order.
///
/// # Errors
/// [`StatsError::EmptyData`] if `sorted_data` is empty.
pub fn median_sorted(sorted_data: &[f64]) -> Result<f64, StatsError> {
    let n = non_empty(sorted_data)?.len();
    let middle = n / 2;
    if n % 2 == 0 {
        Ok((sorted_data[middle - 1] + sorted_data[middle]) / 2.0)
    } else {
        Ok(sorted_data[middle])
    }
}

/// Computes the **population** variance (denominator `n`).
///
/// # Returns
/// - `0.0` if `data` is empty. A constant dataset also has variance `0.0`.
///
/// # Examples
/// ```
/// use u_statutil::stats::variance;
/// assert_eq!(variance(&[1.0, 2.0, 3.0, 4.0, 5.0]), 2.0);
/// ```
pub fn variance(data: &[f64]) -> f64 {
    try_variance(data).unwrap_or(0.0)
}

/// Checked form of [`variance`].
///
/// # Errors
/// [`StatsError::EmptyData`] if `data` is empty.
pub fn try_variance(data: &[f64]) -> Result<f64, StatsError> {
    let m = try_mean(data)?;
    let sum_of_squares: f64 = data
        .iter()
        .map(|&x| {
            let d = x - m;
            d * d
        })
        .sum();
    Ok(sum_of_squares / data.len() as f64)
}

/// Computes the population standard deviation, `sqrt(variance(data))`.
///
/// # Returns
/// - `0.0` if `data` is empty.
///
/// # Examples
/// ```
/// use u_statutil::stats::standard_deviation;
/// let sd = standard_deviation(&[1.0, 2.0, 3.0, 4.0, 5.0]);
/// assert!((sd - 2.0_f64.sqrt()).abs() < 1e-15);
/// ```
pub fn standard_deviation(data: &[f64]) -> f64 {
    try_standard_deviation(data).unwrap_or(0.0)
}

/// Checked form of [`standard_deviation`].
///
/// # Errors
/// [`StatsError::EmptyData`] if `data` is empty.
pub fn try_standard_deviation(data: &[f64]) -> Result<f64, StatsError> {
    try_variance(data).map(f64::sqrt)
}

/// Computes `max − min`.
///
/// # Returns
/// - `-1.0` if `data` is empty. Unlike the other statistics this is not
///   `0.0`, because `0.0` is the range of any constant dataset.
///
/// # Examples
/// ```
/// use u_statutil::stats::range;
/// assert_eq!(range(&[1.0, 5.0, 3.0, 2.0, 4.0]), 4.0);
/// assert_eq!(range(&[]), -1.0);
/// ```
pub fn range(data: &[f64]) -> f64 {
    try_range(data).unwrap_or(-1.0)
}

/// Checked form of [`range`].
///
/// # Errors
/// [`StatsError::EmptyData`] if `data` is empty.
pub fn try_range(data: &[f64]) -> Result<f64, StatsError> {
    let (min, max) = min_max(data).ok_or(StatsError::EmptyData)?;
    Ok(max - min)
}

/// Computes the most frequent value.
///
/// Ties are broken in favour of the **smallest** value: the sorted copy is
/// scanned in ascending order and a later run replaces the current winner
/// only if it is strictly longer.
///
/// # Complexity
/// Time: O(n log n), Space: O(n)
///
/// # Returns
/// - `-1.0` if `data` is empty or the copy cannot be allocated.
///
/// # Examples
/// ```
/// use u_statutil::stats::mode;
/// assert_eq!(mode(&[1.0, 2.0, 2.0, 3.0, 4.0]), 2.0);
/// assert_eq!(mode(&[2.0, 2.0, 1.0, 1.0]), 1.0);
/// ```
pub fn mode(data: &[f64]) -> f64 {
    try_mode(data).unwrap_or(-1.0)
}

/// Checked form of [`mode`].
///
/// # Errors
/// - [`StatsError::EmptyData`] if `data` is empty.
/// - [`StatsError::AllocationFailed`] if the sorted copy cannot be allocated.
pub fn try_mode(data: &[f64]) -> Result<f64, StatsError> {
    let sorted = sorted_copy(non_empty(data)?)?;
    mode_sorted(&sorted)
}

/// Computes the mode of **pre-sorted** data without copying.
///
/// Same tie-break as [`mode`]. The caller must guarantee that
/// `sorted_data` is in non-decreasing order.
///
/// # Errors
/// [`StatsError::EmptyData`] if `sorted_data` is empty.
pub fn mode_sorted(sorted_data: &[f64]) -> Result<f64, StatsError> {
    let (&first, rest) = sorted_data.split_first().ok_or(StatsError::EmptyData)?;

    let mut best_value = first;
    let mut best_count = 1_usize;
    let mut run_value = first;
    let mut run_count = 1_usize;

    for &x in rest {
        if x == run_value {
            run_count += 1;
            continue;
        }
        // Strictly greater: an equally long later run never wins.
        if run_count > best_count {
            best_count = run_count;
            best_value = run_value;
        }
        run_value = x;
        run_count = 1;
    }
    if run_count > best_count {
        best_value = run_value;
    }
    Ok(best_value)
}

/// Computes the `p`-th percentile (`p ∈ [0, 100]`) without mutating the
/// input.
///
/// # Algorithm
/// For sorted data `x[0..n]`:
/// 1. `idx = (p / 100) × (n − 1)`
/// 2. `lo = ⌊idx⌋`, `frac = idx − lo`, `hi = lo + 1`
/// 3. If `hi ≥ n` return `x[lo]`, else `x[lo] + frac × (x[hi] − x[lo])`
///
/// # Complexity
/// Time: O(n log n) (dominated by sort), Space: O(n)
///
/// # Returns
/// - `-1.0` if `data` is empty, `p` is outside `[0, 100]` (or NaN), or the
///   copy cannot be allocated.
///
/// # Examples
/// ```
/// use u_statutil::stats::percentile;
/// let data = [1.0, 2.0, 3.0, 4.0, 5.0];
/// assert_eq!(percentile(&data, 50.0), 3.0);
/// assert_eq!(percentile(&data, 100.0), 5.0);
/// assert_eq!(percentile(&data, 25.0), 2.0);
/// assert_eq!(percentile(&data, -10.0), -1.0);
/// ```
pub fn percentile(data: &[f64], p: f64) -> f64 {
    try_percentile(data, p).unwrap_or(-1.0)
}

/// Checked form of [`percentile`].
///
/// # Errors
/// - [`StatsError::EmptyData`] if `data` is empty.
/// - [`StatsError::PercentileOutOfRange`] if `p` is outside `[0, 100]`.
/// - [`StatsError::AllocationFailed`] if the sorted copy cannot be allocated.
pub fn try_percentile(data: &[f64], p: f64) -> Result<f64, StatsError> {
    let data = non_empty(data)?;
    check_percentile(p)?;
    let sorted = sorted_copy(data)?;
    percentile_sorted(&sorted, p)
}

/// Computes the `p`-th percentile of **pre-sorted** data.
///
/// Avoids the O(n log n) sort when querying several percentiles of the
/// same dataset. The caller must guarantee that `sorted_data` is in
/// non-decreasing order.
///
/// # Errors
/// - [`StatsError::EmptyData`] if `sorted_data` is empty.
/// - [`StatsError::PercentileOutOfRange`] if `p` is outside `[0, 100]`.
pub fn percentile_sorted(sorted_data: &[f64], p: f64) -> Result<f64, StatsError> {
    let n = non_empty(sorted_data)?.len();
    check_percentile(p)?;

    let idx = (p / 100.0) * (n - 1) as f64;
    let lo = idx.floor() as usize;
    let hi = lo + 1;
    let frac = idx - lo as f64;

    if hi >= n {
        Ok(sorted_data[lo.min(n - 1)])
    } else {
        let low = sorted_data[lo];
        Ok(low + frac * (sorted_data[hi] - low))
    }
}

fn check_percentile(p: f64) -> Result<(), StatsError> {
    if (0.0..=100.0).contains(&p) {
        Ok(())
    } else {
        Err(StatsError::PercentileOutOfRange(p))
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
