//! Counting and the binomial probability mass function.
//!
//! Counts are accumulated in `f64` rather than an integer type, so large
//! inputs lose precision gradually instead of overflowing. `C(n, k)` is built
//! as a running ratio and stays finite whenever the result fits in an `f64`;
//! `P(n, k)` saturates to `inf` once the product exceeds `f64::MAX`.
//!
//! # Invalid input
//! The plain functions return `0.0` for an invalid selection or probability.
//! `0.0` is never a valid count, but it is a valid probability, so callers
//! that need to tell the two apart should use the `try_*` variants.

use crate::error::StatsError;

fn check_selection(n: i64, k: i64) -> Result<(), StatsError> {
    if n < 0 || k < 0 || k > n {
        return Err(StatsError::InvalidSelection { n, k });
    }
    Ok(())
}

/// Number of ways to choose `k` of `n` items, ignoring order (`C(n, k)`).
///
/// Computed as the running ratio `C(n, i+1) = C(n, i)·(n−i)/(i+1)` over
/// `i < min(k, n−k)`. Every intermediate value is itself a binomial
/// coefficient, so the result is exact while it stays below 2⁵³ and never
/// passes through `k!` (which overflows `f64` for `k ≥ 171`).
///
/// # Returns
/// - `1.0` when `k == 0` (including `n == 0`).
/// - `0.0` if `n < 0`, `k < 0` or `k > n`.
///
/// # Examples
/// ```
/// use u_statutil::combinatorics::combinations;
/// assert_eq!(combinations(5, 3), 10.0);
/// assert_eq!(combinations(0, 0), 1.0);
/// assert_eq!(combinations(5, -1), 0.0);
/// ```
pub fn combinations(n: i64, k: i64) -> f64 {
    try_combinations(n, k).unwrap_or(0.0)
}

/// Checked form of [`combinations`].
///
/// # Errors
/// [`StatsError::InvalidSelection`] if `n < 0`, `k < 0` or `k > n`.
pub fn try_combinations(n: i64, k: i64) -> Result<f64, StatsError> {
    check_selection(n, k)?;
    let k = k.min(n - k);
    let mut ways = 1.0_f64;
    for i in 0..k {
        ways = ways * (n - i) as f64 / (i + 1) as f64;
    }
    Ok(ways)
}

/// Number of ordered arrangements of `k` out of `n` items (`P(n, k)`).
///
/// # Returns
/// - `1.0` when `k == 0` (including `n == 0`).
/// - `0.0` if `n < 0`, `k < 0` or `k > n`.
///
/// # Examples
/// ```
/// use u_statutil::combinatorics::permutations;
/// assert_eq!(permutations(5, 3), 60.0);
/// assert_eq!(permutations(5, 5), 120.0);
/// ```
pub fn permutations(n: i64, k: i64) -> f64 {
    try_permutations(n, k).unwrap_or(0.0)
}

/// Checked form of [`permutations`].
///
/// # Errors
/// [`StatsError::InvalidSelection`] if `n < 0`, `k < 0` or `k > n`.
pub fn try_permutations(n: i64, k: i64) -> Result<f64, StatsError> {
    check_selection(n, k)?;
    Ok((0..k).fold(1.0_f64, |acc, i| acc * (n - i) as f64))
}

/// Probability of exactly `success` successes in `trials` independent
/// Bernoulli trials with success probability `p`.
///
/// ```text
/// P(X = k) = C(n, k) · pᵏ · (1 − p)ⁿ⁻ᵏ
/// ```
///
/// # Returns
/// - `0.0` if `trials < 0`, `success` is outside `[0, trials]`, or `p` is
///   outside `[0, 1]` (or NaN). A valid PMF can also be `0.0`
///   (e.g. `p = 0` with `success > 0`).
/// - For very large `trials` the coefficient can overflow to `inf` while
///   the power terms underflow to `0.0`, giving NaN.
///
/// # Examples
/// ```
/// use u_statutil::combinatorics::binomial_probability;
/// assert!((binomial_probability(5, 3, 0.5) - 0.3125).abs() < 1e-12);
/// assert_eq!(binomial_probability(5, 6, 0.5), 0.0);
/// ```
pub fn binomial_probability(trials: i64, success: i64, p: f64) -> f64 {
    try_binomial_probability(trials, success, p).unwrap_or(0.0)
}

/// Checked form of [`binomial_probability`].
///
/// # Errors
/// - [`StatsError::InvalidSelection`] if `trials < 0` or `success` is
///   outside `[0, trials]`.
/// - [`StatsError::ProbabilityOutOfRange`] if `p` is outside `[0, 1]`.
pub fn try_binomial_probability(trials: i64, success: i64, p: f64) -> Result<f64, StatsError> {
    check_selection(trials, success)?;
    if !(0.0..=1.0).contains(&p) {
        return Err(StatsError::ProbabilityOutOfRange(p));
    }
    let ways = try_combinations(trials, success)?;
    let failures = trials - success;
    Ok(ways * p.powf(success as f64) * (1.0 - p).powf(failures as f64))
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(300))]

        // --- C(n, k) = C(n, n − k) ---
        #[test]
        fn combinations_symmetric(n in 0_i64..60, k in 0_i64..60) {
            prop_assume!(k <= n);
            let a = combinations(n, k);
            let b = combinations(n, n - k);
            prop_assert!((a - b).abs() <= 1e-9 * a.max(1.0), "C({},{})={} != C({},{})={}", n, k, a, n, n - k, b);
        }

        // --- Pascal's rule: C(n, k) = C(n−1, k−1) + C(n−1, k) ---
        #[test]
        fn combinations_pascal(n in 1_i64..50, k in 1_i64..50) {
            prop_assume!(k <= n);
            let lhs = combinations(n, k);
            let rhs = combinations(n - 1, k - 1) + combinations(n - 1, k);
            prop_assert!((lhs - rhs).abs() <= 1e-9 * lhs.max(1.0));
        }

        // --- P(n, k) = C(n, k) · k! ---
        #[test]
        fn permutations_are_ordered_combinations(n in 0_i64..20, k in 0_i64..20) {
            prop_assume!(k <= n);
            let k_factorial = permutations(k, k);
            let expected = combinations(n, k) * k_factorial;
            let actual = permutations(n, k);
            prop_assert!((actual - expected).abs() <= 1e-9 * actual.max(1.0));
        }

        // --- The PMF sums to one over all outcomes ---
        #[test]
        fn binomial_pmf_sums_to_one(trials in 0_i64..40, p in 0.0_f64..=1.0) {
            let total: f64 = (0..=trials)
                .map(|k| binomial_probability(trials, k, p))
                .sum();
            prop_assert!((total - 1.0).abs() < 1e-9, "sum={}", total);
        }

        #[test]
        fn binomial_in_unit_interval(
            trials in 0_i64..60,
            success in 0_i64..60,
            p in 0.0_f64..=1.0,
        ) {
            let pmf = binomial_probability(trials, success, p);
            prop_assert!((0.0..=1.0 + 1e-12).contains(&pmf));
        }
    }
}
