//! Rescaling transforms: min-max normalization and z-scores.

use crate::error::StatsError;
use crate::stats::min_max;

/// Rescales `data` onto `[0, 1]` with `(x − min) / (max − min)`.
///
/// The result is a new vector of the same length; the input is untouched.
/// If every value is equal (`max == min`) each output element is `0.0`
/// rather than the NaN a `0 / 0` division would give.
///
/// # Complexity
/// Time: O(n) (two passes), Space: O(n)
///
/// # Returns
/// - `None` if `data` is empty or the output cannot be allocated.
///
/// # Examples
/// ```
/// use u_statutil::transform::normalize;
/// assert_eq!(normalize(&[1.0, 3.0, 5.0]), Some(vec![0.0, 0.5, 1.0]));
/// assert_eq!(normalize(&[4.0, 4.0]), Some(vec![0.0, 0.0]));
/// assert_eq!(normalize(&[]), None);
/// ```
pub fn normalize(data: &[f64]) -> Option<Vec<f64>> {
    try_normalize(data).ok()
}

/// Checked form of [`normalize`].
///
/// # Errors
/// - [`StatsError::EmptyData`] if `data` is empty.
/// - [`StatsError::AllocationFailed`] if the output cannot be allocated.
pub fn try_normalize(data: &[f64]) -> Result<Vec<f64>, StatsError> {
    let (min, max) = min_max(data).ok_or(StatsError::EmptyData)?;

    let mut normalized = Vec::new();
    normalized
        .try_reserve_exact(data.len())
        .map_err(|_| StatsError::AllocationFailed { len: data.len() })?;

    let range = max - min;
    if range == 0.0 {
        normalized.resize(data.len(), 0.0);
    } else {
        normalized.extend(data.iter().map(|&x| (x - min) / range));
    }
    Ok(normalized)
}

/// Standard score of `value`: `(value − mean) / std_dev`.
///
/// Returns exactly `0.0` when `std_dev == 0.0` instead of dividing by zero.
///
/// # Examples
/// ```
/// use u_statutil::transform::z_score;
/// assert_eq!(z_score(5.0, 3.0, 2.0), 1.0);
/// assert_eq!(z_score(5.0, 3.0, 0.0), 0.0);
/// ```
pub fn z_score(value: f64, mean: f64, std_dev: f64) -> f64 {
    if std_dev == 0.0 {
        return 0.0;
    }
    (value - mean) / std_dev
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_endpoints() {
        let out = normalize(&[1.0, 2.0, 3.0, 4.0, 5.0]).unwrap();
        assert_eq!(out.len(), 5);
        assert!(out[0].abs() < 1e-6);
        assert!((out[4] - 1.0).abs() < 1e-6);
        assert!((out[2] - 0.5).abs() < 1e-15);
    }

    #[test]
    fn test_normalize_unsorted_input() {
        let out = normalize(&[10.0, -10.0, 0.0]).unwrap();
        assert_eq!(out, vec![1.0, 0.0, 0.5]);
    }

    #[test]
    fn test_normalize_constant_is_zero_not_nan() {
        let out = normalize(&[3.0; 4]).unwrap();
        assert_eq!(out, vec![0.0; 4]);
        assert!(out.iter().all(|x| !x.is_nan()));
    }

    #[test]
    fn test_normalize_single() {
        assert_eq!(normalize(&[42.0]), Some(vec![0.0]));
    }

    #[test]
    fn test_normalize_empty() {
        assert_eq!(normalize(&[]), None);
        assert_eq!(try_normalize(&[]), Err(StatsError::EmptyData));
    }

    #[test]
    fn test_normalize_does_not_mutate() {
        let data = [5.0, 1.0, 3.0];
        let _ = normalize(&data);
        assert_eq!(data, [5.0, 1.0, 3.0]);
    }

    #[test]
    fn test_z_score() {
        assert!((z_score(5.0, 3.0, 2.0) - 1.0).abs() < 1e-6);
        assert_eq!(z_score(1.0, 3.0, 2.0), -1.0);
        assert_eq!(z_score(3.0, 3.0, 2.0), 0.0);
    }

    #[test]
    fn test_z_score_zero_std_dev() {
        assert_eq!(z_score(5.0, 3.0, 0.0), 0.0);
        assert_eq!(z_score(5.0, 3.0, -0.0), 0.0);
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn finite_vec(min_len: usize, max_len: usize) -> impl Strategy<Value = Vec<f64>> {
        proptest::collection::vec(-1e6_f64..1e6, min_len..=max_len)
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(500))]

        #[test]
        fn normalize_in_unit_interval(data in finite_vec(1, 100)) {
            let out = normalize(&data).unwrap();
            prop_assert_eq!(out.len(), data.len());
            for &x in &out {
                prop_assert!((0.0..=1.0).contains(&x), "{} outside [0, 1]", x);
            }
        }

        // --- normalize(normalize(x)) = normalize(x) when range ≠ 0 ---
        #[test]
        fn normalize_idempotent(data in finite_vec(2, 100)) {
            let (mn, mx) = min_max(&data).unwrap();
            prop_assume!(mx > mn);
            let once = normalize(&data).unwrap();
            let twice = normalize(&once).unwrap();
            for (a, b) in once.iter().zip(&twice) {
                prop_assert!((a - b).abs() < 1e-12, "{} != {}", a, b);
            }
        }

        #[test]
        fn normalize_preserves_order(data in finite_vec(2, 100)) {
            let out = normalize(&data).unwrap();
            for i in 0..data.len() {
                for j in 0..data.len() {
                    if data[i] < data[j] {
                        prop_assert!(out[i] <= out[j]);
                    }
                }
            }
        }

        // --- z_score inverts value = mean + z · std_dev ---
        #[test]
        fn z_score_roundtrip(
            value in -1e6_f64..1e6,
            mean in -1e6_f64..1e6,
            std_dev in 1e-3_f64..1e6,
        ) {
            let z = z_score(value, mean, std_dev);
            let back = mean + z * std_dev;
            prop_assert!((back - value).abs() < 1e-6 * value.abs().max(mean.abs()).max(1.0));
        }
    }
}
