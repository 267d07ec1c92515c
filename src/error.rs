//! Error type for the checked (`try_*`) API.

/// Reason a statistic could not be computed.
///
/// Returned by the `try_*` functions. The plain functions map each variant
/// to their documented sentinel (`0.0`, `-1.0` or `None`).
#[derive(Debug, Clone, PartialEq)]
pub enum StatsError {
    /// The dataset has no elements.
    EmptyData,
    /// `n < 0`, `k < 0` or `k > n` for a selection of `k` items out of `n`.
    InvalidSelection { n: i64, k: i64 },
    /// A probability outside `[0, 1]` (or NaN).
    ProbabilityOutOfRange(f64),
    /// A percentile outside `[0, 100]` (or NaN).
    PercentileOutOfRange(f64),
    /// The scratch or output buffer could not be allocated.
    AllocationFailed { len: usize },
}

impl std::fmt::Display for StatsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StatsError::EmptyData => write!(f, "dataset is empty"),
            StatsError::InvalidSelection { n, k } => {
                write!(f, "invalid selection: cannot choose {k} of {n} items")
            }
            StatsError::ProbabilityOutOfRange(p) => {
                write!(f, "probability must be within [0, 1], got {p}")
            }
            StatsError::PercentileOutOfRange(p) => {
                write!(f, "percentile must be within [0, 100], got {p}")
            }
            StatsError::AllocationFailed { len } => {
                write!(f, "failed to allocate a buffer of {len} values")
            }
        }
    }
}

impl std::error::Error for StatsError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        assert_eq!(StatsError::EmptyData.to_string(), "dataset is empty");
        assert_eq!(
            StatsError::InvalidSelection { n: 5, k: 6 }.to_string(),
            "invalid selection: cannot choose 6 of 5 items"
        );
        assert_eq!(
            StatsError::ProbabilityOutOfRange(1.5).to_string(),
            "probability must be within [0, 1], got 1.5"
        );
        assert_eq!(
            StatsError::PercentileOutOfRange(-10.0).to_string(),
            "percentile must be within [0, 100], got -10"
        );
        assert_eq!(
            StatsError::AllocationFailed { len: 3 }.to_string(),
            "failed to allocate a buffer of 3 values"
        );
    }

    #[test]
    fn test_is_std_error() {
        let err: Box<dyn std::error::Error> = Box::new(StatsError::EmptyData);
        assert!(err.source().is_none());
    }
}
