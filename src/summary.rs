//! All descriptive statistics of one dataset from a single sorted copy.

use crate::error::StatsError;
use crate::stats;
use crate::transform;

/// Descriptive statistics summarizing a dataset.
///
/// Each field holds exactly what the corresponding function in
/// [`crate::stats`] returns for the same (non-empty) input, but the data is
/// copied and sorted only once. The sorted copy is kept so further
/// percentiles can be read without sorting again.
///
/// # Examples
///
/// ```
/// use u_statutil::summary::Summary;
///
/// let s = Summary::new(&[4.0, 1.0, 2.0, 2.0, 5.0]).unwrap();
/// assert_eq!(s.count(), 5);
/// assert_eq!(s.min(), 1.0);
/// assert_eq!(s.max(), 5.0);
/// assert_eq!(s.median(), 2.0);
/// assert_eq!(s.mode(), 2.0);
/// assert_eq!(s.percentile(100.0), Ok(5.0));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    sorted: Vec<f64>,
    mean: f64,
    median: f64,
    mode: f64,
    variance: f64,
}

impl Summary {
    /// Computes the summary of `data`. The input is not modified.
    ///
    /// # Errors
    /// - [`StatsError::EmptyData`] if `data` is empty.
    /// - [`StatsError::AllocationFailed`] if the sorted copy cannot be
    ///   allocated.
    pub fn new(data: &[f64]) -> Result<Self, StatsError> {
        // Mean and variance are taken over the caller's order so they match
        // the standalone functions bit for bit.
        let mean = stats::try_mean(data)?;
        let variance = stats::try_variance(data)?;
        let sorted = stats::sorted_copy(data)?;
        let median = stats::median_sorted(&sorted)?;
        let mode = stats::mode_sorted(&sorted)?;
        Ok(Self {
            sorted,
            mean,
            median,
            mode,
            variance,
        })
    }

    /// Number of values.
    pub fn count(&self) -> usize {
        self.sorted.len()
    }

    /// Smallest value.
    pub fn min(&self) -> f64 {
        self.sorted[0]
    }

    /// Largest value.
    pub fn max(&self) -> f64 {
        self.sorted[self.sorted.len() - 1]
    }

    /// `max − min`.
    pub fn range(&self) -> f64 {
        self.max() - self.min()
    }

    /// Arithmetic mean.
    pub fn mean(&self) -> f64 {
        self.mean
    }

    /// Middle value, or the average of the two middle values.
    pub fn median(&self) -> f64 {
        self.median
    }

    /// Most frequent value; ties go to the smallest value.
    pub fn mode(&self) -> f64 {
        self.mode
    }

    /// Population variance.
    pub fn variance(&self) -> f64 {
        self.variance
    }

    /// Population standard deviation.
    pub fn standard_deviation(&self) -> f64 {
        self.variance.sqrt()
    }

    /// The data in ascending order.
    pub fn sorted(&self) -> &[f64] {
        &self.sorted
    }

    /// The `p`-th percentile, reusing the sorted copy.
    ///
    /// # Errors
    /// [`StatsError::PercentileOutOfRange`] if `p` is outside `[0, 100]`.
    pub fn percentile(&self, p: f64) -> Result<f64, StatsError> {
        stats::percentile_sorted(&self.sorted, p)
    }

    /// Standard score of `value` against this dataset; `0.0` if the
    /// dataset is constant.
    pub fn z_score(&self, value: f64) -> f64 {
        transform::z_score(value, self.mean, self.standard_deviation())
    }
}
