use serde::Serialize;

/// Descriptive statistics for a single sample.
///
/// Dispersion is reported twice: `std_dev` divides by the sample count
/// (population form), `estimate` divides by `count - 1` (unbiased form).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SampleStats {
    /// Number of values in the sample.
    pub count: usize,
    /// The arithmetic mean (average) of the sample.
    pub mean: f64,
    /// Population standard deviation (divisor = `count`).
    pub std_dev: f64,
    /// Unbiased sample standard deviation (divisor = `count - 1`).
    ///
    /// `None` when the sample holds a single value: the unbiased estimator
    /// is undefined there and the divisor would be zero.
    pub estimate: Option<f64>,
}

impl SampleStats {
    /// Computes descriptive statistics from a sequence of values.
    ///
    /// # Returns
    ///
    /// * `Some(SampleStats)` - if the sequence contains at least one value
    /// * `None` - if the sequence is empty
    ///
    /// # Examples
    ///
    /// ```
    /// use duostat_stats::descriptive::SampleStats;
    ///
    /// let stats = SampleStats::new([1.0, 2.0, 3.0]).unwrap();
    /// assert_eq!(stats.count, 3);
    /// assert_eq!(stats.mean, 2.0);
    /// assert!((stats.std_dev - (2.0f64 / 3.0).sqrt()).abs() < 1e-12);
    /// assert_eq!(stats.estimate, Some(1.0));
    /// ```
    #[must_use]
    pub fn new<I>(values: I) -> Option<Self>
    where
        I: IntoIterator<Item = f64>,
    {
        let values = values.into_iter().collect::<Vec<_>>();
        Self::from_slice(&values)
    }

    /// Computes descriptive statistics from a slice of values.
    ///
    /// # Returns
    ///
    /// * `Some(SampleStats)` - if the slice contains at least one value
    /// * `None` - if the slice is empty
    ///
    /// # Examples
    ///
    /// ```
    /// use duostat_stats::descriptive::SampleStats;
    ///
    /// assert!(SampleStats::from_slice(&[]).is_none());
    ///
    /// let single = SampleStats::from_slice(&[5.0]).unwrap();
    /// assert_eq!(single.mean, 5.0);
    /// assert_eq!(single.estimate, None);
    /// ```
    #[expect(clippy::cast_precision_loss)]
    #[must_use]
    pub fn from_slice(values: &[f64]) -> Option<Self> {
        if values.is_empty() {
            return None;
        }

        let count = values.len();
        let n = count as f64;
        let mean = values.iter().sum::<f64>() / n;
        let sum_sq_dev = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>();
        let std_dev = (sum_sq_dev / n).sqrt();
        let estimate = (count >= 2).then(|| (sum_sq_dev / (n - 1.0)).sqrt());

        Some(Self {
            count,
            mean,
            std_dev,
            estimate,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-12,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn test_empty_sample_has_no_stats() {
        assert_eq!(SampleStats::new([]), None);
    }

    #[test]
    fn test_one_two_three() {
        let stats = SampleStats::new([1.0, 2.0, 3.0]).unwrap();
        assert_eq!(stats.count, 3);
        assert_close(stats.mean, 2.0);
        assert_close(stats.std_dev, (2.0f64 / 3.0).sqrt());
        assert_close(stats.estimate.unwrap(), 1.0);
    }

    #[test]
    fn test_constant_sample() {
        let stats = SampleStats::new([4.0, 4.0, 4.0, 4.0]).unwrap();
        assert_close(stats.mean, 4.0);
        assert_close(stats.std_dev, 0.0);
        assert_close(stats.estimate.unwrap(), 0.0);
    }

    #[test]
    fn test_single_value_has_no_estimate() {
        let stats = SampleStats::new([9.0]).unwrap();
        assert_eq!(stats.count, 1);
        assert_close(stats.mean, 9.0);
        assert_close(stats.std_dev, 0.0);
        assert_eq!(stats.estimate, None);
    }

    #[test]
    fn test_two_values() {
        let stats = SampleStats::new([1.0, 3.0]).unwrap();
        assert_close(stats.mean, 2.0);
        assert_close(stats.std_dev, 1.0);
        assert_close(stats.estimate.unwrap(), 2.0f64.sqrt());
    }

    #[test]
    fn test_serializes_to_json() {
        let stats = SampleStats::new([1.0, 2.0, 3.0]).unwrap();
        let json = serde_json::to_value(&stats).unwrap();
        assert_eq!(json["count"], 3);
        assert_eq!(json["mean"], 2.0);
        assert_eq!(json["estimate"], 1.0);
    }
}
