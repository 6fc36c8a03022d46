use serde::Serialize;

use crate::descriptive::SampleStats;

/// Pooled statistics for comparing the means of two independent samples.
///
/// All fields derive from the samples' unbiased estimates (`S`), so a
/// `PooledStats` only exists when both samples carry one (`count >= 2`).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PooledStats {
    /// Pooled degrees of freedom, `n1 + n2 - 2`.
    pub degrees_of_freedom: usize,
    /// Standard error of the mean difference assuming equal variances.
    pub equal_variance_se: f64,
    /// Standard error of the mean difference without the equal-variance
    /// assumption, `sqrt(S1²/n1 + S2²/n2)`.
    pub unequal_variance_se: f64,
    /// Welch–Satterthwaite approximate degrees of freedom.
    pub welch_df: f64,
}

impl PooledStats {
    /// Computes pooled statistics from two samples.
    ///
    /// # Returns
    ///
    /// * `Some(PooledStats)` - if both samples have an unbiased estimate
    /// * `None` - if either sample holds fewer than two values
    ///
    /// # Examples
    ///
    /// ```
    /// use duostat_stats::{descriptive::SampleStats, pooled::PooledStats};
    ///
    /// let first = SampleStats::new([1.0, 2.0, 3.0]).unwrap();
    /// let second = SampleStats::new([4.0, 5.0, 6.0]).unwrap();
    /// let pooled = PooledStats::new(&first, &second).unwrap();
    ///
    /// assert_eq!(pooled.degrees_of_freedom, 4);
    /// assert!((pooled.welch_df - 4.0).abs() < 1e-12);
    /// ```
    #[expect(clippy::cast_precision_loss)]
    #[must_use]
    pub fn new(first: &SampleStats, second: &SampleStats) -> Option<Self> {
        let s1 = first.estimate?;
        let s2 = second.estimate?;
        let n1 = first.count as f64;
        let n2 = second.count as f64;

        let degrees_of_freedom = first.count + second.count - 2;

        let pooled_variance =
            ((n1 - 1.0) * s1.powi(2) + (n2 - 1.0) * s2.powi(2)) / (n1 + n2 - 2.0);
        let equal_variance_se = (pooled_variance * ((n1 + n2) / (n1 * n2))).sqrt();

        let raw = s1.powi(2) / n1 + s2.powi(2) / n2;
        let unequal_variance_se = raw.sqrt();

        let welch_df = raw.powi(2)
            / (s1.powi(4) / (n1.powi(2) * (n1 - 1.0)) + s2.powi(4) / (n2.powi(2) * (n2 - 1.0)));

        Some(Self {
            degrees_of_freedom,
            equal_variance_se,
            unequal_variance_se,
            welch_df,
        })
    }
}
