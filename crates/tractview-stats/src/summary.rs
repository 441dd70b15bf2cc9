//! Descriptive summaries of one attribute
//!
//! Provides the statistics shown next to a histogram:
//! - Non-null, null and distinct counts
//! - Min, max and floor-index quartiles
//! - Arithmetic mean and (optionally) weighted mean
//!
//! A summary of a column with no usable values has no statistics at all,
//! so callers cannot mistake "no data" for zeros.

use serde::{Deserialize, Serialize};

use crate::error::{StatsError, StatsResult};
use crate::quantile::SortedSample;
use crate::weighted;

/// Summary of one attribute
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttributeSummary {
    /// Number of usable (finite) values
    pub count_non_null: usize,
    /// Number of missing values
    pub count_null: usize,
    /// Number of distinct usable values
    pub count_unique: usize,
    /// Location statistics; `None` when `count_non_null == 0`
    pub statistics: Option<Statistics>,
}

/// Location statistics of a non-empty attribute
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Statistics {
    pub min: f64,
    pub max: f64,
    /// 25th percentile, `sorted[floor(0.25 * n)]`
    pub q1: f64,
    /// 50th percentile, `sorted[floor(0.5 * n)]`
    pub median: f64,
    /// 75th percentile, `sorted[floor(0.75 * n)]`
    pub q3: f64,
    /// Arithmetic mean
    pub mean: f64,
    /// Weighted mean, present only when weights were supplied and sum above zero
    pub weighted_mean: Option<f64>,
}

impl AttributeSummary {
    /// Summary for a column without any usable values
    fn empty(count_null: usize) -> Self {
        Self {
            count_non_null: 0,
            count_null,
            count_unique: 0,
            statistics: None,
        }
    }

    /// True when there were no usable values
    pub fn is_empty(&self) -> bool {
        self.statistics.is_none()
    }

    /// Location statistics, or `EmptySummary` when there were no usable values
    pub fn statistics(&self) -> StatsResult<&Statistics> {
        self.statistics.as_ref().ok_or(StatsError::EmptySummary)
    }

    /// Total number of rows that were summarized
    pub fn count_total(&self) -> usize {
        self.count_non_null + self.count_null
    }
}

/// Summarize a column of values, optionally weighting the mean
///
/// Non-finite values are missing. When `weights` is supplied it must be the
/// same length as `values`; the weighted mean is taken over rows with a
/// usable value, with missing weights counted as zero.
pub fn summarize_values(values: &[f64], weights: Option<&[f64]>) -> StatsResult<AttributeSummary> {
    if let Some(weights) = weights {
        if weights.len() != values.len() {
            return Err(StatsError::LengthMismatch {
                expected: values.len(),
                actual: weights.len(),
            });
        }
    }

    let sample = SortedSample::from_data(values);
    let count_non_null = sample.len();
    let count_null = values.len() - count_non_null;

    let (Some(min), Some(max), Some(quartiles)) = (sample.min(), sample.max(), sample.quartiles())
    else {
        tracing::debug!(rows = values.len(), "summary has no usable values");
        return Ok(AttributeSummary::empty(count_null));
    };

    let mean = arithmetic_mean(sample.values());

    // Zero or overflowing weight sums drop the weighted mean instead of failing the summary.
    let weighted_mean = weights.and_then(|weights| weighted::weighted_mean(values, weights).ok());

    Ok(AttributeSummary {
        count_non_null,
        count_null,
        count_unique: sample.count_unique(),
        statistics: Some(Statistics {
            min,
            max,
            q1: quartiles.q1,
            median: quartiles.median,
            q3: quartiles.q3,
            mean,
            weighted_mean,
        }),
    })
}

/// Mean of a non-empty slice of finite values, without overflowing
fn arithmetic_mean(values: &[f64]) -> f64 {
    let n = values.len() as f64;
    let sum: f64 = values.iter().sum();
    if sum.is_finite() {
        sum / n
    } else {
        values.iter().map(|v| v / n).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_basic() {
        let data: Vec<f64> = (1..=8).map(|x| x as f64).collect();
        let summary = summarize_values(&data, None).unwrap();

        assert_eq!(summary.count_non_null, 8);
        assert_eq!(summary.count_null, 0);
        assert_eq!(summary.count_unique, 8);

        let stats = summary.statistics().unwrap();
        assert_eq!(stats.min, 1.0);
        assert_eq!(stats.max, 8.0);
        assert_eq!(stats.q1, 3.0);
        assert_eq!(stats.median, 5.0);
        assert_eq!(stats.q3, 7.0);
        assert!((stats.mean - 4.5).abs() < 1e-12);
        assert!(stats.weighted_mean.is_none());
    }

    #[test]
    fn test_summary_with_nan() {
        let data = vec![1.0, 2.0, f64::NAN, 4.0, 4.0];
        let summary = summarize_values(&data, None).unwrap();

        assert_eq!(summary.count_non_null, 4);
        assert_eq!(summary.count_null, 1);
        assert_eq!(summary.count_unique, 3);
        assert_eq!(summary.count_total(), 5);
    }

    #[test]
    fn test_summary_all_missing_is_empty() {
        let data = vec![f64::NAN, f64::NAN];
        let summary = summarize_values(&data, None).unwrap();

        assert!(summary.is_empty());
        assert_eq!(summary.count_null, 2);
        assert_eq!(summary.statistics(), Err(StatsError::EmptySummary));
    }

    #[test]
    fn test_summary_weighted_mean() {
        let values = vec![0.2, 0.4, f64::NAN];
        let weights = vec![100.0, 300.0, 5000.0];
        let summary = summarize_values(&values, Some(&weights)).unwrap();

        let weighted = summary.statistics().unwrap().weighted_mean.unwrap();
        assert!((weighted - 0.35).abs() < 1e-12);
    }

    #[test]
    fn test_summary_zero_weight_omits_weighted_mean() {
        let values = vec![0.2, 0.4];
        let weights = vec![0.0, f64::NAN];
        let summary = summarize_values(&values, Some(&weights)).unwrap();

        assert!(summary.statistics().unwrap().weighted_mean.is_none());
    }

    #[test]
    fn test_summary_huge_values_stay_finite() {
        let summary = summarize_values(&[1e308, 1e308], None).unwrap();
        assert_eq!(summary.statistics().unwrap().mean, 1e308);

        let summary = summarize_values(&[1.7e308, 1.7e308, -1.0e308], None).unwrap();
        assert!(summary.statistics().unwrap().mean.is_finite());
    }

    #[test]
    fn test_summary_huge_weights() {
        let summary = summarize_values(&[1.0, 2.0], Some(&[1e308, 1e308])).unwrap();
        assert_eq!(summary.statistics().unwrap().weighted_mean, Some(1.5));
    }

    #[test]
    fn test_summary_overflowing_weighted_mean_is_omitted() {
        let summary = summarize_values(&[1.7e308, 1.7e308], Some(&[1.0, 1.0])).unwrap();
        let stats = summary.statistics().unwrap();
        assert!(stats.weighted_mean.is_none());
        assert_eq!(stats.mean, 1.7e308);
    }

    #[test]
    fn test_summary_weight_length_mismatch() {
        let err = summarize_values(&[1.0, 2.0], Some(&[1.0])).unwrap_err();
        assert!(matches!(err, StatsError::LengthMismatch { .. }));
    }

    #[test]
    fn test_summary_serializes_empty_state_as_null() {
        let summary = summarize_values(&[], None).unwrap();
        let json = serde_json::to_string(&summary).unwrap();
        assert!(json.contains("\"statistics\":null"));
    }
}
