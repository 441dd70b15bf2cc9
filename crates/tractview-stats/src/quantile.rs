//! Floor-index quantiles over a sorted sample
//!
//! The quantile at proportion `p` of an ascending sample of length `n` is the
//! element at index `floor(p * n)`. There is no interpolation between
//! neighbours, so for small samples the result is biased towards the upper
//! element of the pair that an interpolating estimator would average:
//!
//! ```
//! use tractview_stats::SortedSample;
//!
//! let sample = SortedSample::from_data(&[8.0, 1.0, 7.0, 2.0, 6.0, 3.0, 5.0, 4.0]);
//! assert_eq!(sample.quantile(0.25), Some(3.0));
//! assert_eq!(sample.quantile(0.5), Some(5.0));
//! assert_eq!(sample.quantile(0.75), Some(7.0));
//! ```

use serde::{Deserialize, Serialize};

/// Finite values of a sample in ascending order
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SortedSample {
    values: Vec<f64>,
}

impl SortedSample {
    /// Build a sorted sample, discarding missing (non-finite) values
    ///
    /// Time complexity: O(n log n) for sorting
    pub fn from_data(data: &[f64]) -> Self {
        let mut values: Vec<f64> = data.iter().copied().filter(|x| x.is_finite()).collect();
        values.sort_by(f64::total_cmp);
        Self { values }
    }

    /// Quantile at proportion `p` using the `sorted[floor(p * n)]` rule
    ///
    /// Returns `None` for an empty sample or `p` outside `[0, 1]`.
    /// `p = 1.0` yields the maximum.
    pub fn quantile(&self, p: f64) -> Option<f64> {
        if self.values.is_empty() || !(0.0..=1.0).contains(&p) {
            return None;
        }
        let n = self.values.len();
        let idx = ((p * n as f64).floor() as usize).min(n - 1);
        Some(self.values[idx])
    }

    /// Lower quartile, median and upper quartile
    pub fn quartiles(&self) -> Option<Quartiles> {
        Some(Quartiles {
            q1: self.quantile(0.25)?,
            median: self.quantile(0.5)?,
            q3: self.quantile(0.75)?,
        })
    }

    /// Smallest value
    pub fn min(&self) -> Option<f64> {
        self.values.first().copied()
    }

    /// Largest value
    pub fn max(&self) -> Option<f64> {
        self.values.last().copied()
    }

    /// Number of distinct values
    pub fn count_unique(&self) -> usize {
        // Equal values are adjacent once sorted; `==` folds 0.0 and -0.0 together.
        self.values
            .iter()
            .enumerate()
            .filter(|&(i, v)| i == 0 || self.values[i - 1] != *v)
            .count()
    }

    /// Number of values in the sample
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Check if the sample is empty
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// The sorted values
    pub fn values(&self) -> &[f64] {
        &self.values
    }
}

/// Quartiles of a sample
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Quartiles {
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
}

impl Quartiles {
    /// Interquartile range (Q3 - Q1)
    pub fn iqr(&self) -> f64 {
        self.q3 - self.q1
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_quartiles_of_eight() {
        let data: Vec<f64> = (1..=8).map(|x| x as f64).collect();
        let q = SortedSample::from_data(&data).quartiles().unwrap();

        assert_eq!(q.q1, 3.0);
        assert_eq!(q.median, 5.0);
        assert_eq!(q.q3, 7.0);
        assert_eq!(q.iqr(), 4.0);
    }

    #[rstest]
    #[case(vec![4.0], 0.5, 4.0)]
    #[case(vec![1.0, 2.0], 0.5, 2.0)]
    #[case(vec![1.0, 2.0, 3.0], 0.25, 1.0)]
    #[case(vec![1.0, 2.0, 3.0], 0.75, 3.0)]
    #[case(vec![1.0, 2.0, 3.0, 4.0, 5.0], 1.0, 5.0)]
    #[case(vec![1.0, 2.0, 3.0, 4.0, 5.0], 0.0, 1.0)]
    fn test_floor_index_rule(#[case] data: Vec<f64>, #[case] p: f64, #[case] expected: f64) {
        assert_eq!(SortedSample::from_data(&data).quantile(p), Some(expected));
    }

    #[test]
    fn test_unsorted_input_and_missing_values() {
        let sample = SortedSample::from_data(&[3.0, f64::NAN, 1.0, 2.0, f64::INFINITY]);
        assert_eq!(sample.values(), &[1.0, 2.0, 3.0]);
        assert_eq!(sample.min(), Some(1.0));
        assert_eq!(sample.max(), Some(3.0));
    }

    #[test]
    fn test_quantile_out_of_range() {
        let sample = SortedSample::from_data(&[1.0, 2.0]);
        assert!(sample.quantile(-0.1).is_none());
        assert!(sample.quantile(1.5).is_none());
        assert!(sample.quantile(f64::NAN).is_none());
    }

    #[test]
    fn test_empty_sample() {
        let sample = SortedSample::from_data(&[]);
        assert!(sample.is_empty());
        assert!(sample.quartiles().is_none());
        assert!(sample.min().is_none());
        assert_eq!(sample.count_unique(), 0);
    }

    #[test]
    fn test_count_unique() {
        let sample = SortedSample::from_data(&[1.0, 1.0, 2.0, 2.0, 2.0, 3.0, 0.0, -0.0]);
        assert_eq!(sample.count_unique(), 4);
    }
}
