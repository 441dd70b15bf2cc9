//! Weighted accumulation
//!
//! Running sums for population-weighted ratios live in a small value type
//! that is folded over a single call and then discarded. Two partial folds
//! can be merged, which lets callers split work across threads.

use serde::{Deserialize, Serialize};

use crate::error::{StatsError, StatsResult};

/// Returns `Some(x)` when `x` is a usable (finite) number
#[inline]
pub fn finite(x: f64) -> Option<f64> {
    x.is_finite().then_some(x)
}

/// Power of two bringing the largest usable weight near 1
///
/// Dividing weights by it is exact, so a scaled fold gives the same ratio as
/// an unscaled one while keeping Σ(weight) finite for any finite weights.
pub fn weight_scale(weights: &[f64]) -> f64 {
    let largest = weights
        .iter()
        .copied()
        .filter_map(finite)
        .map(f64::abs)
        .fold(0.0, f64::max);
    if largest == 0.0 {
        return 1.0;
    }
    largest.log2().floor().clamp(-1022.0, 1023.0).exp2()
}

/// Running Σ(value × weight) and Σ(weight)
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct WeightedSum {
    /// Σ(value × weight)
    pub numerator: f64,
    /// Σ(weight)
    pub total_weight: f64,
}

impl WeightedSum {
    /// Create an empty accumulator
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold in one observation
    pub fn add(mut self, value: f64, weight: f64) -> Self {
        self.numerator += value * weight;
        self.total_weight += weight;
        self
    }

    /// Combine two partial accumulations
    pub fn merge(self, other: Self) -> Self {
        Self {
            numerator: self.numerator + other.numerator,
            total_weight: self.total_weight + other.total_weight,
        }
    }

    /// Σ(value × weight) / Σ(weight)
    ///
    /// Fails with `DivisionByZero` on zero total weight and with `Overflow`
    /// when either sum or the ratio is not finite.
    pub fn mean(&self) -> StatsResult<f64> {
        if self.total_weight == 0.0 {
            return Err(StatsError::DivisionByZero);
        }
        finite(self.numerator)
            .zip(finite(self.total_weight))
            .and_then(|(num, total)| finite(num / total))
            .ok_or(StatsError::Overflow)
    }

    /// The weighted mean expressed as a percentage
    pub fn percentage(&self) -> StatsResult<f64> {
        Ok(self.mean()? * 100.0)
    }
}

/// Weighted mean over paired slices
///
/// Pairs with a missing value are skipped; a missing weight counts as zero.
pub fn weighted_mean(values: &[f64], weights: &[f64]) -> StatsResult<f64> {
    if values.len() != weights.len() {
        return Err(StatsError::LengthMismatch {
            expected: values.len(),
            actual: weights.len(),
        });
    }

    let scale = weight_scale(weights);
    values
        .iter()
        .zip(weights)
        .filter_map(|(&v, &w)| finite(v).map(|v| (v, finite(w).map_or(0.0, |w| w / scale))))
        .fold(WeightedSum::new(), |acc, (v, w)| acc.add(v, w))
        .mean()
}
