//! Weighted category shares
//!
//! Turns per-row category fractions into pie-chart segments. Across a whole
//! dataset each category's share is
//!
//! ```text
//! Σ(fraction[i] × weight[i]) / Σ(weight[i]) × 100
//! ```
//!
//! with the weight sum computed once and shared by every category in the
//! group. For a single row the share is just `fraction[row] × 100`.
//!
//! Rows with a missing weight are skipped. A missing fraction in a weighted
//! row contributes nothing to its category but the row's weight still counts
//! toward the denominator.
//!
//! Weights are divided by a power of two near the largest weight before
//! summing, so very large populations cannot overflow the denominator.

use serde::{Deserialize, Serialize};
use tractview_stats::{finite, weight_scale, WeightedSum};

use crate::category::{Category, CategoryGroup};
use crate::color::Color;
use crate::dataset::Dataset;
use crate::error::{EngineError, EngineResult};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Percentage below which a pie slice carries no in-slice label
pub const SLICE_LABEL_THRESHOLD: f64 = 5.0;

/// One pie segment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Share {
    /// Column the share was computed from
    pub key: String,
    /// Display label
    pub label: String,
    /// Percentage in `[0, 100]` for well-formed data; `None` when undefined
    pub percentage: Option<f64>,
    /// Display color
    pub color: Color,
}

impl Share {
    fn from_category(category: &Category, percentage: Option<f64>) -> Self {
        Self {
            key: category.key.clone(),
            label: category.label.clone(),
            percentage,
            color: category.color,
        }
    }

    /// Legend entry, e.g. `White_CT: 41.3%`
    pub fn legend_text(&self) -> String {
        match self.percentage {
            Some(p) => format!("{}: {:.1}%", self.label, p),
            None => format!("{}: N/A", self.label),
        }
    }

    /// In-slice label, shown only for slices above `threshold` percent
    pub fn slice_text(&self, threshold: f64) -> Option<String> {
        self.percentage
            .filter(|&p| p > threshold)
            .map(|p| format!("{:.1}%", p))
    }
}

/// Sum of the defined percentages
pub fn total_percentage(shares: &[Share]) -> f64 {
    shares.iter().filter_map(|s| s.percentage).sum()
}

/// Population-weighted shares of every category in `group`
///
/// Fails with `MissingField` when the weight column or any category column is
/// absent, with `DivisionByZero` when the weights sum to zero, and with
/// `Stats(Overflow)` when a weighted sum leaves the finite range.
pub fn compute_shares(dataset: &Dataset, weight_field: &str, group: &CategoryGroup) -> EngineResult<Vec<Share>> {
    let weights = dataset.column(weight_field)?;
    let columns = group
        .categories()
        .iter()
        .map(|c| dataset.column(&c.key))
        .collect::<EngineResult<Vec<_>>>()?;

    let scale = weight_scale(weights);
    let total_weight: f64 = weights.iter().copied().filter_map(finite).map(|w| w / scale).sum();
    if total_weight == 0.0 {
        tracing::warn!(
            group = group.name(),
            weight_field,
            "total weight is zero; shares are undefined"
        );
        return Err(EngineError::DivisionByZero {
            weight_field: weight_field.to_string(),
        });
    }

    let numerators = weighted_numerators(&columns, weights, scale);

    tracing::debug!(
        group = group.name(),
        rows = dataset.row_count(),
        total_weight,
        "computed weighted shares"
    );

    group
        .categories()
        .iter()
        .zip(numerators)
        .map(|(category, numerator)| -> EngineResult<Share> {
            let percentage = WeightedSum {
                numerator,
                total_weight,
            }
            .percentage()?;
            Ok(Share::from_category(category, Some(percentage)))
        })
        .collect()
}

/// Shares of one row: each category's value × 100
///
/// Only `row` is read. A missing value gives an undefined share.
pub fn compute_row_shares(dataset: &Dataset, row: usize, group: &CategoryGroup) -> EngineResult<Vec<Share>> {
    dataset.require(group.keys())?;

    if row >= dataset.row_count() {
        return Err(EngineError::IndexOutOfRange {
            index: row,
            len: dataset.row_count(),
        });
    }

    group
        .categories()
        .iter()
        .map(|category| -> EngineResult<Share> {
            let value = dataset.value(&category.key, row)?;
            Ok(Share::from_category(category, value.map(|v| v * 100.0)))
        })
        .collect()
}

/// Σ(value × weight / scale) for one column over rows with a usable weight
fn weighted_numerator(values: &[f64], weights: &[f64], scale: f64) -> f64 {
    values
        .iter()
        .zip(weights)
        .filter_map(|(&v, &w)| finite(w).map(|w| finite(v).unwrap_or(0.0) * (w / scale)))
        .sum()
}

/// One numerator per category column, in column order
fn weighted_numerators(columns: &[&[f64]], weights: &[f64], scale: f64) -> Vec<f64> {
    #[cfg(feature = "parallel")]
    {
        columns
            .par_iter()
            .map(|values| weighted_numerator(values, weights, scale))
            .collect()
    }

    #[cfg(not(feature = "parallel"))]
    {
        columns
            .iter()
            .map(|values| weighted_numerator(values, weights, scale))
            .collect()
    }
}
