//! Dataset-level descriptive statistics and histograms
//!
//! Thin wrappers that resolve columns by name and hand the raw slices to
//! `tractview-stats`.

use tractview_stats::{histogram_with, summarize_values, AttributeSummary, Bin, HistogramOptions};

use crate::dataset::Dataset;
use crate::error::{EngineError, EngineResult};

/// Summarize one attribute, optionally with a population-weighted mean
///
/// Fails with `MissingField` when the attribute or the supplied weight
/// column does not exist. An attribute without usable values yields an
/// empty summary, not an error.
pub fn summarize(dataset: &Dataset, attribute: &str, weight_field: Option<&str>) -> EngineResult<AttributeSummary> {
    let values = dataset.column(attribute)?;
    let weights = weight_field.map(|w| dataset.column(w)).transpose()?;

    let summary = summarize_values(values, weights)?;
    if summary.is_empty() {
        tracing::debug!(attribute, "attribute has no non-null values");
    }
    Ok(summary)
}

/// Like [`summarize`], but an empty attribute is an `EmptySummary` error
pub fn summarize_non_empty(
    dataset: &Dataset,
    attribute: &str,
    weight_field: Option<&str>,
) -> EngineResult<AttributeSummary> {
    let summary = summarize(dataset, attribute, weight_field)?;
    if summary.is_empty() {
        return Err(EngineError::EmptySummary {
            attribute: attribute.to_string(),
        });
    }
    Ok(summary)
}

/// Histogram of one attribute's non-null values
pub fn attribute_histogram(dataset: &Dataset, attribute: &str, options: &HistogramOptions) -> EngineResult<Vec<Bin>> {
    let values: Vec<f64> = dataset
        .column(attribute)?
        .iter()
        .copied()
        .filter(|v| v.is_finite())
        .collect();

    Ok(histogram_with(&values, options)?)
}
