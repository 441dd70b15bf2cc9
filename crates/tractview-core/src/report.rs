//! Attribute reports
//!
//! Everything the histogram panel shows for one selected attribute, computed
//! in one pass: the summary, the bins, how many values are missing and a
//! short preview of per-region values.

use serde::{Deserialize, Serialize};
use tractview_stats::{AttributeSummary, Bin, HistogramOptions};

use crate::color::{palette, Color};
use crate::dataset::Dataset;
use crate::describe::{attribute_histogram, summarize};
use crate::drilldown::DrillDown;
use crate::error::EngineResult;

/// Number of regions listed in a preview
pub const DEFAULT_PREVIEW_ROWS: usize = 10;

/// Placeholder for statistics of an attribute without values
pub const NO_DATA: &str = "no data";

/// Options for [`inspect`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportOptions {
    /// Column used for the weighted mean; `None` skips it
    pub weight_field: Option<String>,
    /// Histogram layout
    pub histogram: HistogramOptions,
    /// Number of regions in the preview
    pub preview_rows: usize,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            weight_field: Some("total_population".to_string()),
            histogram: HistogramOptions::default(),
            preview_rows: DEFAULT_PREVIEW_ROWS,
        }
    }
}

/// Null versus non-null counts of an attribute
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NullComposition {
    pub non_null: usize,
    pub null: usize,
}

/// A counted pie slice
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountSlice {
    pub label: String,
    pub count: usize,
    pub color: Color,
}

impl NullComposition {
    /// Two-slice pie: non-null first, then null
    pub fn slices(&self) -> Vec<CountSlice> {
        vec![
            CountSlice {
                label: "Non-null".to_string(),
                count: self.non_null,
                color: palette::PRESENT,
            },
            CountSlice {
                label: "Null".to_string(),
                count: self.null,
                color: palette::MISSING,
            },
        ]
    }
}

/// One region's value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegionValue {
    pub region_id: String,
    pub value: Option<f64>,
}

impl RegionValue {
    /// Value with six decimals, or `N/A`
    pub fn display_value(&self) -> String {
        match self.value {
            Some(v) => format!("{:.6}", v),
            None => "N/A".to_string(),
        }
    }
}

/// The first few regions of an attribute
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegionPreview {
    pub rows: Vec<RegionValue>,
    /// Regions not listed
    pub remaining: usize,
}

/// A labelled, formatted summary line
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryRow {
    pub label: String,
    pub value: String,
}

impl SummaryRow {
    fn new(label: &str, value: String) -> Self {
        Self {
            label: label.to_string(),
            value,
        }
    }
}

/// Everything shown for one attribute
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttributeReport {
    pub attribute: String,
    pub summary: AttributeSummary,
    pub histogram: Vec<Bin>,
    pub composition: NullComposition,
    pub preview: RegionPreview,
}

impl AttributeReport {
    /// Formatted summary table
    pub fn summary_rows(&self) -> Vec<SummaryRow> {
        summary_rows(&self.summary)
    }
}

/// Formatted summary table
///
/// Statistics use six decimals. An empty summary shows [`NO_DATA`] in place
/// of every statistic; the weighted mean row appears only when it exists.
pub fn summary_rows(summary: &AttributeSummary) -> Vec<SummaryRow> {
    let mut rows = vec![
        SummaryRow::new("Non-null values", summary.count_non_null.to_string()),
        SummaryRow::new("Unique values", summary.count_unique.to_string()),
    ];

    let Some(stats) = summary.statistics.as_ref() else {
        for label in ["Minimum", "25% (Q1)", "50% (Median)", "Mean", "75% (Q3)", "Maximum"] {
            rows.push(SummaryRow::new(label, NO_DATA.to_string()));
        }
        return rows;
    };

    let fixed = |v: f64| format!("{:.6}", v);
    rows.push(SummaryRow::new("Minimum", fixed(stats.min)));
    rows.push(SummaryRow::new("25% (Q1)", fixed(stats.q1)));
    rows.push(SummaryRow::new("50% (Median)", fixed(stats.median)));
    rows.push(SummaryRow::new("Mean", fixed(stats.mean)));
    if let Some(weighted) = stats.weighted_mean {
        rows.push(SummaryRow::new("Weighted mean", fixed(weighted)));
    }
    rows.push(SummaryRow::new("75% (Q3)", fixed(stats.q3)));
    rows.push(SummaryRow::new("Maximum", fixed(stats.max)));
    rows
}

/// Build the report for `attribute`
pub fn inspect(dataset: &Dataset, attribute: &str, options: &ReportOptions) -> EngineResult<AttributeReport> {
    let summary = summarize(dataset, attribute, options.weight_field.as_deref())?;
    let histogram = attribute_histogram(dataset, attribute, &options.histogram)?;
    let values = dataset.column(attribute)?;

    let rows: Vec<RegionValue> = dataset
        .region_ids()
        .iter()
        .zip(values)
        .take(options.preview_rows)
        .map(|(id, &v)| RegionValue {
            region_id: id.clone(),
            value: v.is_finite().then_some(v),
        })
        .collect();
    let remaining = dataset.row_count() - rows.len();

    tracing::debug!(
        attribute,
        bins = histogram.len(),
        non_null = summary.count_non_null,
        "built attribute report"
    );

    Ok(AttributeReport {
        attribute: attribute.to_string(),
        composition: NullComposition {
            non_null: summary.count_non_null,
            null: summary.count_null,
        },
        summary,
        histogram,
        preview: RegionPreview { rows, remaining },
    })
}

/// Build the report for the attribute routed from a selected category key
pub fn inspect_selection(
    dataset: &Dataset,
    drilldown: &DrillDown,
    key: &str,
    options: &ReportOptions,
) -> EngineResult<AttributeReport> {
    let attribute = drilldown.attribute_for(key)?;
    inspect(dataset, attribute, options)
}
