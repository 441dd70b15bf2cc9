//! tractview-core - Aggregation engine for the census-tract dashboard
//!
//! This crate turns an in-memory table of per-region attributes into the
//! numbers the dashboard draws. It does no rendering and no file I/O.
//!
//! # Key Components
//!
//! - **Dataset**: identifier column plus equal-length numeric columns
//! - **CategoryGroup**: a fixed set of category columns with labels and colors
//! - **Shares**: population-weighted pie segments for a dataset or one row
//! - **Describe**: attribute summaries and histograms
//! - **DrillDown**: explicit slice → attribute routing
//! - **Report**: everything the histogram panel shows for one attribute
//! - **DashboardConfig**: column names, groups and histogram settings
//!
//! Every operation is a pure function of its inputs; results are plain
//! serializable records.

pub mod category;
pub mod color;
pub mod config;
pub mod dataset;
pub mod describe;
pub mod drilldown;
pub mod error;
pub mod report;
pub mod shares;

pub use category::*;
pub use color::Color;
pub use config::*;
pub use dataset::*;
pub use describe::*;
pub use drilldown::*;
pub use error::*;
pub use report::*;
pub use shares::*;

pub use tractview_stats::{AttributeSummary, Bin, BinEdges, HistogramOptions, Statistics, DEFAULT_BIN_COUNT};
