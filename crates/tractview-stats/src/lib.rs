//! tractview-stats - Statistical primitives for the tractview dashboard engine
//!
//! This crate works on plain slices of `f64` and knows nothing about
//! datasets or categories:
//!
//! - **Weighted folds**: Σ(value × weight) / Σ(weight) with an explicit
//!   division-by-zero error
//! - **Quantiles**: floor-index quantiles over a sorted sample
//! - **Summary**: counts, min/max, quartiles, mean and weighted mean
//! - **Histogram**: equal-width or round-number bins
//!
//! Missing values are represented as NaN; every non-finite value is treated
//! as missing.

pub mod error;
pub mod histogram;
pub mod quantile;
pub mod summary;
pub mod weighted;

pub use error::*;
pub use histogram::*;
pub use quantile::*;
pub use summary::*;
pub use weighted::*;
