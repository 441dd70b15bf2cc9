//! Histogram binning
//!
//! Values are partitioned into contiguous bins spanning `[min, max]` of the
//! data. Every bin is half-open `[lower, upper)` except the last, which is
//! closed so that the maximum is counted. Membership is decided against the
//! reported edges themselves, so a value never lands in a bin whose bounds
//! exclude it.
//!
//! Two edge layouts are supported:
//!
//! - [`BinEdges::EqualWidth`]: exactly `bin_count` bins of width
//!   `(max - min) / bin_count`
//! - [`BinEdges::Nice`]: inner edges on round multiples (1, 2 or 5 × 10^k),
//!   giving roughly `bin_count` bins with readable axis labels
//!
//! When every value is equal the histogram is a single bin `[v, v]` holding
//! all of them, regardless of layout.

use serde::{Deserialize, Serialize};

use crate::error::{StatsError, StatsResult};

/// Default number of bins for an attribute histogram
pub const DEFAULT_BIN_COUNT: usize = 20;

/// One histogram bin
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bin {
    /// Inclusive lower bound
    pub lower_bound: f64,
    /// Exclusive upper bound (inclusive for the last bin)
    pub upper_bound: f64,
    /// Number of values in the bin
    pub count: usize,
}

impl Bin {
    /// Width of the bin
    pub fn width(&self) -> f64 {
        self.upper_bound - self.lower_bound
    }

    /// Whether `value` belongs to this bin
    ///
    /// Pass `closed = true` for the last bin of a histogram, whose upper
    /// bound is inclusive.
    pub fn contains(&self, value: f64, closed: bool) -> bool {
        value >= self.lower_bound && (value < self.upper_bound || (closed && value <= self.upper_bound))
    }
}

/// Bin edge layout
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BinEdges {
    /// `bin_count` bins of identical width
    #[default]
    EqualWidth,
    /// Round-number inner edges, approximately `bin_count` bins
    Nice,
}

/// Histogram options
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HistogramOptions {
    /// Requested number of bins
    pub bin_count: usize,
    /// Edge layout
    pub edges: BinEdges,
}

impl Default for HistogramOptions {
    fn default() -> Self {
        Self {
            bin_count: DEFAULT_BIN_COUNT,
            edges: BinEdges::default(),
        }
    }
}

impl HistogramOptions {
    /// Equal-width options with the given bin count
    pub fn equal_width(bin_count: usize) -> Self {
        Self {
            bin_count,
            edges: BinEdges::EqualWidth,
        }
    }

    /// Round-number options with the given target bin count
    pub fn nice(bin_count: usize) -> Self {
        Self {
            bin_count,
            edges: BinEdges::Nice,
        }
    }
}

/// Equal-width histogram of `values` with `bin_count` bins
///
/// Bins are returned in ascending order of `lower_bound`. Empty input gives
/// an empty histogram.
pub fn histogram(values: &[f64], bin_count: usize) -> StatsResult<Vec<Bin>> {
    histogram_with(values, &HistogramOptions::equal_width(bin_count))
}

/// Histogram of `values` using the given options
pub fn histogram_with(values: &[f64], options: &HistogramOptions) -> StatsResult<Vec<Bin>> {
    if options.bin_count == 0 {
        return Err(StatsError::InvalidBinCount {
            bin_count: options.bin_count,
        });
    }

    let finite: Vec<f64> = values.iter().copied().filter(|x| x.is_finite()).collect();
    if finite.len() != values.len() {
        tracing::debug!(
            skipped = values.len() - finite.len(),
            "ignoring non-finite values while binning"
        );
    }

    if finite.is_empty() {
        return Ok(Vec::new());
    }

    let min = finite.iter().copied().fold(f64::INFINITY, f64::min);
    let max = finite.iter().copied().fold(f64::NEG_INFINITY, f64::max);

    if min == max {
        return Ok(vec![Bin {
            lower_bound: min,
            upper_bound: max,
            count: finite.len(),
        }]);
    }

    let edges = match options.edges {
        BinEdges::EqualWidth => equal_width_edges(min, max, options.bin_count),
        BinEdges::Nice => nice_edges(min, max, options.bin_count),
    };

    Ok(count_into_bins(&finite, &edges))
}

/// Largest bin count, or 1 when there is nothing to scale against
///
/// Suitable as the upper end of a count axis.
pub fn max_count(bins: &[Bin]) -> usize {
    bins.iter().map(|b| b.count).max().filter(|&m| m > 0).unwrap_or(1)
}

/// `bin_count + 1` edges from `min` to exactly `max`
fn equal_width_edges(min: f64, max: f64, bin_count: usize) -> Vec<f64> {
    let n = bin_count as f64;
    let width = (max - min) / n;
    let mut edges: Vec<f64> = if width.is_finite() {
        (0..bin_count).map(|k| min + k as f64 * width).collect()
    } else {
        // Span exceeds f64::MAX; interpolate so no intermediate overflows.
        (0..bin_count)
            .map(|k| {
                let t = k as f64 / n;
                min * (1.0 - t) + max * t
            })
            .collect()
    };
    edges.push(max);
    edges
}

/// `min`, the round-number ticks strictly inside `(min, max)`, then `max`
fn nice_edges(min: f64, max: f64, bin_count: usize) -> Vec<f64> {
    let mut edges = vec![min];
    edges.extend(ticks(min, max, bin_count as f64).into_iter().filter(|&t| t > min && t < max));
    edges.push(max);
    edges
}

/// Tally values into the bins delimited by `edges`
///
/// A value's bin is the number of inner edges at or below it, which makes
/// every bin `[lower, upper)` and the last one closed.
fn count_into_bins(values: &[f64], edges: &[f64]) -> Vec<Bin> {
    let inner = &edges[1..edges.len() - 1];
    let mut counts = vec![0usize; edges.len() - 1];

    for &v in values {
        counts[inner.partition_point(|&e| e <= v)] += 1;
    }

    edges
        .windows(2)
        .zip(counts)
        .map(|(w, count)| Bin {
            lower_bound: w[0],
            upper_bound: w[1],
            count,
        })
        .collect()
}

/// Tick spacing as integer range and increment
///
/// A negative increment `-k` means a spacing of `1 / k`, which keeps
/// sub-unit ticks exact.
fn tick_spec(start: f64, stop: f64, count: f64) -> (f64, f64, f64) {
    let step = (stop - start) / count.max(0.0);
    let power = step.log10().floor();
    let error = step / 10f64.powf(power);
    let factor = if error >= 50f64.sqrt() {
        10.0
    } else if error >= 10f64.sqrt() {
        5.0
    } else if error >= 2f64.sqrt() {
        2.0
    } else {
        1.0
    };

    let (i1, i2, inc) = if power < 0.0 {
        let k = 10f64.powf(-power) / factor;
        let mut i1 = (start * k).round();
        let mut i2 = (stop * k).round();
        if i1 / k < start {
            i1 += 1.0;
        }
        if i2 / k > stop {
            i2 -= 1.0;
        }
        (i1, i2, -k)
    } else {
        let k = 10f64.powf(power) * factor;
        let mut i1 = (start / k).round();
        let mut i2 = (stop / k).round();
        if i1 * k < start {
            i1 += 1.0;
        }
        if i2 * k > stop {
            i2 -= 1.0;
        }
        (i1, i2, k)
    };

    if i2 < i1 && (0.5..2.0).contains(&count) {
        return tick_spec(start, stop, count * 2.0);
    }
    (i1, i2, inc)
}

/// Round-number ticks covering `[start, stop]`
fn ticks(start: f64, stop: f64, count: f64) -> Vec<f64> {
    let (i1, i2, inc) = tick_spec(start, stop, count);
    if !(i1.is_finite() && i2.is_finite() && inc.is_finite()) || i2 < i1 {
        return Vec::new();
    }

    let n = (i2 - i1) as usize + 1;
    (0..n)
        .map(|i| {
            let idx = i1 + i as f64;
            if inc < 0.0 {
                idx / -inc
            } else {
                idx * inc
            }
        })
        .collect()
}
