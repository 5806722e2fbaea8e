//! Bin-edge generation and histogram building strategies

use std::collections::{BTreeMap, HashMap};

use crate::fraction::fraction_error;
use crate::traits::EdgeBuilder;
use crate::types::Histogram;
use binstat_core::{Error, Result};
use tracing::{debug, warn};

/// Fraction of a bin width added beyond the extreme values
const PADDING: f64 = 0.1;

/// Minimum width used when every value is identical
const MIN_DEGENERATE_WIDTH: f64 = 1e-5;

/// Axis scale used when spacing edges
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AxisScale {
    #[default]
    Linear,
    Log,
}

/// Kind of variable being binned
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VarType {
    #[default]
    Float,
    Int,
    String,
}

/// Evenly spaced edges between the padded extremes of the data
///
/// The range is first padded by a tenth of the provisional bin width on each
/// side so the extremes never sit on a boundary, then the width is recomputed
/// over the padded range. Where the padding would round away, the width is
/// widened until the edges strictly bracket the data.
///
/// Values must be finite.
#[derive(Debug, Clone, Copy)]
pub struct LinearEdges {
    n_bins: usize,
}

impl LinearEdges {
    pub fn new(n_bins: usize) -> Self {
        Self {
            n_bins: n_bins.max(1),
        }
    }
}

impl EdgeBuilder for LinearEdges {
    fn edges(&self, sorted_values: &[f64]) -> Vec<f64> {
        assert!(!sorted_values.is_empty(), "cannot derive bin edges from no values");
        let n = self.n_bins as f64;
        let min = sorted_values[0];
        let max = sorted_values[sorted_values.len() - 1];
        assert!(
            min.is_finite() && max.is_finite(),
            "linear bin edges need finite values, got [{min}, {max}]"
        );

        let mut dx = (max - min) / n;
        if dx == 0.0 {
            dx = MIN_DEGENERATE_WIDTH.max(min);
        }
        let mut edges = padded_edges(min, max, dx, self.n_bins);
        if !brackets_strictly(&edges, min, max) {
            // Padding or bin width rounded away at this magnitude
            dx = dx.max(MIN_DEGENERATE_WIDTH.max(min));
            loop {
                edges = padded_edges(min, max, dx, self.n_bins);
                if brackets_strictly(&edges, min, max) || !dx.is_finite() {
                    break;
                }
                dx *= 2.0;
            }
            debug!("widened bin width to {} to pad [{}, {}]", dx, min, max);
        }
        edges
    }

    fn n_bins(&self) -> usize {
        self.n_bins
    }
}

/// Edges evenly spaced in log space between enclosing powers of ten
///
/// The padding is applied in log space. Values must be strictly positive.
#[derive(Debug, Clone, Copy)]
pub struct LogEdges {
    n_bins: usize,
}

impl LogEdges {
    pub fn new(n_bins: usize) -> Self {
        Self {
            n_bins: n_bins.max(1),
        }
    }
}

impl EdgeBuilder for LogEdges {
    fn edges(&self, sorted_values: &[f64]) -> Vec<f64> {
        assert!(!sorted_values.is_empty(), "cannot derive bin edges from no values");
        let min = sorted_values[0];
        let max = sorted_values[sorted_values.len() - 1];
        assert!(min > 0.0, "log-scale bin edges need positive values, got {min}");

        let n = self.n_bins as f64;
        let log_xmin = 10f64.powf(min.log10().floor()).ln();
        let mut log_xmax = 10f64.powf(max.log10().ceil()).ln();
        if log_xmax <= log_xmin {
            // min and max are the same power of ten
            log_xmax = log_xmin + std::f64::consts::LN_10;
        }

        let log_dx = (log_xmax - log_xmin) / n;
        let log_xmin = log_xmin - PADDING * log_dx;
        let log_xmax = log_xmax + PADDING * log_dx;
        evenly_spaced(log_xmin, log_xmax, self.n_bins)
            .into_iter()
            .map(f64::exp)
            .collect()
    }

    fn n_bins(&self) -> usize {
        self.n_bins
    }
}

/// One unit-width bin per category, centred on the integers `1..=n_bins`
#[derive(Debug, Clone, Copy)]
pub struct CategoricalEdges {
    n_bins: usize,
}

impl CategoricalEdges {
    pub fn new(n_bins: usize) -> Self {
        Self {
            n_bins: n_bins.max(1),
        }
    }

    /// One bin per distinct label
    pub fn for_labels<S: AsRef<str>>(labels: &[S]) -> Self {
        let mut distinct: Vec<&str> = labels.iter().map(AsRef::as_ref).collect();
        distinct.sort_unstable();
        distinct.dedup();
        Self::new(distinct.len())
    }
}

impl EdgeBuilder for CategoricalEdges {
    fn edges(&self, sorted_values: &[f64]) -> Vec<f64> {
        assert!(!sorted_values.is_empty(), "cannot derive bin edges from no values");
        evenly_spaced(0.5, self.n_bins as f64 + 0.5, self.n_bins)
    }

    fn n_bins(&self) -> usize {
        self.n_bins
    }
}

fn padded_edges(min: f64, max: f64, dx: f64, n_bins: usize) -> Vec<f64> {
    evenly_spaced(min - PADDING * dx, max + PADDING * dx, n_bins)
}

/// Edges strictly increasing with the first below `min` and the last above `max`
fn brackets_strictly(edges: &[f64], min: f64, max: f64) -> bool {
    edges[0] < min && edges[edges.len() - 1] > max && edges.windows(2).all(|w| w[0] < w[1])
}

fn evenly_spaced(xmin: f64, xmax: f64, n_bins: usize) -> Vec<f64> {
    let dx = (xmax - xmin) / n_bins as f64;
    (0..=n_bins)
        .map(|ib| if ib == n_bins { xmax } else { xmin + ib as f64 * dx })
        .collect()
}

/// Derive `n_bins + 1` edges for `values`, picking the generator from the
/// scale and variable type
///
/// String variables always get categorical edges.
///
/// # Panics
///
/// Panics if `values` is empty.
pub fn set_bins(values: &[f64], n_bins: usize, scale: AxisScale, var_type: VarType) -> Vec<f64> {
    match (var_type, scale) {
        (VarType::String, _) => CategoricalEdges::new(n_bins).edges_unsorted(values),
        (_, AxisScale::Log) => LogEdges::new(n_bins).edges_unsorted(values),
        (_, AxisScale::Linear) => LinearEdges::new(n_bins).edges_unsorted(values),
    }
}

/// Fill a histogram with `values`, deriving its edges from the values
///
/// An empty slice yields a placeholder one-bin `[0, 1)` histogram.
pub fn histogram_from_values(values: &[f64], n_bins: usize, scale: AxisScale) -> Histogram {
    if values.is_empty() {
        warn!("no values to histogram, returning a placeholder");
        return Histogram::uniform(1, 0.0, 1.0);
    }
    let edges = set_bins(values, n_bins, scale, VarType::Float);
    let mut hist = Histogram::new(edges);
    for &value in values {
        hist.fill(value);
    }
    hist
}

/// Options for building a histogram from a table of counts
#[derive(Debug, Clone, Default)]
pub struct CountOptions {
    /// Scale to unit integral
    pub normalize: bool,
    /// Order string labels alphabetically instead of by descending count
    pub sort_labels: bool,
    /// Explicit `[xmin, xmax)` range; derived from the keys when `None`
    pub range: Option<(f64, f64)>,
}

/// Build a histogram with one bin per integer key
///
/// Without an explicit range each key `k` gets the bin `[k - 0.5, k + 0.5)`
/// and the layout spans every integer between the smallest and largest key.
/// Bin errors are `sqrt(count)`.
pub fn histogram_from_int_counts(counts: &BTreeMap<i64, f64>, options: &CountOptions) -> Result<Histogram> {
    let (Some((&first, _)), Some((&last, _))) = (counts.first_key_value(), counts.last_key_value()) else {
        warn!("no counts to histogram, returning a placeholder");
        return Ok(Histogram::uniform(1, 0.0, 1.0));
    };

    let n_bins = last
        .checked_sub(first)
        .and_then(|span| span.checked_add(1))
        .and_then(|span| usize::try_from(span).ok())
        .ok_or_else(|| Error::InvalidInput(format!("key span {first}..={last} is too large")))?;
    let (xmin, xmax) = options
        .range
        .unwrap_or((first as f64 - 0.5, last as f64 + 0.5));
    validate_range(xmin, xmax)?;

    let mut hist = Histogram::uniform(n_bins, xmin, xmax);
    for (&key, &count) in counts {
        let ibin = hist.find_bin(key as f64);
        hist.set_bin(ibin, count, count.sqrt());
    }
    finish_counts(hist, options)
}

/// Build a histogram with one labelled bin per string key
///
/// Labels are ordered by descending count (ties alphabetically) unless
/// `sort_labels` is set. Bin errors are `sqrt(count)`.
pub fn histogram_from_label_counts(counts: &HashMap<String, f64>, options: &CountOptions) -> Result<Histogram> {
    if counts.is_empty() {
        warn!("no counts to histogram, returning a placeholder");
        return Ok(Histogram::uniform(1, 0.0, 1.0));
    }

    let mut labels: Vec<&String> = counts.keys().collect();
    labels.sort();
    if !options.sort_labels {
        labels.sort_by(|a, b| counts[*b].total_cmp(&counts[*a]));
    }

    let n_bins = labels.len();
    let mut hist = match options.range {
        Some((xmin, xmax)) => {
            validate_range(xmin, xmax)?;
            Histogram::uniform(n_bins, xmin, xmax)
        }
        None => {
            let positions: Vec<f64> = (1..=n_bins).map(|i| i as f64).collect();
            Histogram::new(CategoricalEdges::new(n_bins).edges(&positions))
        }
    };

    for (ilabel, label) in labels.into_iter().enumerate() {
        let ibin = ilabel + 1;
        let count = counts[label];
        hist.set_label(ibin, label.as_str());
        hist.set_bin(ibin, count, count.sqrt());
    }
    finish_counts(hist, options)
}

fn validate_range(xmin: f64, xmax: f64) -> Result<()> {
    if xmin < xmax {
        Ok(())
    } else {
        Err(Error::InvalidParameter(format!(
            "histogram range [{xmin}, {xmax}) is empty"
        )))
    }
}

fn finish_counts(hist: Histogram, options: &CountOptions) -> Result<Histogram> {
    if hist.has_overflows() {
        for ibin in 0..hist.n_slots() {
            debug!(
                "{} {} {} {}",
                ibin,
                hist.low_edge(ibin),
                hist.up_edge(ibin),
                hist.contents(ibin)
            );
        }
        return Err(Error::overflow("count histogram"));
    }
    Ok(if options.normalize { hist.normalize() } else { hist })
}

/// Two-bin histogram of the true and false fractions
///
/// Bin 1 (`right`) holds the true fraction and bin 2 (`wrong`) the false
/// fraction, each with a one-sigma Clopper-Pearson error.
pub fn bool_histogram(n_true: u64, n_false: u64) -> Result<Histogram> {
    let total = n_true + n_false;
    if total == 0 {
        return Err(Error::empty_input("bool histogram"));
    }

    let mut hist = Histogram::uniform(2, -0.5, 1.5);
    hist.set_bin(1, n_true as f64 / total as f64, fraction_error(n_true, total)?);
    hist.set_bin(2, n_false as f64 / total as f64, fraction_error(n_false, total)?);
    hist.set_label(1, "right");
    hist.set_label(2, "wrong");
    Ok(hist)
}
