//! Core types for histogram representation

use std::fmt;

/// A binned histogram with under- and overflow slots
///
/// `n` addressable bins are described by `n + 1` strictly increasing edges;
/// `edges[n]` doubles as the low edge of the overflow slot. Per-bin storage
/// spans `n + 2` slots: index `0` is the underflow, `1..=n` the addressable
/// bins and `n + 1` the overflow.
#[derive(Debug, Clone, PartialEq)]
pub struct Histogram {
    name: String,
    xtitle: String,
    edges: Vec<f64>,
    contents: Vec<f64>,
    errors: Vec<f64>,
    labels: Vec<String>,
}

impl Histogram {
    /// Create an empty histogram over explicit bin edges
    ///
    /// # Panics
    ///
    /// Panics if fewer than two edges are given or if they are not strictly
    /// increasing.
    pub fn new(edges: Vec<f64>) -> Self {
        assert!(edges.len() >= 2, "a histogram needs at least two edges, got {}", edges.len());
        assert!(
            edges.windows(2).all(|w| w[0] < w[1]),
            "histogram edges must be strictly increasing: {edges:?}"
        );

        let slots = edges.len() + 1;
        Self {
            name: String::new(),
            xtitle: String::new(),
            edges,
            contents: vec![0.0; slots],
            errors: vec![0.0; slots],
            labels: vec![String::new(); slots],
        }
    }

    /// Create an empty histogram with `n_bins` equal-width bins over `[xmin, xmax)`
    ///
    /// # Panics
    ///
    /// Panics if `n_bins` is zero or `xmax <= xmin`.
    pub fn uniform(n_bins: usize, xmin: f64, xmax: f64) -> Self {
        assert!(n_bins > 0, "a histogram needs at least one bin");
        let dx = (xmax - xmin) / n_bins as f64;
        let edges = (0..=n_bins)
            .map(|ib| if ib == n_bins { xmax } else { xmin + ib as f64 * dx })
            .collect();
        Self::new(edges)
    }

    /// Set the histogram name
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Set the x-axis title
    pub fn with_xtitle(mut self, xtitle: impl Into<String>) -> Self {
        self.xtitle = xtitle.into();
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn xtitle(&self) -> &str {
        &self.xtitle
    }

    /// Number of addressable bins
    pub fn n_bins(&self) -> usize {
        self.edges.len() - 1
    }

    /// Number of storage slots (addressable bins plus under- and overflow)
    pub fn n_slots(&self) -> usize {
        self.contents.len()
    }

    /// Bin edges, including the low edge of the overflow slot
    pub fn edges(&self) -> &[f64] {
        &self.edges
    }

    pub fn xmin(&self) -> f64 {
        self.edges[0]
    }

    pub fn xmax(&self) -> f64 {
        self.edges[self.n_bins()]
    }

    /// Low edge of a slot
    ///
    /// The underflow slot reports `xmin` minus the mean bin width; the
    /// overflow slot reports `xmax`.
    pub fn low_edge(&self, ibin: usize) -> f64 {
        let n = self.n_bins();
        match ibin {
            0 => self.xmin() - (self.xmax() - self.xmin()) / n as f64,
            i if i <= n => self.edges[i - 1],
            i if i == n + 1 => self.xmax(),
            i => panic!("bin index {i} out of range for {n} bins"),
        }
    }

    /// Upper edge of a slot
    pub fn up_edge(&self, ibin: usize) -> f64 {
        let n = self.n_bins();
        match ibin {
            0 => self.xmin(),
            i if i <= n => self.edges[i],
            i if i == n + 1 => self.xmax() + (self.xmax() - self.xmin()) / n as f64,
            i => panic!("bin index {i} out of range for {n} bins"),
        }
    }

    /// Center point of a slot
    pub fn center(&self, ibin: usize) -> f64 {
        0.5 * (self.low_edge(ibin) + self.up_edge(ibin))
    }

    /// Width of a slot
    pub fn width(&self, ibin: usize) -> f64 {
        self.up_edge(ibin) - self.low_edge(ibin)
    }

    /// Find the slot holding `value`
    ///
    /// Values below `xmin` map to `0`, values at or above `xmax` map to
    /// `n_bins + 1`; otherwise the addressable bin whose half-open interval
    /// contains the value.
    pub fn find_bin(&self, value: f64) -> usize {
        if value < self.xmin() {
            return 0;
        }
        if value >= self.xmax() {
            return self.n_bins() + 1;
        }
        // Number of edges <= value, which is the 1-based bin index
        self.edges.partition_point(|&edge| edge <= value)
    }

    /// Add one unit-weight entry
    pub fn fill(&mut self, value: f64) -> usize {
        self.fill_weighted(value, 1.0)
    }

    /// Add a weighted entry; the slot error accumulates the squared weights
    pub fn fill_weighted(&mut self, value: f64, weight: f64) -> usize {
        let ibin = self.find_bin(value);
        self.contents[ibin] += weight;
        self.errors[ibin] = self.errors[ibin].hypot(weight);
        ibin
    }

    pub fn contents(&self, ibin: usize) -> f64 {
        self.contents[ibin]
    }

    pub fn error(&self, ibin: usize) -> f64 {
        self.errors[ibin]
    }

    /// Bin label, empty when unset
    pub fn label(&self, ibin: usize) -> &str {
        &self.labels[ibin]
    }

    /// Overwrite the content and error of a slot
    pub fn set_bin(&mut self, ibin: usize, contents: f64, error: f64) {
        self.contents[ibin] = contents;
        self.errors[ibin] = error;
    }

    pub fn set_label(&mut self, ibin: usize, label: impl Into<String>) {
        self.labels[ibin] = label.into();
    }

    /// Whether any addressable bin carries a label
    pub fn is_labelled(&self) -> bool {
        self.addressable().any(|ib| !self.labels[ib].is_empty())
    }

    /// Indices of the addressable bins
    pub fn addressable(&self) -> std::ops::RangeInclusive<usize> {
        1..=self.n_bins()
    }

    /// Sum of the addressable bin contents
    pub fn integral(&self) -> f64 {
        self.contents[self.addressable()].iter().sum()
    }

    /// Whether the under- or overflow slot carries content
    pub fn has_overflows(&self) -> bool {
        self.contents[0] != 0.0 || self.contents[self.n_bins() + 1] != 0.0
    }

    /// Content-weighted mean of the addressable bin centers
    ///
    /// Returns 0.0 for a histogram with zero integral.
    pub fn mean(&self) -> f64 {
        let (centers, weights) = self.center_weights();
        binstat_core::utils::weighted_mean(&centers, &weights).unwrap_or(0.0)
    }

    /// Content-weighted population standard deviation of the bin centers
    pub fn std_dev(&self) -> f64 {
        let (centers, weights) = self.center_weights();
        binstat_core::utils::weighted_variance(&centers, &weights)
            .map(f64::sqrt)
            .unwrap_or(0.0)
    }

    /// Effective number of entries `(Σ cᵢ)² / Σ eᵢ²` over addressable bins
    ///
    /// Equals the plain entry count for unit-weight fills. Returns 0.0 when
    /// every error is zero.
    pub fn effective_entries(&self) -> f64 {
        let sumw = self.integral();
        let sumw2: f64 = self.errors[self.addressable()].iter().map(|e| e * e).sum();
        if sumw2 == 0.0 {
            0.0
        } else {
            sumw * sumw / sumw2
        }
    }

    /// Standard error of the mean, `std_dev / sqrt(effective_entries)`
    ///
    /// Returns 0.0 when there are no effective entries.
    pub fn mean_error(&self) -> f64 {
        let n_eff = self.effective_entries();
        if n_eff > 0.0 {
            self.std_dev() / n_eff.sqrt()
        } else {
            0.0
        }
    }

    /// Create a copy scaled to unit integral
    ///
    /// Errors scale by the same factor. A histogram with zero integral is
    /// returned unchanged.
    pub fn normalize(&self) -> Self {
        let mut normalized = self.clone();
        let total = self.integral();
        if total != 0.0 {
            for (c, e) in normalized.contents.iter_mut().zip(normalized.errors.iter_mut()) {
                *c /= total;
                *e /= total;
            }
        }
        normalized
    }

    fn center_weights(&self) -> (Vec<f64>, Vec<f64>) {
        self.addressable()
            .map(|ib| (self.center(ib), self.contents[ib]))
            .unzip()
    }
}

impl fmt::Display for Histogram {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Histogram({} bins, integral={:.3}, range=[{:.3}, {:.3}))",
            self.n_bins(),
            self.integral(),
            self.xmin(),
            self.xmax()
        )
    }
}
