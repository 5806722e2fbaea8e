//! Cross-histogram statistics
//!
//! Given histograms of the same variable from several samples, compute each
//! sample's mean and standard error of the mean, how far each mean sits from
//! the integral-weighted mean over samples (in units of its own SEM), and a
//! bin-by-bin mean histogram over the unified layout.

use std::collections::BTreeMap;

use crate::ops::unified_bin_hist;
use crate::types::Histogram;
use binstat_core::utils::{mean, population_std_dev, population_variance};
use tracing::debug;

/// Aggregate statistics over a fixed collection of histograms
#[derive(Debug, Clone, PartialEq)]
pub struct MeanInfo {
    /// Mean of each histogram, in input order
    pub means: Vec<f64>,
    /// Standard error of each mean
    pub sems: Vec<f64>,
    /// `(mean_i - global_mean) / sem_i`, zero where `sem_i` is zero
    pub normalized_means: Vec<f64>,
    /// Integral-weighted mean over histograms
    pub global_mean: f64,
    /// Unified layout holding the per-bin mean and spread across histograms
    pub mean_bin_hist: Histogram,
}

impl MeanInfo {
    /// Flatten into a named record for persistence
    pub fn record(&self, name: impl Into<String>) -> MeanRecord {
        MeanRecord {
            name: name.into(),
            means: self.means.clone(),
            sems: self.sems.clone(),
            normalized_means: self.normalized_means.clone(),
        }
    }
}

/// Per-variable flat record of the aggregate statistics
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MeanRecord {
    pub name: String,
    pub means: Vec<f64>,
    pub sems: Vec<f64>,
    pub normalized_means: Vec<f64>,
}

/// Compute [`MeanInfo`] for `hists`
///
/// The global mean weights each histogram's mean by its integral; when every
/// integral is zero the plain mean of the means is used instead. The
/// bin-by-bin histogram takes, for each unified bin that any input populates,
/// the unweighted mean of the contributing bin contents as its content and
/// their population standard deviation as its error. Inputs are assumed to
/// have comparable sample sizes.
///
/// # Panics
///
/// Panics if `hists` is empty, or if two histograms carry different labels in
/// bins that map to the same unified bin.
pub fn mean_info(hists: &[Histogram]) -> MeanInfo {
    assert!(!hists.is_empty(), "cannot compute mean info for zero histograms");

    let mut unified = unified_bin_hist(hists);
    let mut bin_values: BTreeMap<usize, Vec<f64>> = BTreeMap::new();
    let mut bin_labels: BTreeMap<usize, &str> = BTreeMap::new();

    let mut means = Vec::with_capacity(hists.len());
    let mut sems = Vec::with_capacity(hists.len());
    let mut sum_total = 0.0;
    let mut total_entries = 0.0;

    for hist in hists {
        let hist_mean = hist.mean();
        means.push(hist_mean);
        sems.push(hist.mean_error());
        sum_total += hist_mean * hist.integral();
        total_entries += hist.integral();

        for ib in hist.addressable() {
            let ibin = unified.find_bin(hist.center(ib));
            let label = hist.label(ib);
            let expected = *bin_labels.entry(ibin).or_insert(label);
            assert_eq!(
                expected,
                label,
                "histogram '{}' labels unified bin {} differently",
                hist.name(),
                ibin
            );
            bin_values.entry(ibin).or_default().push(hist.contents(ib));
        }
    }

    let global_mean = if total_entries != 0.0 {
        sum_total / total_entries
    } else {
        mean(&means)
    };

    let normalized_means = means
        .iter()
        .zip(&sems)
        .map(|(&m, &sem)| if sem > 0.0 { (m - global_mean) / sem } else { 0.0 })
        .collect();

    for (&ibin, values) in &bin_values {
        unified.set_bin(ibin, mean(values), population_std_dev(values));
        unified.set_label(ibin, bin_labels[&ibin]);
    }

    debug!(
        "mean info over {} histograms: global mean {}, {} populated bins",
        hists.len(),
        global_mean,
        bin_values.len()
    );

    MeanInfo {
        means,
        sems,
        normalized_means,
        global_mean,
        mean_bin_hist: unified,
    }
}

/// Spread of the per-sample means across a set of mean records
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MeanSummary {
    /// Mean of each record's `means`
    pub means: Vec<f64>,
    /// Population variance of each record's `means`
    pub variances: Vec<f64>,
    /// Every normalized mean over all records, pooled
    pub normalized_means: Vec<f64>,
}

impl MeanSummary {
    /// Population standard deviation of the pooled normalized means
    ///
    /// Close to one when the SEMs describe the sample-to-sample scatter.
    pub fn normalized_std_dev(&self) -> f64 {
        population_std_dev(&self.normalized_means)
    }
}

/// Summarize mean records, typically read back from several result directories
pub fn summarize_records(records: &[MeanRecord]) -> MeanSummary {
    let mut summary = MeanSummary::default();
    for record in records {
        summary.means.push(mean(&record.means));
        summary.variances.push(population_variance(&record.means));
        summary.normalized_means.extend_from_slice(&record.normalized_means);
    }
    summary
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn filled(n_bins: usize, xmin: f64, xmax: f64, values: &[f64]) -> Histogram {
        let mut hist = Histogram::uniform(n_bins, xmin, xmax);
        for &v in values {
            hist.fill(v);
        }
        hist
    }

    #[test]
    fn test_single_histogram_global_mean() {
        let hist = filled(4, 0.0, 4.0, &[0.5, 1.5, 1.5, 3.5]);
        let info = mean_info(std::slice::from_ref(&hist));
        assert_relative_eq!(info.global_mean, hist.mean());
        assert_relative_eq!(info.normalized_means[0], 0.0);
        // One contributor per bin: spread is zero
        assert_eq!(info.mean_bin_hist.contents(2), 2.0);
        assert_eq!(info.mean_bin_hist.error(2), 0.0);
    }

    #[test]
    fn test_weighted_global_mean_and_normalized_means() {
        let a = filled(4, 0.0, 4.0, &[0.5, 0.5, 1.5, 1.5]);
        let b = filled(4, 0.0, 4.0, &[2.5, 3.5]);
        let info = mean_info(&[a.clone(), b.clone()]);

        assert_relative_eq!(info.means[0], 1.0);
        assert_relative_eq!(info.means[1], 3.0);
        // (1.0 * 4 + 3.0 * 2) / 6
        assert_relative_eq!(info.global_mean, 10.0 / 6.0);
        assert_relative_eq!(info.sems[0], a.mean_error());
        assert_relative_eq!(info.normalized_means[0], (1.0 - 10.0 / 6.0) / a.mean_error());
        assert_relative_eq!(info.normalized_means[1], (3.0 - 10.0 / 6.0) / b.mean_error());
    }

    #[test]
    fn test_zero_sem_gives_zero_normalized_mean() {
        // Everything in one bin: no spread, so the SEM is zero
        let a = filled(4, 0.0, 4.0, &[3.5, 3.5, 3.5]);
        let b = filled(4, 0.0, 4.0, &[0.5, 1.5, 2.5]);
        let info = mean_info(&[a, b]);
        assert_eq!(info.sems[0], 0.0);
        assert_eq!(info.normalized_means[0], 0.0);
        assert!(info.normalized_means[1] != 0.0);
    }

    #[test]
    fn test_bin_by_bin_mean_over_unified_layout() {
        let a = filled(2, 0.0, 2.0, &[0.5, 0.5, 1.5]);
        let b = filled(2, 1.0, 3.0, &[1.5, 1.5, 1.5, 1.5, 2.5]);
        let info = mean_info(&[a, b]);
        let hist = &info.mean_bin_hist;

        assert_eq!(hist.n_bins(), 3);
        assert_relative_eq!(hist.xmax(), 3.0);
        // [0, 1) only in a
        assert_eq!(hist.contents(1), 2.0);
        // [1, 2): contents 1 and 4
        assert_relative_eq!(hist.contents(2), 2.5);
        assert_relative_eq!(hist.error(2), 1.5);
        // [2, 3) only in b
        assert_eq!(hist.contents(3), 1.0);
    }

    #[test]
    fn test_empty_histograms_fall_back_to_plain_mean() {
        let info = mean_info(&[Histogram::uniform(2, 0.0, 2.0), Histogram::uniform(2, 0.0, 2.0)]);
        assert_eq!(info.global_mean, 0.0);
        assert_eq!(info.normalized_means, vec![0.0, 0.0]);
    }

    #[test]
    fn test_labels_carried_to_mean_hist() {
        let mut a = Histogram::uniform(2, 0.5, 2.5);
        let mut b = Histogram::uniform(2, 0.5, 2.5);
        for hist in [&mut a, &mut b] {
            hist.set_label(1, "right");
            hist.set_label(2, "wrong");
            hist.set_bin(1, 0.8, 0.1);
            hist.set_bin(2, 0.2, 0.1);
        }
        let info = mean_info(&[a, b]);
        assert_eq!(info.mean_bin_hist.label(1), "right");
        assert_eq!(info.mean_bin_hist.label(2), "wrong");
    }

    #[test]
    #[should_panic(expected = "labels unified bin")]
    fn test_mismatched_labels_panic() {
        let mut a = Histogram::uniform(1, 0.5, 1.5).with_name("a");
        let mut b = Histogram::uniform(1, 0.5, 1.5).with_name("b");
        a.set_label(1, "IGHV1");
        b.set_label(1, "IGHV2");
        mean_info(&[a, b]);
    }

    #[test]
    #[should_panic(expected = "zero histograms")]
    fn test_empty_collection_panics() {
        mean_info(&[]);
    }

    #[test]
    fn test_record_and_summary() {
        let a = filled(4, 0.0, 4.0, &[0.5, 1.5]);
        let b = filled(4, 0.0, 4.0, &[2.5, 3.5]);
        let record = mean_info(&[a, b]).record("cdr3_length");
        assert_eq!(record.name, "cdr3_length");
        assert_eq!(record.means, vec![1.0, 3.0]);

        let other = MeanRecord {
            name: "v_3p_del".to_string(),
            means: vec![2.0, 2.0, 2.0],
            sems: vec![0.1, 0.1, 0.1],
            normalized_means: vec![1.0, -1.0, 0.0],
        };
        let summary = summarize_records(&[record.clone(), other]);
        assert_eq!(summary.means, vec![2.0, 2.0]);
        assert_eq!(summary.variances, vec![1.0, 0.0]);
        assert_eq!(summary.normalized_means.len(), record.normalized_means.len() + 3);
    }
}
