//! Operations across collections of histograms

use std::collections::{BTreeSet, HashMap};

use crate::builders::CategoricalEdges;
use crate::traits::EdgeBuilder;
use crate::types::Histogram;
use tracing::debug;

/// Build an empty histogram whose layout covers every input's bin centers
///
/// Starts from the addressable low edges of `hists[0]` and, for every bin of
/// the remaining histograms, adds bins of the first histogram's first-bin
/// width on the left or right until the bin center is strictly inside the
/// range. Under- and overflow slots of the inputs are ignored, so their
/// content never widens the layout.
///
/// # Panics
///
/// Panics if `hists` is empty.
pub fn unified_bin_hist(hists: &[Histogram]) -> Histogram {
    assert!(!hists.is_empty(), "cannot unify the bins of zero histograms");
    let reference = &hists[0];
    let dx = reference.width(1);

    let mut low_edges: Vec<f64> = reference.addressable().map(|ib| reference.low_edge(ib)).collect();
    let mut n_prepended = 0usize;

    for hist in &hists[1..] {
        for ib in hist.addressable() {
            let center = hist.center(ib);
            while center <= low_edges[0] {
                low_edges.insert(0, low_edges[0] - dx);
                n_prepended += 1;
            }
            while center >= low_edges[low_edges.len() - 1] + dx {
                low_edges.push(low_edges[low_edges.len() - 1] + dx);
            }
        }
    }

    debug!(
        "unified {} histograms into {} bins of width {} ({} prepended)",
        hists.len(),
        low_edges.len(),
        dx,
        n_prepended
    );

    let n_bins = low_edges.len();
    Histogram::uniform(n_bins, low_edges[0], low_edges[n_bins - 1] + dx)
}

/// Rebuild every histogram over the sorted union of all bin labels
///
/// Each output is a categorical histogram with one bin per label; labels a
/// histogram lacked get zero content and error. Under- and overflow slots are
/// dropped. Output names are prefixed with `uni-bin-label-`.
pub fn align_labels(hists: &[Histogram]) -> Vec<Histogram> {
    let maps: Vec<HashMap<&str, (f64, f64)>> = hists
        .iter()
        .map(|hist| {
            hist.addressable()
                .map(|ib| (hist.label(ib), (hist.contents(ib), hist.error(ib))))
                .collect()
        })
        .collect();

    let all_labels: BTreeSet<&str> = maps.iter().flat_map(|m| m.keys().copied()).collect();
    let n_labels = all_labels.len().max(1);
    let edges = CategoricalEdges::new(n_labels).edges(&[1.0]);

    hists
        .iter()
        .zip(&maps)
        .map(|(original, map)| {
            let mut aligned = Histogram::new(edges.clone())
                .with_name(format!("uni-bin-label-{}", original.name()))
                .with_xtitle(original.xtitle());
            for (ilabel, label) in all_labels.iter().enumerate() {
                let ibin = ilabel + 1;
                aligned.set_label(ibin, *label);
                let (contents, error) = map.get(label).copied().unwrap_or((0.0, 0.0));
                aligned.set_bin(ibin, contents, error);
            }
            aligned
        })
        .collect()
}
