//! Run configuration for the comparison commands

use std::path::Path;

use crate::error::Result;
use crate::means::DEFAULT_SEPARATOR;
use serde::{Deserialize, Serialize};

/// File names and knobs shared by `compare` and `summarize`
///
/// Every field has a default, so a JSON file only needs the keys it changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompareConfig {
    /// Separator between per-sample values in the mean-record file
    pub separator: String,
    /// Mean-record file name inside the plots directory
    pub means_file: String,
    /// Suffix appended to the variable name for bin-by-bin mean histograms
    pub mean_bins_suffix: String,
    /// Subdirectory holding histogram CSVs
    pub plots_subdir: String,
    /// Variables whose name contains this are aligned by label first
    pub label_align_marker: String,
    /// Number of bins for the pooled normalized-mean histogram
    pub summary_bins: usize,
}

impl Default for CompareConfig {
    fn default() -> Self {
        Self {
            separator: DEFAULT_SEPARATOR.to_string(),
            means_file: "means.csv".to_string(),
            mean_bins_suffix: "-mean-bins".to_string(),
            plots_subdir: "plots".to_string(),
            label_align_marker: "_gene".to_string(),
            summary_bins: 50,
        }
    }
}

impl CompareConfig {
    /// Load a configuration from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&text)?)
    }

    /// Whether a variable should be aligned by bin label before aggregation
    pub fn needs_label_alignment(&self, varname: &str) -> bool {
        !self.label_align_marker.is_empty() && varname.contains(&self.label_align_marker)
    }
}
