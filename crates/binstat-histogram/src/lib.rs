//! Histogram construction and cross-histogram aggregation
//!
//! This crate provides an owned [`Histogram`] value with under- and overflow
//! slots, several strategies for deriving bin edges from observed values, and
//! the aggregation routines used to compare the same variable across several
//! samples.
//!
//! # Key Features
//!
//! - **Bin-edge generation**: padded linear, decade-aligned logarithmic and
//!   categorical edges
//! - **Builders**: histograms from raw values, integer or string counts, and
//!   boolean outcomes
//! - **Bin unification**: one layout covering every input's bin centers
//! - **Mean info**: per-histogram mean and SEM, weighted global mean,
//!   normalized means and a bin-by-bin mean histogram
//!
//! # Examples
//!
//! ## Deriving Edges
//!
//! ```rust
//! use binstat_histogram::{EdgeBuilder, LinearEdges};
//!
//! let edges = LinearEdges::new(3).edges(&[1.0, 2.0, 3.0, 4.0]);
//! assert_eq!(edges.len(), 4);
//! assert!(edges[0] < 1.0 && edges[3] > 4.0);
//! ```
//!
//! ## Comparing Samples
//!
//! ```rust
//! use binstat_histogram::{mean_info, Histogram};
//!
//! let mut a = Histogram::uniform(5, -0.5, 4.5);
//! let mut b = Histogram::uniform(5, 2.5, 7.5);
//! for v in [1.0, 2.0, 2.0, 3.0] {
//!     a.fill(v);
//! }
//! for v in [4.0, 5.0, 5.0, 6.0] {
//!     b.fill(v);
//! }
//!
//! let info = mean_info(&[a, b]);
//! assert_eq!(info.mean_bin_hist.n_bins(), 8);
//! println!("means {:?}, normalized {:?}", info.means, info.normalized_means);
//! ```

pub mod aggregate;
pub mod builders;
pub mod fraction;
pub mod ops;
pub mod traits;
pub mod types;

// Re-export main types and traits
pub use aggregate::{mean_info, summarize_records, MeanInfo, MeanRecord, MeanSummary};
pub use builders::{
    bool_histogram, histogram_from_int_counts, histogram_from_label_counts, histogram_from_values, set_bins,
    AxisScale, CategoricalEdges, CountOptions, LinearEdges, LogEdges, VarType,
};
pub use ops::{align_labels, unified_bin_hist};
pub use traits::EdgeBuilder;
pub use types::Histogram;

pub use binstat_core::Result;
