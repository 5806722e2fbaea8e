//! # binstat
//!
//! Histogram binning and cross-histogram aggregation.
//!
//! This crate re-exports the workspace crates:
//!
//! - [`core`]: error type and numeric helpers
//! - [`histogram`]: the histogram value type, bin-edge generation, bin
//!   unification and mean statistics
//! - [`io`]: bin-entry and mean-record CSV files and run configuration
//!
//! ```
//! use binstat::prelude::*;
//!
//! let edges = LinearEdges::new(4).edges(&[1.0, 2.0, 3.0]);
//! let mut a = Histogram::new(edges);
//! let mut b = a.clone();
//! a.fill(1.0);
//! b.fill(3.0);
//!
//! let info = mean_info(&[a, b]);
//! assert!((info.global_mean - 2.0).abs() < 1e-9);
//! ```

pub use binstat_core as core;
pub use binstat_histogram as histogram;
pub use binstat_io as io;

pub mod prelude {
    pub use binstat_core::{Error, Result};
    pub use binstat_histogram::{
        align_labels, histogram_from_values, mean_info, set_bins, summarize_records, unified_bin_hist,
        AxisScale, EdgeBuilder, Histogram, LinearEdges, LogEdges, MeanInfo, MeanRecord, VarType,
    };
    pub use binstat_io::{hists_from_dir, read_histogram, read_means, write_histogram, write_means, CompareConfig};
}
