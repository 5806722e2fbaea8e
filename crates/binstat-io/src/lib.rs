//! File formats and run configuration for binstat
//!
//! Histograms are stored as bin-entry CSVs, one row per slot including under-
//! and overflow. Aggregate results are stored as mean-record CSVs.
//!
//! # Example
//!
//! ```
//! use binstat_histogram::Histogram;
//! use binstat_io::{read_histogram_from, write_histogram_to};
//!
//! let mut hist = Histogram::uniform(2, 0.0, 2.0);
//! hist.fill(0.5);
//!
//! let mut buffer = Vec::new();
//! write_histogram_to(&mut buffer, &hist).unwrap();
//! let back = read_histogram_from(buffer.as_slice(), "memory").unwrap();
//! assert_eq!(back.contents(1), 1.0);
//! ```

pub mod bin_entry;
pub mod config;
pub mod directory;
pub mod error;
pub mod means;
pub mod observations;

pub use bin_entry::{read_histogram, read_histogram_from, write_histogram, write_histogram_to};
pub use config::CompareConfig;
pub use directory::hists_from_dir;
pub use error::{Error, Result};
pub use means::{
    read_means, read_means_from, write_mean_variance, write_mean_variance_to, write_means, write_means_to,
    DEFAULT_SEPARATOR,
};
pub use observations::{histogram_from_observation_file, read_column};
