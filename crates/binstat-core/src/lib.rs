//! Core types shared across the binstat crates
//!
//! This crate carries the unified error type and the handful of descriptive
//! statistics (means, population variances, weighted moments) that the
//! histogram and I/O layers build on.
//!
//! # Example
//!
//! ```rust
//! use binstat_core::utils::{mean, population_std_dev};
//!
//! let contents = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
//! assert_eq!(mean(&contents), 5.0);
//! assert_eq!(population_std_dev(&contents), 2.0);
//! ```

pub mod error;
pub mod utils;

pub use error::{Error, Result};
