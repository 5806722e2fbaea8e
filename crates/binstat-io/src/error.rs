//! Error types for binstat-io

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Glob pattern error: {0}")]
    Pattern(#[from] glob::PatternError),

    #[error("Glob error: {0}")]
    Glob(#[from] glob::GlobError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Binstat core error: {0}")]
    Core(#[from] binstat_core::Error),

    #[error("Invalid histogram file {}: {reason}", .path.display())]
    InvalidHistogram { path: PathBuf, reason: String },

    #[error("Missing column '{column}' in {}", .path.display())]
    MissingColumn { path: PathBuf, column: String },

    #[error("Invalid value '{value}' in {}", .path.display())]
    InvalidValue { path: PathBuf, value: String },

    #[error("No histogram CSVs found in {}", .0.display())]
    NoHistograms(PathBuf),
}

impl Error {
    /// Whether the error means the file is not a bin-entry CSV at all
    ///
    /// Distinguishes unrelated CSVs sitting next to histogram files from
    /// genuine read failures.
    pub fn is_not_histogram(&self) -> bool {
        match self {
            Self::Csv(e) => !matches!(e.kind(), csv::ErrorKind::Io(_)),
            Self::InvalidHistogram { .. } => true,
            _ => false,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
