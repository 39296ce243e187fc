use chrono::NaiveDate;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub(crate) enum AppError {
    #[error("Invalid date \"{input}\" (expected YYYYMMDD or YYYY-MM-DD)")]
    InvalidDate { input: String },

    #[error("Unsupported locale: {input}")]
    UnsupportedLocale { input: String },

    #[error("{0}")]
    Snapshot(#[from] SnapshotError),
}

/// Structural snapshot failures. These reject the whole run; record-level
/// problems inside a readable snapshot only degrade the result.
#[derive(Debug, Error)]
pub(crate) enum SnapshotError {
    #[error("Snapshot not found: {0}")]
    NotFound(PathBuf),

    #[error("No .json snapshot files in {0}")]
    NoFiles(PathBuf),

    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub(crate) enum EngineError {
    #[error("Invalid date range: end {end} precedes start {start}")]
    InvalidDateRange { start: NaiveDate, end: NaiveDate },
}
