//! Error types for sgbench

use thiserror::Error;

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, BenchError>;

/// Errors that can abort a benchmark run
#[derive(Error, Debug)]
pub enum BenchError {
    /// Corpus preparation hook failed (non-zero exit or spawn failure)
    #[error("preparation for corpus '{corpus}' failed: {detail}")]
    Preparation { corpus: String, detail: String },

    /// Analysis tool exited with a fatal status (anything outside {0, 3})
    #[error("analysis of corpus '{corpus}' variant '{variant}' failed with exit code {exit_code}")]
    Invocation {
        corpus: String,
        variant: String,
        exit_code: i32,
    },

    /// Metric upload failed (network or HTTP error on the reporting side-channel)
    #[error("metric upload failed: {0}")]
    Upload(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<reqwest::Error> for BenchError {
    fn from(err: reqwest::Error) -> Self {
        BenchError::Upload(err.to_string())
    }
}
