//! Benchmark outcomes and recorded results.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Exit code the analysis tool uses when the run completed but some input
/// files could not be analyzed. Non-fatal; the timing still counts.
pub const EXIT_PARTIAL_ANALYSIS: i32 = 3;

/// Classification of one analysis-tool exit status.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    /// Exit code 0: every input analyzed.
    Success,

    /// Exit code 3: some inputs skipped or unparsable.
    PartialSuccess,

    /// Any other exit code. Never stored in a result — the runner raises
    /// instead and the run aborts.
    Fatal,
}

impl Outcome {
    /// Classify a child-process exit code.
    pub fn from_exit_code(code: i32) -> Self {
        match code {
            0 => Outcome::Success,
            EXIT_PARTIAL_ANALYSIS => Outcome::PartialSuccess,
            _ => Outcome::Fatal,
        }
    }

    /// Whether this outcome aborts the run.
    pub fn is_fatal(&self) -> bool {
        matches!(self, Outcome::Fatal)
    }
}

/// One timed (corpus, variant) measurement, accumulated in production order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BenchmarkResult {
    /// Corpus name.
    pub corpus: String,

    /// Variant name.
    pub variant: String,

    /// Wall-clock duration of the analysis run.
    pub duration_seconds: f64,

    /// Exit classification (never `Fatal`).
    pub outcome: Outcome,

    /// When the measurement was taken.
    pub recorded_at: DateTime<Utc>,
}
