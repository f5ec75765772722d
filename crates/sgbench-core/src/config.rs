//! Harness configuration.

use crate::corpus::CorpusSet;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Benchmark harness configuration.
///
/// Built once at startup from defaults, environment overrides, and CLI
/// flags, then passed by reference into the orchestrator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BenchConfig {
    /// Which corpus catalog to run (exactly one per run).
    pub corpus_set: CorpusSet,

    /// Whether to upload durations to the dashboard.
    pub upload: bool,

    /// Container image to run the tool in; `None` means native execution.
    pub docker_image: Option<String>,

    /// Analysis tool binary for native execution.
    pub tool: String,

    /// Directory containing the corpus subdirectories.
    pub bench_root: PathBuf,

    /// Dashboard base URL.
    pub dashboard_url: String,

    /// Metric name prefix.
    pub namespace: String,
}

impl Default for BenchConfig {
    fn default() -> Self {
        BenchConfig {
            corpus_set: CorpusSet::Standard,
            upload: false,
            docker_image: None,
            tool: std::env::var("SGBENCH_TOOL").unwrap_or_else(|_| "semgrep".to_string()),
            bench_root: PathBuf::from("."),
            dashboard_url: std::env::var("SGBENCH_DASHBOARD")
                .unwrap_or_else(|_| "https://dashboard.semgrep.dev".to_string()),
            namespace: "semgrep.bench".to_string(),
        }
    }
}

impl BenchConfig {
    /// Create a new config from environment variables
    pub fn from_env() -> Self {
        Self::default()
    }

    /// Select a container image for tool execution
    pub fn with_docker_image(mut self, image: &str) -> Self {
        self.docker_image = Some(image.to_string());
        self
    }
}
