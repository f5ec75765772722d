//! sgbench core - benchmark orchestration for the semgrep static-analysis tool
//!
//! Provides the engine behind the `sgbench` binary:
//! - static corpus and variant registries
//! - a scoped working-directory guard
//! - containerized / native invocation building
//! - timed child-process execution with exit-code classification
//! - metric upload to the dashboard

pub mod config;
pub mod corpus;
pub mod error;
pub mod harness;
pub mod invocation;
pub mod report;
pub mod result;
pub mod runner;
pub mod telemetry;
pub mod variant;
pub mod workdir;

// Re-export key types
pub use config::BenchConfig;
pub use corpus::{
    dummy_corpora, gitlab_corpora, internal_corpora, standard_corpora, Corpus, CorpusSet,
};
pub use error::{BenchError, Result};
pub use harness::run_benchmarks;
pub use invocation::{build_invocation, Invocation, ENGINE_ENV_VAR};
pub use report::{format_result, metric_name, MetricReporter};
pub use result::{BenchmarkResult, Outcome, EXIT_PARTIAL_ANALYSIS};
pub use runner::{execute, TimedRun};
pub use telemetry::init_tracing;
pub use variant::{variants, Variant};
pub use workdir::{with_dir, WorkDir};
