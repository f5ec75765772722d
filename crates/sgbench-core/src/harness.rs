//! Benchmark orchestration: the corpus x variant execution loop.

use crate::config::BenchConfig;
use crate::corpus::Corpus;
use crate::error::{BenchError, Result};
use crate::invocation::build_invocation;
use crate::report::{metric_name, MetricReporter};
use crate::result::BenchmarkResult;
use crate::runner::execute;
use crate::variant::Variant;
use crate::workdir::WorkDir;
use chrono::Utc;
use std::process::Stdio;
use tokio::process::Command;
use tracing::{debug, info};

/// Corpus-local executable that materializes rule and target files.
/// Must exit 0 before any variant runs.
const PREP_SCRIPT: &str = "./prep";

/// Run the full corpus x variant matrix, strictly sequentially.
///
/// For each corpus, in registry order: enter the corpus directory,
/// run the preparation hook, then execute every variant in list order,
/// timing each run. Results accumulate in production order. The first
/// fatal condition (prep failure, fatal tool exit, upload failure)
/// aborts the remaining matrix; the working directory is restored on
/// every exit path.
///
/// Exactly one analysis-tool child process exists at a time. Overlapping
/// runs would share CPU and filesystem caches and invalidate the timing
/// comparisons this harness exists to produce.
pub async fn run_benchmarks(
    config: &BenchConfig,
    corpora: &[Corpus],
    variants: &[Variant],
) -> Result<Vec<BenchmarkResult>> {
    let reporter = config
        .upload
        .then(|| MetricReporter::new(&config.dashboard_url));

    let mut results = Vec::with_capacity(corpora.len() * variants.len());

    for corpus in corpora {
        let corpus_dir = config.bench_root.join(&corpus.name);
        info!(corpus = %corpus.name, dir = %corpus_dir.display(), "starting corpus");

        let _guard = WorkDir::enter(&corpus_dir).map_err(|e| BenchError::Preparation {
            corpus: corpus.name.clone(),
            detail: format!("cannot enter corpus directory: {}", e),
        })?;

        run_prep(corpus).await?;

        for variant in variants {
            let metric = metric_name(&config.namespace, &corpus.name, &variant.name);
            let invocation = build_invocation(config, corpus, variant)?;
            debug!(metric = %metric, args = ?invocation.args, "built invocation");

            let run = execute(&invocation, &corpus.name, &variant.name).await?;
            let duration_seconds = run.duration.as_secs_f64();
            info!(
                metric = %metric,
                seconds = duration_seconds,
                exit_code = run.exit_code,
                "run complete"
            );

            results.push(BenchmarkResult {
                corpus: corpus.name.clone(),
                variant: variant.name.clone(),
                duration_seconds,
                outcome: run.outcome,
                recorded_at: Utc::now(),
            });

            if let Some(reporter) = &reporter {
                reporter.report(&metric, duration_seconds).await?;
            }
        }
    }

    Ok(results)
}

/// Run the corpus preparation hook in the current (corpus) directory.
async fn run_prep(corpus: &Corpus) -> Result<()> {
    info!(corpus = %corpus.name, "running preparation hook");

    let output = Command::new(PREP_SCRIPT)
        .stdin(Stdio::null())
        .output()
        .await
        .map_err(|e| BenchError::Preparation {
            corpus: corpus.name.clone(),
            detail: format!("failed to run {}: {}", PREP_SCRIPT, e),
        })?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(BenchError::Preparation {
            corpus: corpus.name.clone(),
            detail: format!(
                "{} exited with {}: {}",
                PREP_SCRIPT,
                output.status,
                stderr.trim()
            ),
        });
    }

    debug!(corpus = %corpus.name, "preparation complete");
    Ok(())
}
