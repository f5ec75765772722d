//! Timed execution of analysis-tool invocations.

use crate::error::{BenchError, Result};
use crate::invocation::Invocation;
use crate::result::{Outcome, EXIT_PARTIAL_ANALYSIS};
use std::process::Stdio;
use std::time::{Duration, Instant};
use tokio::process::Command;
use tracing::{debug, warn};

/// One timed execution of an invocation.
#[derive(Debug, Clone)]
pub struct TimedRun {
    /// Wall-clock duration of the child process.
    pub duration: Duration,

    /// Raw exit code (-1 when the child died on a signal).
    pub exit_code: i32,

    /// Exit classification; never `Fatal` (fatal codes raise instead).
    pub outcome: Outcome,
}

/// Execute `invocation` as a child process and time it.
///
/// The environment overrides are applied to the child only; the parent
/// process environment is never touched, so no two invocations can
/// observe each other's engine options. The child inherits stdout and
/// stderr (the tool runs verbose) and blocks the caller until it exits —
/// no harness-level timeout exists, corpora may take hours.
///
/// Exit code 0 is a success, [`EXIT_PARTIAL_ANALYSIS`] means some inputs
/// could not be analyzed (logged, not escalated). Any other code raises
/// [`BenchError::Invocation`] and aborts the run.
pub async fn execute(invocation: &Invocation, corpus: &str, variant: &str) -> Result<TimedRun> {
    let (program, args) = invocation
        .args
        .split_first()
        .ok_or_else(|| std::io::Error::other("empty argument vector"))?;

    debug!(corpus, variant, program = %program, "spawning analysis tool");

    let start = Instant::now();
    let status = Command::new(program)
        .args(args)
        .envs(invocation.env.iter().map(|(k, v)| (k.as_str(), v.as_str())))
        .stdin(Stdio::null())
        .status()
        .await?;
    let duration = start.elapsed();

    let exit_code = status.code().unwrap_or(-1);
    match Outcome::from_exit_code(exit_code) {
        Outcome::Fatal => Err(BenchError::Invocation {
            corpus: corpus.to_string(),
            variant: variant.to_string(),
            exit_code,
        }),
        outcome => {
            if outcome == Outcome::PartialSuccess {
                warn!(
                    corpus,
                    variant,
                    exit_code = EXIT_PARTIAL_ANALYSIS,
                    "some inputs could not be analyzed"
                );
            }
            Ok(TimedRun {
                duration,
                exit_code,
                outcome,
            })
        }
    }
}
