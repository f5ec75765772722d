//! sgbench - benchmark harness for the semgrep static-analysis tool
//!
//! Runs the tool over a registry of (rule-set, target-codebase) corpora
//! under a fixed list of engine/tool option variants, times each run,
//! and optionally uploads the durations to the metrics dashboard.
//!
//! ## Corpus sets
//!
//! - default: the standard public set
//! - `--dummy`: one tiny corpus for fast iterations
//! - `--gitlab`: the GitLab CI-partner set
//! - `--internal`: internal-only rule packs

use anyhow::{Context, Result};
use clap::Parser;
use sgbench_core::{
    format_result, init_tracing, run_benchmarks, variants, BenchConfig, CorpusSet,
};
use std::path::PathBuf;
use tracing::{info, Level};

#[derive(Parser, Debug)]
#[command(name = "sgbench")]
#[command(author = "Sgbench Contributors")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Benchmark harness for the semgrep static-analysis tool", long_about = None)]
struct Cli {
    /// Run the tiny development corpus set
    #[arg(long, group = "corpus_set")]
    dummy: bool,

    /// Run the GitLab CI-partner corpus set
    #[arg(long, group = "corpus_set")]
    gitlab: bool,

    /// Run the internal-only corpus set
    #[arg(long, group = "corpus_set")]
    internal: bool,

    /// Upload durations to the metrics dashboard
    #[arg(long)]
    upload: bool,

    /// Run the tool inside this container image instead of natively
    #[arg(long, value_name = "IMAGE")]
    docker: Option<String>,

    /// Directory containing the corpus subdirectories
    #[arg(long, default_value = ".")]
    bench_root: PathBuf,

    /// Analysis tool binary for native execution
    #[arg(long)]
    tool: Option<String>,

    /// Dashboard base URL
    #[arg(long)]
    dashboard: Option<String>,

    /// Print results as JSON instead of text lines
    #[arg(long)]
    json_results: bool,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Emit JSON-formatted log lines
    #[arg(long)]
    json: bool,
}

impl Cli {
    fn into_config(self) -> BenchConfig {
        let mut config = BenchConfig::from_env();
        config.corpus_set = CorpusSet::from_flags(self.dummy, self.gitlab, self.internal);
        config.upload = self.upload;
        config.docker_image = self.docker;
        config.bench_root = self.bench_root;
        if let Some(tool) = self.tool {
            config.tool = tool;
        }
        if let Some(dashboard) = self.dashboard {
            config.dashboard_url = dashboard;
        }
        config
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup logging
    let level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    init_tracing(cli.json, level);

    let json_results = cli.json_results;
    let config = cli.into_config();

    let corpora = config.corpus_set.corpora();
    let variant_list = variants();

    info!(
        corpus_set = config.corpus_set.name(),
        corpora = corpora.len(),
        variants = variant_list.len(),
        containerized = config.docker_image.is_some(),
        upload = config.upload,
        "starting benchmark run"
    );

    let results = run_benchmarks(&config, &corpora, &variant_list)
        .await
        .context("benchmark run aborted")?;

    if json_results {
        println!("{}", serde_json::to_string_pretty(&results)?);
    } else {
        println!();
        for result in &results {
            println!("{}", format_result(result, &config.namespace));
        }
    }

    Ok(())
}
