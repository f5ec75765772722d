//! Metric naming and dashboard upload.

use crate::error::{BenchError, Result};
use crate::result::BenchmarkResult;
use tracing::debug;

/// Format the dashboard metric name for one (corpus, variant) pair.
pub fn metric_name(namespace: &str, corpus: &str, variant: &str) -> String {
    format!("{}.{}.{}.duration", namespace, corpus, variant)
}

/// Format one result line for the final report.
pub fn format_result(result: &BenchmarkResult, namespace: &str) -> String {
    format!(
        "{} = {:.3} s",
        metric_name(namespace, &result.corpus, &result.variant),
        result.duration_seconds
    )
}

/// Client for the metrics dashboard.
pub struct MetricReporter {
    base_url: String,
    http_client: reqwest::Client,
}

impl MetricReporter {
    /// Create a reporter for the given dashboard base URL.
    pub fn new(base_url: &str) -> Self {
        let http_client = reqwest::Client::builder()
            .user_agent(concat!("sgbench/", env!("CARGO_PKG_VERSION")))
            .build()
            .expect("Failed to create HTTP client");

        MetricReporter {
            base_url: base_url.trim_end_matches('/').to_string(),
            http_client,
        }
    }

    /// POST one metric value to the dashboard.
    ///
    /// The body is the plain decimal representation of `value`; the
    /// response body carries no control semantics and is read for
    /// diagnostics only. No retry — failures propagate as
    /// [`BenchError::Upload`].
    pub async fn report(&self, metric: &str, value: f64) -> Result<()> {
        let url = format!("{}/api/metric/{}", self.base_url, metric);
        debug!(%url, value, "uploading metric");

        let response = self
            .http_client
            .post(&url)
            .body(value.to_string())
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(BenchError::Upload(format!(
                "dashboard returned {} for {}",
                status, url
            )));
        }

        let body = response.text().await?;
        debug!(metric, body = %body.trim(), "metric accepted");
        Ok(())
    }
}
