//! Metrics collection and Prometheus export.
//!
//! Installs the global `metrics` recorder and provides the helpers the
//! handlers and ingest pipeline use to record AI and ingestion activity.

use metrics::{counter, histogram};
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use std::sync::{Mutex, OnceLock};
use std::time::Duration;

/// Global handle to the Prometheus recorder.
pub static METRICS_HANDLE: OnceLock<PrometheusHandle> = OnceLock::new();

static INIT_LOCK: Mutex<()> = Mutex::new(());

/// Initialize the metrics recorder.
///
/// Call once at startup before any metrics are recorded. A second call is a
/// no-op so that tests sharing a process can all call it.
pub fn init_metrics() -> anyhow::Result<()> {
    let _guard = INIT_LOCK
        .lock()
        .map_err(|_| anyhow::anyhow!("metrics init lock poisoned"))?;
    if METRICS_HANDLE.get().is_some() {
        return Ok(());
    }

    let handle = PrometheusBuilder::new()
        .install_recorder()
        .map_err(|e| anyhow::anyhow!("failed to install Prometheus recorder: {}", e))?;

    let _ = METRICS_HANDLE.set(handle);
    Ok(())
}

/// Get the current metrics in Prometheus text format.
pub fn get_metrics() -> String {
    METRICS_HANDLE
        .get()
        .map(|handle| handle.render())
        .unwrap_or_else(|| "# Metrics recorder not initialized".to_string())
}

/// One model call: `operation` is chat, summary, ocr or transcription.
pub fn record_provider_call(
    provider: &str,
    operation: &'static str,
    outcome: &'static str,
    elapsed: Duration,
) {
    let labels = [
        ("provider", provider.to_string()),
        ("operation", operation.to_string()),
        ("outcome", outcome.to_string()),
    ];
    counter!("saathi_provider_requests_total", &labels).increment(1);
    histogram!("saathi_provider_latency_seconds", &labels).record(elapsed.as_secs_f64());
}

pub fn record_provider_tokens(provider: &str, input_tokens: i32, output_tokens: i32) {
    counter!(
        "saathi_provider_tokens_total",
        "provider" => provider.to_string(),
        "direction" => "input"
    )
    .increment(input_tokens.max(0) as u64);
    counter!(
        "saathi_provider_tokens_total",
        "provider" => provider.to_string(),
        "direction" => "output"
    )
    .increment(output_tokens.max(0) as u64);
}

pub fn record_ingested_file(kind: &'static str) {
    counter!("saathi_ingested_files_total", "kind" => kind).increment(1);
}

pub fn record_ocr_fallback() {
    counter!("saathi_ocr_fallbacks_total").increment(1);
}
