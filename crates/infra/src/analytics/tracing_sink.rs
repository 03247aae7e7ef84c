//! Logging analytics sink
//!
//! Emits each event through `tracing` with the snapshot serialized as a
//! flat JSON object. Stands in for a real analytics transport in demos
//! and local runs.

use axsnap_core::AnalyticsSink;
use axsnap_domain::{AxSnapError, Result, SettingsSnapshot};
use tracing::info;

/// Sink that logs events instead of delivering them anywhere.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingAnalyticsSink;

impl TracingAnalyticsSink {
    pub fn new() -> Self {
        Self
    }
}

impl AnalyticsSink for TracingAnalyticsSink {
    fn report_event(&self, name: &str, snapshot: &SettingsSnapshot) -> Result<()> {
        let payload = serde_json::to_string(snapshot)
            .map_err(|e| AxSnapError::Analytics(format!("failed to serialize snapshot: {e}")))?;
        info!(event = name, entries = snapshot.len(), %payload, "analytics event");
        Ok(())
    }
}
