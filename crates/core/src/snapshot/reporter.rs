//! Reporting use case on top of the snapshot service
//!
//! The sink is an injected collaborator rather than a process-wide
//! singleton, so callers (and tests) choose where events go.

use std::sync::Arc;

use axsnap_domain::constants::{EVENT_ACCESSIBILITY_SETTINGS, EVENT_ACCESSIBILITY_SETTINGS_FONT};
use axsnap_domain::{Capability, Result};
use tracing::debug;

use super::ports::AnalyticsSink;
use super::service::SnapshotService;

/// Forwards accessibility snapshots to an analytics sink.
pub struct SnapshotReporter {
    service: SnapshotService,
    sink: Arc<dyn AnalyticsSink>,
}

impl SnapshotReporter {
    /// Create a new reporter around a snapshot service and a sink.
    pub fn new(service: SnapshotService, sink: Arc<dyn AnalyticsSink>) -> Self {
        Self { service, sink }
    }

    /// Report the full settings snapshot, summary flags included.
    pub fn report_settings(&self) -> Result<()> {
        let snapshot = self.service.full_snapshot(true);
        debug!(entries = snapshot.len(), "reporting full accessibility settings");
        self.sink.report_event(EVENT_ACCESSIBILITY_SETTINGS, &snapshot)
    }

    /// Report only the preferred text size, without summary flags.
    pub fn report_content_size(&self) -> Result<()> {
        let snapshot = self.service.snapshot(&[Capability::PreferredContentSize], false);
        debug!("reporting preferred content size");
        self.sink.report_event(EVENT_ACCESSIBILITY_SETTINGS_FONT, &snapshot)
    }

    /// The underlying snapshot service, for callers that also render
    /// the mapping locally.
    pub fn service(&self) -> &SnapshotService {
        &self.service
    }
}
