//! In-memory analytics sink
//!
//! Buffers reported events behind a mutex so tests and diagnostics can
//! assert on exactly what would have been forwarded.

use std::sync::Mutex;

use axsnap_core::AnalyticsSink;
use axsnap_domain::{AxSnapError, Result, SettingsSnapshot};

/// One buffered analytics event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BufferedEvent {
    /// Event name as handed to the sink.
    pub name: String,
    /// The flat settings payload.
    pub snapshot: SettingsSnapshot,
}

/// Sink that records events in memory instead of delivering them.
#[derive(Debug, Default)]
pub struct BufferingAnalyticsSink {
    events: Mutex<Vec<BufferedEvent>>,
}

impl BufferingAnalyticsSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of everything reported so far, in report order.
    pub fn events(&self) -> Result<Vec<BufferedEvent>> {
        Ok(self.lock()?.clone())
    }

    /// Number of buffered events.
    pub fn len(&self) -> Result<usize> {
        Ok(self.lock()?.len())
    }

    /// Whether nothing has been reported yet.
    pub fn is_empty(&self) -> Result<bool> {
        Ok(self.lock()?.is_empty())
    }

    /// Drop all buffered events.
    pub fn clear(&self) -> Result<()> {
        self.lock()?.clear();
        Ok(())
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, Vec<BufferedEvent>>> {
        self.events
            .lock()
            .map_err(|_| AxSnapError::Analytics("event buffer lock poisoned".to_string()))
    }
}

impl AnalyticsSink for BufferingAnalyticsSink {
    fn report_event(&self, name: &str, snapshot: &SettingsSnapshot) -> Result<()> {
        self.lock()?.push(BufferedEvent { name: name.to_string(), snapshot: snapshot.clone() });
        Ok(())
    }
}
