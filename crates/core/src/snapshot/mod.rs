//! Accessibility settings snapshotting

pub mod ports;
pub mod reporter;
pub mod service;

pub use ports::{AccessibilityProvider, AnalyticsSink};
pub use reporter::SnapshotReporter;
pub use service::SnapshotService;
