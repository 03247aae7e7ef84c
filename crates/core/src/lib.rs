//! # AxSnap Core
//!
//! Pure business logic layer - no infrastructure dependencies.
//!
//! This crate contains:
//! - Port/adapter interfaces (traits) for the platform accessibility
//!   provider and the analytics sink
//! - The snapshot service (capability snapshot and default-deviation
//!   summarization) and the reporting use case on top of it
//!
//! ## Architecture Principles
//! - Only depends on `axsnap-domain`
//! - No platform or transport code
//! - All external collaborators behind traits
//! - Pure, testable business logic

pub mod snapshot;

// Re-export specific items to avoid ambiguity
pub use snapshot::ports::{AccessibilityProvider, AnalyticsSink};
pub use snapshot::reporter::SnapshotReporter;
pub use snapshot::service::SnapshotService;
