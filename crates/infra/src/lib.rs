//! # AxSnap Infrastructure
//!
//! Infrastructure implementations of core snapshot ports.
//!
//! This crate contains:
//! - Accessibility provider adapters (factory-default fallback and a
//!   seeded in-memory provider for demos and tests)
//! - Analytics sink adapters (tracing-backed logging sink and an
//!   in-memory buffering sink)
//!
//! ## Architecture
//! - Implements traits defined in `axsnap-core`
//! - Depends on `axsnap-domain` and `axsnap-core`
//! - Contains all collaborator-facing code

pub mod analytics;
pub mod platform;

// Re-export commonly used items
pub use analytics::{BufferingAnalyticsSink, TracingAnalyticsSink};
pub use platform::{DefaultStateProvider, FixedStateProvider};
