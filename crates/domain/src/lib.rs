//! # AxSnap Domain
//!
//! Business domain types and models for AxSnap.
//!
//! This crate contains:
//! - The closed accessibility capability enumeration and its registry
//!   (reporting key, category, factory default per capability)
//! - The tagged capability value type and its canonical string rendering
//! - The flat settings snapshot mapping handed to analytics pipelines
//! - Domain error types and Result definitions
//!
//! ## Architecture
//! - No dependencies on other AxSnap crates
//! - Only external dependencies allowed
//! - Pure domain models and data structures

pub mod constants;
pub mod errors;
pub mod types;

// Re-export commonly used items
pub use errors::*;
pub use types::*;
