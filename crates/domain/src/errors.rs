//! Error types used throughout the application
//!
//! The snapshot algorithm itself is total and never produces an error;
//! these variants cover the infrastructure seams around it (analytics
//! delivery, platform bindings).

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Main error type for AxSnap
#[derive(Error, Debug, Serialize, Deserialize)]
#[serde(tag = "type", content = "message")]
pub enum AxSnapError {
    #[error("Platform error: {0}")]
    Platform(String),

    #[error("Analytics error: {0}")]
    Analytics(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Result type alias for AxSnap operations
pub type Result<T> = std::result::Result<T, AxSnapError>;
