//! Error types for adzdiag
//!
//! Centralized error handling using thiserror.

use thiserror::Error;

/// All error types that can occur in adzdiag
#[derive(Debug, Error)]
pub enum AdzError {
    /// Tool id not present in the catalog
    #[error("Unknown tool: {0}")]
    ToolNotFound(String),

    /// Category name that does not match any catalog category
    #[error("Unknown category: {0}")]
    UnknownCategory(String),

    /// Failed to hand a URL to the host opener
    #[error("Launch error: {0}")]
    Launch(String),
}

/// Result type alias for adzdiag operations
pub type Result<T> = std::result::Result<T, AdzError>;
