//! Resource-specific error types.

use thiserror::Error;

/// Errors that can occur during resource operations.
///
/// A miss is not a transport fault: callers map `NotFound` to an empty read
/// result annotated with an error note.
#[derive(Debug, Error)]
pub enum ResourceError {
    /// The requested URI does not name a catalog widget.
    #[error("Unknown resource: {0}")]
    NotFound(String),

    /// An internal error occurred.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ResourceError {
    /// Create a new "not found" error.
    pub fn not_found(uri: impl Into<String>) -> Self {
        Self::NotFound(uri.into())
    }

    /// Create a new "internal" error.
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }
}
