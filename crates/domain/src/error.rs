//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into
//! [`PumpHubError`] via `#[from]`. Adapter crates wrap their transport
//! failures in [`BackendError`] so the backend-supplied message survives
//! all the way to the user-facing notice.

/// Top-level error for all pumphub operations.
#[derive(Debug, thiserror::Error)]
pub enum PumpHubError {
    /// A requested record does not exist.
    #[error(transparent)]
    NotFound(#[from] NotFoundError),

    /// The remote backend rejected or failed an operation.
    #[error(transparent)]
    Backend(#[from] BackendError),
}

/// A lookup by identifier found nothing.
#[derive(Debug, thiserror::Error)]
#[error("{entity} not found: {id}")]
pub struct NotFoundError {
    /// Human-readable entity kind, e.g. `"Project"`.
    pub entity: &'static str,
    /// The identifier that missed.
    pub id: String,
}

/// Failure reported by the remote table backend.
///
/// Carries the backend's own message verbatim; the dashboard surfaces it
/// in error notices.
#[derive(Debug, thiserror::Error)]
#[error("{message}")]
pub struct BackendError {
    /// Message as reported by the backend (or the transport layer).
    pub message: String,
}

impl BackendError {
    /// Build a backend error from any displayable message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
