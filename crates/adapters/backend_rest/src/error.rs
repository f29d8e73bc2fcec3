//! Adapter-specific error type wrapping transport failures.

use pumphub_domain::error::{BackendError, PumpHubError};

/// Errors originating from the REST backend layer.
#[derive(Debug, thiserror::Error)]
pub enum RestError {
    /// The request never produced a usable response.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The backend answered with a non-success status.
    #[error("{message}")]
    Status {
        /// HTTP status code the backend returned.
        status: u16,
        /// Message taken from the backend's error body.
        message: String,
    },
}

impl From<RestError> for PumpHubError {
    fn from(err: RestError) -> Self {
        let message = match err {
            RestError::Transport(err) => err.to_string(),
            RestError::Status { message, .. } => message,
        };
        Self::Backend(BackendError::new(message))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_carry_status_message_into_backend_error() {
        let err = RestError::Status {
            status: 409,
            message: "update or delete violates foreign key".to_string(),
        };
        let err = PumpHubError::from(err);
        assert_eq!(err.to_string(), "update or delete violates foreign key");
    }
}
