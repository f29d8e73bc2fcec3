//! Flash notices carried across PRG redirects as query parameters.

use serde::{Deserialize, Serialize};

/// Notice severity, also used as the CSS class suffix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FlashKind {
    /// The action completed.
    Success,
    /// The action failed.
    Error,
}

impl std::fmt::Display for FlashKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Success => f.write_str("success"),
            Self::Error => f.write_str("error"),
        }
    }
}

/// A one-shot notice shown as a banner on the next page render.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Flash {
    /// Severity of the notice.
    pub kind: FlashKind,
    /// Message shown to the user.
    pub message: String,
}

impl Flash {
    /// Build a success notice.
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: FlashKind::Success,
            message: message.into(),
        }
    }

    /// Build an error notice.
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: FlashKind::Error,
            message: message.into(),
        }
    }

    /// Encode the notice as a URL query string (without leading `?`).
    #[must_use]
    pub fn query_string(&self) -> String {
        serde_urlencoded::to_string(self).unwrap_or_default()
    }
}

/// Query parameters a dashboard request may carry after a redirect.
///
/// Both fields default so a plain request without a notice extracts
/// cleanly.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct FlashParams {
    kind: Option<FlashKind>,
    message: Option<String>,
}

impl FlashParams {
    /// The notice, when both parameters were present.
    #[must_use]
    pub fn into_flash(self) -> Option<Flash> {
        match (self.kind, self.message) {
            (Some(kind), Some(message)) => Some(Flash { kind, message }),
            _ => None,
        }
    }
}
