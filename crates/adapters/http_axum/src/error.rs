//! HTML error page mapping.
//!
//! Read failures abort the whole render: any failed dashboard read yields
//! one error page instead of a partially-filled dashboard (or, worse, a
//! silently blank one).

use askama::Template;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};

use pumphub_domain::error::PumpHubError;

/// Error page template.
#[derive(Template)]
#[template(path = "error.html")]
struct ErrorTemplate {
    active_nav: &'static str,
    status: u16,
    message: String,
}

/// Maps [`PumpHubError`] to a rendered error page with the matching
/// status code.
pub struct DashboardError(PumpHubError);

impl From<PumpHubError> for DashboardError {
    fn from(err: PumpHubError) -> Self {
        Self(err)
    }
}

impl IntoResponse for DashboardError {
    fn into_response(self) -> Response {
        let (status, message) = match &self.0 {
            PumpHubError::NotFound(err) => (StatusCode::NOT_FOUND, err.to_string()),
            PumpHubError::Backend(err) => {
                tracing::error!(error = %err, "backend request failed");
                (StatusCode::INTERNAL_SERVER_ERROR, err.to_string())
            }
        };

        let page = ErrorTemplate {
            active_nav: "projects",
            status: status.as_u16(),
            message,
        };
        (status, Html(page.to_string())).into_response()
    }
}
