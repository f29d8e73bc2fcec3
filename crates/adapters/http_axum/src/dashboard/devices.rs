//! Delete flow for devices — confirmation page plus the PRG mutation.

use std::str::FromStr;

use askama::Template;
use axum::extract::{Form, Path, Query, State};
use axum::response::{Html, IntoResponse, Redirect, Response};
use serde::Deserialize;

use pumphub_app::ports::{DeviceStore, ModelStore, ProjectStore, TelemetryStore};
use pumphub_domain::error::{NotFoundError, PumpHubError};
use pumphub_domain::id::{DeviceId, ProjectId};

use crate::error::DashboardError;
use crate::flash::Flash;
use crate::state::AppState;

/// Delete confirmation page template.
#[derive(Template)]
#[template(path = "confirm_device_delete.html")]
pub struct ConfirmDeleteTemplate {
    active_nav: &'static str,
    device_id: DeviceId,
    project_id: ProjectId,
}

impl IntoResponse for ConfirmDeleteTemplate {
    fn into_response(self) -> Response {
        Html(self.to_string()).into_response()
    }
}

/// Query parameters for the confirmation page.
#[derive(Deserialize)]
pub struct ConfirmParams {
    /// Project to return to after the decision.
    pub project: ProjectId,
}

/// `GET /devices/{id}/delete` — confirmation gate before the mutation.
///
/// Renders only. The delete itself happens on POST, so declining — using
/// the cancel link or simply navigating away — performs no network
/// mutation and produces no notice.
pub async fn confirm_delete(
    Path(id): Path<String>,
    Query(params): Query<ConfirmParams>,
) -> Result<ConfirmDeleteTemplate, DashboardError> {
    let device_id = parse_device_id(&id)?;

    Ok(ConfirmDeleteTemplate {
        active_nav: "projects",
        device_id,
        project_id: params.project,
    })
}

/// Form data for the delete POST.
#[derive(Deserialize)]
pub struct DeleteForm {
    /// Project whose dashboard the user came from.
    pub project_id: ProjectId,
}

/// `POST /devices/{id}/delete` — perform the delete, then redirect back to
/// the project dashboard (PRG).
///
/// Both outcomes land on the dashboard: success with a success notice,
/// failure with an error notice carrying the backend's message. The
/// mutation is single-attempt; no retry.
pub async fn delete<PS, DS, TS, MS>(
    State(state): State<AppState<PS, DS, TS, MS>>,
    Path(id): Path<String>,
    Form(form): Form<DeleteForm>,
) -> Result<Redirect, DashboardError>
where
    PS: ProjectStore + Send + Sync + 'static,
    DS: DeviceStore + Send + Sync + 'static,
    TS: TelemetryStore + Send + Sync + 'static,
    MS: ModelStore + Send + Sync + 'static,
{
    let device_id = parse_device_id(&id)?;

    let flash = match state.device_service.delete_device(device_id).await {
        Ok(()) => Flash::success("Device deleted successfully"),
        Err(err) => Flash::error(format!("Error deleting device: {err}")),
    };

    Ok(Redirect::to(&format!(
        "/projects/{}?{}",
        form.project_id,
        flash.query_string()
    )))
}

fn parse_device_id(id: &str) -> Result<DeviceId, DashboardError> {
    DeviceId::from_str(id).map_err(|_| {
        PumpHubError::from(NotFoundError {
            entity: "Device",
            id: id.to_string(),
        })
        .into()
    })
}
