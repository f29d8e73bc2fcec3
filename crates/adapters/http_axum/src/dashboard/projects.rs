//! Dashboard page for one project.

use std::str::FromStr;

use askama::Template;
use axum::extract::{Path, Query, State};
use axum::response::{Html, IntoResponse, Response};

use pumphub_app::ports::{DeviceStore, ModelStore, ProjectStore, TelemetryStore};
use pumphub_domain::device::Device;
use pumphub_domain::error::{NotFoundError, PumpHubError};
use pumphub_domain::id::ProjectId;
use pumphub_domain::ml_model::MlModel;
use pumphub_domain::project::Project;

use crate::error::DashboardError;
use crate::flash::{Flash, FlashParams};
use crate::state::AppState;

/// Project dashboard page template.
#[derive(Template)]
#[template(path = "project_dashboard.html")]
pub struct ProjectDashboardTemplate {
    active_nav: &'static str,
    flash: Option<Flash>,
    project: Project,
    total_samples: u64,
    devices: Vec<Device>,
    models: Vec<MlModel>,
}

impl IntoResponse for ProjectDashboardTemplate {
    fn into_response(self) -> Response {
        Html(self.to_string()).into_response()
    }
}

/// `GET /projects/{id}` — the project dashboard.
///
/// Resolves the project, fans out the three collection reads, and renders
/// the whole page in one pass. A flash notice left by a preceding redirect
/// is picked up from the query string.
pub async fn show<PS, DS, TS, MS>(
    State(state): State<AppState<PS, DS, TS, MS>>,
    Path(id): Path<String>,
    Query(params): Query<FlashParams>,
) -> Result<ProjectDashboardTemplate, DashboardError>
where
    PS: ProjectStore + Send + Sync + 'static,
    DS: DeviceStore + Send + Sync + 'static,
    TS: TelemetryStore + Send + Sync + 'static,
    MS: ModelStore + Send + Sync + 'static,
{
    let project_id = ProjectId::from_str(&id).map_err(|_| {
        PumpHubError::from(NotFoundError {
            entity: "Project",
            id: id.clone(),
        })
    })?;

    let project = state.project_service.get_project(project_id).await?;
    let dashboard = state
        .dashboard_service
        .project_dashboard(project_id)
        .await?;

    Ok(ProjectDashboardTemplate {
        active_nav: "projects",
        flash: params.into_flash(),
        total_samples: dashboard.telemetry.total_or_zero(),
        project,
        devices: dashboard.devices,
        models: dashboard.models,
    })
}
