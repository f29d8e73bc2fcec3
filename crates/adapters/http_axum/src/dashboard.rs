//! Server-side rendered HTML dashboard (no JavaScript).

#[allow(clippy::missing_errors_doc)]
pub mod devices;
#[allow(clippy::missing_errors_doc)]
pub mod projects;

use axum::Router;
use axum::routing::get;

use pumphub_app::ports::{DeviceStore, ModelStore, ProjectStore, TelemetryStore};

use crate::state::AppState;

/// Build the dashboard sub-router for SSR HTML pages.
pub fn routes<PS, DS, TS, MS>() -> Router<AppState<PS, DS, TS, MS>>
where
    PS: ProjectStore + Send + Sync + 'static,
    DS: DeviceStore + Send + Sync + 'static,
    TS: TelemetryStore + Send + Sync + 'static,
    MS: ModelStore + Send + Sync + 'static,
{
    Router::new()
        .route("/projects/{id}", get(projects::show::<PS, DS, TS, MS>))
        .route(
            "/devices/{id}/delete",
            get(devices::confirm_delete).post(devices::delete::<PS, DS, TS, MS>),
        )
}
