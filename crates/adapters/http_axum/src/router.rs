//! Axum router assembly.

use axum::Router;
use axum::routing::get;
use tower_http::trace::TraceLayer;

use pumphub_app::ports::{DeviceStore, ModelStore, ProjectStore, TelemetryStore};

use crate::state::AppState;

/// Build the top-level axum [`Router`].
///
/// Mounts the dashboard routes at `/` and a health probe. Includes a
/// [`TraceLayer`] that logs each HTTP request/response at the `DEBUG`
/// level using the `tracing` ecosystem.
pub fn build<PS, DS, TS, MS>(state: AppState<PS, DS, TS, MS>) -> Router
where
    PS: ProjectStore + Send + Sync + 'static,
    DS: DeviceStore + Send + Sync + 'static,
    TS: TelemetryStore + Send + Sync + 'static,
    MS: ModelStore + Send + Sync + 'static,
{
    Router::new()
        .route("/health", get(health_check))
        .merge(crate::dashboard::routes())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health_check() -> &'static str {
    "OK"
}
