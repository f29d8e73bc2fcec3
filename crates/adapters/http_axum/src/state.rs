//! Shared application state for axum handlers.

use std::sync::Arc;

use pumphub_app::ports::{DeviceStore, ModelStore, ProjectStore, TelemetryStore};
use pumphub_app::services::dashboard_service::DashboardService;
use pumphub_app::services::device_service::DeviceService;
use pumphub_app::services::project_service::ProjectService;

/// Application state shared across all axum handlers.
///
/// Generic over the store types to avoid dynamic dispatch. `Clone` is
/// implemented manually so the underlying types themselves do not need to
/// be `Clone` — only the `Arc` wrappers are cloned.
pub struct AppState<PS, DS, TS, MS> {
    /// Project lookup service.
    pub project_service: Arc<ProjectService<PS>>,
    /// Dashboard read fan-out service.
    pub dashboard_service: Arc<DashboardService<DS, TS, MS>>,
    /// Device delete service.
    pub device_service: Arc<DeviceService<DS>>,
}

impl<PS, DS, TS, MS> Clone for AppState<PS, DS, TS, MS> {
    fn clone(&self) -> Self {
        Self {
            project_service: Arc::clone(&self.project_service),
            dashboard_service: Arc::clone(&self.dashboard_service),
            device_service: Arc::clone(&self.device_service),
        }
    }
}

impl<PS, DS, TS, MS> AppState<PS, DS, TS, MS>
where
    PS: ProjectStore + Send + Sync + 'static,
    DS: DeviceStore + Send + Sync + 'static,
    TS: TelemetryStore + Send + Sync + 'static,
    MS: ModelStore + Send + Sync + 'static,
{
    /// Create a new application state from service instances.
    pub fn new(
        project_service: ProjectService<PS>,
        dashboard_service: DashboardService<DS, TS, MS>,
        device_service: DeviceService<DS>,
    ) -> Self {
        Self {
            project_service: Arc::new(project_service),
            dashboard_service: Arc::new(dashboard_service),
            device_service: Arc::new(device_service),
        }
    }
}
