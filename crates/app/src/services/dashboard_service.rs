//! Dashboard service — assembling the data behind the project page.

use pumphub_domain::device::Device;
use pumphub_domain::error::PumpHubError;
use pumphub_domain::id::ProjectId;
use pumphub_domain::ml_model::MlModel;
use pumphub_domain::telemetry::TelemetryPage;

use crate::ports::{DeviceStore, ModelStore, TelemetryStore};

/// How many recent telemetry samples one dashboard render requests.
/// The exact total count arrives alongside the page regardless of this
/// limit.
pub const SAMPLE_PAGE_LIMIT: u32 = 20;

/// Everything the project dashboard renders, fetched in one pass.
#[derive(Debug, Clone)]
pub struct ProjectDashboard {
    /// Devices attached to the project, backend default order.
    pub devices: Vec<Device>,
    /// Recent telemetry page plus exact total count.
    pub telemetry: TelemetryPage,
    /// Registered ML models, newest first.
    pub models: Vec<MlModel>,
}

/// Application service composing the three dashboard reads.
pub struct DashboardService<DS, TS, MS> {
    devices: DS,
    telemetry: TS,
    models: MS,
}

impl<DS, TS, MS> DashboardService<DS, TS, MS>
where
    DS: DeviceStore,
    TS: TelemetryStore,
    MS: ModelStore,
{
    /// Create a new service backed by the given stores.
    pub fn new(devices: DS, telemetry: TS, models: MS) -> Self {
        Self {
            devices,
            telemetry,
            models,
        }
    }

    /// Fetch the three dashboard collections for one project.
    ///
    /// The reads are independent and side-effect-free, so they fan out
    /// concurrently and join before the page is composed. One failed read
    /// fails the whole render; there is no per-section degradation.
    ///
    /// # Errors
    ///
    /// Returns the first backend error any of the reads produced.
    #[tracing::instrument(skip(self))]
    pub async fn project_dashboard(
        &self,
        project_id: ProjectId,
    ) -> Result<ProjectDashboard, PumpHubError> {
        let (devices, telemetry, models) = tokio::try_join!(
            self.devices.list_for_project(project_id),
            self.telemetry.recent_for_project(project_id, SAMPLE_PAGE_LIMIT),
            self.models.list_for_project(project_id),
        )?;

        Ok(ProjectDashboard {
            devices,
            telemetry,
            models,
        })
    }
}
