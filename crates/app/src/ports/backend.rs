//! Backend port — read and mutation contracts against the hosted table
//! backend.
//!
//! The dashboard consumes four independent contracts: one project lookup,
//! and the three project-scoped collection reads it composes into a page.
//! All reads are side-effect-free; the only mutation is the device delete.

use std::future::Future;

use pumphub_domain::device::Device;
use pumphub_domain::error::PumpHubError;
use pumphub_domain::id::{DeviceId, ProjectId};
use pumphub_domain::ml_model::MlModel;
use pumphub_domain::project::Project;
use pumphub_domain::telemetry::TelemetryPage;

/// Project lookups.
pub trait ProjectStore {
    /// Fetch one project by id, `None` when the backend has no such row.
    fn get(
        &self,
        id: ProjectId,
    ) -> impl Future<Output = Result<Option<Project>, PumpHubError>> + Send;
}

/// Device reads and the single delete mutation.
pub trait DeviceStore {
    /// All devices belonging to `project_id`, in backend default order.
    fn list_for_project(
        &self,
        project_id: ProjectId,
    ) -> impl Future<Output = Result<Vec<Device>, PumpHubError>> + Send;

    /// Delete the device with the given id. Deleting an id that no longer
    /// exists is not an error at this layer; the backend decides.
    fn delete(&self, id: DeviceId) -> impl Future<Output = Result<(), PumpHubError>> + Send;
}

/// Telemetry sample reads.
pub trait TelemetryStore {
    /// The most recent `limit` samples for `project_id`, newest first,
    /// together with the exact total count of matching rows.
    fn recent_for_project(
        &self,
        project_id: ProjectId,
        limit: u32,
    ) -> impl Future<Output = Result<TelemetryPage, PumpHubError>> + Send;
}

/// ML model reads.
pub trait ModelStore {
    /// All models registered on `project_id`, newest first, unlimited.
    fn list_for_project(
        &self,
        project_id: ProjectId,
    ) -> impl Future<Output = Result<Vec<MlModel>, PumpHubError>> + Send;
}
