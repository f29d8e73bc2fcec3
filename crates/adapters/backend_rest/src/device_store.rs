//! REST implementation of [`DeviceStore`].

use std::future::Future;

use serde::Deserialize;

use pumphub_app::ports::DeviceStore;
use pumphub_domain::device::{Device, DeviceRole};
use pumphub_domain::error::PumpHubError;
use pumphub_domain::id::{DeviceId, ProjectId};

use crate::client::BackendClient;

const TABLE: &str = "devices";

/// Wire row as the backend serves it. Geometry columns may be absent or
/// null for uncalibrated devices.
#[derive(Debug, Deserialize)]
struct DeviceRow {
    device_id: DeviceId,
    project_id: ProjectId,
    role: DeviceRole,
    auto_update: bool,
    #[serde(default)]
    tank_shape: Option<String>,
    #[serde(default)]
    height_cm: Option<f64>,
    #[serde(default)]
    width_cm: Option<f64>,
}

impl From<DeviceRow> for Device {
    fn from(row: DeviceRow) -> Self {
        Self {
            id: row.device_id,
            project_id: row.project_id,
            role: row.role,
            auto_update: row.auto_update,
            tank_shape: row.tank_shape,
            height_cm: row.height_cm,
            width_cm: row.width_cm,
        }
    }
}

/// REST-backed device store.
#[derive(Debug, Clone)]
pub struct RestDeviceStore {
    client: BackendClient,
}

impl RestDeviceStore {
    /// Create a new store using the given backend client.
    #[must_use]
    pub fn new(client: BackendClient) -> Self {
        Self { client }
    }
}

impl DeviceStore for RestDeviceStore {
    fn list_for_project(
        &self,
        project_id: ProjectId,
    ) -> impl Future<Output = Result<Vec<Device>, PumpHubError>> + Send {
        let client = self.client.clone();
        async move {
            let query = [("project_id", format!("eq.{project_id}"))];
            let rows: Vec<DeviceRow> = client.get_rows(TABLE, &query).await?;
            Ok(rows.into_iter().map(Device::from).collect())
        }
    }

    fn delete(&self, id: DeviceId) -> impl Future<Output = Result<(), PumpHubError>> + Send {
        let client = self.client.clone();
        async move {
            let query = [("device_id", format!("eq.{id}"))];
            client.delete_rows(TABLE, &query).await?;
            Ok(())
        }
    }
}
