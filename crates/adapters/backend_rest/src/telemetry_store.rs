//! REST implementation of [`TelemetryStore`].

use std::future::Future;

use serde::Deserialize;

use pumphub_app::ports::TelemetryStore;
use pumphub_domain::error::PumpHubError;
use pumphub_domain::id::{DeviceId, ProjectId};
use pumphub_domain::telemetry::{TelemetryPage, TelemetrySample};
use pumphub_domain::time::Timestamp;

use crate::client::BackendClient;

const TABLE: &str = "wp_samples";

/// Wire row as the backend serves it. Samples carry more columns than the
/// dashboard uses; everything beyond the timestamp is ignored.
#[derive(Debug, Deserialize)]
struct SampleRow {
    project_id: ProjectId,
    #[serde(default)]
    device_id: Option<DeviceId>,
    ts_utc: Timestamp,
}

impl From<SampleRow> for TelemetrySample {
    fn from(row: SampleRow) -> Self {
        Self {
            project_id: row.project_id,
            device_id: row.device_id,
            ts_utc: row.ts_utc,
        }
    }
}

/// REST-backed telemetry store.
#[derive(Debug, Clone)]
pub struct RestTelemetryStore {
    client: BackendClient,
}

impl RestTelemetryStore {
    /// Create a new store using the given backend client.
    #[must_use]
    pub fn new(client: BackendClient) -> Self {
        Self { client }
    }
}

impl TelemetryStore for RestTelemetryStore {
    fn recent_for_project(
        &self,
        project_id: ProjectId,
        limit: u32,
    ) -> impl Future<Output = Result<TelemetryPage, PumpHubError>> + Send {
        let client = self.client.clone();
        async move {
            let query = [
                ("project_id", format!("eq.{project_id}")),
                ("order", "ts_utc.desc".to_string()),
                ("limit", limit.to_string()),
            ];
            let (rows, total): (Vec<SampleRow>, Option<u64>) =
                client.get_rows_with_count(TABLE, &query).await?;

            Ok(TelemetryPage {
                samples: rows.into_iter().map(TelemetrySample::from).collect(),
                total,
            })
        }
    }
}
