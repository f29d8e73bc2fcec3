//! REST implementation of [`ModelStore`].

use std::future::Future;

use serde::Deserialize;

use pumphub_app::ports::ModelStore;
use pumphub_domain::error::PumpHubError;
use pumphub_domain::id::{ModelId, ProjectId};
use pumphub_domain::ml_model::MlModel;
use pumphub_domain::time::Timestamp;

use crate::client::BackendClient;

const TABLE: &str = "ml_models";

/// Wire row as the backend serves it.
#[derive(Debug, Deserialize)]
struct ModelRow {
    model_id: ModelId,
    project_id: ProjectId,
    name: String,
    #[serde(default)]
    version: Option<String>,
    created_at: Timestamp,
}

impl From<ModelRow> for MlModel {
    fn from(row: ModelRow) -> Self {
        Self {
            id: row.model_id,
            project_id: row.project_id,
            name: row.name,
            version: row.version,
            created_at: row.created_at,
        }
    }
}

/// REST-backed model store.
#[derive(Debug, Clone)]
pub struct RestModelStore {
    client: BackendClient,
}

impl RestModelStore {
    /// Create a new store using the given backend client.
    #[must_use]
    pub fn new(client: BackendClient) -> Self {
        Self { client }
    }
}

impl ModelStore for RestModelStore {
    fn list_for_project(
        &self,
        project_id: ProjectId,
    ) -> impl Future<Output = Result<Vec<MlModel>, PumpHubError>> + Send {
        let client = self.client.clone();
        async move {
            let query = [
                ("project_id", format!("eq.{project_id}")),
                ("order", "created_at.desc".to_string()),
            ];
            let rows: Vec<ModelRow> = client.get_rows(TABLE, &query).await?;
            Ok(rows.into_iter().map(MlModel::from).collect())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_decode_model_row_with_and_without_version() {
        let row: ModelRow = serde_json::from_str(
            r#"{
                "model_id": "5bd0f0f3-68c8-4c6f-9f6e-0f0a43a1a002",
                "project_id": "8f14e45f-ceea-467f-a8cb-9b1a79b4c31e",
                "name": "level-predictor",
                "version": "v3",
                "created_at": "2026-03-14T09:26:53Z"
            }"#,
        )
        .unwrap();
        let model = MlModel::from(row);
        assert_eq!(model.version.as_deref(), Some("v3"));

        let row: ModelRow = serde_json::from_str(
            r#"{
                "model_id": "5bd0f0f3-68c8-4c6f-9f6e-0f0a43a1a002",
                "project_id": "8f14e45f-ceea-467f-a8cb-9b1a79b4c31e",
                "name": "level-predictor",
                "created_at": "2026-03-14T09:26:53Z"
            }"#,
        )
        .unwrap();
        assert_eq!(MlModel::from(row).version, None);
    }
}
