//! REST implementation of [`ProjectStore`].

use std::future::Future;

use serde::Deserialize;

use pumphub_app::ports::ProjectStore;
use pumphub_domain::error::PumpHubError;
use pumphub_domain::id::ProjectId;
use pumphub_domain::project::Project;

use crate::client::BackendClient;

const TABLE: &str = "projects";

/// Wire row as the backend serves it.
#[derive(Debug, Deserialize)]
struct ProjectRow {
    project_id: ProjectId,
    project_name: String,
}

impl From<ProjectRow> for Project {
    fn from(row: ProjectRow) -> Self {
        Self {
            id: row.project_id,
            name: row.project_name,
        }
    }
}

/// REST-backed project store.
#[derive(Debug, Clone)]
pub struct RestProjectStore {
    client: BackendClient,
}

impl RestProjectStore {
    /// Create a new store using the given backend client.
    #[must_use]
    pub fn new(client: BackendClient) -> Self {
        Self { client }
    }
}

impl ProjectStore for RestProjectStore {
    fn get(
        &self,
        id: ProjectId,
    ) -> impl Future<Output = Result<Option<Project>, PumpHubError>> + Send {
        let client = self.client.clone();
        async move {
            let query = [
                ("project_id", format!("eq.{id}")),
                ("limit", "1".to_string()),
            ];
            let mut rows: Vec<ProjectRow> = client.get_rows(TABLE, &query).await?;
            Ok(rows.pop().map(Project::from))
        }
    }
}
