//! ML model — a trained level-prediction model registered on a project.

use serde::{Deserialize, Serialize};

use crate::id::{ModelId, ProjectId};
use crate::time::Timestamp;

/// A trained model record. Listed newest first on the dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MlModel {
    /// Unique model identifier.
    pub id: ModelId,
    /// Owning project.
    pub project_id: ProjectId,
    /// Model name.
    pub name: String,
    /// Optional version tag.
    pub version: Option<String>,
    /// Registration time in UTC.
    pub created_at: Timestamp,
}

impl MlModel {
    /// Creation time formatted for the dashboard.
    #[must_use]
    pub fn created_label(&self) -> String {
        self.created_at.format("%Y-%m-%d %H:%M UTC").to_string()
    }
}
