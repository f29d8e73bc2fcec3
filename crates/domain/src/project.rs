//! Project — one monitored water-pump installation.

use serde::{Deserialize, Serialize};

use crate::id::ProjectId;

/// A water-pump project. Devices, telemetry, and models are scoped to
/// exactly one project; the dashboard renders one project at a time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    /// Unique project identifier.
    pub id: ProjectId,
    /// Display name, shown as the page title.
    pub name: String,
}
