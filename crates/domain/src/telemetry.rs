//! Telemetry — sample rows reported by pump devices.

use serde::{Deserialize, Serialize};

use crate::id::{DeviceId, ProjectId};
use crate::time::Timestamp;

/// One telemetry sample. The dashboard treats samples as opaque beyond
/// their timestamp; only recency ordering and the total count matter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TelemetrySample {
    /// Owning project.
    pub project_id: ProjectId,
    /// Reporting device, when the backend records it.
    pub device_id: Option<DeviceId>,
    /// Sample time in UTC.
    pub ts_utc: Timestamp,
}

/// A page of recent samples together with the server-side exact count of
/// all matching rows (independent of the page limit).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TelemetryPage {
    /// Most recent samples, newest first.
    pub samples: Vec<TelemetrySample>,
    /// Exact total row count, when the backend reported one.
    pub total: Option<u64>,
}

impl TelemetryPage {
    /// Total sample count with the zero fallback used by the header.
    #[must_use]
    pub fn total_or_zero(&self) -> u64 {
        self.total.unwrap_or(0)
    }
}
