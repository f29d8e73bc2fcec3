//! Device — a pump controller attached to a project.

use serde::{Deserialize, Serialize};

use crate::id::{DeviceId, ProjectId};

/// Rollout role of a device. Beta devices receive firmware ahead of the
/// fleet and are highlighted on the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeviceRole {
    /// Stable rollout channel.
    Alpha,
    /// Early rollout channel.
    Beta,
    /// Any role value this version does not know about.
    #[serde(other)]
    Unknown,
}

impl DeviceRole {
    /// Whether this device is on the beta channel.
    #[must_use]
    pub fn is_beta(self) -> bool {
        matches!(self, Self::Beta)
    }
}

impl std::fmt::Display for DeviceRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Self::Alpha => "alpha",
            Self::Beta => "beta",
            Self::Unknown => "unknown",
        };
        f.write_str(label)
    }
}

/// A device record as stored by the backend.
///
/// Tank geometry is optional: devices report shape and dimensions only
/// once they have been calibrated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Device {
    /// Unique device identifier.
    pub id: DeviceId,
    /// Owning project.
    pub project_id: ProjectId,
    /// Rollout role.
    pub role: DeviceRole,
    /// Whether the device self-updates its firmware.
    pub auto_update: bool,
    /// Calibrated tank shape, if any.
    pub tank_shape: Option<String>,
    /// Tank height in centimetres, if calibrated.
    pub height_cm: Option<f64>,
    /// Tank width in centimetres, if calibrated.
    pub width_cm: Option<f64>,
}

impl Device {
    /// Human-readable dimensions cell, e.g. `H: 120cm W: 45cm`.
    ///
    /// Absent dimensions are omitted entirely; a device with no calibration
    /// yields an empty string, never a placeholder.
    #[must_use]
    pub fn dimensions_label(&self) -> String {
        let mut parts = Vec::with_capacity(2);
        if let Some(height) = self.height_cm {
            parts.push(format!("H: {height}cm"));
        }
        if let Some(width) = self.width_cm {
            parts.push(format!("W: {width}cm"));
        }
        parts.join(" ")
    }

    /// Tank shape for display, with the `N/A` fallback for uncalibrated
    /// devices.
    #[must_use]
    pub fn tank_shape_label(&self) -> &str {
        self.tank_shape.as_deref().unwrap_or("N/A")
    }
}
