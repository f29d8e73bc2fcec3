//! # pumphub-domain
//!
//! Pure domain model for the pumphub water-pump monitoring dashboard.
//!
//! ## Responsibilities
//! - Foundational types: typed identifiers, error conventions, timestamps
//! - Define **Projects** (the monitored installations)
//! - Define **Devices** (pump controllers attached to a project)
//! - Define **Telemetry** (sample pages with server-side exact counts)
//! - Define **ML models** (trained models registered against a project)
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod id;
pub mod time;

pub mod device;
pub mod ml_model;
pub mod project;
pub mod telemetry;
