//! # pumphub-app
//!
//! Application layer — use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that the backend adapter must implement
//!   (driven/outbound ports):
//!   - `ProjectStore` — look up a project by id
//!   - `DeviceStore` — list a project's devices, delete one device
//!   - `TelemetryStore` — recent sample page with an exact total count
//!   - `ModelStore` — list a project's registered ML models
//! - Define **driving/inbound ports** as use-case structs:
//!   - `ProjectService` — resolve the project a page is rendered for
//!   - `DashboardService` — fan out the three dashboard reads and join
//!   - `DeviceService` — delete a device record
//! - Orchestrate domain objects without knowing *how* the backend is
//!   reached
//!
//! ## Dependency rule
//! Depends on `pumphub-domain` only (plus `tokio` macros for joins).
//! Never imports adapter crates. Adapters depend on *this* crate, not the
//! reverse.

pub mod ports;
pub mod services;
