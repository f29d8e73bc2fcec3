//! # pumphub-adapter-backend-rest
//!
//! Backend adapter speaking the PostgREST-style table protocol of the
//! hosted database service.
//!
//! ## Responsibilities
//! - Translate port calls into filtered table requests
//!   (`?project_id=eq.<uuid>`, `order=ts_utc.desc`, `limit=20`)
//! - Request exact row counts via `Prefer: count=exact` and read them back
//!   from the `Content-Range` response header
//! - Decode wire rows into domain types
//! - Map backend error bodies into [`BackendError`] so the backend's own
//!   message reaches the user-facing notice
//!
//! ## Dependency rule
//! Depends on `pumphub-app` (for the port traits) and `pumphub-domain`
//! (for the types the ports exchange). Never leaks reqwest types upward.
//!
//! [`BackendError`]: pumphub_domain::error::BackendError

mod client;
mod device_store;
mod error;
mod model_store;
mod project_store;
mod telemetry_store;

pub use client::{BackendClient, Config};
pub use device_store::RestDeviceStore;
pub use error::RestError;
pub use model_store::RestModelStore;
pub use project_store::RestProjectStore;
pub use telemetry_store::RestTelemetryStore;
