//! # pumphubd — pumphub daemon
//!
//! Composition root that wires all adapters together and starts the
//! dashboard server.
//!
//! ## Responsibilities
//! - Parse configuration (TOML file, env vars)
//! - Initialize tracing
//! - Construct the REST backend client and store implementations
//! - Construct application services, injecting stores via port traits
//! - Build the axum router, injecting application services
//! - Bind to a TCP port and serve
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer — no domain logic belongs here.

mod config;

use config::Config;
use pumphub_adapter_backend_rest::{
    RestDeviceStore, RestModelStore, RestProjectStore, RestTelemetryStore,
};
use pumphub_adapter_http_axum::state::AppState;
use pumphub_app::services::dashboard_service::DashboardService;
use pumphub_app::services::device_service::DeviceService;
use pumphub_app::services::project_service::ProjectService;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&config.logging.filter))
        .init();

    // Backend client and stores
    let client = pumphub_adapter_backend_rest::Config {
        base_url: config.backend.url.clone(),
        api_key: config.backend.api_key.clone(),
    }
    .build();

    let project_store = RestProjectStore::new(client.clone());
    let device_store = RestDeviceStore::new(client.clone());
    let telemetry_store = RestTelemetryStore::new(client.clone());
    let model_store = RestModelStore::new(client);

    // Services
    let project_service = ProjectService::new(project_store);
    let dashboard_service = DashboardService::new(device_store.clone(), telemetry_store, model_store);
    let device_service = DeviceService::new(device_store);

    // HTTP
    let state = AppState::new(project_service, dashboard_service, device_service);
    let app = pumphub_adapter_http_axum::router::build(state);

    let bind_addr = config.bind_addr();
    tracing::info!(%bind_addr, backend = %config.backend.url, "pumphubd listening");

    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
