//! End-to-end smoke tests for the full pumphubd stack.
//!
//! Each test spins up the complete application (in-memory backend stubs,
//! real services, real axum router) and exercises the HTTP layer via
//! `tower::ServiceExt::oneshot` — no TCP port is bound and no remote
//! backend is contacted.

use std::sync::{Arc, Mutex};

use axum::Router;
use axum::body::Body;
use axum::http::header::{CONTENT_TYPE, LOCATION};
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use tower::ServiceExt;

use pumphub_adapter_http_axum::{router, state::AppState};
use pumphub_app::ports::{DeviceStore, ModelStore, ProjectStore, TelemetryStore};
use pumphub_app::services::dashboard_service::DashboardService;
use pumphub_app::services::device_service::DeviceService;
use pumphub_app::services::project_service::ProjectService;
use pumphub_domain::device::{Device, DeviceRole};
use pumphub_domain::error::PumpHubError;
use pumphub_domain::id::{DeviceId, ProjectId};
use pumphub_domain::ml_model::MlModel;
use pumphub_domain::project::Project;
use pumphub_domain::telemetry::TelemetryPage;

/// In-memory stand-in for the hosted table backend.
#[derive(Clone)]
struct InMemoryBackend {
    project: Project,
    devices: Arc<Mutex<Vec<Device>>>,
    sample_total: u64,
}

impl InMemoryBackend {
    fn new(project: Project, devices: Vec<Device>, sample_total: u64) -> Self {
        Self {
            project,
            devices: Arc::new(Mutex::new(devices)),
            sample_total,
        }
    }
}

impl ProjectStore for InMemoryBackend {
    async fn get(&self, id: ProjectId) -> Result<Option<Project>, PumpHubError> {
        Ok((self.project.id == id).then(|| self.project.clone()))
    }
}

impl DeviceStore for InMemoryBackend {
    async fn list_for_project(&self, project_id: ProjectId) -> Result<Vec<Device>, PumpHubError> {
        let devices = self.devices.lock().unwrap();
        Ok(devices
            .iter()
            .filter(|device| device.project_id == project_id)
            .cloned()
            .collect())
    }

    async fn delete(&self, id: DeviceId) -> Result<(), PumpHubError> {
        self.devices.lock().unwrap().retain(|device| device.id != id);
        Ok(())
    }
}

impl TelemetryStore for InMemoryBackend {
    async fn recent_for_project(
        &self,
        _project_id: ProjectId,
        _limit: u32,
    ) -> Result<TelemetryPage, PumpHubError> {
        Ok(TelemetryPage {
            samples: Vec::new(),
            total: Some(self.sample_total),
        })
    }
}

impl ModelStore for InMemoryBackend {
    async fn list_for_project(&self, _project_id: ProjectId) -> Result<Vec<MlModel>, PumpHubError> {
        Ok(Vec::new())
    }
}

/// Build a fully-wired router backed by the in-memory backend.
fn app(backend: &InMemoryBackend) -> Router {
    let state = AppState::new(
        ProjectService::new(backend.clone()),
        DashboardService::new(backend.clone(), backend.clone(), backend.clone()),
        DeviceService::new(backend.clone()),
    );
    router::build(state)
}

fn fixture() -> (InMemoryBackend, Project, Device) {
    let project = Project {
        id: ProjectId::new(),
        name: "Alpine Well".to_string(),
    };
    let device = Device {
        id: DeviceId::new(),
        project_id: project.id,
        role: DeviceRole::Beta,
        auto_update: true,
        tank_shape: Some("cylinder".to_string()),
        height_cm: Some(120.0),
        width_cm: Some(45.0),
    };
    let backend = InMemoryBackend::new(project.clone(), vec![device.clone()], 57);
    (backend, project, device)
}

async fn get_page(router: Router, uri: &str) -> (StatusCode, String) {
    let response = router
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, String::from_utf8(bytes.to_vec()).unwrap())
}

// ---------------------------------------------------------------------------
// Health check
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_return_ok_when_health_check_called() {
    let (backend, _, _) = fixture();
    let (status, body) = get_page(app(&backend), "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "OK");
}

// ---------------------------------------------------------------------------
// Dashboard page
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_render_full_dashboard_for_known_project() {
    let (backend, project, device) = fixture();

    let (status, body) = get_page(app(&backend), &format!("/projects/{}", project.id)).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Alpine Well"));
    assert!(body.contains("57 total samples"));
    assert!(body.contains(&device.id.to_string()));
    assert!(body.contains("H: 120cm W: 45cm"));
    assert!(body.contains("badge badge-warning"));
}

#[tokio::test]
async fn should_return_not_found_for_unknown_project() {
    let (backend, _, _) = fixture();
    let (status, _) = get_page(app(&backend), &format!("/projects/{}", ProjectId::new())).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Delete flow (confirm → POST → redirect → re-render)
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_walk_whole_delete_flow_and_drop_the_row() {
    let (backend, project, device) = fixture();

    // Confirmation page does not mutate.
    let confirm_uri = format!("/devices/{}/delete?project={}", device.id, project.id);
    let (status, body) = get_page(app(&backend), &confirm_uri).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("This cannot be undone!"));
    assert_eq!(backend.devices.lock().unwrap().len(), 1);

    // POST performs the delete and redirects with a success notice.
    let response = app(&backend)
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(format!("/devices/{}/delete", device.id))
                .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
                .body(Body::from(format!("project_id={}", project.id)))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    let location = response
        .headers()
        .get(LOCATION)
        .and_then(|value| value.to_str().ok())
        .unwrap()
        .to_string();
    assert!(location.contains("kind=success"));
    assert!(backend.devices.lock().unwrap().is_empty());

    // Following the redirect shows the notice and the empty state.
    let (status, body) = get_page(app(&backend), &location).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Device deleted successfully"));
    assert!(body.contains("No devices connected to this project"));
    assert!(!body.contains(&device.id.to_string()));
}
