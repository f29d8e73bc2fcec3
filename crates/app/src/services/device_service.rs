//! Device service — the delete use-case.

use pumphub_domain::error::PumpHubError;
use pumphub_domain::id::DeviceId;

use crate::ports::DeviceStore;

/// Application service for device mutations.
///
/// Deletion is single-attempt: no retry, no rollback. Re-issuing a delete
/// for an already-removed id is harmless, so double submissions are left
/// unguarded.
pub struct DeviceService<S> {
    store: S,
}

impl<S: DeviceStore> DeviceService<S> {
    /// Create a new service backed by the given store.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Delete a device by id.
    ///
    /// # Errors
    ///
    /// Returns a backend error propagated from the store; the backend's
    /// message is preserved for the user-facing notice.
    #[tracing::instrument(skip(self))]
    pub async fn delete_device(&self, id: DeviceId) -> Result<(), PumpHubError> {
        self.store.delete(id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pumphub_domain::device::Device;
    use pumphub_domain::error::BackendError;
    use pumphub_domain::id::ProjectId;
    use std::future::Future;
    use std::sync::Mutex;

    struct RecordingDeviceStore {
        deleted: Mutex<Vec<DeviceId>>,
        fail_with: Option<String>,
    }

    impl RecordingDeviceStore {
        fn succeeding() -> Self {
            Self {
                deleted: Mutex::new(Vec::new()),
                fail_with: None,
            }
        }

        fn failing(message: &str) -> Self {
            Self {
                deleted: Mutex::new(Vec::new()),
                fail_with: Some(message.to_string()),
            }
        }
    }

    impl DeviceStore for RecordingDeviceStore {
        fn list_for_project(
            &self,
            _project_id: ProjectId,
        ) -> impl Future<Output = Result<Vec<Device>, PumpHubError>> + Send {
            async { Ok(Vec::new()) }
        }

        fn delete(&self, id: DeviceId) -> impl Future<Output = Result<(), PumpHubError>> + Send {
            let result = match &self.fail_with {
                Some(message) => Err(BackendError::new(message.clone()).into()),
                None => {
                    self.deleted.lock().unwrap().push(id);
                    Ok(())
                }
            };
            async { result }
        }
    }

    #[tokio::test]
    async fn should_delete_exactly_one_device() {
        let store = RecordingDeviceStore::succeeding();
        let id = DeviceId::new();

        let svc = DeviceService::new(store);
        svc.delete_device(id).await.unwrap();

        assert_eq!(*svc.store.deleted.lock().unwrap(), vec![id]);
    }

    #[tokio::test]
    async fn should_surface_backend_message_when_delete_fails() {
        let svc = DeviceService::new(RecordingDeviceStore::failing("row is referenced"));

        let err = svc.delete_device(DeviceId::new()).await.unwrap_err();
        assert_eq!(err.to_string(), "row is referenced");
        assert!(svc.store.deleted.lock().unwrap().is_empty());
    }
}
