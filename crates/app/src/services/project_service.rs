//! Project service — resolving the project a page is rendered for.

use pumphub_domain::error::{NotFoundError, PumpHubError};
use pumphub_domain::id::ProjectId;
use pumphub_domain::project::Project;

use crate::ports::ProjectStore;

/// Application service for project lookups.
pub struct ProjectService<S> {
    store: S,
}

impl<S: ProjectStore> ProjectService<S> {
    /// Create a new service backed by the given store.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Look up a project by id, returning an error if not found.
    ///
    /// # Errors
    ///
    /// Returns [`PumpHubError::NotFound`] when no project with `id` exists,
    /// or a backend error propagated from the store.
    #[tracing::instrument(skip(self))]
    pub async fn get_project(&self, id: ProjectId) -> Result<Project, PumpHubError> {
        self.store.get(id).await?.ok_or_else(|| {
            NotFoundError {
                entity: "Project",
                id: id.to_string(),
            }
            .into()
        })
    }
}
