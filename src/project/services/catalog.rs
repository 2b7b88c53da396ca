//! Project catalog service: CRUD plus archive and restore.

use crate::{
    project::{
        domain::{NewProject, Project, ProjectId, ProjectPatch, ProjectValidationError},
        ports::{ProjectRepository, ProjectRepositoryError},
    },
    store::RecordKey,
};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;

/// Service-level errors for project operations.
#[derive(Debug, Error)]
pub enum ProjectCatalogError {
    /// The draft or patch failed validation.
    #[error(transparent)]
    Validation(#[from] ProjectValidationError),
    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] ProjectRepositoryError),
}

/// Result type for project catalog operations.
pub type ProjectCatalogResult<T> = Result<T, ProjectCatalogError>;

/// Project catalog orchestration service.
pub struct ProjectCatalogService<R, C>
where
    R: ProjectRepository,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    clock: Arc<C>,
}

impl<R, C> Clone for ProjectCatalogService<R, C>
where
    R: ProjectRepository,
    C: Clock + Send + Sync,
{
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
            clock: Arc::clone(&self.clock),
        }
    }
}

impl<R, C> ProjectCatalogService<R, C>
where
    R: ProjectRepository,
    C: Clock + Send + Sync,
{
    /// Creates a new project catalog service.
    #[must_use]
    pub const fn new(repository: Arc<R>, clock: Arc<C>) -> Self {
        Self { repository, clock }
    }

    /// Returns every project in insertion order.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectCatalogError::Repository`] when the store fails.
    pub async fn all(&self) -> ProjectCatalogResult<Vec<Project>> {
        Ok(self.repository.all().await?)
    }

    /// Returns the projects that are not archived.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectCatalogError::Repository`] when the store fails.
    pub async fn active(&self) -> ProjectCatalogResult<Vec<Project>> {
        let mut projects = self.all().await?;
        projects.retain(|project| !project.is_archived());
        Ok(projects)
    }

    /// Finds a project by identifier.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectCatalogError::Repository`] when the store fails.
    pub async fn find_by_id(&self, id: ProjectId) -> ProjectCatalogResult<Option<Project>> {
        Ok(self.repository.find_by_id(id).await?)
    }

    /// Finds a project by a loosely formatted key such as `"3"`.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectCatalogError::Repository`] when the store fails.
    pub async fn find_by_key(&self, key: &str) -> ProjectCatalogResult<Option<Project>> {
        match ProjectId::coerce(key) {
            Some(id) => self.find_by_id(id).await,
            None => Ok(None),
        }
    }

    /// Validates and stores a new, active project.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectCatalogError::Validation`] when the draft is invalid
    /// or [`ProjectCatalogError::Repository`] when the store fails.
    pub async fn create(&self, draft: NewProject) -> ProjectCatalogResult<Project> {
        if let Err(err) = draft.validate() {
            tracing::warn!(error = %err, "rejected project draft");
            return Err(err.into());
        }
        let project = self.repository.create(draft, self.clock.utc()).await?;
        tracing::info!(project_id = %project.id(), title = project.title(), "created project");
        Ok(project)
    }

    /// Validates and merges a partial update onto a project.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectCatalogError::Validation`] when the patch is invalid
    /// or [`ProjectCatalogError::Repository`] when the store fails.
    pub async fn update(
        &self,
        id: ProjectId,
        patch: ProjectPatch,
    ) -> ProjectCatalogResult<Option<Project>> {
        patch.validate()?;
        let updated = self.repository.update(id, patch).await?;
        if updated.is_some() {
            tracing::info!(project_id = %id, "updated project");
        }
        Ok(updated)
    }

    /// Archives a project.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectCatalogError::Repository`] when the store fails.
    pub async fn archive(&self, id: ProjectId) -> ProjectCatalogResult<Option<Project>> {
        self.update(id, ProjectPatch::new().with_archived(true))
            .await
    }

    /// Restores an archived project.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectCatalogError::Repository`] when the store fails.
    pub async fn unarchive(&self, id: ProjectId) -> ProjectCatalogResult<Option<Project>> {
        self.update(id, ProjectPatch::new().with_archived(false))
            .await
    }

    /// Removes a project and returns it.
    ///
    /// Tasks that belong to the project are not touched.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectCatalogError::Repository`] when the store fails.
    pub async fn delete(&self, id: ProjectId) -> ProjectCatalogResult<Option<Project>> {
        let deleted = self.repository.delete(id).await?;
        if deleted.is_some() {
            tracing::info!(project_id = %id, "deleted project");
        }
        Ok(deleted)
    }
}
