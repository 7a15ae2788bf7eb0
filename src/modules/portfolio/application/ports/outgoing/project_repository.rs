// src/modules/portfolio/application/ports/outgoing/project_repository.rs

use async_trait::async_trait;
use serde::Deserialize;
use utoipa::ToSchema;

/// Flag changes an administrator can apply to several projects at once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum ProjectBulkAction {
    Feature,
    Unfeature,
    MarkFinished,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ProjectRepositoryError {
    /// No active project with that id.
    #[error("Project not found")]
    NotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait ProjectRepository: Send + Sync {
    /// Adds one view to an active project in a single statement and returns
    /// the new counter.
    async fn increment_views(&self, project_id: i64) -> Result<i64, ProjectRepositoryError>;

    /// Returns the number of rows changed.
    async fn apply_bulk_action(
        &self,
        project_ids: &[i64],
        action: ProjectBulkAction,
    ) -> Result<u64, ProjectRepositoryError>;
}
