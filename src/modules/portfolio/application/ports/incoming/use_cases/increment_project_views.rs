use async_trait::async_trait;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum IncrementProjectViewsError {
    #[error("Project not found")]
    NotFound,

    #[error("Storage unavailable: {0}")]
    StorageUnavailable(String),
}

#[async_trait]
pub trait IncrementProjectViewsUseCase: Send + Sync {
    /// Returns the view counter after the increment.
    async fn execute(&self, project_id: i64) -> Result<i64, IncrementProjectViewsError>;
}
