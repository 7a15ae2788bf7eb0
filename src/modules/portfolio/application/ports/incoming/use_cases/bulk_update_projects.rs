use async_trait::async_trait;

use crate::modules::portfolio::application::ports::outgoing::ProjectBulkAction;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum BulkUpdateProjectsError {
    #[error("No project selected")]
    EmptySelection,

    #[error("Storage unavailable: {0}")]
    StorageUnavailable(String),
}

#[async_trait]
pub trait BulkUpdateProjectsUseCase: Send + Sync {
    async fn execute(
        &self,
        project_ids: Vec<i64>,
        action: ProjectBulkAction,
    ) -> Result<u64, BulkUpdateProjectsError>;
}
