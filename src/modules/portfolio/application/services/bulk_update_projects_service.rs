use async_trait::async_trait;

use crate::modules::portfolio::application::ports::incoming::use_cases::{
    BulkUpdateProjectsError, BulkUpdateProjectsUseCase,
};
use crate::modules::portfolio::application::ports::outgoing::{
    ProjectBulkAction, ProjectRepository, ProjectRepositoryError,
};

pub struct BulkUpdateProjectsService<R>
where
    R: ProjectRepository,
{
    repo: R,
}

impl<R> BulkUpdateProjectsService<R>
where
    R: ProjectRepository,
{
    pub fn new(repo: R) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl<R> BulkUpdateProjectsUseCase for BulkUpdateProjectsService<R>
where
    R: ProjectRepository + Send + Sync,
{
    async fn execute(
        &self,
        mut project_ids: Vec<i64>,
        action: ProjectBulkAction,
    ) -> Result<u64, BulkUpdateProjectsError> {
        project_ids.sort_unstable();
        project_ids.dedup();
        if project_ids.is_empty() {
            return Err(BulkUpdateProjectsError::EmptySelection);
        }

        match self.repo.apply_bulk_action(&project_ids, action).await {
            Ok(updated) => Ok(updated),
            // Bulk updates never report missing rows, only a zero count.
            Err(ProjectRepositoryError::NotFound) => Ok(0),
            Err(ProjectRepositoryError::DatabaseError(msg)) => {
                Err(BulkUpdateProjectsError::StorageUnavailable(msg))
            }
        }
    }
}
