use async_trait::async_trait;

use crate::modules::portfolio::application::ports::incoming::use_cases::{
    IncrementProjectViewsError, IncrementProjectViewsUseCase,
};
use crate::modules::portfolio::application::ports::outgoing::{
    ProjectRepository, ProjectRepositoryError,
};

pub struct IncrementProjectViewsService<R>
where
    R: ProjectRepository,
{
    repo: R,
}

impl<R> IncrementProjectViewsService<R>
where
    R: ProjectRepository,
{
    pub fn new(repo: R) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl<R> IncrementProjectViewsUseCase for IncrementProjectViewsService<R>
where
    R: ProjectRepository + Send + Sync,
{
    async fn execute(&self, project_id: i64) -> Result<i64, IncrementProjectViewsError> {
        self.repo
            .increment_views(project_id)
            .await
            .map_err(|e| match e {
                ProjectRepositoryError::NotFound => IncrementProjectViewsError::NotFound,
                ProjectRepositoryError::DatabaseError(msg) => {
                    IncrementProjectViewsError::StorageUnavailable(msg)
                }
            })
    }
}
