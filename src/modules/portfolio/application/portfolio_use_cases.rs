use std::sync::Arc;

use crate::modules::portfolio::application::ports::incoming::use_cases::{
    BulkUpdateProjectsUseCase, GetSnapshotUseCase, IncrementProjectViewsUseCase,
};

#[derive(Clone)]
pub struct PortfolioUseCases {
    pub get_snapshot: Arc<dyn GetSnapshotUseCase + Send + Sync>,
    pub increment_views: Arc<dyn IncrementProjectViewsUseCase + Send + Sync>,
    pub bulk_update_projects: Arc<dyn BulkUpdateProjectsUseCase + Send + Sync>,
}
