use async_trait::async_trait;

use crate::modules::admin::application::domain::entities::DashboardStats;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GetDashboardStatsError {
    #[error("Storage unavailable: {0}")]
    StorageUnavailable(String),
}

#[async_trait]
pub trait GetDashboardStatsUseCase: Send + Sync {
    async fn execute(&self) -> Result<DashboardStats, GetDashboardStatsError>;
}
