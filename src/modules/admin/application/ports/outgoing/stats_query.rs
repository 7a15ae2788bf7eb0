use async_trait::async_trait;

use crate::modules::admin::application::domain::entities::DashboardStats;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum StatsQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait StatsQuery: Send + Sync {
    async fn dashboard_stats(&self) -> Result<DashboardStats, StatsQueryError>;
}
