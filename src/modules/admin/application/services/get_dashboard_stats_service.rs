use async_trait::async_trait;

use crate::modules::admin::application::domain::entities::DashboardStats;
use crate::modules::admin::application::ports::incoming::use_cases::{
    GetDashboardStatsError, GetDashboardStatsUseCase,
};
use crate::modules::admin::application::ports::outgoing::{StatsQuery, StatsQueryError};

pub struct GetDashboardStatsService<Q>
where
    Q: StatsQuery,
{
    query: Q,
}

impl<Q> GetDashboardStatsService<Q>
where
    Q: StatsQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetDashboardStatsUseCase for GetDashboardStatsService<Q>
where
    Q: StatsQuery + Send + Sync,
{
    async fn execute(&self) -> Result<DashboardStats, GetDashboardStatsError> {
        self.query.dashboard_stats().await.map_err(|e| match e {
            StatsQueryError::DatabaseError(msg) => GetDashboardStatsError::StorageUnavailable(msg),
        })
    }
}
