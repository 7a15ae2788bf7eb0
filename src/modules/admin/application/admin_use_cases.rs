use std::sync::Arc;

use crate::modules::admin::application::ports::incoming::use_cases::GetDashboardStatsUseCase;

#[derive(Clone)]
pub struct AdminUseCases {
    pub get_stats: Arc<dyn GetDashboardStatsUseCase + Send + Sync>,
}
