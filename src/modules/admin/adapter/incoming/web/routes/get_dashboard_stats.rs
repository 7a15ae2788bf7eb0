use actix_web::{get, web, Responder};
use serde::Serialize;
use tracing::error;
use utoipa::ToSchema;

use crate::{
    modules::admin::{
        adapter::incoming::web::extractors::AdminUser,
        application::{
            domain::entities::DashboardStats,
            ports::incoming::use_cases::GetDashboardStatsError,
        },
    },
    shared::api::ApiResponse,
    AppState,
};

#[derive(Debug, Serialize, ToSchema)]
pub struct DashboardStatsPayload {
    pub total_projets: i64,
    pub projets_featured: i64,
    pub total_competences: i64,
    pub total_experiences: i64,
    pub messages_non_lus: i64,
    pub total_vues_projets: i64,
}

impl From<DashboardStats> for DashboardStatsPayload {
    fn from(stats: DashboardStats) -> Self {
        Self {
            total_projets: stats.total_projects,
            projets_featured: stats.featured_projects,
            total_competences: stats.total_skills,
            total_experiences: stats.total_experiences,
            messages_non_lus: stats.unread_messages,
            total_vues_projets: stats.total_project_views,
        }
    }
}

#[utoipa::path(
    get,
    path = "/api/admin/stats",
    tag = "Admin",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Dashboard counters", body = DashboardStatsPayload),
        (status = 401, description = "Missing or invalid admin token"),
        (status = 500, description = "Storage unavailable")
    )
)]
#[get("/api/admin/stats")]
pub async fn get_dashboard_stats_handler(
    admin: AdminUser,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.admin.get_stats.execute().await {
        Ok(stats) => ApiResponse::success(DashboardStatsPayload::from(stats)),
        Err(GetDashboardStatsError::StorageUnavailable(msg)) => {
            error!("Failed to compute dashboard stats for {}: {}", admin.subject, msg);
            ApiResponse::internal_error("Failed to load statistics")
        }
    }
}
