use actix_web::{post, web, Responder};
use serde::Serialize;
use tracing::error;
use utoipa::ToSchema;

use crate::{
    modules::portfolio::application::ports::incoming::use_cases::IncrementProjectViewsError,
    shared::api::ApiResponse, AppState,
};

#[derive(Debug, Serialize, ToSchema)]
pub struct ProjectViewsPayload {
    pub views: i64,
}

#[utoipa::path(
    post,
    path = "/api/project/{project_id}/views/",
    tag = "Portfolio",
    params(("project_id" = i64, Path, description = "Project id")),
    responses(
        (status = 200, description = "Counter after the increment", body = ProjectViewsPayload),
        (status = 404, description = "No active project with that id"),
        (status = 500, description = "Storage unavailable")
    )
)]
#[post("/api/project/{project_id}/views/")]
pub async fn increment_project_views_handler(
    path: web::Path<i64>,
    data: web::Data<AppState>,
) -> impl Responder {
    let project_id = path.into_inner();

    match data.portfolio.increment_views.execute(project_id).await {
        Ok(views) => ApiResponse::success(ProjectViewsPayload { views }),

        Err(IncrementProjectViewsError::NotFound) => {
            ApiResponse::not_found("PROJECT_NOT_FOUND", "Project not found")
        }

        Err(IncrementProjectViewsError::StorageUnavailable(msg)) => {
            error!("Failed to increment views of project {}: {}", project_id, msg);
            ApiResponse::internal_error("Failed to record the view")
        }
    }
}
