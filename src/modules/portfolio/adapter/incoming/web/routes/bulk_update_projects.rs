use actix_web::{post, web, Responder};
use serde::{Deserialize, Serialize};
use tracing::{error, info};
use utoipa::ToSchema;

use crate::{
    modules::{
        admin::adapter::incoming::web::extractors::AdminUser,
        portfolio::application::ports::{
            incoming::use_cases::BulkUpdateProjectsError, outgoing::ProjectBulkAction,
        },
    },
    shared::api::ApiResponse,
    AppState,
};

#[derive(Debug, Deserialize, ToSchema)]
pub struct BulkProjectsRequest {
    pub ids: Vec<i64>,
    pub action: ProjectBulkAction,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct BulkUpdatedPayload {
    pub updated: u64,
}

#[utoipa::path(
    post,
    path = "/api/admin/projects/bulk",
    tag = "Admin",
    security(("bearer_auth" = [])),
    request_body = BulkProjectsRequest,
    responses(
        (status = 200, description = "Number of projects changed", body = BulkUpdatedPayload),
        (status = 400, description = "Empty selection or unknown action"),
        (status = 401, description = "Missing or invalid admin token"),
        (status = 500, description = "Storage unavailable")
    )
)]
#[post("/api/admin/projects/bulk")]
pub async fn bulk_update_projects_handler(
    admin: AdminUser,
    body: web::Json<BulkProjectsRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let BulkProjectsRequest { ids, action } = body.into_inner();

    match data.portfolio.bulk_update_projects.execute(ids, action).await {
        Ok(updated) => {
            info!("{} applied {:?} to {} project(s)", admin.subject, action, updated);
            ApiResponse::success(BulkUpdatedPayload { updated })
        }

        Err(BulkUpdateProjectsError::EmptySelection) => {
            ApiResponse::bad_request("EMPTY_SELECTION", "Select at least one project")
        }

        Err(BulkUpdateProjectsError::StorageUnavailable(msg)) => {
            error!("Bulk project update {:?} failed: {}", action, msg);
            ApiResponse::internal_error("Failed to update projects")
        }
    }
}
