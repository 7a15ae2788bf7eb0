use actix_web::{post, web, Responder};
use serde::Deserialize;
use tracing::{error, info};
use utoipa::ToSchema;

use crate::{
    modules::{
        admin::adapter::incoming::web::extractors::AdminUser,
        contact::application::{
            domain::entities::ContactBulkAction,
            ports::incoming::use_cases::BulkUpdateContactMessagesError,
        },
        portfolio::adapter::incoming::web::routes::BulkUpdatedPayload,
    },
    shared::api::ApiResponse,
    AppState,
};

#[derive(Debug, Deserialize, ToSchema)]
pub struct BulkContactMessagesRequest {
    pub ids: Vec<i64>,
    pub action: ContactBulkAction,
}

#[utoipa::path(
    post,
    path = "/api/admin/contact-messages/bulk",
    tag = "Admin",
    security(("bearer_auth" = [])),
    request_body = BulkContactMessagesRequest,
    responses(
        (status = 200, description = "Number of messages changed", body = BulkUpdatedPayload),
        (status = 400, description = "Empty selection or unknown action"),
        (status = 401, description = "Missing or invalid admin token"),
        (status = 500, description = "Storage unavailable")
    )
)]
#[post("/api/admin/contact-messages/bulk")]
pub async fn bulk_update_contact_messages_handler(
    admin: AdminUser,
    body: web::Json<BulkContactMessagesRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let BulkContactMessagesRequest { ids, action } = body.into_inner();

    match data.contact.bulk_update.execute(ids, action).await {
        Ok(updated) => {
            info!("{} applied {:?} to {} message(s)", admin.subject, action, updated);
            ApiResponse::success(BulkUpdatedPayload { updated })
        }

        Err(BulkUpdateContactMessagesError::EmptySelection) => {
            ApiResponse::bad_request("EMPTY_SELECTION", "Select at least one message")
        }

        Err(BulkUpdateContactMessagesError::StorageUnavailable(msg)) => {
            error!("Bulk contact update {:?} failed: {}", action, msg);
            ApiResponse::internal_error("Failed to update messages")
        }
    }
}
