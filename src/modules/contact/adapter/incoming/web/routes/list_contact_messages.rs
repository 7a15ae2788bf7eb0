use actix_web::{get, web, Responder};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::error;
use utoipa::{IntoParams, ToSchema};

use crate::{
    modules::{
        admin::adapter::incoming::web::extractors::AdminUser,
        contact::application::{
            domain::entities::{ContactMessage, ContactMessageFilter},
            ports::incoming::use_cases::ListContactMessagesError,
        },
    },
    shared::api::ApiResponse,
    AppState,
};

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ContactMessagesQuery {
    /// Only read (`true`) or unread (`false`) messages.
    pub lu: Option<bool>,
    /// Only replied (`true`) or unreplied (`false`) messages.
    pub repondu: Option<bool>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ContactMessagePayload {
    pub id: i64,
    pub nom: String,
    pub email: String,
    pub sujet: String,
    pub message: String,
    pub envoye_le: DateTime<Utc>,
    pub lu: bool,
    pub repondu: bool,
}

impl From<ContactMessage> for ContactMessagePayload {
    fn from(m: ContactMessage) -> Self {
        Self {
            id: m.id,
            nom: m.name,
            email: m.email,
            sujet: m.subject,
            message: m.message,
            envoye_le: m.sent_at,
            lu: m.read,
            repondu: m.replied,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ContactMessagesPayload {
    pub messages: Vec<ContactMessagePayload>,
}

#[utoipa::path(
    get,
    path = "/api/admin/contact-messages",
    tag = "Admin",
    security(("bearer_auth" = [])),
    params(ContactMessagesQuery),
    responses(
        (status = 200, description = "Messages, newest first", body = ContactMessagesPayload),
        (status = 401, description = "Missing or invalid admin token"),
        (status = 500, description = "Storage unavailable")
    )
)]
#[get("/api/admin/contact-messages")]
pub async fn list_contact_messages_handler(
    _admin: AdminUser,
    query: web::Query<ContactMessagesQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    let filter = ContactMessageFilter {
        read: query.lu,
        replied: query.repondu,
    };

    match data.contact.list.execute(filter).await {
        Ok(messages) => ApiResponse::success(ContactMessagesPayload {
            messages: messages.into_iter().map(ContactMessagePayload::from).collect(),
        }),

        Err(ListContactMessagesError::StorageUnavailable(msg)) => {
            error!("Failed to list contact messages: {}", msg);
            ApiResponse::internal_error("Failed to load contact messages")
        }
    }
}
