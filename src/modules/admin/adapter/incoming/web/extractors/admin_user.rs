use actix_web::{dev::Payload, web, Error as ActixError, FromRequest, HttpRequest, HttpResponse};
use std::{
    future::{ready, Ready},
    sync::Arc,
};

use crate::modules::admin::application::ports::outgoing::{AdminTokenError, AdminTokenVerifier};
use crate::shared::api::ApiResponse;

/// An administrator holding a valid bearer token.
#[derive(Debug, Clone)]
pub struct AdminUser {
    pub subject: String,
}

fn create_api_error(response: HttpResponse) -> ActixError {
    actix_web::error::InternalError::from_response("", response).into()
}

impl FromRequest for AdminUser {
    type Error = ActixError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let verifier = match req.app_data::<web::Data<Arc<dyn AdminTokenVerifier + Send + Sync>>>()
        {
            Some(verifier) => verifier,
            None => {
                tracing::error!("Admin route reached without a token verifier configured");
                return ready(Err(create_api_error(ApiResponse::internal_error(
                    "Admin authentication is not configured",
                ))));
            }
        };

        let token = match extract_token_from_header(req) {
            Some(t) => t,
            None => {
                return ready(Err(create_api_error(ApiResponse::unauthorized(
                    "MISSING_AUTH_HEADER",
                    "Missing or invalid authorization header",
                ))));
            }
        };

        match verifier.verify(&token) {
            Ok(identity) => ready(Ok(AdminUser {
                subject: identity.subject,
            })),
            Err(AdminTokenError::NotAdmin) => ready(Err(create_api_error(
                ApiResponse::unauthorized("NOT_ADMIN", "Admin access required"),
            ))),
            Err(_) => ready(Err(create_api_error(ApiResponse::unauthorized(
                "INVALID_TOKEN",
                "Invalid or expired token",
            )))),
        }
    }
}

fn extract_token_from_header(req: &HttpRequest) -> Option<String> {
    req.headers()
        .get("Authorization")?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}
