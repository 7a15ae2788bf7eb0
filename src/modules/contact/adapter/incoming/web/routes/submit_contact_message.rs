use actix_web::{web, Resource, Responder};
use serde::{Deserialize, Serialize};
use tracing::error;
use utoipa::ToSchema;

use crate::{
    modules::contact::application::ports::incoming::use_cases::{
        ContactSubmission, SubmitContactMessageError,
    },
    shared::{api::ApiResponse, locale::Locale},
    AppState,
};

/// Visitor payload. Keys other than these four, such as `lu` or `repondu`,
/// are ignored.
#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(default)]
pub struct ContactRequest {
    pub nom: String,
    pub email: String,
    pub sujet: String,
    pub message: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ContactConfirmation {
    pub message: &'static str,
}

fn confirmation(locale: Locale) -> &'static str {
    match locale {
        Locale::Fr => "Message envoyé avec succès!",
        Locale::En => "Message sent successfully!",
    }
}

/// `POST /api/contact/`; any other method on this path gets a 405 envelope.
pub fn contact_resource() -> Resource {
    web::resource("/api/contact/")
        .route(web::post().to(submit_contact_message_handler))
        .default_service(web::to(|| async { ApiResponse::method_not_allowed() }))
}

#[utoipa::path(
    post,
    path = "/api/contact/",
    tag = "Contact",
    request_body = ContactRequest,
    responses(
        (status = 200, description = "Message stored", body = ContactConfirmation),
        (status = 400, description = "Malformed body or invalid field"),
        (status = 405, description = "Only POST is accepted"),
        (status = 500, description = "Storage unavailable")
    )
)]
pub async fn submit_contact_message_handler(
    body: web::Json<ContactRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let ContactRequest {
        nom,
        email,
        sujet,
        message,
    } = body.into_inner();

    let submission = ContactSubmission {
        name: nom,
        email,
        subject: sujet,
        message,
    };

    match data.contact.submit.execute(submission).await {
        Ok(_) => ApiResponse::success(ContactConfirmation {
            message: confirmation(data.locale),
        }),

        Err(SubmitContactMessageError::Invalid(e)) => {
            ApiResponse::bad_request("VALIDATION_ERROR", &e.to_string())
        }

        Err(SubmitContactMessageError::StorageUnavailable(msg)) => {
            error!("Failed to store contact message: {}", msg);
            ApiResponse::internal_error("Failed to send the message")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use serde_json::{json, Value};

    use crate::modules::contact::application::domain::entities::{
        ContactField, ContactValidationError,
    };
    use crate::shared::api::custom_json_config;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::stubs::StubSubmitContactMessageUseCase;

    #[actix_web::test]
    async fn test_submit_contact_success() {
        let stub = StubSubmitContactMessageUseCase::success();
        let app_state = TestAppStateBuilder::default()
            .with_submit_contact(stub.clone())
            .build();

        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .app_data(custom_json_config())
                .service(contact_resource()),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/contact/")
            .set_json(json!({
                "nom": "A",
                "email": "a@b.com",
                "sujet": "Hi",
                "message": "Hello there",
                "lu": true,
                "repondu": true
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(
            body,
            json!({ "success": true, "message": "Message envoyé avec succès!" })
        );

        let received = stub.received();
        assert_eq!(received.len(), 1);
        assert_eq!(received[0].name, "A");
        assert_eq!(received[0].subject, "Hi");
    }

    #[actix_web::test]
    async fn test_confirmation_follows_locale() {
        let app_state = TestAppStateBuilder::default()
            .with_submit_contact(StubSubmitContactMessageUseCase::success())
            .with_locale(Locale::En)
            .build();

        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .app_data(custom_json_config())
                .service(contact_resource()),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/contact/")
            .set_json(json!({
                "nom": "A",
                "email": "a@b.com",
                "sujet": "Hi",
                "message": "Hello there"
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["message"], "Message sent successfully!");
    }

    #[actix_web::test]
    async fn test_submit_contact_validation_error() {
        let app_state = TestAppStateBuilder::default()
            .with_submit_contact(StubSubmitContactMessageUseCase::error(
                SubmitContactMessageError::Invalid(ContactValidationError::Required(
                    ContactField::Name,
                )),
            ))
            .build();

        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .app_data(custom_json_config())
                .service(contact_resource()),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/contact/")
            .set_json(json!({ "email": "a@b.com" }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["success"], false);
        assert_eq!(body["code"], "VALIDATION_ERROR");
        assert_eq!(body["error"], "Field 'nom' is required");
    }

    #[actix_web::test]
    async fn test_submit_contact_malformed_json() {
        let stub = StubSubmitContactMessageUseCase::success();
        let app = test::init_service(
            App::new()
                .app_data(
                    TestAppStateBuilder::default()
                        .with_submit_contact(stub.clone())
                        .build(),
                )
                .app_data(custom_json_config())
                .service(contact_resource()),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/contact/")
            .insert_header(("Content-Type", "application/json"))
            .set_payload("{\"nom\": ")
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        assert!(stub.received().is_empty());
    }

    #[actix_web::test]
    async fn test_get_is_method_not_allowed() {
        let stub = StubSubmitContactMessageUseCase::success();
        let app = test::init_service(
            App::new()
                .app_data(
                    TestAppStateBuilder::default()
                        .with_submit_contact(stub.clone())
                        .build(),
                )
                .service(contact_resource()),
        )
        .await;

        let req = test::TestRequest::get().uri("/api/contact/").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::METHOD_NOT_ALLOWED);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["success"], false);
        assert_eq!(body["code"], "METHOD_NOT_ALLOWED");
        assert!(stub.received().is_empty());
    }

    #[actix_web::test]
    async fn test_submit_contact_storage_failure() {
        let app_state = TestAppStateBuilder::default()
            .with_submit_contact(StubSubmitContactMessageUseCase::error(
                SubmitContactMessageError::StorageUnavailable("db down".to_string()),
            ))
            .build();

        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .app_data(custom_json_config())
                .service(contact_resource()),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/contact/")
            .set_json(json!({
                "nom": "A",
                "email": "a@b.com",
                "sujet": "Hi",
                "message": "Hello there"
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
