use actix_web::{get, web, HttpRequest, Responder};
use chrono::Utc;
use tracing::error;

use crate::{
    modules::portfolio::{
        adapter::incoming::web::serializers::{PortfolioPayload, WireContext},
        application::ports::incoming::use_cases::GetSnapshotError,
    },
    shared::api::ApiResponse,
    AppState,
};

/// Scheme and host the client used to reach us.
pub(crate) fn request_base(req: &HttpRequest) -> String {
    let info = req.connection_info();
    format!("{}://{}", info.scheme(), info.host())
}

#[utoipa::path(
    get,
    path = "/api/portfolio/",
    tag = "Portfolio",
    responses(
        (status = 200, description = "Portfolio snapshot", body = PortfolioPayload),
        (status = 500, description = "Storage unavailable")
    )
)]
#[get("/api/portfolio/")]
pub async fn get_portfolio_handler(req: HttpRequest, data: web::Data<AppState>) -> impl Responder {
    match data.portfolio.get_snapshot.execute().await {
        Ok(snapshot) => {
            let base = request_base(&req);
            let ctx = WireContext {
                media: &data.media,
                request_base: &base,
                today: Utc::now().date_naive(),
                locale: data.locale,
            };
            ApiResponse::success(PortfolioPayload::project(&snapshot, &ctx))
        }
        Err(GetSnapshotError::StorageUnavailable(msg)) => {
            error!("Failed to load portfolio snapshot: {}", msg);
            ApiResponse::internal_error("Failed to load portfolio data")
        }
    }
}
