use actix_web::{get, web, Responder};

use crate::{
    modules::admin::adapter::incoming::web::extractors::AdminUser,
    shared::{api::ApiResponse, config::AdminSiteConfig},
    AppState,
};

#[utoipa::path(
    get,
    path = "/api/admin/site",
    tag = "Admin",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Admin console branding", body = AdminSiteConfig),
        (status = 401, description = "Missing or invalid admin token")
    )
)]
#[get("/api/admin/site")]
pub async fn get_site_config_handler(
    _admin: AdminUser,
    data: web::Data<AppState>,
) -> impl Responder {
    ApiResponse::success(data.admin_site.clone())
}
