use actix_web::{get, http::Method, web, HttpRequest, HttpResponse};
use std::path::Path;
use tracing::warn;

use crate::{shared::api::ApiResponse, AppState};

const SHELL_FILE: &str = "index.html";

async fn serve_shell(static_dir: &Path) -> HttpResponse {
    let path = static_dir.join(SHELL_FILE);
    match tokio::fs::read(&path).await {
        Ok(bytes) => HttpResponse::Ok()
            .content_type("text/html; charset=utf-8")
            .body(bytes),
        Err(e) => {
            warn!("Front-end shell unavailable at {}: {}", path.display(), e);
            ApiResponse::not_found("SHELL_NOT_FOUND", "Front-end shell not found")
        }
    }
}

fn is_api_path(path: &str) -> bool {
    path == "/api" || path.starts_with("/api/")
}

#[get("/")]
pub async fn frontend_shell_handler(data: web::Data<AppState>) -> HttpResponse {
    serve_shell(&data.static_dir).await
}

/// Default service: client-side routes get the shell, unknown API paths and
/// non-GET requests get a 404 envelope.
pub async fn frontend_fallback(req: HttpRequest, data: web::Data<AppState>) -> HttpResponse {
    if is_api_path(req.path()) || (req.method() != Method::GET && req.method() != Method::HEAD) {
        return ApiResponse::not_found("ROUTE_NOT_FOUND", "Resource not found");
    }
    serve_shell(&data.static_dir).await
}
