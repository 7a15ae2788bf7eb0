mod api;
pub mod health;
pub mod modules;
pub mod shared;

use actix_web::{web, App, HttpServer};
use anyhow::Context;
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::openapi::ApiDoc;
use crate::modules::admin::adapter::outgoing::jwt::{AdminJwtConfig, JwtAdminTokenVerifier};
use crate::modules::admin::adapter::outgoing::StatsQueryPostgres;
use crate::modules::admin::application::admin_use_cases::AdminUseCases;
use crate::modules::admin::application::ports::outgoing::AdminTokenVerifier;
use crate::modules::admin::application::services::GetDashboardStatsService;
use crate::modules::contact::adapter::outgoing::ContactRepositoryPostgres;
use crate::modules::contact::application::contact_use_cases::ContactUseCases;
use crate::modules::contact::application::services::{
    BulkUpdateContactMessagesService, ListContactMessagesService, SubmitContactMessageService,
};
use crate::modules::portfolio::adapter::outgoing::{
    PortfolioQueryPostgres, ProjectRepositoryPostgres,
};
use crate::modules::portfolio::application::portfolio_use_cases::PortfolioUseCases;
use crate::modules::portfolio::application::services::{
    BulkUpdateProjectsService, GetSnapshotService, IncrementProjectViewsService,
};
use crate::shared::api::custom_json_config;
use crate::shared::config::{AdminSiteConfig, AppConfig};
use crate::shared::locale::Locale;
use crate::shared::media::MediaUrlResolver;

#[cfg(test)]
mod tests;

#[derive(Clone)]
pub struct AppState {
    pub portfolio: PortfolioUseCases,
    pub contact: ContactUseCases,
    pub admin: AdminUseCases,
    pub media: MediaUrlResolver,
    pub locale: Locale,
    pub admin_site: AdminSiteConfig,
    pub static_dir: PathBuf,
}

#[actix_web::main]
#[cfg(not(tarpaulin_include))]
async fn start() -> anyhow::Result<()> {
    // Try .env.{environment} first, then fall back to .env
    let env = std::env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());
    let env_file = format!(".env.{}", env);
    if dotenvy::from_filename(&env_file).is_err() {
        dotenvy::dotenv().ok();
    }

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting portfolio backend ({})...", env);

    let config = AppConfig::from_env().context("invalid configuration")?;
    let admin_jwt = AdminJwtConfig::from_env().context("invalid admin token configuration")?;

    let mut opt = ConnectOptions::new(config.database_url.clone());
    opt.max_connections(config.db_max_connections)
        .min_connections(1)
        .connect_timeout(Duration::from_secs(5))
        .acquire_timeout(Duration::from_secs(5))
        .idle_timeout(Duration::from_secs(300))
        .max_lifetime(Duration::from_secs(1800))
        .sqlx_logging(false);

    let conn = Database::connect(opt)
        .await
        .context("failed to connect to database")?;

    if config.run_migrations {
        info!("Applying pending migrations");
        Migrator::up(&conn, None)
            .await
            .context("failed to apply migrations")?;
    }

    let db_arc = Arc::new(conn);

    let portfolio_query = PortfolioQueryPostgres::new(Arc::clone(&db_arc));
    let project_repo = ProjectRepositoryPostgres::new(Arc::clone(&db_arc));
    let contact_repo = ContactRepositoryPostgres::new(Arc::clone(&db_arc));
    let stats_query = StatsQueryPostgres::new(Arc::clone(&db_arc));

    let state = AppState {
        portfolio: PortfolioUseCases {
            get_snapshot: Arc::new(GetSnapshotService::new(portfolio_query)),
            increment_views: Arc::new(IncrementProjectViewsService::new(project_repo.clone())),
            bulk_update_projects: Arc::new(BulkUpdateProjectsService::new(project_repo)),
        },
        contact: ContactUseCases {
            submit: Arc::new(SubmitContactMessageService::new(contact_repo.clone())),
            list: Arc::new(ListContactMessagesService::new(contact_repo.clone())),
            bulk_update: Arc::new(BulkUpdateContactMessagesService::new(contact_repo)),
        },
        admin: AdminUseCases {
            get_stats: Arc::new(GetDashboardStatsService::new(stats_query)),
        },
        media: MediaUrlResolver::new(&config.media_url, config.public_base_url.as_deref()),
        locale: config.locale,
        admin_site: config.admin_site.clone(),
        static_dir: config.static_dir.clone(),
    };

    let admin_verifier: Option<Arc<dyn AdminTokenVerifier + Send + Sync>> = match &admin_jwt {
        Some(jwt) => Some(Arc::new(JwtAdminTokenVerifier::new(jwt))),
        None => {
            warn!("ADMIN_JWT_SECRET is not set; admin routes are disabled");
            None
        }
    };

    let server_url = config.server_url();
    info!("Server listening on: {}", server_url);

    let db_for_server = Arc::clone(&db_arc);

    HttpServer::new(move || {
        let mut app = App::new()
            .app_data(web::Data::new(state.clone()))
            .app_data(web::Data::new(Arc::clone(&db_for_server)))
            .app_data(custom_json_config())
            .configure(init_routes);

        if let Some(verifier) = &admin_verifier {
            app = app
                .app_data(web::Data::new(Arc::clone(verifier)))
                .configure(init_admin_routes);
        }

        app.service(
            SwaggerUi::new("/swagger-ui/{_:.*}").url("/api-docs/openapi.json", ApiDoc::openapi()),
        )
        .default_service(web::to(
            crate::modules::portfolio::adapter::incoming::web::routes::frontend_fallback,
        ))
    })
    .bind(&server_url)
    .with_context(|| format!("failed to bind {}", server_url))?
    .run()
    .await
    .context("server terminated with an error")
}

#[cfg(not(tarpaulin_include))]
fn init_routes(cfg: &mut web::ServiceConfig) {
    // Health
    cfg.service(crate::health::health);
    cfg.service(crate::health::readiness);
    // Portfolio
    cfg.service(crate::modules::portfolio::adapter::incoming::web::routes::get_portfolio_handler);
    cfg.service(
        crate::modules::portfolio::adapter::incoming::web::routes::increment_project_views_handler,
    );
    cfg.service(crate::modules::portfolio::adapter::incoming::web::routes::frontend_shell_handler);
    // Contact
    cfg.service(crate::modules::contact::adapter::incoming::web::routes::contact_resource());
}

#[cfg(not(tarpaulin_include))]
fn init_admin_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(crate::modules::admin::adapter::incoming::web::routes::get_dashboard_stats_handler);
    cfg.service(crate::modules::admin::adapter::incoming::web::routes::get_site_config_handler);
    cfg.service(
        crate::modules::portfolio::adapter::incoming::web::routes::bulk_update_projects_handler,
    );
    cfg.service(
        crate::modules::contact::adapter::incoming::web::routes::list_contact_messages_handler,
    );
    cfg.service(
        crate::modules::contact::adapter::incoming::web::routes::bulk_update_contact_messages_handler,
    );
}

#[cfg(not(tarpaulin_include))]
fn main() {
    if let Err(e) = start() {
        eprintln!("Error starting app: {e:#}");
    }
}
