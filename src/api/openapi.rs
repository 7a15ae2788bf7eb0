use crate::api::schemas::ErrorResponse;
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::OpenApi;

use crate::modules::admin::adapter::incoming::web::routes::DashboardStatsPayload;
use crate::modules::contact::adapter::incoming::web::routes::{
    BulkContactMessagesRequest, ContactConfirmation, ContactMessagePayload,
    ContactMessagesPayload, ContactRequest,
};
use crate::modules::contact::application::domain::entities::ContactBulkAction;
use crate::modules::portfolio::adapter::incoming::web::routes::{
    BulkProjectsRequest, BulkUpdatedPayload, ProjectViewsPayload,
};
use crate::modules::portfolio::adapter::incoming::web::serializers::{
    ExperiencePayload, PortfolioPayload, ProfilePayload, ProjectPayload, SkillBadge,
    SkillPayload, SkillSummary,
};
use crate::modules::portfolio::application::ports::outgoing::ProjectBulkAction;
use crate::shared::config::AdminSiteConfig;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Portfolio API",
        version = "1.0.0",
        description = "Public portfolio snapshot, contact form and owner administration"
    ),
    paths(
        // Portfolio
        crate::modules::portfolio::adapter::incoming::web::routes::get_portfolio_handler,
        crate::modules::portfolio::adapter::incoming::web::routes::increment_project_views_handler,

        // Contact
        crate::modules::contact::adapter::incoming::web::routes::submit_contact_message_handler,

        // Admin
        crate::modules::admin::adapter::incoming::web::routes::get_dashboard_stats_handler,
        crate::modules::admin::adapter::incoming::web::routes::get_site_config_handler,
        crate::modules::portfolio::adapter::incoming::web::routes::bulk_update_projects_handler,
        crate::modules::contact::adapter::incoming::web::routes::list_contact_messages_handler,
        crate::modules::contact::adapter::incoming::web::routes::bulk_update_contact_messages_handler,
    ),
    components(
        schemas(
            ErrorResponse,

            // Portfolio
            PortfolioPayload,
            ProfilePayload,
            SkillPayload,
            SkillSummary,
            SkillBadge,
            ProjectPayload,
            ExperiencePayload,
            ProjectViewsPayload,

            // Contact
            ContactRequest,
            ContactConfirmation,

            // Admin
            DashboardStatsPayload,
            AdminSiteConfig,
            BulkProjectsRequest,
            ProjectBulkAction,
            BulkContactMessagesRequest,
            ContactBulkAction,
            BulkUpdatedPayload,
            ContactMessagePayload,
            ContactMessagesPayload
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Portfolio", description = "Public portfolio content"),
        (name = "Contact", description = "Visitor contact form"),
        (name = "Admin", description = "Owner-only statistics and bulk actions"),
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .description(Some("Admin token issued by the identity provider"))
                        .build(),
                ),
            )
        }
    }
}
