use std::path::PathBuf;
use std::sync::Arc;

use actix_web::web;

use crate::modules::admin::application::admin_use_cases::AdminUseCases;
use crate::modules::admin::application::domain::entities::DashboardStats;
use crate::modules::admin::application::ports::incoming::use_cases::GetDashboardStatsUseCase;
use crate::modules::contact::application::contact_use_cases::ContactUseCases;
use crate::modules::contact::application::ports::incoming::use_cases::{
    BulkUpdateContactMessagesUseCase, ListContactMessagesUseCase, SubmitContactMessageUseCase,
};
use crate::modules::portfolio::application::portfolio_use_cases::PortfolioUseCases;
use crate::modules::portfolio::application::ports::incoming::use_cases::{
    BulkUpdateProjectsUseCase, GetSnapshotUseCase, IncrementProjectViewsUseCase,
};
use crate::shared::config::AdminSiteConfig;
use crate::shared::locale::Locale;
use crate::shared::media::MediaUrlResolver;
use crate::tests::support::stubs::*;
use crate::AppState;

pub struct TestAppStateBuilder {
    portfolio: PortfolioUseCases,
    contact: ContactUseCases,
    admin: AdminUseCases,
    media: MediaUrlResolver,
    locale: Locale,
    admin_site: AdminSiteConfig,
    static_dir: PathBuf,
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        Self {
            portfolio: PortfolioUseCases {
                get_snapshot: Arc::new(StubGetSnapshotUseCase::default()),
                increment_views: Arc::new(StubIncrementProjectViewsUseCase::success(1)),
                bulk_update_projects: Arc::new(StubBulkUpdateProjectsUseCase::success(0)),
            },
            contact: ContactUseCases {
                submit: Arc::new(StubSubmitContactMessageUseCase::success()),
                list: Arc::new(StubListContactMessagesUseCase::success(vec![])),
                bulk_update: Arc::new(StubBulkUpdateContactMessagesUseCase::success(0)),
            },
            admin: AdminUseCases {
                get_stats: Arc::new(StubGetDashboardStatsUseCase::success(
                    DashboardStats::default(),
                )),
            },
            media: MediaUrlResolver::default(),
            locale: Locale::Fr,
            admin_site: AdminSiteConfig::default(),
            static_dir: PathBuf::from("static"),
        }
    }
}

impl TestAppStateBuilder {
    pub fn with_get_snapshot(mut self, uc: impl GetSnapshotUseCase + 'static) -> Self {
        self.portfolio.get_snapshot = Arc::new(uc);
        self
    }

    pub fn with_increment_views(mut self, uc: impl IncrementProjectViewsUseCase + 'static) -> Self {
        self.portfolio.increment_views = Arc::new(uc);
        self
    }

    pub fn with_bulk_update_projects(
        mut self,
        uc: impl BulkUpdateProjectsUseCase + 'static,
    ) -> Self {
        self.portfolio.bulk_update_projects = Arc::new(uc);
        self
    }

    pub fn with_submit_contact(mut self, uc: impl SubmitContactMessageUseCase + 'static) -> Self {
        self.contact.submit = Arc::new(uc);
        self
    }

    pub fn with_list_contact(mut self, uc: impl ListContactMessagesUseCase + 'static) -> Self {
        self.contact.list = Arc::new(uc);
        self
    }

    pub fn with_bulk_update_contact(
        mut self,
        uc: impl BulkUpdateContactMessagesUseCase + 'static,
    ) -> Self {
        self.contact.bulk_update = Arc::new(uc);
        self
    }

    pub fn with_get_dashboard_stats(
        mut self,
        uc: impl GetDashboardStatsUseCase + 'static,
    ) -> Self {
        self.admin.get_stats = Arc::new(uc);
        self
    }

    pub fn with_media(mut self, media: MediaUrlResolver) -> Self {
        self.media = media;
        self
    }

    pub fn with_locale(mut self, locale: Locale) -> Self {
        self.locale = locale;
        self
    }

    pub fn with_admin_site(mut self, admin_site: AdminSiteConfig) -> Self {
        self.admin_site = admin_site;
        self
    }

    pub fn with_static_dir(mut self, static_dir: PathBuf) -> Self {
        self.static_dir = static_dir;
        self
    }

    pub fn build(self) -> web::Data<AppState> {
        web::Data::new(AppState {
            portfolio: self.portfolio,
            contact: self.contact,
            admin: self.admin,
            media: self.media,
            locale: self.locale,
            admin_site: self.admin_site,
            static_dir: self.static_dir,
        })
    }
}
