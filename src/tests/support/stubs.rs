use std::sync::{Arc, Mutex};

use actix_web::web;
use async_trait::async_trait;

use crate::modules::admin::application::domain::entities::{AdminIdentity, DashboardStats};
use crate::modules::admin::application::ports::incoming::use_cases::{
    GetDashboardStatsError, GetDashboardStatsUseCase,
};
use crate::modules::admin::application::ports::outgoing::{AdminTokenError, AdminTokenVerifier};
use crate::modules::contact::application::domain::entities::{
    ContactBulkAction, ContactMessage, ContactMessageFilter,
};
use crate::modules::contact::application::ports::incoming::use_cases::{
    BulkUpdateContactMessagesError, BulkUpdateContactMessagesUseCase, ContactSubmission,
    ListContactMessagesError, ListContactMessagesUseCase, SubmitContactMessageError,
    SubmitContactMessageUseCase,
};
use crate::modules::portfolio::application::domain::entities::PortfolioSnapshot;
use crate::modules::portfolio::application::ports::incoming::use_cases::{
    BulkUpdateProjectsError, BulkUpdateProjectsUseCase, GetSnapshotError, GetSnapshotUseCase,
    IncrementProjectViewsError, IncrementProjectViewsUseCase,
};
use crate::modules::portfolio::application::ports::outgoing::ProjectBulkAction;

// ============================================================================
// Portfolio
// ============================================================================

#[derive(Clone)]
pub struct StubGetSnapshotUseCase {
    result: Result<PortfolioSnapshot, GetSnapshotError>,
}

impl StubGetSnapshotUseCase {
    pub fn success(snapshot: PortfolioSnapshot) -> Self {
        Self {
            result: Ok(snapshot),
        }
    }

    pub fn error(err: GetSnapshotError) -> Self {
        Self { result: Err(err) }
    }
}

impl Default for StubGetSnapshotUseCase {
    fn default() -> Self {
        Self::success(PortfolioSnapshot::default())
    }
}

#[async_trait]
impl GetSnapshotUseCase for StubGetSnapshotUseCase {
    async fn execute(&self) -> Result<PortfolioSnapshot, GetSnapshotError> {
        self.result.clone()
    }
}

#[derive(Clone)]
pub struct StubIncrementProjectViewsUseCase {
    result: Result<i64, IncrementProjectViewsError>,
}

impl StubIncrementProjectViewsUseCase {
    pub fn success(views: i64) -> Self {
        Self { result: Ok(views) }
    }

    pub fn error(err: IncrementProjectViewsError) -> Self {
        Self { result: Err(err) }
    }
}

#[async_trait]
impl IncrementProjectViewsUseCase for StubIncrementProjectViewsUseCase {
    async fn execute(&self, _project_id: i64) -> Result<i64, IncrementProjectViewsError> {
        self.result.clone()
    }
}

#[derive(Clone)]
pub struct StubBulkUpdateProjectsUseCase {
    result: Result<u64, BulkUpdateProjectsError>,
}

impl StubBulkUpdateProjectsUseCase {
    pub fn success(updated: u64) -> Self {
        Self {
            result: Ok(updated),
        }
    }

    pub fn error(err: BulkUpdateProjectsError) -> Self {
        Self { result: Err(err) }
    }
}

#[async_trait]
impl BulkUpdateProjectsUseCase for StubBulkUpdateProjectsUseCase {
    async fn execute(
        &self,
        _project_ids: Vec<i64>,
        _action: ProjectBulkAction,
    ) -> Result<u64, BulkUpdateProjectsError> {
        self.result.clone()
    }
}

// ============================================================================
// Contact
// ============================================================================

/// Records every submission it receives; clones share the record.
#[derive(Clone)]
pub struct StubSubmitContactMessageUseCase {
    result: Result<(), SubmitContactMessageError>,
    received: Arc<Mutex<Vec<ContactSubmission>>>,
}

impl StubSubmitContactMessageUseCase {
    pub fn success() -> Self {
        Self {
            result: Ok(()),
            received: Arc::default(),
        }
    }

    pub fn error(err: SubmitContactMessageError) -> Self {
        Self {
            result: Err(err),
            received: Arc::default(),
        }
    }

    pub fn received(&self) -> Vec<ContactSubmission> {
        self.received.lock().unwrap().clone()
    }
}

#[async_trait]
impl SubmitContactMessageUseCase for StubSubmitContactMessageUseCase {
    async fn execute(
        &self,
        submission: ContactSubmission,
    ) -> Result<ContactMessage, SubmitContactMessageError> {
        self.received.lock().unwrap().push(submission.clone());
        self.result.clone()?;

        Ok(ContactMessage {
            id: 1,
            name: submission.name,
            email: submission.email,
            subject: submission.subject,
            message: submission.message,
            sent_at: chrono::Utc::now(),
            read: false,
            replied: false,
        })
    }
}

#[derive(Clone)]
pub struct StubListContactMessagesUseCase {
    result: Result<Vec<ContactMessage>, ListContactMessagesError>,
    last_filter: Arc<Mutex<Option<ContactMessageFilter>>>,
}

impl StubListContactMessagesUseCase {
    pub fn success(messages: Vec<ContactMessage>) -> Self {
        Self {
            result: Ok(messages),
            last_filter: Arc::default(),
        }
    }

    pub fn error(err: ListContactMessagesError) -> Self {
        Self {
            result: Err(err),
            last_filter: Arc::default(),
        }
    }

    pub fn last_filter(&self) -> Option<ContactMessageFilter> {
        *self.last_filter.lock().unwrap()
    }
}

#[async_trait]
impl ListContactMessagesUseCase for StubListContactMessagesUseCase {
    async fn execute(
        &self,
        filter: ContactMessageFilter,
    ) -> Result<Vec<ContactMessage>, ListContactMessagesError> {
        *self.last_filter.lock().unwrap() = Some(filter);
        self.result.clone()
    }
}

#[derive(Clone)]
pub struct StubBulkUpdateContactMessagesUseCase {
    result: Result<u64, BulkUpdateContactMessagesError>,
}

impl StubBulkUpdateContactMessagesUseCase {
    pub fn success(updated: u64) -> Self {
        Self {
            result: Ok(updated),
        }
    }

    pub fn error(err: BulkUpdateContactMessagesError) -> Self {
        Self { result: Err(err) }
    }
}

#[async_trait]
impl BulkUpdateContactMessagesUseCase for StubBulkUpdateContactMessagesUseCase {
    async fn execute(
        &self,
        _message_ids: Vec<i64>,
        _action: ContactBulkAction,
    ) -> Result<u64, BulkUpdateContactMessagesError> {
        self.result.clone()
    }
}

// ============================================================================
// Admin
// ============================================================================

#[derive(Clone)]
pub struct StubGetDashboardStatsUseCase {
    result: Result<DashboardStats, GetDashboardStatsError>,
}

impl StubGetDashboardStatsUseCase {
    pub fn success(stats: DashboardStats) -> Self {
        Self { result: Ok(stats) }
    }

    pub fn error(err: GetDashboardStatsError) -> Self {
        Self { result: Err(err) }
    }
}

#[async_trait]
impl GetDashboardStatsUseCase for StubGetDashboardStatsUseCase {
    async fn execute(&self) -> Result<DashboardStats, GetDashboardStatsError> {
        self.result.clone()
    }
}

/// Accepts exactly one token, as subject "owner".
pub struct StubAdminTokenVerifier {
    accepted: Option<String>,
}

impl StubAdminTokenVerifier {
    pub fn accepting(token: &str) -> Self {
        Self {
            accepted: Some(token.to_string()),
        }
    }

    /// Every token is well formed but lacks the admin role.
    pub fn non_admin() -> Self {
        Self { accepted: None }
    }
}

impl AdminTokenVerifier for StubAdminTokenVerifier {
    fn verify(&self, token: &str) -> Result<AdminIdentity, AdminTokenError> {
        match &self.accepted {
            None => Err(AdminTokenError::NotAdmin),
            Some(accepted) if accepted == token => Ok(AdminIdentity {
                subject: "owner".to_string(),
            }),
            Some(_) => Err(AdminTokenError::InvalidSignature),
        }
    }
}

pub fn admin_verifier_data(
    verifier: impl AdminTokenVerifier + 'static,
) -> web::Data<Arc<dyn AdminTokenVerifier + Send + Sync>> {
    let verifier: Arc<dyn AdminTokenVerifier + Send + Sync> = Arc::new(verifier);
    web::Data::new(verifier)
}
