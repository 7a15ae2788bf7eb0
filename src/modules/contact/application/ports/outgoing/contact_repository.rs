use async_trait::async_trait;

use crate::modules::contact::application::domain::entities::{
    ContactBulkAction, ContactMessage, ContactMessageFilter, NewContactMessage,
};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ContactRepositoryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait ContactRepository: Send + Sync {
    /// Stores the message unread and unreplied, stamped with the current time.
    async fn create(
        &self,
        message: &NewContactMessage,
    ) -> Result<ContactMessage, ContactRepositoryError>;

    /// Newest first.
    async fn list(
        &self,
        filter: ContactMessageFilter,
    ) -> Result<Vec<ContactMessage>, ContactRepositoryError>;

    async fn apply_bulk_action(
        &self,
        message_ids: &[i64],
        action: ContactBulkAction,
    ) -> Result<u64, ContactRepositoryError>;
}
