use async_trait::async_trait;

use crate::modules::contact::application::domain::entities::{
    ContactMessage, ContactMessageFilter,
};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ListContactMessagesError {
    #[error("Storage unavailable: {0}")]
    StorageUnavailable(String),
}

#[async_trait]
pub trait ListContactMessagesUseCase: Send + Sync {
    async fn execute(
        &self,
        filter: ContactMessageFilter,
    ) -> Result<Vec<ContactMessage>, ListContactMessagesError>;
}
