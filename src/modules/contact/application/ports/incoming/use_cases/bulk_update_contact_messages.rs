use async_trait::async_trait;

use crate::modules::contact::application::domain::entities::ContactBulkAction;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum BulkUpdateContactMessagesError {
    #[error("No message selected")]
    EmptySelection,

    #[error("Storage unavailable: {0}")]
    StorageUnavailable(String),
}

#[async_trait]
pub trait BulkUpdateContactMessagesUseCase: Send + Sync {
    async fn execute(
        &self,
        message_ids: Vec<i64>,
        action: ContactBulkAction,
    ) -> Result<u64, BulkUpdateContactMessagesError>;
}
