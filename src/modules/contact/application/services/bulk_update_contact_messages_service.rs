use async_trait::async_trait;

use crate::modules::contact::application::domain::entities::ContactBulkAction;
use crate::modules::contact::application::ports::incoming::use_cases::{
    BulkUpdateContactMessagesError, BulkUpdateContactMessagesUseCase,
};
use crate::modules::contact::application::ports::outgoing::{
    ContactRepository, ContactRepositoryError,
};

pub struct BulkUpdateContactMessagesService<R>
where
    R: ContactRepository,
{
    repo: R,
}

impl<R> BulkUpdateContactMessagesService<R>
where
    R: ContactRepository,
{
    pub fn new(repo: R) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl<R> BulkUpdateContactMessagesUseCase for BulkUpdateContactMessagesService<R>
where
    R: ContactRepository + Send + Sync,
{
    async fn execute(
        &self,
        mut message_ids: Vec<i64>,
        action: ContactBulkAction,
    ) -> Result<u64, BulkUpdateContactMessagesError> {
        message_ids.sort_unstable();
        message_ids.dedup();
        if message_ids.is_empty() {
            return Err(BulkUpdateContactMessagesError::EmptySelection);
        }

        self.repo
            .apply_bulk_action(&message_ids, action)
            .await
            .map_err(|ContactRepositoryError::DatabaseError(msg)| {
                BulkUpdateContactMessagesError::StorageUnavailable(msg)
            })
    }
}
