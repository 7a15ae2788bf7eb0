use async_trait::async_trait;

use crate::modules::contact::application::domain::entities::{
    ContactMessage, ContactMessageFilter,
};
use crate::modules::contact::application::ports::incoming::use_cases::{
    ListContactMessagesError, ListContactMessagesUseCase,
};
use crate::modules::contact::application::ports::outgoing::{
    ContactRepository, ContactRepositoryError,
};

pub struct ListContactMessagesService<R>
where
    R: ContactRepository,
{
    repo: R,
}

impl<R> ListContactMessagesService<R>
where
    R: ContactRepository,
{
    pub fn new(repo: R) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl<R> ListContactMessagesUseCase for ListContactMessagesService<R>
where
    R: ContactRepository + Send + Sync,
{
    async fn execute(
        &self,
        filter: ContactMessageFilter,
    ) -> Result<Vec<ContactMessage>, ListContactMessagesError> {
        self.repo
            .list(filter)
            .await
            .map_err(|ContactRepositoryError::DatabaseError(msg)| {
                ListContactMessagesError::StorageUnavailable(msg)
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::modules::contact::application::services::test_support::MockContactRepositoryMock;

    #[tokio::test]
    async fn filter_is_passed_through() {
        let mut repo = MockContactRepositoryMock::new();
        repo.expect_list()
            .withf(|f| f.read == Some(false) && f.replied.is_none())
            .times(1)
            .returning(|_| Ok(vec![]));

        let service = ListContactMessagesService::new(repo);
        let messages = service
            .execute(ContactMessageFilter {
                read: Some(false),
                replied: None,
            })
            .await
            .unwrap();

        assert!(messages.is_empty());
    }

    #[tokio::test]
    async fn database_error_is_storage_unavailable() {
        let mut repo = MockContactRepositoryMock::new();
        repo.expect_list()
            .returning(|_| Err(ContactRepositoryError::DatabaseError("timeout".to_string())));

        let service = ListContactMessagesService::new(repo);

        assert_eq!(
            service.execute(ContactMessageFilter::default()).await,
            Err(ListContactMessagesError::StorageUnavailable("timeout".to_string()))
        );
    }
}
