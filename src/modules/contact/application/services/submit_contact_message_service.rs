use async_trait::async_trait;
use tracing::info;

use crate::modules::contact::application::domain::entities::{ContactMessage, NewContactMessage};
use crate::modules::contact::application::ports::incoming::use_cases::{
    ContactSubmission, SubmitContactMessageError, SubmitContactMessageUseCase,
};
use crate::modules::contact::application::ports::outgoing::{
    ContactRepository, ContactRepositoryError,
};

pub struct SubmitContactMessageService<R>
where
    R: ContactRepository,
{
    repo: R,
}

impl<R> SubmitContactMessageService<R>
where
    R: ContactRepository,
{
    pub fn new(repo: R) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl<R> SubmitContactMessageUseCase for SubmitContactMessageService<R>
where
    R: ContactRepository + Send + Sync,
{
    async fn execute(
        &self,
        submission: ContactSubmission,
    ) -> Result<ContactMessage, SubmitContactMessageError> {
        let message = NewContactMessage::parse(
            &submission.name,
            &submission.email,
            &submission.subject,
            &submission.message,
        )?;

        let stored = self
            .repo
            .create(&message)
            .await
            .map_err(|ContactRepositoryError::DatabaseError(msg)| {
                SubmitContactMessageError::StorageUnavailable(msg)
            })?;

        info!("Contact message {} received", stored.id);
        Ok(stored)
    }
}
