use async_trait::async_trait;

use crate::modules::contact::application::domain::entities::{
    ContactMessage, ContactValidationError,
};

/// Raw visitor input, before trimming and validation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SubmitContactMessageError {
    #[error(transparent)]
    Invalid(#[from] ContactValidationError),

    #[error("Storage unavailable: {0}")]
    StorageUnavailable(String),
}

#[async_trait]
pub trait SubmitContactMessageUseCase: Send + Sync {
    async fn execute(
        &self,
        submission: ContactSubmission,
    ) -> Result<ContactMessage, SubmitContactMessageError>;
}
