use std::sync::Arc;

use crate::modules::contact::application::ports::incoming::use_cases::{
    BulkUpdateContactMessagesUseCase, ListContactMessagesUseCase, SubmitContactMessageUseCase,
};

#[derive(Clone)]
pub struct ContactUseCases {
    pub submit: Arc<dyn SubmitContactMessageUseCase + Send + Sync>,
    pub list: Arc<dyn ListContactMessagesUseCase + Send + Sync>,
    pub bulk_update: Arc<dyn BulkUpdateContactMessagesUseCase + Send + Sync>,
}
