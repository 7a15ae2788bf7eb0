mod bulk_update_contact_messages;
mod list_contact_messages;
mod submit_contact_message;

pub use bulk_update_contact_messages::{
    BulkUpdateContactMessagesError, BulkUpdateContactMessagesUseCase,
};
pub use list_contact_messages::{ListContactMessagesError, ListContactMessagesUseCase};
pub use submit_contact_message::{
    ContactSubmission, SubmitContactMessageError, SubmitContactMessageUseCase,
};
