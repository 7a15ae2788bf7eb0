mod bulk_update_contact_messages_service;
mod list_contact_messages_service;
mod submit_contact_message_service;

pub use bulk_update_contact_messages_service::BulkUpdateContactMessagesService;
pub use list_contact_messages_service::ListContactMessagesService;
pub use submit_contact_message_service::SubmitContactMessageService;
