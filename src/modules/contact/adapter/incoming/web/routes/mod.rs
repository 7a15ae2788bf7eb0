mod bulk_update_contact_messages;
mod list_contact_messages;
mod submit_contact_message;

pub use bulk_update_contact_messages::*;
pub use list_contact_messages::*;
pub use submit_contact_message::*;
