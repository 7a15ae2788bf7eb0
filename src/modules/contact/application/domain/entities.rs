use chrono::{DateTime, Utc};
use email_address::EmailAddress;
use serde::Deserialize;
use std::fmt;
use utoipa::ToSchema;

const NAME_MAX: usize = 100;
const EMAIL_MAX: usize = 254;
const SUBJECT_MAX: usize = 200;
const MESSAGE_MIN: usize = 10;

/// A stored message. Only the read/replied flags change after creation.
#[derive(Debug, Clone, PartialEq)]
pub struct ContactMessage {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    pub sent_at: DateTime<Utc>,
    pub read: bool,
    pub replied: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactField {
    Name,
    Email,
    Subject,
    Message,
}

impl fmt::Display for ContactField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // wire names
        let key = match self {
            ContactField::Name => "nom",
            ContactField::Email => "email",
            ContactField::Subject => "sujet",
            ContactField::Message => "message",
        };
        f.write_str(key)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ContactValidationError {
    #[error("Field '{0}' is required")]
    Required(ContactField),

    #[error("Field '{field}' must be at most {max} characters")]
    TooLong { field: ContactField, max: usize },

    #[error("Invalid email address")]
    InvalidEmail,

    #[error("Message must be at least {min} characters")]
    MessageTooShort { min: usize },
}

/// A message that passed validation and can be stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewContactMessage {
    name: String,
    email: String,
    subject: String,
    message: String,
}

impl NewContactMessage {
    /// Trims every field, then checks presence, lengths and the email syntax.
    pub fn parse(
        name: &str,
        email: &str,
        subject: &str,
        message: &str,
    ) -> Result<Self, ContactValidationError> {
        let name = bounded(ContactField::Name, name, NAME_MAX)?;
        let email = bounded(ContactField::Email, email, EMAIL_MAX)?;
        let subject = bounded(ContactField::Subject, subject, SUBJECT_MAX)?;
        let message = required(ContactField::Message, message)?;

        if !EmailAddress::is_valid(&email) {
            return Err(ContactValidationError::InvalidEmail);
        }
        if message.chars().count() < MESSAGE_MIN {
            return Err(ContactValidationError::MessageTooShort { min: MESSAGE_MIN });
        }

        Ok(Self {
            name,
            email,
            subject,
            message,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn subject(&self) -> &str {
        &self.subject
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

fn required(field: ContactField, raw: &str) -> Result<String, ContactValidationError> {
    let value = raw.trim();
    if value.is_empty() {
        return Err(ContactValidationError::Required(field));
    }
    Ok(value.to_string())
}

fn bounded(field: ContactField, raw: &str, max: usize) -> Result<String, ContactValidationError> {
    let value = required(field, raw)?;
    if value.chars().count() > max {
        return Err(ContactValidationError::TooLong { field, max });
    }
    Ok(value)
}

/// Flag changes an administrator can apply to several messages at once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum ContactBulkAction {
    MarkRead,
    MarkUnread,
    /// Also marks the message as read.
    MarkReplied,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ContactMessageFilter {
    pub read: Option<bool>,
    pub replied: Option<bool>,
}
