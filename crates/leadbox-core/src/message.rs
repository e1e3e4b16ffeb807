//! Contact-message domain model.

use chrono::{DateTime, Utc};
use leadbox_firebase::MessageDocument;

/// Unique identifier for a message (opaque store document id).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MessageId(pub String);

impl std::fmt::Display for MessageId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for MessageId {
    fn from(id: &str) -> Self {
        Self(id.to_owned())
    }
}

/// One inbound contact-form submission.
///
/// All fields except `read` are immutable after creation; there is no
/// edit path. `read` only ever moves forward (unread to read).
#[derive(Debug, Clone, PartialEq)]
pub struct ContactMessage {
    /// Store-assigned identifier.
    pub id: MessageId,
    /// Submitter name.
    pub name: String,
    /// Submitter phone number.
    pub phone: String,
    /// Submitter email address.
    pub email: String,
    /// Service the inquiry is about.
    pub service: String,
    /// Free-text message body.
    pub body: String,
    /// Submission instant; drives newest-first ordering.
    pub timestamp: DateTime<Utc>,
    /// Whether an operator has opened the message.
    pub read: bool,
}

impl From<MessageDocument> for ContactMessage {
    fn from(doc: MessageDocument) -> Self {
        Self {
            id: MessageId(doc.id),
            name: doc.name,
            phone: doc.phone,
            email: doc.email,
            service: doc.service,
            body: doc.body,
            timestamp: doc.timestamp,
            read: doc.read,
        }
    }
}
