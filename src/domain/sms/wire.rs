//! Wire types for SMS payloads (REST).

use super::SmsStatus;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Raw sent-message record from the REST API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SmsResponse {
    pub id: String,
    pub content: String,
    pub recipient_number: String,
    pub status: SmsStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message_id: Option<String>,
    pub sender_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recipient_id: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Send request body.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SmsSend {
    pub recipient_number: String,
    pub message: String,
    /// Set when the recipient was picked from the address book.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recipient_id: Option<String>,
}

impl SmsSend {
    pub fn new(recipient_number: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            recipient_number: recipient_number.into(),
            message: message.into(),
            recipient_id: None,
        }
    }

    pub fn with_recipient_id(mut self, id: impl Into<String>) -> Self {
        self.recipient_id = Some(id.into());
        self
    }
}
