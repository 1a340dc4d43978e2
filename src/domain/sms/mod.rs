//! SMS domain — send requests, delivery records, history state.

#[cfg(feature = "http")]
pub mod client;
mod convert;
pub mod state;
pub mod wire;

use crate::shared::PhoneNumber;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

pub use state::{SmsEvent, SmsHistory};
pub use wire::SmsSend;

/// Maximum length of a single SMS, in characters.
pub const MAX_SMS_LENGTH: usize = 160;

/// Delivery lifecycle of a sent message. Status only changes through
/// server-driven refetch; the client never edits a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SmsStatus {
    Pending,
    Sent,
    Delivered,
    Failed,
}

impl SmsStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            SmsStatus::Pending => "pending",
            SmsStatus::Sent => "sent",
            SmsStatus::Delivered => "delivered",
            SmsStatus::Failed => "failed",
        }
    }
}

impl fmt::Display for SmsStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A sent message record. Append-only from the client's perspective.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Sms {
    pub id: String,
    pub content: String,
    pub recipient_number: PhoneNumber,
    pub status: SmsStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message_id: Option<String>,
    pub sender_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recipient_id: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Gateway-reported delivery status for one message.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DeliveryStatus {
    pub message_id: String,
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delivery_status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

/// Why a send payload failed client-side validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SmsValidationError {
    RecipientMissing,
    RecipientInvalid,
    MessageMissing,
    MessageTooLong { len: usize },
}

impl fmt::Display for SmsValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SmsValidationError::RecipientMissing => {
                write!(f, "Le numéro de téléphone est requis")
            }
            SmsValidationError::RecipientInvalid => {
                write!(f, "Entrez un numéro de téléphone sénégalais valide")
            }
            SmsValidationError::MessageMissing => write!(f, "Le message est requis"),
            SmsValidationError::MessageTooLong { .. } => {
                write!(f, "Le message ne peut pas dépasser {MAX_SMS_LENGTH} caractères")
            }
        }
    }
}

impl std::error::Error for SmsValidationError {}
