//! Contact domain — address book entries, validation, CRUD state.

#[cfg(feature = "http")]
pub mod client;
mod convert;
pub mod state;
pub mod wire;

use crate::shared::PhoneNumber;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

pub use state::{ContactBook, ContactEvent};
pub use wire::{ContactCreate, ContactUpdate};

/// A validated address book entry.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Contact {
    pub id: String,
    pub name: String,
    pub phone_number: PhoneNumber,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    pub owner_id: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Why a contact payload failed validation.
#[derive(Debug, Clone, PartialEq)]
pub enum ContactValidationError {
    NameMissing,
    Phone(crate::shared::PhoneError),
}

impl fmt::Display for ContactValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContactValidationError::NameMissing => write!(f, "Le nom est requis"),
            ContactValidationError::Phone(_) => {
                write!(f, "Format: +221 7X XXX XX XX (numéro sénégalais)")
            }
        }
    }
}

impl std::error::Error for ContactValidationError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ContactValidationError::Phone(e) => Some(e),
            ContactValidationError::NameMissing => None,
        }
    }
}
