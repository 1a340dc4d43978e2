//! Conversions from wire types to domain types for contacts.

use super::wire::{ContactCreate, ContactResponse, ContactUpdate};
use super::{Contact, ContactValidationError};
use crate::shared::PhoneNumber;

impl TryFrom<ContactResponse> for Contact {
    type Error = ContactValidationError;

    fn try_from(c: ContactResponse) -> Result<Self, Self::Error> {
        if c.name.trim().is_empty() {
            return Err(ContactValidationError::NameMissing);
        }
        let phone_number =
            PhoneNumber::parse(&c.phone_number).map_err(ContactValidationError::Phone)?;
        Ok(Self {
            id: c.id,
            name: c.name,
            phone_number,
            notes: c.notes,
            owner_id: c.owner_id,
            created_at: c.created_at,
            updated_at: c.updated_at,
        })
    }
}

impl ContactCreate {
    /// Validate and normalize the payload before it goes on the wire: the
    /// phone number is rewritten to canonical E.164 form.
    pub fn normalized(mut self) -> Result<Self, ContactValidationError> {
        if self.name.trim().is_empty() {
            return Err(ContactValidationError::NameMissing);
        }
        let phone =
            PhoneNumber::parse(&self.phone_number).map_err(ContactValidationError::Phone)?;
        self.phone_number = phone.as_e164().to_string();
        Ok(self)
    }
}

impl ContactUpdate {
    /// Validate and normalize any phone number carried by the update.
    pub fn normalized(mut self) -> Result<Self, ContactValidationError> {
        if let Some(raw) = &self.phone_number {
            let phone = PhoneNumber::parse(raw).map_err(ContactValidationError::Phone)?;
            self.phone_number = Some(phone.as_e164().to_string());
        }
        if let Some(name) = &self.name {
            if name.trim().is_empty() {
                return Err(ContactValidationError::NameMissing);
            }
        }
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn sample_response(phone: &str) -> ContactResponse {
        ContactResponse {
            id: "c1".to_string(),
            name: "Moussa Diop".to_string(),
            phone_number: phone.to_string(),
            notes: None,
            owner_id: "u1".to_string(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_response_conversion_validates_phone() {
        let contact: Contact = sample_response("+221771234567").try_into().unwrap();
        assert_eq!(contact.phone_number.display(), "+221 77 123 45 67");

        let bad = sample_response("791234567");
        assert!(matches!(
            Contact::try_from(bad),
            Err(ContactValidationError::Phone(_))
        ));
    }

    #[test]
    fn test_create_normalization_rewrites_phone() {
        let create = ContactCreate::new("Awa", "77 123 45 67").normalized().unwrap();
        assert_eq!(create.phone_number, "+221771234567");
    }

    #[test]
    fn test_create_requires_name() {
        let create = ContactCreate::new("  ", "771234567");
        assert_eq!(
            create.normalized(),
            Err(ContactValidationError::NameMissing)
        );
    }

    #[test]
    fn test_update_without_phone_passes_through() {
        let update = ContactUpdate {
            notes: Some("collègue".to_string()),
            ..Default::default()
        };
        assert!(update.normalized().is_ok());
    }

    #[test]
    fn test_update_normalizes_phone_when_present() {
        let update = ContactUpdate {
            phone_number: Some("221761112233".to_string()),
            ..Default::default()
        };
        let normalized = update.normalized().unwrap();
        assert_eq!(normalized.phone_number.as_deref(), Some("+221761112233"));
    }
}
