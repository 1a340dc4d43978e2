//! Conversions and client-side validation for SMS payloads.

use super::wire::{SmsResponse, SmsSend};
use super::{Sms, SmsValidationError, MAX_SMS_LENGTH};
use crate::shared::PhoneNumber;

impl TryFrom<SmsResponse> for Sms {
    type Error = SmsValidationError;

    fn try_from(s: SmsResponse) -> Result<Self, Self::Error> {
        let recipient_number = PhoneNumber::parse(&s.recipient_number)
            .map_err(|_| SmsValidationError::RecipientInvalid)?;
        Ok(Self {
            id: s.id,
            content: s.content,
            recipient_number,
            status: s.status,
            message_id: s.message_id,
            sender_id: s.sender_id,
            recipient_id: s.recipient_id,
            created_at: s.created_at,
            updated_at: s.updated_at,
        })
    }
}

impl SmsSend {
    /// Validate and normalize the payload before it goes on the wire.
    ///
    /// Checks recipient presence and numbering plan, message presence, and
    /// the 160-character limit; the recipient is rewritten to canonical
    /// E.164 form. A payload that fails here never reaches the network.
    pub fn normalized(mut self) -> Result<Self, SmsValidationError> {
        if self.recipient_number.trim().is_empty() {
            return Err(SmsValidationError::RecipientMissing);
        }
        let phone = PhoneNumber::parse(&self.recipient_number)
            .map_err(|_| SmsValidationError::RecipientInvalid)?;
        self.recipient_number = phone.as_e164().to_string();

        if self.message.is_empty() {
            return Err(SmsValidationError::MessageMissing);
        }
        let len = self.message.chars().count();
        if len > MAX_SMS_LENGTH {
            return Err(SmsValidationError::MessageTooLong { len });
        }

        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::sms::SmsStatus;
    use chrono::Utc;

    fn sample_response() -> SmsResponse {
        SmsResponse {
            id: "s1".to_string(),
            content: "Bonjour".to_string(),
            recipient_number: "+221771234567".to_string(),
            status: SmsStatus::Sent,
            message_id: Some("mid-1".to_string()),
            sender_id: "u1".to_string(),
            recipient_id: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_response_conversion() {
        let sms: Sms = sample_response().try_into().unwrap();
        assert_eq!(sms.recipient_number.display(), "+221 77 123 45 67");
        assert_eq!(sms.status, SmsStatus::Sent);
    }

    #[test]
    fn test_send_validation_normalizes_recipient() {
        let send = SmsSend::new("77 123 45 67", "Bonjour").normalized().unwrap();
        assert_eq!(send.recipient_number, "+221771234567");
    }

    #[test]
    fn test_message_length_boundary() {
        let at_limit = "a".repeat(MAX_SMS_LENGTH);
        assert!(SmsSend::new("771234567", at_limit).normalized().is_ok());

        let over_limit = "a".repeat(MAX_SMS_LENGTH + 1);
        assert_eq!(
            SmsSend::new("771234567", over_limit).normalized(),
            Err(SmsValidationError::MessageTooLong {
                len: MAX_SMS_LENGTH + 1
            })
        );
    }

    #[test]
    fn test_length_counts_characters_not_bytes() {
        // 160 two-byte characters are still one SMS' worth of characters.
        let accented = "é".repeat(MAX_SMS_LENGTH);
        assert!(SmsSend::new("771234567", accented).normalized().is_ok());
    }

    #[test]
    fn test_missing_fields_rejected() {
        assert_eq!(
            SmsSend::new("  ", "Bonjour").normalized(),
            Err(SmsValidationError::RecipientMissing)
        );
        assert_eq!(
            SmsSend::new("771234567", "").normalized(),
            Err(SmsValidationError::MessageMissing)
        );
        assert_eq!(
            SmsSend::new("123", "Bonjour").normalized(),
            Err(SmsValidationError::RecipientInvalid)
        );
    }
}
