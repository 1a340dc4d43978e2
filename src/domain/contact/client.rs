//! Contacts sub-client — address book CRUD.

use crate::client::SunuSmsClient;
use crate::domain::contact::wire::{ContactCreate, ContactResponse, ContactUpdate};
use crate::domain::contact::Contact;
use crate::error::GENERIC_ERROR;
use crate::shared::ApiResponse;

/// Sub-client for contact operations.
pub struct Contacts<'a> {
    pub(crate) client: &'a SunuSmsClient,
}

impl<'a> Contacts<'a> {
    /// Fetch the full contact list.
    pub async fn list(&self) -> ApiResponse<Vec<Contact>> {
        let resp: ApiResponse<Vec<ContactResponse>> = self.client.http.get("/contacts/").await;
        match resp.data {
            Some(wire) if resp.success => {
                let mut contacts = Vec::with_capacity(wire.len());
                for record in wire {
                    match Contact::try_from(record) {
                        Ok(contact) => contacts.push(contact),
                        Err(e) => return ApiResponse::err(e.to_string()),
                    }
                }
                ApiResponse::ok(contacts)
            }
            _ => ApiResponse::err(resp.message_or(GENERIC_ERROR).to_string()),
        }
    }

    /// Fetch a single contact by id.
    pub async fn get(&self, id: &str) -> ApiResponse<Contact> {
        let path = format!("/contacts/{}", urlencoding::encode(id));
        into_domain(self.client.http.get(&path).await)
    }

    /// Create a contact. The phone number is normalized to E.164 client-side;
    /// an invalid payload never reaches the network.
    pub async fn create(&self, contact: ContactCreate) -> ApiResponse<Contact> {
        let payload = match contact.normalized() {
            Ok(p) => p,
            Err(e) => return ApiResponse::err(e.to_string()),
        };
        into_domain(self.client.http.post("/contacts/", &payload).await)
    }

    /// Update a contact in place by id.
    pub async fn update(&self, id: &str, update: ContactUpdate) -> ApiResponse<Contact> {
        let payload = match update.normalized() {
            Ok(p) => p,
            Err(e) => return ApiResponse::err(e.to_string()),
        };
        let path = format!("/contacts/{}", urlencoding::encode(id));
        into_domain(self.client.http.put(&path, &payload).await)
    }

    /// Delete a contact by id.
    pub async fn delete(&self, id: &str) -> ApiResponse<()> {
        let path = format!("/contacts/{}", urlencoding::encode(id));
        self.client.http.delete(&path).await
    }
}

fn into_domain(resp: ApiResponse<ContactResponse>) -> ApiResponse<Contact> {
    match resp.data {
        Some(wire) if resp.success => match Contact::try_from(wire) {
            Ok(contact) => ApiResponse::ok(contact),
            Err(e) => ApiResponse::err(e.to_string()),
        },
        _ => ApiResponse::err(resp.message_or(GENERIC_ERROR).to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn wire(phone: &str) -> ContactResponse {
        ContactResponse {
            id: "c1".to_string(),
            name: "Awa".to_string(),
            phone_number: phone.to_string(),
            notes: None,
            owner_id: "u1".to_string(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_into_domain_converts_valid_record() {
        let resp = into_domain(ApiResponse::ok(wire("771234567")));
        assert!(resp.success);
        assert_eq!(
            resp.data.unwrap().phone_number.as_e164(),
            "+221771234567"
        );
    }

    #[test]
    fn test_into_domain_surfaces_validation_failure() {
        let resp = into_domain(ApiResponse::ok(wire("12345")));
        assert!(!resp.success);
        assert!(resp.message.unwrap().contains("+221 7X"));
    }

    #[test]
    fn test_into_domain_passes_failure_through() {
        let resp = into_domain(ApiResponse::err("Contact non trouvé"));
        assert!(!resp.success);
        assert_eq!(resp.message.as_deref(), Some("Contact non trouvé"));
    }
}
