//! Contact state container — app-owned, SDK-provided update logic.

use super::Contact;
use crate::shared::ApiResponse;

pub const FETCH_CONTACTS_FALLBACK: &str = "Échec de la récupération des contacts";
pub const CREATE_CONTACT_FALLBACK: &str = "Échec de la création du contact";
pub const UPDATE_CONTACT_FALLBACK: &str = "Échec de la mise à jour du contact";
pub const DELETE_CONTACT_FALLBACK: &str = "Échec de la suppression du contact";

pub const CONTACT_CREATED_MESSAGE: &str = "Contact créé avec succès";
pub const CONTACT_UPDATED_MESSAGE: &str = "Contact mis à jour avec succès";
pub const CONTACT_DELETED_MESSAGE: &str = "Contact supprimé avec succès";

/// The contact list plus its CRUD lifecycle flags.
///
/// The list is the single client-side cache: replaced wholesale on fetch,
/// patched incrementally on create/update/delete. Ids stay unique at all
/// times. `current` is pure selection state driving edit mode in a UI; it has
/// no server representation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContactBook {
    pub contacts: Vec<Contact>,
    pub current: Option<Contact>,
    pub is_loading: bool,
    pub error: Option<String>,
    pub success: Option<String>,
}

impl ContactBook {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, id: &str) -> Option<&Contact> {
        self.contacts.iter().find(|c| c.id == id)
    }

    pub fn len(&self) -> usize {
        self.contacts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }

    /// Fold one event into the state. Each call is atomic relative to one
    /// request's resolution: error and success stay mutually exclusive and
    /// the id-uniqueness invariant holds on exit.
    pub fn apply(&mut self, event: ContactEvent) {
        match event {
            ContactEvent::FetchRequested
            | ContactEvent::CreateRequested
            | ContactEvent::UpdateRequested
            | ContactEvent::DeleteRequested => {
                self.is_loading = true;
                self.error = None;
                self.success = None;
            }
            ContactEvent::FetchSucceeded { contacts } => {
                self.is_loading = false;
                self.contacts = contacts;
            }
            ContactEvent::CreateSucceeded { contact } => {
                self.is_loading = false;
                self.upsert(contact);
                self.success = Some(CONTACT_CREATED_MESSAGE.to_string());
                self.current = None;
            }
            ContactEvent::UpdateSucceeded { contact } => {
                self.is_loading = false;
                if let Some(slot) = self.contacts.iter_mut().find(|c| c.id == contact.id) {
                    *slot = contact;
                }
                self.success = Some(CONTACT_UPDATED_MESSAGE.to_string());
                self.current = None;
            }
            ContactEvent::DeleteSucceeded { id } => {
                self.is_loading = false;
                self.contacts.retain(|c| c.id != id);
                self.success = Some(CONTACT_DELETED_MESSAGE.to_string());
            }
            ContactEvent::FetchFailed { message }
            | ContactEvent::CreateFailed { message }
            | ContactEvent::UpdateFailed { message }
            | ContactEvent::DeleteFailed { message } => {
                self.is_loading = false;
                self.error = Some(message);
            }
            ContactEvent::CurrentSet { contact } => {
                self.current = Some(contact);
            }
            ContactEvent::CurrentCleared => {
                self.current = None;
            }
            ContactEvent::ErrorCleared => {
                self.error = None;
            }
            ContactEvent::SuccessCleared => {
                self.success = None;
            }
        }
    }

    /// Append, or replace in place when the id is already present.
    fn upsert(&mut self, contact: Contact) {
        match self.contacts.iter_mut().find(|c| c.id == contact.id) {
            Some(slot) => *slot = contact,
            None => self.contacts.push(contact),
        }
    }
}

/// Tagged CRUD transition, one request/success/failure case per operation.
#[derive(Debug, Clone, PartialEq)]
pub enum ContactEvent {
    FetchRequested,
    FetchSucceeded { contacts: Vec<Contact> },
    FetchFailed { message: String },
    CreateRequested,
    CreateSucceeded { contact: Contact },
    CreateFailed { message: String },
    UpdateRequested,
    UpdateSucceeded { contact: Contact },
    UpdateFailed { message: String },
    DeleteRequested,
    DeleteSucceeded { id: String },
    DeleteFailed { message: String },
    CurrentSet { contact: Contact },
    CurrentCleared,
    ErrorCleared,
    SuccessCleared,
}

impl ContactEvent {
    pub fn fetch_settled(resp: ApiResponse<Vec<Contact>>) -> Self {
        match resp.data {
            Some(contacts) if resp.success => ContactEvent::FetchSucceeded { contacts },
            _ => ContactEvent::FetchFailed {
                message: resp.message_or(FETCH_CONTACTS_FALLBACK).to_string(),
            },
        }
    }

    pub fn create_settled(resp: ApiResponse<Contact>) -> Self {
        match resp.data {
            Some(contact) if resp.success => ContactEvent::CreateSucceeded { contact },
            _ => ContactEvent::CreateFailed {
                message: resp.message_or(CREATE_CONTACT_FALLBACK).to_string(),
            },
        }
    }

    pub fn update_settled(resp: ApiResponse<Contact>) -> Self {
        match resp.data {
            Some(contact) if resp.success => ContactEvent::UpdateSucceeded { contact },
            _ => ContactEvent::UpdateFailed {
                message: resp.message_or(UPDATE_CONTACT_FALLBACK).to_string(),
            },
        }
    }

    /// Deletion returns no body, so the caller supplies the id it removed.
    pub fn delete_settled(id: impl Into<String>, resp: ApiResponse<()>) -> Self {
        if resp.success {
            ContactEvent::DeleteSucceeded { id: id.into() }
        } else {
            ContactEvent::DeleteFailed {
                message: resp.message_or(DELETE_CONTACT_FALLBACK).to_string(),
            }
        }
    }
}
