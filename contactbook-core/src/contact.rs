// SPDX-FileCopyrightText: 2026 Contactbook Contributors
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Contact records as exchanged with the API.

use serde::{Deserialize, Serialize};

use crate::id::Id;

/// A single address-book entry.
///
/// `id` and `created_at` are assigned by the server; the client never
/// fabricates either.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    pub id: Id,
    pub name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default)]
    pub is_favorite: bool,
    /// Server timestamp, kept verbatim.
    #[serde(default)]
    pub created_at: String,
}

impl Contact {
    /// Creates a contact with only the required fields set.
    pub fn new(id: impl Into<Id>, name: impl Into<String>, email: impl Into<String>) -> Self {
        Contact {
            id: id.into(),
            name: name.into(),
            email: email.into(),
            phone: None,
            company: None,
            notes: None,
            is_favorite: false,
            created_at: String::new(),
        }
    }

    /// Sets the phone number.
    pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = Some(phone.into());
        self
    }

    /// Sets the company.
    pub fn with_company(mut self, company: impl Into<String>) -> Self {
        self.company = Some(company.into());
        self
    }

    /// Sets the notes.
    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    /// Sets the favorite flag.
    pub fn with_favorite(mut self, is_favorite: bool) -> Self {
        self.is_favorite = is_favorite;
        self
    }

    /// Sets the creation timestamp.
    pub fn with_created_at(mut self, created_at: impl Into<String>) -> Self {
        self.created_at = created_at.into();
        self
    }

    /// Returns the phone number, treating an empty string as absent.
    pub fn phone(&self) -> Option<&str> {
        non_empty(self.phone.as_deref())
    }

    /// Returns the company, treating an empty string as absent.
    pub fn company(&self) -> Option<&str> {
        non_empty(self.company.as_deref())
    }

    /// Returns the notes, treating an empty string as absent.
    pub fn notes(&self) -> Option<&str> {
        non_empty(self.notes.as_deref())
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

/// Client-supplied fields for creating or replacing a contact.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ContactDraft {
    pub name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl ContactDraft {
    /// Creates a draft with the required fields.
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        ContactDraft {
            name: name.into(),
            email: email.into(),
            ..Default::default()
        }
    }

    /// Sets the phone number.
    pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = Some(phone.into());
        self
    }

    /// Sets the company.
    pub fn with_company(mut self, company: impl Into<String>) -> Self {
        self.company = Some(company.into());
        self
    }

    /// Sets the notes.
    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }
}

impl From<&Contact> for ContactDraft {
    fn from(contact: &Contact) -> Self {
        ContactDraft {
            name: contact.name.clone(),
            email: contact.email.clone(),
            phone: contact.phone.clone(),
            company: contact.company.clone(),
            notes: contact.notes.clone(),
        }
    }
}
