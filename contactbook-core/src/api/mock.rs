// SPDX-FileCopyrightText: 2026 Contactbook Contributors
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! In-memory contacts service.
//!
//! Behaves like the real API closely enough for store tests: per-user
//! contact lists, bearer tokens, numeric server-assigned ids, and the same
//! rejection messages. Failures can be injected and every call is counted.

use std::collections::HashMap;

use async_trait::async_trait;
use parking_lot::Mutex;

use super::error::{ApiError, ApiResult};
use super::types::{AuthResponse, HealthStatus};
use super::ContactApi;
use crate::contact::{Contact, ContactDraft};
use crate::id::Id;
use crate::user::User;

/// Timestamp stamped on contacts created by the mock.
pub const MOCK_CREATED_AT: &str = "2026-01-01T00:00:00";

struct Account {
    user: User,
    password: String,
}

struct StoredContact {
    owner: Id,
    contact: Contact,
}

#[derive(Default)]
struct MockState {
    accounts: Vec<Account>,
    tokens: HashMap<String, Id>,
    contacts: Vec<StoredContact>,
    next_user_id: u64,
    next_contact_id: u64,
    next_token: u64,
    offline: bool,
    queued_failures: Vec<ApiError>,
    request_count: usize,
}

impl MockState {
    fn issue_token(&mut self, user_id: &Id) -> String {
        self.next_token += 1;
        let token = format!("mock-token-{}-{}", user_id, self.next_token);
        self.tokens.insert(token.clone(), user_id.clone());
        token
    }

    fn owner_of(&self, token: &str) -> ApiResult<Id> {
        self.tokens
            .get(token)
            .cloned()
            .ok_or_else(|| ApiError::rejected(401, "Missing or invalid token"))
    }

    fn find_mut(&mut self, owner: &Id, id: &Id) -> ApiResult<&mut Contact> {
        self.contacts
            .iter_mut()
            .find(|c| &c.owner == owner && &c.contact.id == id)
            .map(|c| &mut c.contact)
            .ok_or_else(|| ApiError::rejected(404, "Contact not found"))
    }
}

/// In-memory [`ContactApi`] implementation.
#[derive(Default)]
pub struct MockApi {
    state: Mutex<MockState>,
}

impl MockApi {
    /// Creates an empty service.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers an account directly, bypassing the request counter.
    pub fn add_account(&self, name: &str, email: &str, password: &str) -> User {
        let mut state = self.state.lock();
        state.next_user_id += 1;
        let user = User::new(state.next_user_id, name, normalize_email(email));
        state.accounts.push(Account {
            user: user.clone(),
            password: password.to_string(),
        });
        user
    }

    /// Stores a contact for the given account, bypassing the request counter.
    pub fn seed_contact(&self, owner: &User, draft: &ContactDraft) -> Contact {
        let mut state = self.state.lock();
        state.next_contact_id += 1;
        let contact = contact_from_draft(state.next_contact_id, draft);
        state.contacts.push(StoredContact {
            owner: owner.id.clone(),
            contact: contact.clone(),
        });
        contact
    }

    /// Returns the server-side contacts of an account.
    pub fn contacts_of(&self, owner: &User) -> Vec<Contact> {
        self.state
            .lock()
            .contacts
            .iter()
            .filter(|c| c.owner == owner.id)
            .map(|c| c.contact.clone())
            .collect()
    }

    /// Makes every following call fail with a transport error.
    pub fn set_offline(&self, offline: bool) {
        self.state.lock().offline = offline;
    }

    /// Makes the next call fail with the given error.
    ///
    /// Several queued failures are consumed in order.
    pub fn fail_next(&self, error: ApiError) {
        self.state.lock().queued_failures.push(error);
    }

    /// Number of calls received through [`ContactApi`].
    pub fn request_count(&self) -> usize {
        self.state.lock().request_count
    }

    /// Counts the call and applies offline mode or a queued failure.
    fn enter(&self) -> ApiResult<parking_lot::MutexGuard<'_, MockState>> {
        let mut state = self.state.lock();
        state.request_count += 1;
        if state.offline {
            return Err(ApiError::Transport("connection refused".into()));
        }
        if !state.queued_failures.is_empty() {
            return Err(state.queued_failures.remove(0));
        }
        Ok(state)
    }
}

fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

fn trimmed(value: &Option<String>) -> Option<String> {
    value.as_ref().map(|v| v.trim().to_string())
}

fn contact_from_draft(id: u64, draft: &ContactDraft) -> Contact {
    Contact {
        id: Id::from(id),
        name: draft.name.trim().to_string(),
        email: normalize_email(&draft.email),
        phone: trimmed(&draft.phone),
        company: trimmed(&draft.company),
        notes: trimmed(&draft.notes),
        is_favorite: false,
        created_at: MOCK_CREATED_AT.to_string(),
    }
}

#[async_trait]
impl ContactApi for MockApi {
    async fn login(&self, email: &str, password: &str) -> ApiResult<AuthResponse> {
        let mut state = self.enter()?;
        let email = normalize_email(email);
        let user = state
            .accounts
            .iter()
            .find(|a| a.user.email == email && a.password == password.trim())
            .map(|a| a.user.clone())
            .ok_or_else(|| ApiError::rejected(401, "Incorrect email or password"))?;
        let token = state.issue_token(&user.id);
        Ok(AuthResponse { user, token })
    }

    async fn register(&self, name: &str, email: &str, password: &str) -> ApiResult<AuthResponse> {
        let mut state = self.enter()?;
        let name = name.trim();
        let email = normalize_email(email);
        let password = password.trim();
        if name.is_empty() || email.is_empty() || password.is_empty() {
            return Err(ApiError::rejected(
                400,
                "name, email and password are required",
            ));
        }
        if state.accounts.iter().any(|a| a.user.email == email) {
            return Err(ApiError::rejected(409, "Email already registered"));
        }

        state.next_user_id += 1;
        let user = User::new(state.next_user_id, name, email);
        state.accounts.push(Account {
            user: user.clone(),
            password: password.to_string(),
        });
        let token = state.issue_token(&user.id);
        Ok(AuthResponse { user, token })
    }

    async fn list_contacts(&self, token: &str) -> ApiResult<Vec<Contact>> {
        let state = self.enter()?;
        let owner = state.owner_of(token)?;
        Ok(state
            .contacts
            .iter()
            .filter(|c| c.owner == owner)
            .map(|c| c.contact.clone())
            .collect())
    }

    async fn create_contact(&self, token: &str, draft: &ContactDraft) -> ApiResult<Contact> {
        let mut state = self.enter()?;
        let owner = state.owner_of(token)?;
        if draft.name.trim().is_empty() || draft.email.trim().is_empty() {
            return Err(ApiError::rejected(400, "name and email are required"));
        }

        state.next_contact_id += 1;
        let contact = contact_from_draft(state.next_contact_id, draft);
        state.contacts.push(StoredContact {
            owner,
            contact: contact.clone(),
        });
        Ok(contact)
    }

    async fn update_contact(
        &self,
        token: &str,
        id: &Id,
        draft: &ContactDraft,
    ) -> ApiResult<Contact> {
        let mut state = self.enter()?;
        let owner = state.owner_of(token)?;
        let contact = state.find_mut(&owner, id)?;

        contact.name = draft.name.trim().to_string();
        contact.email = draft.email.trim().to_string();
        if let Some(phone) = trimmed(&draft.phone) {
            contact.phone = Some(phone);
        }
        if let Some(company) = trimmed(&draft.company) {
            contact.company = Some(company);
        }
        if let Some(notes) = trimmed(&draft.notes) {
            contact.notes = Some(notes);
        }
        Ok(contact.clone())
    }

    async fn delete_contact(&self, token: &str, id: &Id) -> ApiResult<()> {
        let mut state = self.enter()?;
        let owner = state.owner_of(token)?;
        let before = state.contacts.len();
        state
            .contacts
            .retain(|c| !(c.owner == owner && &c.contact.id == id));
        if state.contacts.len() == before {
            return Err(ApiError::rejected(404, "Contact not found"));
        }
        Ok(())
    }

    async fn toggle_favorite(&self, token: &str, id: &Id) -> ApiResult<Contact> {
        let mut state = self.enter()?;
        let owner = state.owner_of(token)?;
        let contact = state.find_mut(&owner, id)?;
        contact.is_favorite = !contact.is_favorite;
        Ok(contact.clone())
    }

    async fn health(&self) -> ApiResult<HealthStatus> {
        self.enter()?;
        Ok(HealthStatus {
            status: "ok".into(),
            time: Some(MOCK_CREATED_AT.into()),
        })
    }
}
