// SPDX-FileCopyrightText: 2026 Contactbook Contributors
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Contact Store
//!
//! Local mirror of the current user's contacts plus the search and sort
//! parameters of the derived view.
//!
//! Every mutation follows the same shape: call the API, and only on
//! success apply the matching local change. A failed call leaves the
//! mirror untouched, logs a diagnostic and returns a sentinel.
//!
//! Attaching or detaching a session bumps a generation counter. Results
//! that resolve after the generation moved on belong to a session that no
//! longer exists and are dropped.

use std::sync::Arc;

use parking_lot::RwLock;
use tracing::{debug, error, warn};
use zeroize::Zeroizing;

use super::view::{derive_view, SortMode};
use crate::api::{ApiError, ContactApi};
use crate::contact::{Contact, ContactDraft};
use crate::events::{ContactBookEvent, EventDispatcher};
use crate::id::Id;
use crate::session::Session;

#[derive(Default)]
struct ContactState {
    contacts: Vec<Contact>,
    search_term: String,
    sort_mode: SortMode,
    token: Option<Zeroizing<String>>,
    generation: u64,
}

/// Snapshot taken before a network call.
struct Ticket {
    generation: u64,
    token: Zeroizing<String>,
}

/// Holds the contact collection of the attached session.
pub struct ContactStore<A: ContactApi> {
    api: Arc<A>,
    events: Arc<EventDispatcher>,
    state: RwLock<ContactState>,
}

impl<A: ContactApi> ContactStore<A> {
    /// Creates an empty, detached store.
    pub fn new(api: Arc<A>, events: Arc<EventDispatcher>) -> Self {
        ContactStore {
            api,
            events,
            state: RwLock::new(ContactState::default()),
        }
    }

    // === Session Lifecycle ===

    /// Binds the store to a session and reloads the full list.
    ///
    /// Returns true if the reload succeeded.
    pub async fn attach(&self, session: &Session) -> bool {
        let ticket = {
            let mut state = self.state.write();
            state.generation += 1;
            state.token = Some(Zeroizing::new(session.token().to_string()));
            Ticket {
                generation: state.generation,
                token: Zeroizing::new(session.token().to_string()),
            }
        };
        debug!(user_id = %session.user().id, "contact store attached");
        self.load(ticket).await
    }

    /// Unbinds the store and empties the collection. No network call.
    pub fn detach(&self) {
        {
            let mut state = self.state.write();
            state.generation += 1;
            state.token = None;
            state.contacts.clear();
        }
        debug!("contact store detached");
        self.events.dispatch(ContactBookEvent::ContactsCleared);
    }

    /// Re-fetches the full list for the attached session.
    ///
    /// Returns false without a network call when detached.
    pub async fn reload(&self) -> bool {
        match self.ticket("reload contacts") {
            Some(ticket) => self.load(ticket).await,
            None => false,
        }
    }

    async fn load(&self, ticket: Ticket) -> bool {
        let generation = ticket.generation;
        match self.api.list_contacts(&ticket.token).await {
            Ok(contacts) => {
                let count = contacts.len();
                if !self.apply(generation, |list| *list = contacts) {
                    return false;
                }
                debug!(count, "contacts loaded");
                self.events
                    .dispatch(ContactBookEvent::ContactsLoaded { count });
                true
            }
            Err(e) => {
                self.report("Failed to load contacts", &e);
                // Show nothing rather than a stale list.
                if self.apply(generation, |list| list.clear()) {
                    self.events.dispatch(ContactBookEvent::ContactsCleared);
                }
                false
            }
        }
    }

    // === Mutations ===

    /// Creates a contact. Returns the server's record, or `None` on failure.
    pub async fn add_contact(&self, draft: &ContactDraft) -> Option<Contact> {
        let ticket = self.ticket("add contact")?;
        match self.api.create_contact(&ticket.token, draft).await {
            Ok(created) => {
                let applied = self.apply(ticket.generation, |list| {
                    upsert(list, &created.id, created.clone())
                });
                if !applied {
                    return None;
                }
                self.events.dispatch(ContactBookEvent::ContactAdded {
                    contact_id: created.id.clone(),
                });
                Some(created)
            }
            Err(e) => {
                self.report("Failed to add contact", &e);
                None
            }
        }
    }

    /// Replaces a contact's fields. Returns the updated record, or `None`.
    pub async fn update_contact(
        &self,
        id: impl Into<Id>,
        draft: &ContactDraft,
    ) -> Option<Contact> {
        let id = id.into();
        let ticket = self.ticket("update contact")?;
        match self.api.update_contact(&ticket.token, &id, draft).await {
            Ok(updated) => {
                if !self.apply(ticket.generation, |list| replace(list, &id, &updated)) {
                    return None;
                }
                self.events
                    .dispatch(ContactBookEvent::ContactUpdated { contact_id: id });
                Some(updated)
            }
            Err(e) => {
                self.report("Failed to update contact", &e);
                None
            }
        }
    }

    /// Deletes a contact. Returns true on success.
    pub async fn delete_contact(&self, id: impl Into<Id>) -> bool {
        let id = id.into();
        let Some(ticket) = self.ticket("delete contact") else {
            return false;
        };
        match self.api.delete_contact(&ticket.token, &id).await {
            Ok(()) => {
                if !self.apply(ticket.generation, |list| list.retain(|c| c.id != id)) {
                    return false;
                }
                self.events
                    .dispatch(ContactBookEvent::ContactRemoved { contact_id: id });
                true
            }
            Err(e) => {
                self.report("Failed to delete contact", &e);
                false
            }
        }
    }

    /// Flips a contact's favorite flag. Returns the updated record, or `None`.
    pub async fn toggle_favorite(&self, id: impl Into<Id>) -> Option<Contact> {
        let id = id.into();
        let ticket = self.ticket("toggle favorite")?;
        match self.api.toggle_favorite(&ticket.token, &id).await {
            Ok(updated) => {
                if !self.apply(ticket.generation, |list| replace(list, &id, &updated)) {
                    return None;
                }
                self.events.dispatch(ContactBookEvent::FavoriteToggled {
                    contact_id: id,
                    is_favorite: updated.is_favorite,
                });
                Some(updated)
            }
            Err(e) => {
                self.report("Failed to toggle favorite", &e);
                None
            }
        }
    }

    // === Helpers ===

    fn ticket(&self, operation: &str) -> Option<Ticket> {
        let state = self.state.read();
        match &state.token {
            Some(token) => Some(Ticket {
                generation: state.generation,
                token: token.clone(),
            }),
            None => {
                warn!(operation, "no session attached, skipping");
                None
            }
        }
    }

    /// Applies `change` if the session generation still matches.
    fn apply<F>(&self, generation: u64, change: F) -> bool
    where
        F: FnOnce(&mut Vec<Contact>),
    {
        let mut state = self.state.write();
        if state.generation != generation {
            debug!(
                expected = generation,
                current = state.generation,
                "dropping result from a previous session"
            );
            return false;
        }
        change(&mut state.contacts);
        true
    }

    fn report(&self, context: &str, e: &ApiError) {
        error!(error = %e, "{}", context);
        let detail = e.server_message().map(str::to_string).unwrap_or_else(|| e.to_string());
        self.events.dispatch(ContactBookEvent::Error {
            message: format!("{}: {}", context, detail),
        });
    }

    // === View Parameters ===

    /// Returns the current search term.
    pub fn search_term(&self) -> String {
        self.state.read().search_term.clone()
    }

    /// Sets the search term.
    pub fn set_search_term(&self, term: impl Into<String>) {
        self.state.write().search_term = term.into();
    }

    /// Returns the current sort mode.
    pub fn sort_mode(&self) -> SortMode {
        self.state.read().sort_mode
    }

    /// Sets the sort mode.
    pub fn set_sort_mode(&self, mode: SortMode) {
        self.state.write().sort_mode = mode;
    }

    // === Reads ===

    /// The filtered and sorted view, recomputed on every call.
    pub fn view(&self) -> Vec<Contact> {
        let state = self.state.read();
        derive_view(&state.contacts, &state.search_term, state.sort_mode)
    }

    /// The unfiltered collection in server order.
    pub fn all_contacts(&self) -> Vec<Contact> {
        self.state.read().contacts.clone()
    }

    /// Looks up a contact by id.
    pub fn get(&self, id: impl Into<Id>) -> Option<Contact> {
        let id = id.into();
        self.state
            .read()
            .contacts
            .iter()
            .find(|c| c.id == id)
            .cloned()
    }

    /// Number of contacts in the collection.
    pub fn len(&self) -> usize {
        self.state.read().contacts.len()
    }

    /// Returns true if the collection is empty.
    pub fn is_empty(&self) -> bool {
        self.state.read().contacts.is_empty()
    }

    /// Returns true if a session is attached.
    pub fn is_attached(&self) -> bool {
        self.state.read().token.is_some()
    }
}

/// Replaces every entry matching `id`.
fn replace(list: &mut [Contact], id: &Id, updated: &Contact) {
    for contact in list.iter_mut().filter(|c| &c.id == id) {
        *contact = updated.clone();
    }
}

/// Appends, or replaces an entry that already carries the same id.
fn upsert(list: &mut Vec<Contact>, id: &Id, contact: Contact) {
    match list.iter_mut().find(|c| &c.id == id) {
        Some(existing) => *existing = contact,
        None => list.push(contact),
    }
}
