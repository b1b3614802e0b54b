// SPDX-FileCopyrightText: 2026 Contactbook Contributors
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Event System
//!
//! Subscriber callbacks for store changes.

use std::sync::Arc;

use crate::id::Id;

/// Events emitted by the stores.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContactBookEvent {
    /// A session became active (login, register or restore).
    SessionStarted {
        /// The user ID.
        user_id: Id,
    },

    /// The active session ended.
    SessionEnded,

    /// The contact list was replaced from the server.
    ContactsLoaded {
        /// Number of contacts received.
        count: usize,
    },

    /// The contact list was emptied.
    ContactsCleared,

    /// A contact was created.
    ContactAdded {
        /// The contact ID.
        contact_id: Id,
    },

    /// A contact was replaced.
    ContactUpdated {
        /// The contact ID.
        contact_id: Id,
    },

    /// A contact was deleted.
    ContactRemoved {
        /// The contact ID.
        contact_id: Id,
    },

    /// A contact's favorite flag changed.
    FavoriteToggled {
        /// The contact ID.
        contact_id: Id,
        /// The new flag value.
        is_favorite: bool,
    },

    /// A store operation failed.
    Error {
        /// Error description.
        message: String,
    },
}

/// Event handler trait.
///
/// Implement this trait to receive store events.
pub trait EventHandler: Send + Sync {
    /// Called when an event occurs.
    fn on_event(&self, event: ContactBookEvent);
}

/// Simple callback-based event handler.
pub struct CallbackHandler<F>
where
    F: Fn(ContactBookEvent) + Send + Sync,
{
    callback: F,
}

impl<F> CallbackHandler<F>
where
    F: Fn(ContactBookEvent) + Send + Sync,
{
    /// Creates a new callback handler.
    pub fn new(callback: F) -> Self {
        CallbackHandler { callback }
    }
}

impl<F> EventHandler for CallbackHandler<F>
where
    F: Fn(ContactBookEvent) + Send + Sync,
{
    fn on_event(&self, event: ContactBookEvent) {
        (self.callback)(event);
    }
}

/// Event dispatcher for managing multiple handlers.
#[derive(Default)]
pub struct EventDispatcher {
    handlers: Vec<Arc<dyn EventHandler>>,
}

impl EventDispatcher {
    /// Creates a new event dispatcher.
    pub fn new() -> Self {
        EventDispatcher {
            handlers: Vec::new(),
        }
    }

    /// Adds an event handler.
    pub fn add_handler(&mut self, handler: Arc<dyn EventHandler>) {
        self.handlers.push(handler);
    }

    /// Removes all handlers.
    pub fn clear_handlers(&mut self) {
        self.handlers.clear();
    }

    /// Returns the number of registered handlers.
    pub fn handler_count(&self) -> usize {
        self.handlers.len()
    }

    /// Dispatches an event to all handlers.
    pub fn dispatch(&self, event: ContactBookEvent) {
        for handler in &self.handlers {
            handler.on_event(event.clone());
        }
    }
}
