// SPDX-FileCopyrightText: 2026 Contactbook Contributors
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Contactbook
//!
//! Top-level orchestrator. One instance is constructed at startup and
//! handed to whatever presents the data; it owns the session store and
//! the contact store and keeps the contact store in step with the
//! session.

use std::sync::Arc;

use crate::api::{ApiResult, ContactApi, HealthStatus, HttpApi};
use crate::config::ClientConfig;
use crate::contacts::ContactStore;
use crate::error::{ContactBookError, ContactBookResult};
use crate::events::{EventDispatcher, EventHandler};
use crate::session::{AuthOutcome, Session, SessionStore};
use crate::storage::Storage;

/// Session and contact state backed by a contacts API.
pub struct ContactBook<A: ContactApi = HttpApi> {
    config: ClientConfig,
    api: Arc<A>,
    events: Arc<EventDispatcher>,
    session: SessionStore<A>,
    contacts: ContactStore<A>,
}

impl ContactBook<HttpApi> {
    /// Opens the default HTTP client and on-disk storage from config.
    pub fn open(config: ClientConfig) -> ContactBookResult<Self> {
        let api = HttpApi::new(&config)?;
        let storage = Storage::open(config.storage_path())?;
        Ok(Self::new(config, api, storage, EventDispatcher::new()))
    }
}

impl<A: ContactApi> ContactBook<A> {
    /// Wires the stores around the given parts.
    pub fn new(config: ClientConfig, api: A, storage: Storage, events: EventDispatcher) -> Self {
        let api = Arc::new(api);
        let storage = Arc::new(storage);
        let events = Arc::new(events);

        ContactBook {
            session: SessionStore::new(api.clone(), storage, events.clone()),
            contacts: ContactStore::new(api.clone(), events.clone()),
            config,
            api,
            events,
        }
    }

    /// Restores the persisted session and, if one exists, loads its contacts.
    pub async fn start(&self) -> Option<Session> {
        let session = self.session.restore()?;
        self.contacts.attach(&session).await;
        Some(session)
    }

    /// Logs in and loads the user's contacts on success.
    pub async fn login(&self, email: &str, password: &str) -> AuthOutcome {
        let outcome = self.session.login(email, password).await;
        self.sync_contacts(&outcome).await;
        outcome
    }

    /// Registers and loads the (empty) contact list on success.
    pub async fn register(&self, name: &str, email: &str, password: &str) -> AuthOutcome {
        let outcome = self.session.register(name, email, password).await;
        self.sync_contacts(&outcome).await;
        outcome
    }

    async fn sync_contacts(&self, outcome: &AuthOutcome) {
        if !outcome.success {
            return;
        }
        if let Some(session) = self.session.session() {
            self.contacts.attach(&session).await;
        }
    }

    /// Ends the session and empties the contact store. No network call.
    pub fn logout(&self) {
        self.session.logout();
        self.contacts.detach();
    }

    /// Probes the API.
    pub async fn health(&self) -> ApiResult<HealthStatus> {
        self.api.health().await
    }

    /// The session store.
    pub fn session(&self) -> &SessionStore<A> {
        &self.session
    }

    /// The contact store.
    pub fn contacts(&self) -> &ContactStore<A> {
        &self.contacts
    }

    /// The API client.
    pub fn api(&self) -> &A {
        &self.api
    }

    /// The event dispatcher.
    pub fn events(&self) -> &Arc<EventDispatcher> {
        &self.events
    }

    /// Returns the configuration.
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }
}

/// Builder for [`ContactBook`].
pub struct ContactBookBuilder<A: ContactApi> {
    config: ClientConfig,
    api: Option<A>,
    storage: Option<Storage>,
    events: EventDispatcher,
}

impl<A: ContactApi> ContactBookBuilder<A> {
    /// Creates a new builder with default configuration.
    pub fn new() -> Self {
        ContactBookBuilder {
            config: ClientConfig::default(),
            api: None,
            storage: None,
            events: EventDispatcher::new(),
        }
    }

    /// Sets the configuration.
    pub fn config(mut self, config: ClientConfig) -> Self {
        self.config = config;
        self
    }

    /// Sets the API client.
    pub fn api(mut self, api: A) -> Self {
        self.api = Some(api);
        self
    }

    /// Sets the storage. Defaults to the database under the data directory.
    pub fn storage(mut self, storage: Storage) -> Self {
        self.storage = Some(storage);
        self
    }

    /// Registers an event handler.
    pub fn event_handler(mut self, handler: Arc<dyn EventHandler>) -> Self {
        self.events.add_handler(handler);
        self
    }

    /// Builds the instance.
    pub fn build(self) -> ContactBookResult<ContactBook<A>> {
        let api = self
            .api
            .ok_or_else(|| ContactBookError::Configuration("no API client configured".into()))?;
        let storage = match self.storage {
            Some(storage) => storage,
            None => Storage::open(self.config.storage_path())?,
        };
        Ok(ContactBook::new(self.config, api, storage, self.events))
    }
}

impl<A: ContactApi> Default for ContactBookBuilder<A> {
    fn default() -> Self {
        Self::new()
    }
}
