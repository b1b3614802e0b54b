// SPDX-FileCopyrightText: 2026 Contactbook Contributors
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Common Test Utilities
//!
//! Shared fixtures for store and orchestrator tests.

#![allow(dead_code)]

pub mod strategies;

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use contactbook_core::api::AuthResponse;
use contactbook_core::{
    ApiResult, CallbackHandler, ClientConfig, Contact, ContactApi, ContactBook,
    ContactBookBuilder, ContactBookEvent, ContactDraft, HealthStatus, Id, MockApi, Storage, User,
};
use tokio::sync::Semaphore;

pub const EMAIL: &str = "ada@example.com";
pub const PASSWORD: &str = "correct horse";

/// A mock service with one account holding three contacts.
pub fn seeded_api() -> (Arc<MockApi>, User) {
    let api = Arc::new(MockApi::new());
    let user = api.add_account("Ada", EMAIL, PASSWORD);
    api.seed_contact(
        &user,
        &ContactDraft::new("Charles Babbage", "charles@example.com").with_phone("555-0101"),
    );
    api.seed_contact(&user, &ContactDraft::new("Mary Somerville", "mary@example.com"));
    api.seed_contact(
        &user,
        &ContactDraft::new("Augustus De Morgan", "augustus@example.com").with_company("UCL"),
    );
    (api, user)
}

/// Builds a book around the shared mock with in-memory storage.
pub fn book_with(api: Arc<MockApi>) -> ContactBook<Arc<MockApi>> {
    ContactBookBuilder::new()
        .config(ClientConfig::default())
        .api(api)
        .storage(Storage::in_memory().unwrap())
        .build()
        .unwrap()
}

/// Builds a book that records every event it emits.
pub fn recording_book(
    api: Arc<MockApi>,
) -> (ContactBook<Arc<MockApi>>, Arc<Mutex<Vec<ContactBookEvent>>>) {
    let log = Arc::new(Mutex::new(Vec::new()));
    let sink = log.clone();
    let book = ContactBookBuilder::new()
        .api(api)
        .storage(Storage::in_memory().unwrap())
        .event_handler(Arc::new(CallbackHandler::new(move |event| {
            sink.lock().unwrap().push(event);
        })))
        .build()
        .unwrap();
    (book, log)
}

/// A logged-in book with the seeded contacts loaded.
pub async fn logged_in_book() -> (ContactBook<Arc<MockApi>>, Arc<MockApi>, User) {
    let (api, user) = seeded_api();
    let book = book_with(api.clone());
    book.start().await;
    let outcome = book.login(EMAIL, PASSWORD).await;
    assert!(outcome.success, "login failed: {}", outcome.message);
    (book, api, user)
}

/// Wraps the mock and holds contact writes until a permit is released.
///
/// Lets a test interleave a session change with an in-flight request.
pub struct GatedApi {
    pub inner: Arc<MockApi>,
    pub gate: Arc<Semaphore>,
}

impl GatedApi {
    pub fn new(inner: Arc<MockApi>) -> Self {
        GatedApi {
            inner,
            gate: Arc::new(Semaphore::new(0)),
        }
    }

    async fn wait(&self) {
        let permit = self.gate.acquire().await.unwrap();
        permit.forget();
    }
}

#[async_trait]
impl ContactApi for GatedApi {
    async fn login(&self, email: &str, password: &str) -> ApiResult<AuthResponse> {
        self.inner.login(email, password).await
    }

    async fn register(&self, name: &str, email: &str, password: &str) -> ApiResult<AuthResponse> {
        self.inner.register(name, email, password).await
    }

    async fn list_contacts(&self, token: &str) -> ApiResult<Vec<Contact>> {
        self.inner.list_contacts(token).await
    }

    async fn create_contact(&self, token: &str, draft: &ContactDraft) -> ApiResult<Contact> {
        self.wait().await;
        self.inner.create_contact(token, draft).await
    }

    async fn update_contact(
        &self,
        token: &str,
        id: &Id,
        draft: &ContactDraft,
    ) -> ApiResult<Contact> {
        self.wait().await;
        self.inner.update_contact(token, id, draft).await
    }

    async fn delete_contact(&self, token: &str, id: &Id) -> ApiResult<()> {
        self.wait().await;
        self.inner.delete_contact(token, id).await
    }

    async fn toggle_favorite(&self, token: &str, id: &Id) -> ApiResult<Contact> {
        self.wait().await;
        self.inner.toggle_favorite(token, id).await
    }

    async fn health(&self) -> ApiResult<HealthStatus> {
        self.inner.health().await
    }
}
