// SPDX-FileCopyrightText: 2026 Contactbook Contributors
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Contacts API Client
//!
//! Typed access to the remote contacts service.
//!
//! # Overview
//!
//! [`ContactApi`] is the seam between the stores and the network. The
//! stores only ever talk to the trait, so the same code runs against:
//! - [`HttpApi`] - the real service over HTTP
//! - [`MockApi`] - an in-memory stand-in for tests and offline demos
//!
//! # Endpoints
//!
//! | Call | Request |
//! |---|---|
//! | login | `POST /api/auth/login` |
//! | register | `POST /api/auth/register` |
//! | list | `GET /api/contacts` |
//! | create | `POST /api/contacts` |
//! | update | `PUT /api/contacts/{id}` |
//! | delete | `DELETE /api/contacts/{id}` |
//! | toggle favorite | `POST /api/contacts/{id}/toggle-favorite` |
//! | health | `GET /api/health` |
//!
//! All contact calls carry `Authorization: Bearer <token>`.

mod error;
mod http;
mod mock;
mod types;

use std::sync::Arc;

use async_trait::async_trait;

use crate::contact::{Contact, ContactDraft};
use crate::id::Id;

pub use error::{ApiError, ApiResult};
pub use http::HttpApi;
pub use mock::{MockApi, MOCK_CREATED_AT};
pub use types::{
    AuthResponse, ContactList, ErrorBody, HealthStatus, LoginRequest, RegisterRequest,
};

/// Remote contacts service.
#[async_trait]
pub trait ContactApi: Send + Sync {
    /// Exchanges credentials for a user and bearer token.
    async fn login(&self, email: &str, password: &str) -> ApiResult<AuthResponse>;

    /// Creates an account and returns its user and bearer token.
    async fn register(&self, name: &str, email: &str, password: &str) -> ApiResult<AuthResponse>;

    /// Fetches the full contact list of the token's owner.
    async fn list_contacts(&self, token: &str) -> ApiResult<Vec<Contact>>;

    /// Creates a contact and returns it with server-assigned fields.
    async fn create_contact(&self, token: &str, draft: &ContactDraft) -> ApiResult<Contact>;

    /// Replaces the fields of an existing contact.
    async fn update_contact(&self, token: &str, id: &Id, draft: &ContactDraft)
        -> ApiResult<Contact>;

    /// Deletes a contact.
    async fn delete_contact(&self, token: &str, id: &Id) -> ApiResult<()>;

    /// Flips the favorite flag of a contact and returns the result.
    async fn toggle_favorite(&self, token: &str, id: &Id) -> ApiResult<Contact>;

    /// Probes service liveness.
    async fn health(&self) -> ApiResult<HealthStatus>;
}

#[async_trait]
impl<T: ContactApi + ?Sized> ContactApi for Arc<T> {
    async fn login(&self, email: &str, password: &str) -> ApiResult<AuthResponse> {
        (**self).login(email, password).await
    }

    async fn register(&self, name: &str, email: &str, password: &str) -> ApiResult<AuthResponse> {
        (**self).register(name, email, password).await
    }

    async fn list_contacts(&self, token: &str) -> ApiResult<Vec<Contact>> {
        (**self).list_contacts(token).await
    }

    async fn create_contact(&self, token: &str, draft: &ContactDraft) -> ApiResult<Contact> {
        (**self).create_contact(token, draft).await
    }

    async fn update_contact(
        &self,
        token: &str,
        id: &Id,
        draft: &ContactDraft,
    ) -> ApiResult<Contact> {
        (**self).update_contact(token, id, draft).await
    }

    async fn delete_contact(&self, token: &str, id: &Id) -> ApiResult<()> {
        (**self).delete_contact(token, id).await
    }

    async fn toggle_favorite(&self, token: &str, id: &Id) -> ApiResult<Contact> {
        (**self).toggle_favorite(token, id).await
    }

    async fn health(&self) -> ApiResult<HealthStatus> {
        (**self).health().await
    }
}
