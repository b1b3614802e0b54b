// SPDX-FileCopyrightText: 2026 Contactbook Contributors
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! HTTP implementation of the contacts API.

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response, Url};
use serde::de::DeserializeOwned;

use super::error::{ApiError, ApiResult};
use super::types::{
    AuthResponse, ContactList, ErrorBody, HealthStatus, LoginRequest, RegisterRequest,
};
use super::ContactApi;
use crate::config::ClientConfig;
use crate::contact::{Contact, ContactDraft};
use crate::id::Id;

/// Talks to the contacts service over HTTP(S).
pub struct HttpApi {
    client: Client,
    base: Url,
}

impl HttpApi {
    /// Creates a client from config.
    pub fn new(config: &ClientConfig) -> ApiResult<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(|e| ApiError::Client(e.to_string()))?;

        let base = Url::parse(&config.api_url)
            .map_err(|e| ApiError::Client(format!("invalid API URL {}: {}", config.api_url, e)))?;
        if base.cannot_be_a_base() {
            return Err(ApiError::Client(format!(
                "API URL cannot carry a path: {}",
                config.api_url
            )));
        }

        Ok(Self { client, base })
    }

    /// Returns the base URL.
    pub fn base_url(&self) -> &str {
        self.base.as_str().trim_end_matches('/')
    }

    /// Appends `api/<segments>` to the base URL, percent-encoding each segment.
    fn url(&self, segments: &[&str]) -> Url {
        let mut url = self.base.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().push("api").extend(segments);
        }
        url
    }

    fn contact_url(&self, id: &Id, action: Option<&str>) -> Url {
        match action {
            Some(action) => self.url(&["contacts", id.as_str(), action]),
            None => self.url(&["contacts", id.as_str()]),
        }
    }

    /// Sends the request and maps non-2xx responses to `Rejected`.
    async fn execute(request: RequestBuilder) -> ApiResult<Response> {
        let response = request
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        // The error payload is best effort; a missing or malformed body
        // still yields a rejection.
        let message = response
            .json::<ErrorBody>()
            .await
            .ok()
            .and_then(|body| body.message);

        Err(ApiError::Rejected {
            status: status.as_u16(),
            message,
        })
    }

    async fn fetch<T: DeserializeOwned>(request: RequestBuilder) -> ApiResult<T> {
        Self::execute(request)
            .await?
            .json::<T>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }
}

#[async_trait]
impl ContactApi for HttpApi {
    async fn login(&self, email: &str, password: &str) -> ApiResult<AuthResponse> {
        let body = LoginRequest { email, password };
        Self::fetch(self.client.post(self.url(&["auth", "login"])).json(&body)).await
    }

    async fn register(&self, name: &str, email: &str, password: &str) -> ApiResult<AuthResponse> {
        let body = RegisterRequest {
            name,
            email,
            password,
        };
        Self::fetch(self.client.post(self.url(&["auth", "register"])).json(&body)).await
    }

    async fn list_contacts(&self, token: &str) -> ApiResult<Vec<Contact>> {
        let request = self.client.get(self.url(&["contacts"])).bearer_auth(token);
        let list: ContactList = Self::fetch(request).await?;
        Ok(list.contacts)
    }

    async fn create_contact(&self, token: &str, draft: &ContactDraft) -> ApiResult<Contact> {
        let request = self
            .client
            .post(self.url(&["contacts"]))
            .bearer_auth(token)
            .json(draft);
        Self::fetch(request).await
    }

    async fn update_contact(
        &self,
        token: &str,
        id: &Id,
        draft: &ContactDraft,
    ) -> ApiResult<Contact> {
        let request = self
            .client
            .put(self.contact_url(id, None))
            .bearer_auth(token)
            .json(draft);
        Self::fetch(request).await
    }

    async fn delete_contact(&self, token: &str, id: &Id) -> ApiResult<()> {
        let request = self.client.delete(self.contact_url(id, None)).bearer_auth(token);
        Self::execute(request).await?;
        Ok(())
    }

    async fn toggle_favorite(&self, token: &str, id: &Id) -> ApiResult<Contact> {
        let request = self
            .client
            .post(self.contact_url(id, Some("toggle-favorite")))
            .bearer_auth(token);
        Self::fetch(request).await
    }

    async fn health(&self) -> ApiResult<HealthStatus> {
        Self::fetch(self.client.get(self.url(&["health"]))).await
    }
}
