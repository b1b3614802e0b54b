// SPDX-FileCopyrightText: 2026 Contactbook Contributors
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Client configuration.

use std::path::PathBuf;
use std::time::Duration;

/// Default API endpoint (local development server).
pub const DEFAULT_API_URL: &str = "http://localhost:5000";

/// Database file name inside the data directory.
const STORAGE_FILE: &str = "contactbook.db";

/// Configuration for a [`ContactBook`](crate::ContactBook).
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the contacts API, without the `/api` suffix.
    pub api_url: String,

    /// Directory holding durable session storage.
    pub data_dir: PathBuf,

    /// HTTP timeout per request.
    pub timeout: Duration,

    /// User agent sent with every request.
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            data_dir: PathBuf::from("."),
            timeout: Duration::from_secs(30),
            user_agent: format!(
                "Contactbook/{}",
                option_env!("CARGO_PKG_VERSION").unwrap_or("0.1.0")
            ),
        }
    }
}

impl ClientConfig {
    /// Sets the API base URL. A trailing slash is dropped.
    pub fn with_api_url(mut self, api_url: impl Into<String>) -> Self {
        self.api_url = api_url.into().trim_end_matches('/').to_string();
        self
    }

    /// Sets the data directory.
    pub fn with_data_dir(mut self, data_dir: impl Into<PathBuf>) -> Self {
        self.data_dir = data_dir.into();
        self
    }

    /// Sets the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Path of the session database.
    pub fn storage_path(&self) -> PathBuf {
        self.data_dir.join(STORAGE_FILE)
    }
}
