// SPDX-FileCopyrightText: 2026 Contactbook Contributors
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! CLI Configuration

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{bail, Context, Result};
use contactbook_core::ClientConfig;
use url::Url;

/// CLI configuration.
#[derive(Debug, Clone)]
pub struct CliConfig {
    /// Data directory for session storage.
    pub data_dir: PathBuf,
    /// Contacts API base URL.
    pub api_url: String,
    /// Per-request timeout.
    pub timeout: Duration,
}

impl CliConfig {
    /// Returns the core client configuration.
    pub fn client_config(&self) -> ClientConfig {
        ClientConfig::default()
            .with_api_url(&self.api_url)
            .with_data_dir(&self.data_dir)
            .with_timeout(self.timeout)
    }

    /// Returns the session database path.
    pub fn storage_path(&self) -> PathBuf {
        self.client_config().storage_path()
    }
}

/// Default data directory: `~/.contactbook`.
pub fn default_data_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".contactbook")
}

/// Validates an API base URL given on the command line.
pub fn parse_api_url(raw: &str) -> Result<String> {
    let url = Url::parse(raw).with_context(|| format!("Invalid API URL: {}", raw))?;
    match url.scheme() {
        "http" | "https" => {}
        other => bail!("Unsupported API URL scheme '{}', expected http or https", other),
    }
    if url.host_str().is_none() {
        bail!("API URL has no host: {}", raw);
    }
    Ok(raw.trim_end_matches('/').to_string())
}
