// SPDX-FileCopyrightText: 2026 Contactbook Contributors
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! CLI Commands

pub mod auth;
pub mod contacts;

use anyhow::{bail, Result};
use contactbook_core::ContactBook;
use tracing::debug;

use crate::config::CliConfig;

/// Opens the book and restores any persisted session.
pub async fn open_book(config: &CliConfig) -> Result<ContactBook> {
    let book = ContactBook::open(config.client_config())?;
    book.start().await;
    debug!(
        authenticated = book.session().is_authenticated(),
        contacts = book.contacts().len(),
        "book opened"
    );
    Ok(book)
}

/// Opens the book and restores the persisted session without loading
/// contacts. Makes no network call.
pub fn open_offline(config: &CliConfig) -> Result<ContactBook> {
    let book = ContactBook::open(config.client_config())?;
    let restored = book.session().restore().is_some();
    debug!(authenticated = restored, "session restored without loading contacts");
    Ok(book)
}

/// Opens the book and requires a restored session.
pub async fn open_session(config: &CliConfig) -> Result<ContactBook> {
    let book = open_book(config).await?;
    if !book.session().is_authenticated() {
        bail!("Not logged in. Run 'contactbook login <email>' first.");
    }
    Ok(book)
}
