// SPDX-FileCopyrightText: 2026 Contactbook Contributors
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Contactbook Core Library
//!
//! Session and contact state for a contact manager backed by a remote API.
//!
//! # Example
//!
//! ```ignore
//! use contactbook_core::{ClientConfig, ContactBook, ContactDraft};
//!
//! let book = ContactBook::open(ClientConfig::default().with_data_dir("/tmp/cb"))?;
//! book.start().await;
//!
//! let outcome = book.login("ada@example.com", "secret").await;
//! if outcome.success {
//!     book.contacts()
//!         .add_contact(&ContactDraft::new("Charles", "charles@example.com"))
//!         .await;
//!     for contact in book.contacts().view() {
//!         println!("{} <{}>", contact.name, contact.email);
//!     }
//! }
//! ```

pub mod api;
pub mod book;
pub mod config;
pub mod contact;
pub mod contacts;
pub mod error;
pub mod events;
pub mod id;
pub mod session;
pub mod storage;
pub mod user;

pub use api::{ApiError, ApiResult, ContactApi, HealthStatus, HttpApi, MockApi};
pub use book::{ContactBook, ContactBookBuilder};
pub use config::{ClientConfig, DEFAULT_API_URL};
pub use contact::{Contact, ContactDraft};
pub use contacts::{ContactStore, SortMode};
pub use error::{ContactBookError, ContactBookResult};
pub use events::{CallbackHandler, ContactBookEvent, EventDispatcher, EventHandler};
pub use id::Id;
pub use session::{AuthOutcome, InitState, Session, SessionStore};
pub use storage::{Storage, StorageError};
pub use user::User;
