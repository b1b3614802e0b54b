// SPDX-FileCopyrightText: 2026 Contactbook Contributors
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Authenticated user identity.

use serde::{Deserialize, Serialize};

use crate::id::Id;

/// Identity fields returned by the auth endpoints.
///
/// This is also the record persisted under the identity storage key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: Id,
    pub name: String,
    pub email: String,
}

impl User {
    /// Creates a user record.
    pub fn new(id: impl Into<Id>, name: impl Into<String>, email: impl Into<String>) -> Self {
        User {
            id: id.into(),
            name: name.into(),
            email: email.into(),
        }
    }
}
