// SPDX-FileCopyrightText: 2026 Contactbook Contributors
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Session Management
//!
//! The authenticated identity, its bearer token, and the store that owns
//! their lifecycle.

mod store;

pub use store::{
    SessionStore, LOGIN_FAILED, LOGIN_SUCCEEDED, NETWORK_ERROR, REGISTER_FAILED,
    REGISTER_SUCCEEDED, TOKEN_KEY, USER_KEY,
};

use std::fmt;

use zeroize::Zeroizing;

use crate::user::User;

/// An authenticated user plus the bearer token issued for them.
#[derive(Clone, PartialEq, Eq)]
pub struct Session {
    user: User,
    token: Zeroizing<String>,
}

impl Session {
    /// Creates a session.
    pub fn new(user: User, token: impl Into<String>) -> Self {
        Session {
            user,
            token: Zeroizing::new(token.into()),
        }
    }

    /// The authenticated user.
    pub fn user(&self) -> &User {
        &self.user
    }

    /// The bearer token.
    pub fn token(&self) -> &str {
        &self.token
    }
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("user", &self.user)
            .field("token", &"<redacted>")
            .finish()
    }
}

/// Result of a login or register attempt.
///
/// Failures are values, never errors: `message` is always fit to show the
/// user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthOutcome {
    pub success: bool,
    pub message: String,
}

impl AuthOutcome {
    /// A successful outcome.
    pub fn succeeded(message: impl Into<String>) -> Self {
        AuthOutcome {
            success: true,
            message: message.into(),
        }
    }

    /// A failed outcome.
    pub fn failed(message: impl Into<String>) -> Self {
        AuthOutcome {
            success: false,
            message: message.into(),
        }
    }
}

/// Startup phase of the session store.
///
/// Consumers must not act on the identity before `Ready`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InitState {
    /// `restore` has not run.
    #[default]
    Uninitialized,
    /// Reading the persisted identity.
    Restoring,
    /// Identity (or its absence) is settled.
    Ready,
}
