// SPDX-FileCopyrightText: 2026 Contactbook Contributors
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Session Store
//!
//! Owns the authentication lifecycle. Every identity change is mirrored
//! to durable storage before the operation returns, so a restarted
//! process restores the last committed identity.

use std::sync::Arc;

use parking_lot::RwLock;
use tracing::{debug, error, warn};

use super::{AuthOutcome, InitState, Session};
use crate::api::{ApiError, AuthResponse, ContactApi};
use crate::events::{ContactBookEvent, EventDispatcher};
use crate::storage::{Storage, StorageError};
use crate::user::User;

/// Storage key of the JSON identity record.
pub const USER_KEY: &str = "contactManager_user";
/// Storage key of the bearer token.
pub const TOKEN_KEY: &str = "contactManager_token";

pub const LOGIN_SUCCEEDED: &str = "Successfully logged in!";
pub const LOGIN_FAILED: &str = "Login failed";
pub const REGISTER_SUCCEEDED: &str = "Account created successfully! Welcome to Contact Manager.";
pub const REGISTER_FAILED: &str = "Registration failed";
pub const NETWORK_ERROR: &str = "Network error. Please try again.";

#[derive(Default)]
struct SessionState {
    init: InitState,
    session: Option<Session>,
}

/// Holds the current identity and its token.
pub struct SessionStore<A: ContactApi> {
    api: Arc<A>,
    storage: Arc<Storage>,
    events: Arc<EventDispatcher>,
    state: RwLock<SessionState>,
}

impl<A: ContactApi> SessionStore<A> {
    /// Creates a store in the `Uninitialized` state.
    pub fn new(api: Arc<A>, storage: Arc<Storage>, events: Arc<EventDispatcher>) -> Self {
        SessionStore {
            api,
            storage,
            events,
            state: RwLock::new(SessionState::default()),
        }
    }

    // === Startup ===

    /// Restores the persisted identity and moves to `Ready`.
    ///
    /// An identity record without a token, or one that cannot be decoded,
    /// is discarded along with its storage entries.
    pub fn restore(&self) -> Option<Session> {
        self.state.write().init = InitState::Restoring;

        let restored = match self.read_persisted() {
            Ok(Some(session)) => Some(session),
            Ok(None) => None,
            Err(e) => {
                warn!(error = %e, "discarding unreadable persisted session");
                self.erase_persisted();
                None
            }
        };

        {
            let mut state = self.state.write();
            state.session = restored.clone();
            state.init = InitState::Ready;
        }

        match &restored {
            Some(session) => {
                debug!(user_id = %session.user().id, "session restored");
                self.events.dispatch(ContactBookEvent::SessionStarted {
                    user_id: session.user().id.clone(),
                });
            }
            None => debug!("no persisted session"),
        }

        restored
    }

    fn read_persisted(&self) -> Result<Option<Session>, StorageError> {
        let user: Option<User> = self.storage.get_json(USER_KEY)?;
        let token = self.storage.get(TOKEN_KEY)?;

        match (user, token) {
            (Some(user), Some(token)) => Ok(Some(Session::new(user, token))),
            (Some(user), None) => {
                warn!(user_id = %user.id, "persisted identity has no token, discarding");
                self.erase_persisted();
                Ok(None)
            }
            (None, Some(_)) => {
                debug!("removing orphaned token");
                self.erase_persisted();
                Ok(None)
            }
            (None, None) => Ok(None),
        }
    }

    // === Authentication ===

    /// Logs in with email and password.
    pub async fn login(&self, email: &str, password: &str) -> AuthOutcome {
        match self.api.login(email, password).await {
            Ok(response) => {
                self.commit(response);
                AuthOutcome::succeeded(LOGIN_SUCCEEDED)
            }
            Err(e) => Self::failure(e, LOGIN_FAILED),
        }
    }

    /// Creates an account and logs in as it.
    pub async fn register(&self, name: &str, email: &str, password: &str) -> AuthOutcome {
        match self.api.register(name, email, password).await {
            Ok(response) => {
                self.commit(response);
                AuthOutcome::succeeded(REGISTER_SUCCEEDED)
            }
            Err(e) => Self::failure(e, REGISTER_FAILED),
        }
    }

    /// Ends the session and forgets the persisted identity. No network call.
    pub fn logout(&self) {
        let previous = self.state.write().session.take();
        self.erase_persisted();

        if let Some(session) = previous {
            debug!(user_id = %session.user().id, "logged out");
            self.events.dispatch(ContactBookEvent::SessionEnded);
        }
    }

    fn commit(&self, response: AuthResponse) {
        let session = Session::new(response.user, response.token);

        if let Err(e) = self.persist(&session) {
            error!(error = %e, "failed to persist session");
        }

        self.state.write().session = Some(session.clone());
        debug!(user_id = %session.user().id, "session started");
        self.events.dispatch(ContactBookEvent::SessionStarted {
            user_id: session.user().id.clone(),
        });
    }

    fn persist(&self, session: &Session) -> Result<(), StorageError> {
        self.storage.set_json(USER_KEY, session.user())?;
        self.storage.set(TOKEN_KEY, session.token())
    }

    fn erase_persisted(&self) {
        for key in [USER_KEY, TOKEN_KEY] {
            if let Err(e) = self.storage.remove(key) {
                error!(error = %e, key, "failed to remove persisted session entry");
            }
        }
    }

    fn failure(error: ApiError, fallback: &str) -> AuthOutcome {
        match &error {
            ApiError::Rejected { status, .. } => {
                debug!(status, "authentication rejected");
                AuthOutcome::failed(error.server_message().unwrap_or(fallback))
            }
            _ => {
                warn!(error = %error, "authentication request failed");
                AuthOutcome::failed(NETWORK_ERROR)
            }
        }
    }

    // === Accessors ===

    /// Returns the startup phase.
    pub fn init_state(&self) -> InitState {
        self.state.read().init
    }

    /// True until `restore` has completed.
    pub fn loading(&self) -> bool {
        self.init_state() != InitState::Ready
    }

    /// Returns a copy of the current session.
    pub fn session(&self) -> Option<Session> {
        self.state.read().session.clone()
    }

    /// Returns the current user.
    pub fn user(&self) -> Option<User> {
        self.state.read().session.as_ref().map(|s| s.user().clone())
    }

    /// Returns the bearer token of the current session.
    pub fn token(&self) -> Option<String> {
        self.state
            .read()
            .session
            .as_ref()
            .map(|s| s.token().to_string())
    }

    /// Returns true if a session is active.
    pub fn is_authenticated(&self) -> bool {
        self.state.read().session.is_some()
    }
}
