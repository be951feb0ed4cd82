//! # Auth Repository
//!
//! Identity operations for the simulated service.
//!
//! ## Session Model
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Identity Round Trip                                  │
//! │                                                                         │
//! │  signup / login                                                         │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  AuthPayload { user: PublicUser, token: SessionToken }                  │
//! │       │                                                                 │
//! │       │  client persists the token                                      │
//! │       ▼                                                                 │
//! │  ... process restart ...                                                │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  check_session(token) ──► Some(PublicUser)   (token maps to a user)     │
//! │                     └───► None               (absent / malformed /      │
//! │                                               unknown id - NEVER an     │
//! │                                               error, just anonymous)    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::Serialize;
use tokio::time::sleep;
use tracing::{debug, info};

use kirana_core::validation::{validate_display_name, validate_email, validate_password};
use kirana_core::{PublicUser, SessionToken};

use crate::error::{BackendError, BackendResult};
use crate::store::{SharedStore, User};
use crate::{CHECK_SESSION_LATENCY, LOGIN_LATENCY, SIGNUP_LATENCY};

/// What a successful signup or login returns.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthPayload {
    /// The public view of the authenticated user (never the credential).
    pub user: PublicUser,

    /// Token derived from the user id, for the client to persist.
    pub token: SessionToken,
}

/// Repository for identity operations.
#[derive(Debug, Clone)]
pub struct AuthRepository {
    store: SharedStore,
}

impl AuthRepository {
    pub(crate) fn new(store: SharedStore) -> Self {
        AuthRepository { store }
    }

    /// Registers a new user.
    ///
    /// ## Behavior
    /// - Fails with [`BackendError::DuplicateEmail`] if any existing user
    ///   holds the same email (exact, case-sensitive match); the existing
    ///   record is left untouched
    /// - Otherwise creates the user with a fresh unique id and returns the
    ///   public view plus a token derived from that id
    pub async fn signup(
        &self,
        name: &str,
        email: &str,
        password: &str,
    ) -> BackendResult<AuthPayload> {
        sleep(SIGNUP_LATENCY).await;

        validate_display_name(name)?;
        validate_email(email)?;
        validate_password(password)?;

        let mut data = self.store.lock().expect("store mutex poisoned");

        if data.users.iter().any(|u| u.email == email) {
            debug!(email = %email, "signup rejected: email taken");
            return Err(BackendError::duplicate_email(email));
        }

        let id = data.allocate_user_id();
        let user = User {
            id,
            name: name.trim().to_string(),
            email: email.to_string(),
            password: password.to_string(),
        };
        let public = user.public_view();
        data.users.push(user);

        info!(user_id = %id, "user signed up");

        Ok(AuthPayload {
            user: public,
            token: SessionToken::derive(id),
        })
    }

    /// Authenticates an existing user.
    ///
    /// Fails with [`BackendError::InvalidCredentials`] unless a user matches
    /// both email and password exactly. The token is derived identically to
    /// signup, so a login token and a signup token for the same user are
    /// interchangeable.
    pub async fn login(&self, email: &str, password: &str) -> BackendResult<AuthPayload> {
        sleep(LOGIN_LATENCY).await;

        let data = self.store.lock().expect("store mutex poisoned");

        let user = data
            .users
            .iter()
            .find(|u| u.email == email && u.password == password)
            .ok_or(BackendError::InvalidCredentials)?;

        info!(user_id = %user.id, "user logged in");

        Ok(AuthPayload {
            user: user.public_view(),
            token: SessionToken::derive(user.id),
        })
    }

    /// Resolves a persisted token back to a user.
    ///
    /// Never fails: a malformed token or one whose id no longer resolves
    /// degrades to `None`, which the client treats as anonymous.
    pub async fn check_session(&self, token: &SessionToken) -> Option<PublicUser> {
        sleep(CHECK_SESSION_LATENCY).await;

        let user_id = token.user_id()?;

        let data = self.store.lock().expect("store mutex poisoned");
        let user = data.find_user_by_id(user_id)?;

        debug!(user_id = %user_id, "session resolved");
        Some(user.public_view())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
