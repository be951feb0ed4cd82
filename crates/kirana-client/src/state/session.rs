//! # Session State
//!
//! The "who is logged in" state machine.
//!
//! ## State Machine
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Session Lifecycle                                    │
//! │                                                                         │
//! │             restore (valid token)                                       │
//! │             login / signup success                                      │
//! │       ┌─────────────────────────────────┐                               │
//! │       │                                 ▼                               │
//! │  Anonymous                    Authenticated { user }                    │
//! │       ▲                                 │                               │
//! │       └─────────────────────────────────┘                               │
//! │             logout (always succeeds, backend not consulted)             │
//! │                                                                         │
//! │  No automatic expiry: a session lasts until logout or restart.          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::{Arc, Mutex};

use serde::Serialize;
use ts_rs::TS;

use kirana_core::PublicUser;

/// The current authentication state.
#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[serde(tag = "status", rename_all = "camelCase")]
#[ts(export)]
pub enum Session {
    /// Nobody is logged in.
    Anonymous,
    /// A user is logged in.
    Authenticated { user: PublicUser },
}

impl Session {
    pub fn is_authenticated(&self) -> bool {
        matches!(self, Session::Authenticated { .. })
    }

    /// The logged-in user, if any.
    pub fn user(&self) -> Option<&PublicUser> {
        match self {
            Session::Anonymous => None,
            Session::Authenticated { user } => Some(user),
        }
    }
}

/// Shared, mutex-protected session holder.
///
/// Cheap to clone; all clones observe the same session.
#[derive(Debug, Clone)]
pub struct SessionState {
    inner: Arc<Mutex<Session>>,
}

impl SessionState {
    /// Starts Anonymous.
    pub fn new() -> Self {
        SessionState {
            inner: Arc::new(Mutex::new(Session::Anonymous)),
        }
    }

    /// A copy of the current session.
    pub fn current(&self) -> Session {
        self.inner.lock().expect("session mutex poisoned").clone()
    }

    /// A copy of the logged-in user, if any.
    pub fn user(&self) -> Option<PublicUser> {
        self.inner
            .lock()
            .expect("session mutex poisoned")
            .user()
            .cloned()
    }

    /// Replaces the session outright.
    pub fn set(&self, session: Session) {
        *self.inner.lock().expect("session mutex poisoned") = session;
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn alice() -> PublicUser {
        PublicUser {
            id: 2,
            name: "Alice".to_string(),
            email: "a@x.com".to_string(),
        }
    }

    #[test]
    fn test_starts_anonymous() {
        let state = SessionState::new();
        assert_eq!(state.current(), Session::Anonymous);
        assert!(state.user().is_none());
    }

    #[test]
    fn test_transitions() {
        let state = SessionState::new();

        state.set(Session::Authenticated { user: alice() });
        assert!(state.current().is_authenticated());
        assert_eq!(state.user().unwrap().name, "Alice");

        state.set(Session::Anonymous);
        assert!(!state.current().is_authenticated());
    }

    #[test]
    fn test_clones_share_state() {
        let state = SessionState::new();
        let observer = state.clone();

        state.set(Session::Authenticated { user: alice() });
        assert!(observer.current().is_authenticated());
    }

    #[test]
    fn test_serialized_shape() {
        let json = serde_json::to_value(Session::Anonymous).unwrap();
        assert_eq!(json["status"], "anonymous");

        let json = serde_json::to_value(Session::Authenticated { user: alice() }).unwrap();
        assert_eq!(json["status"], "authenticated");
        assert_eq!(json["user"]["email"], "a@x.com");
    }
}
