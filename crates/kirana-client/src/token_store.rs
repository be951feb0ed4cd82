//! # Token Store
//!
//! The persistence seam for the session token.
//!
//! ## One Key, One Value
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Token Persistence                                    │
//! │                                                                         │
//! │  Exactly one entry survives a process restart:                          │
//! │                                                                         │
//! │      "authToken" ──► "mock_token_42"     (or absent: no session)        │
//! │                                                                         │
//! │  StoreController ──► TokenStore (trait)                                 │
//! │                          │                                              │
//! │                          ├── browser embedder: localStorage             │
//! │                          └── MemoryTokenStore: tests, headless use      │
//! │                                                                         │
//! │  The controller never knows where the token actually lives.             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::fmt::Debug;
use std::sync::Mutex;

/// Storage key under which the session token is persisted.
pub const AUTH_TOKEN_KEY: &str = "authToken";

/// Where the session token survives process restarts.
///
/// Implementations are infallible by contract: a storage backend that can
/// fail (quota, permissions) should degrade to "no token persisted", which
/// the controller already treats as an anonymous start.
pub trait TokenStore: Debug + Send + Sync {
    /// The persisted token, if any.
    fn load(&self) -> Option<String>;

    /// Persists the token, replacing any previous value.
    fn save(&self, token: &str);

    /// Removes the persisted token. No-op when absent.
    fn clear(&self);
}

/// In-memory token store for tests and headless embedders.
#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    token: Mutex<Option<String>>,
}

impl MemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts with a token already persisted, as if left by a previous run.
    pub fn with_token(token: impl Into<String>) -> Self {
        MemoryTokenStore {
            token: Mutex::new(Some(token.into())),
        }
    }
}

impl TokenStore for MemoryTokenStore {
    fn load(&self) -> Option<String> {
        self.token.lock().expect("token mutex poisoned").clone()
    }

    fn save(&self, token: &str) {
        *self.token.lock().expect("token mutex poisoned") = Some(token.to_string());
    }

    fn clear(&self) {
        *self.token.lock().expect("token mutex poisoned") = None;
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_save_load_clear_cycle() {
        let store = MemoryTokenStore::new();
        assert_eq!(store.load(), None);

        store.save("mock_token_7");
        assert_eq!(store.load(), Some("mock_token_7".to_string()));

        store.save("mock_token_8"); // replaces
        assert_eq!(store.load(), Some("mock_token_8".to_string()));

        store.clear();
        assert_eq!(store.load(), None);

        store.clear(); // no-op when absent
        assert_eq!(store.load(), None);
    }

    #[test]
    fn test_with_token_starts_populated() {
        let store = MemoryTokenStore::with_token("mock_token_1");
        assert_eq!(store.load(), Some("mock_token_1".to_string()));
    }
}
