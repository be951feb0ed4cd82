//! # Session Token
//!
//! A pure, reversible mapping between a user id and an opaque token string.
//!
//! ## What This Is (and Is Not)
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Session Token Round Trip                             │
//! │                                                                         │
//! │  user id 42 ──► SessionToken::derive ──► "mock_token_42"               │
//! │                                               │                         │
//! │                    persisted token store ◄────┘                         │
//! │                                               │  (process restart)      │
//! │  Some(42) ◄──── token.user_id() ◄─────────────┘                         │
//! │                                                                         │
//! │  NOT cryptography. The token exists only to round-trip an identity     │
//! │  through the persisted store; a real backend would issue a signed      │
//! │  token here without changing any call sites.                           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! An absent or malformed token never errors - it parses to `None`, which
//! callers treat as "no session".

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Prefix carried by every token this system issues.
pub const TOKEN_PREFIX: &str = "mock_token_";

/// An opaque session token, deterministically derived from a user id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SessionToken(String);

impl SessionToken {
    /// Derives the token for a user id.
    pub fn derive(user_id: u64) -> Self {
        SessionToken(format!("{}{}", TOKEN_PREFIX, user_id))
    }

    /// Wraps a raw persisted string without validating it.
    ///
    /// Validation happens at use: [`SessionToken::user_id`] returns `None`
    /// for anything that was not produced by [`SessionToken::derive`].
    pub fn from_raw(raw: impl Into<String>) -> Self {
        SessionToken(raw.into())
    }

    /// Recovers the user id this token was derived from.
    ///
    /// Returns `None` for malformed tokens (wrong prefix, non-numeric id).
    pub fn user_id(&self) -> Option<u64> {
        self.0.strip_prefix(TOKEN_PREFIX)?.parse().ok()
    }

    /// The raw string form, as persisted in the token store.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for SessionToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip() {
        let token = SessionToken::derive(42);
        assert_eq!(token.as_str(), "mock_token_42");
        assert_eq!(token.user_id(), Some(42));
    }

    #[test]
    fn test_malformed_tokens_parse_to_none() {
        assert_eq!(SessionToken::from_raw("").user_id(), None);
        assert_eq!(SessionToken::from_raw("garbage").user_id(), None);
        assert_eq!(SessionToken::from_raw("mock_token_").user_id(), None);
        assert_eq!(SessionToken::from_raw("mock_token_abc").user_id(), None);
        assert_eq!(SessionToken::from_raw("MOCK_TOKEN_1").user_id(), None);
    }

    #[test]
    fn test_from_raw_round_trip() {
        let persisted = SessionToken::derive(7).as_str().to_string();
        assert_eq!(SessionToken::from_raw(persisted).user_id(), Some(7));
    }
}
