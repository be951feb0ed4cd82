//! # Backend Error Types
//!
//! Error types for the simulated service.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                    │
//! │                                                                         │
//! │  ValidationError (kirana-core)                                         │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  BackendError (this module) ← adds the service-level failures          │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ApiError (kirana-client) ← serialized for the view layer              │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  View displays the user-facing message                                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! None of these failures are fatal: a rejected operation leaves the store
//! exactly as it was, and the message is safe to show to the user as-is.

use thiserror::Error;

use kirana_core::ValidationError;

/// Simulated service errors.
#[derive(Debug, Error)]
pub enum BackendError {
    /// An existing user already owns this email (exact, case-sensitive match).
    ///
    /// ## When This Occurs
    /// - Signup with an email that is already registered
    #[error("Email already in use.")]
    DuplicateEmail { email: String },

    /// No user matches the given email and password pair.
    ///
    /// Deliberately does not say which of the two was wrong.
    #[error("Invalid credentials.")]
    InvalidCredentials,

    /// The operation requires an authenticated user and none was supplied.
    ///
    /// ## When This Occurs
    /// - addReview / addOrder / getOrders without a current user
    #[error("Authentication required.")]
    AuthenticationRequired,

    /// Input validation failed before any state was touched.
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

impl BackendError {
    /// Creates a DuplicateEmail error.
    pub fn duplicate_email(email: impl Into<String>) -> Self {
        BackendError::DuplicateEmail {
            email: email.into(),
        }
    }
}

/// Result type for backend operations.
pub type BackendResult<T> = Result<T, BackendError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_facing_messages() {
        assert_eq!(
            BackendError::duplicate_email("test@example.com").to_string(),
            "Email already in use."
        );
        assert_eq!(
            BackendError::InvalidCredentials.to_string(),
            "Invalid credentials."
        );
        assert_eq!(
            BackendError::AuthenticationRequired.to_string(),
            "Authentication required."
        );
    }

    #[test]
    fn test_validation_passes_through() {
        let err: BackendError = ValidationError::Required {
            field: "review text".to_string(),
        }
        .into();
        assert_eq!(err.to_string(), "review text is required");
    }
}
