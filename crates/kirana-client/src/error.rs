//! # Client Error Types
//!
//! The view-facing error shape.
//!
//! ## Why a Separate Error Type?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Translation                                    │
//! │                                                                         │
//! │  CoreError / BackendError (internal enums, structured variants)         │
//! │       │                                                                 │
//! │       ▼  From impls in this module                                      │
//! │  ApiError { code, message }                                             │
//! │       │                                                                 │
//! │       ▼  serialized as-is                                               │
//! │  View layer: switch on `code`, show `message` verbatim                  │
//! │                                                                         │
//! │  The view never matches on internal enum shapes, so the backend can     │
//! │  grow new failure variants without breaking the presentation layer.     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::Serialize;
use thiserror::Error;
use ts_rs::TS;

use kirana_backend::BackendError;
use kirana_core::CoreError;

/// Machine-readable error category for the view layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, TS)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[ts(export)]
pub enum ErrorCode {
    /// Signup email already registered.
    DuplicateEmail,
    /// Login email/password pair did not match.
    InvalidCredentials,
    /// The operation needs a logged-in user.
    AuthenticationRequired,
    /// Input rejected before any state changed.
    Validation,
    /// Unknown product id.
    NotFound,
    /// Cart mutation rejected (full cart, quantity cap, empty checkout).
    Cart,
}

/// A user-displayable operation failure.
///
/// `message` is safe to render verbatim; `code` lets the view pick which
/// form field or banner to attach it to.
#[derive(Debug, Clone, Error, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
#[error("{message}")]
pub struct ApiError {
    pub code: ErrorCode,
    pub message: String,
}

impl ApiError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        ApiError {
            code,
            message: message.into(),
        }
    }

    /// Unknown product id.
    pub fn not_found(product_id: u32) -> Self {
        ApiError::new(ErrorCode::NotFound, format!("Product {product_id} not found."))
    }

    /// Cart-level rejection with a caller-supplied message.
    pub fn cart(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::Cart, message)
    }
}

impl From<BackendError> for ApiError {
    fn from(err: BackendError) -> Self {
        let code = match &err {
            BackendError::DuplicateEmail { .. } => ErrorCode::DuplicateEmail,
            BackendError::InvalidCredentials => ErrorCode::InvalidCredentials,
            BackendError::AuthenticationRequired => ErrorCode::AuthenticationRequired,
            BackendError::Validation(_) => ErrorCode::Validation,
        };
        ApiError::new(code, err.to_string())
    }
}

impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        let code = match &err {
            CoreError::ProductNotFound(_) => ErrorCode::NotFound,
            CoreError::CartTooLarge { .. } | CoreError::QuantityTooLarge { .. } => ErrorCode::Cart,
            CoreError::Validation(_) => ErrorCode::Validation,
        };
        ApiError::new(code, err.to_string())
    }
}

/// Result type for controller operations.
pub type ApiResult<T> = Result<T, ApiError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backend_errors_keep_their_messages() {
        let err: ApiError = BackendError::InvalidCredentials.into();
        assert_eq!(err.code, ErrorCode::InvalidCredentials);
        assert_eq!(err.message, "Invalid credentials.");

        let err: ApiError = BackendError::duplicate_email("a@x.com").into();
        assert_eq!(err.code, ErrorCode::DuplicateEmail);
        assert_eq!(err.message, "Email already in use.");
    }

    #[test]
    fn test_core_errors_map_to_codes() {
        let err: ApiError = CoreError::ProductNotFound(99).into();
        assert_eq!(err.code, ErrorCode::NotFound);

        let err: ApiError = CoreError::CartTooLarge { max: 100 }.into();
        assert_eq!(err.code, ErrorCode::Cart);
    }

    #[test]
    fn test_serialized_shape() {
        let err = ApiError::new(ErrorCode::AuthenticationRequired, "Authentication required.");
        let json = serde_json::to_value(&err).unwrap();
        assert_eq!(json["code"], "AUTHENTICATION_REQUIRED");
        assert_eq!(json["message"], "Authentication required.");
    }
}
