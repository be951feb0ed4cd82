//! # Validation Module
//!
//! Input validation rules for Kirana.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Browser forms (out of scope)                                 │
//! │  ├── `required` attributes, immediate feedback                         │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE, called by the backend before any mutation       │
//! │  ├── Empty / overlong fields                                           │
//! │  ├── Rating range, email shape                                         │
//! │  └── A failed validation leaves the store exactly as it was            │
//! │                                                                         │
//! │  Defense in depth: the backend never trusts the form layer.            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use crate::error::ValidationError;
use crate::{MAX_ITEM_QUANTITY, MAX_RATING, MIN_RATING};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Identity Validators
// =============================================================================

/// Validates a user's display name.
///
/// ## Rules
/// - Must not be empty (after trimming)
/// - Must be at most 100 characters
pub fn validate_display_name(name: &str) -> ValidationResult<()> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: "name".to_string(),
        });
    }

    if name.len() > 100 {
        return Err(ValidationError::TooLong {
            field: "name".to_string(),
            max: 100,
        });
    }

    Ok(())
}

/// Validates an email address.
///
/// ## Rules
/// - Must not be empty
/// - Must contain exactly one `@` with non-empty local part and domain
/// - Must be at most 254 characters
///
/// Deliberately loose: the simulated backend matches emails by exact string
/// comparison, so this only has to reject obviously malformed input.
pub fn validate_email(email: &str) -> ValidationResult<()> {
    let email = email.trim();

    if email.is_empty() {
        return Err(ValidationError::Required {
            field: "email".to_string(),
        });
    }

    if email.len() > 254 {
        return Err(ValidationError::TooLong {
            field: "email".to_string(),
            max: 254,
        });
    }

    let mut parts = email.split('@');
    let local = parts.next().unwrap_or("");
    let domain = parts.next().unwrap_or("");
    if local.is_empty() || domain.is_empty() || parts.next().is_some() {
        return Err(ValidationError::InvalidFormat {
            field: "email".to_string(),
            reason: "must look like name@domain".to_string(),
        });
    }

    Ok(())
}

/// Validates a password.
///
/// ## Rules
/// - Must not be empty
///
/// No strength requirements: credentials here exist only to exercise the
/// simulated login flow, never to protect anything.
pub fn validate_password(password: &str) -> ValidationResult<()> {
    if password.is_empty() {
        return Err(ValidationError::Required {
            field: "password".to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Review Validators
// =============================================================================

/// Validates review body text.
///
/// ## Rules
/// - Must not be empty (after trimming)
/// - Must be at most 1000 characters
pub fn validate_review_text(text: &str) -> ValidationResult<()> {
    let text = text.trim();

    if text.is_empty() {
        return Err(ValidationError::Required {
            field: "review text".to_string(),
        });
    }

    if text.len() > 1000 {
        return Err(ValidationError::TooLong {
            field: "review text".to_string(),
            max: 1000,
        });
    }

    Ok(())
}

/// Validates a review star rating.
///
/// ## Rules
/// - Must be between 1 and 5 inclusive (0 means "not selected" in the form)
pub fn validate_rating(rating: u8) -> ValidationResult<()> {
    if rating < MIN_RATING || rating > MAX_RATING {
        return Err(ValidationError::OutOfRange {
            field: "rating".to_string(),
            min: MIN_RATING as i64,
            max: MAX_RATING as i64,
        });
    }

    Ok(())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a line-item quantity.
///
/// ## Rules
/// - Must be positive (> 0)
/// - Must not exceed [`MAX_ITEM_QUANTITY`]
pub fn validate_quantity(qty: i64) -> ValidationResult<()> {
    if qty <= 0 {
        return Err(ValidationError::MustBePositive {
            field: "quantity".to_string(),
        });
    }

    if qty > MAX_ITEM_QUANTITY {
        return Err(ValidationError::OutOfRange {
            field: "quantity".to_string(),
            min: 1,
            max: MAX_ITEM_QUANTITY,
        });
    }

    Ok(())
}

/// Validates a price in paise.
///
/// ## Rules
/// - Must be non-negative (>= 0); zero is allowed (free items)
pub fn validate_price_paise(paise: i64) -> ValidationResult<()> {
    if paise < 0 {
        return Err(ValidationError::OutOfRange {
            field: "price".to_string(),
            min: 0,
            max: i64::MAX,
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_display_name() {
        assert!(validate_display_name("Test User").is_ok());
        assert!(validate_display_name("").is_err());
        assert!(validate_display_name("   ").is_err());
        assert!(validate_display_name(&"A".repeat(200)).is_err());
    }

    #[test]
    fn test_validate_email() {
        assert!(validate_email("test@example.com").is_ok());
        assert!(validate_email("a@x.com").is_ok());

        assert!(validate_email("").is_err());
        assert!(validate_email("no-at-sign").is_err());
        assert!(validate_email("@example.com").is_err());
        assert!(validate_email("user@").is_err());
        assert!(validate_email("a@b@c").is_err());
    }

    #[test]
    fn test_validate_password() {
        assert!(validate_password("password123").is_ok());
        assert!(validate_password("pw1").is_ok()); // no strength rules
        assert!(validate_password("").is_err());
    }

    #[test]
    fn test_validate_review_text() {
        assert!(validate_review_text("Excellent quality!").is_ok());
        assert!(validate_review_text("").is_err());
        assert!(validate_review_text("   ").is_err());
        assert!(validate_review_text(&"x".repeat(2000)).is_err());
    }

    #[test]
    fn test_validate_rating() {
        for rating in 1..=5u8 {
            assert!(validate_rating(rating).is_ok());
        }
        assert!(validate_rating(0).is_err());
        assert!(validate_rating(6).is_err());
    }

    #[test]
    fn test_validate_quantity() {
        assert!(validate_quantity(1).is_ok());
        assert!(validate_quantity(999).is_ok());
        assert!(validate_quantity(0).is_err());
        assert!(validate_quantity(-1).is_err());
        assert!(validate_quantity(1000).is_err());
    }

    #[test]
    fn test_validate_price_paise() {
        assert!(validate_price_paise(0).is_ok());
        assert!(validate_price_paise(12_000).is_ok());
        assert!(validate_price_paise(-100).is_err());
    }
}
