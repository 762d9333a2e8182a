//! # Validation Module
//!
//! Single-field rules used by the checkout form, the sign-in/sign-up dialog
//! and the catalog loader.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: THIS MODULE                                                  │
//! │  └── One rule per field, typed ValidationError per failure             │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: checkout::validate_checkout                                  │
//! │  └── Runs every rule, collects field → message                         │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Presentation                                                 │
//! │  └── Shows each message under its input                                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every rule trims surrounding whitespace first; a whitespace-only value is
//! treated as missing.
//!
//! ## Usage
//! ```rust
//! use aranoz_core::validation::{validate_cvv, validate_zip_code};
//!
//! assert!(validate_zip_code("12345").is_ok());
//! assert!(validate_cvv("12").is_err());
//! ```

use crate::error::ValidationError;
use crate::{MAX_ITEM_QUANTITY, MIN_PASSWORD_LENGTH};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

fn is_ascii_digits(value: &str, len: usize) -> bool {
    value.len() == len && value.bytes().all(|b| b.is_ascii_digit())
}

// =============================================================================
// Presence
// =============================================================================

/// Requires a non-blank value and returns it trimmed.
///
/// `field` is the human label used in the message ("First name").
pub fn validate_required<'a>(value: &'a str, field: &str) -> ValidationResult<&'a str> {
    let value = value.trim();

    if value.is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }

    Ok(value)
}

// =============================================================================
// Checkout Field Rules
// =============================================================================

/// Validates an email address of the shape `local@domain.tld`.
///
/// ## Rules
/// - Must not be blank
/// - Exactly one `@` with a non-empty local part
/// - The domain contains a `.` with text on both sides
/// - No whitespace anywhere
///
/// ## Example
/// ```rust
/// use aranoz_core::validation::validate_email;
///
/// assert!(validate_email("a@b.com").is_ok());
/// assert!(validate_email("bad").is_err());
/// assert!(validate_email("a b@c.com").is_err());
/// ```
pub fn validate_email(value: &str) -> ValidationResult<()> {
    let value = validate_required(value, "Email")?;
    let invalid = || ValidationError::Invalid {
        field: "Email".to_string(),
    };

    if value.chars().any(char::is_whitespace) {
        return Err(invalid());
    }

    let (local, domain) = value.split_once('@').ok_or_else(invalid)?;
    if local.is_empty() || domain.contains('@') {
        return Err(invalid());
    }

    match domain.rsplit_once('.') {
        Some((host, tld)) if !host.is_empty() && !tld.is_empty() => Ok(()),
        _ => Err(invalid()),
    }
}

/// Validates a 5-digit ZIP code.
pub fn validate_zip_code(value: &str) -> ValidationResult<()> {
    let value = validate_required(value, "ZIP code")?;

    if !is_ascii_digits(value, 5) {
        return Err(ValidationError::Digits {
            field: "ZIP code".to_string(),
            digits: "5".to_string(),
        });
    }

    Ok(())
}

/// Validates a card number: 16 digits once whitespace is stripped, so
/// `"1234 5678 9012 3456"` is accepted.
pub fn validate_card_number(value: &str) -> ValidationResult<()> {
    let value = validate_required(value, "Card number")?;
    let digits: String = value.chars().filter(|c| !c.is_whitespace()).collect();

    if !is_ascii_digits(&digits, 16) {
        return Err(ValidationError::Digits {
            field: "Card number".to_string(),
            digits: "16".to_string(),
        });
    }

    Ok(())
}

/// Validates an expiry date in `MM/YY` form.
///
/// A value that has the right shape but a month outside 01-12 gets its own
/// month-range error rather than the generic format error.
///
/// ## User Workflow
/// ```text
/// "09/27" ──► shape ok ──► month 9 ──► Ok
/// "13/99" ──► shape ok ──► month 13 ─► "Expiry month must be between 01 and 12"
/// "9/27"  ──► shape ✗ ──────────────► "Expiry date must be in MM/YY format"
/// ```
pub fn validate_expiry_date(value: &str) -> ValidationResult<()> {
    let value = validate_required(value, "Expiry date")?;

    let shape_ok = value
        .split_once('/')
        .map(|(mm, yy)| is_ascii_digits(mm, 2) && is_ascii_digits(yy, 2))
        .unwrap_or(false);
    if !shape_ok {
        return Err(ValidationError::Format {
            field: "Expiry date".to_string(),
            format: "MM/YY".to_string(),
        });
    }

    let month: u8 = value[..2].parse().unwrap_or(0);
    if !(1..=12).contains(&month) {
        return Err(ValidationError::OutOfRange {
            field: "Expiry month".to_string(),
            min: "01".to_string(),
            max: "12".to_string(),
        });
    }

    Ok(())
}

/// Validates a 3 or 4 digit CVV.
pub fn validate_cvv(value: &str) -> ValidationResult<()> {
    let value = validate_required(value, "CVV")?;

    if !is_ascii_digits(value, 3) && !is_ascii_digits(value, 4) {
        return Err(ValidationError::Digits {
            field: "CVV".to_string(),
            digits: "3 or 4".to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a quantity requested by the presentation layer.
///
/// ## Rules
/// - Must be positive (> 0)
/// - Must not exceed [`MAX_ITEM_QUANTITY`] (999)
pub fn validate_quantity(qty: i64) -> ValidationResult<()> {
    if qty <= 0 {
        return Err(ValidationError::MustBePositive {
            field: "Quantity".to_string(),
        });
    }

    if qty > MAX_ITEM_QUANTITY {
        return Err(ValidationError::OutOfRange {
            field: "Quantity".to_string(),
            min: "1".to_string(),
            max: MAX_ITEM_QUANTITY.to_string(),
        });
    }

    Ok(())
}

/// Validates a catalog price. Zero is allowed (free items).
pub fn validate_price_cents(cents: i64) -> ValidationResult<()> {
    if cents < 0 {
        return Err(ValidationError::OutOfRange {
            field: "Price".to_string(),
            min: "0".to_string(),
            max: i64::MAX.to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Credential Validators
// =============================================================================

/// Local checks before an email/password sign-in is sent to the provider.
pub fn validate_sign_in(email: &str, password: &str) -> ValidationResult<()> {
    if email.trim().is_empty() || password.is_empty() {
        return Err(ValidationError::MissingCredentials);
    }

    Ok(())
}

/// Local checks before an email/password sign-up is sent to the provider.
///
/// ## Rules (checked in this order)
/// 1. Email, password and confirmation are all present
/// 2. Password and confirmation match
/// 3. Password has at least [`MIN_PASSWORD_LENGTH`] characters
pub fn validate_sign_up(email: &str, password: &str, confirm: &str) -> ValidationResult<()> {
    if email.trim().is_empty() || password.is_empty() || confirm.is_empty() {
        return Err(ValidationError::IncompleteForm);
    }

    if password != confirm {
        return Err(ValidationError::PasswordMismatch);
    }

    if password.chars().count() < MIN_PASSWORD_LENGTH {
        return Err(ValidationError::TooShort {
            field: "Password".to_string(),
            min: MIN_PASSWORD_LENGTH,
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
    fn test_validate_required() {
        assert_eq!(validate_required("  Ana ", "First name"), Ok("Ana"));
        assert_eq!(
            validate_required("   ", "First name").unwrap_err().to_string(),
            "First name is required"
        );
    }

    #[test]
    fn test_validate_email() {
        assert!(validate_email("a@b.com").is_ok());
        assert!(validate_email("user.name+tag@domain.co.uk").is_ok());
        assert!(validate_email(" a@b.com ").is_ok());

        assert_eq!(
            validate_email("").unwrap_err(),
            ValidationError::Required {
                field: "Email".to_string()
            }
        );
        for bad in ["bad", "@b.com", "a@", "a@b", "a@.com", "a@b.", "a@@b.com", "a b@c.com"] {
            assert_eq!(
                validate_email(bad).unwrap_err().to_string(),
                "Email is invalid",
                "{bad} should be rejected"
            );
        }
    }

    #[test]
    fn test_validate_zip_code() {
        assert!(validate_zip_code("12345").is_ok());
        assert_eq!(
            validate_zip_code("123").unwrap_err().to_string(),
            "ZIP code must be 5 digits"
        );
        assert!(validate_zip_code("1234a").is_err());
        assert!(validate_zip_code("123456").is_err());
        assert!(validate_zip_code("").is_err());
    }

    #[test]
    fn test_validate_card_number() {
        assert!(validate_card_number("1234567890123456").is_ok());
        assert!(validate_card_number("1234 5678 9012 3456").is_ok());
        assert_eq!(
            validate_card_number("1234").unwrap_err().to_string(),
            "Card number must be 16 digits"
        );
        assert!(validate_card_number("1234-5678-9012-3456").is_err());
    }

    #[test]
    fn test_validate_expiry_date() {
        assert!(validate_expiry_date("09/27").is_ok());
        assert!(validate_expiry_date("12/30").is_ok());
        assert!(validate_expiry_date("01/00").is_ok());

        assert_eq!(
            validate_expiry_date("13/99").unwrap_err().to_string(),
            "Expiry month must be between 01 and 12"
        );
        assert_eq!(
            validate_expiry_date("00/25").unwrap_err().to_string(),
            "Expiry month must be between 01 and 12"
        );
        for bad in ["9/27", "09-27", "0927", "09/2027", "ab/cd"] {
            assert_eq!(
                validate_expiry_date(bad).unwrap_err().to_string(),
                "Expiry date must be in MM/YY format",
                "{bad} should be rejected"
            );
        }
    }

    #[test]
    fn test_validate_cvv() {
        assert!(validate_cvv("123").is_ok());
        assert!(validate_cvv("1234").is_ok());
        assert_eq!(
            validate_cvv("12").unwrap_err().to_string(),
            "CVV must be 3 or 4 digits"
        );
        assert!(validate_cvv("12345").is_err());
        assert!(validate_cvv("12a").is_err());
    }

    #[test]
    fn test_validate_quantity_and_price() {
        assert!(validate_quantity(1).is_ok());
        assert!(validate_quantity(0).is_err());
        assert!(validate_quantity(MAX_ITEM_QUANTITY).is_ok());
        assert_eq!(
            validate_quantity(i64::MAX).unwrap_err().to_string(),
            "Quantity must be between 1 and 999"
        );
        assert!(validate_price_cents(0).is_ok());
        assert!(validate_price_cents(-1).is_err());
    }

    #[test]
    fn test_validate_sign_in() {
        assert!(validate_sign_in("a@b.com", "secret").is_ok());
        assert_eq!(
            validate_sign_in("", "secret").unwrap_err(),
            ValidationError::MissingCredentials
        );
        assert!(validate_sign_in("a@b.com", "").is_err());
    }

    #[test]
    fn test_validate_sign_up() {
        assert!(validate_sign_up("a@b.com", "secret", "secret").is_ok());
        assert_eq!(
            validate_sign_up("a@b.com", "secret", "").unwrap_err(),
            ValidationError::IncompleteForm
        );
        assert_eq!(
            validate_sign_up("a@b.com", "secret", "secrex").unwrap_err(),
            ValidationError::PasswordMismatch
        );
        assert_eq!(
            validate_sign_up("a@b.com", "abc", "abc")
                .unwrap_err()
                .to_string(),
            "Password must be at least 6 characters."
        );
    }
}
