//! # Checkout
//!
//! The checkout form snapshot and the validator run before an order is
//! submitted.
//!
//! ## Validation Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Place Order clicked                                                    │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  validate_checkout(&form) ← THIS MODULE                                 │
//! │       │                                                                 │
//! │       ├── every field checked, failures collected field → message      │
//! │       │                                                                 │
//! │       ├── errors non-empty → messages shown inline, nothing submitted  │
//! │       │                                                                 │
//! │       └── errors empty → valid = true, order may be placed             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The validator is pure and total: same form in, same errors out, and a
//! malformed form only ever produces error entries.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::{CoreError, CoreResult, ValidationError};
use crate::validation::{
    validate_card_number, validate_cvv, validate_email, validate_expiry_date, validate_required,
    validate_zip_code, ValidationResult,
};

// =============================================================================
// Checkout Field
// =============================================================================

/// A named checkout input. Variant order is form order, which is also the
/// order errors are reported in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub enum CheckoutField {
    FirstName,
    LastName,
    Email,
    Address,
    City,
    State,
    ZipCode,
    CardNumber,
    CardName,
    ExpiryDate,
    Cvv,
}

impl CheckoutField {
    /// Every field, in form order.
    pub const ALL: [CheckoutField; 11] = [
        CheckoutField::FirstName,
        CheckoutField::LastName,
        CheckoutField::Email,
        CheckoutField::Address,
        CheckoutField::City,
        CheckoutField::State,
        CheckoutField::ZipCode,
        CheckoutField::CardNumber,
        CheckoutField::CardName,
        CheckoutField::ExpiryDate,
        CheckoutField::Cvv,
    ];

    /// The form key, e.g. `zipCode`.
    pub fn as_str(&self) -> &'static str {
        match self {
            CheckoutField::FirstName => "firstName",
            CheckoutField::LastName => "lastName",
            CheckoutField::Email => "email",
            CheckoutField::Address => "address",
            CheckoutField::City => "city",
            CheckoutField::State => "state",
            CheckoutField::ZipCode => "zipCode",
            CheckoutField::CardNumber => "cardNumber",
            CheckoutField::CardName => "cardName",
            CheckoutField::ExpiryDate => "expiryDate",
            CheckoutField::Cvv => "cvv",
        }
    }

    /// The human label used in messages, e.g. `ZIP code`.
    pub fn label(&self) -> &'static str {
        match self {
            CheckoutField::FirstName => "First name",
            CheckoutField::LastName => "Last name",
            CheckoutField::Email => "Email",
            CheckoutField::Address => "Address",
            CheckoutField::City => "City",
            CheckoutField::State => "State",
            CheckoutField::ZipCode => "ZIP code",
            CheckoutField::CardNumber => "Card number",
            CheckoutField::CardName => "Name on card",
            CheckoutField::ExpiryDate => "Expiry date",
            CheckoutField::Cvv => "CVV",
        }
    }

    fn check(&self, value: &str) -> ValidationResult<()> {
        match self {
            CheckoutField::Email => validate_email(value),
            CheckoutField::ZipCode => validate_zip_code(value),
            CheckoutField::CardNumber => validate_card_number(value),
            CheckoutField::ExpiryDate => validate_expiry_date(value),
            CheckoutField::Cvv => validate_cvv(value),
            plain => validate_required(value, plain.label()).map(|_| ()),
        }
    }
}

impl fmt::Display for CheckoutField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CheckoutField {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CheckoutField::ALL
            .into_iter()
            .find(|field| field.as_str() == s)
            .ok_or_else(|| ValidationError::Invalid {
                field: format!("Checkout field '{}'", s),
            })
    }
}

// =============================================================================
// Checkout Form
// =============================================================================

/// Snapshot of the checkout inputs.
///
/// Deserializes from the form's JSON object; absent keys become empty
/// strings, which the validator then reports as missing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase", default)]
#[ts(export)]
pub struct CheckoutForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    pub card_number: String,
    pub card_name: String,
    pub expiry_date: String,
    pub cvv: String,
}

impl CheckoutForm {
    /// Builds a form from `name → value` pairs keyed by the form keys
    /// (`firstName`, `zipCode`, ...). Unknown keys are ignored.
    pub fn from_fields<I, K, V>(fields: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut form = CheckoutForm::default();
        for (key, value) in fields {
            if let Ok(field) = key.as_ref().parse::<CheckoutField>() {
                *form.value_mut(field) = value.into();
            }
        }
        form
    }

    pub fn value(&self, field: CheckoutField) -> &str {
        match field {
            CheckoutField::FirstName => &self.first_name,
            CheckoutField::LastName => &self.last_name,
            CheckoutField::Email => &self.email,
            CheckoutField::Address => &self.address,
            CheckoutField::City => &self.city,
            CheckoutField::State => &self.state,
            CheckoutField::ZipCode => &self.zip_code,
            CheckoutField::CardNumber => &self.card_number,
            CheckoutField::CardName => &self.card_name,
            CheckoutField::ExpiryDate => &self.expiry_date,
            CheckoutField::Cvv => &self.cvv,
        }
    }

    pub fn value_mut(&mut self, field: CheckoutField) -> &mut String {
        match field {
            CheckoutField::FirstName => &mut self.first_name,
            CheckoutField::LastName => &mut self.last_name,
            CheckoutField::Email => &mut self.email,
            CheckoutField::Address => &mut self.address,
            CheckoutField::City => &mut self.city,
            CheckoutField::State => &mut self.state,
            CheckoutField::ZipCode => &mut self.zip_code,
            CheckoutField::CardNumber => &mut self.card_number,
            CheckoutField::CardName => &mut self.card_name,
            CheckoutField::ExpiryDate => &mut self.expiry_date,
            CheckoutField::Cvv => &mut self.cvv,
        }
    }
}

// =============================================================================
// Validation Result
// =============================================================================

/// Field-level outcome of [`validate_checkout`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CheckoutValidation {
    /// Message per failing field, in form order.
    pub errors: BTreeMap<CheckoutField, String>,

    /// `true` exactly when `errors` is empty.
    pub valid: bool,
}

impl CheckoutValidation {
    pub fn error_for(&self, field: CheckoutField) -> Option<&str> {
        self.errors.get(&field).map(String::as_str)
    }

    /// Converts to a `Result` for callers that only proceed on success.
    pub fn into_result(self) -> CoreResult<()> {
        if self.valid {
            Ok(())
        } else {
            Err(CoreError::CheckoutInvalid(self.errors.len()))
        }
    }
}

/// Validates every checkout field and collects the failures.
///
/// ## Example
/// ```rust
/// use aranoz_core::{validate_checkout, CheckoutField, CheckoutForm};
///
/// let form = CheckoutForm {
///     zip_code: "123".to_string(),
///     ..CheckoutForm::default()
/// };
/// let result = validate_checkout(&form);
/// assert!(!result.valid);
/// assert_eq!(
///     result.error_for(CheckoutField::ZipCode),
///     Some("ZIP code must be 5 digits")
/// );
/// ```
pub fn validate_checkout(form: &CheckoutForm) -> CheckoutValidation {
    let errors: BTreeMap<CheckoutField, String> = CheckoutField::ALL
        .into_iter()
        .filter_map(|field| {
            field
                .check(form.value(field))
                .err()
                .map(|e| (field, e.to_string()))
        })
        .collect();

    CheckoutValidation {
        valid: errors.is_empty(),
        errors,
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_form() -> CheckoutForm {
        CheckoutForm {
            first_name: "Ana".to_string(),
            last_name: "Silva".to_string(),
            email: "a@b.com".to_string(),
            address: "1 Main St".to_string(),
            city: "Springfield".to_string(),
            state: "IL".to_string(),
            zip_code: "12345".to_string(),
            card_number: "1234567890123456".to_string(),
            card_name: "Ana Silva".to_string(),
            expiry_date: "09/27".to_string(),
            cvv: "123".to_string(),
        }
    }

    #[test]
    fn test_well_formed_form_is_valid() {
        let result = validate_checkout(&valid_form());
        assert!(result.errors.is_empty());
        assert!(result.valid);
        assert!(result.into_result().is_ok());
    }

    #[test]
    fn test_malformed_form_reports_every_field() {
        let form = CheckoutForm::from_fields([
            ("email", "bad"),
            ("zipCode", "123"),
            ("cardNumber", "1234"),
            ("expiryDate", "13/99"),
            ("cvv", "12"),
        ]);
        let result = validate_checkout(&form);

        assert!(!result.valid);
        assert_eq!(result.errors.len(), CheckoutField::ALL.len());
        assert_eq!(result.error_for(CheckoutField::Email), Some("Email is invalid"));
        assert_eq!(
            result.error_for(CheckoutField::ZipCode),
            Some("ZIP code must be 5 digits")
        );
        assert_eq!(
            result.error_for(CheckoutField::CardNumber),
            Some("Card number must be 16 digits")
        );
        assert_eq!(
            result.error_for(CheckoutField::ExpiryDate),
            Some("Expiry month must be between 01 and 12")
        );
        assert_eq!(
            result.error_for(CheckoutField::Cvv),
            Some("CVV must be 3 or 4 digits")
        );
        assert_eq!(
            result.error_for(CheckoutField::FirstName),
            Some("First name is required")
        );
        assert_eq!(
            result.error_for(CheckoutField::CardName),
            Some("Name on card is required")
        );
        assert!(matches!(
            result.into_result(),
            Err(CoreError::CheckoutInvalid(11))
        ));
    }

    #[test]
    fn test_blank_text_fields_are_missing() {
        let mut form = valid_form();
        form.city = "   ".to_string();
        let result = validate_checkout(&form);
        assert_eq!(result.errors.len(), 1);
        assert_eq!(result.error_for(CheckoutField::City), Some("City is required"));
    }

    #[test]
    fn test_card_number_with_spaces_is_valid() {
        let mut form = valid_form();
        form.card_number = "1234 5678 9012 3456".to_string();
        assert!(validate_checkout(&form).valid);
    }

    #[test]
    fn test_validation_is_deterministic() {
        let form = CheckoutForm::from_fields([("email", "x@y")]);
        assert_eq!(validate_checkout(&form), validate_checkout(&form));
    }

    #[test]
    fn test_errors_serialize_with_form_keys_in_order() {
        let form = CheckoutForm {
            cvv: "1".to_string(),
            zip_code: "1".to_string(),
            ..valid_form()
        };
        let json = serde_json::to_string(&validate_checkout(&form)).unwrap();
        assert_eq!(
            json,
            r#"{"errors":{"zipCode":"ZIP code must be 5 digits","cvv":"CVV must be 3 or 4 digits"},"valid":false}"#
        );
    }

    #[test]
    fn test_form_deserializes_with_missing_keys() {
        let form: CheckoutForm = serde_json::from_str(r#"{"firstName":"Ana"}"#).unwrap();
        assert_eq!(form.first_name, "Ana");
        assert!(form.cvv.is_empty());
    }

    #[test]
    fn test_field_round_trips_through_key() {
        for field in CheckoutField::ALL {
            assert_eq!(field.as_str().parse::<CheckoutField>().unwrap(), field);
        }
        assert!("nope".parse::<CheckoutField>().is_err());
    }
}
