//! Field validators for the contact form
//!
//! Each validator checks one raw field value and maps a failure to the
//! [`ValidationError`] shown to the visitor.

use crate::error::{ValidationError, ValidationResult};
use regex::Regex;
use std::sync::LazyLock;

// Moroccan mobile number: `+212` or `0`, then 5, 6 or 7, then eight digits.
//
// `[0-9]` rather than `\d`, which would also accept non-ASCII digits.
static PHONE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
	Regex::new(r"^(\+212|0)[5-7][0-9]{8}$").expect("PHONE_REGEX: invalid regex pattern")
});

// Permissive email shape: one `@`, a non-empty local part, and a dot in the domain.
static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
	Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("EMAIL_REGEX: invalid regex pattern")
});

/// A validator for a single raw field value.
pub trait FieldValidator {
	/// Returns `Ok(())` when `value` is acceptable.
	fn validate(&self, value: &str) -> ValidationResult<()>;
}

/// Validates Moroccan mobile phone numbers.
///
/// Whitespace is stripped before matching, so the grouped form produced by
/// [`format_phone_input`](crate::formatting::format_phone_input) is accepted.
///
/// # Examples
///
/// ```
/// use mnd_permis_forms::validators::{FieldValidator, PhoneValidator};
///
/// let validator = PhoneValidator;
/// assert!(validator.validate("0612345678").is_ok());
/// assert!(validator.validate("+212 6 12 34 56 78").is_ok());
/// assert!(validator.validate("0412345678").is_err());
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct PhoneValidator;

impl PhoneValidator {
	/// Removes every whitespace character from `value`.
	pub fn normalize(value: &str) -> String {
		value.chars().filter(|c| !c.is_whitespace()).collect()
	}
}

impl FieldValidator for PhoneValidator {
	fn validate(&self, value: &str) -> ValidationResult<()> {
		if PHONE_REGEX.is_match(&Self::normalize(value)) {
			Ok(())
		} else {
			Err(ValidationError::InvalidPhone)
		}
	}
}

/// Validates email addresses with a deliberately loose pattern.
///
/// Stricter checks belong to whatever eventually receives the submission.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmailValidator;

impl FieldValidator for EmailValidator {
	fn validate(&self, value: &str) -> ValidationResult<()> {
		if EMAIL_REGEX.is_match(value) {
			Ok(())
		} else {
			Err(ValidationError::InvalidEmail)
		}
	}
}

/// Validates the data-protection checkbox.
///
/// A checked checkbox contributes a non-empty value (`"on"` by default) to the
/// submitted form data; an unchecked one contributes nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsentValidator;

impl FieldValidator for ConsentValidator {
	fn validate(&self, value: &str) -> ValidationResult<()> {
		if value.is_empty() {
			Err(ValidationError::ConsentRequired)
		} else {
			Ok(())
		}
	}
}
