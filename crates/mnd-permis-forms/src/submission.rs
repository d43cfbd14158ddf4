//! Submission attempts and the ordered validation pipeline
//!
//! A [`FormSnapshot`] is captured from the form when the visitor submits. A
//! [`SubmissionAttempt`] wraps it and tracks its [`SubmissionStatus`] from
//! validation to the terminal outcome.
//!
//! ## Validation order
//!
//! ```text
//! telephone ──ok──► email ──ok──► rgpd ──ok──► valid
//!     │               │             │
//!     └──err──────────┴─────err─────┴──► first error wins
//! ```

use crate::attachment::Attachment;
use crate::error::{ValidationError, ValidationResult};
use crate::validators::{ConsentValidator, EmailValidator, FieldValidator, PhoneValidator};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Names of the contact form fields.
pub mod fields {
	pub const TELEPHONE: &str = "telephone";
	pub const EMAIL: &str = "email";
	pub const CONSENT: &str = "rgpd";
	pub const ATTACHMENT: &str = "cv";
	pub const LAST_NAME: &str = "nom";
	pub const FIRST_NAME: &str = "prenom";
}

/// Raw field values captured at submission time.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FormSnapshot {
	/// Field name → raw value
	pub values: BTreeMap<String, String>,
	/// Optional file attached to the `cv` input
	pub attachment: Option<Attachment>,
}

impl FormSnapshot {
	pub fn new() -> Self {
		Self::default()
	}

	/// Builder-style setter for a field value.
	pub fn with_field(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
		self.set(name, value);
		self
	}

	pub fn with_attachment(mut self, attachment: Attachment) -> Self {
		self.attachment = Some(attachment);
		self
	}

	pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
		self.values.insert(name.into(), value.into());
	}

	/// Returns the raw value of `name`, or an empty string when absent.
	pub fn get(&self, name: &str) -> &str {
		self.values.get(name).map(String::as_str).unwrap_or("")
	}

	/// Runs the validators in order and stops at the first failure.
	pub fn validate(&self) -> ValidationResult<()> {
		PhoneValidator.validate(self.get(fields::TELEPHONE))?;
		EmailValidator.validate(self.get(fields::EMAIL))?;
		ConsentValidator.validate(self.get(fields::CONSENT))?;
		Ok(())
	}
}

/// Lifecycle status of a submission.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubmissionStatus {
	#[default]
	Idle,
	Validating,
	Submitting,
	Succeeded,
	Failed,
}

impl SubmissionStatus {
	pub fn is_terminal(self) -> bool {
		matches!(self, Self::Succeeded | Self::Failed)
	}
}

impl fmt::Display for SubmissionStatus {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let name = match self {
			Self::Idle => "idle",
			Self::Validating => "validating",
			Self::Submitting => "submitting",
			Self::Succeeded => "succeeded",
			Self::Failed => "failed",
		};
		f.write_str(name)
	}
}

/// One visitor-initiated try at sending the form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubmissionAttempt {
	/// Monotonic identifier assigned by the owner of the attempt
	pub id: u64,
	pub snapshot: FormSnapshot,
	pub status: SubmissionStatus,
	/// Validation verdict, `None` until validation has run
	pub error: Option<ValidationError>,
}

impl SubmissionAttempt {
	pub fn new(id: u64, snapshot: FormSnapshot) -> Self {
		Self {
			id,
			snapshot,
			status: SubmissionStatus::Idle,
			error: None,
		}
	}

	/// Validates the snapshot and records the verdict.
	///
	/// On success the attempt is left in `validating`, ready to be submitted;
	/// on failure it moves to `failed`.
	pub fn validate(&mut self) -> ValidationResult<()> {
		self.status = SubmissionStatus::Validating;
		match self.snapshot.validate() {
			Ok(()) => {
				self.error = None;
				Ok(())
			}
			Err(err) => {
				self.status = SubmissionStatus::Failed;
				self.error = Some(err.clone());
				Err(err)
			}
		}
	}

	pub fn is_valid(&self) -> bool {
		self.status != SubmissionStatus::Failed && self.error.is_none()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::{fixture, rstest};

	#[fixture]
	fn valid_snapshot() -> FormSnapshot {
		FormSnapshot::new()
			.with_field(fields::LAST_NAME, "Alaoui")
			.with_field(fields::FIRST_NAME, "Sara")
			.with_field(fields::TELEPHONE, "0612345678")
			.with_field(fields::EMAIL, "test@example.com")
			.with_field(fields::CONSENT, "on")
	}

	#[rstest]
	fn test_valid_snapshot(valid_snapshot: FormSnapshot) {
		assert_eq!(valid_snapshot.validate(), Ok(()));
	}

	#[rstest]
	fn test_phone_checked_first(valid_snapshot: FormSnapshot) {
		let snapshot = valid_snapshot
			.with_field(fields::TELEPHONE, "123")
			.with_field(fields::EMAIL, "broken")
			.with_field(fields::CONSENT, "");
		assert_eq!(snapshot.validate(), Err(ValidationError::InvalidPhone));
	}

	#[rstest]
	fn test_email_checked_before_consent(valid_snapshot: FormSnapshot) {
		let snapshot = valid_snapshot
			.with_field(fields::EMAIL, "a@b")
			.with_field(fields::CONSENT, "");
		assert_eq!(snapshot.validate(), Err(ValidationError::InvalidEmail));
	}

	#[rstest]
	fn test_missing_consent_fails(mut valid_snapshot: FormSnapshot) {
		valid_snapshot.values.remove(fields::CONSENT);
		assert_eq!(valid_snapshot.validate(), Err(ValidationError::ConsentRequired));
	}

	#[rstest]
	fn test_missing_phone_field_is_invalid() {
		assert_eq!(
			FormSnapshot::new().validate(),
			Err(ValidationError::InvalidPhone)
		);
	}

	#[rstest]
	fn test_attempt_records_verdict(valid_snapshot: FormSnapshot) {
		let mut attempt = SubmissionAttempt::new(1, valid_snapshot.clone());
		assert_eq!(attempt.status, SubmissionStatus::Idle);
		assert!(attempt.validate().is_ok());
		assert_eq!(attempt.status, SubmissionStatus::Validating);
		assert!(attempt.is_valid());

		let mut failed =
			SubmissionAttempt::new(2, valid_snapshot.with_field(fields::EMAIL, "nope"));
		assert!(failed.validate().is_err());
		assert_eq!(failed.status, SubmissionStatus::Failed);
		assert_eq!(failed.error, Some(ValidationError::InvalidEmail));
		assert!(!failed.is_valid());
	}

	#[rstest]
	fn test_snapshot_serializes_to_json(valid_snapshot: FormSnapshot) {
		let snapshot = valid_snapshot.with_attachment(Attachment::new("cv.pdf", 2048));
		let json = serde_json::to_value(&snapshot).unwrap();
		assert_eq!(json["values"]["telephone"], "0612345678");
		assert_eq!(json["attachment"]["size_bytes"], 2048);
	}

	#[rstest]
	#[case(SubmissionStatus::Succeeded, true)]
	#[case(SubmissionStatus::Failed, true)]
	#[case(SubmissionStatus::Submitting, false)]
	#[case(SubmissionStatus::Idle, false)]
	fn test_terminal_statuses(#[case] status: SubmissionStatus, #[case] terminal: bool) {
		assert_eq!(status.is_terminal(), terminal);
	}
}
