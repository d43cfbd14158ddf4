//! Error types for contact form validation.

use crate::messages;
use serde::{Deserialize, Serialize};

/// A user input rejected by the validation pipeline.
///
/// The `Display` output is the exact text shown to the visitor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
#[serde(rename_all = "snake_case")]
pub enum ValidationError {
	#[error("{}", messages::INVALID_PHONE)]
	InvalidPhone,
	#[error("{}", messages::INVALID_EMAIL)]
	InvalidEmail,
	#[error("{}", messages::CONSENT_REQUIRED)]
	ConsentRequired,
}

impl ValidationError {
	/// Name of the form field the error belongs to.
	pub fn field(&self) -> &'static str {
		match self {
			Self::InvalidPhone => crate::submission::fields::TELEPHONE,
			Self::InvalidEmail => crate::submission::fields::EMAIL,
			Self::ConsentRequired => crate::submission::fields::CONSENT,
		}
	}
}

/// An attachment that violates the upload constraint.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum AttachmentError {
	#[error("Le fichier est trop volumineux. Taille maximale : {max_mib}MB")]
	TooLarge {
		/// Size of the rejected file in MiB, rounded to two decimals
		size_mib: f64,
		/// Configured limit in MiB
		max_mib: f64,
	},
}

pub type ValidationResult<T> = Result<T, ValidationError>;
