//! Uploaded file constraint
//!
//! The CV input accepts a single file. Its size is displayed in MiB with two
//! decimals, and the rejection rule compares that displayed value against the
//! limit, so a file shown as `5.00 MB` is accepted.

use crate::error::AttachmentError;
use serde::{Deserialize, Serialize};

const BYTES_PER_MIB: f64 = 1024.0 * 1024.0;

/// Default upload limit in MiB.
pub const DEFAULT_MAX_ATTACHMENT_MIB: f64 = 5.0;

/// A file selected in the form's file input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Attachment {
	/// File name as reported by the browser
	pub name: String,
	/// Declared size in bytes
	pub size_bytes: u64,
}

impl Attachment {
	pub fn new(name: impl Into<String>, size_bytes: u64) -> Self {
		Self {
			name: name.into(),
			size_bytes,
		}
	}

	/// Size in MiB rounded to two decimals.
	pub fn size_mib(&self) -> f64 {
		let mib = self.size_bytes as f64 / BYTES_PER_MIB;
		(mib * 100.0).round() / 100.0
	}

	/// Label shown next to the file input, e.g. `cv.pdf (1.25 MB)`.
	pub fn display_label(&self) -> String {
		format!("{} ({:.2} MB)", self.name, self.size_mib())
	}
}

/// Maximum permitted size for an uploaded file.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AttachmentConstraint {
	pub max_mib: f64,
}

impl Default for AttachmentConstraint {
	fn default() -> Self {
		Self {
			max_mib: DEFAULT_MAX_ATTACHMENT_MIB,
		}
	}
}

impl AttachmentConstraint {
	pub fn new(max_mib: f64) -> Self {
		Self { max_mib }
	}

	/// Checks `attachment` and returns its display label when accepted.
	///
	/// # Examples
	///
	/// ```
	/// use mnd_permis_forms::attachment::{Attachment, AttachmentConstraint};
	///
	/// let constraint = AttachmentConstraint::default();
	/// let label = constraint.check(&Attachment::new("cv.pdf", 1024 * 1024)).unwrap();
	/// assert_eq!(label, "cv.pdf (1.00 MB)");
	/// assert!(constraint.check(&Attachment::new("big.pdf", 6 * 1024 * 1024)).is_err());
	/// ```
	pub fn check(&self, attachment: &Attachment) -> Result<String, AttachmentError> {
		let size_mib = attachment.size_mib();
		if size_mib > self.max_mib {
			return Err(AttachmentError::TooLarge {
				size_mib,
				max_mib: self.max_mib,
			});
		}
		Ok(attachment.display_label())
	}
}
