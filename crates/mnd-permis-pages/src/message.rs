//! Transient notices shown above the contact form

use mnd_permis_forms::messages;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Base class of the message element.
pub const MESSAGE_CLASS: &str = "form-message";

/// Class added when the message starts fading out.
pub const FADE_OUT_CLASS: &str = "fade-out";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MessageKind {
	Success,
	Error,
}

impl MessageKind {
	pub fn as_str(self) -> &'static str {
		match self {
			Self::Success => "success",
			Self::Error => "error",
		}
	}
}

impl fmt::Display for MessageKind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

/// A single user-visible notice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationMessage {
	pub kind: MessageKind,
	pub text: String,
}

impl ValidationMessage {
	pub fn new(kind: MessageKind, text: impl Into<String>) -> Self {
		Self {
			kind,
			text: text.into(),
		}
	}

	pub fn success(text: impl Into<String>) -> Self {
		Self::new(MessageKind::Success, text)
	}

	pub fn error(text: impl Into<String>) -> Self {
		Self::new(MessageKind::Error, text)
	}

	/// The message shown once a submission went through.
	pub fn submission_succeeded() -> Self {
		Self::success(messages::SUBMISSION_SUCCEEDED)
	}

	/// Space-separated class list, e.g. `form-message form-message--error`.
	pub fn class_name(&self) -> String {
		format!("{MESSAGE_CLASS} {MESSAGE_CLASS}--{}", self.kind)
	}
}

/// Stylesheet for the message element, injected once when the form mounts.
pub const MESSAGE_STYLES: &str = r#"
.form-message {
	padding: 1rem 1.5rem;
	border-radius: 8px;
	margin-bottom: 2rem;
	font-weight: 600;
	text-align: center;
	animation: slideDown 0.3s ease;
}

.form-message--success {
	background: rgba(34, 197, 94, 0.1);
	border: 1px solid rgba(34, 197, 94, 0.3);
	color: #22c55e;
}

.form-message--error {
	background: rgba(239, 68, 68, 0.1);
	border: 1px solid rgba(239, 68, 68, 0.3);
	color: #ef4444;
}

.form-message.fade-out {
	animation: fadeOut 0.3s ease forwards;
}

@keyframes slideDown {
	from {
		opacity: 0;
		transform: translateY(-20px);
	}
	to {
		opacity: 1;
		transform: translateY(0);
	}
}

@keyframes fadeOut {
	to {
		opacity: 0;
		transform: translateY(-10px);
	}
}
"#;

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	#[case(ValidationMessage::success("ok"), "form-message form-message--success")]
	#[case(ValidationMessage::error("ko"), "form-message form-message--error")]
	fn test_class_name(#[case] message: ValidationMessage, #[case] expected: &str) {
		assert_eq!(message.class_name(), expected);
	}

	#[rstest]
	fn test_stylesheet_covers_every_kind() {
		for kind in [MessageKind::Success, MessageKind::Error] {
			assert!(MESSAGE_STYLES.contains(&format!(".{MESSAGE_CLASS}--{kind}")));
		}
		assert!(MESSAGE_STYLES.contains(&format!(".{MESSAGE_CLASS}.{FADE_OUT_CLASS}")));
	}
}
