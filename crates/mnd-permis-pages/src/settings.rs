//! Contact form settings
//!
//! Timings, the upload limit, and the DOM hooks the browser binding looks up
//! at mount time. Every field has a default, so a page only needs to embed the
//! values it wants to override:
//!
//! ```html
//! <script type="application/json" id="contact-form-settings">
//!   { "submit_delay_ms": 1500, "dom": { "form_id": "candidature" } }
//! </script>
//! ```

use mnd_permis_forms::{AttachmentConstraint, DEFAULT_MAX_ATTACHMENT_MIB};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Id of the optional `<script type="application/json">` element holding settings.
pub const SETTINGS_ELEMENT_ID: &str = "contact-form-settings";

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
	#[error("Invalid contact form settings: {0}")]
	Parse(#[from] serde_json::Error),
	#[error("Invalid contact form settings: {0}")]
	Invalid(String),
}

/// Settings for one contact form.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormSettings {
	/// Delay of the simulated submission
	#[serde(default = "default_submit_delay_ms")]
	pub submit_delay_ms: u64,

	/// How long a message stays visible before it starts fading
	#[serde(default = "default_message_display_ms")]
	pub message_display_ms: u64,

	/// Length of the fade-out transition before the message node is removed
	#[serde(default = "default_message_fade_ms")]
	pub message_fade_ms: u64,

	/// Upload limit for the attachment, in MiB
	#[serde(default = "default_max_attachment_mib")]
	pub max_attachment_mib: f64,

	/// DOM hooks
	#[serde(default)]
	pub dom: DomSettings,
}

fn default_submit_delay_ms() -> u64 {
	2000
}

fn default_message_display_ms() -> u64 {
	5000
}

fn default_message_fade_ms() -> u64 {
	300
}

fn default_max_attachment_mib() -> f64 {
	DEFAULT_MAX_ATTACHMENT_MIB
}

impl Default for FormSettings {
	fn default() -> Self {
		Self {
			submit_delay_ms: default_submit_delay_ms(),
			message_display_ms: default_message_display_ms(),
			message_fade_ms: default_message_fade_ms(),
			max_attachment_mib: default_max_attachment_mib(),
			dom: DomSettings::default(),
		}
	}
}

impl FormSettings {
	/// Parses settings from JSON, filling in defaults for missing fields.
	///
	/// # Examples
	///
	/// ```
	/// use mnd_permis_pages::settings::FormSettings;
	///
	/// let settings = FormSettings::from_json(r#"{ "submit_delay_ms": 500 }"#).unwrap();
	/// assert_eq!(settings.submit_delay_ms, 500);
	/// assert_eq!(settings.message_display_ms, 5000);
	/// ```
	pub fn from_json(json: &str) -> Result<Self, SettingsError> {
		let settings: Self = serde_json::from_str(json)?;
		settings.validate()?;
		Ok(settings)
	}

	/// Rejects values that would make the form unusable.
	pub fn validate(&self) -> Result<(), SettingsError> {
		if !self.max_attachment_mib.is_finite() || self.max_attachment_mib <= 0.0 {
			return Err(SettingsError::Invalid(format!(
				"max_attachment_mib must be a positive number, got {}",
				self.max_attachment_mib
			)));
		}
		if self.message_display_ms == 0 {
			return Err(SettingsError::Invalid(
				"message_display_ms must be greater than zero".to_string(),
			));
		}
		Ok(())
	}

	pub fn submit_delay(&self) -> Duration {
		Duration::from_millis(self.submit_delay_ms)
	}

	pub fn message_display(&self) -> Duration {
		Duration::from_millis(self.message_display_ms)
	}

	pub fn message_fade(&self) -> Duration {
		Duration::from_millis(self.message_fade_ms)
	}

	pub fn attachment_constraint(&self) -> AttachmentConstraint {
		AttachmentConstraint::new(self.max_attachment_mib)
	}
}

/// Ids and selectors of the elements the browser binding attaches to.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DomSettings {
	#[serde(default = "default_form_id")]
	pub form_id: String,

	#[serde(default = "default_file_input_id")]
	pub file_input_id: String,

	#[serde(default = "default_file_name_id")]
	pub file_name_id: String,

	/// Container the message is inserted into, ahead of the form
	#[serde(default = "default_message_anchor")]
	pub message_anchor_selector: String,

	#[serde(default = "default_submit_selector")]
	pub submit_selector: String,

	#[serde(default = "default_phone_input_id")]
	pub phone_input_id: String,

	/// Inputs capitalized when they lose focus
	#[serde(default = "default_name_input_ids")]
	pub name_input_ids: Vec<String>,
}

fn default_form_id() -> String {
	"join-form".to_string()
}

fn default_file_input_id() -> String {
	"cv".to_string()
}

fn default_file_name_id() -> String {
	"file-name".to_string()
}

fn default_message_anchor() -> String {
	".contact-form__wrapper".to_string()
}

fn default_submit_selector() -> String {
	"button[type=\"submit\"]".to_string()
}

fn default_phone_input_id() -> String {
	"telephone".to_string()
}

fn default_name_input_ids() -> Vec<String> {
	vec!["nom".to_string(), "prenom".to_string()]
}

impl Default for DomSettings {
	fn default() -> Self {
		Self {
			form_id: default_form_id(),
			file_input_id: default_file_input_id(),
			file_name_id: default_file_name_id(),
			message_anchor_selector: default_message_anchor(),
			submit_selector: default_submit_selector(),
			phone_input_id: default_phone_input_id(),
			name_input_ids: default_name_input_ids(),
		}
	}
}
