//! # MND Permis
//!
//! Client-side interactivity for the MND Permis driving school website,
//! written in Rust and compiled to WebAssembly.
//!
//! The interesting part is the contact / application form: validation of the
//! visitor's input, the busy state while the application is sent, a single
//! transient message reporting the outcome, and the reset afterwards.
//!
//! ## Crates
//!
//! - [`forms`] - validators, the upload constraint, submission attempts and
//!   live input formatting. Pure Rust, no DOM.
//! - [`pages`] - the form workflow controller and its `web-sys` binding.
//!
//! ## Feature Flags
//!
//! - `forms` - domain layer only
//! - `pages` (default via `full`) - controller and browser binding
//! - `console_error_panic_hook` - readable panics in the browser console
//! - `debug-hooks` - verbose `debug_log!` output in WASM debug builds
//!
//! ## Quick Example
//!
//! ```rust
//! use mnd_permis::forms::{FormSnapshot, fields};
//! use mnd_permis::pages::{FormController, FormSettings, ManualScheduler, Scheduler};
//! # use mnd_permis::pages::{FormView, ValidationMessage};
//! # struct NoopView;
//! # impl FormView for NoopView {
//! #     fn set_busy(&mut self, _: bool) {}
//! #     fn reset_fields(&mut self) {}
//! #     fn show_file_name(&mut self, _: &str) {}
//! #     fn clear_file_selection(&mut self) {}
//! #     fn insert_message(&mut self, _: &ValidationMessage) {}
//! #     fn fade_message(&mut self) {}
//! #     fn remove_message(&mut self) {}
//! #     fn scroll_to_top(&mut self) {}
//! # }
//! use std::rc::Rc;
//! use std::time::Duration;
//!
//! let scheduler = ManualScheduler::new();
//! let controller = FormController::simulated(
//!     NoopView,
//!     Rc::new(scheduler.clone()) as Rc<dyn Scheduler>,
//!     FormSettings::default(),
//! );
//!
//! let snapshot = FormSnapshot::new()
//!     .with_field(fields::TELEPHONE, "0612345678")
//!     .with_field(fields::EMAIL, "test@example.com")
//!     .with_field(fields::CONSENT, "on");
//! controller.on_submit(snapshot).unwrap();
//!
//! scheduler.advance(Duration::from_secs(2));
//! assert!(controller.current_message().is_some());
//! ```

#[cfg(feature = "forms")]
pub use mnd_permis_forms as forms;

#[cfg(feature = "pages")]
pub use mnd_permis_pages as pages;

/// Commonly used types.
pub mod prelude {
	#[cfg(feature = "forms")]
	pub use mnd_permis_forms::{
		Attachment, AttachmentConstraint, AttachmentError, FormSnapshot, SubmissionAttempt,
		SubmissionStatus, ValidationError, fields,
	};

	#[cfg(feature = "pages")]
	pub use mnd_permis_pages::{
		FormController, FormSettings, FormView, MessageKind, Scheduler, SubmitError,
		SubmissionTransport, TaskHandle, TransportError, ValidationMessage,
	};
}
