//! # mnd-permis-pages
//!
//! Client-side controller for the MND Permis contact form, compiled to
//! WebAssembly.
//!
//! ## Architecture
//!
//! ```mermaid
//! flowchart LR
//!     DOM["Page events<br/>(submit, change, input, blur)"] --> Controller["FormController"]
//!     Controller -->|validate| Forms["mnd-permis-forms"]
//!     Controller -->|send| Transport["SubmissionTransport"]
//!     Controller -->|render| View["FormView"]
//!     Controller -->|timers| Scheduler["Scheduler"]
//! ```
//!
//! The controller depends only on the [`FormView`], [`SubmissionTransport`]
//! and [`Scheduler`] traits, so the whole workflow runs natively in tests
//! with a [`ManualScheduler`]. The `dom` module, which exists only on
//! `wasm32`, supplies the browser implementations.
//!
//! ## Example
//!
//! ```ignore
//! import init, { initContactForm } from "./pkg/mnd_permis_pages.js";
//!
//! await init();
//! document.addEventListener("DOMContentLoaded", () => initContactForm());
//! ```
//!
//! ## Feature Flags
//!
//! - `console_error_panic_hook` - readable panic messages in the browser console
//! - `debug-hooks` - enables `debug_log!` output in WASM builds

pub mod controller;
pub mod logging;
pub mod message;
pub mod scheduler;
pub mod settings;
pub mod transport;
pub mod view;

#[cfg(target_arch = "wasm32")]
pub mod dom;

pub use controller::{FormController, SubmitError};
pub use message::{MessageKind, ValidationMessage};
pub use scheduler::{ManualScheduler, Scheduler, Task, TaskHandle};
pub use settings::{DomSettings, FormSettings, SettingsError};
pub use transport::{
	Completion, SimulatedTransport, SubmissionTransport, TransportError, TransportResult,
};
pub use view::FormView;

#[cfg(target_arch = "wasm32")]
pub use scheduler::BrowserScheduler;

#[cfg(target_arch = "wasm32")]
pub use dom::{DomFormView, MountedContactForm, init_contact_form, mount_contact_form};

// Re-exported so the logging macros resolve from downstream crates.
#[doc(hidden)]
pub mod __private {
	#[cfg(not(target_arch = "wasm32"))]
	pub use tracing;
	#[cfg(target_arch = "wasm32")]
	pub use web_sys;
}
