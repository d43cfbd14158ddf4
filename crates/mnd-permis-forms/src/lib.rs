//! # mnd-permis-forms
//!
//! Domain layer of the MND Permis contact form: field validators, the upload
//! size constraint, submission attempts, and the live input formatting used
//! by the browser binding.
//!
//! Nothing here touches the DOM, so the whole crate builds and tests on the
//! native host as well as on `wasm32-unknown-unknown`.
//!
//! ## Example
//!
//! ```
//! use mnd_permis_forms::{FormSnapshot, ValidationError, fields};
//!
//! let snapshot = FormSnapshot::new()
//!     .with_field(fields::TELEPHONE, "06 12 34 56 78")
//!     .with_field(fields::EMAIL, "test@example.com");
//!
//! assert_eq!(snapshot.validate(), Err(ValidationError::ConsentRequired));
//! ```

pub mod attachment;
pub mod error;
pub mod formatting;
pub mod messages;
pub mod submission;
pub mod validators;

pub use attachment::{Attachment, AttachmentConstraint, DEFAULT_MAX_ATTACHMENT_MIB};
pub use error::{AttachmentError, ValidationError, ValidationResult};
pub use formatting::{capitalize_name, format_phone_input};
pub use submission::{FormSnapshot, SubmissionAttempt, SubmissionStatus, fields};
pub use validators::{ConsentValidator, EmailValidator, FieldValidator, PhoneValidator};
