//! Form workflow controller
//!
//! Owns the lifecycle of the contact form: attachment checks, validation,
//! the busy state during submission, the single visible message, and the
//! reset once the submission went through.
//!
//! ## State machine
//!
//! ```mermaid
//! stateDiagram-v2
//!     [*] --> Idle
//!     Idle --> Validating: on_submit
//!     Validating --> Idle: oversized attachment or invalid field (error message)
//!     Validating --> Submitting: valid (busy)
//!     Submitting --> Succeeded: transport ok
//!     Succeeded --> Idle: reset form
//!     Submitting --> Idle: transport error (error message)
//! ```
//!
//! `on_submit` is refused with [`SubmitError::Busy`] while a submission is in
//! flight, whatever the state of the submit button.

use crate::message::ValidationMessage;
use crate::scheduler::{Scheduler, TaskHandle};
use crate::settings::FormSettings;
use crate::transport::{SimulatedTransport, SubmissionTransport, TransportResult};
use crate::view::FormView;
use crate::{error_log, info_log, warn_log};
use mnd_permis_forms::{
	Attachment, AttachmentError, FormSnapshot, SubmissionAttempt, SubmissionStatus,
	ValidationError, messages,
};
use std::cell::RefCell;
use std::rc::{Rc, Weak};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SubmitError {
	#[error("A submission is already in progress")]
	Busy,
	#[error(transparent)]
	Attachment(#[from] AttachmentError),
	#[error(transparent)]
	Invalid(#[from] ValidationError),
}

struct DisplayedMessage {
	id: u64,
	message: ValidationMessage,
	// Pending fade, then pending removal
	dismissal: TaskHandle,
}

struct Inner {
	view: Box<dyn FormView>,
	transport: Rc<dyn SubmissionTransport>,
	scheduler: Rc<dyn Scheduler>,
	settings: FormSettings,
	status: SubmissionStatus,
	attempt: Option<SubmissionAttempt>,
	in_flight: Option<TaskHandle>,
	message: Option<DisplayedMessage>,
	next_attempt_id: u64,
	next_message_id: u64,
}

/// Controller for one contact form.
///
/// Cloning is cheap and every clone drives the same form, which is how event
/// listeners share it. Dropping the last clone cancels pending timers.
#[derive(Clone)]
pub struct FormController {
	inner: Rc<RefCell<Inner>>,
}

impl FormController {
	pub fn new<V>(
		view: V,
		transport: Rc<dyn SubmissionTransport>,
		scheduler: Rc<dyn Scheduler>,
		settings: FormSettings,
	) -> Self
	where
		V: FormView + 'static,
	{
		Self {
			inner: Rc::new(RefCell::new(Inner {
				view: Box::new(view),
				transport,
				scheduler,
				settings,
				status: SubmissionStatus::Idle,
				attempt: None,
				in_flight: None,
				message: None,
				next_attempt_id: 0,
				next_message_id: 0,
			})),
		}
	}

	/// Controller whose submissions go through a [`SimulatedTransport`]
	/// using the configured delay.
	pub fn simulated<V>(view: V, scheduler: Rc<dyn Scheduler>, settings: FormSettings) -> Self
	where
		V: FormView + 'static,
	{
		let transport = SimulatedTransport::new(Rc::clone(&scheduler), settings.submit_delay());
		Self::new(view, Rc::new(transport), scheduler, settings)
	}

	pub fn status(&self) -> SubmissionStatus {
		self.inner.borrow().status
	}

	/// The current attempt, if one exists.
	///
	/// A failed attempt stays here until the next submission; a successful
	/// one is discarded when the form resets.
	pub fn attempt(&self) -> Option<SubmissionAttempt> {
		self.inner.borrow().attempt.clone()
	}

	/// The message currently displayed, if any.
	pub fn current_message(&self) -> Option<ValidationMessage> {
		self.inner
			.borrow()
			.message
			.as_ref()
			.map(|displayed| displayed.message.clone())
	}

	pub fn settings(&self) -> FormSettings {
		self.inner.borrow().settings.clone()
	}

	/// Handles a change of the file input.
	///
	/// Returns the label displayed for an accepted file. An oversized file is
	/// cleared from the input and reported with an error message.
	pub fn on_file_selected(
		&self,
		file: Option<&Attachment>,
	) -> Result<Option<String>, AttachmentError> {
		let mut inner = self.inner.borrow_mut();
		let Some(file) = file else {
			inner.view.show_file_name("");
			return Ok(None);
		};

		match inner.settings.attachment_constraint().check(file) {
			Ok(label) => {
				inner.view.show_file_name(&label);
				Ok(Some(label))
			}
			Err(err) => {
				warn_log!("Rejected attachment {}: {}", file.name, err);
				inner.view.clear_file_selection();
				let weak = Rc::downgrade(&self.inner);
				Self::display(&mut inner, weak, ValidationMessage::error(err.to_string()));
				Err(err)
			}
		}
	}

	/// Validates `snapshot` and, if it passes, hands it to the transport.
	///
	/// The attachment is checked against the size limit first. An oversized
	/// file is cleared from the input, whatever the input accepted earlier.
	/// Field validation then stops at the first failing field, shows its error
	/// message and leaves the form untouched.
	pub fn on_submit(&self, snapshot: FormSnapshot) -> Result<(), SubmitError> {
		let (transport, attempt) = {
			let mut inner = self.inner.borrow_mut();
			if inner.status == SubmissionStatus::Submitting {
				warn_log!("Submission ignored: another submission is in progress");
				return Err(SubmitError::Busy);
			}

			inner.status = SubmissionStatus::Validating;
			if let Some(file) = snapshot.attachment.as_ref() {
				if let Err(err) = inner.settings.attachment_constraint().check(file) {
					warn_log!("Submission refused, attachment {}: {}", file.name, err);
					inner.status = SubmissionStatus::Idle;
					inner.view.clear_file_selection();
					let weak = Rc::downgrade(&self.inner);
					Self::display(&mut inner, weak, ValidationMessage::error(err.to_string()));
					return Err(err.into());
				}
			}

			inner.next_attempt_id += 1;
			let mut attempt = SubmissionAttempt::new(inner.next_attempt_id, snapshot);

			if let Err(err) = attempt.validate() {
				info_log!("Submission {} invalid: {}", attempt.id, err.field());
				inner.attempt = Some(attempt);
				inner.status = SubmissionStatus::Idle;
				let weak = Rc::downgrade(&self.inner);
				Self::display(&mut inner, weak, ValidationMessage::error(err.to_string()));
				return Err(err.into());
			}

			attempt.status = SubmissionStatus::Submitting;
			inner.status = SubmissionStatus::Submitting;
			inner.attempt = Some(attempt.clone());
			inner.view.set_busy(true);
			(Rc::clone(&inner.transport), attempt)
		};

		// The transport may complete synchronously, so no borrow is held here.
		let weak = Rc::downgrade(&self.inner);
		let id = attempt.id;
		let handle = transport.send(
			&attempt,
			Box::new(move |result| {
				if let Some(inner) = weak.upgrade() {
					Self::complete(&inner, id, result);
				}
			}),
		);

		let mut inner = self.inner.borrow_mut();
		if inner.status == SubmissionStatus::Submitting && Self::is_current(&inner, id) {
			inner.in_flight = Some(handle);
		}
		Ok(())
	}

	/// Replaces whatever message is displayed with `message`.
	pub fn show_message(&self, message: ValidationMessage) {
		let mut inner = self.inner.borrow_mut();
		let weak = Rc::downgrade(&self.inner);
		Self::display(&mut inner, weak, message);
	}

	fn is_current(inner: &Inner, attempt_id: u64) -> bool {
		inner
			.attempt
			.as_ref()
			.is_some_and(|attempt| attempt.id == attempt_id)
	}

	fn complete(this: &Rc<RefCell<Inner>>, attempt_id: u64, result: TransportResult) {
		let mut inner = this.borrow_mut();
		if inner.status != SubmissionStatus::Submitting || !Self::is_current(&inner, attempt_id) {
			return;
		}
		let finished = inner.in_flight.take();

		match result {
			Ok(()) => {
				info_log!("Submission {} sent", attempt_id);
				inner.status = SubmissionStatus::Succeeded;
				Self::display(
					&mut inner,
					Rc::downgrade(this),
					ValidationMessage::submission_succeeded(),
				);
				inner.view.reset_fields();
				inner.view.set_busy(false);
				inner.view.scroll_to_top();
				inner.attempt = None;
			}
			Err(err) => {
				error_log!("Submission {} failed: {}", attempt_id, err);
				if let Some(attempt) = inner.attempt.as_mut() {
					attempt.status = SubmissionStatus::Failed;
				}
				Self::display(
					&mut inner,
					Rc::downgrade(this),
					ValidationMessage::error(messages::SUBMISSION_FAILED),
				);
				inner.view.set_busy(false);
			}
		}
		inner.status = SubmissionStatus::Idle;
		drop(inner);
		drop(finished);
	}

	fn display(inner: &mut Inner, this: Weak<RefCell<Inner>>, message: ValidationMessage) {
		// Dropping the previous message cancels its pending fade or removal.
		let previous = inner.message.take();
		inner.view.remove_message();
		drop(previous);

		inner.next_message_id += 1;
		let id = inner.next_message_id;
		inner.view.insert_message(&message);

		let dismissal = inner.scheduler.schedule(
			inner.settings.message_display(),
			Box::new(move || {
				if let Some(this) = this.upgrade() {
					Self::fade(&this, id);
				}
			}),
		);
		inner.message = Some(DisplayedMessage {
			id,
			message,
			dismissal,
		});
	}

	fn fade(this: &Rc<RefCell<Inner>>, message_id: u64) {
		let mut guard = this.borrow_mut();
		let inner = &mut *guard;
		let displayed = match inner.message.as_mut() {
			Some(displayed) if displayed.id == message_id => displayed,
			_ => return,
		};

		inner.view.fade_message();
		let weak = Rc::downgrade(this);
		displayed.dismissal = inner.scheduler.schedule(
			inner.settings.message_fade(),
			Box::new(move || {
				if let Some(this) = weak.upgrade() {
					Self::remove(&this, message_id);
				}
			}),
		);
	}

	fn remove(this: &Rc<RefCell<Inner>>, message_id: u64) {
		let mut inner = this.borrow_mut();
		if !inner
			.message
			.as_ref()
			.is_some_and(|displayed| displayed.id == message_id)
		{
			return;
		}
		let removed = inner.message.take();
		inner.view.remove_message();
		drop(inner);
		drop(removed);
	}
}

impl std::fmt::Debug for FormController {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		let inner = self.inner.borrow();
		f.debug_struct("FormController")
			.field("status", &inner.status)
			.field("attempt", &inner.attempt.as_ref().map(|attempt| attempt.id))
			.field(
				"message",
				&inner.message.as_ref().map(|displayed| &displayed.message),
			)
			.finish()
	}
}
