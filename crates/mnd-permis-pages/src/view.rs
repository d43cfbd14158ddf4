//! The UI surface driven by the form controller
//!
//! [`FormView`] is everything the controller needs from the page. The browser
//! implementation lives in [`crate::dom`]; tests use an in-memory recorder.

use crate::message::ValidationMessage;

/// Presentation operations on one contact form.
///
/// Implementations only mutate what they are told to; the controller owns the
/// workflow and decides when each call happens.
pub trait FormView {
	/// Enters or leaves the busy state.
	///
	/// Busy disables the submit control and swaps its label for the
	/// submitting indicator; leaving it restores the original label.
	fn set_busy(&mut self, busy: bool);

	/// Clears every field and the file-name display.
	fn reset_fields(&mut self);

	/// Shows `label` next to the file input.
	fn show_file_name(&mut self, label: &str);

	/// Clears the file input and the file-name display.
	fn clear_file_selection(&mut self);

	/// Inserts `message` ahead of the form and scrolls it into view.
	///
	/// Called only when no message is displayed.
	fn insert_message(&mut self, message: &ValidationMessage);

	/// Starts the fade-out transition of the displayed message.
	fn fade_message(&mut self);

	/// Removes the displayed message. Must tolerate there being none.
	fn remove_message(&mut self);

	/// Scrolls the viewport back to the top of the page.
	fn scroll_to_top(&mut self);
}
