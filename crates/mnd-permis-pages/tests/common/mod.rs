//! Shared fixtures for the controller integration tests.

#![allow(dead_code)]

use mnd_permis_forms::{FormSnapshot, fields};
use mnd_permis_pages::{
	FormController, FormSettings, FormView, ManualScheduler, Scheduler, SubmissionTransport,
	ValidationMessage,
};
use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;
use std::time::Duration;

pub const ORIGINAL_LABEL: &str = "<span>Envoyer ma candidature</span>";

/// What a recorded page currently shows.
#[derive(Debug, Default)]
pub struct PageState {
	pub fields: BTreeMap<String, String>,
	pub file_name: String,
	pub file_selected: bool,
	pub submit_disabled: bool,
	pub submit_label: String,
	/// Message nodes in document order: (message, fading)
	pub messages: Vec<(ValidationMessage, bool)>,
	pub scroll_to_top_count: usize,
	pub reset_count: usize,
	pub events: Vec<String>,
}

impl PageState {
	pub fn snapshot(&self) -> FormSnapshot {
		FormSnapshot {
			values: self.fields.clone(),
			attachment: None,
		}
	}

	pub fn visible_message(&self) -> Option<&ValidationMessage> {
		self.messages.first().map(|(message, _)| message)
	}
}

/// In-memory [`FormView`] that records every call.
#[derive(Clone, Default)]
pub struct RecordingView {
	pub state: Rc<RefCell<PageState>>,
}

impl RecordingView {
	pub fn new() -> Self {
		let view = Self::default();
		view.state.borrow_mut().submit_label = ORIGINAL_LABEL.to_string();
		view
	}

	pub fn fill(&self, name: &str, value: &str) {
		self.state
			.borrow_mut()
			.fields
			.insert(name.to_string(), value.to_string());
	}

	pub fn snapshot(&self) -> FormSnapshot {
		self.state.borrow().snapshot()
	}

	fn record(&self, event: impl Into<String>) {
		self.state.borrow_mut().events.push(event.into());
	}
}

impl FormView for RecordingView {
	fn set_busy(&mut self, busy: bool) {
		self.record(format!("set_busy({busy})"));
		let mut state = self.state.borrow_mut();
		state.submit_disabled = busy;
		state.submit_label = if busy {
			"<span>Envoi en cours...</span>".to_string()
		} else {
			ORIGINAL_LABEL.to_string()
		};
	}

	fn reset_fields(&mut self) {
		self.record("reset_fields");
		let mut state = self.state.borrow_mut();
		state.fields.clear();
		state.file_name.clear();
		state.file_selected = false;
		state.reset_count += 1;
	}

	fn show_file_name(&mut self, label: &str) {
		self.record(format!("show_file_name({label})"));
		let mut state = self.state.borrow_mut();
		state.file_name = label.to_string();
		state.file_selected = !label.is_empty();
	}

	fn clear_file_selection(&mut self) {
		self.record("clear_file_selection");
		let mut state = self.state.borrow_mut();
		state.file_name.clear();
		state.file_selected = false;
	}

	fn insert_message(&mut self, message: &ValidationMessage) {
		self.record(format!("insert_message({})", message.kind));
		self.state
			.borrow_mut()
			.messages
			.insert(0, (message.clone(), false));
	}

	fn fade_message(&mut self) {
		self.record("fade_message");
		if let Some((_, fading)) = self.state.borrow_mut().messages.first_mut() {
			*fading = true;
		}
	}

	fn remove_message(&mut self) {
		self.record("remove_message");
		let mut state = self.state.borrow_mut();
		if !state.messages.is_empty() {
			state.messages.remove(0);
		}
	}

	fn scroll_to_top(&mut self) {
		self.record("scroll_to_top");
		self.state.borrow_mut().scroll_to_top_count += 1;
	}
}

/// A controller over a recording view, with a virtual clock.
pub struct Harness {
	pub controller: FormController,
	pub view: RecordingView,
	pub scheduler: ManualScheduler,
}

impl Harness {
	pub fn new() -> Self {
		Self::with_settings(FormSettings::default())
	}

	pub fn with_settings(settings: FormSettings) -> Self {
		let view = RecordingView::new();
		let scheduler = ManualScheduler::new();
		let controller = FormController::simulated(
			view.clone(),
			Rc::new(scheduler.clone()) as Rc<dyn Scheduler>,
			settings,
		);
		Self {
			controller,
			view,
			scheduler,
		}
	}

	pub fn with_transport(transport: Rc<dyn SubmissionTransport>) -> Self {
		let view = RecordingView::new();
		let scheduler = ManualScheduler::new();
		let controller = FormController::new(
			view.clone(),
			transport,
			Rc::new(scheduler.clone()),
			FormSettings::default(),
		);
		Self {
			controller,
			view,
			scheduler,
		}
	}

	pub fn fill_valid(&self) {
		self.view.fill(fields::LAST_NAME, "Alaoui");
		self.view.fill(fields::FIRST_NAME, "Sara");
		self.view.fill(fields::TELEPHONE, "0612345678");
		self.view.fill(fields::EMAIL, "test@example.com");
		self.view.fill(fields::CONSENT, "on");
	}

	pub fn advance_ms(&self, ms: u64) {
		self.scheduler.advance(Duration::from_millis(ms));
	}

	pub fn state(&self) -> std::cell::Ref<'_, PageState> {
		self.view.state.borrow()
	}
}
