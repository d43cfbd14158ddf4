//! Browser binding for the contact form
//!
//! [`DomFormView`] implements [`FormView`] on top of `web-sys`, and
//! [`mount_contact_form`] wires the page events to a [`FormController`]:
//!
//! | Element | Event | Action |
//! |---------|-------|--------|
//! | form | `submit` | [`FormController::on_submit`] with the current form data |
//! | file input | `change` | [`FormController::on_file_selected`] |
//! | phone input | `input` | [`format_phone_input`] |
//! | name inputs | `blur` | [`capitalize_name`] |
//!
//! Pages load the module and call `initContactForm()` once the DOM is ready.

use crate::controller::{FormController, SubmitError};
use crate::message::{FADE_OUT_CLASS, MESSAGE_CLASS, MESSAGE_STYLES, ValidationMessage};
use crate::scheduler::BrowserScheduler;
use crate::settings::{DomSettings, FormSettings, SETTINGS_ELEMENT_ID, SettingsError};
use crate::view::FormView;
use crate::{debug_log, error_log, info_log};
use mnd_permis_forms::{Attachment, FormSnapshot, capitalize_name, format_phone_input, messages};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{
	Document, Element, Event, EventTarget, HtmlButtonElement, HtmlFormElement, HtmlInputElement,
	ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition, ScrollToOptions, Window,
};

/// Id of the `<style>` element holding [`MESSAGE_STYLES`].
pub const STYLES_ELEMENT_ID: &str = "form-message-styles";

#[derive(Debug, thiserror::Error)]
pub enum MountError {
	#[error("No global window available")]
	NoWindow,
	#[error("Window has no document")]
	NoDocument,
	#[error("Missing element: {0}")]
	MissingElement(String),
	#[error("DOM operation failed: {0}")]
	Dom(String),
	#[error(transparent)]
	Settings(#[from] SettingsError),
}

impl From<MountError> for JsValue {
	fn from(err: MountError) -> Self {
		JsValue::from_str(&err.to_string())
	}
}

fn dom_error(err: JsValue) -> MountError {
	MountError::Dom(format!("{err:?}"))
}

fn element_by_id<T: JsCast>(document: &Document, id: &str) -> Option<T> {
	document
		.get_element_by_id(id)
		.and_then(|element| element.dyn_into::<T>().ok())
}

/// [`FormView`] backed by the live DOM.
pub struct DomFormView {
	window: Window,
	document: Document,
	form: HtmlFormElement,
	submit: Option<HtmlButtonElement>,
	file_input: Option<HtmlInputElement>,
	file_name: Option<Element>,
	message_anchor: Option<Element>,
	message: Option<Element>,
	original_label: Option<String>,
}

impl DomFormView {
	/// Looks up every element named in `dom`. Only the form itself is required.
	pub fn new(window: Window, document: Document, dom: &DomSettings) -> Result<Self, MountError> {
		let form: HtmlFormElement = element_by_id(&document, &dom.form_id)
			.ok_or_else(|| MountError::MissingElement(format!("#{}", dom.form_id)))?;
		let submit = form
			.query_selector(&dom.submit_selector)
			.map_err(dom_error)?
			.and_then(|element| element.dyn_into::<HtmlButtonElement>().ok());
		let message_anchor = document
			.query_selector(&dom.message_anchor_selector)
			.map_err(dom_error)?;

		Ok(Self {
			file_input: element_by_id(&document, &dom.file_input_id),
			file_name: document.get_element_by_id(&dom.file_name_id),
			window,
			document,
			form,
			submit,
			message_anchor,
			message: None,
			original_label: None,
		})
	}

	pub fn form(&self) -> &HtmlFormElement {
		&self.form
	}

	fn set_file_name(&self, text: &str) {
		if let Some(file_name) = &self.file_name {
			file_name.set_text_content(Some(text));
		}
	}

	fn create_message(&self, message: &ValidationMessage) -> Result<Element, JsValue> {
		let element = self.document.create_element("div")?;
		element.set_class_name(&message.class_name());
		element.set_text_content(Some(&message.text));

		match &self.message_anchor {
			Some(anchor) => {
				anchor.insert_before(&element, anchor.first_child().as_ref())?;
			}
			None => self.form.before_with_node_1(&element)?,
		}
		Ok(element)
	}
}

impl FormView for DomFormView {
	fn set_busy(&mut self, busy: bool) {
		let Some(submit) = &self.submit else {
			return;
		};
		if busy {
			if self.original_label.is_none() {
				self.original_label = Some(submit.inner_html());
			}
			submit.set_disabled(true);
			submit.set_inner_html(&format!("<span>{}</span>", messages::SUBMITTING_LABEL));
		} else {
			submit.set_disabled(false);
			if let Some(label) = self.original_label.take() {
				submit.set_inner_html(&label);
			}
		}
	}

	fn reset_fields(&mut self) {
		self.form.reset();
		self.set_file_name("");
	}

	fn show_file_name(&mut self, label: &str) {
		self.set_file_name(label);
	}

	fn clear_file_selection(&mut self) {
		if let Some(input) = &self.file_input {
			input.set_value("");
		}
		self.set_file_name("");
	}

	fn insert_message(&mut self, message: &ValidationMessage) {
		match self.create_message(message) {
			Ok(element) => {
				let options = ScrollIntoViewOptions::new();
				options.set_behavior(ScrollBehavior::Smooth);
				options.set_block(ScrollLogicalPosition::Nearest);
				element.scroll_into_view_with_scroll_into_view_options(&options);
				self.message = Some(element);
			}
			Err(err) => error_log!("Failed to insert form message: {:?}", err),
		}
	}

	fn fade_message(&mut self) {
		if let Some(element) = &self.message {
			if let Err(err) = element.class_list().add_1(FADE_OUT_CLASS) {
				error_log!("Failed to fade form message: {:?}", err);
			}
		}
	}

	fn remove_message(&mut self) {
		if let Some(element) = self.message.take() {
			element.remove();
		}
		// Markup rendered server-side may already carry a message.
		if let Ok(Some(stray)) = self.document.query_selector(&format!(".{MESSAGE_CLASS}")) {
			stray.remove();
		}
	}

	fn scroll_to_top(&mut self) {
		let options = ScrollToOptions::new();
		options.set_top(0.0);
		options.set_behavior(ScrollBehavior::Smooth);
		self.window.scroll_to_with_scroll_to_options(&options);
	}
}

/// Reads the current values of `form`, including the selected file.
///
/// Unchecked checkboxes contribute nothing, exactly as in a native submission.
pub fn capture_snapshot(form: &HtmlFormElement) -> Result<FormSnapshot, JsValue> {
	let data = web_sys::FormData::new_with_form(form)?;
	let entries =
		js_sys::try_iter(&data)?.ok_or_else(|| JsValue::from_str("FormData is not iterable"))?;

	let mut snapshot = FormSnapshot::new();
	for entry in entries {
		let entry = js_sys::Array::from(&entry?);
		let Some(name) = entry.get(0).as_string() else {
			continue;
		};
		let value = entry.get(1);
		if let Some(text) = value.as_string() {
			snapshot.set(name, text);
		} else if let Ok(file) = value.dyn_into::<web_sys::File>() {
			// An empty file input still submits a nameless, empty file.
			if !file.name().is_empty() {
				snapshot.attachment = Some(Attachment::new(file.name(), file.size() as u64));
			}
		}
	}
	Ok(snapshot)
}

/// Event listener that detaches itself when dropped.
struct Listener {
	target: EventTarget,
	event: &'static str,
	closure: Closure<dyn FnMut(Event)>,
}

impl Listener {
	fn attach<F>(target: &EventTarget, event: &'static str, handler: F) -> Result<Self, MountError>
	where
		F: FnMut(Event) + 'static,
	{
		let closure = Closure::<dyn FnMut(Event)>::new(handler);
		target
			.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
			.map_err(dom_error)?;
		Ok(Self {
			target: target.clone(),
			event,
			closure,
		})
	}
}

impl Drop for Listener {
	fn drop(&mut self) {
		let _ = self
			.target
			.remove_event_listener_with_callback(self.event, self.closure.as_ref().unchecked_ref());
	}
}

/// A contact form wired to its controller.
///
/// Dropping it removes every listener it attached.
pub struct MountedContactForm {
	controller: FormController,
	_listeners: Vec<Listener>,
}

impl MountedContactForm {
	pub fn controller(&self) -> &FormController {
		&self.controller
	}
}

/// Adds the message stylesheet to `<head>` unless it is already there.
pub fn inject_message_styles(document: &Document) -> Result<(), MountError> {
	if document.get_element_by_id(STYLES_ELEMENT_ID).is_some() {
		return Ok(());
	}
	let head = document
		.head()
		.ok_or_else(|| MountError::MissingElement("head".to_string()))?;
	let style = document.create_element("style").map_err(dom_error)?;
	style.set_id(STYLES_ELEMENT_ID);
	style.set_text_content(Some(MESSAGE_STYLES));
	head.append_child(&style).map_err(dom_error)?;
	Ok(())
}

/// Wires the contact form of `document` to a new controller.
pub fn mount_contact_form(
	document: &Document,
	settings: FormSettings,
) -> Result<MountedContactForm, MountError> {
	let window = web_sys::window().ok_or(MountError::NoWindow)?;
	inject_message_styles(document)?;

	let view = DomFormView::new(window, document.clone(), &settings.dom)?;
	let form = view.form().clone();
	let dom = settings.dom.clone();
	let controller = FormController::simulated(view, Rc::new(BrowserScheduler), settings);
	let mut listeners = Vec::new();

	{
		let controller = controller.clone();
		let form_for_submit = form.clone();
		listeners.push(Listener::attach(&form, "submit", move |event: Event| {
			event.prevent_default();
			let snapshot = match capture_snapshot(&form_for_submit) {
				Ok(snapshot) => snapshot,
				Err(err) => {
					error_log!("Failed to read form data: {:?}", err);
					return;
				}
			};
			match controller.on_submit(snapshot) {
				Ok(()) => {}
				Err(SubmitError::Busy) => debug_log!("Submit ignored while busy"),
				Err(SubmitError::Attachment(err)) => debug_log!("Submit rejected: {}", err),
				Err(SubmitError::Invalid(err)) => debug_log!("Submit rejected: {}", err),
			}
		})?);
	}

	if let Some(input) = element_by_id::<HtmlInputElement>(document, &dom.file_input_id) {
		let controller = controller.clone();
		let target = input.clone();
		listeners.push(Listener::attach(&input, "change", move |_event: Event| {
			let file = target
				.files()
				.and_then(|files| files.get(0))
				.map(|file| Attachment::new(file.name(), file.size() as u64));
			let _ = controller.on_file_selected(file.as_ref());
		})?);
	}

	if let Some(input) = element_by_id::<HtmlInputElement>(document, &dom.phone_input_id) {
		let target = input.clone();
		listeners.push(Listener::attach(&input, "input", move |_event: Event| {
			target.set_value(&format_phone_input(&target.value()));
		})?);
	}

	for id in &dom.name_input_ids {
		if let Some(input) = element_by_id::<HtmlInputElement>(document, id) {
			let target = input.clone();
			listeners.push(Listener::attach(&input, "blur", move |_event: Event| {
				target.set_value(&capitalize_name(&target.value()));
			})?);
		}
	}

	info_log!("Contact form #{} mounted ({} listeners)", dom.form_id, listeners.len());
	Ok(MountedContactForm {
		controller,
		_listeners: listeners,
	})
}

/// Reads settings from the page, falling back to defaults.
pub fn load_settings(document: &Document) -> Result<FormSettings, SettingsError> {
	match document
		.get_element_by_id(SETTINGS_ELEMENT_ID)
		.and_then(|element| element.text_content())
	{
		Some(json) => FormSettings::from_json(&json),
		None => Ok(FormSettings::default()),
	}
}

thread_local! {
	static MOUNTED: RefCell<Option<MountedContactForm>> = const { RefCell::new(None) };
}

/// Mounts the contact form of the current page.
///
/// Pages without the form are left alone. Calling it again remounts.
#[wasm_bindgen(js_name = initContactForm)]
pub fn init_contact_form() -> Result<(), JsValue> {
	#[cfg(feature = "console_error_panic_hook")]
	console_error_panic_hook::set_once();

	let window = web_sys::window().ok_or(MountError::NoWindow)?;
	let document = window.document().ok_or(MountError::NoDocument)?;
	let settings = load_settings(&document).map_err(MountError::from)?;

	if document.get_element_by_id(&settings.dom.form_id).is_none() {
		info_log!("No #{} on this page, contact form not mounted", settings.dom.form_id);
		return Ok(());
	}

	// Unmount first so the old listeners are gone before new ones attach.
	MOUNTED.with(|slot| slot.borrow_mut().take());
	let mounted = mount_contact_form(&document, settings)?;
	MOUNTED.with(|slot| *slot.borrow_mut() = Some(mounted));
	Ok(())
}

/// Detaches the contact form listeners and cancels pending timers.
#[wasm_bindgen(js_name = destroyContactForm)]
pub fn destroy_contact_form() {
	let mounted = MOUNTED.with(|slot| slot.borrow_mut().take());
	drop(mounted);
}
