//! DOM binding tests
//!
//! Run with `wasm-pack test --headless --chrome crates/mnd-permis-pages`.

#![cfg(target_arch = "wasm32")]

use mnd_permis_forms::{Attachment, SubmissionStatus, fields};
use mnd_permis_pages::dom::{STYLES_ELEMENT_ID, capture_snapshot, mount_contact_form};
use mnd_permis_pages::{DomFormView, FormSettings, FormView, ValidationMessage};
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{Document, HtmlButtonElement, HtmlFormElement, HtmlInputElement};

wasm_bindgen_test_configure!(run_in_browser);

const FIXTURE: &str = r#"
<div class="contact-form__wrapper">
	<form id="join-form">
		<input id="nom" name="nom" type="text">
		<input id="prenom" name="prenom" type="text">
		<input id="telephone" name="telephone" type="tel">
		<input id="email" name="email" type="email">
		<input id="cv" name="cv" type="file">
		<span id="file-name"></span>
		<input id="rgpd" name="rgpd" type="checkbox">
		<button type="submit"><span>Envoyer</span></button>
	</form>
</div>
"#;

fn document() -> Document {
	web_sys::window().unwrap().document().unwrap()
}

fn install_fixture() -> Document {
	let document = document();
	let body = document.body().unwrap();
	body.set_inner_html(FIXTURE);
	document
}

fn input(document: &Document, id: &str) -> HtmlInputElement {
	document
		.get_element_by_id(id)
		.unwrap()
		.dyn_into::<HtmlInputElement>()
		.unwrap()
}

fn view(document: &Document) -> DomFormView {
	DomFormView::new(
		web_sys::window().unwrap(),
		document.clone(),
		&FormSettings::default().dom,
	)
	.unwrap()
}

fn message_count(document: &Document) -> u32 {
	document.get_elements_by_class_name("form-message").length()
}

#[wasm_bindgen_test]
fn test_insert_message_prepends_into_wrapper() {
	let document = install_fixture();
	let mut view = view(&document);

	view.insert_message(&ValidationMessage::error("Erreur"));

	let wrapper = document
		.query_selector(".contact-form__wrapper")
		.unwrap()
		.unwrap();
	let first = wrapper.first_element_child().unwrap();
	assert_eq!(first.class_name(), "form-message form-message--error");
	assert_eq!(first.text_content().unwrap(), "Erreur");
}

#[wasm_bindgen_test]
fn test_remove_then_insert_leaves_one_message() {
	let document = install_fixture();
	let mut view = view(&document);

	view.insert_message(&ValidationMessage::error("a"));
	view.remove_message();
	view.insert_message(&ValidationMessage::success("b"));

	assert_eq!(message_count(&document), 1);
	view.remove_message();
	view.remove_message();
	assert_eq!(message_count(&document), 0);
}

#[wasm_bindgen_test]
fn test_fade_adds_class() {
	let document = install_fixture();
	let mut view = view(&document);
	view.insert_message(&ValidationMessage::success("ok"));

	view.fade_message();

	let message = document.query_selector(".form-message").unwrap().unwrap();
	assert!(message.class_list().contains("fade-out"));
}

#[wasm_bindgen_test]
fn test_busy_state_restores_label() {
	let document = install_fixture();
	let mut view = view(&document);
	let button = document
		.query_selector("button[type=\"submit\"]")
		.unwrap()
		.unwrap()
		.dyn_into::<HtmlButtonElement>()
		.unwrap();

	view.set_busy(true);
	assert!(button.disabled());
	assert_eq!(button.inner_html(), "<span>Envoi en cours...</span>");

	view.set_busy(false);
	assert!(!button.disabled());
	assert_eq!(button.inner_html(), "<span>Envoyer</span>");
}

#[wasm_bindgen_test]
fn test_capture_snapshot_reads_fields() {
	let document = install_fixture();
	input(&document, "telephone").set_value("06 12 34 56 78");
	input(&document, "email").set_value("test@example.com");
	input(&document, "rgpd").set_checked(true);
	let form = document
		.get_element_by_id("join-form")
		.unwrap()
		.dyn_into::<HtmlFormElement>()
		.unwrap();

	let snapshot = capture_snapshot(&form).unwrap();

	assert_eq!(snapshot.get(fields::TELEPHONE), "06 12 34 56 78");
	assert_eq!(snapshot.get(fields::EMAIL), "test@example.com");
	assert_eq!(snapshot.get(fields::CONSENT), "on");
	assert_eq!(snapshot.attachment, None);
	assert_eq!(snapshot.validate(), Ok(()));
}

#[wasm_bindgen_test]
fn test_unchecked_consent_is_absent() {
	let document = install_fixture();
	let form = document
		.get_element_by_id("join-form")
		.unwrap()
		.dyn_into::<HtmlFormElement>()
		.unwrap();

	let snapshot = capture_snapshot(&form).unwrap();

	assert!(!snapshot.values.contains_key(fields::CONSENT));
}

#[wasm_bindgen_test]
fn test_mount_wires_controller() {
	let document = install_fixture();
	let mounted = mount_contact_form(&document, FormSettings::default()).unwrap();

	assert!(document.get_element_by_id(STYLES_ELEMENT_ID).is_some());
	mounted.controller().show_message(ValidationMessage::error("x"));
	mounted.controller().show_message(ValidationMessage::error("y"));
	assert_eq!(message_count(&document), 1);

	let label = mounted
		.controller()
		.on_file_selected(Some(&Attachment::new("cv.pdf", 1024 * 1024)))
		.unwrap();
	assert_eq!(label.as_deref(), Some("cv.pdf (1.00 MB)"));
	assert_eq!(
		document.get_element_by_id("file-name").unwrap().text_content().unwrap(),
		"cv.pdf (1.00 MB)"
	);
	assert_eq!(mounted.controller().status(), SubmissionStatus::Idle);
}
