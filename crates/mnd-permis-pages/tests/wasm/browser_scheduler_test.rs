//! Browser scheduler tests
//!
//! Run with `wasm-pack test --headless --chrome crates/mnd-permis-pages`.

#![cfg(target_arch = "wasm32")]

use gloo_timers::future::TimeoutFuture;
use mnd_permis_pages::{BrowserScheduler, Scheduler, TaskHandle};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::Duration;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
async fn test_task_runs_after_delay() {
	let fired = Rc::new(Cell::new(false));
	let flag = Rc::clone(&fired);

	let _handle = BrowserScheduler.schedule(Duration::from_millis(10), Box::new(move || flag.set(true)));

	assert!(!fired.get());
	TimeoutFuture::new(50).await;
	assert!(fired.get());
}

#[wasm_bindgen_test]
async fn test_cancelled_task_never_runs() {
	let fired = Rc::new(Cell::new(false));
	let flag = Rc::clone(&fired);

	let handle = BrowserScheduler.schedule(Duration::from_millis(10), Box::new(move || flag.set(true)));
	handle.cancel();

	TimeoutFuture::new(50).await;
	assert!(!fired.get());
}

#[wasm_bindgen_test]
async fn test_dropped_handle_releases_the_task() {
	let captured = Rc::new(());
	let held = Rc::clone(&captured);

	drop(BrowserScheduler.schedule(Duration::from_millis(10), Box::new(move || drop(held))));

	// The timer was cleared, so nothing keeps the task alive.
	assert_eq!(Rc::strong_count(&captured), 1);
	TimeoutFuture::new(50).await;
	assert_eq!(Rc::strong_count(&captured), 1);
}

#[wasm_bindgen_test]
async fn test_task_can_drop_its_own_handle() {
	let slot: Rc<RefCell<Option<TaskHandle>>> = Rc::new(RefCell::new(None));
	let fired = Rc::new(Cell::new(0));
	let own = Rc::clone(&slot);
	let count = Rc::clone(&fired);

	let handle = BrowserScheduler.schedule(
		Duration::from_millis(10),
		Box::new(move || {
			count.set(count.get() + 1);
			drop(own.borrow_mut().take());
		}),
	);
	*slot.borrow_mut() = Some(handle);

	TimeoutFuture::new(50).await;
	assert_eq!(fired.get(), 1);
	assert!(slot.borrow().is_none());
}
