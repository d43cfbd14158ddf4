//! Cancellable deferred tasks
//!
//! Everything time-based in the contact form (the simulated submission and
//! the message dismissal) goes through a [`Scheduler`]. Scheduling returns a
//! [`TaskHandle`]; dropping or cancelling the handle guarantees the task will
//! not run.
//!
//! - [`BrowserScheduler`] uses `setTimeout` through `gloo-timers` (WASM only).
//! - [`ManualScheduler`] runs on a virtual clock advanced explicitly, which is
//!   what the native tests use.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::fmt;
use std::rc::{Rc, Weak};
use std::time::Duration;

/// A deferred unit of work.
pub type Task = Box<dyn FnOnce() + 'static>;

/// Schedules tasks to run once after a delay.
pub trait Scheduler {
	/// Runs `task` after `delay` unless the returned handle is cancelled or dropped first.
	fn schedule(&self, delay: Duration, task: Task) -> TaskHandle;
}

/// Handle to a scheduled task.
///
/// Dropping the handle cancels the task. Cancelling a task that already ran
/// is a no-op.
#[must_use = "dropping a TaskHandle cancels the task"]
pub struct TaskHandle {
	cancel: Option<Box<dyn FnOnce() + 'static>>,
}

impl TaskHandle {
	/// Creates a handle that calls `cancel` when cancelled or dropped.
	pub fn new<F>(cancel: F) -> Self
	where
		F: FnOnce() + 'static,
	{
		Self {
			cancel: Some(Box::new(cancel)),
		}
	}

	/// A handle with nothing to cancel, for work that completed synchronously.
	pub fn completed() -> Self {
		Self { cancel: None }
	}

	pub fn cancel(mut self) {
		self.run_cancel();
	}

	fn run_cancel(&mut self) {
		if let Some(cancel) = self.cancel.take() {
			cancel();
		}
	}
}

impl Drop for TaskHandle {
	fn drop(&mut self) {
		self.run_cancel();
	}
}

impl fmt::Debug for TaskHandle {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("TaskHandle")
			.field("armed", &self.cancel.is_some())
			.finish()
	}
}

/// Scheduler backed by `setTimeout`.
#[cfg(target_arch = "wasm32")]
#[derive(Debug, Default, Clone, Copy)]
pub struct BrowserScheduler;

#[cfg(target_arch = "wasm32")]
impl Scheduler for BrowserScheduler {
	fn schedule(&self, delay: Duration, task: Task) -> TaskHandle {
		use gloo_timers::callback::Timeout;

		let millis = u32::try_from(delay.as_millis()).unwrap_or(u32::MAX);
		let slot: Rc<RefCell<Option<Timeout>>> = Rc::new(RefCell::new(None));
		let pending = Rc::downgrade(&slot);
		let timeout = Timeout::new(millis, move || {
			// An empty or dropped slot means the handle was cancelled.
			let fired = pending.upgrade().and_then(|slot| {
				let timeout = slot.borrow_mut().take();
				timeout
			});
			if let Some(timeout) = fired {
				task();
				drop(timeout);
			}
		});
		*slot.borrow_mut() = Some(timeout);
		// Dropping the slot drops the Timeout, which calls clearTimeout.
		TaskHandle::new(move || drop(slot))
	}
}

#[derive(Default)]
struct ManualQueue {
	now: Duration,
	next_seq: u64,
	// Keyed by (due time, sequence) so equal deadlines run in scheduling order.
	tasks: BTreeMap<(Duration, u64), Task>,
}

/// Scheduler driven by a virtual clock.
///
/// Nothing runs until [`advance`](Self::advance) moves the clock past a task's
/// deadline. Tasks scheduled by running tasks are honoured within the same
/// `advance` call if they fall due before its end.
///
/// # Examples
///
/// ```
/// use mnd_permis_pages::scheduler::{ManualScheduler, Scheduler};
/// use std::cell::Cell;
/// use std::rc::Rc;
/// use std::time::Duration;
///
/// let scheduler = ManualScheduler::new();
/// let fired = Rc::new(Cell::new(false));
/// let flag = fired.clone();
/// let _handle = scheduler.schedule(Duration::from_millis(10), Box::new(move || flag.set(true)));
///
/// scheduler.advance(Duration::from_millis(9));
/// assert!(!fired.get());
/// scheduler.advance(Duration::from_millis(1));
/// assert!(fired.get());
/// ```
#[derive(Clone, Default)]
pub struct ManualScheduler {
	queue: Rc<RefCell<ManualQueue>>,
}

impl ManualScheduler {
	pub fn new() -> Self {
		Self::default()
	}

	/// Current virtual time.
	pub fn now(&self) -> Duration {
		self.queue.borrow().now
	}

	/// Number of tasks still waiting to run.
	pub fn pending(&self) -> usize {
		self.queue.borrow().tasks.len()
	}

	/// Moves the clock forward by `by`, running every task that falls due.
	pub fn advance(&self, by: Duration) {
		let target = self.now() + by;
		loop {
			// Release the borrow before running so tasks can schedule or cancel.
			let next = {
				let mut queue = self.queue.borrow_mut();
				let due_key = queue
					.tasks
					.keys()
					.next()
					.copied()
					.filter(|(due, _)| *due <= target);
				match due_key {
					Some(key) => {
						queue.now = key.0;
						queue.tasks.remove(&key)
					}
					None => None,
				}
			};
			match next {
				Some(task) => task(),
				None => break,
			}
		}
		self.queue.borrow_mut().now = target;
	}

	/// Runs every pending task, including ones scheduled along the way.
	pub fn run_until_idle(&self) {
		loop {
			let due = match self.queue.borrow().tasks.keys().next() {
				Some(&(due, _)) => due,
				None => break,
			};
			let now = self.now();
			self.advance(due.saturating_sub(now));
		}
	}
}

impl Scheduler for ManualScheduler {
	fn schedule(&self, delay: Duration, task: Task) -> TaskHandle {
		let key = {
			let mut queue = self.queue.borrow_mut();
			let key = (queue.now + delay, queue.next_seq);
			queue.next_seq += 1;
			queue.tasks.insert(key, task);
			key
		};
		let queue: Weak<RefCell<ManualQueue>> = Rc::downgrade(&self.queue);
		TaskHandle::new(move || {
			if let Some(queue) = queue.upgrade() {
				// Dropping the task outside the borrow keeps its captures free to touch the queue.
				let removed = queue.borrow_mut().tasks.remove(&key);
				drop(removed);
			}
		})
	}
}

impl fmt::Debug for ManualScheduler {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let queue = self.queue.borrow();
		f.debug_struct("ManualScheduler")
			.field("now", &queue.now)
			.field("pending", &queue.tasks.len())
			.finish()
	}
}
