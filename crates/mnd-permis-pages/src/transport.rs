//! Submission transport
//!
//! The controller hands a validated [`SubmissionAttempt`] to a
//! [`SubmissionTransport`] and waits for the completion callback. The site has
//! no backend yet, so [`SimulatedTransport`] just waits and reports success; a
//! real transport plugs in here without touching validation or messaging.

use crate::scheduler::{Scheduler, TaskHandle};
use mnd_permis_forms::SubmissionAttempt;
use std::rc::Rc;
use std::time::Duration;

/// Failure to deliver a submission.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TransportError {
	#[error("Network error: {0}")]
	Network(String),
	#[error("Unexpected response status: {0}")]
	Status(u16),
	#[error("Submission timed out")]
	Timeout,
}

pub type TransportResult = Result<(), TransportError>;

/// Called exactly once when the transport is done with an attempt.
pub type Completion = Box<dyn FnOnce(TransportResult) + 'static>;

/// Delivers validated submissions.
pub trait SubmissionTransport {
	/// Starts sending `attempt` and calls `on_complete` with the outcome.
	///
	/// `on_complete` may be called before this method returns. Dropping the
	/// returned handle abandons the send and `on_complete` is never called.
	fn send(&self, attempt: &SubmissionAttempt, on_complete: Completion) -> TaskHandle;
}

/// Stand-in transport that succeeds after a fixed delay.
pub struct SimulatedTransport {
	scheduler: Rc<dyn Scheduler>,
	delay: Duration,
}

impl SimulatedTransport {
	pub fn new(scheduler: Rc<dyn Scheduler>, delay: Duration) -> Self {
		Self { scheduler, delay }
	}

	pub fn delay(&self) -> Duration {
		self.delay
	}
}

impl SubmissionTransport for SimulatedTransport {
	fn send(&self, attempt: &SubmissionAttempt, on_complete: Completion) -> TaskHandle {
		crate::debug_log!(
			"Simulating submission {} ({} fields)",
			attempt.id,
			attempt.snapshot.values.len()
		);
		self.scheduler
			.schedule(self.delay, Box::new(move || on_complete(Ok(()))))
	}
}

impl std::fmt::Debug for SimulatedTransport {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("SimulatedTransport")
			.field("delay", &self.delay)
			.finish()
	}
}
