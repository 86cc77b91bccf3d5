//! In-memory host for exercising dispatch without a UI.

use parking_lot::Mutex;

use crate::host::NavigationHost;
use crate::request::NavigationRequest;

/// One call made against a [`RecordingHost`].
#[derive(Debug, Clone, PartialEq)]
pub enum RecordedNavigation {
	/// [`NavigationHost::start`] was called.
	Start(NavigationRequest),
	/// [`NavigationHost::start_for_result`] was called.
	StartForResult(NavigationRequest),
}

impl RecordedNavigation {
	/// Returns the recorded request.
	pub fn request(&self) -> &NavigationRequest {
		match self {
			Self::Start(request) | Self::StartForResult(request) => request,
		}
	}
}

/// [`NavigationHost`] that records every navigation instead of performing it.
#[derive(Debug, Default)]
pub struct RecordingHost {
	calls: Mutex<Vec<RecordedNavigation>>,
}

impl RecordingHost {
	/// Creates a host with no recorded calls.
	pub fn new() -> Self {
		Self::default()
	}

	/// Returns every recorded call in order.
	pub fn calls(&self) -> Vec<RecordedNavigation> {
		self.calls.lock().clone()
	}

	/// Returns the most recent call.
	pub fn last(&self) -> Option<RecordedNavigation> {
		self.calls.lock().last().cloned()
	}

	/// Number of recorded calls.
	pub fn len(&self) -> usize {
		self.calls.lock().len()
	}

	/// Returns true if the host was never invoked.
	pub fn is_empty(&self) -> bool {
		self.calls.lock().is_empty()
	}
}

impl NavigationHost for RecordingHost {
	fn start(&self, request: &NavigationRequest) {
		self.calls.lock().push(RecordedNavigation::Start(request.clone()));
	}

	fn start_for_result(&self, request: &NavigationRequest) {
		self.calls
			.lock()
			.push(RecordedNavigation::StartForResult(request.clone()));
	}
}
