use waypoint_intent::{NavigationFlags, PayloadBundle};
use waypoint_routes::Destination;

use crate::host::HostKind;

/// Extra key under which hosts conventionally embed the payload bundle in
/// their own transport.
pub const PAYLOAD_EXTRA_KEY: &str = "bundle";

/// Fully built navigation request handed to a [`NavigationHost`](crate::NavigationHost).
#[derive(Debug, Clone, PartialEq)]
pub struct NavigationRequest {
	/// Action the request was resolved from.
	pub action: String,
	/// Resolved destination. Always of the foreground kind.
	pub target: Destination,
	/// Payload snapshot.
	pub payload: PayloadBundle,
	/// Navigation flags.
	pub flags: NavigationFlags,
	/// Kind of container the navigation originates from.
	pub origin: HostKind,
	/// Correlation id for result-bearing navigation; `None` for plain dispatch.
	pub request_code: Option<u32>,
}

impl NavigationRequest {
	/// Returns true if the destination's result is expected back.
	pub fn expects_result(&self) -> bool {
		self.request_code.is_some()
	}

	/// Returns the payload paired with [`PAYLOAD_EXTRA_KEY`], ready to be
	/// embedded in a host's own transport.
	pub fn payload_extra(&self) -> (&'static str, &PayloadBundle) {
		(PAYLOAD_EXTRA_KEY, &self.payload)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_payload_extra_uses_bundle_key() {
		let request = NavigationRequest {
			action: "open_profile".into(),
			target: Destination::foreground("ProfileScreen"),
			payload: [("userId", 42)].into_iter().collect(),
			flags: NavigationFlags::empty(),
			origin: HostKind::Primary,
			request_code: None,
		};

		let (key, payload) = request.payload_extra();
		assert_eq!(key, "bundle");
		assert_eq!(payload, &request.payload);
		assert!(!request.expects_result());
	}
}
