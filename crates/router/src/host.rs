//! Navigation origins and the host primitive they forward to.

use core::fmt;
use std::sync::Arc;

use crate::request::NavigationRequest;

/// The host environment's navigation primitive.
///
/// Implemented by whatever owns real navigation (a window stack, a view
/// controller, a test recorder). The router never inspects what happens after
/// these calls return.
pub trait NavigationHost {
	/// Starts the destination described by `request`.
	fn start(&self, request: &NavigationRequest);

	/// Starts the destination and asks for a result correlated by
	/// `request.request_code`, which is always `Some` here.
	fn start_for_result(&self, request: &NavigationRequest);
}

/// Which kind of container a navigation originates from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HostKind {
	/// Top-level container.
	Primary,
	/// Container nested inside a primary container.
	Sub,
}

impl fmt::Display for HostKind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Primary => f.write_str("primary"),
			Self::Sub => f.write_str("sub"),
		}
	}
}

/// Navigation origin bound to a session.
///
/// Exactly one kind of container is bound at a time. A sub-container forwards
/// through its own navigation entry point rather than its parent's.
#[derive(Clone)]
pub enum Host {
	/// Top-level container.
	Primary(Arc<dyn NavigationHost>),
	/// Nested container.
	Sub(Arc<dyn NavigationHost>),
}

impl Host {
	/// Wraps a primary container.
	pub fn primary<H: NavigationHost + 'static>(host: Arc<H>) -> Self {
		Self::Primary(host)
	}

	/// Wraps a sub-container.
	pub fn sub<H: NavigationHost + 'static>(host: Arc<H>) -> Self {
		Self::Sub(host)
	}

	/// Returns the container kind.
	pub fn kind(&self) -> HostKind {
		match self {
			Self::Primary(_) => HostKind::Primary,
			Self::Sub(_) => HostKind::Sub,
		}
	}

	pub(crate) fn navigator(&self) -> &dyn NavigationHost {
		match self {
			Self::Primary(host) | Self::Sub(host) => host.as_ref(),
		}
	}
}

impl fmt::Debug for Host {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_tuple("Host").field(&self.kind()).finish()
	}
}
