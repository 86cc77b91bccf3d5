//! Fluent binding and dispatch for a single navigation.
//!
//! # Dispatch Order
//!
//! 1. Host binding: none bound fails with [`RouterError::UnboundHost`], both
//!    kinds bound fails with [`RouterError::AmbiguousHostBinding`]
//! 2. Action: unset or empty fails with [`RouterError::MissingAction`]
//! 3. Resolution: no registry match ends with [`DispatchOutcome::Unresolved`]
//! 4. Classification: service and embedded destinations end with
//!    [`DispatchOutcome::Unsupported`], other kinds fail with
//!    [`RouterError::InvalidDestinationKind`]
//! 5. Interceptor: a refusal ends with [`DispatchOutcome::Intercepted`]
//! 6. The request is built and forwarded to the bound host

use std::any::Any;
use std::sync::Arc;

use tracing::{debug, warn};
use waypoint_intent::{NavigationFlags, PayloadBundle, PayloadValue};
use waypoint_routes::{DestinationKind, NavigationResolver};

use crate::error::{Result, RouterError};
use crate::host::{Host, HostKind, NavigationHost};
use crate::interceptor::Interceptor;
use crate::request::NavigationRequest;


/// How a dispatch ended when it did not fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchOutcome {
	/// The request was handed to the host.
	Navigated,
	/// The interceptor refused the navigation.
	Intercepted,
	/// No registry maps the action.
	Unresolved,
	/// The action resolved to a kind that cannot be navigated to yet.
	Unsupported(DestinationKind),
}

impl DispatchOutcome {
	/// Returns true if the host navigation primitive was invoked.
	pub fn navigated(self) -> bool {
		self == Self::Navigated
	}
}

#[derive(Debug, Clone, Default)]
enum HostBinding {
	#[default]
	Unbound,
	Bound(Host),
	/// Both kinds were bound at some point. Sticky until the session is dropped.
	Conflicting,
}

/// Binding state for one navigation flow.
///
/// Built fluently and consumed by [`RouterSession::dispatch`] or
/// [`RouterSession::dispatch_for_result`], so state from one navigation can
/// never leak into another. Not meant to be shared between threads; confine a
/// session to a single logical call.
///
/// ```ignore
/// let outcome = router
///     .session()
///     .bind_primary(activity)
///     .bind_action("open_profile")
///     .bind_value("userId", 42)
///     .bind_flags(NavigationFlags::SINGLE_TOP)
///     .dispatch()?;
/// ```
pub struct RouterSession {
	resolver: Arc<NavigationResolver>,
	host: HostBinding,
	action: Option<String>,
	flags: NavigationFlags,
	bundle: PayloadBundle,
	interceptor: Option<Arc<dyn Interceptor>>,
}

impl RouterSession {
	/// Creates an empty session resolving through `resolver`.
	pub fn new(resolver: Arc<NavigationResolver>) -> Self {
		Self {
			resolver,
			host: HostBinding::Unbound,
			action: None,
			flags: NavigationFlags::empty(),
			bundle: PayloadBundle::new(),
			interceptor: None,
		}
	}

	/// Binds the navigation origin.
	///
	/// Rebinding the same kind replaces the host. Binding the other kind makes
	/// the session fail with [`RouterError::AmbiguousHostBinding`] at dispatch.
	pub fn bind_host(mut self, host: Host) -> Self {
		self.host = match self.host {
			HostBinding::Unbound => HostBinding::Bound(host),
			HostBinding::Bound(current) if current.kind() == host.kind() => HostBinding::Bound(host),
			HostBinding::Bound(current) => {
				debug!(bound = %current.kind(), requested = %host.kind(), "conflicting host binding");
				HostBinding::Conflicting
			}
			HostBinding::Conflicting => HostBinding::Conflicting,
		};
		self
	}

	/// Binds a primary container.
	pub fn bind_primary<H: NavigationHost + 'static>(self, host: Arc<H>) -> Self {
		self.bind_host(Host::primary(host))
	}

	/// Binds a sub-container.
	pub fn bind_sub<H: NavigationHost + 'static>(self, host: Arc<H>) -> Self {
		self.bind_host(Host::sub(host))
	}

	/// Binds the symbolic action to resolve.
	pub fn bind_action(mut self, action: impl Into<String>) -> Self {
		self.action = Some(action.into());
		self
	}

	/// Sets the navigation flags, replacing any previously bound flags.
	pub fn bind_flags(mut self, flags: NavigationFlags) -> Self {
		self.flags = flags;
		self
	}

	/// Writes a payload value. A later value under the same key wins.
	pub fn bind_value(mut self, key: impl Into<String>, value: impl Into<PayloadValue>) -> Self {
		self.bundle.put(key, value);
		self
	}

	/// Writes a type-erased payload value.
	///
	/// # Errors
	///
	/// Returns [`RouterError::UnsupportedValueKind`] if the runtime type has no
	/// payload representation.
	pub fn bind_any(mut self, key: impl Into<String>, value: &dyn Any, type_name: &'static str) -> Result<Self> {
		self.bundle.put_any(key, value, type_name)?;
		Ok(self)
	}

	/// Installs the gate consulted before the host is invoked.
	pub fn bind_interceptor<I: Interceptor + 'static>(self, interceptor: I) -> Self {
		self.bind_shared_interceptor(Arc::new(interceptor))
	}

	pub(crate) fn bind_shared_interceptor(mut self, interceptor: Arc<dyn Interceptor>) -> Self {
		self.interceptor = Some(interceptor);
		self
	}

	/// Returns the bound action.
	pub fn action(&self) -> Option<&str> {
		self.action.as_deref()
	}

	/// Returns the bound flags.
	pub fn flags(&self) -> NavigationFlags {
		self.flags
	}

	/// Returns the payload accumulated so far.
	pub fn bundle(&self) -> &PayloadBundle {
		&self.bundle
	}

	/// Returns the kind of the bound host, if exactly one is bound.
	pub fn host_kind(&self) -> Option<HostKind> {
		match &self.host {
			HostBinding::Bound(host) => Some(host.kind()),
			_ => None,
		}
	}

	/// Resolves the action and navigates to it.
	///
	/// # Errors
	///
	/// Fails on precondition violations: no host, both host kinds, no action,
	/// or a destination of no navigable kind. An unknown action is not an
	/// error; it returns [`DispatchOutcome::Unresolved`].
	pub fn dispatch(self) -> Result<DispatchOutcome> {
		self.run(None)
	}

	/// Resolves the action and navigates to it, expecting a result correlated
	/// by `request_code`.
	///
	/// # Errors
	///
	/// Same as [`RouterSession::dispatch`].
	pub fn dispatch_for_result(self, request_code: u32) -> Result<DispatchOutcome> {
		self.run(Some(request_code))
	}

	fn run(self, request_code: Option<u32>) -> Result<DispatchOutcome> {
		let host = match self.host {
			HostBinding::Bound(host) => host,
			HostBinding::Unbound => return Err(RouterError::UnboundHost),
			HostBinding::Conflicting => return Err(RouterError::AmbiguousHostBinding),
		};
		let action = match self.action {
			Some(action) if !action.is_empty() => action,
			_ => return Err(RouterError::MissingAction),
		};

		let Some(target) = self.resolver.resolve(&action)? else {
			warn!(action, "could not match a destination");
			return Ok(DispatchOutcome::Unresolved);
		};

		match target.kind {
			DestinationKind::Foreground => {}
			kind @ (DestinationKind::Service | DestinationKind::Embedded) => {
				debug!(action, %target, "destination kind not dispatchable yet");
				return Ok(DispatchOutcome::Unsupported(kind));
			}
			DestinationKind::Other => {
				return Err(RouterError::InvalidDestinationKind {
					action,
					destination: target,
				});
			}
		}

		if let Some(interceptor) = &self.interceptor
			&& !interceptor.allow()
		{
			debug!(action, "navigation intercepted");
			return Ok(DispatchOutcome::Intercepted);
		}

		let request = NavigationRequest {
			action,
			target,
			payload: self.bundle,
			flags: self.flags,
			origin: host.kind(),
			request_code,
		};
		debug!(
			action = %request.action,
			target = request.target.name,
			origin = %request.origin,
			?request_code,
			values = request.payload.len(),
			"dispatching navigation"
		);

		let navigator = host.navigator();
		if request.expects_result() {
			navigator.start_for_result(&request);
		} else {
			navigator.start(&request);
		}
		Ok(DispatchOutcome::Navigated)
	}
}

impl std::fmt::Debug for RouterSession {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("RouterSession")
			.field("host", &self.host)
			.field("action", &self.action)
			.field("flags", &self.flags)
			.field("bundle", &self.bundle)
			.field("intercepted", &self.interceptor.is_some())
			.finish()
	}
}
