//! Interface proxies that turn method calls into navigation.
//!
//! An interface is described by a static [`RouteInterface`]: one
//! [`RouteMethod`] per method, each naming its action and the payload keys of
//! its parameters. [`ProxyDispatcher::invoke`] looks the method up, binds the
//! arguments under their keys on a fresh [`RouterSession`] and dispatches.
//!
//! The `#[router_proxy]` attribute (the `macros` feature) generates the
//! metadata and a typed implementation of the trait on top of this.

use std::any::{Any, type_name};
use std::fmt;
use std::sync::Arc;

use tracing::debug;
use waypoint_intent::NavigationFlags;
use waypoint_routes::NavigationResolver;

use crate::error::{Result, RouterError};
use crate::host::Host;
use crate::interceptor::Interceptor;
use crate::session::{DispatchOutcome, RouterSession};

#[cfg(test)]
mod tests;

/// Routing metadata for one interface method.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteMethod {
	/// Method name.
	pub name: &'static str,
	/// Action dispatched by the method. `None` marks a method that cannot route.
	pub action: Option<&'static str>,
	/// Payload keys per parameter, in parameter order. An empty slice means
	/// the argument is not written to the payload; several keys write it
	/// under each of them.
	pub params: &'static [&'static [&'static str]],
}

/// Routing metadata for an interface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteInterface {
	/// Interface name, for diagnostics.
	pub name: &'static str,
	/// Declared methods.
	pub methods: &'static [RouteMethod],
}

impl RouteInterface {
	/// Finds a method by name.
	pub fn method(&self, name: &str) -> Option<&'static RouteMethod> {
		self.methods.iter().find(|m| m.name == name)
	}
}

/// A type-erased proxy argument together with its type name.
#[derive(Clone, Copy)]
pub struct ProxyArg<'a> {
	value: &'a dyn Any,
	type_name: &'static str,
}

impl<'a> ProxyArg<'a> {
	/// Wraps a reference to an argument.
	pub fn new<T: Any>(value: &'a T) -> Self {
		Self {
			value,
			type_name: type_name::<T>(),
		}
	}

	/// Rust type name of the wrapped value.
	pub fn type_name(&self) -> &'static str {
		self.type_name
	}
}

impl fmt::Debug for ProxyArg<'_> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_tuple("ProxyArg").field(&self.type_name).finish()
	}
}

/// Implemented by generated proxies.
pub trait RouterProxy: Sized {
	/// Metadata of the proxied interface.
	const INTERFACE: &'static RouteInterface;

	/// Wraps a dispatcher configured for [`RouterProxy::INTERFACE`].
	fn from_dispatcher(dispatcher: ProxyDispatcher) -> Self;

	/// Returns the underlying dispatcher.
	fn dispatcher(&self) -> &ProxyDispatcher;
}

/// Forwards interface method calls to fresh router sessions.
///
/// Each call gets its own session, so nothing bound for one call is visible
/// to the next. The host, flags, interceptor and request code configured here
/// apply to every call.
#[derive(Clone)]
pub struct ProxyDispatcher {
	interface: &'static RouteInterface,
	resolver: Arc<NavigationResolver>,
	host: Host,
	request_code: Option<u32>,
	flags: NavigationFlags,
	interceptor: Option<Arc<dyn Interceptor>>,
}

impl ProxyDispatcher {
	/// Creates a dispatcher for plain (result-less) navigation.
	pub fn new(interface: &'static RouteInterface, resolver: Arc<NavigationResolver>, host: Host) -> Self {
		Self {
			interface,
			resolver,
			host,
			request_code: None,
			flags: NavigationFlags::empty(),
			interceptor: None,
		}
	}

	/// Makes every call dispatch for a result correlated by `request_code`.
	pub fn with_request_code(mut self, request_code: u32) -> Self {
		self.request_code = Some(request_code);
		self
	}

	/// Sets the flags bound on every call.
	pub fn with_flags(mut self, flags: NavigationFlags) -> Self {
		self.flags = flags;
		self
	}

	/// Installs an interceptor consulted on every call.
	pub fn with_interceptor<I: Interceptor + 'static>(mut self, interceptor: I) -> Self {
		self.interceptor = Some(Arc::new(interceptor));
		self
	}

	/// Returns the proxied interface.
	pub fn interface(&self) -> &'static RouteInterface {
		self.interface
	}

	/// Returns the request code, if calls dispatch for a result.
	pub fn request_code(&self) -> Option<u32> {
		self.request_code
	}

	/// Dispatches `method` with `args` in parameter order.
	///
	/// # Errors
	///
	/// Returns [`RouterError::UnknownMethod`] if the interface has no such
	/// method, [`RouterError::MissingRouterItemAnnotation`] if it has no
	/// action, [`RouterError::ArgumentCountMismatch`] on wrong arity,
	/// [`RouterError::UnsupportedValueKind`] if a keyed argument has no payload
	/// representation, and any error of [`RouterSession::dispatch`].
	pub fn invoke(&self, method: &str, args: &[ProxyArg<'_>]) -> Result<DispatchOutcome> {
		let interface = self.interface.name;
		let method = self
			.interface
			.method(method)
			.ok_or_else(|| RouterError::UnknownMethod {
				interface,
				method: method.to_owned(),
			})?;
		let action = method.action.ok_or(RouterError::MissingRouterItemAnnotation {
			interface,
			method: method.name,
		})?;
		if method.params.len() != args.len() {
			return Err(RouterError::ArgumentCountMismatch {
				method: method.name,
				expected: method.params.len(),
				got: args.len(),
			});
		}

		let mut session = self.session();
		for (keys, arg) in method.params.iter().zip(args) {
			for &key in keys.iter() {
				debug!(interface, method = method.name, key, kind = arg.type_name, "binding proxy argument");
				session = session.bind_any(key, arg.value, arg.type_name)?;
			}
		}
		let session = session.bind_action(action);

		match self.request_code {
			Some(code) => session.dispatch_for_result(code),
			None => session.dispatch(),
		}
	}

	fn session(&self) -> RouterSession {
		let mut session = RouterSession::new(Arc::clone(&self.resolver))
			.bind_host(self.host.clone())
			.bind_flags(self.flags);
		if let Some(interceptor) = &self.interceptor {
			session = session.bind_shared_interceptor(Arc::clone(interceptor));
		}
		session
	}
}

impl fmt::Debug for ProxyDispatcher {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("ProxyDispatcher")
			.field("interface", &self.interface.name)
			.field("host", &self.host)
			.field("request_code", &self.request_code)
			.field("flags", &self.flags)
			.finish_non_exhaustive()
	}
}
