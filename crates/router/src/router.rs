use std::sync::Arc;

use waypoint_routes::{NavigationResolver, RegistryLocator};

use crate::config::RouterConfig;
use crate::host::Host;
use crate::proxy::{ProxyDispatcher, RouterProxy};
use crate::session::RouterSession;

/// Entry point owning the shared resolver.
///
/// Cheap to clone; every clone resolves through the same registry cache.
#[derive(Debug, Clone)]
pub struct Router {
	resolver: Arc<NavigationResolver>,
}

impl Router {
	/// Creates a router around an existing resolver.
	pub fn new(resolver: NavigationResolver) -> Self {
		Self {
			resolver: Arc::new(resolver),
		}
	}

	/// Creates a router for the configured modules, locating registries with `locator`.
	///
	/// The locator must name registries with `config.registry_suffix`; see
	/// [`Router::from_collected`] for the common case.
	pub fn from_config(config: &RouterConfig, locator: Arc<dyn RegistryLocator>) -> Self {
		Self::new(config.resolver(locator))
	}

	/// Creates a router over every registry submitted with
	/// `register_route_map!`, named with the configured suffix.
	pub fn from_collected(config: &RouterConfig) -> Self {
		Self::from_config(config, Arc::new(config.registry_table()))
	}

	/// Returns the shared resolver.
	pub fn resolver(&self) -> &Arc<NavigationResolver> {
		&self.resolver
	}

	/// Starts a fresh session.
	pub fn session(&self) -> RouterSession {
		RouterSession::new(Arc::clone(&self.resolver))
	}

	/// Returns a dispatcher for `P`'s interface, for callers that want to set
	/// flags or an interceptor before building the proxy.
	pub fn dispatcher<P: RouterProxy>(&self, host: Host) -> ProxyDispatcher {
		ProxyDispatcher::new(P::INTERFACE, Arc::clone(&self.resolver), host)
	}

	/// Builds a proxy implementation of `P`'s interface.
	///
	/// With a `request_code` every call dispatches for a result correlated by
	/// that code; without one every call is a plain dispatch.
	pub fn create<P: RouterProxy>(&self, host: Host, request_code: Option<u32>) -> P {
		let mut dispatcher = self.dispatcher::<P>(host);
		if let Some(code) = request_code {
			dispatcher = dispatcher.with_request_code(code);
		}
		P::from_dispatcher(dispatcher)
	}
}
