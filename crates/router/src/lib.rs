//! Typed navigation dispatch.
//!
//! A caller binds a host, a symbolic action, flags and payload values on a
//! [`RouterSession`], or calls a method on a proxy generated with
//! `#[router_proxy]` (the default `macros` feature). The action is resolved
//! through the configured module registries and the resulting
//! [`NavigationRequest`] is handed to the bound [`NavigationHost`].
//!
//! ```ignore
//! #[router_proxy]
//! pub trait ProfileRoutes {
//!     #[route(action = "open_profile")]
//!     fn open_profile(&self, #[key("userId")] user_id: i64) -> waypoint_router::Result<DispatchOutcome>;
//! }
//!
//! let router = Router::from_collected(&config);
//! let routes: ProfileRoutesProxy = router.create(Host::primary(activity), None);
//! routes.open_profile(42)?;
//! ```

mod config;
mod error;
mod host;
mod interceptor;
mod proxy;
mod request;
mod router;
mod session;
pub mod testing;

pub use config::RouterConfig;
pub use error::{ConfigError, Result, RouterError};
pub use host::{Host, HostKind, NavigationHost};
pub use interceptor::Interceptor;
pub use proxy::{ProxyArg, ProxyDispatcher, RouteInterface, RouteMethod, RouterProxy};
pub use request::{NavigationRequest, PAYLOAD_EXTRA_KEY};
pub use router::Router;
pub use session::{DispatchOutcome, RouterSession};
pub use waypoint_intent::{NavigationFlags, PayloadBundle, PayloadError, PayloadValue};
#[cfg(feature = "macros")]
pub use waypoint_router_macros::router_proxy;
pub use waypoint_routes::{
	Destination, DestinationKind, ModuleList, NavigationResolver, RegistryError, RegistryLocator,
	RegistryTable, RouteMap, RouteRegistry,
};
