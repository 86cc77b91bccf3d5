//! Procedural macros for waypoint navigation.
//!
//! - `#[router_proxy]` - generates a navigation proxy for a trait

use proc_macro::TokenStream;

/// Router proxy attribute macro implementation.
mod proxy;

/// Generates a navigation proxy for a trait.
///
/// Every method must carry `#[route(action = "...")]` (or the short form
/// `#[route("...")]`), take `&self` and return
/// `waypoint_router::Result<DispatchOutcome>`. Parameters marked with
/// `#[key("...")]` are written to the payload under each listed key;
/// unmarked parameters are accepted but not sent.
///
/// ```ignore
/// #[router_proxy]
/// pub trait ProfileRoutes {
///     #[route(action = "open_profile")]
///     fn open_profile(&self, #[key("userId")] user_id: i64) -> Result<DispatchOutcome>;
///
///     #[route("open_profile")]
///     fn open_named(&self, #[key("userId", "ownerId")] id: i64, #[key("name")] name: &str)
///         -> Result<DispatchOutcome>;
/// }
/// ```
///
/// Generates the trait without the routing attributes, a `ProfileRoutesProxy`
/// struct implementing it, and an implementation of
/// `waypoint_router::RouterProxy` carrying the routing metadata.
#[proc_macro_attribute]
pub fn router_proxy(attr: TokenStream, item: TokenStream) -> TokenStream {
	proxy::router_proxy(attr, item)
}
