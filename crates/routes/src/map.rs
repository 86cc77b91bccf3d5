//! Per-module route registries.

use std::collections::HashMap;

use tracing::debug;

use crate::destination::Destination;
use crate::error::{RegistryError, Result};


/// Provider of action to destination mappings for one module.
///
/// Implementations must be cheap to query; the resolver calls
/// [`RouteRegistry::lookup`] once per configured module on every resolution
/// until a match is found.
pub trait RouteRegistry: Send + Sync {
	/// Canonical name of this registry (e.g. `"UserRouteMap"`).
	fn name(&self) -> &str;

	/// Looks up the destination registered for `action`.
	fn lookup(&self, action: &str) -> Option<Destination>;

	/// Returns every action this registry knows, in no particular order.
	fn actions(&self) -> Vec<&str>;
}

/// Policy for handling an action declared more than once in one registry.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DuplicatePolicy {
	/// Fail the build with [`RegistryError::DuplicateAction`].
	#[default]
	Reject,
	/// Keep the first destination seen for an action.
	FirstWins,
	/// Overwrite with the last destination seen.
	LastWins,
}

/// In-memory [`RouteRegistry`] keyed by action.
#[derive(Debug, Clone)]
pub struct RouteMap {
	name: String,
	routes: HashMap<String, Destination>,
}

impl RouteMap {
	/// Starts building a registry with the given canonical name.
	pub fn builder(name: impl Into<String>) -> RouteMapBuilder {
		RouteMapBuilder::new(name)
	}

	/// Returns the destination registered for `action`.
	pub fn get(&self, action: &str) -> Option<&Destination> {
		self.routes.get(action)
	}

	/// Number of registered actions.
	pub fn len(&self) -> usize {
		self.routes.len()
	}

	/// Returns true if no action is registered.
	pub fn is_empty(&self) -> bool {
		self.routes.is_empty()
	}
}

impl RouteRegistry for RouteMap {
	fn name(&self) -> &str {
		&self.name
	}

	fn lookup(&self, action: &str) -> Option<Destination> {
		self.routes.get(action).copied()
	}

	fn actions(&self) -> Vec<&str> {
		self.routes.keys().map(String::as_str).collect()
	}
}

/// Builder for [`RouteMap`].
#[derive(Debug)]
pub struct RouteMapBuilder {
	name: String,
	entries: Vec<(String, Destination)>,
	policy: DuplicatePolicy,
}

impl RouteMapBuilder {
	/// Creates an empty builder.
	pub fn new(name: impl Into<String>) -> Self {
		Self {
			name: name.into(),
			entries: Vec::new(),
			policy: DuplicatePolicy::default(),
		}
	}

	/// Declares a route.
	pub fn route(mut self, action: impl Into<String>, destination: Destination) -> Self {
		self.entries.push((action.into(), destination));
		self
	}

	/// Sets the duplicate-action policy.
	pub fn duplicate_policy(mut self, policy: DuplicatePolicy) -> Self {
		self.policy = policy;
		self
	}

	/// Builds the registry, applying the duplicate policy in declaration order.
	///
	/// # Errors
	///
	/// Returns [`RegistryError::DuplicateAction`] if an action is declared
	/// twice with different destinations under [`DuplicatePolicy::Reject`].
	/// Re-declaring an identical route is not a conflict.
	pub fn build(self) -> Result<RouteMap> {
		let mut routes: HashMap<String, Destination> = HashMap::with_capacity(self.entries.len());

		for (action, destination) in self.entries {
			let Some(&existing) = routes.get(&action) else {
				routes.insert(action, destination);
				continue;
			};
			if existing == destination {
				continue;
			}
			match self.policy {
				DuplicatePolicy::Reject => {
					return Err(RegistryError::DuplicateAction {
						registry: self.name,
						action,
					});
				}
				DuplicatePolicy::FirstWins => {
					debug!(registry = %self.name, action, kept = %existing, "ignoring duplicate route");
				}
				DuplicatePolicy::LastWins => {
					debug!(registry = %self.name, action, replaced = %existing, "overriding duplicate route");
					routes.insert(action, destination);
				}
			}
		}

		Ok(RouteMap { name: self.name, routes })
	}
}

/// Builds a [`RouteMap`] from a route list.
///
/// Evaluates to `Result<RouteMap, RegistryError>`.
///
/// ```
/// use waypoint_routes::{RouteRegistry, route_map};
///
/// let map = route_map!("UserRouteMap";
///     "open_profile" => foreground("ProfileScreen"),
///     "sync_profile" => service("ProfileSync"),
/// )
/// .unwrap();
/// assert_eq!(map.lookup("open_profile").unwrap().name, "ProfileScreen");
/// ```
#[macro_export]
macro_rules! route_map {
	($name:expr; $($action:literal => $kind:ident($dest:literal)),* $(,)?) => {
		$crate::RouteMap::builder($name)
			$(.route($action, $crate::Destination::$kind($dest)))*
			.build()
	};
}
