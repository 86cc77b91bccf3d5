//! Ordered, lazily instantiated action resolution.
//!
//! # Resolution Order
//!
//! Registries are searched in [`ModuleList`] order. For each module the
//! canonical registry name is derived, the registry is taken from the cache or
//! located and instantiated, and the action is looked up. The first hit wins;
//! later registries are not consulted.
//!
//! A registry that cannot be located or constructed is logged and skipped.
//! Failures are not cached, so a registry that becomes available later is
//! picked up by the next resolution.

use std::collections::HashMap;
use std::panic::AssertUnwindSafe;
use std::sync::Arc;

use parking_lot::Mutex;
use tracing::{debug, warn};

use crate::destination::Destination;
use crate::error::{RegistryError, ResolveError};
use crate::map::RouteRegistry;
use crate::modules::{DEFAULT_REGISTRY_SUFFIX, ModuleList, canonical_registry_name};
use crate::table::RegistryLocator;

#[cfg(test)]
mod tests;

/// Resolves actions against the registries of the configured modules.
///
/// Shared between sessions through `Arc`; the instance cache is the only
/// mutable state and is guarded by a mutex that is never held while a
/// registry constructor runs.
pub struct NavigationResolver {
	modules: ModuleList,
	suffix: String,
	locator: Arc<dyn RegistryLocator>,
	cache: Mutex<HashMap<String, Arc<dyn RouteRegistry>>>,
}

impl NavigationResolver {
	/// Creates a resolver using [`DEFAULT_REGISTRY_SUFFIX`].
	pub fn new(modules: ModuleList, locator: Arc<dyn RegistryLocator>) -> Self {
		Self {
			modules,
			suffix: DEFAULT_REGISTRY_SUFFIX.to_owned(),
			locator,
			cache: Mutex::new(HashMap::new()),
		}
	}

	/// Overrides the suffix used to derive canonical registry names.
	pub fn with_suffix(mut self, suffix: impl Into<String>) -> Self {
		self.suffix = suffix.into();
		self
	}

	/// Returns the configured module list.
	pub fn modules(&self) -> &ModuleList {
		&self.modules
	}

	/// Resolves `action` to the first matching destination.
	///
	/// Returns `Ok(None)` when no registry maps the action.
	///
	/// # Errors
	///
	/// Returns [`ResolveError::MissingAction`] if `action` is empty.
	pub fn resolve(&self, action: &str) -> Result<Option<Destination>, ResolveError> {
		if action.is_empty() {
			return Err(ResolveError::MissingAction);
		}

		for module in self.modules.iter() {
			let Some(registry) = self.registry_for(module) else {
				continue;
			};
			if let Some(destination) = registry.lookup(action) {
				debug!(action, module, registry = registry.name(), %destination, "action resolved");
				return Ok(Some(destination));
			}
		}

		debug!(action, modules = self.modules.len(), "no registry maps action");
		Ok(None)
	}

	/// Instantiates every configured registry and returns those that loaded,
	/// in module order.
	pub fn registries(&self) -> Vec<Arc<dyn RouteRegistry>> {
		self.modules
			.iter()
			.filter_map(|module| self.registry_for(module))
			.collect()
	}

	/// Drops cached registry instances so the next resolution rebuilds them.
	pub fn clear_cache(&self) {
		self.cache.lock().clear();
	}

	fn registry_for(&self, module: &str) -> Option<Arc<dyn RouteRegistry>> {
		let name = canonical_registry_name(module, &self.suffix);
		if let Some(registry) = self.cache.lock().get(&name) {
			return Some(Arc::clone(registry));
		}

		match self.instantiate(&name) {
			Ok(registry) => {
				let registry: Arc<dyn RouteRegistry> = Arc::from(registry);
				let mut cache = self.cache.lock();
				let cached = cache.entry(name).or_insert(registry);
				Some(Arc::clone(cached))
			}
			Err(error) => {
				warn!(module, registry = %name, %error, "skipping route registry");
				None
			}
		}
	}

	fn instantiate(&self, name: &str) -> Result<Box<dyn RouteRegistry>, RegistryError> {
		match std::panic::catch_unwind(AssertUnwindSafe(|| self.locator.locate(name))) {
			Ok(result) => result,
			Err(_) => Err(RegistryError::Construction {
				name: name.to_owned(),
				reason: "constructor panicked".to_owned(),
			}),
		}
	}
}

impl std::fmt::Debug for NavigationResolver {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("NavigationResolver")
			.field("modules", &self.modules)
			.field("suffix", &self.suffix)
			.field("cached", &self.cache.lock().len())
			.finish()
	}
}
