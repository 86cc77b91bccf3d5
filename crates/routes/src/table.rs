//! Explicit registry tables.
//!
//! A [`RegistryTable`] maps canonical registry names to constructors. Modules
//! either register into a table directly or submit a [`RegistryReg`] through
//! [`register_route_map!`](crate::register_route_map), which
//! [`RegistryTable::collected`] picks up at startup.

use std::collections::HashMap;
use std::fmt;

use crate::error::{RegistryError, Result};
use crate::map::RouteRegistry;
use crate::modules::{DEFAULT_REGISTRY_SUFFIX, canonical_registry_name};

/// Constructor for a module's registry.
pub type RegistryCtor = fn() -> Result<Box<dyn RouteRegistry>>;

type BoxedCtor = Box<dyn Fn() -> Result<Box<dyn RouteRegistry>> + Send + Sync>;

/// Locates and instantiates a registry by canonical name.
pub trait RegistryLocator: Send + Sync {
	/// Instantiates the registry registered as `canonical_name`.
	///
	/// # Errors
	///
	/// Returns [`RegistryError::NotRegistered`] if nothing is registered under
	/// the name, or whatever the constructor reports.
	fn locate(&self, canonical_name: &str) -> Result<Box<dyn RouteRegistry>>;
}

/// Static registration record collected with `inventory`.
pub struct RegistryReg {
	/// Module name, as it appears in the module list.
	pub module: &'static str,
	/// Registry constructor.
	pub ctor: RegistryCtor,
}

inventory::collect!(RegistryReg);

/// Registers a module's registry constructor for [`RegistryTable::collected`].
///
/// ```ignore
/// fn user_routes() -> waypoint_routes::Result<Box<dyn RouteRegistry>> {
///     Ok(Box::new(route_map!("UserRouteMap"; "open_profile" => foreground("ProfileScreen"))?))
/// }
///
/// register_route_map!("user", user_routes);
/// ```
#[macro_export]
macro_rules! register_route_map {
	($module:literal, $ctor:path) => {
		$crate::inventory::submit! {
			$crate::RegistryReg {
				module: $module,
				ctor: $ctor,
			}
		}
	};
}

/// Canonical-name keyed table of registry constructors.
pub struct RegistryTable {
	suffix: String,
	ctors: HashMap<String, BoxedCtor>,
}

impl RegistryTable {
	/// Creates an empty table using [`DEFAULT_REGISTRY_SUFFIX`].
	pub fn new() -> Self {
		Self::with_suffix(DEFAULT_REGISTRY_SUFFIX)
	}

	/// Creates an empty table deriving names with a custom suffix.
	pub fn with_suffix(suffix: impl Into<String>) -> Self {
		Self {
			suffix: suffix.into(),
			ctors: HashMap::new(),
		}
	}

	/// Creates a table from every [`RegistryReg`] submitted in the binary,
	/// using [`DEFAULT_REGISTRY_SUFFIX`].
	pub fn collected() -> Self {
		Self::collected_with_suffix(DEFAULT_REGISTRY_SUFFIX)
	}

	/// Creates a table from every submitted [`RegistryReg`], deriving names
	/// with `suffix`. The suffix must match the one the resolver uses.
	pub fn collected_with_suffix(suffix: impl Into<String>) -> Self {
		let mut table = Self::with_suffix(suffix);
		for reg in inventory::iter::<RegistryReg> {
			table.register(reg.module, reg.ctor);
		}
		table
	}

	/// Registers a constructor for `module` under its canonical name.
	///
	/// A later registration for the same module replaces the earlier one.
	pub fn register<F>(&mut self, module: &str, ctor: F) -> &mut Self
	where
		F: Fn() -> Result<Box<dyn RouteRegistry>> + Send + Sync + 'static,
	{
		let name = canonical_registry_name(module, &self.suffix);
		if self.ctors.insert(name.clone(), Box::new(ctor)).is_some() {
			tracing::debug!(module, registry = %name, "route registry constructor replaced");
		}
		self
	}

	/// Returns the suffix used to derive canonical names.
	pub fn suffix(&self) -> &str {
		&self.suffix
	}

	/// Returns true if a constructor is registered under `canonical_name`.
	pub fn contains(&self, canonical_name: &str) -> bool {
		self.ctors.contains_key(canonical_name)
	}

	/// Number of registered constructors.
	pub fn len(&self) -> usize {
		self.ctors.len()
	}

	/// Returns true if nothing is registered.
	pub fn is_empty(&self) -> bool {
		self.ctors.is_empty()
	}
}

impl Default for RegistryTable {
	fn default() -> Self {
		Self::new()
	}
}

impl fmt::Debug for RegistryTable {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let mut names: Vec<_> = self.ctors.keys().collect();
		names.sort();
		f.debug_struct("RegistryTable")
			.field("suffix", &self.suffix)
			.field("registries", &names)
			.finish()
	}
}

impl RegistryLocator for RegistryTable {
	fn locate(&self, canonical_name: &str) -> Result<Box<dyn RouteRegistry>> {
		let ctor = self
			.ctors
			.get(canonical_name)
			.ok_or_else(|| RegistryError::NotRegistered(canonical_name.to_owned()))?;
		ctor()
	}
}
