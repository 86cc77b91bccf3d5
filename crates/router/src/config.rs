//! Router configuration.
//!
//! Configuration is written in TOML:
//!
//! ```toml
//! # Resolution order; earlier modules shadow later ones.
//! modules = ["user", "order"]
//! # A comma-separated string is accepted as well:
//! # modules = "user,order"
//!
//! # Optional, defaults to "RouteMap".
//! registry_suffix = "RouteMap"
//! ```

use std::path::Path;
use std::sync::Arc;

use serde::Deserialize;
use waypoint_routes::{DEFAULT_REGISTRY_SUFFIX, ModuleList, NavigationResolver, RegistryLocator, RegistryTable};

use crate::error::ConfigError;

/// Module list and naming used to build a [`NavigationResolver`].
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RouterConfig {
	/// Modules in resolution order.
	pub modules: ModuleList,
	/// Suffix appended to capitalized module names to form registry names.
	#[serde(default = "default_suffix")]
	pub registry_suffix: String,
}

fn default_suffix() -> String {
	DEFAULT_REGISTRY_SUFFIX.to_owned()
}

impl RouterConfig {
	/// Creates a configuration with the default registry suffix.
	pub fn new(modules: ModuleList) -> Self {
		Self {
			modules,
			registry_suffix: default_suffix(),
		}
	}

	/// Parses a TOML document.
	///
	/// # Errors
	///
	/// Returns [`ConfigError::Toml`] for malformed input and
	/// [`ConfigError::EmptyModuleList`] if no module is named.
	pub fn from_toml_str(input: &str) -> Result<Self, ConfigError> {
		let config: RouterConfig = toml::from_str(input)?;
		if config.modules.is_empty() {
			return Err(ConfigError::EmptyModuleList);
		}
		Ok(config)
	}

	/// Reads and parses a TOML file.
	///
	/// # Errors
	///
	/// Returns [`ConfigError::Io`] if the file cannot be read, otherwise the
	/// errors of [`RouterConfig::from_toml_str`].
	pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
		let path = path.as_ref();
		let input = std::fs::read_to_string(path).map_err(|error| ConfigError::Io {
			path: path.to_path_buf(),
			error,
		})?;
		let config = Self::from_toml_str(&input)?;
		tracing::debug!(path = %path.display(), modules = config.modules.len(), "loaded router config");
		Ok(config)
	}

	/// Builds a resolver over the configured modules.
	pub fn resolver(&self, locator: Arc<dyn RegistryLocator>) -> NavigationResolver {
		NavigationResolver::new(self.modules.clone(), locator).with_suffix(self.registry_suffix.clone())
	}

	/// Collects every registry submitted with `register_route_map!`, named
	/// with the configured suffix.
	pub fn registry_table(&self) -> RegistryTable {
		RegistryTable::collected_with_suffix(self.registry_suffix.as_str())
	}
}
