//! Route registries and action resolution.
//!
//! This crate provides the lookup half of navigation dispatch:
//! - [`Destination`]: Resolved target plus its [`DestinationKind`]
//! - [`RouteRegistry`]: Per-module provider of action to destination mappings
//! - [`RouteMap`]: Default in-memory registry built with a [`DuplicatePolicy`]
//! - [`ModuleList`]: Ordered module names that drive resolution order
//! - [`RegistryTable`]: Explicit module to registry-constructor table
//! - [`NavigationResolver`]: First-match search over the ordered registries

mod destination;
mod error;
mod map;
mod modules;
mod resolver;
mod table;

pub use destination::{Destination, DestinationKind};
pub use error::{RegistryError, ResolveError, Result};
pub use map::{DuplicatePolicy, RouteMap, RouteMapBuilder, RouteRegistry};
pub use modules::{DEFAULT_REGISTRY_SUFFIX, ModuleList, canonical_registry_name};
pub use resolver::NavigationResolver;
pub use table::{RegistryCtor, RegistryLocator, RegistryReg, RegistryTable};

#[doc(hidden)]
pub use inventory;
