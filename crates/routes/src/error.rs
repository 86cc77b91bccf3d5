//! Registry and resolution errors.

use thiserror::Error;

/// Errors produced while building or locating a route registry.
///
/// The resolver treats every variant as recoverable: it logs the failure and
/// moves on to the next module.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
	/// No constructor is registered under the canonical name.
	#[error("no route registry registered as '{0}'")]
	NotRegistered(String),
	/// The constructor ran but could not produce a registry.
	#[error("route registry '{name}' failed to construct: {reason}")]
	Construction {
		/// Canonical registry name.
		name: String,
		/// Failure description.
		reason: String,
	},
	/// The same action was declared twice under [`DuplicatePolicy::Reject`](crate::DuplicatePolicy::Reject).
	#[error("duplicate action '{action}' in route registry '{registry}'")]
	DuplicateAction {
		/// Registry being built.
		registry: String,
		/// Action declared more than once.
		action: String,
	},
}

/// Errors that abort a resolution before any registry is consulted.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolveError {
	/// Resolution was requested without an action.
	#[error("action not assigned")]
	MissingAction,
}

/// Result type for registry operations.
pub type Result<T> = std::result::Result<T, RegistryError>;
