//! Error types for routing and configuration.

use std::path::PathBuf;

use thiserror::Error;
use waypoint_intent::PayloadError;
use waypoint_routes::{Destination, ResolveError};

/// Errors that reach the caller of the binding, dispatch or proxy API.
///
/// Every variant is a programming error at the call site. Conditions that are
/// expected at runtime (unknown action, service or embedded destinations) are
/// reported through [`DispatchOutcome`](crate::DispatchOutcome) instead.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RouterError {
	/// Dispatch was attempted without an action.
	#[error("action not assigned")]
	MissingAction,
	/// Dispatch was attempted without binding a host.
	#[error("no host bound")]
	UnboundHost,
	/// Both a primary container and a sub-container were bound.
	#[error("both a primary container and a sub-container are bound")]
	AmbiguousHostBinding,
	/// The action resolved to something that is not a navigable kind.
	#[error("action '{action}' resolved to {destination}, which is not navigable")]
	InvalidDestinationKind {
		/// Action being dispatched.
		action: String,
		/// Destination the action resolved to.
		destination: Destination,
	},
	/// A bound value has no payload representation.
	#[error("unsupported payload value kind for key '{key}': {type_name}")]
	UnsupportedValueKind {
		/// Key the value was bound under.
		key: String,
		/// Rust type name of the rejected value.
		type_name: &'static str,
	},
	/// A proxy method carries no route action.
	#[error("method '{interface}::{method}' has no route action")]
	MissingRouterItemAnnotation {
		/// Interface name.
		interface: &'static str,
		/// Method name.
		method: &'static str,
	},
	/// A proxy was invoked with a method its interface does not declare.
	#[error("interface '{interface}' has no method '{method}'")]
	UnknownMethod {
		/// Interface name.
		interface: &'static str,
		/// Requested method name.
		method: String,
	},
	/// A proxy method was invoked with the wrong number of arguments.
	#[error("method '{method}' takes {expected} arguments, got {got}")]
	ArgumentCountMismatch {
		/// Method name.
		method: &'static str,
		/// Declared parameter count.
		expected: usize,
		/// Supplied argument count.
		got: usize,
	},
}

impl From<PayloadError> for RouterError {
	fn from(error: PayloadError) -> Self {
		match error {
			PayloadError::UnsupportedValueKind { key, type_name } => {
				RouterError::UnsupportedValueKind { key, type_name }
			}
		}
	}
}

impl From<ResolveError> for RouterError {
	fn from(error: ResolveError) -> Self {
		match error {
			ResolveError::MissingAction => RouterError::MissingAction,
		}
	}
}

/// Result type for routing operations.
pub type Result<T> = std::result::Result<T, RouterError>;

/// Errors that can occur when loading router configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
	/// Error reading a configuration file.
	#[error("I/O error reading {path}: {error}")]
	Io {
		/// Path to the file that failed to read.
		path: PathBuf,
		/// The underlying I/O error.
		error: std::io::Error,
	},

	/// Error parsing TOML syntax or shape.
	#[error("TOML parse error: {0}")]
	Toml(#[from] toml::de::Error),

	/// The configuration names no module.
	#[error("module list is empty")]
	EmptyModuleList,
}
