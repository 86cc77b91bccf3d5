use thiserror::Error;

/// Errors raised while writing into a [`PayloadBundle`](crate::PayloadBundle).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PayloadError {
	/// The runtime type of a value has no payload representation.
	#[error("unsupported payload value kind for key '{key}': {type_name}")]
	UnsupportedValueKind {
		/// Key the value was bound under.
		key: String,
		/// Rust type name of the rejected value.
		type_name: &'static str,
	},
}

/// Result type for payload operations.
pub type Result<T> = std::result::Result<T, PayloadError>;
