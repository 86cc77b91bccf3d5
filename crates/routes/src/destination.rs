//! Resolved navigation targets.

use core::fmt;

/// Classification of a registered destination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DestinationKind {
	/// Full-screen destination the host can navigate to.
	Foreground,
	/// Background service. Recognized but not dispatchable.
	Service,
	/// Destination embedded inside another container. Recognized but not dispatchable.
	Embedded,
	/// Registered type that is none of the navigable kinds.
	Other,
}

impl DestinationKind {
	/// Returns the kind name used in logs and errors.
	pub fn as_str(self) -> &'static str {
		match self {
			Self::Foreground => "foreground",
			Self::Service => "service",
			Self::Embedded => "embedded",
			Self::Other => "other",
		}
	}
}

impl fmt::Display for DestinationKind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

/// Destination descriptor returned by a registry lookup.
///
/// `name` is the host-side identifier of the destination (for example the
/// screen type the host instantiates); this crate never interprets it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Destination {
	/// Host-side destination identifier.
	pub name: &'static str,
	/// What kind of destination this is.
	pub kind: DestinationKind,
}

impl Destination {
	/// Creates a descriptor with an explicit kind.
	pub const fn new(name: &'static str, kind: DestinationKind) -> Self {
		Self { name, kind }
	}

	/// Navigable foreground destination.
	pub const fn foreground(name: &'static str) -> Self {
		Self::new(name, DestinationKind::Foreground)
	}

	/// Background service destination.
	pub const fn service(name: &'static str) -> Self {
		Self::new(name, DestinationKind::Service)
	}

	/// Embedded sub-destination.
	pub const fn embedded(name: &'static str) -> Self {
		Self::new(name, DestinationKind::Embedded)
	}

	/// Destination of no navigable kind.
	pub const fn other(name: &'static str) -> Self {
		Self::new(name, DestinationKind::Other)
	}

	/// Returns true if the host can navigate to this destination.
	#[inline]
	pub fn is_navigable(&self) -> bool {
		self.kind == DestinationKind::Foreground
	}
}

impl fmt::Display for Destination {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{} ({})", self.name, self.kind)
	}
}
