//! Module lists and canonical registry naming.

use serde::{Deserialize, Deserializer};
use tracing::warn;

/// Suffix appended to a capitalized module name to form its registry name.
pub const DEFAULT_REGISTRY_SUFFIX: &str = "RouteMap";

/// Derives the canonical registry name for a module.
///
/// The first character is uppercased and `suffix` is appended:
/// `canonical_registry_name("user", "RouteMap") == "UserRouteMap"`.
pub fn canonical_registry_name(module: &str, suffix: &str) -> String {
	let mut chars = module.chars();
	let mut name = String::with_capacity(module.len() + suffix.len());
	if let Some(first) = chars.next() {
		name.extend(first.to_uppercase());
		name.push_str(chars.as_str());
	}
	name.push_str(suffix);
	name
}

/// Ordered list of module names.
///
/// Order is resolution priority: the registry of an earlier module shadows
/// later ones for the same action.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModuleList(Vec<String>);

impl ModuleList {
	/// Creates a list from module names, trimming each and skipping blank
	/// entries with a warning.
	pub fn new<I, S>(modules: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		let mut names = Vec::new();
		for (index, module) in modules.into_iter().enumerate() {
			let module: String = module.into();
			let module = module.trim();
			if module.is_empty() {
				warn!(index, "skipping empty module name");
				continue;
			}
			names.push(module.to_owned());
		}
		Self(names)
	}

	/// Parses a comma-separated list such as `"user, order"`.
	pub fn parse(list: &str) -> Self {
		Self::new(list.split(','))
	}

	/// Iterates over module names in resolution order.
	pub fn iter(&self) -> impl Iterator<Item = &str> {
		self.0.iter().map(String::as_str)
	}

	/// Number of modules.
	pub fn len(&self) -> usize {
		self.0.len()
	}

	/// Returns true if no module is configured.
	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}
}

impl<S: Into<String>> FromIterator<S> for ModuleList {
	fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
		Self::new(iter)
	}
}

impl<'de> Deserialize<'de> for ModuleList {
	fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
		#[derive(Deserialize)]
		#[serde(untagged)]
		enum Repr {
			List(Vec<String>),
			Joined(String),
		}

		Ok(match Repr::deserialize(deserializer)? {
			Repr::List(modules) => ModuleList::new(modules),
			Repr::Joined(list) => ModuleList::parse(&list),
		})
	}
}

#[cfg(test)]
mod tests {
	use std::sync::Arc;
	use std::sync::atomic::{AtomicUsize, Ordering};

	use rstest::rstest;
	use tracing::span;

	use super::*;

	#[rstest]
	#[case("user", "UserRouteMap")]
	#[case("order", "OrderRouteMap")]
	#[case("Shop", "ShopRouteMap")]
	#[case("über", "ÜberRouteMap")]
	#[case("", "RouteMap")]
	fn test_canonical_name(#[case] module: &str, #[case] expected: &str) {
		assert_eq!(canonical_registry_name(module, DEFAULT_REGISTRY_SUFFIX), expected);
	}

	/// Counts warn-level events.
	struct WarnCounter(Arc<AtomicUsize>);

	impl tracing::Subscriber for WarnCounter {
		fn enabled(&self, _: &tracing::Metadata<'_>) -> bool {
			true
		}

		fn new_span(&self, _: &span::Attributes<'_>) -> span::Id {
			span::Id::from_u64(1)
		}

		fn record(&self, _: &span::Id, _: &span::Record<'_>) {}

		fn record_follows_from(&self, _: &span::Id, _: &span::Id) {}

		fn event(&self, event: &tracing::Event<'_>) {
			if *event.metadata().level() == tracing::Level::WARN {
				self.0.fetch_add(1, Ordering::SeqCst);
			}
		}

		fn enter(&self, _: &span::Id) {}

		fn exit(&self, _: &span::Id) {}
	}

	#[test]
	fn test_parse_trims_and_drops_blanks() {
		let warnings = Arc::new(AtomicUsize::new(0));

		let modules = tracing::subscriber::with_default(WarnCounter(Arc::clone(&warnings)), || {
			ModuleList::parse(" user, ,order ,")
		});

		assert_eq!(modules.iter().collect::<Vec<_>>(), vec!["user", "order"]);
		assert_eq!(warnings.load(Ordering::SeqCst), 2);
	}

	#[test]
	fn test_clean_list_does_not_warn() {
		let warnings = Arc::new(AtomicUsize::new(0));

		tracing::subscriber::with_default(WarnCounter(Arc::clone(&warnings)), || {
			ModuleList::new(["user", "order"])
		});

		assert_eq!(warnings.load(Ordering::SeqCst), 0);
	}

	#[test]
	fn test_deserialize_both_shapes() {
		#[derive(Deserialize)]
		struct Doc {
			modules: ModuleList,
		}

		let joined: Doc = toml::from_str(r#"modules = "user,order""#).unwrap();
		let listed: Doc = toml::from_str(r#"modules = ["user", "order"]"#).unwrap();

		assert_eq!(joined.modules, listed.modules);
		assert_eq!(listed.modules.len(), 2);
	}
}
