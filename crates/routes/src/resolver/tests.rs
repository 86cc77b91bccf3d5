use std::sync::atomic::{AtomicUsize, Ordering};

use proptest::prelude::*;

use super::*;
use crate::map::{DuplicatePolicy, RouteMap};
use crate::table::RegistryTable;
use crate::{DestinationKind, route_map};

fn user_routes() -> crate::Result<Box<dyn RouteRegistry>> {
	Ok(Box::new(route_map!("UserRouteMap";
		"open_profile" => foreground("ProfileScreen"),
		"sync_profile" => service("ProfileSync"),
	)?))
}

fn order_routes() -> crate::Result<Box<dyn RouteRegistry>> {
	Ok(Box::new(route_map!("OrderRouteMap";
		"open_order" => foreground("OrderScreen"),
		"sync_profile" => foreground("OrderProfileSync"),
	)?))
}

fn resolver(modules: &str, table: RegistryTable) -> NavigationResolver {
	NavigationResolver::new(ModuleList::parse(modules), Arc::new(table))
}

fn user_order_table() -> RegistryTable {
	let mut table = RegistryTable::new();
	table.register("user", user_routes).register("order", order_routes);
	table
}

#[test]
fn test_resolves_first_module_hit() {
	let resolver = resolver("user,order", user_order_table());

	let destination = resolver.resolve("open_profile").unwrap().unwrap();
	assert_eq!(destination, Destination::foreground("ProfileScreen"));
}

#[test]
fn test_resolves_from_later_module() {
	let resolver = resolver("user,order", user_order_table());

	let destination = resolver.resolve("open_order").unwrap().unwrap();
	assert_eq!(destination.name, "OrderScreen");
}

#[test]
fn test_earlier_module_shadows_later() {
	let forward = resolver("user,order", user_order_table());
	let reversed = resolver("order,user", user_order_table());

	assert_eq!(
		forward.resolve("sync_profile").unwrap().unwrap().kind,
		DestinationKind::Service
	);
	assert_eq!(
		reversed.resolve("sync_profile").unwrap().unwrap().name,
		"OrderProfileSync"
	);
}

#[test]
fn test_unknown_action_is_none() {
	let resolver = resolver("user,order", user_order_table());
	assert_eq!(resolver.resolve("nowhere").unwrap(), None);
}

#[test]
fn test_empty_action_fails_fast() {
	let resolver = resolver("user", user_order_table());
	assert_eq!(resolver.resolve(""), Err(ResolveError::MissingAction));
}

#[test]
fn test_missing_registry_is_skipped() {
	let resolver = resolver("cart,order", user_order_table());

	assert_eq!(resolver.resolve("open_order").unwrap().unwrap().name, "OrderScreen");
	assert_eq!(resolver.registries().len(), 1);
}

#[test]
fn test_failing_constructor_is_skipped() {
	let mut table = user_order_table();
	table.register("broken", || {
		Err(RegistryError::Construction {
			name: "BrokenRouteMap".into(),
			reason: "misconfigured".into(),
		})
	});
	let resolver = resolver("broken,user", table);

	assert_eq!(resolver.resolve("open_profile").unwrap().unwrap().name, "ProfileScreen");
}

#[test]
fn test_panicking_constructor_is_skipped() {
	let mut table = user_order_table();
	table.register("panics", || panic!("registry blew up"));
	let resolver = resolver("panics,order", table);

	assert_eq!(resolver.resolve("open_order").unwrap().unwrap().name, "OrderScreen");
}

#[test]
fn test_registries_are_instantiated_lazily_once() {
	static USER_BUILDS: AtomicUsize = AtomicUsize::new(0);
	static ORDER_BUILDS: AtomicUsize = AtomicUsize::new(0);

	let mut table = RegistryTable::new();
	table
		.register("user", || {
			USER_BUILDS.fetch_add(1, Ordering::SeqCst);
			user_routes()
		})
		.register("order", || {
			ORDER_BUILDS.fetch_add(1, Ordering::SeqCst);
			order_routes()
		});
	let resolver = resolver("user,order", table);

	resolver.resolve("open_profile").unwrap();
	resolver.resolve("open_profile").unwrap();
	assert_eq!(USER_BUILDS.load(Ordering::SeqCst), 1);
	assert_eq!(ORDER_BUILDS.load(Ordering::SeqCst), 0);

	resolver.resolve("open_order").unwrap();
	resolver.resolve("open_order").unwrap();
	assert_eq!(ORDER_BUILDS.load(Ordering::SeqCst), 1);

	resolver.clear_cache();
	resolver.resolve("open_profile").unwrap();
	assert_eq!(USER_BUILDS.load(Ordering::SeqCst), 2);
}

#[test]
fn test_custom_suffix() {
	let mut table = RegistryTable::with_suffix("Routes");
	table.register("user", user_routes);
	assert!(table.contains("UserRoutes"));

	let resolver = NavigationResolver::new(ModuleList::parse("user"), Arc::new(table)).with_suffix("Routes");
	assert!(resolver.resolve("open_profile").unwrap().is_some());
}

/// Builds one registry per module from `(module, destination index)` pairs.
fn table_from(entries: &[(usize, usize)], modules: usize) -> RegistryTable {
	const NAMES: [&str; 4] = ["Alpha", "Beta", "Gamma", "Delta"];
	let mut table = RegistryTable::new();
	for module in 0..modules {
		let dests: Vec<&'static str> = entries
			.iter()
			.filter(|(m, _)| *m == module)
			.map(|(_, d)| NAMES[*d])
			.collect();
		table.register(&format!("m{module}"), move || {
			let mut builder = RouteMap::builder("").duplicate_policy(DuplicatePolicy::FirstWins);
			for &dest in &dests {
				builder = builder.route("target", Destination::foreground(dest));
			}
			let map: Box<dyn RouteRegistry> = Box::new(builder.build()?);
			Ok(map)
		});
	}
	table
}

proptest! {
	/// The first module (in list order) that maps the action always wins.
	#[test]
	fn prop_first_module_in_order_wins(
		entries in prop::collection::vec((0usize..4, 0usize..4), 0..8),
	) {
		let table = table_from(&entries, 4);
		let modules = ModuleList::new((0..4).map(|m| format!("m{m}")));
		let resolver = NavigationResolver::new(modules, Arc::new(table));

		let expected = (0..4).find_map(|module| {
			entries.iter().find(|(m, _)| *m == module).map(|(_, d)| ["Alpha", "Beta", "Gamma", "Delta"][*d])
		});

		let resolved = resolver.resolve("target").unwrap().map(|d| d.name);
		prop_assert_eq!(resolved, expected);
		// Deterministic across repeated calls.
		prop_assert_eq!(resolver.resolve("target").unwrap().map(|d| d.name), expected);
	}
}
