//! Routers built from configuration over registries collected at startup.

use std::sync::Arc;

use pretty_assertions::assert_eq;
use waypoint_router::testing::RecordingHost;
use waypoint_router::{DispatchOutcome, RouteRegistry, Router, RouterConfig};
use waypoint_routes::{RegistryLocator, register_route_map, route_map};

fn user_routes() -> waypoint_routes::Result<Box<dyn RouteRegistry>> {
	Ok(Box::new(route_map!("UserRoutes"; "open_profile" => foreground("ProfileScreen"))?))
}

register_route_map!("user", user_routes);

fn open_profile(router: &Router) -> (DispatchOutcome, Arc<RecordingHost>) {
	let host = Arc::new(RecordingHost::new());
	let outcome = router
		.session()
		.bind_primary(Arc::clone(&host))
		.bind_action("open_profile")
		.dispatch()
		.unwrap();
	(outcome, host)
}

#[test]
fn custom_suffix_resolves_collected_registries() {
	let config = RouterConfig::from_toml_str("modules = [\"user\"]\nregistry_suffix = \"Routes\"").unwrap();

	let (outcome, host) = open_profile(&Router::from_collected(&config));

	assert_eq!(outcome, DispatchOutcome::Navigated);
	assert_eq!(host.last().unwrap().request().target.name, "ProfileScreen");
}

#[test]
fn default_suffix_resolves_collected_registries() {
	let config = RouterConfig::from_toml_str(r#"modules = "user""#).unwrap();

	let (outcome, host) = open_profile(&Router::from_collected(&config));

	assert_eq!(outcome, DispatchOutcome::Navigated);
	assert_eq!(host.len(), 1);
}

#[test]
fn config_table_follows_configured_suffix() {
	let config = RouterConfig::from_toml_str("modules = [\"user\"]\nregistry_suffix = \"Routes\"").unwrap();
	let table = config.registry_table();

	assert_eq!(table.suffix(), "Routes");
	assert!(table.locate("UserRoutes").is_ok());

	let (outcome, _) = open_profile(&Router::from_config(&config, Arc::new(table)));
	assert_eq!(outcome, DispatchOutcome::Navigated);
}
