use pretty_assertions::assert_eq;
use waypoint_intent::{PayloadBundle, PayloadValue};
use waypoint_routes::{ModuleList, RegistryTable, RouteRegistry, route_map};

use super::*;
use crate::testing::{RecordedNavigation, RecordingHost};

static PROFILE_ROUTES: RouteInterface = RouteInterface {
	name: "ProfileRoutes",
	methods: &[
		RouteMethod {
			name: "open_profile",
			action: Some("open_profile"),
			params: &[&["userId"]],
		},
		RouteMethod {
			name: "open_profile_tagged",
			action: Some("open_profile"),
			params: &[&["userId", "ownerId"], &[], &["source"]],
		},
		RouteMethod {
			name: "unannotated",
			action: None,
			params: &[],
		},
	],
};

fn user_routes() -> waypoint_routes::Result<Box<dyn RouteRegistry>> {
	Ok(Box::new(route_map!("UserRouteMap"; "open_profile" => foreground("ProfileScreen"))?))
}

fn dispatcher(host: &Arc<RecordingHost>) -> ProxyDispatcher {
	let mut table = RegistryTable::new();
	table.register("user", user_routes);
	let resolver = Arc::new(NavigationResolver::new(ModuleList::parse("user,order"), Arc::new(table)));
	ProxyDispatcher::new(&PROFILE_ROUTES, resolver, Host::primary(Arc::clone(host)))
}

#[test]
fn test_invoke_binds_keyed_arguments() {
	let host = Arc::new(RecordingHost::new());

	let outcome = dispatcher(&host)
		.invoke("open_profile", &[ProxyArg::new(&42i64)])
		.unwrap();

	assert_eq!(outcome, DispatchOutcome::Navigated);
	let request = host.last().unwrap().request().clone();
	assert_eq!(request.action, "open_profile");
	assert_eq!(request.payload, [("userId", 42)].into_iter().collect::<PayloadBundle>());
}

#[test]
fn test_invoke_multiple_keys_and_unkeyed_params() {
	let host = Arc::new(RecordingHost::new());
	let source = String::from("deeplink");

	dispatcher(&host)
		.invoke(
			"open_profile_tagged",
			&[ProxyArg::new(&7u32), ProxyArg::new(&true), ProxyArg::new(&source)],
		)
		.unwrap();

	let payload = host.last().unwrap().request().payload.clone();
	assert_eq!(payload.len(), 3);
	assert_eq!(payload.get("userId"), Some(&PayloadValue::Int(7)));
	assert_eq!(payload.get("ownerId"), Some(&PayloadValue::Int(7)));
	assert_eq!(payload.get("source"), Some(&PayloadValue::String("deeplink".into())));
}

#[test]
fn test_request_code_selects_result_dispatch() {
	let host = Arc::new(RecordingHost::new());

	dispatcher(&host)
		.with_request_code(7)
		.invoke("open_profile", &[ProxyArg::new(&1i32)])
		.unwrap();

	assert!(matches!(host.last(), Some(RecordedNavigation::StartForResult(r)) if r.request_code == Some(7)));
}

#[test]
fn test_calls_do_not_share_payload() {
	let host = Arc::new(RecordingHost::new());
	let proxy = dispatcher(&host);

	proxy
		.invoke(
			"open_profile_tagged",
			&[ProxyArg::new(&1i32), ProxyArg::new(&()), ProxyArg::new(&"a")],
		)
		.unwrap();
	proxy.invoke("open_profile", &[ProxyArg::new(&2i32)]).unwrap();

	let payload = host.last().unwrap().request().payload.clone();
	assert_eq!(payload, [("userId", 2)].into_iter().collect::<PayloadBundle>());
}

#[test]
fn test_dispatcher_flags_and_interceptor_apply() {
	let host = Arc::new(RecordingHost::new());

	let outcome = dispatcher(&host)
		.with_flags(NavigationFlags::NO_HISTORY)
		.with_interceptor(|| false)
		.invoke("open_profile", &[ProxyArg::new(&1i32)])
		.unwrap();
	assert_eq!(outcome, DispatchOutcome::Intercepted);
	assert!(host.is_empty());

	dispatcher(&host)
		.with_flags(NavigationFlags::NO_HISTORY)
		.invoke("open_profile", &[ProxyArg::new(&1i32)])
		.unwrap();
	assert_eq!(host.last().unwrap().request().flags, NavigationFlags::NO_HISTORY);
}

#[test]
fn test_missing_action_annotation() {
	let host = Arc::new(RecordingHost::new());

	let err = dispatcher(&host).invoke("unannotated", &[]).unwrap_err();

	assert_eq!(
		err,
		RouterError::MissingRouterItemAnnotation {
			interface: "ProfileRoutes",
			method: "unannotated",
		}
	);
}

#[test]
fn test_unknown_method() {
	let host = Arc::new(RecordingHost::new());

	let err = dispatcher(&host).invoke("close_profile", &[]).unwrap_err();

	assert_eq!(
		err,
		RouterError::UnknownMethod {
			interface: "ProfileRoutes",
			method: "close_profile".into(),
		}
	);
}

#[test]
fn test_argument_count_mismatch() {
	let host = Arc::new(RecordingHost::new());

	let err = dispatcher(&host).invoke("open_profile", &[]).unwrap_err();

	assert_eq!(
		err,
		RouterError::ArgumentCountMismatch {
			method: "open_profile",
			expected: 1,
			got: 0,
		}
	);
	assert!(host.is_empty());
}

#[test]
fn test_unsupported_argument_kind() {
	struct Profile;
	let host = Arc::new(RecordingHost::new());

	let err = dispatcher(&host)
		.invoke("open_profile", &[ProxyArg::new(&Profile)])
		.unwrap_err();

	assert!(matches!(
		err,
		RouterError::UnsupportedValueKind { ref key, type_name } if key == "userId" && type_name.ends_with("Profile")
	));
	assert!(host.is_empty());
}

#[test]
fn test_unresolved_action_is_silent() {
	static EMPTY: RouteInterface = RouteInterface {
		name: "Ghost",
		methods: &[RouteMethod {
			name: "haunt",
			action: Some("haunt"),
			params: &[],
		}],
	};
	let host = Arc::new(RecordingHost::new());
	let base = dispatcher(&host);
	let ghost = ProxyDispatcher::new(&EMPTY, Arc::clone(&base.resolver), base.host.clone());

	assert_eq!(ghost.invoke("haunt", &[]).unwrap(), DispatchOutcome::Unresolved);
	assert!(host.is_empty());
}
