use http::Method;
use routekit::route_file::{load_routes, parse_method, routes_from_str};
use routekit::runtime_config::RuntimeConfig;
use std::io::Write;

const ROUTES: &str = r#"
routes:
  - { method: GET, path: /, handler: home }
  - { method: post, path: /login, handler: login }
namespaces:
  - prefix: /api
    routes:
      - { method: GET, path: /status, handler: status }
    namespaces:
      - prefix: /v1
        routes:
          - { method: GET, path: /users/new, handler: new_user }
          - { method: GET, path: /users/:id, handler: show_user }
          - { method: DELETE, path: /users/:id, handler: delete_user }
  - prefix: /static
    routes:
      - { method: GET, path: "/*", handler: assets }
"#;

fn config() -> RuntimeConfig {
    RuntimeConfig::default()
}

#[test]
fn test_document_order_is_match_order() {
    let router = routes_from_str(ROUTES, &config()).unwrap();
    assert_eq!(
        router.path_patterns(),
        vec![
            "/",
            "/login",
            "/api/status",
            "/api/v1/users/new",
            "/api/v1/users/:id",
            "/api/v1/users/:id",
            "/static/*",
        ]
    );
}

#[test]
fn test_loaded_routes_match() {
    let router = routes_from_str(ROUTES, &config()).unwrap();

    let found = router.match_route(&Method::GET, "/api/v1/users/new").unwrap();
    assert_eq!(found.handler, "new_user");

    let found = router.match_route(&Method::DELETE, "/api/v1/users/5").unwrap();
    assert_eq!(found.handler, "delete_user");
    assert_eq!(found.params.get("id"), Some("5"));

    let found = router.match_route(&Method::GET, "/static/css/site.css").unwrap();
    assert_eq!(found.handler, "assets");
    assert_eq!(found.params.splat(), ["css/site.css"]);

    assert!(router.match_route(&Method::GET, "/status").is_none());
}

#[test]
fn test_load_from_disk() {
    let mut file = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
    file.write_all(ROUTES.as_bytes()).unwrap();
    let router = load_routes(file.path(), &config()).unwrap();
    assert_eq!(router.len(), 7);
}

#[test]
fn test_missing_file_names_the_path() {
    let err = load_routes("/definitely/not/here.yaml", &config()).unwrap_err();
    assert!(format!("{err:#}").contains("/definitely/not/here.yaml"));
}

#[test]
fn test_bad_pattern_is_reported_with_context() {
    let yaml = r#"
namespaces:
  - prefix: /api
    routes:
      - { method: GET, path: "/users/:", handler: broken }
"#;
    let err = routes_from_str(yaml, &config()).unwrap_err();
    let message = format!("{err:#}");
    assert!(message.contains("namespace '/api'"), "{message}");
    assert!(message.contains("broken"), "{message}");
}

#[test]
fn test_unknown_verb_rejected() {
    let yaml = "routes:\n  - { method: FETCH, path: /x, handler: x }\n";
    let err = routes_from_str(yaml, &config()).unwrap_err();
    assert!(format!("{err:#}").contains("unsupported HTTP method 'FETCH'"));
}

#[test]
fn test_unknown_fields_rejected() {
    let yaml = "routes:\n  - { method: GET, path: /x, handler: x, priority: 1 }\n";
    assert!(routes_from_str(yaml, &config()).is_err());
}

#[test]
fn test_empty_document_gives_empty_router() {
    let router = routes_from_str("{}", &config()).unwrap();
    assert!(router.is_empty());
}

#[test]
fn test_parse_method() {
    assert_eq!(parse_method("patch").unwrap(), Method::PATCH);
    assert_eq!(parse_method(" Delete ").unwrap(), Method::DELETE);
    assert!(parse_method("OPTIONS").is_err());
}
