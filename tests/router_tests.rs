use http::Method;
use routekit::router::{MatchResult, Router};
use routekit::PatternError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Handler {
    Root,
    ListAnimals,
    CreateAnimal,
    GetAnimal,
    UpdateAnimal,
    PatchAnimal,
    DeleteAnimal,
    AnimalToy,
    NewAnimalForm,
    Status,
    ApiUser,
    Files,
}

fn zoo_router() -> Router<Handler> {
    let mut router = Router::new();
    router.get("/", Handler::Root).unwrap();
    router
        .with_namespace("/zoo", |zoo| -> Result<(), PatternError> {
            zoo.get("/animals", Handler::ListAnimals)?;
            zoo.post("/animals", Handler::CreateAnimal)?;
            zoo.get("/animals/new", Handler::NewAnimalForm)?;
            zoo.get("/animals/:id", Handler::GetAnimal)?;
            zoo.put("/animals/:id", Handler::UpdateAnimal)?;
            zoo.patch("/animals/:id", Handler::PatchAnimal)?;
            zoo.delete("/animals/:id", Handler::DeleteAnimal)?;
            zoo.get("/animals/:id/toys/:toy_id", Handler::AnimalToy)?;
            Ok(())
        })
        .unwrap();
    router
        .with_namespace("/api", |api| -> Result<(), PatternError> {
            api.get("/status", Handler::Status)?;
            api.with_namespace("/v1", |v1| {
                v1.get("/users/:id", Handler::ApiUser).map(|_| ())
            })
        })
        .unwrap();
    router.get("/files/*", Handler::Files).unwrap();
    router
}

fn assert_route_match(router: &Router<Handler>, method: Method, path: &str, expected: Handler) {
    match router.match_route(&method, path) {
        Some(MatchResult { handler, .. }) => assert_eq!(
            *handler, expected,
            "{method} {path} matched the wrong handler"
        ),
        None => panic!("{method} {path} should match {expected:?}"),
    }
}

#[test]
fn test_every_verb_routes() {
    let router = zoo_router();
    assert_route_match(&router, Method::GET, "/", Handler::Root);
    assert_route_match(&router, Method::GET, "/zoo/animals", Handler::ListAnimals);
    assert_route_match(&router, Method::POST, "/zoo/animals", Handler::CreateAnimal);
    assert_route_match(&router, Method::GET, "/zoo/animals/7", Handler::GetAnimal);
    assert_route_match(&router, Method::PUT, "/zoo/animals/7", Handler::UpdateAnimal);
    assert_route_match(&router, Method::PATCH, "/zoo/animals/7", Handler::PatchAnimal);
    assert_route_match(&router, Method::DELETE, "/zoo/animals/7", Handler::DeleteAnimal);
    assert_route_match(&router, Method::GET, "/zoo/animals/7/toys/3", Handler::AnimalToy);
}

#[test]
fn test_show_user_scenario() {
    let mut router = Router::new();
    router.register(Method::GET, "/users/:id", "h").unwrap();
    let found = router.match_route(&Method::GET, "/users/42").unwrap();
    assert_eq!(*found.handler, "h");
    assert_eq!(found.params.iter().collect::<Vec<_>>(), vec![("id", "42")]);
}

#[test]
fn test_namespaced_status_scenario() {
    let mut router: Router<&str> = Router::new();
    router.with_namespace("/api", |api| {
        api.register(Method::GET, "/status", "h").unwrap();
    });
    assert!(router.match_route(&Method::GET, "/api/status").is_some());
    assert!(router.match_route(&Method::GET, "/status").is_none());
}

#[test]
fn test_files_wildcard_scenario() {
    let router = zoo_router();
    let found = router.match_route(&Method::GET, "/files/a/b/c").unwrap();
    assert_eq!(*found.handler, Handler::Files);
    assert_eq!(found.params.splat(), ["a/b/c"]);
    assert_eq!(found.params.len(), 0);
}

#[test]
fn test_literal_registered_first_beats_param() {
    let router = zoo_router();
    assert_route_match(&router, Method::GET, "/zoo/animals/new", Handler::NewAnimalForm);
}

#[test]
fn test_nested_namespace_params() {
    let router = zoo_router();
    let found = router.match_route(&Method::GET, "/api/v1/users/99").unwrap();
    assert_eq!(*found.handler, Handler::ApiUser);
    assert_eq!(found.params.get("id"), Some("99"));
    assert_eq!(found.pattern, "/api/v1/users/:id");
}

#[test]
fn test_param_count_matches_declaration() {
    let router = zoo_router();
    let found = router.match_route(&Method::GET, "/zoo/animals/7/toys/3").unwrap();
    assert_eq!(
        found.params.iter().collect::<Vec<_>>(),
        vec![("id", "7"), ("toy_id", "3")]
    );
}

#[test]
fn test_unregistered_combinations_are_no_match() {
    let router = zoo_router();
    for (method, path) in [
        (Method::DELETE, "/zoo/animals"),
        (Method::GET, "/does/not/exist"),
        (Method::GET, "/zoo/animals/"),
        (Method::GET, "/api/v1/users/1/extra"),
        (Method::GET, "/files/"),
        (Method::HEAD, "/"),
        (Method::GET, ""),
    ] {
        assert!(
            router.match_route(&method, path).is_none(),
            "{method} {path:?} should not match"
        );
    }
}

#[test]
fn test_segment_param_does_not_cross_slashes() {
    let router = zoo_router();
    assert!(router.match_route(&Method::GET, "/zoo/animals/7/8").is_none());
}

#[test]
fn test_router_is_shareable_after_build() {
    let router = std::sync::Arc::new(zoo_router());
    let handles: Vec<_> = (0..4)
        .map(|i| {
            let router = std::sync::Arc::clone(&router);
            std::thread::spawn(move || {
                let path = format!("/zoo/animals/{i}");
                let found = router.match_route(&Method::GET, &path).unwrap();
                found.params.get("id").map(str::to_string)
            })
        })
        .collect();
    for (i, handle) in handles.into_iter().enumerate() {
        assert_eq!(handle.join().unwrap(), Some(i.to_string()));
    }
}
