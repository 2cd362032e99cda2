//! Unit tests for CLI commands

use crate::cli::{run_command, Cli, Commands, Outcome};
use crate::runtime_config::RuntimeConfig;
use clap::Parser;
use std::io::Write;

const ROUTES: &str = r#"
routes:
  - { method: GET, path: /, handler: home }
namespaces:
  - prefix: /api
    routes:
      - { method: GET, path: /users/:id, handler: show_user }
"#;

fn route_file() -> tempfile::NamedTempFile {
    let mut file = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
    file.write_all(ROUTES.as_bytes()).unwrap();
    file
}

fn run(command: &Commands, config: &RuntimeConfig) -> (Outcome, String) {
    let mut out = Vec::new();
    let outcome = run_command(command, config, &mut out).unwrap();
    (outcome, String::from_utf8(out).unwrap())
}

#[test]
fn test_match_command_parses() {
    let cli = Cli::try_parse_from(["routekit", "match", "--file", "r.yaml", "GET", "/users/1"])
        .unwrap();

    match cli.command {
        Commands::Match { file, method, path } => {
            assert_eq!(file.unwrap().to_string_lossy(), "r.yaml");
            assert_eq!(method, "GET");
            assert_eq!(path, "/users/1");
        }
        _ => panic!("Expected Match command"),
    }
}

#[test]
fn test_compile_command_requires_pattern() {
    assert!(Cli::try_parse_from(["routekit", "compile"]).is_err());
}

#[test]
fn test_routes_lists_in_match_order() {
    let file = route_file();
    let command = Commands::Routes {
        file: Some(file.path().to_path_buf()),
    };
    let (outcome, text) = run(&command, &RuntimeConfig::default());
    assert_eq!(outcome, Outcome::Success);
    assert_eq!(
        text,
        "[routes] count=2\n[route] GET / -> home\n[route] GET /api/users/:id -> show_user\n"
    );
}

#[test]
fn test_match_prints_json() {
    let file = route_file();
    let command = Commands::Match {
        file: Some(file.path().to_path_buf()),
        method: "get".to_string(),
        path: "/api/users/42".to_string(),
    };
    let (outcome, text) = run(&command, &RuntimeConfig::default());
    assert_eq!(outcome, Outcome::Success);
    let json: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert_eq!(json["handler"], "show_user");
    assert_eq!(json["params"]["id"], "42");
}

#[test]
fn test_match_reports_no_match() {
    let file = route_file();
    let command = Commands::Match {
        file: Some(file.path().to_path_buf()),
        method: "DELETE".to_string(),
        path: "/api/users/42".to_string(),
    };
    let (outcome, text) = run(&command, &RuntimeConfig::default());
    assert_eq!(outcome, Outcome::NoMatch);
    assert_eq!(text, "no match for DELETE /api/users/42\n");
}

#[test]
fn test_file_falls_back_to_config() {
    let file = route_file();
    let config = RuntimeConfig {
        routes_file: Some(file.path().to_path_buf()),
        ..RuntimeConfig::default()
    };
    let (outcome, _) = run(&Commands::Routes { file: None }, &config);
    assert_eq!(outcome, Outcome::Success);
}

#[test]
fn test_missing_file_is_an_error() {
    let mut out = Vec::new();
    let err = run_command(&Commands::Routes { file: None }, &RuntimeConfig::default(), &mut out)
        .unwrap_err();
    assert!(err.to_string().contains("No route file given"));
}

#[test]
fn test_compile_output() {
    let command = Commands::Compile {
        pattern: "/users/:id/files/*".to_string(),
    };
    let (_, text) = run(&command, &RuntimeConfig::default());
    assert!(text.contains("regex:     ^/users/([^/]+)/files/(.+)$"));
    assert!(text.contains("params:    id"));
    assert!(text.contains("wildcards: 1"));
}

#[test]
fn test_compile_rejects_bad_pattern() {
    let mut out = Vec::new();
    let command = Commands::Compile {
        pattern: "users".to_string(),
    };
    assert!(run_command(&command, &RuntimeConfig::default(), &mut out).is_err());
}
