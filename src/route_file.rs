//! Declarative route tables loaded from YAML.
//!
//! ```yaml
//! routes:
//!   - { method: GET, path: /, handler: home }
//! namespaces:
//!   - prefix: /api
//!     routes:
//!       - { method: GET, path: /status, handler: status }
//!     namespaces:
//!       - prefix: /v1
//!         routes:
//!           - { method: GET, path: /users/:id, handler: show_user }
//! ```
//!
//! Registration follows document order: a block's `routes` are registered
//! before its `namespaces`, depth first. Since matching is first-match-wins,
//! that order is the precedence order.

use crate::router::Router;
use crate::runtime_config::RuntimeConfig;
use anyhow::{bail, Context, Result};
use http::Method;
use serde::Deserialize;
use std::path::Path;
use tracing::info;

/// Verbs accepted in route files and on the command line.
pub const SUPPORTED_METHODS: [Method; 5] = [
    Method::GET,
    Method::POST,
    Method::PUT,
    Method::PATCH,
    Method::DELETE,
];

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RouteFile {
    #[serde(default)]
    pub routes: Vec<RouteDecl>,
    #[serde(default)]
    pub namespaces: Vec<NamespaceDecl>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RouteDecl {
    pub method: String,
    pub path: String,
    pub handler: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NamespaceDecl {
    pub prefix: String,
    #[serde(default)]
    pub routes: Vec<RouteDecl>,
    #[serde(default)]
    pub namespaces: Vec<NamespaceDecl>,
}

/// Parse a verb name (case-insensitive) into one of [`SUPPORTED_METHODS`].
///
/// # Errors
///
/// Fails for anything other than GET, POST, PUT, PATCH or DELETE.
pub fn parse_method(name: &str) -> Result<Method> {
    let upper = name.trim().to_ascii_uppercase();
    match SUPPORTED_METHODS.iter().find(|m| m.as_str() == upper) {
        Some(method) => Ok(method.clone()),
        None => bail!("unsupported HTTP method '{name}', expected one of GET, POST, PUT, PATCH, DELETE"),
    }
}

/// Build a router from a YAML document.
///
/// # Errors
///
/// Fails on malformed YAML, unsupported verbs or invalid patterns. The error
/// names the offending route.
pub fn routes_from_str(yaml: &str, config: &RuntimeConfig) -> Result<Router<String>> {
    let file: RouteFile = serde_yaml::from_str(yaml).context("Failed to parse route file")?;
    let mut router = Router::with_config(config);
    register_block(&mut router, &file.routes, &file.namespaces)?;
    Ok(router)
}

/// Read and build a router from a YAML file on disk.
///
/// # Errors
///
/// See [`routes_from_str`]; also fails if the file cannot be read.
pub fn load_routes(path: impl AsRef<Path>, config: &RuntimeConfig) -> Result<Router<String>> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read route file {}", path.display()))?;
    let router = routes_from_str(&content, config)
        .with_context(|| format!("Invalid route file {}", path.display()))?;

    info!(
        routes_count = router.len(),
        file = %path.display(),
        routes_summary = ?router.routes_summary().iter().take(10).collect::<Vec<_>>(),
        "Routing table loaded"
    );
    Ok(router)
}

fn register_block(
    router: &mut Router<String>,
    routes: &[RouteDecl],
    namespaces: &[NamespaceDecl],
) -> Result<()> {
    for route in routes {
        let method = parse_method(&route.method)
            .with_context(|| format!("route '{}' ({})", route.path, route.handler))?;
        router
            .register(method, &route.path, route.handler.clone())
            .with_context(|| format!("route '{}' ({})", route.path, route.handler))?;
    }
    for namespace in namespaces {
        router
            .with_namespace(&namespace.prefix, |scope| {
                register_block(scope, &namespace.routes, &namespace.namespaces)
            })
            .with_context(|| format!("namespace '{}'", namespace.prefix))?;
    }
    Ok(())
}
