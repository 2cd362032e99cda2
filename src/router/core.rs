//! Router core: the ordered route table and first-match lookup.

use super::params::Params;
use super::pattern::CompiledPattern;
use crate::error::PatternError;
use crate::runtime_config::RuntimeConfig;
use http::Method;
use serde::ser::{Serialize, SerializeStruct, Serializer};
use std::ops::{Deref, DerefMut};
use tracing::{debug, warn};

/// One registered route.
///
/// The pattern is compiled from the namespace prefix active at registration
/// time concatenated with the route's own pattern. Entries are immutable
/// once appended.
#[derive(Debug, Clone)]
pub struct RouteEntry<H> {
    method: Method,
    pattern: CompiledPattern,
    handler: H,
    namespace_prefix: String,
}

impl<H> RouteEntry<H> {
    #[must_use]
    pub fn method(&self) -> &Method {
        &self.method
    }

    #[must_use]
    pub fn pattern(&self) -> &CompiledPattern {
        &self.pattern
    }

    #[must_use]
    pub fn handler(&self) -> &H {
        &self.handler
    }

    /// Concatenated namespace prefixes that enclosed the registration.
    #[must_use]
    pub fn namespace_prefix(&self) -> &str {
        &self.namespace_prefix
    }
}

/// Result of successfully matching a request to a route.
#[derive(Debug)]
pub struct MatchResult<'a, H> {
    /// Handler of the first matching entry
    pub handler: &'a H,
    /// Captures bound to the entry's parameter names
    pub params: Params,
    /// Full pattern of the matched entry
    pub pattern: &'a str,
}

// Only the params are owned; no `H: Clone` needed.
impl<H> Clone for MatchResult<'_, H> {
    fn clone(&self) -> Self {
        Self {
            handler: self.handler,
            params: self.params.clone(),
            pattern: self.pattern,
        }
    }
}

impl<H: Serialize> Serialize for MatchResult<'_, H> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("MatchResult", 3)?;
        state.serialize_field("handler", self.handler)?;
        state.serialize_field("pattern", self.pattern)?;
        state.serialize_field("params", &self.params)?;
        state.end()
    }
}

/// Ordered route table with namespace-scoped registration.
///
/// Routes are matched in registration order and the first hit wins, so more
/// specific routes must be registered before general ones that overlap them.
/// The table only grows.
///
/// Build the table once, then share it read-only; `register` needs `&mut self`
/// so no further registration can race with matching.
///
/// # Example
///
/// ```
/// use routekit::router::Router;
/// use http::Method;
///
/// let mut router = Router::new();
/// router.get("/users/:id", "show_user").unwrap();
/// router
///     .with_namespace("/api", |api| api.get("/status", "status").map(|_| ()))
///     .unwrap();
///
/// let m = router.match_route(&Method::GET, "/users/42").unwrap();
/// assert_eq!(*m.handler, "show_user");
/// assert_eq!(m.params.get("id"), Some("42"));
/// assert!(router.match_route(&Method::GET, "/status").is_none());
/// ```
#[derive(Debug, Clone)]
pub struct Router<H> {
    entries: Vec<RouteEntry<H>>,
    prefixes: Vec<String>,
    warn_on_duplicates: bool,
}

impl<H> Default for Router<H> {
    fn default() -> Self {
        Self::with_config(&RuntimeConfig::default())
    }
}

impl<H> Router<H> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_config(config: &RuntimeConfig) -> Self {
        Self {
            entries: Vec::new(),
            prefixes: Vec::new(),
            warn_on_duplicates: config.warn_on_duplicates,
        }
    }

    /// Compile `pattern` under the active namespace prefix and append a route.
    ///
    /// # Errors
    ///
    /// Returns the [`PatternError`] from compilation. The table is left
    /// unchanged on error.
    pub fn register(
        &mut self,
        method: Method,
        pattern: &str,
        handler: H,
    ) -> Result<&mut Self, PatternError> {
        let namespace_prefix = self.current_prefix();
        if !pattern.is_empty() && !pattern.starts_with('/') {
            return Err(PatternError::MissingLeadingSlash {
                pattern: pattern.to_string(),
            });
        }
        let compiled = CompiledPattern::compile(&format!("{namespace_prefix}{pattern}"))?;

        if self.warn_on_duplicates {
            if let Some(index) = self
                .entries
                .iter()
                .position(|e| e.method == method && e.pattern.as_str() == compiled.as_str())
            {
                warn!(
                    method = %method,
                    pattern = %compiled,
                    shadowed_by = index,
                    "Duplicate route registered; the earlier entry always wins"
                );
            }
        }

        debug!(
            method = %method,
            pattern = %compiled,
            regex = %compiled.regex_str(),
            index = self.entries.len(),
            "Route registered"
        );

        self.entries.push(RouteEntry {
            method,
            pattern: compiled,
            handler,
            namespace_prefix,
        });
        Ok(self)
    }

    /// Register a `GET` route.
    ///
    /// # Errors
    ///
    /// See [`Router::register`].
    pub fn get(&mut self, pattern: &str, handler: H) -> Result<&mut Self, PatternError> {
        self.register(Method::GET, pattern, handler)
    }

    /// Register a `POST` route.
    ///
    /// # Errors
    ///
    /// See [`Router::register`].
    pub fn post(&mut self, pattern: &str, handler: H) -> Result<&mut Self, PatternError> {
        self.register(Method::POST, pattern, handler)
    }

    /// Register a `PUT` route.
    ///
    /// # Errors
    ///
    /// See [`Router::register`].
    pub fn put(&mut self, pattern: &str, handler: H) -> Result<&mut Self, PatternError> {
        self.register(Method::PUT, pattern, handler)
    }

    /// Register a `PATCH` route.
    ///
    /// # Errors
    ///
    /// See [`Router::register`].
    pub fn patch(&mut self, pattern: &str, handler: H) -> Result<&mut Self, PatternError> {
        self.register(Method::PATCH, pattern, handler)
    }

    /// Register a `DELETE` route.
    ///
    /// # Errors
    ///
    /// See [`Router::register`].
    pub fn delete(&mut self, pattern: &str, handler: H) -> Result<&mut Self, PatternError> {
        self.register(Method::DELETE, pattern, handler)
    }

    /// Run `block` with `prefix` pushed onto the namespace stack.
    ///
    /// Registrations made inside the block (including nested namespaces) get
    /// the concatenation of every enclosing prefix. The prefix is popped when
    /// the block returns, whether it finished, returned early through `?`, or
    /// unwound from a panic.
    pub fn with_namespace<R, F>(&mut self, prefix: &str, block: F) -> R
    where
        F: FnOnce(&mut Namespace<'_, H>) -> R,
    {
        self.prefixes.push(prefix.to_string());
        debug!(prefix = %prefix, depth = self.prefixes.len(), "Entering namespace");
        let mut scope = Namespace { router: self };
        block(&mut scope)
    }

    /// Concatenation of all currently open namespace prefixes.
    #[must_use]
    pub fn current_prefix(&self) -> String {
        self.prefixes.concat()
    }

    /// Find the first route registered for `method` whose pattern accepts `path`.
    ///
    /// Returns `None` when nothing matches; callers map that to a 404.
    #[must_use]
    pub fn match_route(&self, method: &Method, path: &str) -> Option<MatchResult<'_, H>> {
        let found = self.entries.iter().enumerate().find_map(|(index, entry)| {
            if entry.method != *method {
                return None;
            }
            entry.pattern.captures(path).map(|params| (index, entry, params))
        });

        match found {
            Some((index, entry, params)) => {
                debug!(
                    method = %method,
                    path = %path,
                    route_pattern = %entry.pattern,
                    route_index = index,
                    path_params = ?params,
                    "Route matched"
                );
                Some(MatchResult {
                    handler: &entry.handler,
                    params,
                    pattern: entry.pattern.as_str(),
                })
            }
            None => {
                debug!(method = %method, path = %path, "No route matched");
                None
            }
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Registered entries in registration (and therefore match) order.
    pub fn entries(&self) -> impl Iterator<Item = &RouteEntry<H>> {
        self.entries.iter()
    }

    /// Full patterns (namespace prefixes included) in registration order.
    #[must_use]
    pub fn path_patterns(&self) -> Vec<String> {
        self.entries
            .iter()
            .map(|e| e.pattern.as_str().to_string())
            .collect()
    }
}

impl<H: std::fmt::Display> Router<H> {
    /// One `METHOD pattern -> handler` line per route, in match order.
    #[must_use]
    pub fn routes_summary(&self) -> Vec<String> {
        self.entries
            .iter()
            .map(|e| format!("{} {} -> {}", e.method, e.pattern, e.handler))
            .collect()
    }
}

/// Registration scope handed to [`Router::with_namespace`] blocks.
///
/// Dereferences to the router, so every registration method is available.
/// Dropping the scope pops its prefix.
pub struct Namespace<'r, H> {
    router: &'r mut Router<H>,
}

impl<H> Deref for Namespace<'_, H> {
    type Target = Router<H>;

    fn deref(&self) -> &Self::Target {
        self.router
    }
}

impl<H> DerefMut for Namespace<'_, H> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.router
    }
}

impl<H> Drop for Namespace<'_, H> {
    fn drop(&mut self) {
        let popped = self.router.prefixes.pop();
        debug!(prefix = ?popped, depth = self.router.prefixes.len(), "Leaving namespace");
    }
}
