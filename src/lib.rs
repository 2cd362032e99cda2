//! # routekit
//!
//! **routekit** pairs a pattern-compiled request router with a fluent SQL
//! query-building DSL. Both are synchronous, in-memory and free of I/O: the
//! router hands back a `(handler, params)` pair, the builder hands back a
//! query string. Transport, sessions and query execution belong to the
//! caller.
//!
//! ## Architecture
//!
//! - **[`router`]** - pattern compilation, namespace-scoped route table,
//!   first-match resolution
//! - **[`query`]** - immutable-update `SELECT` builder and the condition
//!   sub-DSL for `WHERE` predicates
//! - **[`route_file`]** - YAML route tables
//! - **[`cli`]** - the `routekit` command-line tool
//! - **[`logging`]** / **[`runtime_config`]** - ambient configuration from
//!   environment variables
//!
//! ### Request Matching Flow
//!
//! ```mermaid
//! sequenceDiagram
//!     participant App as Application
//!     participant Router
//!     participant Pattern as CompiledPattern
//!
//!     App->>Router: register(GET, "/users/:id", h)
//!     Router->>Pattern: compile(prefix + "/users/:id")
//!     Pattern-->>Router: ^/users/([^/]+)$, [id]
//!     App->>Router: match_route(GET, "/users/42")
//!     loop entries in registration order
//!         Router->>Pattern: captures("/users/42")
//!     end
//!     Router-->>App: Some(MatchResult { handler: h, params: {id: "42"} })
//! ```
//!
//! ### Key Properties
//!
//! 1. **First-match-wins**: register specific routes before general ones
//! 2. **Scoped namespaces**: prefixes are popped when the namespace block
//!    exits, however it exits
//! 3. **Logically immutable queries**: every chain call returns a new builder;
//!    rendering never changes state
//! 4. **No escaping**: interpolated values are not sanitized; use bind
//!    parameters for untrusted input
//!
//! ## Quick Start
//!
//! ```
//! use routekit::query::QueryBuilder;
//! use routekit::router::Router;
//! use http::Method;
//!
//! # fn main() -> anyhow::Result<()> {
//! let mut router: Router<&str> = Router::new();
//! router.with_namespace("/api", |api| -> Result<(), routekit::PatternError> {
//!     api.get("/posts", "list_posts")?;
//!     api.get("/posts/:id", "show_post")?;
//!     Ok(())
//! })?;
//!
//! let found = router.match_route(&Method::GET, "/api/posts/7").unwrap();
//! assert_eq!(*found.handler, "show_post");
//!
//! let sql = QueryBuilder::from("posts")
//!     .where_eq([("id", found.params.get("id").unwrap_or_default())])?
//!     .limit(1)
//!     .to_query();
//! assert_eq!(sql, "SELECT * FROM posts WHERE id = '7' LIMIT 1");
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod error;
pub mod logging;
pub mod query;
pub mod route_file;
pub mod router;
pub mod runtime_config;

pub use error::{ParseDirectionError, PatternError, PredicateError};
pub use query::{ConditionBuilder, QueryBuilder};
pub use router::{MatchResult, Router};
