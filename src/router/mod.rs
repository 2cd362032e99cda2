//! # Router Module
//!
//! Path-pattern compilation, the namespace-aware route table and first-match
//! route resolution.
//!
//! ## Overview
//!
//! The router is responsible for:
//! - Compiling declarative patterns (`/users/:id/files/*`) into anchored matchers
//! - Keeping registered routes in registration order, with namespace prefixes
//! - Matching `(method, path)` pairs against the table and extracting parameters
//!
//! ## Architecture
//!
//! The router uses a two-phase approach:
//!
//! 1. **Compilation**: When a route is registered, its pattern (with the
//!    active namespace prefixes prepended) is converted into a regex that
//!    captures each `:name` segment and each `*` wildcard.
//!
//! 2. **Matching**: For each request, the table is scanned in registration
//!    order and the first entry whose method and pattern accept the request
//!    wins. Scanning is O(n) in the number of routes.
//!
//! ## Example
//!
//! ```rust
//! use routekit::router::Router;
//! use http::Method;
//!
//! # fn main() -> Result<(), routekit::PatternError> {
//! let mut router = Router::new();
//! router.get("/files/*", "download")?;
//!
//! let m = router.match_route(&Method::GET, "/files/a/b/c").unwrap();
//! assert_eq!(m.params.splat(), ["a/b/c"]);
//! # Ok(())
//! # }
//! ```

mod core;
mod params;
mod pattern;

pub use core::{MatchResult, Namespace, RouteEntry, Router};
pub use params::{ParamVec, Params, MAX_INLINE_PARAMS};
pub use pattern::{CompiledPattern, Segment, SPLAT_KEY};
