//! # CLI Module
//!
//! Command-line access to route files and the pattern compiler.
//!
//! ## Commands
//!
//! ### `routes`
//!
//! Print the routing table of a YAML route file in match order:
//!
//! ```bash
//! routekit routes --file routes.yaml
//! ```
//!
//! ### `match`
//!
//! Resolve a request against a route file. Prints the handler, pattern and
//! captured parameters as JSON, or `no match` with exit status 1:
//!
//! ```bash
//! routekit match --file routes.yaml GET /api/v1/users/42
//! ```
//!
//! ### `compile`
//!
//! Show the regex and parameter list a pattern compiles to:
//!
//! ```bash
//! routekit compile '/users/:id/files/*'
//! ```
//!
//! `--file` falls back to `ROUTEKIT_ROUTES_FILE`. Logging is configured with
//! the `ROUTEKIT_LOG_*` variables (see [`crate::logging`]).

mod commands;

#[cfg(test)]
mod tests;

pub use commands::{run_cli, run_command, Cli, Commands, Outcome};
