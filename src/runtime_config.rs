//! # Runtime Configuration Module
//!
//! Environment variable-based configuration for routekit's runtime behavior.
//!
//! ## Environment Variables
//!
//! ### `ROUTEKIT_ROUTES_FILE`
//!
//! Path of the YAML route file the `routekit` CLI reads when `--file` is not
//! given. Unset by default.
//!
//! ### `ROUTEKIT_WARN_DUPLICATES`
//!
//! When `true` (the default), registering a route whose method and full
//! pattern equal an earlier registration logs a warning. The duplicate is
//! still appended; first-match-wins means it can never be selected.
//!
//! ## Usage
//!
//! ```rust
//! use routekit::runtime_config::RuntimeConfig;
//! use routekit::router::Router;
//!
//! let config = RuntimeConfig::from_env();
//! let router: Router<&str> = Router::with_config(&config);
//! assert!(router.is_empty());
//! ```

use std::env;
use std::path::PathBuf;

/// Runtime configuration loaded from environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuntimeConfig {
    /// Default route file for the CLI
    pub routes_file: Option<PathBuf>,
    /// Log a warning when a method+pattern pair is registered twice (default: true)
    pub warn_on_duplicates: bool,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            routes_file: None,
            warn_on_duplicates: true,
        }
    }
}

impl RuntimeConfig {
    /// Load configuration from environment variables.
    ///
    /// Unparseable values fall back to the defaults.
    #[must_use]
    pub fn from_env() -> Self {
        let routes_file = env::var("ROUTEKIT_ROUTES_FILE")
            .ok()
            .filter(|s| !s.trim().is_empty())
            .map(PathBuf::from);
        let warn_on_duplicates = env::var("ROUTEKIT_WARN_DUPLICATES")
            .ok()
            .and_then(|s| parse_bool(&s))
            .unwrap_or(true);
        RuntimeConfig {
            routes_file,
            warn_on_duplicates,
        }
    }
}

pub(crate) fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_bool_variants() {
        assert_eq!(parse_bool("TRUE"), Some(true));
        assert_eq!(parse_bool(" on "), Some(true));
        assert_eq!(parse_bool("0"), Some(false));
        assert_eq!(parse_bool("no"), Some(false));
        assert_eq!(parse_bool("maybe"), None);
    }

    #[test]
    fn test_default_warns_on_duplicates() {
        let config = RuntimeConfig::default();
        assert!(config.warn_on_duplicates);
        assert!(config.routes_file.is_none());
    }
}
