//! Error types for pattern compilation and predicate building.
//!
//! Both errors are raised synchronously by the call that caused them:
//! [`PatternError`] by route registration, [`PredicateError`] by a `where`
//! call on the query builder. A failed registration leaves the route table
//! untouched and a failed `where` leaves the original builder untouched.
//!
//! "No route matched" is not an error. [`crate::router::Router::match_route`]
//! returns `None` for it.

use thiserror::Error;

/// A route pattern could not be compiled.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PatternError {
    /// The pattern string was empty.
    #[error("route pattern is empty")]
    Empty,

    /// The pattern did not begin with `/`.
    #[error("route pattern '{pattern}' must start with '/'")]
    MissingLeadingSlash {
        /// The offending pattern
        pattern: String,
    },

    /// A `:` marker with no identifier after it (e.g. `/users/:`).
    #[error("route pattern '{pattern}' has a ':' marker with no parameter name in segment {segment}")]
    UnterminatedParam {
        /// The offending pattern
        pattern: String,
        /// Zero-based index of the segment (after the leading slash)
        segment: usize,
    },

    /// A named parameter whose name is not a plain identifier (e.g. `:9id`, `:id-x`).
    #[error("route pattern '{pattern}' has an invalid parameter name '{name}'")]
    InvalidParamName {
        /// The offending pattern
        pattern: String,
        /// The rejected name
        name: String,
    },

    /// A named parameter used the key reserved for wildcard captures.
    #[error("route pattern '{pattern}' uses the reserved parameter name '{name}'")]
    ReservedName {
        /// The offending pattern
        pattern: String,
        /// The reserved name
        name: String,
    },

    /// The derived regular expression failed to compile.
    #[error("route pattern '{pattern}' produced an invalid matcher: {message}")]
    Regex {
        /// The offending pattern
        pattern: String,
        /// Message reported by the regex engine
        message: String,
    },
}

/// A condition could not be rendered into a predicate.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PredicateError {
    /// The comparison value was not a scalar (array or object).
    #[error("column '{column}' cannot be compared against a value of type {kind}")]
    UnsupportedValue {
        /// Column the comparison was issued on
        column: String,
        /// Human-readable kind of the rejected value ("array", "object")
        kind: &'static str,
    },

    /// A float comparison value was `NaN` or infinite.
    #[error("column '{column}' cannot be compared against a non-finite number")]
    NonFiniteNumber {
        /// Column the comparison was issued on
        column: String,
    },
}

/// A sort direction string was neither `asc` nor `desc`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid sort direction '{0}', expected 'asc' or 'desc'")]
pub struct ParseDirectionError(pub String);
