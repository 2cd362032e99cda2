//! Route pattern compilation.
//!
//! Patterns like `/users/:id/posts/*` are compiled once, at registration, into
//! a fully anchored regular expression plus the ordered list of dynamic
//! segments. Literal segments are escaped verbatim, `:name` segments capture a
//! single path segment (`[^/]+`) and a bare `*` captures one or more segments
//! (`.+`).
//!
//! Trailing slashes are significant: `/users` and `/users/` are different
//! patterns and neither matches the other's paths.

use super::params::Params;
use crate::error::PatternError;
use regex::Regex;
use std::fmt;
use std::sync::Arc;

/// Reserved key under which wildcard captures are exposed.
pub const SPLAT_KEY: &str = "splat";

/// One `/`-separated piece of a route pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// Matched verbatim (may be empty, e.g. the root pattern or a trailing slash).
    Literal(String),
    /// `:name`, captures exactly one path segment.
    Param(Arc<str>),
    /// `*`, captures one or more path segments.
    Wildcard,
}

/// A route pattern compiled into an anchored matcher.
///
/// Immutable once built. The matcher has exactly one capture group per
/// dynamic segment, in the order the segments appear.
#[derive(Debug, Clone)]
pub struct CompiledPattern {
    source: String,
    segments: Vec<Segment>,
    param_names: Vec<Arc<str>>,
    wildcard_count: usize,
    regex: Regex,
}

impl CompiledPattern {
    /// Compile a route pattern.
    ///
    /// # Errors
    ///
    /// Returns a [`PatternError`] if the pattern is empty, does not start with
    /// `/`, contains a `:` with no name after it, or names a parameter with
    /// something that is not an identifier.
    ///
    /// A `:name` marker always spans a whole segment. Names are
    /// `[A-Za-z_][A-Za-z0-9_]*`, so `/users/:user-id` and `/files/:name.:ext`
    /// fail with [`PatternError::InvalidParamName`] instead of matching part
    /// of the segment as a literal.
    ///
    /// # Example
    ///
    /// ```
    /// use routekit::router::CompiledPattern;
    ///
    /// let pattern = CompiledPattern::compile("/users/:id").unwrap();
    /// assert_eq!(pattern.regex_str(), "^/users/([^/]+)$");
    /// assert_eq!(pattern.param_names().len(), 1);
    /// ```
    pub fn compile(pattern: &str) -> Result<Self, PatternError> {
        if pattern.is_empty() {
            return Err(PatternError::Empty);
        }
        let Some(rest) = pattern.strip_prefix('/') else {
            return Err(PatternError::MissingLeadingSlash {
                pattern: pattern.to_string(),
            });
        };

        let mut regex_src = String::with_capacity(pattern.len() * 2 + 2);
        regex_src.push('^');
        let mut segments = Vec::new();
        let mut param_names = Vec::new();
        let mut wildcard_count = 0;

        for (index, raw) in rest.split('/').enumerate() {
            let segment = classify(pattern, index, raw)?;
            regex_src.push('/');
            match &segment {
                Segment::Literal(text) => regex_src.push_str(&regex::escape(text)),
                Segment::Param(name) => {
                    regex_src.push_str("([^/]+)");
                    param_names.push(Arc::clone(name));
                }
                Segment::Wildcard => {
                    regex_src.push_str("(.+)");
                    wildcard_count += 1;
                }
            }
            segments.push(segment);
        }
        regex_src.push('$');

        let regex = Regex::new(&regex_src).map_err(|e| PatternError::Regex {
            pattern: pattern.to_string(),
            message: e.to_string(),
        })?;
        debug_assert_eq!(
            regex.captures_len() - 1,
            param_names.len() + wildcard_count
        );

        Ok(Self {
            source: pattern.to_string(),
            segments,
            param_names,
            wildcard_count,
            regex,
        })
    }

    /// The pattern exactly as it was compiled (namespace prefix included).
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.source
    }

    /// The derived regular expression source.
    #[must_use]
    pub fn regex_str(&self) -> &str {
        self.regex.as_str()
    }

    #[must_use]
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Named parameters in declaration order. Wildcards are not included.
    #[must_use]
    pub fn param_names(&self) -> &[Arc<str>] {
        &self.param_names
    }

    #[must_use]
    pub fn wildcard_count(&self) -> usize {
        self.wildcard_count
    }

    /// True when the pattern has no named or wildcard segments.
    #[must_use]
    pub fn is_static(&self) -> bool {
        self.param_names.is_empty() && self.wildcard_count == 0
    }

    #[must_use]
    pub fn is_match(&self, path: &str) -> bool {
        self.regex.is_match(path)
    }

    /// Match `path` and bind the captured groups.
    ///
    /// Named captures are bound to their parameter names in declaration order;
    /// wildcard captures go to the splat list in the order they appear.
    #[must_use]
    pub fn captures(&self, path: &str) -> Option<Params> {
        let caps = self.regex.captures(path)?;
        let mut params = Params::default();
        let mut group = 1;
        for segment in &self.segments {
            match segment {
                Segment::Literal(_) => continue,
                Segment::Param(name) => {
                    params.push_named(Arc::clone(name), caps.get(group)?.as_str());
                }
                Segment::Wildcard => params.push_splat(caps.get(group)?.as_str()),
            }
            group += 1;
        }
        Some(params)
    }
}

impl fmt::Display for CompiledPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

fn classify(pattern: &str, index: usize, raw: &str) -> Result<Segment, PatternError> {
    if raw == "*" {
        return Ok(Segment::Wildcard);
    }
    let Some(name) = raw.strip_prefix(':') else {
        return Ok(Segment::Literal(raw.to_string()));
    };
    if name.is_empty() {
        return Err(PatternError::UnterminatedParam {
            pattern: pattern.to_string(),
            segment: index,
        });
    }
    if !is_identifier(name) {
        return Err(PatternError::InvalidParamName {
            pattern: pattern.to_string(),
            name: name.to_string(),
        });
    }
    if name == SPLAT_KEY {
        return Err(PatternError::ReservedName {
            pattern: pattern.to_string(),
            name: name.to_string(),
        });
    }
    Ok(Segment::Param(Arc::from(name)))
}

fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}
