use super::pattern::SPLAT_KEY;
use serde::ser::{Serialize, SerializeMap, Serializer};
use serde_json::{Map, Value};
use smallvec::SmallVec;
use std::sync::Arc;

/// Maximum number of named parameters stored inline before spilling to the heap.
/// Route patterns rarely carry more than a handful of `:name` segments.
pub const MAX_INLINE_PARAMS: usize = 8;

/// Inline storage for named captures, in declaration order.
///
/// Names are `Arc<str>` shared with the compiled pattern; values are
/// per-request data from the path.
pub type ParamVec = SmallVec<[(Arc<str>, String); MAX_INLINE_PARAMS]>;

/// Parameters captured by a successful match.
///
/// Named captures keep declaration order. Wildcard captures live in a
/// separate ordered list and are exposed under the reserved key `"splat"`
/// when serialized.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Params {
    named: ParamVec,
    splat: SmallVec<[String; 2]>,
}

impl Params {
    pub(crate) fn push_named(&mut self, name: Arc<str>, value: &str) {
        self.named.push((name, value.to_string()));
    }

    pub(crate) fn push_splat(&mut self, value: &str) {
        self.splat.push(value.to_string());
    }

    /// Get a named parameter.
    ///
    /// Uses "last write wins" semantics: if a name is declared twice
    /// (e.g. `/org/:id/user/:id`), the later capture is returned.
    #[inline]
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.named
            .iter()
            .rfind(|(k, _)| k.as_ref() == name)
            .map(|(_, v)| v.as_str())
    }

    /// Wildcard captures, in pattern order.
    #[must_use]
    pub fn splat(&self) -> &[String] {
        &self.splat
    }

    /// Named captures in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.named.iter().map(|(k, v)| (k.as_ref(), v.as_str()))
    }

    /// Number of named captures.
    #[must_use]
    pub fn len(&self) -> usize {
        self.named.len()
    }

    /// True when there are neither named nor wildcard captures.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.named.is_empty() && self.splat.is_empty()
    }

    /// JSON object of the captures: named values in declaration order, then
    /// the wildcard list under `"splat"` if any wildcard matched.
    #[must_use]
    pub fn to_json(&self) -> Value {
        let mut map = Map::new();
        for (name, value) in self.visible() {
            map.insert(name.to_string(), Value::String(value.clone()));
        }
        if !self.splat.is_empty() {
            let splat = self.splat.iter().cloned().map(Value::String).collect();
            map.insert(SPLAT_KEY.to_string(), Value::Array(splat));
        }
        Value::Object(map)
    }

    // Repeated names collapse to their last capture, matching `get`.
    fn visible(&self) -> impl Iterator<Item = &(Arc<str>, String)> {
        self.named
            .iter()
            .enumerate()
            .filter(|(i, (name, _))| !self.named[i + 1..].iter().any(|(n, _)| n == name))
            .map(|(_, entry)| entry)
    }
}

impl Serialize for Params {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let visible: Vec<_> = self.visible().collect();

        let extra = usize::from(!self.splat.is_empty());
        let mut map = serializer.serialize_map(Some(visible.len() + extra))?;
        for (name, value) in visible {
            map.serialize_entry(&**name, value)?;
        }
        if !self.splat.is_empty() {
            map.serialize_entry(SPLAT_KEY, self.splat.as_slice())?;
        }
        map.end()
    }
}
