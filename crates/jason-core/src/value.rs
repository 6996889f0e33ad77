//! `Value` — a borrowed, narrowable view over one node of a decoded JSON tree.
//!
//! A `Value` never owns or mutates the tree it points into. Every narrowing or
//! lookup call builds fresh child views, so the same `Value` can be read from
//! any number of threads at once.
//!
//! # Missing keys
//!
//! Lookups fail hard: [`Value::get`] returns [`JasonError::KeyNotFound`] as soon
//! as one path segment cannot be resolved, and the typed getters propagate that
//! error before attempting any narrowing. There is no placeholder value for a
//! missing key, so a `Value` you hold always refers to a real node and
//! [`Value::as_null`] succeeds exactly when that node is JSON `null`.

use crate::error::{JasonError, Result};
use crate::object::Object;
use crate::types::Kind;
use serde::{Serialize, Serializer};
use serde_json::Value as Json;
use std::fmt;
use std::io::Write;

/// One node of a decoded JSON tree, of unspecified kind until narrowed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Value<'a> {
    data: &'a Json,
}

impl<'a> Value<'a> {
    /// Wrap a node of an already decoded tree.
    pub fn new(data: &'a Json) -> Self {
        Self { data }
    }

    /// The raw `serde_json` node behind this view.
    pub fn as_json(&self) -> &'a Json {
        self.data
    }

    pub fn kind(&self) -> Kind {
        Kind::of(self.data)
    }

    fn mismatch(&self, expected: Kind) -> JasonError {
        JasonError::TypeMismatch {
            expected,
            found: self.kind(),
        }
    }

    // ------------------------------------------------------------------------
    // Narrowing
    // ------------------------------------------------------------------------

    /// Succeeds only if the node is JSON `null`.
    pub fn as_null(&self) -> Result<()> {
        match self.data {
            Json::Null => Ok(()),
            _ => Err(self.mismatch(Kind::Null)),
        }
    }

    pub fn as_boolean(&self) -> Result<bool> {
        match self.data {
            Json::Bool(b) => Ok(*b),
            _ => Err(self.mismatch(Kind::Boolean)),
        }
    }

    /// Narrow to a number. Integers are widened to `f64`; strings and booleans
    /// are never coerced.
    pub fn as_number(&self) -> Result<f64> {
        match self.data {
            // `as_f64` only returns None under serde_json's `arbitrary_precision`,
            // which this crate does not enable.
            Json::Number(n) => n.as_f64().ok_or_else(|| self.mismatch(Kind::Number)),
            _ => Err(self.mismatch(Kind::Number)),
        }
    }

    pub fn as_string(&self) -> Result<&'a str> {
        match self.data {
            Json::String(s) => Ok(s.as_str()),
            _ => Err(self.mismatch(Kind::String)),
        }
    }

    /// Narrow to an array, producing one fresh child view per element.
    pub fn as_array(&self) -> Result<Vec<Value<'a>>> {
        match self.data {
            Json::Array(items) => Ok(items.iter().map(Value::new).collect()),
            _ => Err(self.mismatch(Kind::Array)),
        }
    }

    /// Narrow to an object, materializing its key → child mapping.
    pub fn as_object(&self) -> Result<Object<'a>> {
        match self.data {
            Json::Object(map) => Ok(Object::new(*self, map)),
            _ => Err(self.mismatch(Kind::Object)),
        }
    }

    pub fn is_null(&self) -> bool {
        self.as_null().is_ok()
    }

    pub fn is_boolean(&self) -> bool {
        self.as_boolean().is_ok()
    }

    pub fn is_number(&self) -> bool {
        self.as_number().is_ok()
    }

    pub fn is_string(&self) -> bool {
        self.as_string().is_ok()
    }

    /// Same answer as `as_array().is_ok()`, without building the child views.
    pub fn is_array(&self) -> bool {
        matches!(self.data, Json::Array(_))
    }

    /// Same answer as `as_object().is_ok()`, without building the key map.
    pub fn is_object(&self) -> bool {
        matches!(self.data, Json::Object(_))
    }

    // ------------------------------------------------------------------------
    // Path navigation
    // ------------------------------------------------------------------------

    /// Resolve a path of object keys, one segment at a time.
    ///
    /// The walk stops at the first segment that is missing, or that is applied
    /// to something other than an object, and reports it as
    /// [`JasonError::KeyNotFound`]. An empty path returns `self`.
    ///
    /// ```
    /// use jason_core::Document;
    ///
    /// let doc: Document = r#"{"address":{"street":"Street 42"}}"#.parse().unwrap();
    /// let street = doc.root().get(["address", "street"]).unwrap();
    /// assert_eq!(street.as_string().unwrap(), "Street 42");
    /// assert!(doc.root().get(["address", "missing"]).unwrap_err().is_key_not_found());
    /// ```
    pub fn get<I, K>(&self, keys: I) -> Result<Value<'a>>
    where
        I: IntoIterator<Item = K>,
        K: AsRef<str>,
    {
        keys.into_iter()
            .try_fold(*self, |current, key| current.child(key.as_ref()))
    }

    /// True if [`Value::get`] would resolve the path.
    pub fn contains<I, K>(&self, keys: I) -> bool
    where
        I: IntoIterator<Item = K>,
        K: AsRef<str>,
    {
        self.get(keys).is_ok()
    }

    /// Single-step lookup.
    fn child(self, key: &str) -> Result<Value<'a>> {
        let found = match self.data {
            Json::Object(map) => map.get(key).map(Value::new),
            _ => None,
        };
        found.ok_or_else(|| {
            tracing::trace!(key, found = %self.kind(), "path segment not resolved");
            JasonError::KeyNotFound {
                key: key.to_owned(),
                found: self.kind(),
            }
        })
    }

    // ------------------------------------------------------------------------
    // Output
    // ------------------------------------------------------------------------

    /// Serialize this node to compact JSON bytes.
    pub fn to_vec(&self) -> Result<Vec<u8>> {
        serde_json::to_vec(self.data).map_err(JasonError::Encode)
    }

    pub fn to_json_string(&self) -> Result<String> {
        serde_json::to_string(self.data).map_err(JasonError::Encode)
    }

    pub fn to_json_string_pretty(&self) -> Result<String> {
        serde_json::to_string_pretty(self.data).map_err(JasonError::Encode)
    }

    /// Serialize this node as compact JSON into `writer`.
    pub fn write_to<W: Write>(&self, writer: W) -> Result<()> {
        serde_json::to_writer(writer, self.data).map_err(JasonError::Encode)
    }
}

impl<'a> From<&'a Json> for Value<'a> {
    fn from(data: &'a Json) -> Self {
        Value::new(data)
    }
}

/// Renders the node as compact JSON.
impl fmt::Display for Value<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self.data, f)
    }
}

impl Serialize for Value<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        self.data.serialize(serializer)
    }
}
