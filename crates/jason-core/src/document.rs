//! `Document` — owner of a decoded JSON tree and the crate's I/O boundary.
//!
//! Decoding and encoding are delegated to `serde_json`. Decoder failures come
//! back as [`JasonError::Decode`], encoder failures as [`JasonError::Encode`],
//! with the underlying `serde_json::Error` kept as the source.

use crate::error::{JasonError, Result};
use crate::value::Value;
use serde_json::Value as Json;
use std::fmt;
use std::io::{Read, Write};
use std::str::FromStr;

/// A decoded JSON document. Borrow [`Document::root`] to navigate it.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    data: Json,
}

impl Document {
    /// Decode a document from a byte stream, e.g. an HTTP response body.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        serde_json::from_reader(reader)
            .map(Self::from_value)
            .map_err(decode_error)
    }

    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        serde_json::from_slice(bytes)
            .map(Self::from_value)
            .map_err(decode_error)
    }

    #[allow(clippy::should_implement_trait)]
    pub fn from_str(text: &str) -> Result<Self> {
        serde_json::from_str(text)
            .map(Self::from_value)
            .map_err(decode_error)
    }

    /// Wrap a tree that has already been decoded.
    pub fn from_value(data: Json) -> Self {
        Self { data }
    }

    /// The root node.
    ///
    /// ```
    /// use jason_core::Document;
    ///
    /// let doc = Document::from_str(r#"{"name":"anton","age":29}"#).unwrap();
    /// assert_eq!(doc.root().get_string(["name"]).unwrap(), "anton");
    /// assert_eq!(doc.root().get_number(["age"]).unwrap(), 29.0);
    /// ```
    pub fn root(&self) -> Value<'_> {
        Value::new(&self.data)
    }

    pub fn as_json(&self) -> &Json {
        &self.data
    }

    pub fn into_inner(self) -> Json {
        self.data
    }

    pub fn to_vec(&self) -> Result<Vec<u8>> {
        self.root().to_vec()
    }

    pub fn to_json_string(&self) -> Result<String> {
        self.root().to_json_string()
    }

    pub fn to_json_string_pretty(&self) -> Result<String> {
        self.root().to_json_string_pretty()
    }

    pub fn write_to<W: Write>(&self, writer: W) -> Result<()> {
        self.root().write_to(writer)
    }
}

fn decode_error(err: serde_json::Error) -> JasonError {
    tracing::debug!(
        line = err.line(),
        column = err.column(),
        "rejected malformed JSON input"
    );
    JasonError::Decode(err)
}

impl FromStr for Document {
    type Err = JasonError;

    fn from_str(text: &str) -> Result<Self> {
        Document::from_str(text)
    }
}

impl From<Json> for Document {
    fn from(data: Json) -> Self {
        Document::from_value(data)
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.root(), f)
    }
}
