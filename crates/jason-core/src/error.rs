//! Error types for decoding, encoding, path lookup and narrowing.

use crate::types::Kind;
use thiserror::Error;

/// Errors that can occur while building, navigating or narrowing a JSON value.
#[derive(Error, Debug)]
pub enum JasonError {
    /// The input bytes or text were not valid JSON.
    #[error("JSON decode error: {0}")]
    Decode(#[source] serde_json::Error),

    /// The underlying node could not be serialized back to JSON.
    #[error("JSON encode error: {0}")]
    Encode(#[source] serde_json::Error),

    /// The node is not of the requested kind.
    #[error("type mismatch: expected {expected}, found {found}")]
    TypeMismatch { expected: Kind, found: Kind },

    /// A path segment could not be resolved. `found` is the kind of the node the
    /// lookup ran against: `object` when the key is absent, anything else when
    /// the node was not an object to begin with.
    #[error("key {key:?} not found in {found}")]
    KeyNotFound { key: String, found: Kind },

    /// A typed array getter hit an element of the wrong kind.
    #[error("type mismatch at index {index}: expected {expected}, found {found}")]
    ElementMismatch {
        index: usize,
        expected: Kind,
        found: Kind,
    },
}

impl JasonError {
    /// True for both [`JasonError::TypeMismatch`] and [`JasonError::ElementMismatch`].
    pub fn is_type_mismatch(&self) -> bool {
        matches!(
            self,
            JasonError::TypeMismatch { .. } | JasonError::ElementMismatch { .. }
        )
    }

    pub fn is_key_not_found(&self) -> bool {
        matches!(self, JasonError::KeyNotFound { .. })
    }
}

/// Convenience alias used throughout jason-core.
pub type Result<T> = std::result::Result<T, JasonError>;
