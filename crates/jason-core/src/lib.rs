//! # jason-core
//!
//! Ergonomic, safe access to loosely structured JSON such as API responses.
//!
//! Decode once into a [`Document`], walk it with path lookups, and narrow the
//! node you land on to a concrete Rust type. Every lookup and narrowing returns
//! a `Result`, so an absent key, a key holding `null`, and a key holding the
//! wrong type are three distinguishable outcomes.
//!
//! ## Quick start
//!
//! ```rust
//! use jason_core::{Document, JasonError, Kind};
//!
//! let doc: Document = r#"{
//!     "name": "anton",
//!     "age": 29,
//!     "nothing": null,
//!     "list": ["first", "second"],
//!     "address": {"street": "Street 42", "city": "Stockholm"}
//! }"#
//! .parse()
//! .unwrap();
//! let root = doc.root();
//!
//! assert_eq!(root.get(["name"]).unwrap().as_string().unwrap(), "anton");
//! assert_eq!(root.get_number(["age"]).unwrap(), 29.0);
//! assert!(root.get(["nothing"]).unwrap().is_null());
//! assert!(!root.contains(["missing"]));
//! assert_eq!(root.get_string(["address", "street"]).unwrap(), "Street 42");
//! assert_eq!(root.get_string_array(["list"]).unwrap(), ["first", "second"]);
//!
//! match root.get(["address", "missing"]) {
//!     Err(JasonError::KeyNotFound { key, found }) => {
//!         assert_eq!(key, "missing");
//!         assert_eq!(found, Kind::Object);
//!     }
//!     other => panic!("unexpected: {other:?}"),
//! }
//! ```
//!
//! Callers that prefer a zero-value fallback can say so explicitly with
//! `unwrap_or_default()`: `""`, `0.0`, `false` and an empty `Vec`.
//!
//! ## Modules
//!
//! - [`document`] — decoding from readers, bytes and text; re-encoding
//! - [`value`] — `Value` view, narrowing and path navigation
//! - [`object`] — `Object`, a value narrowed to a JSON object
//! - [`getters`] — typed path getters, including all-or-nothing typed arrays
//! - [`error`] — `JasonError` and the crate `Result` alias
//! - [`types`] — `Kind`, the six JSON kinds

pub mod document;
pub mod error;
pub mod getters;
pub mod object;
pub mod types;
pub mod value;

pub use document::Document;
pub use error::{JasonError, Result};
pub use object::Object;
pub use types::Kind;
pub use value::Value;
