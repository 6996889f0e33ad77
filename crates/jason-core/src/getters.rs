//! Typed convenience getters: a path lookup followed by a narrowing.
//!
//! Path errors always win over type errors: `get_string(["a", "b"])` on a
//! document without `a` reports `KeyNotFound`, never `TypeMismatch`.
//!
//! The `get_*_array` family is all-or-nothing. Every element must narrow to
//! the requested kind; the first one that does not is reported as
//! [`JasonError::ElementMismatch`] and no partial result is returned.

use crate::error::{JasonError, Result};
use crate::object::Object;
use crate::value::Value;

impl<'a> Value<'a> {
    pub fn get_null<I, K>(&self, keys: I) -> Result<()>
    where
        I: IntoIterator<Item = K>,
        K: AsRef<str>,
    {
        self.get(keys)?.as_null()
    }

    pub fn get_boolean<I, K>(&self, keys: I) -> Result<bool>
    where
        I: IntoIterator<Item = K>,
        K: AsRef<str>,
    {
        self.get(keys)?.as_boolean()
    }

    pub fn get_number<I, K>(&self, keys: I) -> Result<f64>
    where
        I: IntoIterator<Item = K>,
        K: AsRef<str>,
    {
        self.get(keys)?.as_number()
    }

    pub fn get_string<I, K>(&self, keys: I) -> Result<&'a str>
    where
        I: IntoIterator<Item = K>,
        K: AsRef<str>,
    {
        self.get(keys)?.as_string()
    }

    pub fn get_array<I, K>(&self, keys: I) -> Result<Vec<Value<'a>>>
    where
        I: IntoIterator<Item = K>,
        K: AsRef<str>,
    {
        self.get(keys)?.as_array()
    }

    pub fn get_object<I, K>(&self, keys: I) -> Result<Object<'a>>
    where
        I: IntoIterator<Item = K>,
        K: AsRef<str>,
    {
        self.get(keys)?.as_object()
    }

    /// Resolve a path to an array of strings.
    ///
    /// ```
    /// use jason_core::Document;
    ///
    /// let doc: Document = r#"{"list":["first","second"],"mixed":["a",1]}"#.parse().unwrap();
    /// assert_eq!(doc.root().get_string_array(["list"]).unwrap(), ["first", "second"]);
    /// assert!(doc.root().get_string_array(["mixed"]).unwrap_err().is_type_mismatch());
    /// ```
    pub fn get_string_array<I, K>(&self, keys: I) -> Result<Vec<&'a str>>
    where
        I: IntoIterator<Item = K>,
        K: AsRef<str>,
    {
        narrow_each(self.get_array(keys)?, |v| v.as_string())
    }

    pub fn get_number_array<I, K>(&self, keys: I) -> Result<Vec<f64>>
    where
        I: IntoIterator<Item = K>,
        K: AsRef<str>,
    {
        narrow_each(self.get_array(keys)?, |v| v.as_number())
    }

    pub fn get_boolean_array<I, K>(&self, keys: I) -> Result<Vec<bool>>
    where
        I: IntoIterator<Item = K>,
        K: AsRef<str>,
    {
        narrow_each(self.get_array(keys)?, |v| v.as_boolean())
    }

    pub fn get_object_array<I, K>(&self, keys: I) -> Result<Vec<Object<'a>>>
    where
        I: IntoIterator<Item = K>,
        K: AsRef<str>,
    {
        narrow_each(self.get_array(keys)?, |v| v.as_object())
    }
}

/// Narrow every element, tagging the first failure with its index.
fn narrow_each<'a, T>(
    items: Vec<Value<'a>>,
    narrow: impl Fn(&Value<'a>) -> Result<T>,
) -> Result<Vec<T>> {
    items
        .iter()
        .enumerate()
        .map(|(index, item)| {
            narrow(item).map_err(|err| match err {
                JasonError::TypeMismatch { expected, found } => JasonError::ElementMismatch {
                    index,
                    expected,
                    found,
                },
                other => other,
            })
        })
        .collect()
}
