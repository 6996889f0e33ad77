//! `Object` — a [`Value`] narrowed to a JSON object.
//!
//! Narrowing materializes a fresh `HashMap` from key to child view. Nothing is
//! cached on the source tree, so two `as_object` calls on the same value yield
//! independent maps over the same nodes.

use crate::value::Value;
use serde_json::{Map, Value as Json};
use std::collections::hash_map;
use std::collections::HashMap;
use std::ops::Deref;

/// A JSON object with its entries exposed for lookup and iteration.
#[derive(Debug, Clone)]
pub struct Object<'a> {
    value: Value<'a>,
    map: HashMap<&'a str, Value<'a>>,
}

impl<'a> Object<'a> {
    pub(crate) fn new(value: Value<'a>, entries: &'a Map<String, Json>) -> Self {
        let map = entries
            .iter()
            .map(|(key, child)| (key.as_str(), Value::new(child)))
            .collect();
        Self { value, map }
    }

    /// The object as a plain [`Value`].
    pub fn as_value(&self) -> Value<'a> {
        self.value
    }

    /// The key → child mapping. Key order is unspecified.
    pub fn map(&self) -> &HashMap<&'a str, Value<'a>> {
        &self.map
    }

    pub fn into_map(self) -> HashMap<&'a str, Value<'a>> {
        self.map
    }

    /// Direct child lookup. [`Value::get`] (reachable through deref) walks
    /// multi-segment paths and reports misses as errors.
    pub fn field(&self, key: &str) -> Option<Value<'a>> {
        self.map.get(key).copied()
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.map.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &'a str> + '_ {
        self.map.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'a str, Value<'a>)> + '_ {
        self.map.iter().map(|(key, child)| (*key, *child))
    }
}

impl<'a> Deref for Object<'a> {
    type Target = Value<'a>;

    fn deref(&self) -> &Self::Target {
        &self.value
    }
}

impl<'a> IntoIterator for Object<'a> {
    type Item = (&'a str, Value<'a>);
    type IntoIter = hash_map::IntoIter<&'a str, Value<'a>>;

    fn into_iter(self) -> Self::IntoIter {
        self.map.into_iter()
    }
}

impl PartialEq for Object<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}
