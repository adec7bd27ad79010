// SPDX-License-Identifier: Apache-2.0

use indexmap::IndexMap;

/// Object members in source order. Inserting an existing key replaces its value
/// in place, so the last occurrence wins while the first position is kept.
pub type Map<N = f64> = IndexMap<String, Value<N>>;

/// A parsed JSON value.
///
/// `N` is the number representation produced by the [`NumberHandler`] in use,
/// `f64` by default.
///
/// [`NumberHandler`]: crate::NumberHandler
#[derive(Debug, Clone, PartialEq)]
pub enum Value<N = f64> {
    /// A null value (e.g., `null`).
    Null,
    /// A boolean value (e.g., `true` or `false`).
    Bool(bool),
    /// A number value (e.g., `42` or `3.14`).
    Number(N),
    /// A string value with all escapes decoded.
    String(String),
    Array(Vec<Value<N>>),
    Object(Map<N>),
}

impl<N> Value<N> {
    /// Name of the variant, as used in diagnostics and summaries.
    pub fn kind(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "boolean",
            Value::Number(_) => "number",
            Value::String(_) => "string",
            Value::Array(_) => "array",
            Value::Object(_) => "object",
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_number(&self) -> Option<&N> {
        match self {
            Value::Number(n) => Some(n),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&[Value<N>]> {
        match self {
            Value::Array(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&Map<N>> {
        match self {
            Value::Object(members) => Some(members),
            _ => None,
        }
    }

    /// Member lookup; `None` if this is not an object or the key is absent.
    pub fn get(&self, key: &str) -> Option<&Value<N>> {
        self.as_object()?.get(key)
    }

    /// Element lookup; `None` if this is not an array or the index is out of range.
    pub fn get_index(&self, index: usize) -> Option<&Value<N>> {
        self.as_array()?.get(index)
    }
}

impl<N> From<bool> for Value<N> {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl<N> From<&str> for Value<N> {
    fn from(s: &str) -> Self {
        Value::String(s.to_owned())
    }
}

impl<N> From<String> for Value<N> {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl<N> From<Vec<Value<N>>> for Value<N> {
    fn from(items: Vec<Value<N>>) -> Self {
        Value::Array(items)
    }
}

impl<N> From<Map<N>> for Value<N> {
    fn from(members: Map<N>) -> Self {
        Value::Object(members)
    }
}

impl<N> FromIterator<Value<N>> for Value<N> {
    fn from_iter<I: IntoIterator<Item = Value<N>>>(iter: I) -> Self {
        Value::Array(iter.into_iter().collect())
    }
}

impl<K: Into<String>, N> FromIterator<(K, Value<N>)> for Value<N> {
    fn from_iter<I: IntoIterator<Item = (K, Value<N>)>>(iter: I) -> Self {
        Value::Object(iter.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }
}
