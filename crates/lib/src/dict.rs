//! The document mapping type.
//!
//! [`Dict`] is the string-keyed mapping used both as the root of a document
//! and for every nested mapping inside it. It is a plain value type: cloning
//! a `Dict` snapshots it, and the traversal engine relies on that to produce
//! updated documents without aliased mutation.
//!
//! Keys here are single map keys, not paths. Path-based access goes through
//! the typed accessor chain in [`crate::node`].
//!
//! # Usage
//!
//! ```
//! use plistpath::Dict;
//!
//! let mut dict = Dict::new();
//! dict.set("name", "Alice");
//! dict.set("age", 30);
//!
//! assert_eq!(dict.get_as::<&str>("name"), Some("Alice"));
//! assert_eq!(dict.get_as::<i64>("age"), Some(30));
//! assert_eq!(dict.get_as::<i64>("name"), None); // kind mismatch
//! ```

use std::{collections::HashMap, fmt};

use chrono::{DateTime, Utc};

use crate::{Value, errors::ValueError};

/// A string-keyed mapping of [`Value`]s.
///
/// # Core Operations
///
/// - **Data access**: [`Dict::get`], [`Dict::get_as`], iterators
/// - **Data modification**: [`Dict::set`], [`Dict::remove`], [`Dict::clear`]
/// - **Construction**: [`Dict::new`], the `with_*` builder methods,
///   [`FromIterator`]
///
/// Removing a key deletes it outright; there are no tombstones, and a
/// removed key no longer appears in the key set.
#[derive(Debug, Clone, PartialEq, Default, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct Dict {
    entries: HashMap<String, Value>,
}

impl Dict {
    /// Creates a new empty mapping
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Returns the number of keys
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if this mapping has no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns true if the mapping contains the given key
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Gets a value by key (immutable reference)
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.get(key)
    }

    /// Gets a mutable reference to a value by key
    pub fn get_mut(&mut self, key: &str) -> Option<&mut Value> {
        self.entries.get_mut(key)
    }

    /// Gets a value by key with automatic type conversion using TryFrom.
    ///
    /// Returns `Some(T)` if the value exists and has the requested kind,
    /// `None` if the key is missing or the stored kind does not match.
    pub fn get_as<'a, T>(&'a self, key: &str) -> Option<T>
    where
        T: TryFrom<&'a Value, Error = ValueError>,
    {
        let value = self.get(key)?;
        T::try_from(value).ok()
    }

    /// Sets a value at the given key, returns the old value if present
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.entries.insert(key.into(), value.into())
    }

    /// Removes a value by key, returns the old value if present
    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.entries.remove(key)
    }

    /// Clears all entries from this mapping
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Returns an iterator over all key-value pairs
    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.entries.iter()
    }

    /// Returns a mutable iterator over all key-value pairs
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (&String, &mut Value)> {
        self.entries.iter_mut()
    }

    /// Returns an iterator over all keys
    pub fn keys(&self) -> impl Iterator<Item = &String> {
        self.entries.keys()
    }

    /// Returns an iterator over all values
    pub fn values(&self) -> impl Iterator<Item = &Value> {
        self.entries.values()
    }

    /// Returns a mutable iterator over all values
    pub fn values_mut(&mut self) -> impl Iterator<Item = &mut Value> {
        self.entries.values_mut()
    }

    /// Converts to a JSON-like string representation for human-readable
    /// output.
    ///
    /// Key order follows the underlying map and is not stable; use serde
    /// serialization for machine-readable output.
    pub fn to_json_string(&self) -> String {
        let mut result = String::with_capacity(self.entries.len() * 16);
        result.push('{');
        let mut first = true;
        for (key, value) in self.iter() {
            if !first {
                result.push(',');
            }
            result.push_str(&format!("\"{}\":{}", key, value.to_json_string()));
            first = false;
        }
        result.push('}');
        result
    }

    /// Set a key-value pair with automatic JSON serialization for any
    /// Serialize type. The value is stored as a text entry holding JSON.
    pub fn set_json<T>(&mut self, key: impl Into<String>, value: T) -> crate::Result<&mut Self>
    where
        T: serde::Serialize,
    {
        let json = serde_json::to_string(&value).map_err(|e| ValueError::SerializationFailed {
            reason: e.to_string(),
        })?;
        self.set(key, Value::Text(json));
        Ok(self)
    }

    /// Get a value by key with automatic JSON deserialization for any
    /// Deserialize type. The stored value must be a text entry holding JSON.
    pub fn get_json<T>(&self, key: &str) -> crate::Result<T>
    where
        T: for<'de> serde::Deserialize<'de>,
    {
        match self.get(key) {
            Some(Value::Text(json)) => serde_json::from_str::<T>(json).map_err(|e| {
                ValueError::DeserializationFailed {
                    reason: format!("failed to deserialize JSON for key '{key}': {e}"),
                }
                .into()
            }),
            Some(other) => Err(ValueError::TypeMismatch {
                expected: "text",
                actual: other.type_name(),
            }
            .into()),
            None => Err(ValueError::KeyNotFound {
                key: key.to_string(),
            }
            .into()),
        }
    }
}

// Builder pattern methods
impl Dict {
    /// Builder method to set a value and return self
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.set(key, value);
        self
    }

    /// Builder method to set a text value
    pub fn with_text(self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.with(key, Value::Text(value.into()))
    }

    /// Builder method to set an integer value
    pub fn with_int(self, key: impl Into<String>, value: i64) -> Self {
        self.with(key, Value::Int(value))
    }

    /// Builder method to set a double value
    pub fn with_double(self, key: impl Into<String>, value: f64) -> Self {
        self.with(key, Value::Double(value))
    }

    /// Builder method to set a boolean value
    pub fn with_bool(self, key: impl Into<String>, value: bool) -> Self {
        self.with(key, Value::Bool(value))
    }

    /// Builder method to set a date value
    pub fn with_date(self, key: impl Into<String>, value: DateTime<Utc>) -> Self {
        self.with(key, Value::Date(value))
    }

    /// Builder method to set a blob value
    pub fn with_blob(self, key: impl Into<String>, value: impl Into<Vec<u8>>) -> Self {
        self.with(key, Value::Blob(value.into()))
    }

    /// Builder method to set a list value
    pub fn with_list(self, key: impl Into<String>, value: impl Into<Vec<Value>>) -> Self {
        self.with(key, Value::List(value.into()))
    }

    /// Builder method to set a nested Dict
    pub fn with_dict(self, key: impl Into<String>, value: impl Into<Dict>) -> Self {
        self.with(key, Value::Dict(value.into()))
    }
}

impl fmt::Display for Dict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        let mut first = true;
        for (key, value) in self.iter() {
            if !first {
                write!(f, ", ")?;
            }
            write!(f, "{key}: {value}")?;
            first = false;
        }
        write!(f, "}}")
    }
}

impl FromIterator<(String, Value)> for Dict {
    fn from_iter<T: IntoIterator<Item = (String, Value)>>(iter: T) -> Self {
        let mut dict = Dict::new();
        for (key, value) in iter {
            dict.set(key, value);
        }
        dict
    }
}
