//! Value types for property-list documents.
//!
//! This module provides the [`Value`] enum representing every kind of data a
//! document can hold: four scalar kinds (text, integer, double, boolean), two
//! opaque payload kinds (date, blob), and two container kinds (array, dict).
//!
//! There is no null variant: absence is modeled by key absence, and deleting
//! a value removes its key from the enclosing mapping.
//!
//! # Direct Comparisons
//!
//! `Value` implements `PartialEq` with primitive types for ergonomic
//! comparisons:
//!
//! ```
//! # use plistpath::Value;
//! let text = Value::Text("hello".to_string());
//! let number = Value::Int(42);
//!
//! assert!(text == "hello");
//! assert!(number == 42);
//! assert!(42 == number);
//!
//! // Kind mismatches compare unequal
//! assert!(!(text == 42));
//! ```

use std::fmt;

use chrono::{DateTime, SecondsFormat, Utc};

use crate::{Dict, errors::ValueError, path::Kind};

/// Values that can be stored in a property-list document.
///
/// # Value Kinds
///
/// ## Scalar kinds (terminal)
/// - [`Value::Text`] - UTF-8 text strings
/// - [`Value::Int`] - 64-bit signed integers
/// - [`Value::Double`] - 64-bit floating point numbers
/// - [`Value::Bool`] - Boolean values
/// - [`Value::Date`] - UTC timestamps
/// - [`Value::Blob`] - Opaque binary payloads
///
/// ## Container kinds
/// - [`Value::List`] - Ordered sequences (contents treated opaquely)
/// - [`Value::Dict`] - Nested string-keyed mappings
///
/// # Coercion
///
/// Reads require an exact stored-kind match with a single exception: a stored
/// integer can be read as a double when it is exactly representable as `f64`
/// (see [`Value::as_double`]). There is no string-to-number coercion.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum Value {
    /// Text string value
    Text(String),
    /// Integer value
    Int(i64),
    /// Floating point value
    Double(f64),
    /// Boolean value
    Bool(bool),
    /// Date/timestamp value
    Date(DateTime<Utc>),
    /// Binary blob value
    Blob(#[serde(with = "serde_bytes")] Vec<u8>),
    /// Ordered sequence of values
    List(Vec<Value>),
    /// Nested mapping
    Dict(Dict),
}

impl Value {
    /// Returns the kind tag of this value
    pub fn kind(&self) -> Kind {
        match self {
            Value::Text(_) => Kind::Text,
            Value::Int(_) => Kind::Int,
            Value::Double(_) => Kind::Double,
            Value::Bool(_) => Kind::Bool,
            Value::Date(_) => Kind::Date,
            Value::Blob(_) => Kind::Blob,
            Value::List(_) => Kind::Array,
            Value::Dict(_) => Kind::Dict,
        }
    }

    /// Returns the kind name as a string
    pub fn type_name(&self) -> &'static str {
        self.kind().name()
    }

    /// Returns true if this is a scalar value (terminal node)
    pub fn is_scalar(&self) -> bool {
        !self.is_container()
    }

    /// Returns true if this is a container value (can hold other values)
    pub fn is_container(&self) -> bool {
        matches!(self, Value::List(_) | Value::Dict(_))
    }

    /// Attempts to convert to a string
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Attempts to convert to an integer
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(n) => Some(*n),
            _ => None,
        }
    }

    /// Attempts to convert to a double.
    ///
    /// This is the one sanctioned cross-kind read: a stored integer is
    /// returned as a double when the conversion is exact. Integers of a
    /// magnitude `f64` cannot represent exactly yield `None`.
    ///
    /// ```
    /// # use plistpath::Value;
    /// assert_eq!(Value::Int(4).as_double(), Some(4.0));
    /// assert_eq!(Value::Double(2.5).as_double(), Some(2.5));
    /// assert_eq!(Value::Int(i64::MAX).as_double(), None);
    /// assert_eq!(Value::Text("4".into()).as_double(), None);
    /// ```
    pub fn as_double(&self) -> Option<f64> {
        match self {
            Value::Double(d) => Some(*d),
            Value::Int(n) => {
                let d = *n as f64;
                // Compare in i128 so the round-trip cannot saturate at i64::MAX
                (d as i128 == *n as i128).then_some(d)
            }
            _ => None,
        }
    }

    /// Attempts to convert to a boolean
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Attempts to convert to a date
    pub fn as_date(&self) -> Option<DateTime<Utc>> {
        match self {
            Value::Date(d) => Some(*d),
            _ => None,
        }
    }

    /// Attempts to convert to a blob (returns immutable reference)
    pub fn as_blob(&self) -> Option<&[u8]> {
        match self {
            Value::Blob(b) => Some(b),
            _ => None,
        }
    }

    /// Attempts to convert to a list (returns immutable reference)
    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Value::List(items) => Some(items),
            _ => None,
        }
    }

    /// Attempts to convert to a mutable list reference
    pub fn as_list_mut(&mut self) -> Option<&mut Vec<Value>> {
        match self {
            Value::List(items) => Some(items),
            _ => None,
        }
    }

    /// Attempts to convert to a Dict (returns immutable reference)
    pub fn as_dict(&self) -> Option<&Dict> {
        match self {
            Value::Dict(dict) => Some(dict),
            _ => None,
        }
    }

    /// Attempts to convert to a mutable Dict reference
    pub fn as_dict_mut(&mut self) -> Option<&mut Dict> {
        match self {
            Value::Dict(dict) => Some(dict),
            _ => None,
        }
    }

    /// Converts to a JSON-like string representation for human-readable
    /// output.
    ///
    /// Dates render as quoted RFC 3339 strings and blobs as arrays of byte
    /// values. For lossless persistence use serde serialization instead.
    pub fn to_json_string(&self) -> String {
        match self {
            Value::Text(s) => format!("\"{}\"", s.replace('\\', "\\\\").replace('"', "\\\"")),
            Value::Int(n) => n.to_string(),
            Value::Double(d) => d.to_string(),
            Value::Bool(b) => b.to_string(),
            Value::Date(d) => format!("\"{}\"", d.to_rfc3339_opts(SecondsFormat::Secs, true)),
            Value::Blob(bytes) => {
                let mut result = String::with_capacity(bytes.len() * 4);
                result.push('[');
                for (i, byte) in bytes.iter().enumerate() {
                    if i > 0 {
                        result.push(',');
                    }
                    result.push_str(&byte.to_string());
                }
                result.push(']');
                result
            }
            Value::List(items) => {
                let mut result = String::with_capacity(items.len() * 8);
                result.push('[');
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        result.push(',');
                    }
                    result.push_str(&item.to_json_string());
                }
                result.push(']');
                result
            }
            Value::Dict(dict) => dict.to_json_string(),
        }
    }

    fn mismatch(&self, expected: Kind) -> ValueError {
        ValueError::TypeMismatch {
            expected: expected.name(),
            actual: self.type_name(),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Text(s) => write!(f, "{s}"),
            Value::Int(n) => write!(f, "{n}"),
            Value::Double(d) => write!(f, "{d}"),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Date(d) => write!(f, "{}", d.to_rfc3339_opts(SecondsFormat::Secs, true)),
            Value::Blob(bytes) => write!(f, "<{} bytes>", bytes.len()),
            Value::List(items) => {
                write!(f, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{item}")?;
                }
                write!(f, "]")
            }
            Value::Dict(dict) => write!(f, "{dict}"),
        }
    }
}

// Convenient From implementations for common types
impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Text(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Text(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Int(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::Int(value as i64)
    }
}

impl From<u32> for Value {
    fn from(value: u32) -> Self {
        Value::Int(value as i64)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Double(value)
    }
}

impl From<f32> for Value {
    fn from(value: f32) -> Self {
        Value::Double(value as f64)
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<DateTime<Utc>> for Value {
    fn from(value: DateTime<Utc>) -> Self {
        Value::Date(value)
    }
}

impl From<Vec<u8>> for Value {
    fn from(value: Vec<u8>) -> Self {
        Value::Blob(value)
    }
}

impl From<Vec<Value>> for Value {
    fn from(value: Vec<Value>) -> Self {
        Value::List(value)
    }
}

impl From<Dict> for Value {
    fn from(value: Dict) -> Self {
        Value::Dict(value)
    }
}

// TryFrom implementations for typed extraction. These are the kind checks
// behind the typed accessors: every leaf read funnels through one of them.
impl TryFrom<&Value> for String {
    type Error = ValueError;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        match value {
            Value::Text(s) => Ok(s.clone()),
            _ => Err(value.mismatch(Kind::Text)),
        }
    }
}

impl<'a> TryFrom<&'a Value> for &'a str {
    type Error = ValueError;

    fn try_from(value: &'a Value) -> Result<Self, Self::Error> {
        match value {
            Value::Text(s) => Ok(s),
            _ => Err(value.mismatch(Kind::Text)),
        }
    }
}

impl TryFrom<&Value> for i64 {
    type Error = ValueError;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        match value {
            Value::Int(n) => Ok(*n),
            _ => Err(value.mismatch(Kind::Int)),
        }
    }
}

impl TryFrom<&Value> for f64 {
    type Error = ValueError;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        value.as_double().ok_or_else(|| value.mismatch(Kind::Double))
    }
}

impl TryFrom<&Value> for bool {
    type Error = ValueError;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        match value {
            Value::Bool(b) => Ok(*b),
            _ => Err(value.mismatch(Kind::Bool)),
        }
    }
}

impl TryFrom<&Value> for DateTime<Utc> {
    type Error = ValueError;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        match value {
            Value::Date(d) => Ok(*d),
            _ => Err(value.mismatch(Kind::Date)),
        }
    }
}

impl TryFrom<&Value> for Vec<u8> {
    type Error = ValueError;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        match value {
            Value::Blob(bytes) => Ok(bytes.clone()),
            _ => Err(value.mismatch(Kind::Blob)),
        }
    }
}

impl TryFrom<&Value> for Vec<Value> {
    type Error = ValueError;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        match value {
            Value::List(items) => Ok(items.clone()),
            _ => Err(value.mismatch(Kind::Array)),
        }
    }
}

impl TryFrom<&Value> for Dict {
    type Error = ValueError;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        match value {
            Value::Dict(dict) => Ok(dict.clone()),
            _ => Err(value.mismatch(Kind::Dict)),
        }
    }
}

// PartialEq implementations for comparing Value with primitive types
impl PartialEq<str> for Value {
    fn eq(&self, other: &str) -> bool {
        match self {
            Value::Text(s) => s == other,
            _ => false,
        }
    }
}

impl PartialEq<&str> for Value {
    fn eq(&self, other: &&str) -> bool {
        self == *other
    }
}

impl PartialEq<String> for Value {
    fn eq(&self, other: &String) -> bool {
        match self {
            Value::Text(s) => s == other,
            _ => false,
        }
    }
}

impl PartialEq<i64> for Value {
    fn eq(&self, other: &i64) -> bool {
        match self {
            Value::Int(n) => n == other,
            _ => false,
        }
    }
}

impl PartialEq<i32> for Value {
    fn eq(&self, other: &i32) -> bool {
        match self {
            Value::Int(n) => *n == *other as i64,
            _ => false,
        }
    }
}

impl PartialEq<f64> for Value {
    fn eq(&self, other: &f64) -> bool {
        match self {
            Value::Double(d) => d == other,
            _ => false,
        }
    }
}

impl PartialEq<bool> for Value {
    fn eq(&self, other: &bool) -> bool {
        match self {
            Value::Bool(b) => b == other,
            _ => false,
        }
    }
}

// Reverse implementations for symmetry
impl PartialEq<Value> for str {
    fn eq(&self, other: &Value) -> bool {
        other == self
    }
}

impl PartialEq<Value> for &str {
    fn eq(&self, other: &Value) -> bool {
        other == *self
    }
}

impl PartialEq<Value> for String {
    fn eq(&self, other: &Value) -> bool {
        other == self
    }
}

impl PartialEq<Value> for i64 {
    fn eq(&self, other: &Value) -> bool {
        other == self
    }
}

impl PartialEq<Value> for i32 {
    fn eq(&self, other: &Value) -> bool {
        other == self
    }
}

impl PartialEq<Value> for f64 {
    fn eq(&self, other: &Value) -> bool {
        other == self
    }
}

impl PartialEq<Value> for bool {
    fn eq(&self, other: &Value) -> bool {
        other == self
    }
}
