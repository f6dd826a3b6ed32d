//! Error types for value conversions and the JSON helper surface.
//!
//! The traversal engine itself never fails: missing keys, wrong stored kinds,
//! and blocked writes all collapse to absent results.
//! The types here cover the fallible edges around it: typed extraction via
//! `TryFrom<&Value>` and the serde_json convenience helpers on [`crate::Dict`].

use thiserror::Error;

/// Structured error types for value operations.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum ValueError {
    /// A stored value's kind did not match the requested kind
    #[error("value kind mismatch: expected {expected}, found {actual}")]
    TypeMismatch {
        expected: &'static str,
        actual: &'static str,
    },

    /// Serialization of a value failed
    #[error("value serialization failed: {reason}")]
    SerializationFailed { reason: String },

    /// Deserialization of a value failed
    #[error("value deserialization failed: {reason}")]
    DeserializationFailed { reason: String },

    /// A key was not present in the document
    #[error("key not found: {key}")]
    KeyNotFound { key: String },
}

impl ValueError {
    /// Check if this error is a kind mismatch
    pub fn is_type_error(&self) -> bool {
        matches!(self, ValueError::TypeMismatch { .. })
    }

    /// Check if this error is related to serialization
    pub fn is_serialization_error(&self) -> bool {
        matches!(
            self,
            ValueError::SerializationFailed { .. } | ValueError::DeserializationFailed { .. }
        )
    }

    /// Check if this error is a missing-key lookup failure
    pub fn is_not_found_error(&self) -> bool {
        matches!(self, ValueError::KeyNotFound { .. })
    }
}

// Conversion from ValueError to the main Error type
impl From<ValueError> for crate::Error {
    fn from(err: ValueError) -> Self {
        crate::Error::Value(err)
    }
}
