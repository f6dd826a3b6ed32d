//!
//! Plistpath: typed, path-based accessors over property-list documents.
//!
//! A document is a string-keyed mapping ([`Dict`]) whose values span eight
//! fixed kinds ([`Value`]): text, integer, double, boolean, date, blob,
//! sequence, and nested mapping. This library lets a caller compose a chain
//! of typed path segments without touching the document, then read or write
//! the value at the described location in one traversal.
//!
//! ## Core Concepts
//!
//! * **Values (`value::Value`)**: the closed tagged union of storable kinds.
//! * **Dicts (`dict::Dict`)**: the mapping type used for the document root
//!   and every nested mapping.
//! * **Paths (`path::KeyPath`)**: immutable chains of (key, kind) segments
//!   describing one location; built by accessor factories, never by hand.
//! * **Nodes (`node::Root`, `node::DictNode`, `node::Keyed`)**: the fluent
//!   accessor surface. Mapping-kind nodes expose one child factory per kind
//!   (via [`MappingNode`]); leaf nodes expose a single typed get/set
//!   endpoint.
//! * **Stores (`store::DocumentStore`)**: the container boundary. The core
//!   borrows a document snapshot per call and commits writes back wholesale;
//!   it never owns or caches the document.
//!
//! Reads return `Option` and writes are silent: a missing key, a stored
//! value of the wrong kind, or a write blocked by a missing intermediate
//! mapping all collapse to absent results rather than errors.
//!
//! ## Example
//!
//! ```
//! use plistpath::{MappingNode, MemoryStore};
//!
//! let store = MemoryStore::new();
//! store.root().dict("user").dict("profile").string("name").set("Alice".to_string());
//!
//! assert_eq!(
//!     store.root().dict("user").dict("profile").string("name").get(),
//!     Some("Alice".to_string()),
//! );
//! // Reading the same key through a mismatched kind is absent, not an error
//! assert_eq!(store.root().dict("user").dict("profile").integer("name").get(), None);
//! ```

pub mod dict;
pub mod errors;
pub mod node;
pub mod path;
pub mod store;
pub mod value;

mod traverse;

// Re-export the primary API surface.
pub use dict::Dict;
pub use errors::ValueError;
pub use node::{DictNode, Keyed, MappingNode, Root};
pub use path::{Kind, KeyPath, Segment};
pub use store::{DocumentStore, MemoryStore};
pub use value::Value;

/// Result type used throughout the plistpath library.
pub type Result<T> = std::result::Result<T, Error>;

/// Common error type for the plistpath library.
///
/// The traversal core itself never raises errors (see [`mod@crate::node`]);
/// this type covers the fallible edges: value conversions, the JSON helper
/// surface, and I/O performed by callers persisting documents.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    /// Structured value errors from the errors module
    #[error(transparent)]
    Value(ValueError),
}

impl Error {
    /// Check if this error indicates a key was not found.
    pub fn is_not_found(&self) -> bool {
        match self {
            Error::Value(value_err) => value_err.is_not_found_error(),
            _ => false,
        }
    }

    /// Check if this error is a value kind mismatch.
    pub fn is_type_error(&self) -> bool {
        match self {
            Error::Value(value_err) => value_err.is_type_error(),
            _ => false,
        }
    }

    /// Check if this error is serialization-related.
    pub fn is_serialization_error(&self) -> bool {
        match self {
            Error::Serialize(_) => true,
            Error::Value(value_err) => value_err.is_serialization_error(),
            _ => false,
        }
    }

    /// Check if this error is I/O related.
    pub fn is_io_error(&self) -> bool {
        matches!(self, Error::Io(_))
    }
}
