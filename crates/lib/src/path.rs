//! Path segments for hierarchical document access.
//!
//! A path into a document is an ordered chain of [`Segment`]s, each pairing a
//! string key with the [`Kind`] the caller expects to find under that key.
//! Segments are assembled by the typed accessor factories in [`crate::node`];
//! nothing here touches a document. [`KeyPath`] stores segments in
//! root-to-leaf order, so the first segment is the outermost key and the
//! traversal engine consumes the list front-first.

use std::fmt;

/// The kind tag carried by every path segment.
///
/// Mirrors the eight storable value kinds. Only [`Kind::Dict`] segments may
/// have children; every other kind terminates a path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    /// Nested string-keyed mapping
    Dict,
    /// Ordered sequence, contents treated opaquely
    Array,
    /// UTF-8 text
    Text,
    /// 64-bit signed integer
    Int,
    /// 64-bit floating point
    Double,
    /// Boolean
    Bool,
    /// Date/timestamp
    Date,
    /// Binary blob
    Blob,
}

impl Kind {
    /// Returns the kind name as a string
    pub fn name(&self) -> &'static str {
        match self {
            Kind::Dict => "dict",
            Kind::Array => "array",
            Kind::Text => "text",
            Kind::Int => "int",
            Kind::Double => "double",
            Kind::Bool => "bool",
            Kind::Date => "date",
            Kind::Blob => "blob",
        }
    }

    /// Returns true if values of this kind may contain further keyed children
    pub fn is_mapping(&self) -> bool {
        matches!(self, Kind::Dict)
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// One step of a path: a key plus the kind expected under it.
///
/// Immutable once constructed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    key: String,
    kind: Kind,
}

impl Segment {
    /// Creates a new segment
    pub fn new(key: impl Into<String>, kind: Kind) -> Self {
        Self {
            key: key.into(),
            kind,
        }
    }

    /// Returns the key of this segment
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Returns the kind tag of this segment
    pub fn kind(&self) -> Kind {
        self.kind
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.key, self.kind)
    }
}

/// An ordered, root-to-leaf chain of segments describing one location
/// inside a document.
///
/// Key paths are cheap, disposable descriptors: accessor factories clone the
/// parent's path and append one segment. They carry no document data.
///
/// # Examples
///
/// ```
/// use plistpath::path::{Kind, KeyPath, Segment};
///
/// let path = KeyPath::new()
///     .child(Segment::new("user", Kind::Dict))
///     .child(Segment::new("name", Kind::Text));
///
/// assert_eq!(path.len(), 2);
/// assert_eq!(path.to_string(), "user.name");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct KeyPath {
    segments: Vec<Segment>,
}

impl KeyPath {
    /// Creates a new empty path (the root location)
    pub fn new() -> Self {
        Self {
            segments: Vec::new(),
        }
    }

    /// Returns a new path with one more segment appended at the leaf end
    pub fn child(&self, segment: Segment) -> Self {
        let mut segments = self.segments.clone();
        segments.push(segment);
        Self { segments }
    }

    /// Returns the segments in root-to-leaf order
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Returns an iterator over the path keys as string slices
    pub fn components(&self) -> impl Iterator<Item = &str> {
        self.segments.iter().map(|s| s.key())
    }

    /// Returns the number of segments in the path
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Returns `true` if the path has no segments
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Returns the last segment of the path, or `None` if empty
    pub fn leaf(&self) -> Option<&Segment> {
        self.segments.last()
    }
}

impl fmt::Display for KeyPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.segments.is_empty() {
            write!(f, "(empty path)")
        } else {
            for (i, segment) in self.segments.iter().enumerate() {
                if i > 0 {
                    write!(f, ".")?;
                }
                write!(f, "{}", segment.key())?;
            }
            Ok(())
        }
    }
}
