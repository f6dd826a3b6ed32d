//! Typed path nodes and accessor factories.
//!
//! Accessors describe a location in a document before touching it. Each
//! factory call on a mapping-kind node ([`Root`] or [`DictNode`]) builds a
//! fresh child node holding the extended [`KeyPath`] and a borrowed handle on
//! the store; no document access happens until a terminal [`Keyed::get`] /
//! [`Keyed::set`] (or the dict/root equivalents) runs the traversal engine.
//!
//! The node set is closed: mapping-kind nodes expose the eight child
//! factories through [`MappingNode`], leaf-kind nodes are one generic
//! [`Keyed`] per value binding, and dispatch is static throughout.
//!
//! # Usage
//!
//! ```
//! use plistpath::{MappingNode, MemoryStore};
//!
//! let store = MemoryStore::new();
//! let count = store.root().dict("stats").integer("count");
//!
//! count.set(42);
//! assert_eq!(count.get(), Some(42));
//!
//! // Wrong-kind reads are absent, not errors
//! assert_eq!(store.root().dict("stats").string("count").get(), None);
//! ```

use std::marker::PhantomData;

use chrono::{DateTime, Utc};

use crate::{
    Dict, Value,
    errors::ValueError,
    path::{Kind, KeyPath, Segment},
    store::DocumentStore,
    traverse,
};

/// Child-accessor factories exposed by every mapping-kind node.
///
/// Implemented by [`Root`] and [`DictNode`]; leaf nodes deliberately do not
/// implement it. Factory calls are pure descriptor construction and never
/// touch the document.
pub trait MappingNode<'s, S: DocumentStore> {
    /// The store this node reads from and writes to.
    fn store(&self) -> &'s S;

    /// The path from the document root to this node.
    fn path(&self) -> &KeyPath;

    /// Returns a nested-mapping accessor for `key`.
    fn dict(&self, key: impl Into<String>) -> DictNode<'s, S>
    where
        Self: Sized,
    {
        DictNode::new(self.store(), self.path().child(Segment::new(key, Kind::Dict)))
    }

    /// Returns a sequence accessor for `key`.
    fn array(&self, key: impl Into<String>) -> Keyed<'s, S, Vec<Value>>
    where
        Self: Sized,
    {
        Keyed::new(self.store(), self.path().child(Segment::new(key, Kind::Array)))
    }

    /// Returns a text accessor for `key`.
    fn string(&self, key: impl Into<String>) -> Keyed<'s, S, String>
    where
        Self: Sized,
    {
        Keyed::new(self.store(), self.path().child(Segment::new(key, Kind::Text)))
    }

    /// Returns an integer accessor for `key`.
    fn integer(&self, key: impl Into<String>) -> Keyed<'s, S, i64>
    where
        Self: Sized,
    {
        Keyed::new(self.store(), self.path().child(Segment::new(key, Kind::Int)))
    }

    /// Returns a double accessor for `key`.
    ///
    /// Reads through this accessor apply the one sanctioned coercion: a
    /// stored integer that is exactly representable as `f64` reads as a
    /// double.
    fn double(&self, key: impl Into<String>) -> Keyed<'s, S, f64>
    where
        Self: Sized,
    {
        Keyed::new(self.store(), self.path().child(Segment::new(key, Kind::Double)))
    }

    /// Returns a boolean accessor for `key`.
    fn boolean(&self, key: impl Into<String>) -> Keyed<'s, S, bool>
    where
        Self: Sized,
    {
        Keyed::new(self.store(), self.path().child(Segment::new(key, Kind::Bool)))
    }

    /// Returns a date accessor for `key`.
    fn date(&self, key: impl Into<String>) -> Keyed<'s, S, DateTime<Utc>>
    where
        Self: Sized,
    {
        Keyed::new(self.store(), self.path().child(Segment::new(key, Kind::Date)))
    }

    /// Returns a blob accessor for `key`.
    fn blob(&self, key: impl Into<String>) -> Keyed<'s, S, Vec<u8>>
    where
        Self: Sized,
    {
        Keyed::new(self.store(), self.path().child(Segment::new(key, Kind::Blob)))
    }
}

/// The zero-depth accessor: a mapping-kind node standing for the whole
/// document.
///
/// `Root` is a borrowed, non-owning handle on the store. Unlike every other
/// node its [`get`](Root::get) and [`set`](Root::set) bypass traversal and
/// delegate straight to the store's document.
#[derive(Debug)]
pub struct Root<'s, S> {
    store: &'s S,
    path: KeyPath,
}

impl<'s, S: DocumentStore> Root<'s, S> {
    /// Creates the root accessor for a store.
    pub fn new(store: &'s S) -> Self {
        Self {
            store,
            path: KeyPath::new(),
        }
    }

    /// Returns a snapshot of the whole document.
    pub fn get(&self) -> Dict {
        self.store.document()
    }

    /// Replaces the whole document.
    pub fn set(&self, document: Dict) {
        self.store.replace_document(document);
    }
}

impl<'s, S: DocumentStore> MappingNode<'s, S> for Root<'s, S> {
    fn store(&self) -> &'s S {
        self.store
    }

    fn path(&self) -> &KeyPath {
        &self.path
    }
}

/// A mapping-kind node below the root.
///
/// Exposes the child factories plus a value endpoint over the entire nested
/// mapping at its path: [`get`](DictNode::get) snapshots it, and
/// [`set`](DictNode::set) replaces it wholesale; deeper structure under the
/// key is discarded, not merged.
#[derive(Debug)]
pub struct DictNode<'s, S> {
    store: &'s S,
    path: KeyPath,
}

impl<'s, S: DocumentStore> DictNode<'s, S> {
    /// Creates a dict node from a store handle and a path.
    ///
    /// Normally obtained through [`MappingNode::dict`] rather than directly.
    pub fn new(store: &'s S, path: KeyPath) -> Self {
        Self { store, path }
    }

    /// Returns a snapshot of the nested mapping at this path, if present
    /// and itself a mapping.
    pub fn get(&self) -> Option<Dict> {
        let document = self.store.document();
        let value = traverse::resolve(&document, self.path.segments())?;
        value.as_dict().cloned()
    }

    /// Replaces the entire nested mapping at this path; `None` removes the
    /// key from the enclosing mapping.
    pub fn set(&self, value: impl Into<Option<Dict>>) {
        let updated = traverse::store(
            self.store.document(),
            self.path.segments(),
            value.into().map(Value::Dict),
            self.store.auto_create_dicts(),
        );
        self.store.replace_document(updated);
    }
}

impl<'s, S: DocumentStore> MappingNode<'s, S> for DictNode<'s, S> {
    fn store(&self) -> &'s S {
        self.store
    }

    fn path(&self) -> &KeyPath {
        &self.path
    }
}

/// A leaf-typed node: the single value endpoint of a path.
///
/// One generic implementation serves all scalar and sequence bindings
/// (`String`, `i64`, `f64`, `bool`, `DateTime<Utc>`, `Vec<u8>`,
/// `Vec<Value>`); the binding is fixed by the factory that created the node.
/// Leaf nodes expose no child factories.
#[derive(Debug)]
pub struct Keyed<'s, S, T> {
    store: &'s S,
    path: KeyPath,
    marker: PhantomData<fn() -> T>,
}

impl<'s, S: DocumentStore, T> Keyed<'s, S, T> {
    /// Creates a leaf node from a store handle and a path.
    ///
    /// Normally obtained through a [`MappingNode`] factory rather than
    /// directly.
    pub fn new(store: &'s S, path: KeyPath) -> Self {
        Self {
            store,
            path,
            marker: PhantomData,
        }
    }

    /// The path from the document root to this node.
    pub fn path(&self) -> &KeyPath {
        &self.path
    }

    /// Reads the value at this path.
    ///
    /// Returns `None` when the key is missing at any level or the stored
    /// value's kind does not match this accessor's binding. Never errors.
    pub fn get(&self) -> Option<T>
    where
        T: for<'v> TryFrom<&'v Value, Error = ValueError>,
    {
        let document = self.store.document();
        let value = traverse::resolve(&document, self.path.segments())?;
        T::try_from(value).ok()
    }

    /// Writes the value at this path; `None` deletes the key from its
    /// immediate parent mapping.
    ///
    /// Missing intermediate mappings are created when the store's
    /// auto-create policy allows it; otherwise the write is silently
    /// dropped. Writes never report failure; verify with a follow-up
    /// [`get`](Keyed::get) if needed.
    pub fn set(&self, value: impl Into<Option<T>>)
    where
        T: Into<Value>,
    {
        let updated = traverse::store(
            self.store.document(),
            self.path.segments(),
            value.into().map(Into::into),
            self.store.auto_create_dicts(),
        );
        self.store.replace_document(updated);
    }
}
