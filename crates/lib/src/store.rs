//! The document container boundary.
//!
//! The traversal core never owns a document. It reaches one through
//! [`DocumentStore`], the contract any owning container must satisfy: hand
//! out a snapshot of the root mapping, accept a wholesale replacement, and
//! report the auto-create policy for writes. [`MemoryStore`] is the shipped
//! in-memory implementation; persistence layers implement the same trait and
//! keep their codec concerns entirely outside the core.

use std::cell::RefCell;

use tracing::trace;

use crate::{Dict, node::Root};

/// Contract between the accessor layer and the container that owns a
/// document.
///
/// `replace_document` takes `&self` so a fluent accessor chain can read and
/// write through one shared borrow of the store; implementations use interior
/// mutability. The core is single-threaded and synchronous: each get or set
/// completes one snapshot/commit cycle before returning, and cross-thread
/// synchronization is the container's responsibility.
pub trait DocumentStore {
    /// Returns a snapshot of the current root mapping.
    fn document(&self) -> Dict;

    /// Replaces the stored root mapping wholesale.
    fn replace_document(&self, document: Dict);

    /// Whether writes may create missing intermediate mappings.
    ///
    /// Governs write behavior only; reads never consult this flag.
    fn auto_create_dicts(&self) -> bool;
}

/// An in-memory document container.
///
/// # Examples
///
/// ```
/// use plistpath::{MappingNode, MemoryStore};
///
/// let store = MemoryStore::new();
/// store.root().dict("Dict").integer("Count").set(42);
/// assert_eq!(store.root().dict("Dict").integer("Count").get(), Some(42));
/// ```
#[derive(Debug)]
pub struct MemoryStore {
    document: RefCell<Dict>,
    auto_create_dicts: bool,
}

impl MemoryStore {
    /// Creates an empty store with intermediate auto-creation enabled.
    pub fn new() -> Self {
        Self {
            document: RefCell::new(Dict::new()),
            auto_create_dicts: true,
        }
    }

    /// Creates a store holding an existing document.
    pub fn from_document(document: Dict) -> Self {
        Self {
            document: RefCell::new(document),
            auto_create_dicts: true,
        }
    }

    /// Builder method to set the auto-create policy.
    pub fn auto_create(mut self, enabled: bool) -> Self {
        self.auto_create_dicts = enabled;
        self
    }

    /// Returns the root accessor for this store.
    pub fn root(&self) -> Root<'_, MemoryStore> {
        Root::new(self)
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl DocumentStore for MemoryStore {
    fn document(&self) -> Dict {
        self.document.borrow().clone()
    }

    fn replace_document(&self, document: Dict) {
        trace!(keys = document.len(), "replacing document");
        *self.document.borrow_mut() = document;
    }

    fn auto_create_dicts(&self) -> bool {
        self.auto_create_dicts
    }
}
