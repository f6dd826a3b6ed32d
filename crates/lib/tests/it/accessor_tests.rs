//! Tests for the fluent typed accessor chains.

use plistpath::{Dict, MappingNode, MemoryStore, Value};

// ===== THE CANONICAL SCENARIO =====

#[test]
fn test_write_then_read_nested_integer() {
    let store = MemoryStore::new();

    store.root().dict("Dict").integer("Count").set(42);

    // Document becomes {"Dict": {"Count": 42}}
    let expected = Dict::new().with_dict("Dict", Dict::new().with_int("Count", 42));
    assert_eq!(store.root().get(), expected);

    // Reading through the same accessor returns the value
    assert_eq!(store.root().dict("Dict").integer("Count").get(), Some(42));

    // Reading the same key through a string accessor is absent
    assert_eq!(store.root().dict("Dict").string("Count").get(), None);

    // Reading an unrelated path is absent and creates nothing
    assert_eq!(store.root().dict("Other").integer("X").get(), None);
    assert!(!store.root().get().contains_key("Other"));
}

#[test]
fn test_factories_do_not_touch_the_document() {
    let store = MemoryStore::new();

    // Building an arbitrarily deep descriptor is side-effect free
    let node = store
        .root()
        .dict("a")
        .dict("b")
        .dict("c")
        .dict("d")
        .string("leaf");
    assert_eq!(node.path().len(), 5);
    assert_eq!(node.path().to_string(), "a.b.c.d.leaf");

    assert!(store.root().get().is_empty());

    // Reading through it is likewise side-effect free
    assert_eq!(node.get(), None);
    assert!(store.root().get().is_empty());
}

#[test]
fn test_nodes_are_disposable_descriptors() {
    let store = MemoryStore::new();

    // A node built before a write observes the live document, not a cache
    let count = store.root().dict("stats").integer("count");
    assert_eq!(count.get(), None);

    store.root().dict("stats").integer("count").set(7);
    assert_eq!(count.get(), Some(7));
}

// ===== KIND MISMATCH SAFETY =====

#[test]
fn test_kind_mismatch_reads_are_absent_and_non_mutating() {
    let store = MemoryStore::new();
    store.root().string("A").set("hello".to_string());

    let before = store.root().get();

    assert_eq!(store.root().integer("A").get(), None);
    assert_eq!(store.root().boolean("A").get(), None);
    assert_eq!(store.root().date("A").get(), None);
    assert_eq!(store.root().blob("A").get(), None);
    assert_eq!(store.root().array("A").get(), None);
    assert_eq!(store.root().dict("A").get(), None);

    assert_eq!(store.root().get(), before);
}

#[test]
fn test_double_accessor_accepts_exact_integers() {
    let store = MemoryStore::new();

    store.root().integer("A").set(4);
    assert_eq!(store.root().double("A").get(), Some(4.0));

    // Defensive: an integer beyond exact f64 range reads as absent
    store.root().integer("B").set(i64::MAX);
    assert_eq!(store.root().double("B").get(), None);

    // The allowance is one-directional: doubles never read as integers
    store.root().double("C").set(4.0);
    assert_eq!(store.root().integer("C").get(), None);
}

// ===== MAPPING-KIND VALUE ENDPOINTS =====

#[test]
fn test_dict_node_get_returns_snapshot() {
    let store = MemoryStore::new();
    store.root().dict("user").string("name").set("Alice".to_string());

    let snapshot = store.root().dict("user").get().unwrap();
    assert_eq!(snapshot.get_as::<&str>("name"), Some("Alice"));

    // Mutating the document afterwards does not affect the snapshot
    store.root().dict("user").string("name").set("Bob".to_string());
    assert_eq!(snapshot.get_as::<&str>("name"), Some("Alice"));
}

#[test]
fn test_dict_node_set_replaces_wholesale() {
    let store = MemoryStore::new();
    store.root().dict("cfg").dict("net").integer("port").set(80);
    store.root().dict("cfg").string("label").set("old".to_string());

    // Replace the entire "cfg" mapping: deeper structure is discarded
    let replacement = Dict::new().with_bool("enabled", true);
    store.root().dict("cfg").set(replacement.clone());

    assert_eq!(store.root().dict("cfg").get(), Some(replacement));
    assert_eq!(store.root().dict("cfg").dict("net").integer("port").get(), None);
    assert_eq!(store.root().dict("cfg").string("label").get(), None);
}

#[test]
fn test_dict_node_set_none_removes_key() {
    let store = MemoryStore::new();
    store.root().dict("a").integer("x").set(1);
    store.root().integer("keep").set(2);

    store.root().dict("a").set(None);

    assert!(!store.root().get().contains_key("a"));
    assert_eq!(store.root().integer("keep").get(), Some(2));
}

#[test]
fn test_root_whole_document_get_set() {
    let store = MemoryStore::new();
    let doc = Dict::new()
        .with_int("a", 1)
        .with_dict("b", Dict::new().with_text("c", "x"));

    store.root().set(doc.clone());
    assert_eq!(store.root().get(), doc);
    assert_eq!(store.root().dict("b").string("c").get(), Some("x".to_string()));
}

// ===== SEQUENCES ARE OPAQUE WHOLES =====

#[test]
fn test_array_accessor_reads_and_writes_wholesale() {
    let store = MemoryStore::new();
    let items = vec![Value::Int(1), Value::Text("two".to_string()), Value::Bool(true)];

    store.root().dict("data").array("items").set(items.clone());
    assert_eq!(store.root().dict("data").array("items").get(), Some(items));

    store.root().dict("data").array("items").set(Vec::new());
    assert_eq!(store.root().dict("data").array("items").get(), Some(Vec::new()));
}
