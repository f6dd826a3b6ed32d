//! Tests for recursive traversal behavior: auto-create gating, deletes,
//! and deep chains.

use plistpath::{Dict, MappingNode, MemoryStore};

// ===== AUTO-CREATE GATING =====

#[test]
fn test_blocked_write_leaves_document_unchanged() {
    let store = MemoryStore::new().auto_create(false);
    store.root().integer("existing").set(1);

    let before = store.root().get();
    store.root().dict("missing").dict("deeper").integer("x").set(42);

    // No partial structure: the document is exactly what it was
    assert_eq!(store.root().get(), before);
    assert!(!store.root().get().contains_key("missing"));
}

#[test]
fn test_auto_create_builds_exactly_the_missing_dicts() {
    let store = MemoryStore::new();
    store.root().dict("a").integer("sibling").set(1);

    store.root().dict("a").dict("b").dict("c").integer("x").set(42);

    let expected = Dict::new().with_dict(
        "a",
        Dict::new()
            .with_int("sibling", 1)
            .with_dict("b", Dict::new().with_dict("c", Dict::new().with_int("x", 42))),
    );
    assert_eq!(store.root().get(), expected);
}

#[test]
fn test_auto_create_disabled_still_writes_into_existing_dicts() {
    let store = MemoryStore::new().auto_create(false);
    store.root().set(Dict::new().with_dict("a", Dict::new()));

    store.root().dict("a").integer("x").set(5);
    assert_eq!(store.root().dict("a").integer("x").get(), Some(5));

    // Root-level keys need no intermediates at all
    store.root().integer("top").set(9);
    assert_eq!(store.root().integer("top").get(), Some(9));
}

#[test]
fn test_auto_create_never_affects_reads() {
    let store = MemoryStore::new(); // auto-create on
    assert_eq!(store.root().dict("ghost").integer("x").get(), None);
    assert!(!store.root().get().contains_key("ghost"));
}

// ===== DELETE SEMANTICS =====

#[test]
fn test_set_none_removes_key_from_parent_mapping() {
    let store = MemoryStore::new();
    store.root().dict("a").integer("gone").set(1);
    store.root().dict("a").integer("keep").set(2);

    store.root().dict("a").integer("gone").set(None);

    assert_eq!(store.root().dict("a").integer("gone").get(), None);
    let parent = store.root().dict("a").get().unwrap();
    assert!(!parent.contains_key("gone")); // absent from the key set
    assert!(parent.contains_key("keep"));
}

#[test]
fn test_delete_of_missing_key_is_a_noop() {
    let store = MemoryStore::new();
    store.root().dict("a").integer("x").set(1);
    let before = store.root().get();

    store.root().dict("a").integer("ghost").set(None);
    assert_eq!(store.root().get(), before);
}

#[test]
fn test_delete_through_missing_intermediates_creates_them_when_allowed() {
    // The set algorithm treats delete as a write: with auto-create on,
    // missing intermediate dicts are created on the way down even though
    // there is nothing to remove at the leaf.
    let store = MemoryStore::new();
    store.root().dict("a").dict("b").integer("x").set(None);

    let expected = Dict::new().with_dict("a", Dict::new().with_dict("b", Dict::new()));
    assert_eq!(store.root().get(), expected);

    // With auto-create off the same delete is dropped entirely
    let store = MemoryStore::new().auto_create(false);
    store.root().dict("a").dict("b").integer("x").set(None);
    assert!(store.root().get().is_empty());
}

// ===== DEEP CHAINS =====

#[test]
fn test_deep_round_trip() {
    let store = MemoryStore::new();
    let leaf = store
        .root()
        .dict("one")
        .dict("two")
        .dict("three")
        .dict("four")
        .string("name");

    leaf.set("deep".to_string());
    assert_eq!(leaf.get(), Some("deep".to_string()));

    // Overwrite at depth
    leaf.set("deeper".to_string());
    assert_eq!(leaf.get(), Some("deeper".to_string()));

    // And delete at depth
    leaf.set(None);
    assert_eq!(leaf.get(), None);
    let four = store.root().dict("one").dict("two").dict("three").dict("four");
    assert_eq!(four.get(), Some(Dict::new()));
}

#[test]
fn test_sibling_values_survive_deep_writes() {
    let store = MemoryStore::new();
    store.root().dict("cfg").string("label").set("app".to_string());
    store.root().dict("cfg").dict("net").integer("port").set(80);
    store.root().dict("cfg").dict("net").boolean("tls").set(true);

    store.root().dict("cfg").dict("net").integer("port").set(443);

    assert_eq!(store.root().dict("cfg").string("label").get(), Some("app".to_string()));
    assert_eq!(store.root().dict("cfg").dict("net").boolean("tls").get(), Some(true));
    assert_eq!(store.root().dict("cfg").dict("net").integer("port").get(), Some(443));
}

#[test]
fn test_write_through_scalar_occupant() {
    // "a" holds an integer; writing below it depends on the policy flag
    let blocked = MemoryStore::new().auto_create(false);
    blocked.root().integer("a").set(7);
    let before = blocked.root().get();
    blocked.root().dict("a").integer("x").set(1);
    assert_eq!(blocked.root().get(), before);

    let allowed = MemoryStore::new();
    allowed.root().integer("a").set(7);
    allowed.root().dict("a").integer("x").set(1);
    // The scalar occupant was replaced by a fresh dict
    assert_eq!(allowed.root().dict("a").integer("x").get(), Some(1));
    assert_eq!(allowed.root().integer("a").get(), None);
}
