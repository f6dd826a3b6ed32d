/*! Integration tests for plistpath.
 *
 * This test suite is organized as a single integration test binary
 * following the pattern described by matklad in
 * https://matklad.github.io/2021/02/27/delete-cargo-integration-tests.html
 *
 * The module structure mirrors the main library structure:
 * - accessor_tests: the fluent typed accessor chains (Root, DictNode, Keyed)
 * - traversal_tests: recursive get/set behavior, auto-create gating, deletes
 * - store_tests: the DocumentStore boundary and MemoryStore
 * - value_tests: the Value tagged union, coercions, and serialization
 */

use tracing_subscriber::EnvFilter;

#[ctor::ctor]
fn init_test_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive("plistpath=debug".parse().unwrap()),
        )
        .with_test_writer()
        .try_init();
}

mod accessor_tests;
mod traversal_tests;
