//! The recursive get/set traversal engine.
//!
//! Both entry points are pure functions over an explicit `(mapping,
//! remaining-segments)` pair: no captured state, no document held between
//! calls. Segments arrive in root-to-leaf order and are consumed front-first,
//! so the outermost (root-adjacent) key is always processed first.
//!
//! Neither function errors or panics. A missing key, a non-dict value where
//! a dict was expected, or an empty segment list collapses to an absent
//! result on reads and to a no-op on writes.

use tracing::{debug, trace};

use crate::{Dict, Value, path::Segment};

/// Recursive lookup: walks `segments` down through `dict` and returns a
/// reference to the raw stored value at the final position.
///
/// Kind enforcement for the final value is the typed accessor layer's job;
/// intermediate segments descend only through [`Value::Dict`] entries.
pub(crate) fn resolve<'a>(dict: &'a Dict, segments: &[Segment]) -> Option<&'a Value> {
    let (first, rest) = segments.split_first()?;
    if rest.is_empty() {
        return dict.get(first.key());
    }
    match dict.get(first.key()) {
        Some(Value::Dict(child)) => resolve(child, rest),
        _ => None,
    }
}

/// Recursive write: returns the updated mapping.
///
/// `value` of `Some(v)` stores `v` at the final position; `None` removes the
/// final key from its immediate parent mapping. The caller commits the
/// returned top-level mapping wholesale, so this is copy-on-write: `dict` is
/// consumed and the original document is never mutated in place.
///
/// `auto_create` governs intermediate mappings only. When it is off and an
/// intermediate dict is missing (or the key holds a non-dict value), the
/// write is silently dropped and the input mapping comes back unchanged.
/// When it is on, missing intermediates are created empty, and a non-dict
/// occupant is replaced by a fresh dict.
pub(crate) fn store(
    mut dict: Dict,
    segments: &[Segment],
    value: Option<Value>,
    auto_create: bool,
) -> Dict {
    let Some((first, rest)) = segments.split_first() else {
        // Empty path: unreachable through the accessor API, kept as a
        // defensive no-op.
        return dict;
    };

    if rest.is_empty() {
        match value {
            Some(v) => {
                trace!(key = first.key(), kind = %v.kind(), "storing value");
                dict.set(first.key(), v);
            }
            None => {
                trace!(key = first.key(), "removing key");
                dict.remove(first.key());
            }
        }
        return dict;
    }

    let child = match dict.get(first.key()) {
        Some(Value::Dict(child)) => Some(child.clone()),
        _ => None,
    };
    let child = match child {
        Some(child) => child,
        None if auto_create => Dict::new(),
        None => {
            debug!(
                key = first.key(),
                "intermediate dict missing and auto-create disabled, write dropped"
            );
            return dict;
        }
    };

    let updated = store(child, rest, value, auto_create);
    dict.set(first.key(), Value::Dict(updated));
    dict
}
