//! Element ids for label/control association.
//!
//! Ids come from a process-wide counter, so every rendered field gets a
//! distinct id and the sequence is reproducible for a given render order.

use std::sync::atomic::{AtomicUsize, Ordering};

static NEXT_ID: AtomicUsize = AtomicUsize::new(1);

/// Returns the next id in the form `{prefix}-{n}`.
pub fn next_dom_id(prefix: &str) -> String {
    let n = NEXT_ID.fetch_add(1, Ordering::Relaxed);
    format!("{}-{}", prefix, n)
}

/// Picks the caller-supplied id when it is non-empty, otherwise generates one.
pub fn resolve_dom_id(explicit: Option<String>, prefix: &str) -> String {
    match explicit {
        Some(id) if !id.trim().is_empty() => id,
        _ => next_dom_id(prefix),
    }
}
