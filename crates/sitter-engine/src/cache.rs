//! Per-guardian snapshot cache owned by the calling layer.
//!
//! The engine's computations never consult this cache themselves. Callers that
//! evaluate many requests against the same data keep one, and must invalidate a
//! guardian's entry whenever that guardian's blocks, exceptions or bookings change.

use std::collections::HashMap;

use tracing::trace;

use crate::snapshot::GuardianSnapshot;

#[derive(Debug, Default)]
pub struct SnapshotCache {
    entries: HashMap<String, GuardianSnapshot>,
    hits: u64,
    misses: u64,
}

impl SnapshotCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the cached snapshot for `guardian_id`, calling `load` on a miss.
    pub fn get_or_load<F>(&mut self, guardian_id: &str, load: F) -> &GuardianSnapshot
    where
        F: FnOnce(&str) -> GuardianSnapshot,
    {
        if self.entries.contains_key(guardian_id) {
            self.hits += 1;
            trace!(guardian = guardian_id, "snapshot cache hit");
        } else {
            self.misses += 1;
            trace!(guardian = guardian_id, "snapshot cache miss");
        }
        self.entries
            .entry(guardian_id.to_string())
            .or_insert_with(|| load(guardian_id))
    }

    pub fn get(&self, guardian_id: &str) -> Option<&GuardianSnapshot> {
        self.entries.get(guardian_id)
    }

    /// Store `snapshot`, replacing any previous entry for the same guardian.
    pub fn insert(&mut self, snapshot: GuardianSnapshot) {
        self.entries.insert(snapshot.guardian_id.clone(), snapshot);
    }

    /// Drop one guardian's entry. Returns whether anything was cached.
    pub fn invalidate(&mut self, guardian_id: &str) -> bool {
        self.entries.remove(guardian_id).is_some()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// `(hits, misses)` since creation.
    pub fn stats(&self) -> (u64, u64) {
        (self.hits, self.misses)
    }
}
