//! In-memory bidirectional link registry.
//!
//! Two complementary maps give O(1) lookup in both directions: short id to
//! target URL for redirects, target URL to short id for deduplication.
//! Entries are never removed during normal operation; `undo_insert` exists
//! only so a failed persistence write can be unwound.

use std::collections::HashMap;

#[derive(Debug, Clone, Default)]
pub struct LinkStore {
    by_id: HashMap<String, String>,
    by_url: HashMap<String, String>,
}

impl LinkStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild a store from two already-consistent maps (snapshot restore).
    pub fn from_parts(by_id: HashMap<String, String>, by_url: HashMap<String, String>) -> Self {
        Self { by_id, by_url }
    }

    pub fn resolve(&self, short_id: &str) -> Option<&str> {
        self.by_id.get(short_id).map(String::as_str)
    }

    pub fn lookup_existing_id(&self, target_url: &str) -> Option<&str> {
        self.by_url.get(target_url).map(String::as_str)
    }

    pub fn exists(&self, short_id: &str) -> bool {
        self.by_id.contains_key(short_id)
    }

    /// Insert a mapping into both directions.
    ///
    /// The caller must have checked `exists` first; this does not enforce id
    /// uniqueness so the caller can decide between conflict and dedup.
    /// When the target URL was already bound to another id, the reverse map
    /// now points at the new id and the displaced id is returned so the
    /// caller can undo the insert exactly.
    pub fn insert(&mut self, short_id: String, target_url: String) -> Option<String> {
        let displaced = self.by_url.insert(target_url.clone(), short_id.clone());
        self.by_id.insert(short_id, target_url);
        displaced
    }

    /// Unwind a just-performed `insert`, restoring any displaced reverse binding.
    pub fn undo_insert(&mut self, short_id: &str, target_url: &str, displaced: Option<String>) {
        self.by_id.remove(short_id);
        match displaced {
            Some(previous) => {
                self.by_url.insert(target_url.to_string(), previous);
            }
            None => {
                self.by_url.remove(target_url);
            }
        }
    }

    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }

    pub fn forward(&self) -> &HashMap<String, String> {
        &self.by_id
    }

    pub fn reverse(&self) -> &HashMap<String, String> {
        &self.by_url
    }
}
