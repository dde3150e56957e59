//! Per-entity detail memoization.
//!
//! Keys are entity display names compared case-insensitively. Writers are the
//! detail fetch tasks, which run in parallel, so the map sits behind a
//! `parking_lot::RwLock`. Entries live as long as the owning fetcher.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;

pub struct DetailCache<D> {
    entries: RwLock<HashMap<String, Arc<D>>>,
}

impl<D> Default for DetailCache<D> {
    fn default() -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
        }
    }
}

fn cache_key(name: &str) -> String {
    name.trim().to_lowercase()
}

impl<D> DetailCache<D> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> Option<Arc<D>> {
        self.entries.read().get(&cache_key(name)).cloned()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.read().contains_key(&cache_key(name))
    }

    /// Store `detail` under `name`, replacing any previous entry.
    pub fn insert(&self, name: &str, detail: D) -> Arc<D> {
        let detail = Arc::new(detail);
        self.entries
            .write()
            .insert(cache_key(name), Arc::clone(&detail));
        detail
    }

    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }
}
