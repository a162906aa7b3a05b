// src/store/memory.rs
// =============================================================================
// The default visited-set store: a HashSet living in process memory.
//
// Why Arc inside the struct?
// - Cloning a MemoryStore clones the handle, not the data
// - That lets a caller keep a handle, hand a clone to the crawler, and
//   inspect the visited set after the crawl finishes (or run a second crawl
//   over the same set - nothing gets admitted twice)
//
// Rust concepts:
// - Arc<Mutex<...>>: Shared ownership + interior mutability across threads
// - Clone: Derived so the store can be shared between caller and crawler
// =============================================================================

use super::{VisitedSet, VisitedStore};
use async_trait::async_trait;
use std::collections::HashSet;
use std::sync::{Arc, Mutex};
use url::Url;

// In-memory visited-set store.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    data: Arc<Mutex<HashSet<Url>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of URLs recorded so far. Handy for tests and summaries.
    pub fn len(&self) -> usize {
        self.data.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl VisitedStore for MemoryStore {
    async fn read(&self) -> anyhow::Result<VisitedSet> {
        // The lock is only poisoned if another thread panicked while holding
        // it, and nothing panics in here - so unwrap is fine
        Ok(self.data.lock().unwrap().clone())
    }

    async fn write(&self, visited: &Url) -> anyhow::Result<()> {
        self.data.lock().unwrap().insert(visited.clone());
        Ok(())
    }
}
