// src/store/mod.rs
// =============================================================================
// This module owns the record of which URLs have already been admitted.
//
// Submodules:
// - memory: The default in-memory store
//
// The store is a swappable collaborator: anything that can read back the set
// of visited URLs and append a new one can act as the crawler's memory (a
// database table, a redis set, a file...). The crawler serializes every
// read-decide-write admission sequence behind its own lock, so the store
// itself only has to be safe to call from multiple threads - it does not
// have to provide atomicity across read() and write().
//
// Rust concepts:
// - async_trait: Allows async methods in a trait so stores can do real I/O
// - Trait objects: The crawler holds an Arc<dyn VisitedStore>
// =============================================================================

mod memory;

pub use memory::MemoryStore;

use async_trait::async_trait;
use std::collections::HashSet;
use url::Url;

// The set of URLs admitted so far.
//
// Membership is exact URL equality (scheme, host, port, path, query and
// fragment all included). Looser notions like "same page modulo trailing
// slash" are the eligibility policy's business, not the store's.
pub type VisitedSet = HashSet<Url>;

// Read/write access to the visited set.
//
// `read` returns a snapshot of the whole set; `write` appends one URL.
// Entries are never removed - the set only grows for the lifetime of the
// store instance.
#[async_trait]
pub trait VisitedStore: Send + Sync {
    /// Returns a snapshot of every URL admitted so far.
    async fn read(&self) -> anyhow::Result<VisitedSet>;

    /// Records a URL as visited.
    async fn write(&self, visited: &Url) -> anyhow::Result<()>;
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. What is #[async_trait]?
//    - Rust traits can't have plain async methods usable through a trait
//      object (dyn VisitedStore), so the macro rewrites them to return a
//      boxed Future
//    - The crawler holds collaborators as Arc<dyn ...>, which is why we
//      need it here
//
// 2. Why does read() return a snapshot instead of a reference?
//    - A reference into the store would pin its lifetime to the store's
//      internals, which doesn't work for stores backed by a database
//    - A clone of a HashSet of URLs is cheap at crawl scale, and the
//      admission lock makes the snapshot consistent where it matters
// -----------------------------------------------------------------------------
