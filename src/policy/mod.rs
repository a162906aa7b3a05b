// src/policy/mod.rs
// =============================================================================
// This module decides which discovered URLs are eligible for crawling.
//
// Submodules:
// - same_domain_once: The default policy ("stay on one domain, visit each
//   page at most once")
//
// The policy is a pure predicate: given the set of URLs already visited and
// a candidate, it answers "should this candidate be crawled?". It must not
// have side effects - the crawler itself records the admission. A custom
// policy that needs extra state (a visit budget, a depth counter, ...) keeps
// that state on its own instance and can wrap the default policy to add a
// predicate on top of it.
//
// Rust concepts:
// - Plain (non-async) trait: The decision is pure computation, no I/O
// =============================================================================

mod same_domain_once;

pub use same_domain_once::SameDomainOnce;

use crate::store::VisitedSet;
use url::Url;

// Eligibility predicate consulted inside the admission critical section.
//
// Returning true admits the candidate; the crawler then records it as
// visited and fetches it. Returning false silently drops the candidate -
// rejection is never an error.
pub trait Policy: Send + Sync {
    fn enforce(&self, visited: &VisitedSet, candidate: &Url) -> bool;
}
