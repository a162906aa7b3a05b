// src/lib.rs
// =============================================================================
// webcrawl: a concurrent same-domain web crawler with pluggable components.
//
// Given a seed URL, the crawler fetches the page, extracts its links, admits
// the ones that pass the eligibility policy, and keeps going until no
// eligible link remains. Every collaborator sits behind a trait and can be
// swapped out through the builder:
//
//   let crawler = Crawler::builder()
//       .with_policy(MyPolicy)       // which URLs to admit
//       .with_store(MyStore::new())  // where the visited set lives
//       .workers(16)                 // worker pool size
//       .build();
//   crawler.crawl("https://example.com").await?;
//
// Guarantees:
// - Each eligible URL is admitted and fetched at most once, no matter how
//   many pages link to it concurrently
// - A failing page never cancels the rest of the crawl; crawl() returns
//   every branch failure once all work has finished
// - Rejected URLs are dropped silently - rejection is not an error
// =============================================================================

pub mod crawler;
pub mod error;
pub mod extract;
pub mod policy;
pub mod report;
pub mod store;
pub mod transport;

// Re-export the public API at the crate root so users don't need to know
// about our internal module layout
pub use crawler::{Crawler, CrawlerBuilder};
pub use error::CrawlError;
pub use extract::{HtmlExtractor, LinkExtractor};
pub use policy::{Policy, SameDomainOnce};
pub use report::{CollectingReporter, ConsoleReporter, Reporter, VisitRecord};
pub use store::{MemoryStore, VisitedSet, VisitedStore};
pub use transport::{HttpTransport, Transport};
