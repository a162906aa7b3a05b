// src/report/mod.rs
// =============================================================================
// This module notifies the outside world about crawl progress.
//
// Submodules:
// - console: Prints visits and failures to stdout/stderr (the default)
// - collect: Accumulates visits in memory for later inspection or JSON output
//
// The reporter is fire-and-forget: it returns nothing, its outcome never
// affects control flow or the crawl's error state, and it runs inline inside
// a worker - so an implementation must not block for long.
// =============================================================================

mod collect;
mod console;

pub use collect::{CollectingReporter, VisitRecord};
pub use console::ConsoleReporter;

use crate::error::CrawlError;
use url::Url;

// Progress sink for the crawler.
//
// `on_visit` fires after a page was fetched and scanned, with the raw list
// of discovered links (before any eligibility filtering). `on_failure` fires
// once per failed branch.
pub trait Reporter: Send + Sync {
    fn on_visit(&self, visited: &Url, found: &[Url]);
    fn on_failure(&self, error: &CrawlError);
}
