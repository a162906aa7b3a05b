// src/report/console.rs
// =============================================================================
// The default reporter: prints progress to the terminal.
//
// Visits go to stdout, failures to stderr (so piping stdout somewhere still
// captures the visit log cleanly).
// =============================================================================

use super::Reporter;
use crate::error::CrawlError;
use url::Url;

// Reporter that prints each visit and failure as it happens.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleReporter;

impl ConsoleReporter {
    pub fn new() -> Self {
        ConsoleReporter
    }
}

impl Reporter for ConsoleReporter {
    fn on_visit(&self, visited: &Url, found: &[Url]) {
        println!("Visited {} and found {} link(s)", visited, found.len());
    }

    fn on_failure(&self, error: &CrawlError) {
        eprintln!("Error: {}", error);
    }
}
