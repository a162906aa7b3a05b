// src/report/collect.rs
// =============================================================================
// A reporter that keeps every visit in memory.
//
// The CLI uses this to print a summary table (or JSON, via serde) once the
// crawl is done. Tests use it to assert on exactly what was visited and
// what was discovered.
//
// Like MemoryStore, cloning a CollectingReporter clones the handle, not the
// data: keep one handle, give a clone to the crawler, read the records back
// afterwards.
// =============================================================================

use super::Reporter;
use crate::error::CrawlError;
use serde::Serialize;
use std::sync::{Arc, Mutex};
use url::Url;

// One successfully visited page and the links discovered on it.
#[derive(Debug, Clone, Serialize)]
pub struct VisitRecord {
    pub url: String,
    pub found: Vec<String>,
}

// Reporter that accumulates visits and failure messages in memory.
#[derive(Debug, Clone, Default)]
pub struct CollectingReporter {
    visits: Arc<Mutex<Vec<VisitRecord>>>,
    failures: Arc<Mutex<Vec<String>>>,
}

impl CollectingReporter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything visited so far, in completion order.
    pub fn visits(&self) -> Vec<VisitRecord> {
        self.visits.lock().unwrap().clone()
    }

    /// Rendered messages of every branch failure so far.
    pub fn failures(&self) -> Vec<String> {
        self.failures.lock().unwrap().clone()
    }
}

impl Reporter for CollectingReporter {
    fn on_visit(&self, visited: &Url, found: &[Url]) {
        self.visits.lock().unwrap().push(VisitRecord {
            url: visited.to_string(),
            found: found.iter().map(|u| u.to_string()).collect(),
        });
    }

    fn on_failure(&self, error: &CrawlError) {
        self.failures.lock().unwrap().push(error.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::anyhow;

    #[test]
    fn test_records_visits_and_failures() {
        let reporter = CollectingReporter::new();
        let handle = reporter.clone();

        let page = Url::parse("https://example.com/").unwrap();
        let link = Url::parse("https://example.com/foo").unwrap();
        reporter.on_visit(&page, &[link]);
        reporter.on_failure(&CrawlError::Transport(anyhow!("boom")));

        let visits = handle.visits();
        assert_eq!(visits.len(), 1);
        assert_eq!(visits[0].url, "https://example.com/");
        assert_eq!(visits[0].found, vec!["https://example.com/foo"]);

        assert_eq!(handle.failures(), vec!["transport error: boom"]);
    }
}
