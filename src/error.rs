// src/error.rs
// =============================================================================
// This module defines the error type returned by the crawler.
//
// Error model:
// - Every failure is tagged with the collaborator it came from (transport,
//   extraction, storage) so callers can tell the categories apart
// - A failure in one crawl branch never cancels the others; when the crawl
//   finishes, every branch failure that occurred is returned together
// - A URL rejected by the eligibility policy is NOT an error - it is simply
//   dropped from further traversal
//
// Rust concepts:
// - thiserror: Derive macro that implements std::error::Error and Display
// - anyhow::Error: Type-erased error carried as the underlying cause
// =============================================================================

use thiserror::Error;

// The error returned by `Crawler::crawl`.
//
// The first four variants are leaf failures from a single crawl branch.
// `Multiple` appears only when more than one branch failed during the same
// crawl; the order of the collected errors is not meaningful, since branches
// fail concurrently.
#[derive(Debug, Error)]
pub enum CrawlError {
    /// The seed URL could not be parsed. Returned before any work is spawned.
    #[error("invalid seed URL: {0}")]
    InvalidSeed(String),

    /// Building or sending the HTTP request failed.
    #[error("transport error: {0}")]
    Transport(#[source] anyhow::Error),

    /// The link extractor failed on a fetched document.
    #[error("extraction error: {0}")]
    Extraction(#[source] anyhow::Error),

    /// Reading or writing the visited set failed.
    #[error("storage error: {0}")]
    Storage(#[source] anyhow::Error),

    /// More than one crawl branch failed. Holds every collected failure.
    #[error("{} crawl branches failed: {}", .0.len(), join_messages(.0))]
    Multiple(Vec<CrawlError>),
}

// Renders the collected branch failures so that Display on `Multiple`
// doesn't swallow the individual causes.
fn join_messages(errors: &[CrawlError]) -> String {
    errors
        .iter()
        .map(|e| e.to_string())
        .collect::<Vec<_>>()
        .join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::anyhow;

    #[test]
    fn test_display_includes_category() {
        let err = CrawlError::Transport(anyhow!("connection refused"));
        assert_eq!(err.to_string(), "transport error: connection refused");

        let err = CrawlError::Storage(anyhow!("disk full"));
        assert_eq!(err.to_string(), "storage error: disk full");
    }

    #[test]
    fn test_multiple_reports_count_and_causes() {
        let err = CrawlError::Multiple(vec![
            CrawlError::Transport(anyhow!("a")),
            CrawlError::Extraction(anyhow!("b")),
        ]);
        // Each underlying cause survives into the rendered message
        assert_eq!(
            err.to_string(),
            "2 crawl branches failed: transport error: a; extraction error: b"
        );
    }
}
