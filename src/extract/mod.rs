// src/extract/mod.rs
// =============================================================================
// This module turns a fetched document into the list of URLs it links to.
//
// Submodules:
// - html: The default extractor, which scans HTML anchor tags
//
// The extractor is a swappable collaborator. The contract is deliberately
// small: given the address the document was fetched from and its body,
// return every absolute URL the document references. The extractor does NOT
// filter or deduplicate - deciding which of the returned URLs actually get
// crawled is the eligibility policy's job.
//
// Rust concepts:
// - Plain (non-async) trait: Parsing is CPU work, the body is already in hand
// =============================================================================

mod html;

pub use html::HtmlExtractor;

use url::Url;

// Link discovery over a fetched document body.
//
// `base` is the URL the body was fetched from; relative references in the
// body are resolved against it.
pub trait LinkExtractor: Send + Sync {
    fn extract(&self, base: &Url, body: &str) -> anyhow::Result<Vec<Url>>;
}
