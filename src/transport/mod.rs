// src/transport/mod.rs
// =============================================================================
// This module turns a URL into the body of the document behind it.
//
// Submodules:
// - http: The default reqwest-based GET transport
//
// The transport is a swappable collaborator with a two-step contract:
// build a request for a URL, then send it and hand back the response body.
// Splitting build from send lets a custom transport (or a test) inspect and
// rewrite requests before they go out. The crawler wraps any failure from
// either step as a transport-category error for that one branch; it never
// retries and never cancels sibling branches.
//
// Rust concepts:
// - async_trait: send() does network I/O, so it has to be async
// - reqwest::Request: Used as the request type so custom transports stay
//   interoperable with the reqwest client (a Request can be built without
//   a client, so mocks don't need the network)
// =============================================================================

mod http;

pub use http::HttpTransport;

use async_trait::async_trait;
use reqwest::Request;
use url::Url;

// Fetching seam between the crawler and the network.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Builds the request that would fetch the given URL.
    fn build(&self, url: &Url) -> anyhow::Result<Request>;

    /// Sends a request and returns the response body as text.
    async fn send(&self, request: Request) -> anyhow::Result<String>;
}
