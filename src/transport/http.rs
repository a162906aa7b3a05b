// src/transport/http.rs
// =============================================================================
// The default transport: plain HTTP GET via reqwest.
//
// Client settings:
// - 10 second timeout per request, so one dead host can't stall a worker
//   forever
// - Follows up to 5 redirects before giving up
//
// A non-2xx status counts as a send failure. The crawler treats that as a
// broken branch and moves on, which is what you want when a page links to
// something that 404s.
// =============================================================================

use super::Transport;
use anyhow::bail;
use async_trait::async_trait;
use reqwest::{Client, Request};
use std::time::Duration;
use url::Url;

// GET transport backed by a shared reqwest client (connection pooling).
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    /// Builds a transport with its own client using the default settings.
    pub fn new() -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(10))
            .redirect(reqwest::redirect::Policy::limited(5))
            .build()
            .expect("failed to create HTTP client");

        Self { client }
    }

    /// Wraps an existing client, keeping whatever settings it was built with.
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

impl Default for HttpTransport {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Transport for HttpTransport {
    fn build(&self, url: &Url) -> anyhow::Result<Request> {
        let request = self.client.get(url.clone()).build()?;
        Ok(request)
    }

    async fn send(&self, request: Request) -> anyhow::Result<String> {
        let response = self.client.execute(request).await?;

        let status = response.status();
        if !status.is_success() {
            bail!("HTTP {} for {}", status.as_u16(), response.url());
        }

        Ok(response.text().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_creates_get_request_for_url() {
        let transport = HttpTransport::new();
        let url = Url::parse("https://example.com/foo?x=1").unwrap();

        let request = transport.build(&url).unwrap();

        assert_eq!(request.method(), reqwest::Method::GET);
        assert_eq!(request.url().as_str(), "https://example.com/foo?x=1");
    }
}
