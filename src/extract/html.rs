// src/extract/html.rs
// =============================================================================
// The default link extractor: scans HTML anchor tags.
//
// How it works:
// 1. Parse the body with the `scraper` crate (html5ever underneath)
// 2. Select every <a> tag that carries an href attribute
// 3. Resolve the href against the page's own URL (handles relative paths,
//    protocol-relative references, queries and fragments)
// 4. Skip any href that doesn't resolve to a valid URL and keep scanning
//
// Extraction is deliberately permissive: html5ever recovers from malformed
// markup instead of failing, so a truncated or broken document simply yields
// whatever anchors could still be parsed, with no error. Unresolvable href
// values are dropped silently for the same reason - one bad attribute should
// not kill the whole page.
//
// One wrinkle: Url::join follows the WHATWG spec, which KEEPS invalid
// percent sequences (a bare "%" joins to ".../%" instead of erroring). An
// href like that is malformed, not a page worth fetching, so we validate
// percent-escapes ourselves and skip the href before joining.
//
// Note that no scheme filtering happens here: mailto:, tel: and friends come
// back as perfectly valid URLs. They die at the eligibility policy instead,
// since they never match the crawl domain.
// =============================================================================

use super::LinkExtractor;
use scraper::{Html, Selector};
use url::Url;

// Extractor that reads the href of every HTML anchor tag.
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlExtractor;

impl HtmlExtractor {
    pub fn new() -> Self {
        HtmlExtractor
    }
}

impl LinkExtractor for HtmlExtractor {
    fn extract(&self, base: &Url, body: &str) -> anyhow::Result<Vec<Url>> {
        let document = Html::parse_document(body);

        // The selector is a constant and known to be valid, so unwrap is safe
        let selector = Selector::parse("a[href]").unwrap();

        let mut links = Vec::new();

        for element in document.select(&selector) {
            if let Some(href) = element.value().attr("href") {
                // Url::join would happily keep a broken escape like a bare
                // "%", so treat it as malformed here
                if !percent_escapes_valid(href) {
                    continue;
                }

                // join() resolves relative references against the page URL
                // and passes absolute ones through unchanged
                match base.join(href) {
                    Ok(url) => links.push(url),
                    Err(_) => continue, // Malformed href, skip it
                }
            }
        }

        Ok(links)
    }
}

// Checks that every "%" in the value starts a proper two-hex-digit escape
// ("%20" is fine, "%" or "%zz" is not).
fn percent_escapes_valid(href: &str) -> bool {
    let bytes = href.as_bytes();
    let mut i = 0;

    while i < bytes.len() {
        if bytes[i] == b'%' {
            match (bytes.get(i + 1), bytes.get(i + 2)) {
                (Some(hi), Some(lo)) if hi.is_ascii_hexdigit() && lo.is_ascii_hexdigit() => {
                    i += 3;
                }
                _ => return false,
            }
        } else {
            i += 1;
        }
    }

    true
}
