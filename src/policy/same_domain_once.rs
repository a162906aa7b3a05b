// src/policy/same_domain_once.rs
// =============================================================================
// The default eligibility policy: same domain, visit once.
//
// Decision steps, in order:
// 1. Nothing visited yet -> admit (the first URL establishes the domain)
// 2. Candidate host differs from the visited domain -> reject
// 3. Candidate already visited exactly -> reject
// 4. Candidate's path matches a visited path modulo a trailing "/" -> reject
//    (scheme, query and fragment are ignored for this comparison, so
//    /foo, /foo/, /foo?x=1 and /foo#top all count as the same page)
// 5. Otherwise -> admit
//
// Step 2 derives the reference domain from an arbitrary member of the
// visited set. That only works because this policy never admits a second
// domain in the first place - a visited set seeded with mixed domains would
// make the choice of reference arbitrary. Keep that invariant in mind if
// you pre-populate a store before crawling.
// =============================================================================

use super::Policy;
use crate::store::VisitedSet;
use url::Url;

// Policy that keeps the crawl on the first domain it sees and treats
// trailing-slash/query/fragment variants of a visited path as already seen.
#[derive(Debug, Clone, Copy, Default)]
pub struct SameDomainOnce;

impl SameDomainOnce {
    pub fn new() -> Self {
        SameDomainOnce
    }
}

impl Policy for SameDomainOnce {
    fn enforce(&self, visited: &VisitedSet, candidate: &Url) -> bool {
        // An arbitrary member is good enough: every member shares one domain
        let reference = match visited.iter().next() {
            None => return true,
            Some(entry) => entry.host_str(),
        };

        // host_str() has no port, so :8080 and :9090 count as the same host
        if candidate.host_str() != reference {
            return false;
        }

        if visited.contains(candidate) {
            return false;
        }

        if visited.iter().any(|entry| paths_equivalent(entry, candidate)) {
            return false;
        }

        true
    }
}

// Two URLs point at the same page when their paths match after stripping a
// single trailing slash.
fn paths_equivalent(a: &Url, b: &Url) -> bool {
    trim_trailing_slash(a.path()) == trim_trailing_slash(b.path())
}

fn trim_trailing_slash(path: &str) -> &str {
    path.strip_suffix('/').unwrap_or(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn visited(urls: &[&str]) -> VisitedSet {
        urls.iter()
            .map(|u| Url::parse(u).unwrap())
            .collect::<HashSet<_>>()
    }

    fn candidate(url: &str) -> Url {
        Url::parse(url).unwrap()
    }

    #[test]
    fn test_empty_set_admits_anything() {
        let policy = SameDomainOnce::new();
        assert!(policy.enforce(&visited(&[]), &candidate("https://example.com/")));
        assert!(policy.enforce(&visited(&[]), &candidate("https://other.com/foo")));
    }

    #[test]
    fn test_different_host_rejected() {
        let policy = SameDomainOnce::new();
        let set = visited(&["https://example.com/foo"]);
        assert!(!policy.enforce(&set, &candidate("https://other.com/foo")));
    }

    #[test]
    fn test_identical_url_rejected() {
        let policy = SameDomainOnce::new();
        let set = visited(&["https://example.com/foo"]);
        assert!(!policy.enforce(&set, &candidate("https://example.com/foo")));
    }

    #[test]
    fn test_query_variant_rejected() {
        let policy = SameDomainOnce::new();
        let set = visited(&["https://example.com/foo"]);
        assert!(!policy.enforce(&set, &candidate("https://example.com/foo?x=1")));
    }

    #[test]
    fn test_trailing_slash_variant_rejected() {
        let policy = SameDomainOnce::new();
        let set = visited(&["https://example.com/foo"]);
        assert!(!policy.enforce(&set, &candidate("https://example.com/foo/")));

        // And the other way around
        let set = visited(&["https://example.com/bar/"]);
        assert!(!policy.enforce(&set, &candidate("https://example.com/bar")));
    }

    #[test]
    fn test_fragment_variant_rejected() {
        let policy = SameDomainOnce::new();
        let set = visited(&["https://example.com/foo"]);
        assert!(!policy.enforce(&set, &candidate("https://example.com/foo#section")));
    }

    #[test]
    fn test_scheme_variant_of_same_path_rejected() {
        let policy = SameDomainOnce::new();
        let set = visited(&["https://example.com/foo"]);
        assert!(!policy.enforce(&set, &candidate("http://example.com/foo")));
    }

    #[test]
    fn test_new_path_on_same_domain_admitted() {
        let policy = SameDomainOnce::new();
        let set = visited(&["https://example.com/foo"]);
        assert!(policy.enforce(&set, &candidate("https://example.com/bar")));
    }

    #[test]
    fn test_port_is_ignored_for_host_comparison() {
        let policy = SameDomainOnce::new();
        let set = visited(&["http://example.com:8080/foo"]);
        assert!(policy.enforce(&set, &candidate("http://example.com:9090/bar")));
    }

    #[test]
    fn test_mailto_candidate_rejected_once_domain_established() {
        let policy = SameDomainOnce::new();
        let set = visited(&["https://example.com/"]);
        // mailto: URLs have no host, so they can never match the domain
        assert!(!policy.enforce(&set, &candidate("mailto:someone@example.com")));
    }
}
