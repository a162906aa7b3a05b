// src/crawler/core.rs
// =============================================================================
// The crawl orchestrator: ties every collaborator together.
//
// How a crawl works:
// 1. Parse the seed URL (an unparsable seed fails before anything runs)
// 2. Push the seed onto the frontier and spawn a pool of workers
// 3. Each worker loops: pull a URL, run the admission check, fetch, extract,
//    report, push every discovered URL back onto the frontier
// 4. When no work is in flight and the frontier is empty, the pool drains
//    and crawl() returns every branch failure that was collected
//
// The one strict ordering guarantee in the whole system is the admission
// critical section: read the visited set, ask the policy, record the URL -
// all under a single lock shared by every worker. That is what makes "each
// eligible URL is processed at most once" hold no matter how many branches
// discover it at the same time. Everything after admission (fetch, extract,
// report) runs unlocked and in parallel across workers.
//
// A failing branch does not cancel its siblings; they always run to
// completion, and their failures are collected rather than racing for a
// single error slot.
// =============================================================================

use super::frontier::Frontier;
use crate::error::CrawlError;
use crate::extract::{HtmlExtractor, LinkExtractor};
use crate::policy::{Policy, SameDomainOnce};
use crate::report::{ConsoleReporter, Reporter};
use crate::store::{MemoryStore, VisitedStore};
use crate::transport::{HttpTransport, Transport};
use futures::future;
use std::sync::{Arc, Mutex};
use tracing::debug;
use url::Url;

// Worker pool size used when the builder doesn't override it
const DEFAULT_WORKERS: usize = 8;

// The crawler. Cheap to clone (all state is behind an Arc); construct one
// with `Crawler::new()` for all-default collaborators or through
// `Crawler::builder()` to swap any of them out.
#[derive(Clone)]
pub struct Crawler {
    inner: Arc<Inner>,
}

struct Inner {
    transport: Arc<dyn Transport>,
    store: Arc<dyn VisitedStore>,
    policy: Arc<dyn Policy>,
    extractor: Arc<dyn LinkExtractor>,
    reporter: Arc<dyn Reporter>,
    // Serializes every read-decide-write admission sequence
    admission: tokio::sync::Mutex<()>,
    workers: usize,
}

impl Crawler {
    /// A crawler with all-default collaborators: reqwest GET transport,
    /// in-memory store, same-domain-once policy, HTML anchor extractor and
    /// console reporter.
    pub fn new() -> Self {
        Self::builder().build()
    }

    pub fn builder() -> CrawlerBuilder {
        CrawlerBuilder::default()
    }

    /// Crawls everything reachable (and eligible) from the seed.
    ///
    /// Returns once every branch has run to completion. `Ok(())` means no
    /// branch failed; a single branch failure comes back as-is, several come
    /// back wrapped in [`CrawlError::Multiple`]. Rejected URLs are not
    /// failures.
    pub async fn crawl(&self, seed: &str) -> Result<(), CrawlError> {
        let seed = Url::parse(seed)
            .map_err(|err| CrawlError::InvalidSeed(format!("{}: {}", seed, err)))?;

        let frontier = Arc::new(Frontier::new());
        let failures: Arc<Mutex<Vec<CrawlError>>> = Arc::new(Mutex::new(Vec::new()));

        frontier.push(seed);

        let workers: Vec<_> = (0..self.inner.workers)
            .map(|id| {
                let crawler = self.clone();
                let frontier = Arc::clone(&frontier);
                let failures = Arc::clone(&failures);

                tokio::spawn(async move { crawler.run_worker(id, frontier, failures).await })
            })
            .collect();

        // Blocks until the frontier drains and every worker shuts down
        let _ = future::join_all(workers).await;

        let mut failures = std::mem::take(&mut *failures.lock().unwrap());
        match failures.len() {
            0 => Ok(()),
            1 => Err(failures.remove(0)),
            _ => Err(CrawlError::Multiple(failures)),
        }
    }

    async fn run_worker(
        &self,
        id: usize,
        frontier: Arc<Frontier>,
        failures: Arc<Mutex<Vec<CrawlError>>>,
    ) {
        debug!(worker = id, "worker started");

        while let Some(url) = frontier.next().await {
            if let Err(err) = self.attempt(&url, &frontier).await {
                self.inner.reporter.on_failure(&err);
                failures.lock().unwrap().push(err);
            }

            // Only after the attempt pushed its discoveries - otherwise the
            // frontier could drain while work is still being generated
            frontier.task_done();
        }

        debug!(worker = id, "worker stopped");
    }

    // One unit of work: admit the URL, fetch it, extract its links, report,
    // and feed the discoveries back into the frontier.
    async fn attempt(&self, url: &Url, frontier: &Frontier) -> Result<(), CrawlError> {
        let admitted = {
            let _guard = self.inner.admission.lock().await;

            let visited = self.inner.store.read().await.map_err(CrawlError::Storage)?;

            if self.inner.policy.enforce(&visited, url) {
                self.inner.store.write(url).await.map_err(CrawlError::Storage)?;
                true
            } else {
                false
            }
        };

        if !admitted {
            debug!(%url, "rejected by policy");
            return Ok(());
        }

        debug!(%url, "admitted");

        let request = self.inner.transport.build(url).map_err(CrawlError::Transport)?;
        let body = self
            .inner
            .transport
            .send(request)
            .await
            .map_err(CrawlError::Transport)?;

        let found = self
            .inner
            .extractor
            .extract(url, &body)
            .map_err(CrawlError::Extraction)?;

        self.inner.reporter.on_visit(url, &found);

        for link in found {
            frontier.push(link);
        }

        Ok(())
    }
}

impl Default for Crawler {
    fn default() -> Self {
        Self::new()
    }
}

// Assembles a Crawler, replacing any subset of the default collaborators.
//
// This is the only configuration surface the crawler has - no flags, no
// config files, just one named option per collaborator plus the worker
// pool size.
#[derive(Default)]
pub struct CrawlerBuilder {
    transport: Option<Arc<dyn Transport>>,
    store: Option<Arc<dyn VisitedStore>>,
    policy: Option<Arc<dyn Policy>>,
    extractor: Option<Arc<dyn LinkExtractor>>,
    reporter: Option<Arc<dyn Reporter>>,
    workers: Option<usize>,
}

impl CrawlerBuilder {
    /// Replaces the default HTTP transport.
    pub fn with_transport(mut self, transport: impl Transport + 'static) -> Self {
        self.transport = Some(Arc::new(transport));
        self
    }

    /// Replaces the default in-memory visited store.
    pub fn with_store(mut self, store: impl VisitedStore + 'static) -> Self {
        self.store = Some(Arc::new(store));
        self
    }

    /// Replaces the default same-domain-once policy.
    pub fn with_policy(mut self, policy: impl Policy + 'static) -> Self {
        self.policy = Some(Arc::new(policy));
        self
    }

    /// Replaces the default HTML anchor extractor.
    pub fn with_extractor(mut self, extractor: impl LinkExtractor + 'static) -> Self {
        self.extractor = Some(Arc::new(extractor));
        self
    }

    /// Replaces the default console reporter.
    pub fn with_reporter(mut self, reporter: impl Reporter + 'static) -> Self {
        self.reporter = Some(Arc::new(reporter));
        self
    }

    /// Sets the worker pool size (default: 8). This bounds how many pages
    /// can be in flight at once.
    pub fn workers(mut self, workers: usize) -> Self {
        self.workers = Some(workers.max(1));
        self
    }

    pub fn build(self) -> Crawler {
        Crawler {
            inner: Arc::new(Inner {
                transport: self.transport.unwrap_or_else(|| Arc::new(HttpTransport::new())),
                store: self.store.unwrap_or_else(|| Arc::new(MemoryStore::new())),
                policy: self.policy.unwrap_or_else(|| Arc::new(SameDomainOnce::new())),
                extractor: self.extractor.unwrap_or_else(|| Arc::new(HtmlExtractor::new())),
                reporter: self.reporter.unwrap_or_else(|| Arc::new(ConsoleReporter::new())),
                admission: tokio::sync::Mutex::new(()),
                workers: self.workers.unwrap_or(DEFAULT_WORKERS),
            }),
        }
    }
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why is the admission check under a lock but the fetch isn't?
//    - Admission is read-decide-write on shared state: two workers racing
//      through it could both admit the same URL
//    - Fetching is independent per URL, so serializing it would just throw
//      away all the concurrency
//
// 2. What is Arc<dyn Transport>?
//    - dyn Transport = "any type implementing Transport" (a trait object)
//    - Arc = shared ownership, so every cloned Crawler and every worker
//      points at the same collaborator instances
//
// 3. Why clone the Crawler for each worker?
//    - tokio::spawn requires 'static: the task may outlive the caller's
//      stack frame, so it can't borrow from it
//    - Cloning is cheap (one Arc bump) and moves an owned handle into
//      the task
// -----------------------------------------------------------------------------
