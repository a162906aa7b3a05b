// src/crawler/frontier.rs
// =============================================================================
// The frontier: the queue of discovered-but-not-yet-processed URLs.
//
// How it works:
// 1. push() enqueues a URL and bumps the pending counter
// 2. Workers pull URLs off with next()
// 3. When a worker finishes a URL (after pushing whatever it discovered),
//    it calls task_done(), which drops the counter
// 4. The counter hitting zero means no work is in flight and none can ever
//    arrive, so the sender is dropped - every worker still waiting in
//    next() then sees the channel close and shuts down
//
// The ordering in step 3 is load-bearing: a task's discoveries are pushed
// BEFORE the task is marked done, so the counter can never falsely reach
// zero while work is still being generated.
//
// Rust concepts:
// - mpsc::unbounded_channel: The queue itself (many producers, one consumer
//   end shared between workers behind an async Mutex)
// - AtomicUsize: Lock-free counter of in-flight tasks
// =============================================================================

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use url::Url;

// Work queue shared by the crawl worker pool.
pub(crate) struct Frontier {
    sender: Mutex<Option<UnboundedSender<Url>>>,
    receiver: tokio::sync::Mutex<UnboundedReceiver<Url>>,
    pending: AtomicUsize,
}

impl Frontier {
    pub(crate) fn new() -> Self {
        let (sender, receiver) = mpsc::unbounded_channel();

        Self {
            sender: Mutex::new(Some(sender)),
            receiver: tokio::sync::Mutex::new(receiver),
            pending: AtomicUsize::new(0),
        }
    }

    /// Enqueues a URL as one unit of pending work.
    pub(crate) fn push(&self, url: Url) {
        let sender = self.sender.lock().unwrap();

        // Once the queue is closed no new work is accepted; that can only
        // happen after pending hit zero, at which point nothing calls push
        // anymore anyway
        if let Some(sender) = sender.as_ref() {
            self.pending.fetch_add(1, Ordering::SeqCst);
            let _ = sender.send(url);
        }
    }

    /// Waits for the next URL. Returns None once the frontier has drained.
    pub(crate) async fn next(&self) -> Option<Url> {
        self.receiver.lock().await.recv().await
    }

    /// Marks one unit of work as finished. The caller must have already
    /// pushed everything that work discovered.
    pub(crate) fn task_done(&self) {
        if self.pending.fetch_sub(1, Ordering::SeqCst) == 1 {
            // That was the last in-flight task - close the queue so every
            // worker blocked in next() wakes up with None
            self.sender.lock().unwrap().take();
        }
    }
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why two different Mutex types?
//    - std::sync::Mutex for the sender: it's only held for a few instructions
//      and never across an .await, so the cheap blocking lock is fine
//    - tokio::sync::Mutex for the receiver: workers hold it while awaiting
//      recv(), and holding a std Mutex across an .await would block the
//      whole executor thread
//
// 2. What is fetch_sub / fetch_add?
//    - Atomic read-modify-write: updates the counter and returns the OLD value
//    - fetch_sub(1) == 1 means "I just took the counter from 1 to 0",
//      and exactly one task can ever observe that
//
// 3. Why does dropping the sender end the crawl?
//    - An mpsc channel closes when every sender is gone
//    - recv() on a closed, empty channel returns None
//    - That turns "no more work can ever arrive" into a signal every
//      worker observes without any extra bookkeeping
// -----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn url(s: &str) -> Url {
        Url::parse(s).unwrap()
    }

    #[tokio::test]
    async fn test_push_then_next() {
        let frontier = Frontier::new();
        frontier.push(url("https://example.com/"));

        let got = frontier.next().await;
        assert_eq!(got, Some(url("https://example.com/")));
    }

    #[tokio::test]
    async fn test_last_task_done_closes_the_queue() {
        let frontier = Frontier::new();
        frontier.push(url("https://example.com/"));

        assert!(frontier.next().await.is_some());
        frontier.task_done();

        // Queue is closed now: next() resolves immediately with None
        // instead of waiting forever
        assert!(frontier.next().await.is_none());
    }

    #[tokio::test]
    async fn test_discoveries_keep_the_queue_open() {
        let frontier = Frontier::new();
        frontier.push(url("https://example.com/"));

        let first = frontier.next().await.unwrap();
        // Processing `first` discovers another page before finishing
        frontier.push(url("https://example.com/second"));
        frontier.task_done();
        drop(first);

        assert!(frontier.next().await.is_some());
        frontier.task_done();
        assert!(frontier.next().await.is_none());
    }

    #[tokio::test]
    async fn test_push_after_close_is_dropped() {
        let frontier = Frontier::new();
        frontier.push(url("https://example.com/"));
        frontier.next().await.unwrap();
        frontier.task_done();

        frontier.push(url("https://example.com/late"));
        assert!(frontier.next().await.is_none());
    }
}
