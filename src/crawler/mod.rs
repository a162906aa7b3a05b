// src/crawler/mod.rs
// =============================================================================
// This module contains the crawl engine itself.
//
// Submodules:
// - core: The Crawler, its builder, and the worker pool
// - frontier: The shared queue of discovered-but-not-yet-processed URLs
//
// The engine owns all concurrency: a bounded pool of workers pulls URLs off
// the frontier, runs each through the admission check, fetches and scans the
// page, and feeds the discovered links back in. The collaborators it calls
// (transport, store, policy, extractor, reporter) live in their own modules
// and are all swappable through the builder.
// =============================================================================

mod core;
mod frontier;

pub use self::core::{Crawler, CrawlerBuilder};
