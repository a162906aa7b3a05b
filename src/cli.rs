// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// clap is a popular Rust library for parsing command-line arguments.
// We use the "derive" API which lets us define the CLI structure using
// Rust structs and attributes (the #[...] things).
//
// The CLI is deliberately tiny: the crawler itself is configured through
// its builder in code, and the binary only exposes the knobs that make
// sense on a command line.
// =============================================================================

use clap::Parser;

// This struct represents our entire CLI application
//
// #[derive(Parser)] tells clap to automatically generate parsing code
// The #[command(...)] attributes configure how the CLI behaves
#[derive(Parser, Debug)]
#[command(
    name = "webcrawl",
    version = "0.1.0",
    about = "Crawl a website, visiting every same-domain page exactly once",
    long_about = "webcrawl starts from a seed URL and follows every link that stays on \
                  the seed's domain, visiting each page at most once. Trailing-slash, \
                  query and fragment variants of a visited page are skipped."
)]
pub struct Cli {
    /// Seed URL to start crawling from (e.g., https://example.com)
    ///
    /// This is a positional argument (required, no flag needed)
    pub seed_url: String,

    /// Output the visited pages in JSON format instead of a table
    #[arg(long)]
    pub json: bool,

    /// Worker pool size - how many pages may be in flight at once
    ///
    /// #[arg(long, default_value_t = 8)] creates --workers with a default
    #[arg(long, default_value_t = 8)]
    pub workers: usize,
}
