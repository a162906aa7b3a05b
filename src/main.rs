// src/main.rs
// =============================================================================
// This is the entry point of our CLI application.
//
// What happens here:
// 1. Parse command-line arguments using clap
// 2. Set up tracing output (controlled via the RUST_LOG env var)
// 3. Build a crawler with a collecting reporter and run it
// 4. Print the visited pages as a table or as JSON
// 5. Exit with proper code (0 = clean crawl, 1 = branch failures, 2 = error)
//
// All the actual crawling logic lives in the library - this file is only
// glue between the terminal and the `webcrawl` crate.
// =============================================================================

mod cli;

use clap::Parser;
use cli::Cli;
use tracing_subscriber::EnvFilter;
use webcrawl::{CollectingReporter, CrawlError, Crawler, VisitRecord};

// anyhow::Result is like std::result::Result but simpler for applications
// It lets us return any error type with the ? operator
use anyhow::Result;

#[tokio::main]
async fn main() {
    let exit_code = match run().await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {}", e);
            2
        }
    };

    std::process::exit(exit_code);
}

// The main application logic
// Returns:
//   Ok(0) = crawl finished with no failures
//   Ok(1) = crawl finished but some branches failed
//   Ok(2) = the seed URL was unusable
//   Err  = unexpected error
async fn run() -> Result<i32> {
    let cli = Cli::parse();

    // Log filtering comes from RUST_LOG (e.g. RUST_LOG=webcrawl=debug);
    // logs go to stderr so they don't mix with the report on stdout
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    println!("Crawling: {}", cli.seed_url);

    // The collecting reporter keeps every visit so we can print a summary
    // once the crawl is done
    let reporter = CollectingReporter::new();
    let crawler = Crawler::builder()
        .with_reporter(reporter.clone())
        .workers(cli.workers)
        .build();

    let crawl_result = crawler.crawl(&cli.seed_url).await;

    // An invalid seed means nothing ran at all - bail out before reporting
    if let Err(CrawlError::InvalidSeed(msg)) = &crawl_result {
        eprintln!("Error: invalid seed URL: {}", msg);
        return Ok(2);
    }

    let visits = reporter.visits();
    print_results(&visits, cli.json)?;

    match crawl_result {
        Ok(()) => Ok(0),
        Err(err) => {
            // Branch failures: the crawl still completed everything it could
            eprintln!("\nCrawl finished with failures: {}", err);
            for failure in reporter.failures() {
                eprintln!("   {}", failure);
            }
            Ok(1)
        }
    }
}

// Prints the visited pages either as a table or JSON
fn print_results(visits: &[VisitRecord], json: bool) -> Result<()> {
    if json {
        // Serialize results to JSON and print
        let json_output = serde_json::to_string_pretty(visits)?;
        println!("{}", json_output);
    } else {
        print_table(visits);
    }
    Ok(())
}

// Prints visits as a human-readable table in the terminal
fn print_table(visits: &[VisitRecord]) {
    println!("{:<70} {:<12}", "URL", "LINKS FOUND");
    println!("{}", "=".repeat(82));

    for visit in visits {
        // Truncate URL if too long for display
        let url_display = if visit.url.len() > 67 {
            format!("{}...", &visit.url[..67])
        } else {
            visit.url.clone()
        };

        println!("{:<70} {:<12}", url_display, visit.found.len());
    }

    println!();
    println!("Summary:");
    println!("   Pages visited: {}", visits.len());
    println!(
        "   Links discovered: {}",
        visits.iter().map(|v| v.found.len()).sum::<usize>()
    );
}
