// src/main.rs
// =============================================================================
// This is the entry point of our CLI application.
//
// What happens here:
// 1. Set up logging (tracing) and parse command-line arguments (clap)
// 2. Dispatch to the crawl or single-word handler
// 3. Save the results as JSON
// 4. Exit with a code that says how it went:
//      0 = results written
//      1 = finished, but nothing was extracted (no file written)
//      2 = error (bad settings, couldn't write the output)
// =============================================================================

mod cli;
mod config;
mod crawl;
mod emit;
mod error;
mod extract;
mod fetch;
mod model;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Commands, OutputArgs};
use config::CrawlConfig;
use crawl::{CrawlEngine, CrawlStatus};
use emit::EmitOutcome;
use fetch::HttpFetcher;
use tokio_util::sync::CancellationToken;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    init_logging();

    let exit_code = match run().await {
        Ok(code) => code,
        Err(e) => {
            error!("{:#}", e);
            eprintln!("Error: {:#}", e);
            2
        }
    };

    std::process::exit(exit_code);
}

// Logs go to stderr so stdout stays clean for the summary.
// RUST_LOG overrides the default "info" level.
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

async fn run() -> Result<i32> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Crawl {
            seed,
            vocabulary_limit,
            request_delay_seconds,
            output,
        } => handle_crawl(&seed, vocabulary_limit, request_delay_seconds, &output).await,
        Commands::Word { word, output } => handle_word(&word, &output).await,
    }
}

// Handles the 'crawl' subcommand
async fn handle_crawl(
    seed: &str,
    vocabulary_limit: usize,
    request_delay_seconds: f64,
    output: &OutputArgs,
) -> Result<i32> {
    let config = CrawlConfig::new(vocabulary_limit, request_delay_seconds, &output.base_url)?;

    println!("🔍 Crawling from: {}", seed);
    println!("📊 Vocabulary limit: {}", config.vocabulary_limit());

    let shutdown = CancellationToken::new();
    listen_for_shutdown(shutdown.clone());

    let engine = CrawlEngine::new(HttpFetcher::new()?, config).with_shutdown(shutdown);
    let report = engine.crawl(seed).await;

    let path = emit::output_path(&output.output_dir, seed);
    let outcome = emit::emit_corpus(&report.corpus, &path)?;

    println!();
    println!("📊 Summary:");
    println!("   {} Stopped: {}", status_icon(report.status), status_label(report.status));
    println!("   📋 Visited: {}", report.visited.len());
    println!("   ✅ Extracted: {}", report.corpus.len());
    println!("   ❌ Failed: {}", report.failed.len());

    Ok(print_outcome(&outcome))
}

// Handles the 'word' subcommand
async fn handle_word(word: &str, output: &OutputArgs) -> Result<i32> {
    let config = CrawlConfig::new(1, 0.0, &output.base_url)?;

    println!("🔍 Looking up: {}", word);

    let engine = CrawlEngine::new(HttpFetcher::new()?, config);
    let record = match engine.extract_word(word).await {
        Ok(record) => Some(record),
        Err(e) => {
            error!(word, error = %e, "error fetching data for word");
            None
        }
    };

    let path = emit::output_path(&output.output_dir, word);
    let outcome = emit::emit_record(record.as_ref(), &path)?;

    Ok(print_outcome(&outcome))
}

// Cancels the crawl on Ctrl-C; the current word finishes first
fn listen_for_shutdown(token: CancellationToken) {
    tokio::spawn(async move {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!("failed to listen for shutdown signal: {}", e);
            return;
        }
        info!("received shutdown signal, stopping after the current word");
        token.cancel();
    });
}

fn print_outcome(outcome: &EmitOutcome) -> i32 {
    match outcome {
        EmitOutcome::Written(path) => {
            println!("💾 Data saved to {}", path.display());
            0
        }
        EmitOutcome::Skipped => {
            println!("⚠️  No data to save");
            1
        }
    }
}

fn status_icon(status: CrawlStatus) -> &'static str {
    match status {
        CrawlStatus::Completed => "🏁",
        CrawlStatus::Exhausted => "🌱",
        CrawlStatus::Cancelled => "🛑",
    }
}

fn status_label(status: CrawlStatus) -> &'static str {
    match status {
        CrawlStatus::Completed => "vocabulary limit reached",
        CrawlStatus::Exhausted => "no more words to follow",
        CrawlStatus::Cancelled => "cancelled",
    }
}
