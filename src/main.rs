use anyhow::{Context, Result};
use clap::Parser;
use std::path::Path;
use tracing_subscriber::EnvFilter;

use docsift::{load_corpus, search, CorpusStats, SearchOptions, SearchOutcome};

mod cli;
use cli::display;
use cli::{Cli, Commands, OutputFormat};

/// Env var holding a tracing filter directive, e.g. `docsift=trace`.
const LOG_ENV: &str = "DOCSIFT_LOG";

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        Commands::Search {
            query,
            data,
            limit,
            radius,
            format,
        } => run_search(&data, &query, limit, radius, format),
        Commands::Inspect { data } => run_inspect(&data),
    };

    if let Err(e) = result {
        eprintln!("error: {:#}", e);
        std::process::exit(1);
    }
}

/// Logs go to stderr so `--format json` output stays parseable.
fn init_logging(verbose: bool) {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| {
        EnvFilter::new(if verbose { "docsift=debug" } else { "docsift=warn" })
    });
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run_search(
    data: &Path,
    query: &str,
    limit: Option<usize>,
    radius: usize,
    format: OutputFormat,
) -> Result<()> {
    let documents = load_corpus(data)
        .with_context(|| format!("failed to load corpus {}", data.display()))?;

    let options = SearchOptions {
        excerpt_radius: radius,
        limit,
    };
    let outcome = search(&documents, query, &options);

    match format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&outcome)
                .context("failed to serialize search results")?;
            println!("{}", json);
        }
        OutputFormat::Html => print!("{}", cli::html::render_outcome(&outcome)),
        OutputFormat::Text => print_outcome(&outcome),
    }
    Ok(())
}

fn print_outcome(outcome: &SearchOutcome) {
    match outcome {
        SearchOutcome::AwaitingQuery => display::print_awaiting_query(),
        SearchOutcome::Results {
            query,
            total_matches: 0,
            ..
        } => display::print_no_results(query),
        SearchOutcome::Results {
            query,
            total_matches,
            cards,
        } => {
            display::print_results_header(query, cards.len(), *total_matches);
            for (i, card) in cards.iter().enumerate() {
                println!();
                display::print_card(i + 1, card, query);
            }
        }
    }
}

fn run_inspect(data: &Path) -> Result<()> {
    let documents = load_corpus(data)
        .with_context(|| format!("failed to load corpus {}", data.display()))?;
    let stats = CorpusStats::collect(&documents);
    display::print_stats(&data.display().to_string(), &stats);
    Ok(())
}
