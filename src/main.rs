use std::path::PathBuf;

use anyhow::Result;
use clap::{ArgAction, Parser};
use tracing_subscriber::EnvFilter;

use wellfind::extract::extract_pages_from_file;
use wellfind::{SearchEngine, SearchOutcome};

/// Index a gas volume statement PDF and resolve queries against it.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// statement PDF to index
    #[arg(short, long)]
    file: PathBuf,

    /// query to resolve; repeat the flag to run several in sequence
    /// (identical repeats cycle through their matches)
    #[arg(short, long, action = ArgAction::Append)]
    query: Vec<String>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();

    let pages = extract_pages_from_file(&args.file)?;
    tracing::info!(file = %args.file.display(), pages = pages.len(), "extracted document");

    let mut engine = SearchEngine::new();
    let listing = engine.load(&pages);

    for item in &listing {
        println!("{}", item.label);
    }

    for raw in &args.query {
        match engine.search(raw) {
            SearchOutcome::Hit(hit) => println!(
                "{raw:?} -> page {} ({}) [match {} of {}]",
                hit.page_number,
                hit.entry.name_raw,
                hit.match_index + 1,
                hit.match_count
            ),
            SearchOutcome::NoMatch => println!("{raw:?} -> no match"),
        }
    }

    Ok(())
}
