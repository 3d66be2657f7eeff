use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use textdex_core::{Engine, HighlightMode, ReindexMode, SearchOptions, MAX_RESULTS};
use tracing_subscriber::{fmt, EnvFilter};

use std::fs;

#[derive(Parser)]
#[command(name = "indexer")]
#[command(about = "Index a blank-line separated corpus and query it", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print highlighted documents matching the query
    Search(QueryArgs),
    /// Print the raw postings for each query term as JSON
    Lookup(QueryArgs),
}

#[derive(Args)]
struct QueryArgs {
    /// Corpus text file; documents are separated by blank lines
    #[arg(long)]
    input: String,
    /// Space-separated query terms
    #[arg(long)]
    query: String,
    /// Maximum number of results to print
    #[arg(long, default_value_t = MAX_RESULTS)]
    max_results: usize,
    /// How matches are marked: substring or token
    #[arg(long, default_value = "substring")]
    highlight: HighlightMode,
    /// Behaviour for repeated document ids: append or replace
    #[arg(long, default_value = "append")]
    reindex: ReindexMode,
    /// Lowercase the query before lookup
    #[arg(long, default_value_t = false)]
    lowercase_query: bool,
}

impl QueryArgs {
    fn options(&self) -> SearchOptions {
        SearchOptions {
            max_results: self.max_results,
            highlight: self.highlight,
            reindex: self.reindex,
            lowercase_query: self.lowercase_query,
        }
    }
}

fn main() -> Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Search(args) => {
            let engine = load_engine(&args)?;
            for line in engine.search(&args.query) {
                println!("{line}");
            }
        }
        Commands::Lookup(args) => {
            let engine = load_engine(&args)?;
            let result = engine.lookup_query(&args.query);
            println!("{}", serde_json::to_string_pretty(&result)?);
        }
    }
    Ok(())
}

fn load_engine(args: &QueryArgs) -> Result<Engine> {
    let raw = fs::read_to_string(&args.input).with_context(|| format!("reading {}", args.input))?;
    let mut engine = Engine::new(args.options());
    let num_docs = engine.ingest_corpus(&raw)?;
    tracing::info!(input = %args.input, num_docs, "corpus loaded");
    Ok(engine)
}
