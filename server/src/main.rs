use anyhow::Result;
use clap::Parser;
use server::{build_app, ServerConfig};
use std::net::SocketAddr;
use textdex_core::{HighlightMode, ReindexMode, SearchOptions, MAX_RESULTS};
use tokio::net::TcpListener;
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser)]
struct Args {
    /// Host to bind
    #[arg(long, default_value = "0.0.0.0")]
    host: String,
    /// Port to bind
    #[arg(long, default_value_t = 8080)]
    port: u16,
    /// Maximum number of results per search
    #[arg(long, default_value_t = MAX_RESULTS)]
    max_results: usize,
    /// How matches are marked: substring or token
    #[arg(long, default_value = "substring")]
    highlight: HighlightMode,
    /// Behaviour for repeated document ids: append or replace
    #[arg(long, default_value = "append")]
    reindex: ReindexMode,
    /// Lowercase queries before lookup
    #[arg(long, default_value_t = false)]
    lowercase_query: bool,
    /// Clear the index before ingesting each upload
    #[arg(long, default_value_t = false)]
    reset_per_upload: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();
    let args = Args::parse();
    let options = SearchOptions {
        max_results: args.max_results,
        highlight: args.highlight,
        reindex: args.reindex,
        lowercase_query: args.lowercase_query,
    };
    let app = build_app(ServerConfig::from_env(options, args.reset_per_upload));

    let addr: SocketAddr = format!("{}:{}", args.host, args.port).parse()?;
    let listener = TcpListener::bind(addr).await?;
    tracing::info!(%addr, "server listening");
    axum::serve(listener, app).await?;
    Ok(())
}
