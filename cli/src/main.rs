//! Storefront product discovery from the terminal.
//!
//! Reads one command per line from stdin and drives a single listing
//! surface: filters, debounced suggestions and product fetches.

use clap::Parser;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;
use storefront_cli::api::FixtureProducts;
use storefront_cli::command::Command;
use storefront_cli::error::CliError;
use storefront_cli::session::{DiscoverySession, Step, describe_status};
use storefront_core::{AppConfig, Product, QueryParams};
use storefront_request::{RequestState, RequestStatus, TracingSink};
use storefront_search::{CatalogIndex, SuggestConfig, SuggestionEngine, SuggestionPanel};
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::watch;
use tracing::{info, warn};
use url::Url;

#[derive(Parser, Debug)]
#[command(name = "storefront")]
#[command(about = "Browse a product catalog with live suggestions and filters")]
struct Args {
    /// Config file (TOML)
    #[arg(short, long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Catalog file: a JSON array of products
    #[arg(long, value_name = "PATH")]
    catalog: PathBuf,

    /// Initial query string, as found in a shared link
    #[arg(short, long, default_value = "")]
    query: String,

    /// Simulated products endpoint latency in milliseconds
    #[arg(long, default_value_t = 0)]
    latency_ms: u64,

    /// Verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let subscriber = tracing_subscriber::fmt()
        .with_max_level(if args.verbose {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        })
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    let config = load_config(args.config.as_deref())?;
    let api = FixtureProducts::load(&args.catalog, Duration::from_millis(args.latency_ms))?;
    let index = CatalogIndex::from_products(api.products());
    let base_url = Url::parse(&config.api.base_url).map_err(CliError::from)?;
    info!(products = index.len(), base_url = %base_url, "catalog ready");

    let mut session = DiscoverySession::mount(
        Arc::new(api),
        base_url,
        &QueryParams::parse(&args.query),
        SuggestionEngine::new(SuggestConfig::from(&config.search)),
        index,
        Arc::new(TracingSink),
    );
    tokio::spawn(print_results(session.subscribe_results()));
    tokio::spawn(print_suggestions(session.subscribe_suggestions()));
    session.refresh();

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        if line.trim().is_empty() {
            continue;
        }
        match Command::parse(&line) {
            Ok(command) => match session.apply(command) {
                Step::Continue => {}
                Step::Print(text) => println!("{text}"),
                Step::Quit => break,
            },
            Err(err) => eprintln!("{err} (try `help`)"),
        }
    }

    Ok(())
}

fn load_config(path: Option<&Path>) -> Result<AppConfig, CliError> {
    let Some(path) = path else {
        return Ok(AppConfig::default());
    };
    let config = AppConfig::load(path)?;
    let errors = config.validate();
    if errors.is_empty() {
        return Ok(config);
    }
    for error in &errors {
        warn!(path = %path.display(), "{error}");
    }
    Ok(config.with_defaults_for_invalid())
}

async fn print_results(mut rx: watch::Receiver<RequestState<Vec<Product>>>) {
    while rx.changed().await.is_ok() {
        let state = rx.borrow_and_update().clone();
        match state.status {
            RequestStatus::Success => {
                let products = state.data.unwrap_or_default();
                println!("{} products", products.len());
                for product in products {
                    println!("  #{} {} ({}) {:.2}", product.id, product.name, product.category, product.price);
                }
            }
            RequestStatus::Idle | RequestStatus::Loading | RequestStatus::Error => {
                println!("request: {}", describe_status(&state));
            }
        }
    }
}

async fn print_suggestions(mut rx: watch::Receiver<SuggestionPanel>) {
    while rx.changed().await.is_ok() {
        let panel = rx.borrow_and_update().clone();
        match panel {
            SuggestionPanel::Hidden => {}
            SuggestionPanel::NoMatches => println!("suggestions: no matches"),
            SuggestionPanel::Matches(entries) => {
                println!("suggestions:");
                for entry in entries {
                    println!("  {} [{}]", entry.name, entry.category);
                }
            }
        }
    }
}
