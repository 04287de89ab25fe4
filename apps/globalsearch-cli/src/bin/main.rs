use std::io::{self, Read};
use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use globalsearch_core::config::{resolve_with_base, Config};
use globalsearch_core::data_loader::DataLoader;
use globalsearch_core::{DataBundle, SearchRequest, SearchResponse};
use globalsearch_engine::{combined, suggestions, SearchEngine};

#[derive(Parser)]
#[command(name = "globalsearch", about = "Ranked search over locations, accounts and the configuration menu")]
struct Cli {
    /// Log at debug level (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Search the loaded collections
    Query {
        query: String,
        /// Directory with locations.json / accounts.json (defaults to data.dir)
        #[arg(long, env = "GLOBALSEARCH_DATA_DIR")]
        data_dir: Option<PathBuf>,
        /// Results kept per category (defaults to search.max_results_per_category)
        #[arg(long)]
        limit: Option<usize>,
        /// Also print the merged, globally ranked list
        #[arg(long)]
        combined: bool,
        /// Print the response as JSON
        #[arg(long)]
        json: bool,
    },
    /// Read a JSON search request from stdin and print the JSON response
    Request {
        #[arg(long, env = "GLOBALSEARCH_DATA_DIR")]
        data_dir: Option<PathBuf>,
    },
    /// List example queries
    Suggest,
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt().with_env_filter(filter).with_writer(io::stderr).init();
}

fn load_bundle(config: &Config, data_dir: Option<PathBuf>) -> anyhow::Result<DataBundle> {
    let dir = match data_dir {
        Some(dir) => resolve_with_base(&std::env::current_dir()?, dir.to_string_lossy()),
        None => config.data_dir()?,
    };
    DataLoader::new().load_dir(&dir).with_context(|| format!("loading data from {}", dir.display()))
}

fn print_listing(response: &SearchResponse) {
    for (category, items) in response.results.iter() {
        println!("\n{} ({})", category, items.len());
        for (i, item) in items.iter().enumerate() {
            println!("  {}. [{:.2}] {} | {}  -> {}", i + 1, item.match_score, item.title, item.subtitle, item.navigation_path);
            println!("     matched: {}", item.matched_fields.join(", "));
        }
    }
    if let Some(merged) = &response.combined {
        println!("\nAll results ({})", merged.len());
        for (i, item) in merged.iter().enumerate() {
            println!("  {}. [{:.2}] {} ({})", i + 1, item.match_score, item.title, item.category);
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    let config = Config::load().context("loading configuration")?;
    let settings = config.settings()?;
    let engine = SearchEngine::new();

    match cli.command {
        Command::Query { query, data_dir, limit, combined: with_combined, json } => {
            let data = load_bundle(&config, data_dir)?;
            let limit = limit.unwrap_or(settings.search.max_results_per_category);
            let results = engine.search(&query, &data, limit)?;
            let merged = (with_combined || settings.search.include_combined).then(|| combined(&results));
            let response = SearchResponse { results, combined: merged };
            if json {
                println!("{}", serde_json::to_string_pretty(&response)?);
            } else {
                println!("Query: {query}");
                print_listing(&response);
            }
        }
        Command::Request { data_dir } => {
            let mut input = String::new();
            io::stdin().read_to_string(&mut input).context("reading request from stdin")?;
            let request: SearchRequest = serde_json::from_str(&input).context("parsing search request")?;
            let data = match request.data {
                Some(inline) => inline,
                None => load_bundle(&config, data_dir)?,
            };
            let response = engine.search_combined(&request.query, &data, request.limits.per_category)?;
            println!("{}", serde_json::to_string(&response)?);
        }
        Command::Suggest => {
            for s in suggestions() {
                println!("{s}");
            }
        }
    }
    Ok(())
}
