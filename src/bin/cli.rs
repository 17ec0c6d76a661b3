//! Voyager CLI - people search and profile lookup.
//!
//! Usage:
//!   voyager search <keywords> --network F --network O
//!   voyager profile <public-id>
//!   voyager resolve payload.json --id jane-doe   # offline
//!   voyager encode <keywords>                    # print the request URL
//!
//! Credentials come from `--config` and/or LI_AT_COOKIE, CSRF_TOKEN,
//! JSESSIONID_TOKEN. Logs go to stderr (RUST_LOG), JSON to stdout.

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use serde::Serialize;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use voyager::{
    resolve_profile, resolve_profile_auto, resolve_search, Client, Config, Payload, SearchArgs,
};

#[derive(Parser)]
#[command(name = "voyager")]
#[command(about = "Voyager - normalized social-graph API client", long_about = None)]
struct Cli {
    /// TOML config file (credentials, headers, query ids)
    #[arg(short, long)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct SearchOpts {
    /// Free-text keywords
    keywords: String,

    /// Network degree filter (F, S, O). Repeatable.
    #[arg(short, long)]
    network: Vec<String>,

    /// Result offset
    #[arg(long)]
    start: Option<u32>,

    /// Page size
    #[arg(long)]
    count: Option<u32>,
}

impl SearchOpts {
    fn to_args(&self) -> SearchArgs {
        let mut args = SearchArgs::new(self.keywords.as_str()).network(self.network.iter().cloned());
        if let Some(start) = self.start {
            args = args.start(start);
        }
        if let Some(count) = self.count {
            args = args.count(count);
        }
        args
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Search people and print every resolved hit
    Search(SearchOpts),

    /// Fetch one profile by public identifier
    Profile {
        /// Public identifier (the part after /in/)
        public_id: String,
    },

    /// Resolve a saved response without touching the network
    Resolve {
        /// Path to a normalized JSON response
        file: PathBuf,

        /// Public identifier to anchor on (default: first profile found)
        #[arg(long)]
        id: Option<String>,

        /// Treat the file as a search response
        #[arg(long, conflicts_with = "id")]
        search: bool,
    },

    /// Print the search request URL
    Encode(SearchOpts),
}

fn main() {
    setup_tracing();
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn setup_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn load_config(path: Option<&PathBuf>) -> Result<Config> {
    let config = match path {
        Some(path) => Config::load(path)
            .with_context(|| format!("failed to load config from {}", path.display()))?,
        None => Config::default(),
    };
    Ok(config.with_env())
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn run(cli: Cli) -> Result<()> {
    let config = load_config(cli.config.as_ref())?;

    match cli.command {
        Commands::Search(opts) => {
            let client = Client::new(config)?;
            let page = client.search_profiles(&opts.to_args())?;
            print_json(&page)?;
        }

        Commands::Profile { public_id } => {
            let client = Client::new(config)?;
            let profile = client.get_profile(&public_id)?;
            print_json(&profile)?;
        }

        Commands::Resolve { file, id, search } => {
            let bytes = std::fs::read(&file)
                .with_context(|| format!("failed to read {}", file.display()))?;
            let payload = Payload::from_slice(&bytes)?;
            if search {
                print_json(&resolve_search(&payload)?)?;
            } else {
                let profile = match id {
                    Some(id) => resolve_profile(&payload, &id)?,
                    None => resolve_profile_auto(&payload)?,
                };
                print_json(&profile)?;
            }
        }

        Commands::Encode(opts) => {
            let client = Client::new(config)?;
            println!("{}", client.search_url(&opts.to_args())?);
        }
    }

    Ok(())
}
