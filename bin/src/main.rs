//! cpc CLI - query nosdeputes.fr and nossenateurs.fr from the terminal.

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand};
use cpc_lib::prelude::*;
use std::path::PathBuf;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

mod commands;
mod display;

use display::Output;

#[derive(Parser)]
#[command(name = "cpc")]
#[command(about = "Client for the nosdeputes.fr and nossenateurs.fr APIs", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Parliament to query (depute, senateur)
    #[arg(
        short = 't',
        long = "type",
        env = "CPC_TYPE",
        default_value = "depute",
        global = true
    )]
    ptype: ParliamentType,

    /// Legislature term (current, 2007-2012, 2012-2017, 2017-2022)
    #[arg(
        short,
        long,
        env = "CPC_LEGISLATURE",
        default_value = "current",
        global = true
    )]
    legislature: Legislature,

    /// Override the API host (e.g. a local mirror)
    #[arg(long, env = "CPC_BASE_URL", global = true)]
    base_url: Option<String>,

    /// Request timeout in seconds
    #[arg(long, default_value = "30", global = true)]
    timeout: u64,

    /// Print JSON instead of tables
    #[arg(long, global = true)]
    json: bool,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Quiet mode (suppress progress output)
    #[arg(short, long, global = true)]
    quiet: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// List parliamentarians
    List {
        /// Only sitting members
        #[arg(short, long)]
        active: bool,
    },

    /// Fuzzy search parliamentarians by name
    Search {
        /// Name fragment, accents optional
        name: String,

        /// Field to match against (nom, nom_de_famille, slug, ...)
        #[arg(short, long, default_value = "nom")]
        field: String,

        /// Maximum number of matches
        #[arg(short = 'n', long, default_value = "5")]
        limit: usize,

        /// Only sitting members
        #[arg(short, long)]
        active: bool,
    },

    /// Show a parliamentarian's record
    Show {
        /// Slug (e.g. jean-luc-melenchon), or a name to search for
        slug: String,
    },

    /// Show the votes of one or more parliamentarians
    Votes {
        /// Slugs of the parliamentarians
        #[arg(required = true)]
        slugs: Vec<String>,

        /// Maximum concurrent requests
        #[arg(long, default_value = "4")]
        concurrency: usize,
    },

    /// Show the activity synthesis
    Synthese {
        /// Month (YYYYMM). Defaults to the whole legislature.
        #[arg(short, long)]
        month: Option<SyntheseMonth>,
    },

    /// Download a portrait as PNG
    Picture {
        /// Slug of the parliamentarian
        slug: String,

        /// Height of the square portrait in pixels
        #[arg(short, long, default_value = "400")]
        pixels: u32,

        /// Output file path. Defaults to <slug>.png
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Full-text search across the site
    Find {
        /// Query text
        query: String,

        /// Result page, starting at 1
        #[arg(short, long, default_value = "1")]
        page: u32,
    },
}

impl Cli {
    fn client(&self) -> Result<CpcApi> {
        let mut config = ClientConfig::new(self.ptype, self.legislature)
            .context("Invalid parliament selection")?
            .with_timeout(Duration::from_secs(self.timeout));
        if let Some(base_url) = &self.base_url {
            config = config.with_base_url(base_url)?;
        }
        CpcApi::new(config).context("Failed to create HTTP client")
    }
}

fn init_tracing(verbose: u8, quiet: bool) {
    let level = match (quiet, verbose) {
        (true, _) => "error",
        (false, 0) => "warn",
        (false, 1) => "info",
        (false, 2) => "debug",
        (false, _) => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose, cli.quiet);

    // Show help if no command provided
    let Some(command) = &cli.command else {
        Cli::command().print_help()?;
        return Ok(());
    };

    let api = cli.client()?;
    let output = Output::from_json_flag(cli.json);

    match command {
        Commands::List { active } => commands::list::list(&api, *active, output).await,
        Commands::Search {
            name,
            field,
            limit,
            active,
        } => {
            let query = SearchQuery::new(name.as_str())
                .field(field.as_str())
                .limit(*limit)
                .active_only(*active);
            commands::search::search(&api, &query, output).await
        }
        Commands::Show { slug } => commands::show::show(&api, slug, output).await,
        Commands::Votes { slugs, concurrency } => {
            commands::votes::votes(&api, slugs, *concurrency, output, cli.quiet).await
        }
        Commands::Synthese { month } => commands::synthese::synthese(&api, *month, output).await,
        Commands::Picture {
            slug,
            pixels,
            output: path,
        } => commands::picture::picture(&api, slug, *pixels, path.clone()).await,
        Commands::Find { query, page } => commands::find::find(&api, query, *page, output).await,
    }
}
