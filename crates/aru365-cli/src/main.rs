mod check;
mod pages;
mod viator;

use std::sync::Arc;

use aru365_core::{load_catalog, load_snapshot, AffiliateLinks, AppConfig};
use aru365_resolve::{marketplace_from_config, Resolver};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use crate::viator::ViatorCommands;

#[derive(Debug, Parser)]
#[command(name = "aru365")]
#[command(about = "Aru365 tours data command line interface")]
struct Cli {
    /// Ignore VIATOR_API_KEY and resolve from the snapshot only
    #[arg(long, global = true)]
    offline: bool,

    /// Print resolved pages as JSON instead of a summary
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Resolve a category (pillar) page
    Pillar {
        /// Category slug, e.g. catamaran-cruises-in-aruba
        slug: String,
    },
    /// Resolve a guide or listing page
    Page { category: String, slug: String },
    /// List every statically generated page path
    Paths,
    /// Validate the editorial and snapshot data files
    Check,
    /// Inspect raw Viator Partner API responses
    Viator {
        #[command(subcommand)]
        command: ViatorCommands,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let Some(command) = cli.command else {
        println!("aru365: no command given; see --help");
        return Ok(());
    };

    let config = aru365_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    match command {
        Commands::Pillar { slug } => {
            let resolver = build_resolver(&config, cli.offline)?;
            pages::run_pillar(&resolver, &slug, cli.json).await
        }
        Commands::Page { category, slug } => {
            let resolver = build_resolver(&config, cli.offline)?;
            pages::run_page(&resolver, &category, &slug, cli.json).await
        }
        Commands::Paths => {
            let catalog = load_catalog(&config.catalog_path)?;
            pages::run_paths(&catalog);
            Ok(())
        }
        Commands::Check => check::run_check(&config),
        Commands::Viator { command } => viator::run_viator(&config, command).await,
    }
}

fn build_resolver(config: &AppConfig, offline: bool) -> anyhow::Result<Resolver> {
    let links = AffiliateLinks::from_app_config(config);
    let catalog = load_catalog(&config.catalog_path)?;
    let snapshot = load_snapshot(&config.snapshot_path, links.clone())?;
    let marketplace = marketplace_from_config(config, offline)?;
    Ok(Resolver::new(
        Arc::new(catalog),
        Arc::new(snapshot),
        links,
        marketplace,
        &config.site_url,
    ))
}
