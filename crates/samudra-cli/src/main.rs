mod catalog;
mod gallery;
mod quote;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use crate::catalog::CatalogCommands;

#[derive(Debug, Parser)]
#[command(name = "samudra-cli")]
#[command(about = "Samudra workshop catalog command line interface")]
struct Cli {
    /// Catalog file to use instead of `SAMUDRA_CATALOG_PATH`
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Validate or browse the product catalog
    Catalog {
        #[command(subcommand)]
        command: CatalogCommands,
    },
    /// Price a product size, including delivery
    Quote {
        /// Product id (e.g. dolomite-meditation-buddha)
        #[arg(long)]
        product: String,
        /// Size label exactly as listed (e.g. "3 ft")
        #[arg(long)]
        size: String,
        /// Pay 50% now and the rest on delivery
        #[arg(long)]
        advance: bool,
    },
    /// Show one page of the gallery
    Gallery {
        #[arg(long, default_value = "1")]
        page: usize,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    dotenvy::dotenv().ok();
    let config = samudra_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let catalog_path = cli.catalog.unwrap_or_else(|| config.catalog_path.clone());

    match cli.command {
        Some(Commands::Catalog { command }) => catalog::run(&catalog_path, command),
        Some(Commands::Quote {
            product,
            size,
            advance,
        }) => quote::run_quote(&catalog_path, &product, &size, advance),
        Some(Commands::Gallery { page }) => {
            gallery::run_gallery(&catalog_path, page, config.gallery_page_size)
        }
        None => {
            println!("samudra-cli ready; see --help for commands");
            Ok(())
        }
    }
}
