//! NeighborVille - Development Tools

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use ville_core::catalog::Catalog;

#[derive(Parser)]
#[command(name = "ville-tools")]
#[command(about = "Development tools for NeighborVille")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate catalog data files
    Validate {
        /// Path to data directory
        #[arg(default_value = "data")]
        path: String,
    },
    /// Export the built-in catalog as data files
    Export {
        /// Path to data directory
        #[arg(default_value = "data")]
        path: String,
    },
}

fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Validate { path } => {
            tracing::info!("Validating data files in: {path}");
            match ville_tools::validate::validate_data_directory(std::path::Path::new(&path)) {
                Ok(()) => tracing::info!("Validation passed"),
                Err(e) => {
                    tracing::error!("Validation failed: {e}");
                    std::process::exit(1);
                }
            }
        }
        Commands::Export { path } => {
            tracing::info!("Exporting built-in catalog to: {path}");
            if let Err(e) =
                ville_tools::export::export_catalog(&Catalog::default(), std::path::Path::new(&path))
            {
                tracing::error!("Export failed: {e}");
                std::process::exit(1);
            }
        }
    }
}
