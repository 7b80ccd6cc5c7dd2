//! pagepush CLI - Confluence page publishing.
//!
//! Provides commands for:
//! - `publish`: Update pages from static HTML files listed in a manifest
//! - `render`: Render templates from YAML page data and update pages

mod commands;
mod error;
mod output;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{PublishArgs, RenderArgs};
use output::Output;

/// pagepush - publish generated HTML to Confluence pages.
#[derive(Parser)]
#[command(name = "pagepush", version, about)]
struct Cli {
    /// Enable verbose logging.
    #[arg(long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Publish static HTML files listed in a page manifest.
    Publish(PublishArgs),
    /// Render templates from YAML page data and publish the results.
    Render(RenderArgs),
}

fn main() {
    let cli = Cli::parse();
    let output = Output::new();

    // --verbose enables INFO level, otherwise use RUST_LOG or default to WARN
    let filter = if cli.verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let result = match cli.command {
        Commands::Publish(args) => args.execute(),
        Commands::Render(args) => args.execute(),
    };

    match result {
        Ok(summary) => {
            if summary.failed > 0 {
                std::process::exit(1);
            }
        }
        Err(err) => {
            output.error(&format!("Error: {err}"));
            std::process::exit(1);
        }
    }
}
