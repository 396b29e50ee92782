//! docpad CLI - documentation viewer and editor.
//!
//! Provides commands for:
//! - `serve`: Start the viewer in the browser
//! - `fetch`: Fetch a documentation document into storage
//! - `export`: Write the stored documentation to `documentation.json`
//! - `pages`: List the stored pages

mod commands;
mod error;
mod output;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{CommonArgs, ExportArgs, FetchArgs, PagesArgs, ServeArgs};
use output::Output;

/// Application version from Cargo.toml.
const VERSION: &str = env!("CARGO_PKG_VERSION");

/// docpad - documentation viewer and editor.
#[derive(Parser, Debug)]
#[command(name = "docpad", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Start the viewer server.
    Serve(ServeArgs),
    /// Fetch documentation from a URL and store it.
    Fetch(FetchArgs),
    /// Export the stored documentation as JSON.
    Export(ExportArgs),
    /// List the stored pages.
    Pages(PagesArgs),
}

impl Commands {
    fn common(&self) -> &CommonArgs {
        match self {
            Self::Serve(args) => &args.common,
            Self::Fetch(args) => &args.common,
            Self::Export(args) => &args.common,
            Self::Pages(args) => &args.common,
        }
    }
}

fn main() {
    let cli = Cli::parse();
    let output = Output::new();

    // --verbose enables INFO level, otherwise use RUST_LOG
    let filter = if cli.command.common().verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let result = match cli.command {
        Commands::Serve(args) => {
            let rt = tokio::runtime::Runtime::new().expect("Failed to create tokio runtime");
            rt.block_on(args.execute(VERSION))
        }
        Commands::Fetch(args) => args.execute(),
        Commands::Export(args) => args.execute(),
        Commands::Pages(args) => args.execute(),
    };

    if let Err(err) = result {
        output.error(&format!("Error: {err}"));
        std::process::exit(1);
    }
}
