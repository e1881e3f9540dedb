//! dx CLI - documentation credential rewriting, navigation and search.
//!
//! Provides commands for:
//! - `dsn`: Parse a connection string and render placeholder markup
//! - `render`: Tag and render credential placeholders in an HTML file
//! - `projects`: List the account's projects
//! - `select`: Remember a project for rendering
//! - `search`: Query the federated search backend
//! - `browse`: Navigate in-page from one documentation page to another

mod commands;
mod error;
mod output;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{BrowseArgs, DsnArgs, ProjectsArgs, RenderArgs, SearchArgs, SelectArgs};
use output::Output;

/// dx - documentation credential rewriting, navigation and search.
#[derive(Parser)]
#[command(name = "dx", version, about)]
struct Cli {
    /// Path to configuration file (default: auto-discover dx.toml).
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Enable verbose output (info level logging).
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse a connection string.
    Dsn(DsnArgs),
    /// Render credential placeholders in an HTML file.
    Render(RenderArgs),
    /// List projects available for rendering.
    Projects(ProjectsArgs),
    /// Select the project used for rendering.
    Select(SelectArgs),
    /// Search the documentation sites.
    Search(SearchArgs),
    /// Navigate to a page the way in-page links do.
    Browse(BrowseArgs),
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
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config = cli.config.as_deref();
    let result = match cli.command {
        Commands::Dsn(args) => args.execute(),
        Commands::Render(args) => args.execute(config),
        Commands::Projects(args) => args.execute(config),
        Commands::Select(args) => args.execute(config),
        Commands::Search(args) => args.execute(config),
        Commands::Browse(args) => args.execute(config),
    };

    if let Err(err) = result {
        output.error(&format!("Error: {err}"));
        std::process::exit(1);
    }
}
