//! CLI commands implementation.
//!
//! This module contains the CLI parser and dispatches to command-specific modules.

mod pages;
mod resolve;
mod serve;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::config::{load_settings_with_options, LoadOptions};
use crate::pages::PageName;

#[derive(Parser)]
#[command(name = "quantheo")]
#[command(about = "Locate and embed pre-built science visualizations")]
#[command(version)]
pub struct Cli {
    /// Config file path (overrides auto-discovery)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Directory the app runs from (defaults to the executable's directory)
    #[arg(long, global = true)]
    app_dir: Option<PathBuf>,

    /// Project root (defaults to the parent of the app directory)
    #[arg(long, global = true)]
    project_root: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Check if verbose mode is enabled (for early logging setup).
pub fn is_verbose() -> bool {
    std::env::args().any(|arg| arg == "-v" || arg == "--verbose")
}

#[derive(Subcommand)]
enum Commands {
    /// Start the web viewer
    Serve {
        /// Address to bind: a port, a host, or host:port
        #[arg(short, long)]
        bind: Option<String>,
    },

    /// List known pages and their candidate paths
    Pages,

    /// Resolve a page and report where its asset was found
    Resolve {
        /// Page name
        page: String,
    },

    /// Write the rendered viewer page to stdout
    Render {
        /// Page name
        page: String,
    },
}

/// Run the CLI.
pub async fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let bind = match &cli.command {
        Commands::Serve { bind } => bind.clone(),
        _ => None,
    };

    let options = LoadOptions {
        config_path: cli.config,
        app_dir: cli.app_dir,
        project_root: cli.project_root,
        bind,
    };
    let settings = load_settings_with_options(options).await?;

    match cli.command {
        Commands::Serve { .. } => serve::cmd_serve(&settings).await,
        Commands::Pages => pages::cmd_pages(&settings),
        Commands::Resolve { page } => resolve::cmd_resolve(&settings, page.parse::<PageName>()?),
        Commands::Render { page } => resolve::cmd_render(&settings, page.parse::<PageName>()?),
    }
}
