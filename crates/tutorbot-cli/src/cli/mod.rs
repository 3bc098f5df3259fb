//! CLI entry and dispatch.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use crate::config;

mod commands;

#[derive(Parser)]
#[command(name = "tutorbot")]
#[command(version = "0.1")]
#[command(about = "TutorBot conversation export and status tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Export a conversation transcript to a document-definition file
    Export {
        /// Conversation-data JSON file (default: stdin)
        #[arg(short, long, value_name = "FILE")]
        input: Option<PathBuf>,

        /// Directory to write into (default: config export_dir, then cwd)
        #[arg(short, long, value_name = "DIR")]
        output: Option<PathBuf>,

        /// Pretty-print the emitted document tree
        #[arg(long)]
        pretty: bool,
    },

    /// Check or watch backend health status
    Status {
        /// Status endpoint URL (overrides config)
        #[arg(long, value_name = "URL")]
        url: Option<String>,

        /// Keep polling until interrupted
        #[arg(long)]
        watch: bool,

        /// Seconds between polls (overrides config)
        #[arg(long, value_name = "SECS")]
        interval: Option<u64>,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(clap::Subcommand)]
enum ConfigCommands {
    /// Show the path to the config file
    Path,
    /// Initialize a default config file (if not present)
    Init,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    init_tracing();

    // one tokio runtime for everything
    let rt = tokio::runtime::Runtime::new().context("create tokio runtime")?;

    rt.block_on(async move { dispatch(cli).await })
}

/// Logs go to stderr so piped stdout stays clean.
fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

async fn dispatch(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Export {
            input,
            output,
            pretty,
        } => {
            let config = config::Config::load().context("load config")?;
            commands::export::run(input.as_deref(), output.as_deref(), pretty, &config)
        }

        Commands::Status {
            url,
            watch,
            interval,
        } => {
            let config = config::Config::load().context("load config")?;
            commands::status::run(url.as_deref(), watch, interval, &config).await
        }

        Commands::Config { command } => match command {
            ConfigCommands::Path => commands::config::path(),
            ConfigCommands::Init => commands::config::init(),
        },
    }
}
