//! argo-cron - command-line interface for Argo cron workflows.

mod commands;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use commands::ConnectionArgs;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Manage cron workflows on an Argo Workflows server.
#[derive(Parser)]
#[command(name = "argo-cron")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(flatten)]
    connection: ConnectionArgs,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a cron workflow from a YAML or JSON manifest
    Create {
        /// Path to the manifest
        #[arg(short, long)]
        file: String,
    },

    /// Delete a cron workflow
    Delete {
        /// Cron workflow name
        name: String,
    },

    /// Suspend a cron workflow
    Suspend {
        /// Cron workflow name
        name: String,
    },

    /// Resume a suspended cron workflow
    Resume {
        /// Cron workflow name
        name: String,
    },

    /// Show a cron workflow as YAML
    Get {
        /// Cron workflow name
        name: String,
    },

    /// List cron workflows in the namespace
    List {
        /// Label selector (e.g. "team=data")
        #[arg(short = 'l', long)]
        selector: Option<String>,
    },

    /// Print the web UI link for a cron workflow
    Link {
        /// Cron workflow name
        name: String,
    },
}

fn setup_logging(verbosity: u8) -> Result<()> {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    // RUST_LOG wins over -v flags
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    if std::io::IsTerminal::is_terminal(&std::io::stderr()) {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().pretty().with_writer(std::io::stderr))
            .try_init()
            .context("Failed to initialize tracing subscriber")?;
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().compact().with_writer(std::io::stderr))
            .try_init()
            .context("Failed to initialize tracing subscriber")?;
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    setup_logging(cli.verbose)?;

    let conn = &cli.connection;
    match cli.command {
        Commands::Create { file } => commands::create::run(conn, &file).await,
        Commands::Delete { name } => commands::delete::run(conn, &name).await,
        Commands::Suspend { name } => commands::suspend::suspend(conn, &name).await,
        Commands::Resume { name } => commands::suspend::resume(conn, &name).await,
        Commands::Get { name } => commands::get::run(conn, &name).await,
        Commands::List { selector } => commands::list::run(conn, selector.as_deref()).await,
        Commands::Link { name } => commands::link::run(conn, &name),
    }
}
