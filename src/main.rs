use anyhow::Result;
use clap::{Parser, Subcommand};
use dit::cli::contact::ContactArgs;

/// dit - DIT corporate site and contact intake
#[derive(Parser)]
#[command(name = "dit")]
#[command(about = "DIT company site with Notion-backed contact intake", long_about = None)]
struct Cli {
    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve {
        /// Server host address (overrides config file)
        #[arg(long)]
        host: Option<String>,

        /// Server port (overrides config file)
        #[arg(long)]
        port: Option<u16>,
    },
    /// Submit a contact request to a running server
    Contact(ContactArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let config = dit::config::Config::load(cli.config.clone())?;
    config.validate().map_err(|e| anyhow::anyhow!(e))?;

    // Initialize tracing + logging
    dit::observability::init_observability(
        "dit",
        env!("CARGO_PKG_VERSION"),
        &config.observability.log_level,
    )?;

    match cli.command {
        Commands::Serve { host, port } => dit::cli::server::serve(config, host, port).await,
        Commands::Contact(args) => dit::cli::contact::submit(config, args).await,
    }
}
