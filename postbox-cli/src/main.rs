//! postbox CLI: run the message-board HTTP server. Config from env and optional CLI args.

use anyhow::Result;
use clap::{Parser, Subcommand};
use postbox_server::{run_server, ServerConfig};
use tracing::info;

#[derive(Parser)]
#[command(name = "postbox")]
#[command(about = "Message board server", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the HTTP server (config from env; args override PORT and MESSAGES_DIR).
    Serve {
        #[arg(short, long)]
        port: Option<u16>,
        #[arg(long)]
        messages_dir: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()))
        .with_target(false)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Serve { port, messages_dir } => {
            let config = ServerConfig::load(port, messages_dir)?;
            info!(
                "Starting server on port {} (messages in {})",
                config.port, config.messages_dir
            );
            run_server(config).await
        }
    }
}
