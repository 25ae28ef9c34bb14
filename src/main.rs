//! docfind binary: serve the search UI.

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use docfind::config::{Config, Settings};
use docfind::server;

#[derive(Parser)]
#[command(name = "docfind", version, about = "Web front-end for a full-text document search service")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Start the web server.
    Serve {
        /// Address to bind.
        #[arg(long, env = "DOCFIND_HOST", default_value = "127.0.0.1")]
        host: String,
        /// Port to bind.
        #[arg(long, env = "DOCFIND_PORT", default_value_t = 8080)]
        port: u16,
        /// Search backend base URL.
        #[arg(long, env = "DOCFIND_BACKEND_URL")]
        backend_url: Option<String>,
        /// Path to a config file (default: ./docfind.toml when present).
        #[arg(long, env = "DOCFIND_CONFIG")]
        config: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("docfind=info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Serve {
            host,
            port,
            backend_url,
            config,
        } => {
            let config = Config::load(config.as_deref()).context("loading configuration")?;
            let mut settings = Settings::default();
            config.apply_to_settings(&mut settings)?;
            if let Some(ref url) = backend_url {
                settings.set_backend_url(url)?;
            }

            server::serve(&settings, &host, port).await
        }
    }
}
