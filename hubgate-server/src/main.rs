//! Hubgate server binary
//!
//! Loads the GitHub credential, builds the router, and serves until
//! interrupted. A missing credential aborts startup before the listener
//! binds.

use std::sync::Arc;

use clap::Parser;
use hubgate_github::GitHubClient;
use hubgate_server::routes::build_router;
use hubgate_server::AppState;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Thin HTTP gateway exposing GitHub repository operations
#[derive(Parser, Debug)]
#[command(name = "hubgate")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Address to listen on
    #[arg(long, env = "HUBGATE_BIND", default_value = "0.0.0.0:8080")]
    bind: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    let client = GitHubClient::from_env()?;
    let state = AppState::new(Arc::new(client));

    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(&cli.bind).await?;
    tracing::info!(addr = %cli.bind, "hubgate listening");
    axum::serve(listener, app).await?;

    Ok(())
}
