//! Portfolio web server
//!
//! Serves the public portfolio pages and the admin panel used to edit them.
//!
//! # Configuration
//!
//! Environment variables:
//! - `PORTFOLIO_PORT`: Port to listen on (default: 3000)
//! - `PORTFOLIO_DATA_PATH`: JSON data file (default: ./data.json)
//! - `PORTFOLIO_SESSION_HOURS`: Admin session lifetime (default: 24)
//! - `PORTFOLIO_CONFIG`: Path to config file (default: ~/.config/portfolio/config.yaml)
//!
//! # Config File Format
//!
//! ```yaml
//! port: 3000
//! data_path: /srv/portfolio/data.json
//! session_hours: 24
//! ```

use clap::Parser;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use portfolio::config::Config;
use portfolio::db::DataStore;
use portfolio::server::{router, AppState};

#[derive(Parser)]
#[command(name = "portfolio-server")]
#[command(version)]
#[command(about = "Portfolio site and admin panel", long_about = None)]
struct Cli {
    /// Path to config file
    #[arg(long, short)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "portfolio=info,portfolio_server=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    if let Err(e) = run().await {
        tracing::error!("{}", e);
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Load configuration
    let config = Config::load(cli.config)?;

    let store = DataStore::new(&config.data_path);
    tracing::info!("Data file: {}", store.path().display());

    // Fail at startup on a corrupt data file rather than on the first request
    let doc = store.load()?;
    if doc.admin.username.is_empty() {
        tracing::warn!("No admin configured - run `portfolio-admin set-admin` to enable login");
    }

    let session_ttl = Duration::from_secs(config.session_hours * 60 * 60);
    let state = AppState::new(store, session_ttl);
    let app = router(state);

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("Server running on http://localhost:{}", config.port);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
