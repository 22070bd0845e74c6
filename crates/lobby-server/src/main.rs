//! Lobby Server
//!
//! Serves the read-only lobby reference data API:
//! - `GET /api/sports`
//! - `GET /api/leagues`
//! - `GET /api/chat-rooms`
//! - `GET /api/bet-type-configs`

use anyhow::Context;
use clap::Parser;
use lobby_db::config::LobbyConfig;
use lobby_db::db;
use lobby_server::AppState;
use std::path::PathBuf;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

/// Lobby Server - Read-only API over the lobby reference data.
#[derive(Parser)]
#[command(name = "lobby-server")]
#[command(about = "Serves sports, leagues, chat rooms and bet type configs")]
struct Args {
    /// Path to the TOML configuration file
    #[arg(long, default_value_os_t = LobbyConfig::config_path())]
    config: PathBuf,

    /// Path to SQLite database (overrides the config file)
    #[arg(long)]
    db: Option<PathBuf>,

    /// Port to listen on (overrides the config file)
    #[arg(long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
    let args = Args::parse();

    let mut config = LobbyConfig::load_from(&args.config)
        .with_context(|| format!("Failed to load {}", args.config.display()))?;
    if let Some(db) = args.db {
        config.database_path = db;
    }
    if let Some(port) = args.port {
        config.server.port = port;
    }

    if let Some(dir) = config.database_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create {}", dir.display()))?;
    }
    tracing::info!("Database: {:?}", config.database_path);
    let db = db::init_db(&config.database_path).context("Failed to initialize database")?;

    let state = AppState::new(db, Duration::from_millis(config.server.slow_request_ms));
    let app = lobby_server::router(state);

    let (host, port) = (config.server.host.as_str(), config.server.port);
    let listener = lobby_server::bind(host, port)
        .await
        .with_context(|| format!("Failed to bind to {}:{}", host, port))?;
    tracing::info!("Server running on http://{}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    tracing::info!("Server shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for ctrl+c: {}", e);
        // Without a signal handler, keep serving until the process is killed.
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_args_defaults() {
        let args = Args::try_parse_from(["lobby-server"]).unwrap();
        assert_eq!(args.config, PathBuf::from("lobby.toml"));
        assert!(args.db.is_none());
        assert!(args.port.is_none());
    }

    #[test]
    fn test_args_overrides() {
        let args =
            Args::try_parse_from(["lobby-server", "--db", "/tmp/x.db", "--port", "8080"]).unwrap();
        assert_eq!(args.db, Some(PathBuf::from("/tmp/x.db")));
        assert_eq!(args.port, Some(8080));
    }
}
