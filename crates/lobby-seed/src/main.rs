//! Lobby Seed - Populates the lobby store with fixture data.
//!
//! Creates the basketball sport, the NBA league and its chat rooms, and one
//! multiplier config per bet type. Safe to run repeatedly: rows that already
//! exist are left untouched.

use anyhow::Context;
use clap::Parser;
use lobby_db::config::LobbyConfig;
use lobby_db::{db, seed};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// Lobby Seed - Populates the lobby store with fixture data.
#[derive(Parser)]
#[command(name = "lobby-seed")]
#[command(about = "Seeds sports, leagues, chat rooms and bet type configs")]
struct Args {
    /// Path to the TOML configuration file
    #[arg(long, default_value_os_t = LobbyConfig::config_path())]
    config: PathBuf,

    /// Path to SQLite database (overrides the config file)
    #[arg(long)]
    db: Option<PathBuf>,
}

fn main() -> anyhow::Result<ExitCode> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
    let args = Args::parse();

    let config = LobbyConfig::load_from(&args.config)
        .with_context(|| format!("Failed to load {}", args.config.display()))?;
    let database_path = args.db.unwrap_or(config.database_path);

    if let Some(dir) = database_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create {}", dir.display()))?;
    }
    tracing::info!("Database: {:?}", database_path);
    let db = db::init_db(&database_path).context("Failed to initialize database")?;

    let outcome = seed::run(&db);

    if let Err(e) = db::close(db) {
        tracing::warn!("Failed to close database: {}", e);
    }

    match outcome {
        Ok(report) => {
            println!("{}", report);
            Ok(ExitCode::SUCCESS)
        }
        Err(e) => {
            tracing::error!(error = ?e, "Error seeding database");
            Ok(ExitCode::FAILURE)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_args_defaults() {
        let args = Args::try_parse_from(["lobby-seed"]).unwrap();
        assert_eq!(args.config, PathBuf::from("lobby.toml"));
        assert!(args.db.is_none());
    }

    #[test]
    fn test_args_db_override() {
        let args = Args::try_parse_from(["lobby-seed", "--db", "seed.db"]).unwrap();
        assert_eq!(args.db, Some(PathBuf::from("seed.db")));
    }
}
