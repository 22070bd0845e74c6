//! Store handle for the lobby reference data.

use crate::bet_type::BetType;
use crate::error::{Error, Result};
use rusqlite::Connection;
use std::path::Path;
use std::sync::{Arc, Mutex, MutexGuard};

/// Shared handle to the single SQLite connection.
///
/// Opened once per process with [`init_db`], cloned into whatever needs it,
/// and released with [`close`].
pub type DbPool = Arc<Mutex<Connection>>;

const SCHEMA: &str = "
    PRAGMA foreign_keys = ON;

    CREATE TABLE IF NOT EXISTS sports (
        id TEXT PRIMARY KEY,
        name TEXT NOT NULL,
        slug TEXT NOT NULL UNIQUE,
        is_active INTEGER NOT NULL DEFAULT 1,
        created_at TEXT NOT NULL DEFAULT (strftime('%Y-%m-%dT%H:%M:%fZ', 'now')),
        updated_at TEXT NOT NULL DEFAULT (strftime('%Y-%m-%dT%H:%M:%fZ', 'now'))
    );

    CREATE TABLE IF NOT EXISTS leagues (
        id TEXT PRIMARY KEY,
        sport_id TEXT NOT NULL REFERENCES sports(id),
        name TEXT NOT NULL,
        slug TEXT NOT NULL UNIQUE,
        is_active INTEGER NOT NULL DEFAULT 1,
        created_at TEXT NOT NULL DEFAULT (strftime('%Y-%m-%dT%H:%M:%fZ', 'now')),
        updated_at TEXT NOT NULL DEFAULT (strftime('%Y-%m-%dT%H:%M:%fZ', 'now'))
    );

    CREATE TABLE IF NOT EXISTS chat_rooms (
        id TEXT PRIMARY KEY,
        league_id TEXT NOT NULL REFERENCES leagues(id),
        name TEXT NOT NULL,
        slug TEXT NOT NULL UNIQUE,
        is_active INTEGER NOT NULL DEFAULT 1,
        created_at TEXT NOT NULL DEFAULT (strftime('%Y-%m-%dT%H:%M:%fZ', 'now')),
        updated_at TEXT NOT NULL DEFAULT (strftime('%Y-%m-%dT%H:%M:%fZ', 'now'))
    );

    CREATE INDEX IF NOT EXISTS idx_leagues_sport ON leagues(sport_id);
    CREATE INDEX IF NOT EXISTS idx_chat_rooms_league ON chat_rooms(league_id);
";

/// Full schema, with `bet_type` limited to the names in [`BetType::ALL`].
fn schema() -> String {
    let bet_types = BetType::ALL
        .iter()
        .map(|bet_type| format!("'{}'", bet_type.as_str()))
        .collect::<Vec<_>>()
        .join(", ");

    format!(
        "{SCHEMA}
    CREATE TABLE IF NOT EXISTS bet_type_configs (
        id TEXT PRIMARY KEY,
        bet_type TEXT NOT NULL UNIQUE CHECK (bet_type IN ({bet_types})),
        base_multiplier REAL NOT NULL CHECK (base_multiplier > 0),
        description TEXT NOT NULL,
        is_active INTEGER NOT NULL DEFAULT 1,
        created_at TEXT NOT NULL DEFAULT (strftime('%Y-%m-%dT%H:%M:%fZ', 'now')),
        updated_at TEXT NOT NULL DEFAULT (strftime('%Y-%m-%dT%H:%M:%fZ', 'now'))
    );
"
    )
}

/// Open the database at `path` and create the schema if needed.
///
/// Tables:
/// - `sports`: top-level sports
/// - `leagues`: leagues, each owned by a sport
/// - `chat_rooms`: chat rooms, each attached to a league
/// - `bet_type_configs`: payout multiplier per bet type
///
/// Use `:memory:` for an in-memory database.
///
/// # Errors
///
/// Returns an error if the database cannot be opened or schema creation fails.
pub fn init_db<P: AsRef<Path>>(path: P) -> Result<DbPool> {
    let conn = Connection::open(path)?;
    conn.execute_batch(&schema())?;
    Ok(Arc::new(Mutex::new(conn)))
}

/// Lock the shared connection, mapping a poisoned lock to [`Error::LockPoisoned`].
pub fn lock(db: &DbPool) -> Result<MutexGuard<'_, Connection>> {
    db.lock().map_err(|_| Error::LockPoisoned)
}

/// Release the store handle.
///
/// Closes the connection when this is the last handle. If other clones are
/// still alive the connection stays open until the last one is dropped.
pub fn close(db: DbPool) -> Result<()> {
    match Arc::try_unwrap(db) {
        Ok(mutex) => {
            let conn = mutex.into_inner().map_err(|_| Error::LockPoisoned)?;
            conn.close().map_err(|(_, e)| Error::Sqlite(e))
        }
        Err(_) => {
            tracing::debug!("Store handle still shared, deferring close");
            Ok(())
        }
    }
}
