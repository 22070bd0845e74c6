//! Store error type.

use thiserror::Error;

/// Errors raised while reading or writing the lobby store.
#[derive(Error, Debug)]
pub enum Error {
    /// The underlying SQLite call failed (connectivity, constraint, query).
    #[error("database error: {0}")]
    Sqlite(#[from] rusqlite::Error),
    /// A previous holder of the connection panicked while holding the lock.
    #[error("database connection lock poisoned")]
    LockPoisoned,
    /// A bet type name outside the closed set.
    #[error("unknown bet type: {0}")]
    UnknownBetType(String),
}

/// Result alias used throughout the store.
pub type Result<T> = std::result::Result<T, Error>;
