//! Bet type configuration repository.

use crate::bet_type::BetType;
use crate::db::{self, DbPool};
use crate::error::Result;
use crate::models::BetTypeConfig;
use rusqlite::Row;

/// Repository for bet type multiplier configurations.
pub struct BetTypeConfigRepo {
    db: DbPool,
}

impl BetTypeConfigRepo {
    /// Create a new bet type config repository with the given database pool.
    pub fn new(db: DbPool) -> Self {
        Self { db }
    }

    /// List active configs, ordered by bet type name (ascending).
    pub fn list_active(&self) -> Result<Vec<BetTypeConfig>> {
        let conn = db::lock(&self.db)?;
        let mut stmt = conn.prepare(
            "SELECT id, bet_type, base_multiplier, description, is_active, created_at, updated_at
             FROM bet_type_configs
             WHERE is_active = 1
             ORDER BY bet_type ASC",
        )?;

        let configs = stmt
            .query_map([], Self::map_row)?
            .collect::<rusqlite::Result<Vec<_>>>()?;

        Ok(configs)
    }

    /// Ensure a config exists for `bet_type`.
    ///
    /// Creates it active if absent; an existing config keeps its stored
    /// multiplier and description.
    pub fn ensure(
        &self,
        bet_type: BetType,
        base_multiplier: f64,
        description: &str,
    ) -> Result<BetTypeConfig> {
        let mut conn = db::lock(&self.db)?;
        let tx = conn.transaction()?;
        let now = super::now();

        tx.execute(
            "INSERT INTO bet_type_configs
                (id, bet_type, base_multiplier, description, is_active, created_at, updated_at)
             VALUES (?1, ?2, ?3, ?4, 1, ?5, ?5)
             ON CONFLICT(bet_type) DO NOTHING",
            (super::new_id(), bet_type, base_multiplier, description, &now),
        )?;
        let config = tx.query_row(
            "SELECT id, bet_type, base_multiplier, description, is_active, created_at, updated_at
             FROM bet_type_configs WHERE bet_type = ?1",
            [bet_type],
            Self::map_row,
        )?;

        tx.commit()?;
        Ok(config)
    }

    fn map_row(row: &Row<'_>) -> rusqlite::Result<BetTypeConfig> {
        Ok(BetTypeConfig {
            id: row.get(0)?,
            bet_type: row.get(1)?,
            base_multiplier: row.get(2)?,
            description: row.get(3)?,
            is_active: row.get(4)?,
            created_at: row.get(5)?,
            updated_at: row.get(6)?,
        })
    }
}
