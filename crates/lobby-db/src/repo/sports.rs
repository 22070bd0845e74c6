//! Sport repository.

use crate::db::{self, DbPool};
use crate::error::Result;
use crate::models::Sport;
use rusqlite::{Connection, Row};

/// Repository for sport database operations.
pub struct SportRepo {
    db: DbPool,
}

impl SportRepo {
    /// Create a new sport repository with the given database pool.
    pub fn new(db: DbPool) -> Self {
        Self { db }
    }

    /// List all sports, active or not, ordered by name (ascending).
    pub fn list(&self) -> Result<Vec<Sport>> {
        let conn = db::lock(&self.db)?;
        let mut stmt = conn.prepare(
            "SELECT id, name, slug, is_active, created_at, updated_at
             FROM sports ORDER BY name ASC",
        )?;

        let sports = stmt
            .query_map([], Self::map_row)?
            .collect::<rusqlite::Result<Vec<_>>>()?;

        Ok(sports)
    }

    /// Ensure a sport with `slug` exists.
    ///
    /// Creates it active with `name` if absent. An existing sport is returned
    /// as stored; `name` is not applied to it.
    pub fn ensure(&self, name: &str, slug: &str) -> Result<Sport> {
        let mut conn = db::lock(&self.db)?;
        let tx = conn.transaction()?;
        let now = super::now();

        tx.execute(
            "INSERT INTO sports (id, name, slug, is_active, created_at, updated_at)
             VALUES (?1, ?2, ?3, 1, ?4, ?4)
             ON CONFLICT(slug) DO NOTHING",
            (super::new_id(), name, slug, &now),
        )?;
        let sport = Self::select_by_slug(&tx, slug)?;

        tx.commit()?;
        Ok(sport)
    }

    fn select_by_slug(conn: &Connection, slug: &str) -> rusqlite::Result<Sport> {
        conn.query_row(
            "SELECT id, name, slug, is_active, created_at, updated_at
             FROM sports WHERE slug = ?1",
            [slug],
            Self::map_row,
        )
    }

    fn map_row(row: &Row<'_>) -> rusqlite::Result<Sport> {
        Ok(Sport {
            id: row.get(0)?,
            name: row.get(1)?,
            slug: row.get(2)?,
            is_active: row.get(3)?,
            created_at: row.get(4)?,
            updated_at: row.get(5)?,
        })
    }
}
