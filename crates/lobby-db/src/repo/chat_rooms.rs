//! Chat room repository.

use crate::db::{self, DbPool};
use crate::error::Result;
use crate::models::{ChatRoom, ChatRoomLeague, ChatRoomWithLeague, SportName};
use rusqlite::Row;

/// Repository for chat room database operations.
pub struct ChatRoomRepo {
    db: DbPool,
}

impl ChatRoomRepo {
    /// Create a new chat room repository with the given database pool.
    pub fn new(db: DbPool) -> Self {
        Self { db }
    }

    /// List active chat rooms with their league and the league's sport.
    ///
    /// Inactive rooms are excluded. Ordered by room name (ascending).
    pub fn list_active(&self) -> Result<Vec<ChatRoomWithLeague>> {
        let conn = db::lock(&self.db)?;
        let mut stmt = conn.prepare(
            "SELECT c.id, c.league_id, c.name, c.slug, c.is_active, c.created_at, c.updated_at,
                    l.name, l.slug, s.name
             FROM chat_rooms c
             JOIN leagues l ON l.id = c.league_id
             JOIN sports s ON s.id = l.sport_id
             WHERE c.is_active = 1
             ORDER BY c.name ASC",
        )?;

        let rooms = stmt
            .query_map([], |row| {
                Ok(ChatRoomWithLeague {
                    chat_room: Self::map_row(row)?,
                    league: ChatRoomLeague {
                        name: row.get(7)?,
                        slug: row.get(8)?,
                        sport: SportName { name: row.get(9)? },
                    },
                })
            })?
            .collect::<rusqlite::Result<Vec<_>>>()?;

        Ok(rooms)
    }

    /// Ensure a chat room with `slug` exists under `league_id`.
    ///
    /// Creates it active if absent; an existing room is returned as stored.
    pub fn ensure(&self, league_id: &str, name: &str, slug: &str) -> Result<ChatRoom> {
        let mut conn = db::lock(&self.db)?;
        let tx = conn.transaction()?;
        let now = super::now();

        tx.execute(
            "INSERT INTO chat_rooms (id, league_id, name, slug, is_active, created_at, updated_at)
             VALUES (?1, ?2, ?3, ?4, 1, ?5, ?5)
             ON CONFLICT(slug) DO NOTHING",
            (super::new_id(), league_id, name, slug, &now),
        )?;
        let room = tx.query_row(
            "SELECT id, league_id, name, slug, is_active, created_at, updated_at
             FROM chat_rooms WHERE slug = ?1",
            [slug],
            Self::map_row,
        )?;

        tx.commit()?;
        Ok(room)
    }

    fn map_row(row: &Row<'_>) -> rusqlite::Result<ChatRoom> {
        Ok(ChatRoom {
            id: row.get(0)?,
            league_id: row.get(1)?,
            name: row.get(2)?,
            slug: row.get(3)?,
            is_active: row.get(4)?,
            created_at: row.get(5)?,
            updated_at: row.get(6)?,
        })
    }
}
