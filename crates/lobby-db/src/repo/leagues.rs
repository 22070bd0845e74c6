//! League repository.

use crate::db::{self, DbPool};
use crate::error::Result;
use crate::models::{League, LeagueWithSport, SportSummary};
use rusqlite::Row;

/// Repository for league database operations.
pub struct LeagueRepo {
    db: DbPool,
}

impl LeagueRepo {
    /// Create a new league repository with the given database pool.
    pub fn new(db: DbPool) -> Self {
        Self { db }
    }

    /// List all leagues, active or not, with their sport's name and slug.
    ///
    /// Ordered by league name (ascending).
    pub fn list(&self) -> Result<Vec<LeagueWithSport>> {
        let conn = db::lock(&self.db)?;
        let mut stmt = conn.prepare(
            "SELECT l.id, l.sport_id, l.name, l.slug, l.is_active, l.created_at, l.updated_at,
                    s.name, s.slug
             FROM leagues l
             JOIN sports s ON s.id = l.sport_id
             ORDER BY l.name ASC",
        )?;

        let leagues = stmt
            .query_map([], |row| {
                Ok(LeagueWithSport {
                    league: Self::map_row(row)?,
                    sport: SportSummary {
                        name: row.get(7)?,
                        slug: row.get(8)?,
                    },
                })
            })?
            .collect::<rusqlite::Result<Vec<_>>>()?;

        Ok(leagues)
    }

    /// Ensure a league with `slug` exists under `sport_id`.
    ///
    /// Creates it active if absent; an existing league is returned as stored,
    /// even if it belongs to a different sport.
    ///
    /// # Errors
    ///
    /// Fails with a foreign key violation if the league is absent and
    /// `sport_id` does not name an existing sport.
    pub fn ensure(&self, sport_id: &str, name: &str, slug: &str) -> Result<League> {
        let mut conn = db::lock(&self.db)?;
        let tx = conn.transaction()?;
        let now = super::now();

        tx.execute(
            "INSERT INTO leagues (id, sport_id, name, slug, is_active, created_at, updated_at)
             VALUES (?1, ?2, ?3, ?4, 1, ?5, ?5)
             ON CONFLICT(slug) DO NOTHING",
            (super::new_id(), sport_id, name, slug, &now),
        )?;
        let league = tx.query_row(
            "SELECT id, sport_id, name, slug, is_active, created_at, updated_at
             FROM leagues WHERE slug = ?1",
            [slug],
            Self::map_row,
        )?;

        tx.commit()?;
        Ok(league)
    }

    fn map_row(row: &Row<'_>) -> rusqlite::Result<League> {
        Ok(League {
            id: row.get(0)?,
            sport_id: row.get(1)?,
            name: row.get(2)?,
            slug: row.get(3)?,
            is_active: row.get(4)?,
            created_at: row.get(5)?,
            updated_at: row.get(6)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::init_db;
    use crate::error::Error;
    use crate::repo::SportRepo;

    #[test]
    fn test_list_leagues_empty() {
        let db = init_db(":memory:").unwrap();
        let repo = LeagueRepo::new(db);
        assert!(repo.list().unwrap().is_empty());
    }

    #[test]
    fn test_ensure_league_references_sport() {
        let db = init_db(":memory:").unwrap();
        let sport = SportRepo::new(db.clone())
            .ensure("Basketball", "basketball")
            .unwrap();
        let repo = LeagueRepo::new(db);

        let league = repo.ensure(&sport.id, "NBA", "nba").unwrap();
        assert_eq!(league.sport_id, sport.id);
        assert!(league.is_active);

        let leagues = repo.list().unwrap();
        assert_eq!(leagues.len(), 1);
        assert_eq!(leagues[0].league, league);
        assert_eq!(leagues[0].sport.name, "Basketball");
        assert_eq!(leagues[0].sport.slug, "basketball");
    }

    #[test]
    fn test_ensure_with_missing_sport_fails() {
        let db = init_db(":memory:").unwrap();
        let repo = LeagueRepo::new(db);

        let result = repo.ensure("no-such-sport", "NBA", "nba");
        assert!(matches!(result, Err(Error::Sqlite(_))));
        assert!(repo.list().unwrap().is_empty());
    }

    #[test]
    fn test_ensure_existing_league_is_untouched() {
        let db = init_db(":memory:").unwrap();
        let sports = SportRepo::new(db.clone());
        let basketball = sports.ensure("Basketball", "basketball").unwrap();
        let hockey = sports.ensure("Hockey", "hockey").unwrap();
        let repo = LeagueRepo::new(db);

        let first = repo.ensure(&basketball.id, "NBA", "nba").unwrap();
        let second = repo.ensure(&hockey.id, "Renamed", "nba").unwrap();

        assert_eq!(second, first);
        assert_eq!(second.sport_id, basketball.id);
    }

    #[test]
    fn test_list_leagues_ordered_by_name_including_inactive() {
        let db = init_db(":memory:").unwrap();
        let sport = SportRepo::new(db.clone())
            .ensure("Basketball", "basketball")
            .unwrap();
        let repo = LeagueRepo::new(db.clone());

        repo.ensure(&sport.id, "WNBA", "wnba").unwrap();
        repo.ensure(&sport.id, "EuroLeague", "euroleague").unwrap();
        {
            let conn = db.lock().unwrap();
            conn.execute(
                "INSERT INTO leagues (id, sport_id, name, slug, is_active) VALUES ('l9', ?1, 'NBA', 'nba', 0)",
                [&sport.id],
            )
            .unwrap();
        }

        let leagues = repo.list().unwrap();
        let names: Vec<&str> = leagues.iter().map(|l| l.league.name.as_str()).collect();
        assert_eq!(names, vec!["EuroLeague", "NBA", "WNBA"]);
        assert!(!leagues[1].league.is_active);
    }
}
