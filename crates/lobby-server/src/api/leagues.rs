//! League API handlers.

use axum::{extract::State, Json};
use lobby_db::models::LeagueWithSport;
use lobby_db::repo::LeagueRepo;
use serde::{Deserialize, Serialize};

use super::ApiError;
use crate::AppState;

/// Body of a successful `GET /api/leagues`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeaguesResponse {
    pub leagues: Vec<LeagueWithSport>,
}

/// List all leagues with their sport's name and slug, ordered by name.
///
/// # Endpoint
///
/// `GET /api/leagues`
///
/// # Response
///
/// - `200 OK`: `{"leagues": [{..., "sport": {"name", "slug"}}]}`
/// - `500 Internal Server Error`: `{"error": "Failed to fetch leagues"}`
pub async fn list_leagues(
    State(state): State<AppState>,
) -> Result<Json<LeaguesResponse>, ApiError> {
    let repo = LeagueRepo::new(state.db.clone());
    let leagues = repo
        .list()
        .map_err(|e| ApiError::fetch_failed("Failed to fetch leagues", e))?;
    Ok(Json(LeaguesResponse { leagues }))
}
