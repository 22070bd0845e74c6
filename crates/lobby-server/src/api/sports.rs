//! Sport API handlers.

use axum::{extract::State, Json};
use lobby_db::models::Sport;
use lobby_db::repo::SportRepo;
use serde::{Deserialize, Serialize};

use super::ApiError;
use crate::AppState;

/// Body of a successful `GET /api/sports`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SportsResponse {
    pub sports: Vec<Sport>,
}

/// List all sports, active or not, ordered by name.
///
/// # Endpoint
///
/// `GET /api/sports`
///
/// # Response
///
/// - `200 OK`: `{"sports": [...]}`
/// - `500 Internal Server Error`: `{"error": "Failed to fetch sports"}`
pub async fn list_sports(
    State(state): State<AppState>,
) -> Result<Json<SportsResponse>, ApiError> {
    let repo = SportRepo::new(state.db.clone());
    let sports = repo
        .list()
        .map_err(|e| ApiError::fetch_failed("Failed to fetch sports", e))?;
    Ok(Json(SportsResponse { sports }))
}
