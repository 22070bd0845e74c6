//! Bet type configuration API handlers.

use axum::{extract::State, Json};
use lobby_db::models::BetTypeConfig;
use lobby_db::repo::BetTypeConfigRepo;
use serde::{Deserialize, Serialize};

use super::ApiError;
use crate::AppState;

/// Body of a successful `GET /api/bet-type-configs`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BetTypeConfigsResponse {
    pub bet_type_configs: Vec<BetTypeConfig>,
}

/// List active bet type configurations, ordered by bet type.
///
/// # Endpoint
///
/// `GET /api/bet-type-configs`
///
/// # Response
///
/// - `200 OK`: `{"betTypeConfigs": [...]}`
/// - `500 Internal Server Error`: `{"error": "Failed to fetch bet type configs"}`
pub async fn list_bet_type_configs(
    State(state): State<AppState>,
) -> Result<Json<BetTypeConfigsResponse>, ApiError> {
    let repo = BetTypeConfigRepo::new(state.db.clone());
    let bet_type_configs = repo
        .list_active()
        .map_err(|e| ApiError::fetch_failed("Failed to fetch bet type configs", e))?;
    Ok(Json(BetTypeConfigsResponse { bet_type_configs }))
}
