//! Chat room API handlers.

use axum::{extract::State, Json};
use lobby_db::models::ChatRoomWithLeague;
use lobby_db::repo::ChatRoomRepo;
use serde::{Deserialize, Serialize};

use super::ApiError;
use crate::AppState;

/// Body of a successful `GET /api/chat-rooms`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatRoomsResponse {
    pub chat_rooms: Vec<ChatRoomWithLeague>,
}

/// List active chat rooms with their league and sport, ordered by name.
///
/// # Endpoint
///
/// `GET /api/chat-rooms`
///
/// # Response
///
/// - `200 OK`: `{"chatRooms": [{..., "league": {"name", "slug", "sport": {"name"}}}]}`
/// - `500 Internal Server Error`: `{"error": "Failed to fetch chat rooms"}`
pub async fn list_chat_rooms(
    State(state): State<AppState>,
) -> Result<Json<ChatRoomsResponse>, ApiError> {
    let repo = ChatRoomRepo::new(state.db.clone());
    let chat_rooms = repo
        .list_active()
        .map_err(|e| ApiError::fetch_failed("Failed to fetch chat rooms", e))?;
    Ok(Json(ChatRoomsResponse { chat_rooms }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::test_support::{break_table, extract_json, test_state};
    use crate::api::ErrorBody;
    use axum::http::StatusCode;
    use axum::response::IntoResponse;
    use lobby_db::repo::{LeagueRepo, SportRepo};

    #[tokio::test]
    async fn test_list_chat_rooms_empty() {
        let state = test_state();
        let response = list_chat_rooms(State(state)).await.into_response();
        let (status, body): (_, serde_json::Value) = extract_json(response).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, serde_json::json!({ "chatRooms": [] }));
    }

    #[tokio::test]
    async fn test_list_chat_rooms_active_only_with_league() {
        let state = test_state();
        let sport = SportRepo::new(state.db.clone())
            .ensure("Basketball", "basketball")
            .unwrap();
        let league = LeagueRepo::new(state.db.clone())
            .ensure(&sport.id, "NBA", "nba")
            .unwrap();
        let repo = ChatRoomRepo::new(state.db.clone());
        repo.ensure(&league.id, "NBA Western Conference", "nba-western")
            .unwrap();
        repo.ensure(&league.id, "NBA General", "nba-general").unwrap();
        repo.ensure(&league.id, "Closed", "closed").unwrap();
        {
            let conn = state.db.lock().unwrap();
            conn.execute("UPDATE chat_rooms SET is_active = 0 WHERE slug = 'closed'", [])
                .unwrap();
        }

        let response = list_chat_rooms(State(state)).await.into_response();
        let (status, body): (_, serde_json::Value) = extract_json(response).await;

        assert_eq!(status, StatusCode::OK);
        let rooms = body["chatRooms"].as_array().unwrap();
        assert_eq!(rooms.len(), 2);
        assert_eq!(rooms[0]["name"], "NBA General");
        assert_eq!(rooms[1]["name"], "NBA Western Conference");
        assert_eq!(rooms[0]["leagueId"], league.id.as_str());
        assert_eq!(
            rooms[0]["league"],
            serde_json::json!({
                "name": "NBA",
                "slug": "nba",
                "sport": { "name": "Basketball" }
            })
        );
    }

    #[tokio::test]
    async fn test_list_chat_rooms_store_failure() {
        let state = test_state();
        break_table(&state, "chat_rooms");

        let response = list_chat_rooms(State(state)).await.into_response();
        let (status, body): (_, ErrorBody) = extract_json(response).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body.error, "Failed to fetch chat rooms");
    }
}
