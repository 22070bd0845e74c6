//! Row types for serialization.
//!
//! Field names serialize in camelCase, which is what the lobby web client
//! expects (`isActive`, `sportId`, `baseMultiplier`, ...).

use crate::bet_type::BetType;
use serde::{Deserialize, Serialize};

/// A sport (e.g. basketball).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Sport {
    /// Opaque unique identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Unique URL-safe identifier.
    pub slug: String,
    /// Whether the sport is visible.
    pub is_active: bool,
    pub created_at: String,
    pub updated_at: String,
}

/// A league, owned by a sport.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct League {
    /// Opaque unique identifier.
    pub id: String,
    /// Id of the owning sport.
    pub sport_id: String,
    /// Display name.
    pub name: String,
    /// Unique URL-safe identifier.
    pub slug: String,
    /// Whether the league is visible.
    pub is_active: bool,
    pub created_at: String,
    pub updated_at: String,
}

/// Name and slug of a league's parent sport.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SportSummary {
    pub name: String,
    pub slug: String,
}

/// A league together with its parent sport.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeagueWithSport {
    #[serde(flatten)]
    pub league: League,
    pub sport: SportSummary,
}

/// A chat room, attached to a league.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatRoom {
    /// Opaque unique identifier.
    pub id: String,
    /// Id of the league the room belongs to.
    pub league_id: String,
    /// Display name.
    pub name: String,
    /// Unique URL-safe identifier.
    pub slug: String,
    /// Inactive rooms are hidden from listings.
    pub is_active: bool,
    pub created_at: String,
    pub updated_at: String,
}

/// Name of the sport a chat room's league belongs to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SportName {
    pub name: String,
}

/// The league a chat room belongs to, with that league's sport.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatRoomLeague {
    pub name: String,
    pub slug: String,
    pub sport: SportName,
}

/// A chat room together with its league and sport.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatRoomWithLeague {
    #[serde(flatten)]
    pub chat_room: ChatRoom,
    pub league: ChatRoomLeague,
}

/// Payout multiplier configured for one bet type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BetTypeConfig {
    /// Opaque unique identifier.
    pub id: String,
    /// The bet type this row configures (unique).
    pub bet_type: BetType,
    /// Payout multiplier, always positive.
    pub base_multiplier: f64,
    /// Human-readable description of the wager.
    pub description: String,
    /// Inactive configs are hidden from listings.
    pub is_active: bool,
    pub created_at: String,
    pub updated_at: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn league() -> League {
        League {
            id: "l1".to_string(),
            sport_id: "s1".to_string(),
            name: "NBA".to_string(),
            slug: "nba".to_string(),
            is_active: true,
            created_at: "2025-01-01T00:00:00+00:00".to_string(),
            updated_at: "2025-01-01T00:00:00+00:00".to_string(),
        }
    }

    #[test]
    fn test_league_with_sport_shape() {
        let value = serde_json::to_value(LeagueWithSport {
            league: league(),
            sport: SportSummary {
                name: "Basketball".to_string(),
                slug: "basketball".to_string(),
            },
        })
        .unwrap();

        assert_eq!(value["sportId"], "s1");
        assert_eq!(value["isActive"], true);
        assert_eq!(value["createdAt"], "2025-01-01T00:00:00+00:00");
        assert_eq!(value["sport"], json!({"name": "Basketball", "slug": "basketball"}));
        assert!(value.get("sport_id").is_none());
    }

    #[test]
    fn test_chat_room_with_league_shape() {
        let room = ChatRoomWithLeague {
            chat_room: ChatRoom {
                id: "c1".to_string(),
                league_id: "l1".to_string(),
                name: "NBA General".to_string(),
                slug: "nba-general".to_string(),
                is_active: true,
                created_at: "2025-01-01T00:00:00+00:00".to_string(),
                updated_at: "2025-01-01T00:00:00+00:00".to_string(),
            },
            league: ChatRoomLeague {
                name: "NBA".to_string(),
                slug: "nba".to_string(),
                sport: SportName {
                    name: "Basketball".to_string(),
                },
            },
        };

        let value = serde_json::to_value(&room).unwrap();
        assert_eq!(value["leagueId"], "l1");
        assert_eq!(
            value["league"],
            json!({"name": "NBA", "slug": "nba", "sport": {"name": "Basketball"}})
        );

        let back: ChatRoomWithLeague = serde_json::from_value(value).unwrap();
        assert_eq!(back, room);
    }

    #[test]
    fn test_bet_type_config_shape() {
        let config = BetTypeConfig {
            id: "b1".to_string(),
            bet_type: BetType::SpreadHome,
            base_multiplier: 1.5,
            description: "Home team covers spread".to_string(),
            is_active: true,
            created_at: "2025-01-01T00:00:00+00:00".to_string(),
            updated_at: "2025-01-01T00:00:00+00:00".to_string(),
        };

        let value = serde_json::to_value(&config).unwrap();
        assert_eq!(value["betType"], "SPREAD_HOME");
        assert_eq!(value["baseMultiplier"], 1.5);
    }
}
