//! Fixture seeding for the lobby reference data.
//!
//! [`run`] creates the basketball sport, the NBA league, its chat rooms and
//! one multiplier config per bet type. Every step is create-if-absent, so
//! running it again never duplicates rows or changes stored values. Each
//! step commits on its own; a failure stops the sequence without rolling
//! back the steps already done.

use crate::bet_type::BetType;
use crate::db::DbPool;
use crate::error::Result;
use crate::models::{ChatRoom, League, Sport};
use crate::repo::{BetTypeConfigRepo, ChatRoomRepo, LeagueRepo, SportRepo};
use std::fmt;

/// Name and slug of the seeded sport.
pub const SPORT: (&str, &str) = ("Basketball", "basketball");

/// Name and slug of the seeded league.
pub const LEAGUE: (&str, &str) = ("NBA", "nba");

/// Name and slug of each seeded chat room.
pub const CHAT_ROOMS: [(&str, &str); 3] = [
    ("NBA General", "nba-general"),
    ("NBA Eastern Conference", "nba-eastern"),
    ("NBA Western Conference", "nba-western"),
];

/// Default multiplier and description for every bet type.
pub const BET_TYPE_CONFIGS: [(BetType, f64, &str); 30] = [
    // Full game
    (BetType::MoneylineHome, 1.8, "Home team wins"),
    (BetType::MoneylineAway, 1.8, "Away team wins"),
    (BetType::SpreadHome, 1.5, "Home team covers spread"),
    (BetType::SpreadAway, 1.5, "Away team covers spread"),
    (BetType::OverTotal, 1.3, "Total points over line"),
    (BetType::UnderTotal, 1.3, "Total points under line"),
    // Full game team totals
    (BetType::TeamTotalOverHome, 1.4, "Home team total over"),
    (BetType::TeamTotalUnderHome, 1.4, "Home team total under"),
    (BetType::TeamTotalOverAway, 1.4, "Away team total over"),
    (BetType::TeamTotalUnderAway, 1.4, "Away team total under"),
    // Quarters
    (BetType::QuarterWinnerHome, 2.0, "Home team wins quarter"),
    (BetType::QuarterWinnerAway, 2.0, "Away team wins quarter"),
    (BetType::QuarterOver, 1.6, "Quarter total over"),
    (BetType::QuarterUnder, 1.6, "Quarter total under"),
    (BetType::TeamQuarterOverHome, 1.7, "Home team quarter over"),
    (BetType::TeamQuarterUnderHome, 1.7, "Home team quarter under"),
    (BetType::TeamQuarterOverAway, 1.7, "Away team quarter over"),
    (BetType::TeamQuarterUnderAway, 1.7, "Away team quarter under"),
    // Halves
    (BetType::FirstHalfWinnerHome, 1.9, "Home team wins 1st half"),
    (BetType::FirstHalfWinnerAway, 1.9, "Away team wins 1st half"),
    (BetType::FirstHalfOver, 1.4, "1st half total over"),
    (BetType::FirstHalfUnder, 1.4, "1st half total under"),
    (BetType::SecondHalfWinnerHome, 1.9, "Home team wins 2nd half"),
    (BetType::SecondHalfWinnerAway, 1.9, "Away team wins 2nd half"),
    (BetType::SecondHalfOver, 1.4, "2nd half total over"),
    (BetType::SecondHalfUnder, 1.4, "2nd half total under"),
    // Specials
    (BetType::OvertimeYes, 3.0, "Game goes to overtime"),
    (BetType::OvertimeNo, 1.2, "No overtime"),
    (BetType::HighestQuarter, 4.0, "Predict highest scoring quarter"),
    (BetType::AllQuartersSameWinner, 5.0, "Same team wins all quarters"),
];

/// What a seed run left in the store.
///
/// Rows are as stored, so on a re-run they carry the values from the
/// first run rather than the fixture values.
#[derive(Debug, Clone)]
pub struct SeedReport {
    pub sport: Sport,
    pub league: League,
    pub chat_rooms: Vec<ChatRoom>,
    pub bet_type_configs: usize,
}

impl fmt::Display for SeedReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Database seeded successfully!")?;
        writeln!(f)?;
        writeln!(f, "Summary:")?;
        writeln!(f, "- 1 Sport ({})", self.sport.name)?;
        writeln!(f, "- 1 League ({})", self.league.name)?;
        writeln!(f, "- {} Chat Rooms", self.chat_rooms.len())?;
        write!(f, "- {} Bet Type Configurations", self.bet_type_configs)
    }
}

/// Seed the store with the fixture data.
///
/// Steps run in order because the league needs the sport's id and the
/// chat rooms need the league's id.
///
/// # Errors
///
/// Returns the first store error; later steps are not attempted.
pub fn run(db: &DbPool) -> Result<SeedReport> {
    tracing::info!("Starting database seed");

    let (name, slug) = SPORT;
    let sport = SportRepo::new(db.clone()).ensure(name, slug)?;
    tracing::info!(sport = %sport.name, id = %sport.id, "Sport ready");

    let (name, slug) = LEAGUE;
    let league = LeagueRepo::new(db.clone()).ensure(&sport.id, name, slug)?;
    tracing::info!(league = %league.name, id = %league.id, "League ready");

    let rooms = ChatRoomRepo::new(db.clone());
    let chat_rooms = CHAT_ROOMS
        .iter()
        .map(|(name, slug)| rooms.ensure(&league.id, name, slug))
        .collect::<Result<Vec<_>>>()?;
    tracing::info!(count = chat_rooms.len(), "Chat rooms ready");

    let configs = BetTypeConfigRepo::new(db.clone());
    for (bet_type, base_multiplier, description) in BET_TYPE_CONFIGS {
        configs.ensure(bet_type, base_multiplier, description)?;
    }
    tracing::info!(count = BET_TYPE_CONFIGS.len(), "Bet type configurations ready");

    Ok(SeedReport {
        sport,
        league,
        chat_rooms,
        bet_type_configs: BET_TYPE_CONFIGS.len(),
    })
}
