//! The closed set of wager categories a multiplier can be configured for.

use crate::error::Error;
use rusqlite::types::{FromSql, FromSqlError, FromSqlResult, ToSql, ToSqlOutput, ValueRef};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A wager category.
///
/// The set is closed at 30 categories; the database rejects any other name.
/// Stored and serialized by its SCREAMING_SNAKE_CASE name (e.g. `MONEYLINE_HOME`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BetType {
    // Full game
    MoneylineHome,
    MoneylineAway,
    SpreadHome,
    SpreadAway,
    OverTotal,
    UnderTotal,
    TeamTotalOverHome,
    TeamTotalUnderHome,
    TeamTotalOverAway,
    TeamTotalUnderAway,

    // Quarters
    QuarterWinnerHome,
    QuarterWinnerAway,
    QuarterOver,
    QuarterUnder,
    TeamQuarterOverHome,
    TeamQuarterUnderHome,
    TeamQuarterOverAway,
    TeamQuarterUnderAway,

    // Halves
    FirstHalfWinnerHome,
    FirstHalfWinnerAway,
    FirstHalfOver,
    FirstHalfUnder,
    SecondHalfWinnerHome,
    SecondHalfWinnerAway,
    SecondHalfOver,
    SecondHalfUnder,

    // Specials
    OvertimeYes,
    OvertimeNo,
    HighestQuarter,
    AllQuartersSameWinner,
}

impl BetType {
    /// Every bet type, in declaration order.
    pub const ALL: [BetType; 30] = [
        BetType::MoneylineHome,
        BetType::MoneylineAway,
        BetType::SpreadHome,
        BetType::SpreadAway,
        BetType::OverTotal,
        BetType::UnderTotal,
        BetType::TeamTotalOverHome,
        BetType::TeamTotalUnderHome,
        BetType::TeamTotalOverAway,
        BetType::TeamTotalUnderAway,
        BetType::QuarterWinnerHome,
        BetType::QuarterWinnerAway,
        BetType::QuarterOver,
        BetType::QuarterUnder,
        BetType::TeamQuarterOverHome,
        BetType::TeamQuarterUnderHome,
        BetType::TeamQuarterOverAway,
        BetType::TeamQuarterUnderAway,
        BetType::FirstHalfWinnerHome,
        BetType::FirstHalfWinnerAway,
        BetType::FirstHalfOver,
        BetType::FirstHalfUnder,
        BetType::SecondHalfWinnerHome,
        BetType::SecondHalfWinnerAway,
        BetType::SecondHalfOver,
        BetType::SecondHalfUnder,
        BetType::OvertimeYes,
        BetType::OvertimeNo,
        BetType::HighestQuarter,
        BetType::AllQuartersSameWinner,
    ];

    /// The stored/wire name of this bet type.
    pub fn as_str(&self) -> &'static str {
        match self {
            BetType::MoneylineHome => "MONEYLINE_HOME",
            BetType::MoneylineAway => "MONEYLINE_AWAY",
            BetType::SpreadHome => "SPREAD_HOME",
            BetType::SpreadAway => "SPREAD_AWAY",
            BetType::OverTotal => "OVER_TOTAL",
            BetType::UnderTotal => "UNDER_TOTAL",
            BetType::TeamTotalOverHome => "TEAM_TOTAL_OVER_HOME",
            BetType::TeamTotalUnderHome => "TEAM_TOTAL_UNDER_HOME",
            BetType::TeamTotalOverAway => "TEAM_TOTAL_OVER_AWAY",
            BetType::TeamTotalUnderAway => "TEAM_TOTAL_UNDER_AWAY",
            BetType::QuarterWinnerHome => "QUARTER_WINNER_HOME",
            BetType::QuarterWinnerAway => "QUARTER_WINNER_AWAY",
            BetType::QuarterOver => "QUARTER_OVER",
            BetType::QuarterUnder => "QUARTER_UNDER",
            BetType::TeamQuarterOverHome => "TEAM_QUARTER_OVER_HOME",
            BetType::TeamQuarterUnderHome => "TEAM_QUARTER_UNDER_HOME",
            BetType::TeamQuarterOverAway => "TEAM_QUARTER_OVER_AWAY",
            BetType::TeamQuarterUnderAway => "TEAM_QUARTER_UNDER_AWAY",
            BetType::FirstHalfWinnerHome => "FIRST_HALF_WINNER_HOME",
            BetType::FirstHalfWinnerAway => "FIRST_HALF_WINNER_AWAY",
            BetType::FirstHalfOver => "FIRST_HALF_OVER",
            BetType::FirstHalfUnder => "FIRST_HALF_UNDER",
            BetType::SecondHalfWinnerHome => "SECOND_HALF_WINNER_HOME",
            BetType::SecondHalfWinnerAway => "SECOND_HALF_WINNER_AWAY",
            BetType::SecondHalfOver => "SECOND_HALF_OVER",
            BetType::SecondHalfUnder => "SECOND_HALF_UNDER",
            BetType::OvertimeYes => "OVERTIME_YES",
            BetType::OvertimeNo => "OVERTIME_NO",
            BetType::HighestQuarter => "HIGHEST_QUARTER",
            BetType::AllQuartersSameWinner => "ALL_QUARTERS_SAME_WINNER",
        }
    }
}

impl fmt::Display for BetType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BetType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BetType::ALL
            .into_iter()
            .find(|bet_type| bet_type.as_str() == s)
            .ok_or_else(|| Error::UnknownBetType(s.to_string()))
    }
}

impl ToSql for BetType {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(ToSqlOutput::from(self.as_str()))
    }
}

impl FromSql for BetType {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        value
            .as_str()?
            .parse()
            .map_err(|e: Error| FromSqlError::Other(Box::new(e)))
    }
}
