//! Age-bound career milestones and league reference averages
//!
//! Career totals are projected with the same constant-rate model as a
//! season ([`SeasonPace`](crate::SeasonPace)), over the games a player has
//! left before an age cutoff, and compared with the best total anyone
//! reached by that age.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::categories::StatCategory;
use crate::error::StatError;
use crate::models::StatSample;

/// Career totals tracked against age-based records
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CareerStat {
    Points,
    Assists,
    Rebounds,
    Steals,
    Blocks,
    ThreePointersMade,
    FieldGoalsMade,
    FreeThrowsMade,
    Minutes,
    GamesPlayed,
}

impl CareerStat {
    pub const ALL: [CareerStat; 10] = [
        CareerStat::Points,
        CareerStat::Assists,
        CareerStat::Rebounds,
        CareerStat::Steals,
        CareerStat::Blocks,
        CareerStat::ThreePointersMade,
        CareerStat::FieldGoalsMade,
        CareerStat::FreeThrowsMade,
        CareerStat::Minutes,
        CareerStat::GamesPlayed,
    ];

    pub const fn key(self) -> &'static str {
        match self {
            CareerStat::Points => "POINTS",
            CareerStat::Assists => "ASSISTS",
            CareerStat::Rebounds => "REBOUNDS",
            CareerStat::Steals => "STEALS",
            CareerStat::Blocks => "BLOCKS",
            CareerStat::ThreePointersMade => "THREE_POINTERS_MADE",
            CareerStat::FieldGoalsMade => "FIELD_GOALS_MADE",
            CareerStat::FreeThrowsMade => "FREE_THROWS_MADE",
            CareerStat::Minutes => "MINUTES",
            CareerStat::GamesPlayed => "GAMES_PLAYED",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            CareerStat::Points => "Career Points",
            CareerStat::Assists => "Career Assists",
            CareerStat::Rebounds => "Career Rebounds",
            CareerStat::Steals => "Career Steals",
            CareerStat::Blocks => "Career Blocks",
            CareerStat::ThreePointersMade => "Career 3-Pointers Made",
            CareerStat::FieldGoalsMade => "Career Field Goals Made",
            CareerStat::FreeThrowsMade => "Career Free Throws Made",
            CareerStat::Minutes => "Career Minutes",
            CareerStat::GamesPlayed => "Career Games Played",
        }
    }

    /// Box-score stat whose per-game average drives the projection.
    /// Games played has none; it always grows by one per game.
    pub const fn per_game_category(self) -> Option<StatCategory> {
        match self {
            CareerStat::Points => Some(StatCategory::Pts),
            CareerStat::Assists => Some(StatCategory::Ast),
            CareerStat::Rebounds => Some(StatCategory::Reb),
            CareerStat::Steals => Some(StatCategory::Stl),
            CareerStat::Blocks => Some(StatCategory::Blk),
            CareerStat::ThreePointersMade => Some(StatCategory::Fg3m),
            CareerStat::FieldGoalsMade => Some(StatCategory::Fgm),
            CareerStat::FreeThrowsMade => Some(StatCategory::Ftm),
            CareerStat::Minutes => Some(StatCategory::Min),
            CareerStat::GamesPlayed => None,
        }
    }
}

impl fmt::Display for CareerStat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for CareerStat {
    type Err = StatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        CareerStat::ALL
            .into_iter()
            .find(|stat| stat.key().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| StatError::UnknownCategory(s.to_string()))
    }
}

/// One entry of an all-time ranking, e.g. most points before turning 25
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedRecord {
    pub holder: String,
    pub value: f64,

    /// 1 is the record itself
    pub rank: u32,
}

impl RankedRecord {
    pub fn new(holder: impl Into<String>, value: f64, rank: u32) -> Self {
        Self { holder: holder.into(), value, rank }
    }
}

/// The rank-1 entry of a ranking, if the ranking has one
pub fn top_record(records: &[RankedRecord]) -> Option<&RankedRecord> {
    records.iter().find(|record| record.rank == 1)
}

/// Where `holder` currently sits in a ranking
pub fn rank_of(records: &[RankedRecord], holder: &str) -> Option<u32> {
    records.iter().find(|record| record.holder == holder).map(|record| record.rank)
}

/// Per-game average needed to reach `target` in `games_remaining` games.
///
/// Zero when `target` is already reached, `None` when it is not and no games
/// are left.
pub fn required_per_game(current: f64, target: f64, games_remaining: u32) -> Option<f64> {
    let gap = target - current;
    if gap <= 0.0 {
        return Some(0.0);
    }
    (games_remaining > 0).then(|| gap / games_remaining as f64)
}

/// Mean value of the `limit` samples with the largest weight (minutes).
///
/// Non-finite values are dropped before the cut; unweighted samples sort
/// last. `None` when nothing is left to average.
pub fn top_minutes_average(samples: &[StatSample], limit: usize) -> Option<f64> {
    let mut ranked: Vec<&StatSample> = samples.iter().filter(|s| s.value.is_finite()).collect();
    ranked.sort_by(|a, b| {
        let a = a.weight.unwrap_or(f64::NEG_INFINITY);
        let b = b.weight.unwrap_or(f64::NEG_INFINITY);
        b.partial_cmp(&a).unwrap_or(Ordering::Equal)
    });
    ranked.truncate(limit);

    if ranked.is_empty() {
        return None;
    }

    trace!("Averaging top {} of {} samples by minutes", ranked.len(), samples.len());
    Some(ranked.iter().map(|s| s.value).sum::<f64>() / ranked.len() as f64)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ranking() -> Vec<RankedRecord> {
        vec![
            RankedRecord::new("Kevin Durant", 11062.0, 2),
            RankedRecord::new("LeBron James", 13282.0, 1),
            RankedRecord::new("Anthony Edwards", 8052.0, 9),
        ]
    }

    #[test]
    fn test_top_record_and_rank() {
        let records = ranking();
        assert_eq!(top_record(&records).map(|r| r.holder.as_str()), Some("LeBron James"));
        assert_eq!(rank_of(&records, "Anthony Edwards"), Some(9));
        assert_eq!(rank_of(&records, "Zion Williamson"), None);
        assert!(top_record(&records[..1]).is_none());
    }

    #[test]
    fn test_required_per_game() {
        assert_eq!(required_per_game(8052.0, 13282.0, 82), Some((13282.0 - 8052.0) / 82.0));
        assert_eq!(required_per_game(500.0, 400.0, 0), Some(0.0));
        assert_eq!(required_per_game(100.0, 400.0, 0), None);
    }

    #[test]
    fn test_top_minutes_average() {
        let samples = vec![
            StatSample::new("starter", 20.0).with_weight(2500.0),
            StatSample::new("rotation", 10.0).with_weight(1500.0),
            StatSample::new("missing", f64::NAN).with_weight(3000.0),
            StatSample::new("deep bench", 2.0).with_weight(100.0),
            StatSample::new("unweighted", 50.0),
        ];

        assert_eq!(top_minutes_average(&samples, 2), Some(15.0));
        assert_eq!(top_minutes_average(&samples, 3), Some(32.0 / 3.0));
        assert_eq!(top_minutes_average(&samples, 0), None);
        assert_eq!(top_minutes_average(&[], 200), None);
    }

    #[test]
    fn test_career_stat_keys() {
        for stat in CareerStat::ALL {
            assert_eq!(stat.key().parse::<CareerStat>(), Ok(stat));
            assert_eq!(serde_json::to_string(&stat).unwrap(), format!("\"{}\"", stat.key()));
        }
        assert_eq!(CareerStat::GamesPlayed.per_game_category(), None);
        assert_eq!(CareerStat::ThreePointersMade.per_game_category(), Some(StatCategory::Fg3m));
    }
}
