//! # Dataset Records
//!
//! Row types returned by the data-access layer. Field names follow the
//! exported tables so a dump of those tables loads without renaming.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use stat_engine::{CareerStat, RankedRecord, SeasonPace, StatCategory};

/// A player's full-season per-game line
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeasonLine {
    pub player_name: String,
    pub team_abbreviation: String,
    pub games_played: u32,
    pub minutes_per_game: f64,

    /// Per-game values keyed by stat, e.g. `"FG3_PCT": 0.357`
    #[serde(default)]
    pub stats: BTreeMap<StatCategory, f64>,
}

impl SeasonLine {
    /// Minutes per game × games played
    pub fn total_minutes(&self) -> f64 {
        self.minutes_per_game * self.games_played as f64
    }

    /// Finite value for `category`, if the line has one
    pub fn stat(&self, category: StatCategory) -> Option<f64> {
        self.stats.get(&category).copied().filter(|v| v.is_finite())
    }
}

/// One game from a player's game log
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameLogEntry {
    pub player_name: String,
    pub game_date: NaiveDate,

    #[serde(default)]
    pub stats: BTreeMap<StatCategory, f64>,
}

impl GameLogEntry {
    /// Value for `category`; a stat missing from the box score counts as 0
    pub fn stat(&self, category: StatCategory) -> f64 {
        self.stats.get(&category).copied().filter(|v| v.is_finite()).unwrap_or(0.0)
    }
}

/// Season record-tracker line for one player and stat
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecordLine {
    pub player_name: String,
    pub stat: StatCategory,
    pub games_played: u32,
    pub games_remaining: u32,

    /// Season total so far
    pub current: f64,
    pub per_game: f64,

    pub personal_record: f64,
    pub franchise_record: f64,
    pub franchise_player: String,
    pub nba_record: f64,

    /// Record holder; Hall of Famers carry a trailing `*`
    pub nba_player: String,
}

impl RecordLine {
    pub fn pace(&self) -> SeasonPace {
        SeasonPace::new(self.games_played, self.current, self.per_game, self.games_remaining)
    }
}

/// A player's career to date, with the games left before an age cutoff
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CareerLine {
    pub player_name: String,
    pub birthdate: NaiveDate,
    pub current_age: u32,

    /// Games remaining on the schedule before the player turns 25
    pub games_remaining_until_25: u32,

    pub career_games_played: u32,

    /// Career totals, e.g. `"POINTS": 7605`
    #[serde(default)]
    pub totals: BTreeMap<CareerStat, f64>,

    /// Most recent season's per-game averages
    #[serde(default)]
    pub per_game: BTreeMap<StatCategory, f64>,
}

impl CareerLine {
    /// Career total for `stat`; games played comes from its own column
    pub fn total(&self, stat: CareerStat) -> f64 {
        match stat {
            CareerStat::GamesPlayed => f64::from(self.career_games_played),
            _ => self.totals.get(&stat).copied().filter(|v| v.is_finite()).unwrap_or(0.0),
        }
    }

    /// Projection pace for `stat` through the age cutoff.
    ///
    /// Uses the season per-game average when present, otherwise the career
    /// rate. Games played always grows by one per game.
    pub fn pace(&self, stat: CareerStat) -> SeasonPace {
        let current = self.total(stat);
        let per_game = match stat.per_game_category() {
            None => Some(1.0),
            Some(category) => self.per_game.get(&category).copied().filter(|v| v.is_finite()),
        };

        match per_game {
            Some(rate) => SeasonPace::new(
                self.career_games_played,
                current,
                rate,
                self.games_remaining_until_25,
            ),
            None => SeasonPace::from_totals(
                self.career_games_played,
                current,
                self.games_remaining_until_25,
            ),
        }
    }
}

/// One row of an age-based ranking, e.g. 3rd most career assists before 25
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgeRecordLine {
    pub stat: CareerStat,
    pub rank_position: u32,
    pub player_name: String,
    pub stat_value: f64,
}

impl AgeRecordLine {
    pub fn ranked(&self) -> RankedRecord {
        RankedRecord::new(&self.player_name, self.stat_value, self.rank_position)
    }
}

/// A player's line for one season of their career
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CareerSeasonLine {
    pub player_name: String,
    pub year: i32,

    #[serde(default)]
    pub team: Option<String>,
    #[serde(default)]
    pub games: Option<u32>,
    #[serde(default)]
    pub minutes_played: Option<f64>,

    #[serde(default)]
    pub stats: BTreeMap<StatCategory, f64>,
}

impl CareerSeasonLine {
    pub fn stat(&self, category: StatCategory) -> Option<f64> {
        self.stats.get(&category).copied().filter(|v| v.is_finite())
    }
}

/// A single play-by-play event with the running score
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayByPlay {
    pub game_id: String,
    pub event_num: u32,
    pub period: u32,
    pub clock: String,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(default)]
    pub is_scoring_play: bool,

    pub home_score: i32,
    pub away_score: i32,
}

impl PlayByPlay {
    /// Flagged as scoring, or described as a made shot
    pub fn is_scoring(&self) -> bool {
        if self.is_scoring_play {
            return true;
        }

        self.description.as_deref().is_some_and(|text| {
            text.contains("SCORE") || text.contains("made") || text.contains("free throw")
        })
    }

    /// Score margin from the away team's side
    pub fn differential(&self) -> f64 {
        f64::from(self.away_score - self.home_score)
    }

    /// Chart label such as `Q3 05:42`
    pub fn label(&self) -> String {
        format!("Q{} {}", self.period, self.clock)
    }
}

/// Everything the dashboard reads, as exported from the backing tables
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Dataset {
    pub season_lines: Vec<SeasonLine>,
    pub game_logs: Vec<GameLogEntry>,
    pub record_lines: Vec<RecordLine>,
    pub play_by_play: Vec<PlayByPlay>,
    pub career_lines: Vec<CareerLine>,
    pub age_records: Vec<AgeRecordLine>,

    /// Per-season lines for every player, used for career charts and league averages
    pub season_history: Vec<CareerSeasonLine>,
}
