//! # Chart Views
//!
//! Precomputed series handed to the rendering layer. Each view carries the
//! numbers a chart needs plus the display strings, so the renderer does no
//! statistics of its own.

use serde::Serialize;
use chrono::NaiveDate;
use stat_engine::{
    CareerStat, DensityCurve, FlowPoint, HistogramBucket, ProjectionSeries, RankedRecord,
    SeasonPace, SignedSeries, StatCategory, Trend,
};

/// League distribution of one stat, with a team's players placed on the curve
#[derive(Debug, Clone, Serialize)]
pub struct DistributionView {
    pub stat: StatCategory,
    pub label: &'static str,

    /// Players that passed the minutes filter
    pub population_size: usize,

    pub curve: DensityCurve,
    pub bucket_width: Option<f64>,
    pub histogram: Vec<HistogramBucket>,
    pub highlighted: Vec<HighlightedPlayer>,
}

/// A player marker on the distribution curve
#[derive(Debug, Clone, Serialize)]
pub struct HighlightedPlayer {
    pub player_name: String,
    pub value: f64,
    pub display: String,

    /// Curve height at `value`, where the marker is drawn
    pub density: f64,

    pub percentile: f64,
    pub total_minutes: f64,
}

/// A player's league percentiles across several stats
#[derive(Debug, Clone, Serialize)]
pub struct PercentileProfile {
    pub player_name: String,

    /// Players who meet the minutes filter, before per-stat gaps are dropped
    pub population_size: usize,

    pub entries: Vec<PercentileEntry>,
}

#[derive(Debug, Clone, Serialize)]
pub struct PercentileEntry {
    pub stat: StatCategory,
    pub label: &'static str,
    pub value: f64,
    pub display: String,

    /// Rank in `[0, 1]`, already inverted for lower-is-better stats
    pub percentile: f64,

    /// Qualified players with a value for this stat
    pub population_size: usize,
}

/// Season progress toward records for one stat
#[derive(Debug, Clone, Serialize)]
pub struct RecordTrackerView {
    pub player_name: String,
    pub stat: StatCategory,
    pub label: &'static str,
    pub pace: SeasonPace,
    pub series: ProjectionSeries,
    pub milestones: Vec<RecordMilestone>,
}

/// One record line drawn across the progression chart
#[derive(Debug, Clone, Serialize)]
pub struct RecordMilestone {
    pub name: &'static str,
    pub holder: String,
    pub record: f64,

    /// Progress bar fill in `[0, 1]`
    pub progress: f64,

    /// Projected season total reaches the record
    pub on_track: bool,
}

/// Score margin across a game, split for two-colour rendering
#[derive(Debug, Clone, Serialize)]
pub struct GameFlowView {
    pub game_id: String,

    /// Whether only scoring plays were used
    pub scoring_plays_only: bool,

    pub points: Vec<FlowPoint>,
    pub labels: Vec<String>,
    pub signed: SignedSeries,
}

/// Recent averages against the season average
#[derive(Debug, Clone, Serialize)]
pub struct RecentFormView {
    pub player_name: String,
    pub stat: StatCategory,
    pub season_average: f64,
    pub windows: Vec<FormWindow>,
}

#[derive(Debug, Clone, Serialize)]
pub struct FormWindow {
    /// Number of most recent games averaged
    pub games: usize,
    pub average: f64,
    pub display: String,
    pub trend: Trend,
}

/// Career totals projected to an age cutoff against the best ever by that age
#[derive(Debug, Clone, Serialize)]
pub struct AgeTrackerView {
    pub player_name: String,
    pub birthdate: NaiveDate,
    pub current_age: u32,
    pub games_remaining: u32,

    /// Only stats that have a rank-1 record
    pub milestones: Vec<AgeMilestone>,
}

#[derive(Debug, Clone, Serialize)]
pub struct AgeMilestone {
    pub stat: CareerStat,
    pub label: &'static str,
    pub current: f64,
    pub projected: f64,

    /// The player's own position in the ranking, if listed
    pub rank_position: Option<u32>,

    pub top_record: RankedRecord,
    pub progress: f64,
    pub on_track: bool,

    /// Per-game average needed to catch the record before the cutoff
    pub needed_per_game: Option<f64>,
}

/// A player's season-by-season value with the league reference line
#[derive(Debug, Clone, Serialize)]
pub struct CareerProgressionView {
    pub player_name: String,
    pub stat: StatCategory,
    pub label: &'static str,
    pub seasons: Vec<CareerSeasonPoint>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CareerSeasonPoint {
    pub year: i32,
    pub team: Option<String>,
    pub games: Option<u32>,
    pub minutes_played: Option<f64>,
    pub value: Option<f64>,

    /// Mean of the season's most-played players
    pub league_average: Option<f64>,
}
