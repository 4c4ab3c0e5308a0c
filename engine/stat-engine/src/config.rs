use serde::{Deserialize, Serialize};

use crate::error::{Result, StatError};

/// Default number of evaluation points on a density curve
pub const DEFAULT_KDE_POINTS: usize = 200;

/// Bandwidth used when every sample has the same value
pub const DEFAULT_FALLBACK_BANDWIDTH: f64 = 0.1;

/// Half-width of the window `density_at` searches for curve points
pub const DEFAULT_LOOKUP_WINDOW: f64 = 0.5;

/// Number of histogram buckets the distribution chart uses
pub const DEFAULT_BUCKET_COUNT: usize = 20;

/// Minimum total minutes (minutes per game × games played) to enter a league population
pub const DEFAULT_MIN_TOTAL_MINUTES: f64 = 600.0;

/// Players per season, by minutes, in a league reference average
pub const DEFAULT_LEAGUE_AVERAGE_LIMIT: usize = 200;

/// Relative difference at which recent form counts as trending
pub const DEFAULT_TREND_THRESHOLD: f64 = 0.1;

/// Configuration for the stat engine
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct EngineConfig {
    /// Kernel density estimation parameters
    pub kde: KdeConfig,

    /// Histogram parameters
    pub histogram: HistogramConfig,

    /// League population filter
    pub population: PopulationConfig,

    /// Recent-form trend parameters
    pub trend: TrendConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct KdeConfig {
    /// Number of evenly spaced points on the curve
    pub num_points: usize,

    /// Bandwidth used for a zero-range population
    pub fallback_bandwidth: f64,

    /// Half-width of the window used by `density_at`
    pub lookup_window: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HistogramConfig {
    /// Number of buckets the population range is split into
    pub bucket_count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PopulationConfig {
    /// Players below this many total minutes are left out of league populations
    pub min_total_minutes: f64,

    /// Most-played players per season averaged into a league reference line
    pub league_average_limit: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrendConfig {
    /// Relative difference (e.g. 0.1 = 10%) needed to report a trend
    pub threshold: f64,

    /// Games in the short recent-form window
    pub short_window: usize,

    /// Games in the long recent-form window
    pub long_window: usize,
}

impl Default for KdeConfig {
    fn default() -> Self {
        Self {
            num_points: DEFAULT_KDE_POINTS,
            fallback_bandwidth: DEFAULT_FALLBACK_BANDWIDTH,
            lookup_window: DEFAULT_LOOKUP_WINDOW,
        }
    }
}

impl KdeConfig {
    /// Default parameters with a different point count
    pub fn with_points(num_points: usize) -> Self {
        Self { num_points, ..Default::default() }
    }
}

impl Default for HistogramConfig {
    fn default() -> Self {
        Self { bucket_count: DEFAULT_BUCKET_COUNT }
    }
}

impl Default for PopulationConfig {
    fn default() -> Self {
        Self {
            min_total_minutes: DEFAULT_MIN_TOTAL_MINUTES,
            league_average_limit: DEFAULT_LEAGUE_AVERAGE_LIMIT,
        }
    }
}

impl Default for TrendConfig {
    fn default() -> Self {
        Self { threshold: DEFAULT_TREND_THRESHOLD, short_window: 5, long_window: 10 }
    }
}

impl EngineConfig {
    /// Reject values the transforms cannot work with
    pub fn validate(&self) -> Result<()> {
        if self.kde.num_points < 2 {
            return Err(StatError::invalid_config("kde.num_points", "must be at least 2"));
        }

        if !(self.kde.fallback_bandwidth.is_finite() && self.kde.fallback_bandwidth > 0.0) {
            return Err(StatError::invalid_config(
                "kde.fallback_bandwidth",
                "must be a positive finite number",
            ));
        }

        if !(self.kde.lookup_window.is_finite() && self.kde.lookup_window >= 0.0) {
            return Err(StatError::invalid_config(
                "kde.lookup_window",
                "must be a non-negative finite number",
            ));
        }

        if self.histogram.bucket_count == 0 {
            return Err(StatError::invalid_config("histogram.bucket_count", "must be at least 1"));
        }

        if !self.population.min_total_minutes.is_finite() {
            return Err(StatError::invalid_config("population.min_total_minutes", "must be finite"));
        }

        if self.population.league_average_limit == 0 {
            return Err(StatError::invalid_config(
                "population.league_average_limit",
                "must be at least 1",
            ));
        }

        if !(self.trend.threshold.is_finite() && self.trend.threshold >= 0.0) {
            return Err(StatError::invalid_config(
                "trend.threshold",
                "must be a non-negative finite number",
            ));
        }

        if self.trend.short_window == 0 || self.trend.long_window == 0 {
            return Err(StatError::invalid_config("trend", "windows must be at least one game"));
        }

        Ok(())
    }
}
