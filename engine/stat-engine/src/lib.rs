//! Stat Engine
//!
//! Side-effect-free statistical transforms behind the player dashboard:
//! league percentiles, kernel density curves with their paired histograms,
//! zero-crossing game-flow series, season record projections and age-bound
//! career milestones.
//!
//! Every function takes its inputs as arguments and returns a freshly
//! computed result. Nothing here fetches data, caches, or holds state between
//! calls, so any function can be called from any number of threads at once.

pub mod career;
pub mod categories;
pub mod config;
pub mod density;
pub mod error;
pub mod histogram;
pub mod models;
pub mod percentile;
pub mod progression;
pub mod trend;
pub mod zero_crossing;

pub use career::{rank_of, required_per_game, top_minutes_average, top_record, CareerStat, RankedRecord};
pub use categories::{StatCategory, StatMeta, StatTable};
pub use config::{EngineConfig, HistogramConfig, KdeConfig, PopulationConfig, TrendConfig};
pub use density::{density_at, kde};
pub use error::{Result, StatError};
pub use histogram::{bucket_width_for, histogram, MAX_BUCKETS};
pub use models::*;
pub use percentile::{percentile, percentiles};
pub use progression::{accumulate, on_track, project, record_progress, SeasonPace};
pub use trend::{rolling_average, trend, Trend};
pub use zero_crossing::{insert_zero_crossings, split_by_sign};
