//! # Dashboard Service
//!
//! Turns exported player tables into chart-ready views: league distributions,
//! percentile profiles, record trackers, game flow, recent form, age-bound
//! career milestones and career progression.
//!
//! Data comes in through the [`StatSource`] trait; all statistics are
//! delegated to `stat_engine`.

pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod models;
pub mod service;
pub mod source;
pub mod views;

// Re-export main types for easy usage
pub use self::config::{DashboardConfig, DatasetConfig, LoggingConfig};
pub use error::{DashboardError, Result};
pub use logging::initialize_logging;
pub use models::{
    AgeRecordLine, CareerLine, CareerSeasonLine, Dataset, GameLogEntry, PlayByPlay, RecordLine,
    SeasonLine,
};
pub use service::DashboardService;
pub use source::{DatasetSource, StatSource};
pub use views::*;
