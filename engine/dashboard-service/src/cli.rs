//! # Command Line Interface
//!
//! Builds one dashboard view and prints it as JSON on stdout.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use serde::Serialize;
use stat_engine::StatCategory;

use crate::service::DashboardService;
use crate::source::StatSource;

/// Player statistics dashboard
#[derive(Parser)]
#[command(name = "stat-dashboard")]
#[command(about = "Build player statistics dashboard views as JSON")]
pub struct Cli {
    /// Path to a TOML configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Path to the JSON dataset export, overriding the configured one
    #[arg(short, long)]
    pub dataset: Option<PathBuf>,

    /// Command to execute
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// League distribution of a stat with a team's players highlighted
    Distribution {
        /// Stat key, e.g. FG3_PCT
        stat: StatCategory,
        /// Team abbreviation to highlight
        #[arg(long)]
        team: Option<String>,
    },
    /// A player's league percentiles
    Percentiles {
        player: String,
        /// Comma separated stat keys; the standard profile when omitted
        #[arg(long, value_delimiter = ',')]
        stats: Vec<StatCategory>,
    },
    /// Season progress toward records
    Record { player: String, stat: StatCategory },
    /// Score margin across a game
    GameFlow { game_id: String },
    /// Recent averages against the season average
    Form { player: String, stat: StatCategory },
    /// Career totals projected to age 25 against the age-based records
    Age { player: String },
    /// Season-by-season values with the league average
    Career { player: String, stat: StatCategory },
}

/// CLI handler
pub struct CliHandler<S: StatSource> {
    service: DashboardService<S>,
}

impl<S: StatSource> CliHandler<S> {
    pub fn new(service: DashboardService<S>) -> Self {
        Self { service }
    }

    /// Handle CLI commands
    pub async fn handle_command(&self, command: Commands) -> Result<()> {
        let output = self.render(command).await?;
        println!("{output}");
        Ok(())
    }

    /// Build the view for `command` as pretty-printed JSON
    pub async fn render(&self, command: Commands) -> Result<String> {
        match command {
            Commands::Distribution { stat, team } => {
                to_json(&self.service.distribution(stat, team.as_deref()).await?)
            }
            Commands::Percentiles { player, stats } => {
                let stats = if stats.is_empty() { StatCategory::PROFILE.to_vec() } else { stats };
                to_json(&self.service.percentile_profile(&player, &stats).await?)
            }
            Commands::Record { player, stat } => {
                to_json(&self.service.record_tracker(&player, stat).await?)
            }
            Commands::GameFlow { game_id } => to_json(&self.service.game_flow(&game_id).await?),
            Commands::Form { player, stat } => {
                to_json(&self.service.recent_form(&player, stat).await?)
            }
            Commands::Age { player } => to_json(&self.service.age_tracker(&player).await?),
            Commands::Career { player, stat } => {
                to_json(&self.service.career_progression(&player, stat).await?)
            }
        }
    }
}

fn to_json<T: Serialize>(view: &T) -> Result<String> {
    Ok(serde_json::to_string_pretty(view)?)
}
