//! # Data Access
//!
//! The views never reach for a global client. They are handed a
//! [`StatSource`] and ask it for rows.

use std::path::Path;

use async_trait::async_trait;
use tracing::info;

use crate::error::Result;
use crate::models::{
    AgeRecordLine, CareerLine, CareerSeasonLine, Dataset, GameLogEntry, PlayByPlay, RecordLine,
    SeasonLine,
};

/// Read access to the dashboard's tables
#[async_trait]
pub trait StatSource: Send + Sync {
    /// Full-season per-game lines for every player
    async fn season_lines(&self) -> Result<Vec<SeasonLine>>;

    /// A player's game log in chronological order
    async fn game_log(&self, player: &str) -> Result<Vec<GameLogEntry>>;

    /// Record-tracker lines for a player, one per tracked stat
    async fn record_lines(&self, player: &str) -> Result<Vec<RecordLine>>;

    /// Play-by-play events of one game, in storage order
    async fn play_by_play(&self, game_id: &str) -> Result<Vec<PlayByPlay>>;

    /// Career-to-date line for a player, if one exists
    async fn career_line(&self, player: &str) -> Result<Option<CareerLine>>;

    /// Age-based rankings, ordered by stat then rank
    async fn age_records(&self) -> Result<Vec<AgeRecordLine>>;

    /// A player's season lines, oldest first
    async fn career_seasons(&self, player: &str) -> Result<Vec<CareerSeasonLine>>;

    /// Every player's line for one season
    async fn league_season(&self, year: i32) -> Result<Vec<CareerSeasonLine>>;
}

/// A [`StatSource`] over a dataset held in memory
#[derive(Debug, Clone, Default)]
pub struct DatasetSource {
    dataset: Dataset,
}

impl DatasetSource {
    /// Wrap an already loaded dataset
    pub fn from_dataset(dataset: Dataset) -> Self {
        Self { dataset }
    }

    /// Load a JSON dataset export from disk
    pub async fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        info!("Loading dataset from: {:?}", path.as_ref());

        let content = tokio::fs::read_to_string(&path).await?;
        let dataset: Dataset = serde_json::from_str(&content)?;

        info!(
            "Loaded {} season lines, {} game log entries, {} record lines, {} plays, {} career lines",
            dataset.season_lines.len(),
            dataset.game_logs.len(),
            dataset.record_lines.len(),
            dataset.play_by_play.len(),
            dataset.career_lines.len()
        );

        Ok(Self { dataset })
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }
}

#[async_trait]
impl StatSource for DatasetSource {
    async fn season_lines(&self) -> Result<Vec<SeasonLine>> {
        Ok(self.dataset.season_lines.clone())
    }

    async fn game_log(&self, player: &str) -> Result<Vec<GameLogEntry>> {
        let mut games: Vec<GameLogEntry> = self
            .dataset
            .game_logs
            .iter()
            .filter(|game| game.player_name == player)
            .cloned()
            .collect();
        games.sort_by_key(|game| game.game_date);
        Ok(games)
    }

    async fn record_lines(&self, player: &str) -> Result<Vec<RecordLine>> {
        Ok(self
            .dataset
            .record_lines
            .iter()
            .filter(|line| line.player_name == player)
            .cloned()
            .collect())
    }

    async fn play_by_play(&self, game_id: &str) -> Result<Vec<PlayByPlay>> {
        Ok(self
            .dataset
            .play_by_play
            .iter()
            .filter(|play| play.game_id == game_id)
            .cloned()
            .collect())
    }

    async fn career_line(&self, player: &str) -> Result<Option<CareerLine>> {
        Ok(self.dataset.career_lines.iter().find(|line| line.player_name == player).cloned())
    }

    async fn age_records(&self) -> Result<Vec<AgeRecordLine>> {
        let mut records = self.dataset.age_records.clone();
        records.sort_by_key(|record| (record.stat, record.rank_position));
        Ok(records)
    }

    async fn career_seasons(&self, player: &str) -> Result<Vec<CareerSeasonLine>> {
        let mut seasons: Vec<CareerSeasonLine> = self
            .dataset
            .season_history
            .iter()
            .filter(|line| line.player_name == player)
            .cloned()
            .collect();
        seasons.sort_by_key(|line| line.year);
        Ok(seasons)
    }

    async fn league_season(&self, year: i32) -> Result<Vec<CareerSeasonLine>> {
        Ok(self.dataset.season_history.iter().filter(|line| line.year == year).cloned().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use std::io::Write;

    #[tokio::test]
    async fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{
                "game_logs": [
                    {{ "player_name": "Anthony Edwards", "game_date": "2024-10-24", "stats": {{ "PTS": 37 }} }},
                    {{ "player_name": "Anthony Edwards", "game_date": "2024-10-22", "stats": {{ "PTS": 27 }} }},
                    {{ "player_name": "Julius Randle", "game_date": "2024-10-22", "stats": {{ "PTS": 20 }} }}
                ]
            }}"#
        )
        .unwrap();

        let source = DatasetSource::load(file.path()).await.unwrap();
        assert!(source.season_lines().await.unwrap().is_empty());

        let games = source.game_log("Anthony Edwards").await.unwrap();
        assert_eq!(games.len(), 2);
        assert_eq!(games[0].game_date, NaiveDate::from_ymd_opt(2024, 10, 22).unwrap());
        assert_eq!(games[1].game_date, NaiveDate::from_ymd_opt(2024, 10, 24).unwrap());
    }

    #[tokio::test]
    async fn test_load_missing_file() {
        let result = DatasetSource::load("/nonexistent/dashboard.json").await;
        assert!(matches!(result, Err(crate::error::DashboardError::Io(_))));
    }

    #[tokio::test]
    async fn test_load_rejects_unknown_stat_key() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{ "game_logs": [ {{ "player_name": "A", "game_date": "2024-10-22", "stats": {{ "POINTZ": 1 }} }} ] }}"#
        )
        .unwrap();

        let result = DatasetSource::load(file.path()).await;
        assert!(matches!(result, Err(crate::error::DashboardError::Serialization(_))));
    }
}
