//! # Dashboard Service
//!
//! Builds chart views by pulling rows from a [`StatSource`] and running them
//! through the stat engine.

use stat_engine::{
    accumulate, bucket_width_for, density_at, histogram, insert_zero_crossings, kde, on_track,
    percentiles, project, rank_of, record_progress, required_per_game, rolling_average,
    split_by_sign, top_minutes_average, top_record, trend, CareerStat, EngineConfig, RankedRecord,
    StatCategory, StatSample,
};
use tracing::{debug, info};

use crate::error::{DashboardError, Result};
use crate::models::{PlayByPlay, SeasonLine};
use crate::source::StatSource;
use crate::views::{
    AgeMilestone, AgeTrackerView, CareerProgressionView, CareerSeasonPoint, DistributionView,
    FormWindow, GameFlowView, HighlightedPlayer, PercentileEntry, PercentileProfile,
    RecentFormView, RecordMilestone, RecordTrackerView,
};

/// View builder over a data source
pub struct DashboardService<S: StatSource> {
    source: S,
    config: EngineConfig,
}

impl<S: StatSource> DashboardService<S> {
    /// Create a new dashboard service, rejecting an unusable engine config
    pub fn new(source: S, config: EngineConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { source, config })
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Season lines that pass the minutes filter and have a value for `stat`
    async fn qualified_lines(&self, stat: StatCategory) -> Result<Vec<SeasonLine>> {
        let min_minutes = self.config.population.min_total_minutes;
        let lines: Vec<SeasonLine> = self
            .source
            .season_lines()
            .await?
            .into_iter()
            .filter(|line| line.total_minutes() >= min_minutes && line.stat(stat).is_some())
            .collect();

        debug!("{} players qualify for {} (min {} minutes)", lines.len(), stat, min_minutes);
        Ok(lines)
    }

    /// League distribution of `stat`, highlighting one team's players
    pub async fn distribution(
        &self,
        stat: StatCategory,
        highlight_team: Option<&str>,
    ) -> Result<DistributionView> {
        let lines = self.qualified_lines(stat).await?;
        if lines.is_empty() {
            return Err(DashboardError::EmptyPopulation(stat));
        }

        let samples: Vec<StatSample> = lines
            .iter()
            .filter_map(|line| {
                line.stat(stat).map(|value| {
                    StatSample::new(&line.player_name, value).with_weight(line.total_minutes())
                })
            })
            .collect();
        let values = StatSample::values(&samples);

        let curve = kde(&values, &self.config.kde);
        let bucket_width = bucket_width_for(&values, self.config.histogram.bucket_count);
        // Zero-range populations collapse to a single bucket
        let buckets = histogram(&samples, bucket_width.unwrap_or(0.0));

        let team_lines: Vec<&SeasonLine> = match highlight_team {
            Some(team) => lines.iter().filter(|line| line.team_abbreviation == team).collect(),
            None => Vec::new(),
        };
        let team_values: Vec<f64> = team_lines.iter().filter_map(|line| line.stat(stat)).collect();
        let ranks = percentiles(&values, &team_values, stat.is_inverted());

        let highlighted = team_lines
            .iter()
            .zip(team_values.iter().zip(ranks))
            .map(|(line, (value, percentile))| HighlightedPlayer {
                player_name: line.player_name.clone(),
                value: *value,
                display: stat.format_value(*value),
                density: density_at(&curve, *value, self.config.kde.lookup_window),
                percentile,
                total_minutes: line.total_minutes(),
            })
            .collect();

        info!(
            "Built {} distribution: {} players, {} curve points, {} buckets",
            stat,
            samples.len(),
            curve.len(),
            buckets.len()
        );

        Ok(DistributionView {
            stat,
            label: stat.label(),
            population_size: samples.len(),
            curve,
            bucket_width,
            histogram: buckets,
            highlighted,
        })
    }

    /// A player's league percentile in each of `stats`.
    ///
    /// Stats the player has no value for are skipped. The player does not
    /// need to meet the minutes filter to be ranked against those who do.
    pub async fn percentile_profile(
        &self,
        player: &str,
        stats: &[StatCategory],
    ) -> Result<PercentileProfile> {
        let lines = self.source.season_lines().await?;
        let player_line = lines
            .iter()
            .find(|line| line.player_name == player)
            .ok_or_else(|| DashboardError::PlayerNotFound(player.to_string()))?;

        let min_minutes = self.config.population.min_total_minutes;
        let qualified: Vec<&SeasonLine> =
            lines.iter().filter(|line| line.total_minutes() >= min_minutes).collect();

        let entries = stats
            .iter()
            .filter_map(|stat| {
                let value = player_line.stat(*stat)?;
                let population: Vec<f64> =
                    qualified.iter().filter_map(|line| line.stat(*stat)).collect();
                Some(PercentileEntry {
                    stat: *stat,
                    label: stat.label(),
                    value,
                    display: stat.format_value(value),
                    percentile: stat.percentile(&population, value),
                    population_size: population.len(),
                })
            })
            .collect();

        Ok(PercentileProfile {
            player_name: player.to_string(),
            population_size: qualified.len(),
            entries,
        })
    }

    /// Cumulative progress on `stat`, projected to season end and measured
    /// against the personal, franchise and league records
    pub async fn record_tracker(&self, player: &str, stat: StatCategory) -> Result<RecordTrackerView> {
        let record = self
            .source
            .record_lines(player)
            .await?
            .into_iter()
            .find(|line| line.stat == stat)
            .ok_or_else(|| DashboardError::RecordNotFound { player: player.to_string(), stat })?;

        let per_game: Vec<f64> =
            self.source.game_log(player).await?.iter().map(|game| game.stat(stat)).collect();
        let observed = accumulate(&per_game);

        let pace = record.pace();
        let series = project(&observed, &pace);
        let projected = pace.projected_total();

        debug!(
            "{} {}: {} logged games, {} played, projected {:.1}",
            player,
            stat,
            observed.len(),
            pace.games_played,
            projected
        );

        let milestone = |name: &'static str, holder: &str, value: f64| RecordMilestone {
            name,
            holder: holder.to_string(),
            record: value,
            progress: record_progress(pace.current_total, value),
            on_track: on_track(projected, value),
        };

        let milestones = vec![
            milestone("Personal Best", player, record.personal_record),
            milestone("Franchise Record", record.franchise_player.as_str(), record.franchise_record),
            milestone("NBA Record", record.nba_player.trim_end_matches('*'), record.nba_record),
        ];

        Ok(RecordTrackerView {
            player_name: player.to_string(),
            stat,
            label: stat.label(),
            pace,
            series,
            milestones,
        })
    }

    /// Away-team score margin across a game with zero crossings inserted
    pub async fn game_flow(&self, game_id: &str) -> Result<GameFlowView> {
        let mut plays = self.source.play_by_play(game_id).await?;
        if plays.is_empty() {
            return Err(DashboardError::GameNotFound(game_id.to_string()));
        }
        plays.sort_by_key(|play| play.event_num);

        let scoring: Vec<&PlayByPlay> = plays.iter().filter(|play| play.is_scoring()).collect();
        let scoring_plays_only = !scoring.is_empty();
        let used: Vec<&PlayByPlay> =
            if scoring_plays_only { scoring } else { plays.iter().collect() };

        let differentials: Vec<f64> = used.iter().map(|play| play.differential()).collect();
        let points = insert_zero_crossings(&differentials);
        let labels = points.iter().map(|point| used[point.source_index()].label()).collect();
        let signed = split_by_sign(&points);

        info!(
            "Game {} flow: {} plays, {} points ({} lead changes)",
            game_id,
            used.len(),
            points.len(),
            points.len() - used.len()
        );

        Ok(GameFlowView { game_id: game_id.to_string(), scoring_plays_only, points, labels, signed })
    }

    /// Short and long recent averages of `stat` against the season average
    pub async fn recent_form(&self, player: &str, stat: StatCategory) -> Result<RecentFormView> {
        let games = self.source.game_log(player).await?;
        let values: Vec<f64> = games.iter().map(|game| game.stat(stat)).collect();

        let season_line = self
            .source
            .season_lines()
            .await?
            .into_iter()
            .find(|line| line.player_name == player);

        let season_average = match season_line.as_ref().and_then(|line| line.stat(stat)) {
            Some(value) => value,
            None => rolling_average(&values, values.len())
                .ok_or_else(|| DashboardError::PlayerNotFound(player.to_string()))?,
        };

        let threshold = self.config.trend.threshold;
        let windows = [self.config.trend.short_window, self.config.trend.long_window]
            .into_iter()
            .filter_map(|window| {
                let average = rolling_average(&values, window)?;
                Some(FormWindow {
                    games: window.min(values.len()),
                    average,
                    display: stat.format_value(average),
                    trend: trend(average, season_average, threshold),
                })
            })
            .collect();

        Ok(RecentFormView { player_name: player.to_string(), stat, season_average, windows })
    }

    /// Career totals projected to age 25 against the age-based records
    pub async fn age_tracker(&self, player: &str) -> Result<AgeTrackerView> {
        let career = self
            .source
            .career_line(player)
            .await?
            .ok_or_else(|| DashboardError::PlayerNotFound(player.to_string()))?;
        let records = self.source.age_records().await?;

        let milestones: Vec<AgeMilestone> = CareerStat::ALL
            .into_iter()
            .filter_map(|stat| {
                let ranking: Vec<RankedRecord> =
                    records.iter().filter(|r| r.stat == stat).map(|r| r.ranked()).collect();
                let top = top_record(&ranking)?.clone();

                let pace = career.pace(stat);
                let projected = pace.projected_total();
                Some(AgeMilestone {
                    stat,
                    label: stat.label(),
                    current: pace.current_total,
                    projected,
                    rank_position: rank_of(&ranking, player),
                    progress: record_progress(pace.current_total, top.value),
                    on_track: on_track(projected, top.value),
                    needed_per_game: required_per_game(
                        pace.current_total,
                        top.value,
                        pace.games_remaining,
                    ),
                    top_record: top,
                })
            })
            .collect();

        info!(
            "Age tracker for {}: {} milestones, {} games until 25",
            player,
            milestones.len(),
            career.games_remaining_until_25
        );

        Ok(AgeTrackerView {
            player_name: player.to_string(),
            birthdate: career.birthdate,
            current_age: career.current_age,
            games_remaining: career.games_remaining_until_25,
            milestones,
        })
    }

    /// A player's value per season next to the league average of the
    /// season's most-played players
    pub async fn career_progression(
        &self,
        player: &str,
        stat: StatCategory,
    ) -> Result<CareerProgressionView> {
        let seasons = self.source.career_seasons(player).await?;
        if seasons.is_empty() {
            return Err(DashboardError::PlayerNotFound(player.to_string()));
        }

        let limit = self.config.population.league_average_limit;
        let mut points = Vec::with_capacity(seasons.len());
        for season in seasons {
            let league: Vec<StatSample> = self
                .source
                .league_season(season.year)
                .await?
                .iter()
                .filter_map(|line| {
                    let value = line.stat(stat)?;
                    let sample = StatSample::new(&line.player_name, value);
                    Some(match line.minutes_played {
                        Some(minutes) => sample.with_weight(minutes),
                        None => sample,
                    })
                })
                .collect();

            let league_average = top_minutes_average(&league, limit);
            debug!(
                "{} {} league average over {} players: {:?}",
                season.year,
                stat,
                league.len(),
                league_average
            );

            points.push(CareerSeasonPoint {
                year: season.year,
                value: season.stat(stat),
                team: season.team,
                games: season.games,
                minutes_played: season.minutes_played,
                league_average,
            });
        }

        Ok(CareerProgressionView {
            player_name: player.to_string(),
            stat,
            label: stat.label(),
            seasons: points,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{
        AgeRecordLine, CareerLine, CareerSeasonLine, Dataset, GameLogEntry, RecordLine,
    };
    use crate::source::DatasetSource;
    use chrono::NaiveDate;
    use stat_engine::{GameLogPoint, KdeConfig, Trend};
    use std::collections::BTreeMap;

    fn line(name: &str, team: &str, games: u32, mpg: f64, stats: &[(StatCategory, f64)]) -> SeasonLine {
        SeasonLine {
            player_name: name.to_string(),
            team_abbreviation: team.to_string(),
            games_played: games,
            minutes_per_game: mpg,
            stats: stats.iter().copied().collect::<BTreeMap<_, _>>(),
        }
    }

    fn game(name: &str, day: u32, pts: f64) -> GameLogEntry {
        GameLogEntry {
            player_name: name.to_string(),
            game_date: NaiveDate::from_ymd_opt(2024, 11, day).unwrap(),
            stats: [(StatCategory::Pts, pts)].into_iter().collect(),
        }
    }

    fn play(event_num: u32, home: i32, away: i32, scoring: bool) -> PlayByPlay {
        PlayByPlay {
            game_id: "0022400100".to_string(),
            event_num,
            period: 1 + event_num / 10,
            clock: format!("{:02}:00", 12 - event_num % 10),
            description: None,
            is_scoring_play: scoring,
            home_score: home,
            away_score: away,
        }
    }

    fn dataset() -> Dataset {
        use StatCategory::*;
        Dataset {
            season_lines: vec![
                line("Anthony Edwards", "MIN", 79, 36.3, &[(Pts, 27.6), (Fg3Pct, 0.40), (Tov, 3.2)]),
                line("Julius Randle", "MIN", 70, 32.0, &[(Pts, 18.7), (Fg3Pct, 0.35), (Tov, 2.5)]),
                line("Jalen Brunson", "NYK", 77, 35.4, &[(Pts, 28.7), (Fg3Pct, 0.45), (Tov, 2.4)]),
                line("Nikola Jokic", "DEN", 70, 36.7, &[(Pts, 29.6), (Fg3Pct, 0.30), (Tov, 3.3)]),
                line("Derrick White", "BOS", 76, 32.0, &[(Pts, 16.4), (Fg3Pct, 0.50), (Tov, 1.0)]),
                // Below the minutes filter
                line("Two Way Guard", "MIN", 10, 8.0, &[(Pts, 3.0), (Fg3Pct, 0.20), (Tov, 0.5)]),
            ],
            game_logs: vec![
                game("Anthony Edwards", 3, 30.0),
                game("Anthony Edwards", 1, 20.0),
                game("Anthony Edwards", 5, 40.0),
                game("Julius Randle", 1, 18.0),
            ],
            record_lines: vec![RecordLine {
                player_name: "Anthony Edwards".to_string(),
                stat: StatCategory::Pts,
                games_played: 5,
                games_remaining: 77,
                current: 140.0,
                per_game: 28.0,
                personal_record: 2180.0,
                franchise_record: 2461.0,
                franchise_player: "Kevin Garnett".to_string(),
                nba_record: 4029.0,
                nba_player: "Wilt Chamberlain*".to_string(),
            }],
            play_by_play: vec![
                play(3, 2, 5, true),
                play(1, 0, 0, false),
                play(2, 2, 0, true),
                play(4, 9, 5, true),
            ],
            career_lines: vec![CareerLine {
                player_name: "Anthony Edwards".to_string(),
                birthdate: NaiveDate::from_ymd_opt(2001, 8, 5).unwrap(),
                current_age: 23,
                games_remaining_until_25: 100,
                career_games_played: 317,
                totals: [
                    (CareerStat::Points, 7605.0),
                    (CareerStat::Assists, 1334.0),
                    (CareerStat::Rebounds, 1700.0),
                ]
                .into_iter()
                .collect(),
                per_game: [(Pts, 27.6)].into_iter().collect(),
            }],
            age_records: vec![
                age_record(CareerStat::Points, 9, "Anthony Edwards", 7605.0),
                age_record(CareerStat::Points, 1, "LeBron James", 13282.0),
                // No rank-1 row, so assists are left out
                age_record(CareerStat::Assists, 2, "Chris Paul", 3500.0),
                age_record(CareerStat::Rebounds, 1, "Dwight Howard", 5000.0),
            ],
            season_history: vec![
                season(2024, "Anthony Edwards", Some(27.6), Some(2867.0)),
                season(2023, "Anthony Edwards", Some(25.9), Some(2842.0)),
                season(2023, "Starter", Some(20.0), Some(3000.0)),
                season(2023, "Bench", Some(10.0), Some(500.0)),
                season(2023, "No Points", None, Some(3100.0)),
                season(2024, "Unknown Minutes", Some(15.0), None),
            ],
            ..Default::default()
        }
    }

    fn age_record(stat: CareerStat, rank: u32, name: &str, value: f64) -> AgeRecordLine {
        AgeRecordLine {
            stat,
            rank_position: rank,
            player_name: name.to_string(),
            stat_value: value,
        }
    }

    fn season(year: i32, name: &str, pts: Option<f64>, minutes: Option<f64>) -> CareerSeasonLine {
        CareerSeasonLine {
            player_name: name.to_string(),
            year,
            team: Some("MIN".to_string()),
            games: Some(79),
            minutes_played: minutes,
            stats: pts.map(|v| (StatCategory::Pts, v)).into_iter().collect(),
        }
    }

    fn service() -> DashboardService<DatasetSource> {
        DashboardService::new(DatasetSource::from_dataset(dataset()), EngineConfig::default()).unwrap()
    }

    #[tokio::test]
    async fn test_rejects_invalid_config() {
        let config = EngineConfig { kde: KdeConfig::with_points(0), ..Default::default() };
        let result = DashboardService::new(DatasetSource::default(), config);
        assert!(matches!(result, Err(DashboardError::Engine(_))));
    }

    #[tokio::test]
    async fn test_distribution_filters_and_highlights() {
        let view = service().distribution(StatCategory::Fg3Pct, Some("MIN")).await.unwrap();

        assert_eq!(view.population_size, 5);
        assert_eq!(view.curve.len(), 200);
        let total: usize = view.histogram.iter().map(|b| b.count).sum();
        assert_eq!(total, 5);
        assert!((view.bucket_width.unwrap() - 0.01).abs() < 1e-12);

        let names: Vec<&str> = view.highlighted.iter().map(|p| p.player_name.as_str()).collect();
        assert_eq!(names, vec!["Anthony Edwards", "Julius Randle"]);

        let edwards = &view.highlighted[0];
        assert_eq!(edwards.display, "40.0%");
        assert!((edwards.percentile - 0.5).abs() < 1e-12);
        assert!(edwards.density > 0.0);
    }

    #[tokio::test]
    async fn test_distribution_empty_population() {
        let result = service().distribution(StatCategory::Pace, None).await;
        assert!(matches!(result, Err(DashboardError::EmptyPopulation(StatCategory::Pace))));
    }

    #[tokio::test]
    async fn test_percentile_profile_inverts_turnovers() {
        let profile = service()
            .percentile_profile("Anthony Edwards", &[StatCategory::Pts, StatCategory::Tov, StatCategory::Reb])
            .await
            .unwrap();

        assert_eq!(profile.population_size, 5);
        // Rebounds are missing from the line and skipped
        assert_eq!(profile.entries.len(), 2);

        let pts = &profile.entries[0];
        assert!((pts.percentile - 0.5).abs() < 1e-12);

        // Turnovers 1.0, 2.4, 2.5, 3.2, 3.3: three below 3.2, inverted
        let tov = &profile.entries[1];
        assert!((tov.percentile - 0.25).abs() < 1e-12);
        assert_eq!(tov.display, "3.2");
    }

    #[tokio::test]
    async fn test_percentile_entries_report_their_own_population() {
        let mut data = dataset();
        // Qualifies on minutes but has no points or turnovers
        data.season_lines.push(line("Rudy Gobert", "MIN", 76, 34.1, &[(StatCategory::Reb, 12.9)]));
        let service =
            DashboardService::new(DatasetSource::from_dataset(data), EngineConfig::default()).unwrap();

        let profile = service
            .percentile_profile("Anthony Edwards", &[StatCategory::Pts, StatCategory::Tov])
            .await
            .unwrap();

        assert_eq!(profile.population_size, 6);
        assert!(profile.entries.iter().all(|entry| entry.population_size == 5));
        assert!((profile.entries[0].percentile - 0.5).abs() < 1e-12);
    }

    #[tokio::test]
    async fn test_percentile_profile_unknown_player() {
        let result = service().percentile_profile("Nobody", &StatCategory::PROFILE).await;
        assert!(matches!(result, Err(DashboardError::PlayerNotFound(_))));
    }

    #[tokio::test]
    async fn test_record_tracker_fills_gap_and_projects() {
        let view = service().record_tracker("Anthony Edwards", StatCategory::Pts).await.unwrap();

        // Log holds 3 games (20, 30, 40 -> 90); record line says 140 after 5
        assert_eq!(
            view.series.filled,
            vec![
                GameLogPoint::new(1, 20.0),
                GameLogPoint::new(2, 50.0),
                GameLogPoint::new(3, 90.0),
                GameLogPoint::new(4, 115.0),
                GameLogPoint::new(5, 140.0),
            ]
        );
        assert_eq!(view.series.projected_endpoint, GameLogPoint::new(82, 140.0 + 28.0 * 77.0));

        assert_eq!(view.milestones.len(), 3);
        let personal = &view.milestones[0];
        assert!(personal.on_track);
        assert!((personal.progress - 140.0 / 2180.0).abs() < 1e-12);

        let nba = &view.milestones[2];
        assert_eq!(nba.holder, "Wilt Chamberlain");
        assert!(!nba.on_track);
    }

    #[tokio::test]
    async fn test_record_tracker_missing_line() {
        let result = service().record_tracker("Anthony Edwards", StatCategory::Ast).await;
        assert!(matches!(result, Err(DashboardError::RecordNotFound { stat: StatCategory::Ast, .. })));
    }

    #[tokio::test]
    async fn test_game_flow_uses_scoring_plays() {
        let view = service().game_flow("0022400100").await.unwrap();

        assert!(view.scoring_plays_only);
        // Differentials -2, 3, -4 cross zero twice
        assert_eq!(view.points.len(), 5);
        assert!((view.points[1].index - 0.4).abs() < 1e-12);
        assert_eq!(view.labels.len(), view.points.len());
        assert_eq!(view.labels[0], view.labels[1]);
        assert_eq!(view.signed.positive, vec![None, Some(0.0), Some(3.0), Some(0.0), None]);
    }

    #[tokio::test]
    async fn test_game_flow_unknown_game() {
        let result = service().game_flow("missing").await;
        assert!(matches!(result, Err(DashboardError::GameNotFound(_))));
    }

    #[tokio::test]
    async fn test_recent_form() {
        let view = service().recent_form("Anthony Edwards", StatCategory::Pts).await.unwrap();

        assert_eq!(view.season_average, 27.6);
        assert_eq!(view.windows.len(), 2);
        // Only three games logged, so both windows average all of them
        assert_eq!(view.windows[0].games, 3);
        assert_eq!(view.windows[0].average, 30.0);
        // 30.0 against 27.6 is under the 10% threshold
        assert_eq!(view.windows[0].trend, Trend::Steady);
        assert_eq!(view.windows[1].games, 3);
    }

    #[tokio::test]
    async fn test_recent_form_falls_back_to_log_average() {
        let view = service().recent_form("Julius Randle", StatCategory::Stl).await.unwrap();

        // No STL on the season line or in the log; missing box score values count as 0
        assert_eq!(view.season_average, 0.0);
        assert_eq!(view.windows[0].trend, Trend::Steady);
    }

    #[tokio::test]
    async fn test_recent_form_unknown_player() {
        let result = service().recent_form("Nobody", StatCategory::Pts).await;
        assert!(matches!(result, Err(DashboardError::PlayerNotFound(_))));
    }

    #[tokio::test]
    async fn test_age_tracker_projects_to_cutoff() {
        let view = service().age_tracker("Anthony Edwards").await.unwrap();

        assert_eq!(view.current_age, 23);
        assert_eq!(view.games_remaining, 100);
        let stats: Vec<CareerStat> = view.milestones.iter().map(|m| m.stat).collect();
        assert_eq!(stats, vec![CareerStat::Points, CareerStat::Rebounds]);

        let points = &view.milestones[0];
        assert_eq!(points.top_record.holder, "LeBron James");
        assert_eq!(points.rank_position, Some(9));
        assert!((points.projected - (7605.0 + 27.6 * 100.0)).abs() < 1e-9);
        assert!(!points.on_track);
        assert!((points.progress - 7605.0 / 13282.0).abs() < 1e-12);
        assert!((points.needed_per_game.unwrap() - 56.77).abs() < 1e-9);

        // No season rebound average, so the career rate carries the projection
        let rebounds = &view.milestones[1];
        assert_eq!(rebounds.rank_position, None);
        assert!((rebounds.projected - (1700.0 + 1700.0 / 317.0 * 100.0)).abs() < 1e-9);
    }

    #[tokio::test]
    async fn test_age_tracker_unknown_player() {
        let result = service().age_tracker("Julius Randle").await;
        assert!(matches!(result, Err(DashboardError::PlayerNotFound(_))));
    }

    #[tokio::test]
    async fn test_career_progression_league_average() {
        let mut config = EngineConfig::default();
        config.population.league_average_limit = 2;
        let service =
            DashboardService::new(DatasetSource::from_dataset(dataset()), config).unwrap();

        let view = service.career_progression("Anthony Edwards", StatCategory::Pts).await.unwrap();
        let years: Vec<i32> = view.seasons.iter().map(|s| s.year).collect();
        assert_eq!(years, vec![2023, 2024]);

        // 2023: the two most-played players with points are Starter and Edwards
        let first = &view.seasons[0];
        assert_eq!(first.value, Some(25.9));
        assert!((first.league_average.unwrap() - (20.0 + 25.9) / 2.0).abs() < 1e-12);

        // 2024: a player with no minutes recorded sorts after Edwards
        let second = &view.seasons[1];
        assert!((second.league_average.unwrap() - (27.6 + 15.0) / 2.0).abs() < 1e-12);
    }

    #[tokio::test]
    async fn test_career_progression_unknown_player() {
        let result = service().career_progression("Nobody", StatCategory::Pts).await;
        assert!(matches!(result, Err(DashboardError::PlayerNotFound(_))));
    }
}
