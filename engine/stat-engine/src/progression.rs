//! Season progression and record projection
//!
//! Game logs and season aggregates come from different tables and are not
//! always in sync: the aggregate may already include games the log has not
//! caught up on. The projector treats the aggregate as authoritative,
//! bridges the gap with straight-line points, then extends a constant-rate
//! projection to the last game of the season.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::models::{GameLogPoint, ProjectionSeries};

/// Authoritative season standing for one statistic
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SeasonPace {
    /// Games played so far
    pub games_played: u32,

    /// Season total so far
    pub current_total: f64,

    /// Season per-game average used for the projection
    pub per_game: f64,

    /// Games left on the schedule
    pub games_remaining: u32,
}

impl SeasonPace {
    pub fn new(games_played: u32, current_total: f64, per_game: f64, games_remaining: u32) -> Self {
        Self { games_played, current_total, per_game, games_remaining }
    }

    /// Pace with the per-game rate derived from the totals.
    /// A player with no games counts as one game played for the rate.
    pub fn from_totals(games_played: u32, current_total: f64, games_remaining: u32) -> Self {
        let per_game = current_total / games_played.max(1) as f64;
        Self::new(games_played, current_total, per_game, games_remaining)
    }

    /// Games in the full season
    pub fn total_games(&self) -> u32 {
        self.games_played.saturating_add(self.games_remaining)
    }

    /// Season total if the per-game average holds
    pub fn projected_total(&self) -> f64 {
        self.current_total + self.per_game * self.games_remaining as f64
    }
}

/// Running totals of a chronological per-game log, numbered from game 1
pub fn accumulate(per_game: &[f64]) -> Vec<GameLogPoint> {
    per_game
        .iter()
        .scan(0.0, |total, value| {
            *total += value;
            Some(*total)
        })
        .enumerate()
        .map(|(i, total)| GameLogPoint::new(i as u32 + 1, total))
        .collect()
}

/// Reconcile `observed` with `pace` and project to the end of the season.
///
/// When `pace.games_played` is past the last observed game, one point per
/// missing game is appended on a straight line ending at
/// `pace.current_total`. An empty series becomes the single current point.
/// Observed points are otherwise returned unchanged.
pub fn project(observed: &[GameLogPoint], pace: &SeasonPace) -> ProjectionSeries {
    let mut filled = observed.to_vec();

    match observed.last() {
        None => filled.push(GameLogPoint::new(pace.games_played, pace.current_total)),
        Some(last) if pace.games_played > last.game_index => {
            let gap = pace.games_played - last.game_index;
            let value_per_game = (pace.current_total - last.cumulative_value) / gap as f64;
            debug!(
                "Filling {} games after game {} at {:.2} per game",
                gap, last.game_index, value_per_game
            );

            for step in 1..gap {
                filled.push(GameLogPoint::new(
                    last.game_index + step,
                    last.cumulative_value + value_per_game * step as f64,
                ));
            }
            filled.push(GameLogPoint::new(pace.games_played, pace.current_total));
        }
        Some(_) => {}
    }

    ProjectionSeries {
        filled,
        projected_endpoint: GameLogPoint::new(pace.total_games(), pace.projected_total()),
    }
}

/// Share of `record` reached by `current`, capped to `[0, 1]`.
///
/// A non-positive record counts as already reached.
pub fn record_progress(current: f64, record: f64) -> f64 {
    if record <= 0.0 {
        return 1.0;
    }
    (current / record).clamp(0.0, 1.0)
}

/// Whether a projected total meets or beats `record`
pub fn on_track(projected: f64, record: f64) -> bool {
    projected >= record
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accumulate() {
        let points = accumulate(&[25.0, 31.0, 18.0]);
        assert_eq!(
            points,
            vec![GameLogPoint::new(1, 25.0), GameLogPoint::new(2, 56.0), GameLogPoint::new(3, 74.0)]
        );
        assert!(accumulate(&[]).is_empty());
    }

    #[test]
    fn test_gap_fill() {
        let observed = vec![GameLogPoint::new(10, 100.0)];
        let pace = SeasonPace::new(12, 112.0, 9.0, 5);
        let series = project(&observed, &pace);

        assert_eq!(
            series.filled,
            vec![
                GameLogPoint::new(10, 100.0),
                GameLogPoint::new(11, 106.0),
                GameLogPoint::new(12, 112.0),
            ]
        );
        assert_eq!(series.projected_endpoint, GameLogPoint::new(17, 112.0 + 9.0 * 5.0));
    }

    #[test]
    fn test_gap_fill_ends_on_authoritative_total() {
        let observed = accumulate(&[27.0, 22.0, 35.0]);
        let pace = SeasonPace::new(6, 170.0, 28.3, 76);
        let series = project(&observed, &pace);

        assert_eq!(series.filled.len(), 6);
        assert_eq!(series.filled.last(), Some(&GameLogPoint::new(6, 170.0)));
        assert!(series.filled.windows(2).all(|w| w[1].game_index == w[0].game_index + 1));
        assert_eq!(series.projected_endpoint.game_index, 82);
    }

    #[test]
    fn test_empty_observed_uses_current_point() {
        let pace = SeasonPace::new(40, 1030.0, 25.75, 42);
        let series = project(&[], &pace);
        assert_eq!(series.filled, vec![GameLogPoint::new(40, 1030.0)]);
        assert_eq!(series.projected_endpoint, GameLogPoint::new(82, 1030.0 + 25.75 * 42.0));
    }

    #[test]
    fn test_up_to_date_series_is_unchanged() {
        let observed = accumulate(&[10.0, 12.0]);
        let pace = SeasonPace::new(2, 22.0, 11.0, 0);
        let series = project(&observed, &pace);
        assert_eq!(series.filled, observed);
        assert_eq!(series.projected_endpoint, GameLogPoint::new(2, 22.0));
    }

    #[test]
    fn test_pace_from_totals() {
        let pace = SeasonPace::from_totals(317, 7605.0, 82);
        assert!((pace.per_game - 7605.0 / 317.0).abs() < 1e-12);
        assert!((pace.projected_total() - (7605.0 + 7605.0 / 317.0 * 82.0)).abs() < 1e-9);

        assert_eq!(SeasonPace::from_totals(0, 12.0, 10).per_game, 12.0);
    }

    #[test]
    fn test_total_games_saturates() {
        let pace = SeasonPace::new(u32::MAX - 1, 0.0, 1.0, 10);
        assert_eq!(pace.total_games(), u32::MAX);

        let series = project(&[], &pace);
        assert_eq!(series.projected_endpoint.game_index, u32::MAX);
    }

    #[test]
    fn test_record_progress() {
        assert!((record_progress(1500.0, 3000.0) - 0.5).abs() < f64::EPSILON);
        assert_eq!(record_progress(4100.0, 4029.0), 1.0);
        assert_eq!(record_progress(-5.0, 100.0), 0.0);
        assert_eq!(record_progress(10.0, 0.0), 1.0);
    }

    #[test]
    fn test_on_track() {
        let pace = SeasonPace::new(41, 1100.0, 26.8, 41);
        assert!(on_track(pace.projected_total(), 2198.0));
        assert!(!on_track(pace.projected_total(), 4029.0));
    }
}
