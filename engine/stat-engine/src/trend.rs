//! Recent-form indicators for stat cards

use serde::{Deserialize, Serialize};

/// Direction of recent form against the season average
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Trend {
    Up,
    Down,
    Steady,
}

/// Compare a recent average with the season average.
///
/// Trends only when `|recent - season| / season` exceeds `threshold`. A zero
/// season average has nothing to compare against and reads as steady.
pub fn trend(recent: f64, season: f64, threshold: f64) -> Trend {
    if season == 0.0 || !season.is_finite() || !recent.is_finite() {
        return Trend::Steady;
    }

    let relative = (recent - season).abs() / season.abs();
    if relative <= threshold {
        Trend::Steady
    } else if recent > season {
        Trend::Up
    } else {
        Trend::Down
    }
}

/// Mean of the last `window` values, or of all values when fewer exist
pub fn rolling_average(values: &[f64], window: usize) -> Option<f64> {
    if values.is_empty() || window == 0 {
        return None;
    }

    let tail = &values[values.len().saturating_sub(window)..];
    Some(tail.iter().sum::<f64>() / tail.len() as f64)
}
