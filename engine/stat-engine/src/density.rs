//! Kernel density estimation for distribution charts
//!
//! The curve is drawn over a player-count histogram, so it is scaled to the
//! histogram's vertical axis rather than normalised to unit area.

use std::f64::consts::PI;

use tracing::debug;

use crate::config::KdeConfig;
use crate::models::{DensityCurve, DensityPoint};

/// Vertical scale applied on top of `n * h`. Matches the curve's area to a
/// histogram whose buckets are `2h` wide.
pub const HISTOGRAM_PARITY_SCALE: f64 = 2.0;

/// Estimate a Gaussian-kernel density curve for `samples`.
///
/// Bandwidth is `range / sqrt(n)`, or `config.fallback_bandwidth` when all
/// samples are equal. The curve has `config.num_points` evenly spaced points
/// spanning `[min - h, max + h]` in ascending order. Samples must be finite.
pub fn kde(samples: &[f64], config: &KdeConfig) -> DensityCurve {
    if samples.is_empty() || config.num_points == 0 {
        return DensityCurve::empty();
    }

    let n = samples.len() as f64;
    let min = samples.iter().copied().fold(f64::INFINITY, f64::min);
    let max = samples.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let range = max - min;

    let bandwidth = if range > 0.0 && range.is_finite() {
        range / n.sqrt()
    } else {
        debug!(
            "Zero range over {} samples, using fallback bandwidth {}",
            samples.len(),
            config.fallback_bandwidth
        );
        config.fallback_bandwidth
    };

    let start = min - bandwidth;
    let end = max + bandwidth;
    let step = if config.num_points > 1 {
        (end - start) / (config.num_points - 1) as f64
    } else {
        0.0
    };

    let norm = bandwidth * (2.0 * PI).sqrt();
    let scale = n * bandwidth * HISTOGRAM_PARITY_SCALE;

    let points = (0..config.num_points)
        .map(|i| {
            let x = start + step * i as f64;
            let total: f64 = samples
                .iter()
                .map(|sample| {
                    let u = (x - sample) / bandwidth;
                    (-0.5 * u * u).exp() / norm
                })
                .sum();
            DensityPoint { x, y: total / n * scale }
        })
        .collect();

    DensityCurve { points, bandwidth }
}

/// Height of `curve` at `x`.
///
/// Looks at the computed points within `window` of `x` and linearly
/// interpolates between the two nearest. Returns 0 when none are in range.
pub fn density_at(curve: &DensityCurve, x: f64, window: f64) -> f64 {
    let mut nearby: Vec<&DensityPoint> =
        curve.points.iter().filter(|p| (p.x - x).abs() <= window).collect();

    if nearby.is_empty() {
        return 0.0;
    }

    nearby.sort_by(|a, b| {
        (a.x - x).abs().partial_cmp(&(b.x - x).abs()).unwrap_or(std::cmp::Ordering::Equal)
    });

    match nearby.as_slice() {
        [first, second, ..] if second.x != first.x => {
            let ratio = (x - first.x) / (second.x - first.x);
            (first.y + (second.y - first.y) * ratio).max(0.0)
        }
        [first, ..] => first.y,
        [] => 0.0,
    }
}
