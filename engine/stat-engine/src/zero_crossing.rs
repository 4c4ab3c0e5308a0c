//! Zero-crossing interpolation for signed game-flow signals
//!
//! A lead/deficit chart draws positive and negative segments in different
//! colours. Without a point on the axis between a +5 and a -3 the two
//! segments overshoot each other, so a synthetic `(fractional_index, 0)` point
//! is inserted at every strict sign change.

use crate::models::{FlowPoint, SignedSeries};

/// Fractional index where the segment from `(index, from)` to
/// `(index + 1, to)` crosses zero, if it strictly changes sign.
pub fn crossing_index(from: f64, to: f64, index: usize) -> Option<f64> {
    (from * to < 0.0).then(|| index as f64 + from.abs() / (to - from).abs())
}

/// Index the series and insert a zero point after every strict sign change.
///
/// Exact zeros are not crossings. The output has one extra point per sign
/// change and stays in ascending index order.
pub fn insert_zero_crossings(series: &[f64]) -> Vec<FlowPoint> {
    let mut points = Vec::with_capacity(series.len() + series.len() / 2);

    for (i, value) in series.iter().enumerate() {
        points.push(FlowPoint::new(i as f64, *value));
        if let Some(next) = series.get(i + 1) {
            if let Some(index) = crossing_index(*value, *next, i) {
                points.push(FlowPoint::new(index, 0.0));
            }
        }
    }

    points
}

/// Split points into a positive mask (`>= 0`) and a negative mask (`<= 0`).
///
/// Zero points appear in both masks, which joins the two coloured series at
/// the axis.
pub fn split_by_sign(points: &[FlowPoint]) -> SignedSeries {
    SignedSeries {
        positive: points.iter().map(|p| (p.value >= 0.0).then_some(p.value)).collect(),
        negative: points.iter().map(|p| (p.value <= 0.0).then_some(p.value)).collect(),
    }
}
