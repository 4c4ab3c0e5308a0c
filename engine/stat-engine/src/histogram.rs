//! Equal-width histogram binning
//!
//! Buckets start at the population minimum. Each covers `[start, start + width)`
//! except the last, which also takes samples equal to its upper bound so the
//! population maximum always lands somewhere.

use tracing::{debug, trace};

use crate::models::{HistogramBucket, StatSample};

/// Absorbs float error in `(value - min) / width` near bucket edges
const EDGE_EPSILON: f64 = 1e-9;

/// Upper bound on the number of buckets a single call will allocate
pub const MAX_BUCKETS: usize = 10_000;

/// Bin `samples` into buckets of `bucket_width`.
///
/// Counts are absolute. A width that would need more than [`MAX_BUCKETS`]
/// buckets is widened to `range / MAX_BUCKETS`. An empty population yields no buckets. A zero-range
/// population, or a width that is not a positive finite number, yields one
/// bucket holding every sample.
pub fn histogram(samples: &[StatSample], bucket_width: f64) -> Vec<HistogramBucket> {
    let Some((min, max)) = bounds(samples) else {
        return Vec::new();
    };

    let range = max - min;
    if !(bucket_width.is_finite() && bucket_width > 0.0) || range <= 0.0 {
        trace!("Single bucket for {} samples (width {}, range {})", samples.len(), bucket_width, range);
        let end = if bucket_width.is_finite() && bucket_width > 0.0 { min + bucket_width } else { max };
        let mut bucket = HistogramBucket::new(min, end);
        for sample in samples {
            bucket.push(sample.clone());
        }
        return vec![bucket];
    }

    let bucket_width = if range / bucket_width > MAX_BUCKETS as f64 {
        let widened = range / MAX_BUCKETS as f64;
        debug!("Bucket width {} too narrow for range {}, widening to {}", bucket_width, range, widened);
        widened
    } else {
        bucket_width
    };

    let bucket_count =
        ((range / bucket_width - EDGE_EPSILON).ceil() as usize).clamp(1, MAX_BUCKETS);
    let mut buckets: Vec<HistogramBucket> = (0..bucket_count)
        .map(|i| {
            let start = min + bucket_width * i as f64;
            HistogramBucket::new(start, start + bucket_width)
        })
        .collect();

    for sample in samples {
        let slot = ((sample.value - min) / bucket_width + EDGE_EPSILON).floor().max(0.0) as usize;
        buckets[slot.min(bucket_count - 1)].push(sample.clone());
    }

    buckets
}

/// Bucket width that splits the population range into `bucket_count` buckets.
///
/// `None` when there is nothing to split: no samples, a zero range, or zero
/// buckets requested.
pub fn bucket_width_for(values: &[f64], bucket_count: usize) -> Option<f64> {
    if values.is_empty() || bucket_count == 0 {
        return None;
    }

    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let range = max - min;

    (range > 0.0 && range.is_finite()).then(|| range / bucket_count as f64)
}

fn bounds(samples: &[StatSample]) -> Option<(f64, f64)> {
    if samples.is_empty() {
        return None;
    }

    let min = samples.iter().map(|s| s.value).fold(f64::INFINITY, f64::min);
    let max = samples.iter().map(|s| s.value).fold(f64::NEG_INFINITY, f64::max);
    Some((min, max))
}
