//! Percentile ranking against a league population
//!
//! Ranks are "share of the population strictly below the value", scaled so
//! the lowest member sits at 0 and the highest at 1.

use std::cmp::Ordering;

/// Fractional rank of `value` within `population`, in `[0, 1]`.
///
/// Counts the members strictly below `value` and divides by `len - 1`.
/// Populations with fewer than two members rank everything at 0. With
/// `invert` set the rank is flipped, for stats where lower is better.
/// `value` need not be a member of `population`.
pub fn percentile(population: &[f64], value: f64, invert: bool) -> f64 {
    if population.len() <= 1 {
        return 0.0;
    }

    let mut sorted = population.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal));

    let lower_count = sorted.partition_point(|v| *v < value);

    // A value above every member would otherwise rank at n / (n - 1)
    let raw = (lower_count as f64 / (sorted.len() - 1) as f64).min(1.0);

    if invert {
        1.0 - raw
    } else {
        raw
    }
}

/// Percentiles for several values against the same population.
///
/// Sorts once, so it is the cheaper choice for ranking a whole roster.
pub fn percentiles(population: &[f64], values: &[f64], invert: bool) -> Vec<f64> {
    if population.len() <= 1 {
        return vec![0.0; values.len()];
    }

    let mut sorted = population.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal));
    let denominator = (sorted.len() - 1) as f64;

    values
        .iter()
        .map(|value| {
            let raw = (sorted.partition_point(|v| v < value) as f64 / denominator).min(1.0);
            if invert {
                1.0 - raw
            } else {
                raw
            }
        })
        .collect()
}
