use std::num::NonZeroUsize;

use itertools::Itertools;

use crate::{
    core::{
        aggregate::Aggregate,
        point::{ChargingWindow, PricePoint},
    },
    prelude::*,
    quantity::price::KilowattHourPrice,
};

/// Window sums closer than this are equal, and the earlier window wins.
pub const TIE_TOLERANCE: f64 = 1e-9;

/// Find the run of `window_hours` consecutive points with the lowest mean price.
///
/// The points are put in chronological order first. With fewer points than `window_hours`,
/// the result starts at the earliest point and carries the mean of all the points.
///
/// Runs in `O(n)`: the window sum is updated incrementally as the window slides.
#[must_use]
#[expect(clippy::cast_precision_loss)]
pub fn cheapest_window(
    series: &[PricePoint],
    window_hours: NonZeroUsize,
) -> Option<ChargingWindow> {
    let series = series.iter().copied().sorted_by_key(|point| point.time_start).collect_vec();
    let window_hours = window_hours.get();
    let first = series.first()?;

    if series.len() < window_hours {
        debug!(n_points = series.len(), window_hours, "not enough points, averaging all of them");
        return Some(ChargingWindow {
            start: first.time_start,
            mean_price: series.iter().mean_price(),
        });
    }

    let mut window_sum: f64 = series[..window_hours].iter().map(|point| point.price.0).sum();
    let mut best_sum = window_sum;
    let mut best_start = 0;

    for (start, (leaving, entering)) in (1..).zip(series.iter().zip(&series[window_hours..])) {
        window_sum += entering.price.0;
        window_sum -= leaving.price.0;

        let is_tie = (window_sum - best_sum).abs() < TIE_TOLERANCE;
        if (!is_tie && window_sum < best_sum)
            || (is_tie && series[start].time_start < series[best_start].time_start)
        {
            best_sum = window_sum;
            best_start = start;
        }
    }

    Some(ChargingWindow {
        start: series[best_start].time_start,
        mean_price: KilowattHourPrice(best_sum / window_hours as f64),
    })
}
