use itertools::Itertools;

use crate::core::{
    order::PriceOrder,
    point::{PricePoint, PriceSeries},
};

/// Cheapest first, equal prices in chronological order.
pub fn ascending_by_price(series: &[PricePoint]) -> PriceSeries {
    series.iter().copied().sorted_by(|lhs, rhs| PriceOrder::Cheapest.compare(lhs, rhs)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::point::fixtures::{date, hourly};

    #[test]
    fn test_empty() {
        assert!(ascending_by_price(&[]).is_empty());
    }

    #[test]
    fn test_ascending_with_time_tie_break() {
        let series = hourly(date(2025, 1, 15), &[0.3, 0.1, 0.2, 0.1]);
        let mut shuffled = series.clone();
        shuffled.swap(1, 3);
        let sorted = ascending_by_price(&shuffled);
        assert_eq!(sorted, vec![series[1], series[3], series[2], series[0]]);
    }

    #[test]
    fn test_idempotent() {
        let series = hourly(date(2025, 1, 15), &[0.7, 0.1, 0.7, 0.3, 0.1, 0.0]);
        let once = ascending_by_price(&series);
        assert_eq!(ascending_by_price(&once), once);
    }
}
