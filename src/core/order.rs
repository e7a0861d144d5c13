use std::cmp::Ordering;

use crate::core::point::PricePoint;

/// Ranking of price points: price first, then the earliest start.
///
/// Shared by the extremes and the cheapest-first listing so that equal prices always resolve
/// to the same point.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum PriceOrder {
    Cheapest,
    Priciest,
}

impl PriceOrder {
    /// [`Ordering::Less`] means that `lhs` ranks first.
    #[must_use]
    pub fn compare(self, lhs: &PricePoint, rhs: &PricePoint) -> Ordering {
        let by_price = match self {
            Self::Cheapest => lhs.price.cmp(&rhs.price),
            Self::Priciest => rhs.price.cmp(&lhs.price),
        };
        by_price.then_with(|| lhs.time_start.cmp(&rhs.time_start))
    }
}
