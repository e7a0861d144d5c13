use average::Mean;

use crate::{
    core::{order::PriceOrder, point::PricePoint},
    quantity::price::KilowattHourPrice,
};

impl<T> Aggregate for T where T: ?Sized {}

pub trait Aggregate {
    /// The cheapest point, the earliest one among equal prices.
    #[must_use]
    fn cheapest<'a>(self) -> Option<PricePoint>
    where
        Self: Sized + IntoIterator<Item = &'a PricePoint>,
    {
        self.into_iter().min_by(|lhs, rhs| PriceOrder::Cheapest.compare(lhs, rhs)).copied()
    }

    /// The most expensive point, the earliest one among equal prices.
    #[must_use]
    fn priciest<'a>(self) -> Option<PricePoint>
    where
        Self: Sized + IntoIterator<Item = &'a PricePoint>,
    {
        self.into_iter().min_by(|lhs, rhs| PriceOrder::Priciest.compare(lhs, rhs)).copied()
    }

    /// Unweighted mean over the points, zero for no points.
    ///
    /// Every point counts as one hour, even on 23- and 25-hour days.
    #[must_use]
    fn mean_price<'a>(self) -> KilowattHourPrice
    where
        Self: Sized + IntoIterator<Item = &'a PricePoint>,
    {
        let estimate: Mean = self.into_iter().map(|point| point.price.0).collect();
        if estimate.is_empty() { KilowattHourPrice::ZERO } else { estimate.mean().into() }
    }
}
