use chrono::DateTime;
use chrono_tz::Tz;

use crate::quantity::price::KilowattHourPrice;

/// Spot price valid for the hour starting at `time_start`.
#[must_use]
#[derive(Clone, Copy, Debug, Eq, PartialEq, derive_more::Constructor)]
pub struct PricePoint {
    pub time_start: DateTime<Tz>,
    pub price: KilowattHourPrice,
}

/// Price points in the order the caller supplied them.
pub type PriceSeries = Vec<PricePoint>;

/// The cheapest run of consecutive hours.
#[must_use]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ChargingWindow {
    pub start: DateTime<Tz>,
    pub mean_price: KilowattHourPrice,
}
