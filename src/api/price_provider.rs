use async_trait::async_trait;
use chrono::{Days, NaiveDate};

use crate::{
    core::{point::PriceSeries, zone::Zone},
    prelude::*,
};

#[async_trait]
pub trait PriceProvider: Sync {
    /// Fetch the requested day together with the next one.
    ///
    /// The next day is usually published in the early afternoon, so failing to fetch it is only
    /// a warning and yields an empty series.
    #[instrument(skip_all, fields(on = %on, zone = %zone))]
    async fn get_prices_with_next_day(
        &self,
        on: NaiveDate,
        zone: Zone,
    ) -> Result<(PriceSeries, PriceSeries)> {
        let next_date = on.checked_add_days(Days::new(1)).context("the date is out of range")?;
        let (today, tomorrow) =
            tokio::join!(self.get_prices(on, zone), self.get_prices(next_date, zone));
        let tomorrow = tomorrow.unwrap_or_else(|error| {
            warn!("failed to fetch the next day: {error:#}");
            Vec::new()
        });
        Ok((today?, tomorrow))
    }

    /// Fetch the hourly prices of the day, empty when the provider has none.
    async fn get_prices(&self, on: NaiveDate, zone: Zone) -> Result<PriceSeries>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::point::fixtures::{date, hourly};

    struct Fake;

    #[async_trait]
    impl PriceProvider for Fake {
        async fn get_prices(&self, on: NaiveDate, _zone: Zone) -> Result<PriceSeries> {
            if on == date(2025, 1, 16) {
                bail!("not published yet");
            }
            Ok(hourly(on, &[0.1, 0.2]))
        }
    }

    #[tokio::test]
    async fn test_next_day_failure_is_not_fatal() -> Result {
        let (today, tomorrow) = Fake.get_prices_with_next_day(date(2025, 1, 15), Zone::Se3).await?;
        assert_eq!(today, hourly(date(2025, 1, 15), &[0.1, 0.2]));
        assert!(tomorrow.is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn test_requested_day_failure_is_fatal() {
        let result = Fake.get_prices_with_next_day(date(2025, 1, 16), Zone::Se3).await;
        assert!(result.is_err());
    }
}
