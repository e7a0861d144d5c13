//! [Elpriset just nu](https://www.elprisetjustnu.se/elpris-api) client.

use async_trait::async_trait;
use average::Mean;
use chrono::{DateTime, DurationRound, FixedOffset, NaiveDate, TimeDelta};
use chrono_tz::Tz;
use itertools::Itertools;
use reqwest::{Client, StatusCode, Url};
use serde::Deserialize;

use crate::{
    api::{client, price_provider::PriceProvider},
    core::{
        point::{PricePoint, PriceSeries},
        zone::Zone,
    },
    prelude::*,
    quantity::price::KilowattHourPrice,
};

pub const DEFAULT_BASE_URL: &str = "https://www.elprisetjustnu.se/api/v1/prices";

/// All the Swedish zones trade in Swedish time.
pub const TIME_ZONE: Tz = chrono_tz::Europe::Stockholm;

pub struct Api {
    client: Client,
    base_url: Url,
}

impl Api {
    pub fn try_new(base_url: Url) -> Result<Self> {
        Ok(Self { client: client::try_new()?, base_url })
    }

    fn url(&self, on: NaiveDate, zone: Zone) -> String {
        format!(
            "{}/{}_{zone}.json",
            self.base_url.as_str().trim_end_matches('/'),
            on.format("%Y/%m-%d"),
        )
    }
}

#[async_trait]
impl PriceProvider for Api {
    #[instrument(skip_all, fields(on = %on, zone = %zone))]
    async fn get_prices(&self, on: NaiveDate, zone: Zone) -> Result<PriceSeries> {
        let url = self.url(on, zone);
        info!(%url, "fetching…");
        let response = self.client.get(&url).send().await.context("failed to call")?;
        if response.status() == StatusCode::NOT_FOUND {
            info!("no prices published");
            return Ok(Vec::new());
        }
        let entries = response
            .error_for_status()
            .context("request failed")?
            .json::<Vec<Entry>>()
            .await
            .context("failed to deserialize the response")?;
        info!(n_entries = entries.len(), "fetched");
        into_hourly(entries)
    }
}

#[derive(Deserialize)]
struct Entry {
    #[serde(rename = "SEK_per_kWh")]
    price: KilowattHourPrice,

    time_start: DateTime<FixedOffset>,
}

/// Move the entries into [`TIME_ZONE`] and average sub-hourly entries into hourly points.
fn into_hourly(entries: Vec<Entry>) -> Result<PriceSeries> {
    let entries: Vec<(DateTime<Tz>, KilowattHourPrice)> = entries
        .into_iter()
        .map(|entry| -> Result<_> {
            let time_start = entry.time_start.with_timezone(&TIME_ZONE);
            Ok((time_start.duration_trunc(TimeDelta::hours(1))?, entry.price))
        })
        .collect::<Result<_>>()?;
    Ok(entries
        .into_iter()
        .sorted_by_key(|(hour, _)| *hour)
        .chunk_by(|(hour, _)| *hour)
        .into_iter()
        .map(|(hour, entries)| {
            let mean: Mean = entries.map(|(_, price)| price.0).collect();
            PricePoint::new(hour, mean.mean().into())
        })
        .collect())
}
