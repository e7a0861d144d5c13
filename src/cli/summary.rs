use chrono::NaiveDate;

use crate::{
    api::price_provider::PriceProvider,
    core::{aggregate::Aggregate, point::PricePoint, zone::Zone},
    fmt::{FormattedOre, HourSpan, Locale},
    prelude::*,
};

pub const NO_DATA: &str = "Ingen data / inga priser.";

/// Print the cheapest, the most expensive, and the mean price of the day.
#[instrument(skip_all, fields(on = %on, zone = %zone))]
pub async fn summary(provider: &dyn PriceProvider, zone: Zone, on: NaiveDate) -> Result {
    let series = provider.get_prices(on, zone).await?;
    info!(n_points = series.len(), "fetched the prices");
    for line in render(&series, Locale::SWEDISH) {
        println!("{line}");
    }
    Ok(())
}

fn render(series: &[PricePoint], locale: Locale) -> Vec<String> {
    let (Some(cheapest), Some(priciest)) = (series.iter().cheapest(), series.iter().priciest())
    else {
        return vec![NO_DATA.to_owned()];
    };
    vec![
        format!(
            "Lägsta pris: {} {} öre",
            HourSpan(cheapest.time_start),
            FormattedOre::fixed(cheapest.price, locale),
        ),
        format!(
            "Högsta pris: {} {} öre",
            HourSpan(priciest.time_start),
            FormattedOre::fixed(priciest.price, locale),
        ),
        format!("Medelpris: {} öre", FormattedOre::adaptive(series.iter().mean_price(), locale)),
    ]
}
