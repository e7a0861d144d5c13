use chrono::NaiveDate;

use crate::{
    api::price_provider::PriceProvider,
    core::{aggregate::Aggregate, sort::ascending_by_price, zone::Zone},
    fmt::Locale,
    prelude::*,
    tables::build_prices_table,
};

/// Print the day's prices, cheapest first.
#[instrument(skip_all, fields(on = %on, zone = %zone))]
pub async fn sorted(provider: &dyn PriceProvider, zone: Zone, on: NaiveDate) -> Result {
    let series = provider.get_prices(on, zone).await?;
    info!(n_points = series.len(), "fetched the prices");
    if series.is_empty() {
        println!("[]");
        return Ok(());
    }
    let mean_price = series.iter().mean_price();
    println!("{}", build_prices_table(&ascending_by_price(&series), mean_price, Locale::SWEDISH));
    Ok(())
}
