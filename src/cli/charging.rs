use chrono::NaiveDate;

use crate::{
    api::price_provider::PriceProvider,
    cli::{ChargingDuration, summary::NO_DATA},
    core::{assemble::assemble, point::ChargingWindow, window::cheapest_window, zone::Zone},
    fmt::{FormattedOre, Locale},
    prelude::*,
};

/// Print when to start charging for the cheapest `duration`, looking into the next day too.
#[instrument(skip_all, fields(on = %on, zone = %zone, duration = %duration))]
pub async fn charging(
    provider: &dyn PriceProvider,
    zone: Zone,
    on: NaiveDate,
    duration: ChargingDuration,
) -> Result {
    let (today, tomorrow) = provider.get_prices_with_next_day(on, zone).await?;
    let series = assemble(&today, &tomorrow, on);
    info!(n_points = series.len(), "assembled the prices");
    let window = cheapest_window(&series, duration.hours());
    for line in render(window, Locale::SWEDISH) {
        println!("{line}");
    }
    Ok(())
}

fn render(window: Option<ChargingWindow>, locale: Locale) -> Vec<String> {
    let Some(window) = window else {
        return vec![NO_DATA.to_owned()];
    };
    vec![
        format!("Påbörja laddning kl {}", window.start.format("%H:00")),
        format!("Medelpris för fönster: {} öre", FormattedOre::adaptive(window.mean_price, locale)),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::point::fixtures::{date, hourly};

    #[test]
    fn test_render_next_day_window() {
        let on = date(2025, 1, 15);
        let today = hourly(on, &[0.5, 0.4, 0.3, 0.3]);
        let tomorrow = hourly(date(2025, 1, 16), &[0.05, 0.1, 0.9]);
        let series = assemble(&today, &tomorrow, on);
        let window = cheapest_window(&series, "2h".parse::<ChargingDuration>().unwrap().hours());
        assert_eq!(
            render(window, Locale::SWEDISH),
            ["Påbörja laddning kl 00:00", "Medelpris för fönster: 7,5 öre"]
        );
    }

    #[test]
    fn test_render_empty() {
        assert_eq!(render(None, Locale::SWEDISH), [NO_DATA]);
    }
}
