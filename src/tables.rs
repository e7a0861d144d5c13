use comfy_table::{Cell, CellAlignment, Color, Table, modifiers, presets};

use crate::{
    core::point::PricePoint,
    fmt::{FormattedOre, HourSpan, Locale},
    quantity::price::KilowattHourPrice,
};

/// Cheapest-first listing, with prices at or above the mean in red.
pub fn build_prices_table(
    points: &[PricePoint],
    mean_price: KilowattHourPrice,
    locale: Locale,
) -> Table {
    let mut table = Table::new();
    table
        .load_preset(presets::UTF8_FULL_CONDENSED)
        .apply_modifier(modifiers::UTF8_ROUND_CORNERS)
        .enforce_styling();
    table.set_header(vec!["Timme", "Pris, öre/kWh"]);
    for point in points {
        table.add_row(vec![
            Cell::new(HourSpan(point.time_start)),
            Cell::new(FormattedOre::fixed(point.price, locale))
                .set_alignment(CellAlignment::Right)
                .fg(if point.price >= mean_price { Color::Red } else { Color::Green }),
        ]);
    }
    table
}
