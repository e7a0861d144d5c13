use std::fmt::{Debug, Display, Formatter};

use chrono::{DateTime, TimeZone, Timelike};

use crate::quantity::price::{KilowattHourPrice, OrePerKilowattHour};

/// Number formatting conventions, passed explicitly wherever a number is rendered.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Locale {
    pub decimal_separator: char,
}

impl Locale {
    pub const SWEDISH: Self = Self { decimal_separator: ',' };
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Precision {
    /// Always two decimals.
    Fixed,

    /// At most two decimals, trailing zeros dropped.
    Adaptive,
}

/// Price in öre per kilowatt-hour, without the unit.
pub struct FormattedOre {
    pub ore: OrePerKilowattHour,
    pub precision: Precision,
    pub locale: Locale,
}

impl FormattedOre {
    pub fn fixed(price: KilowattHourPrice, locale: Locale) -> Self {
        Self { ore: price.into(), precision: Precision::Fixed, locale }
    }

    pub fn adaptive(price: KilowattHourPrice, locale: Locale) -> Self {
        Self { ore: price.into(), precision: Precision::Adaptive, locale }
    }
}

impl Debug for FormattedOre {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        Display::fmt(self, f)
    }
}

impl Display for FormattedOre {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let text = format!("{:.2}", self.ore.0);
        let text = match self.precision {
            Precision::Fixed => text.as_str(),
            Precision::Adaptive => text.trim_end_matches('0').trim_end_matches('.'),
        };
        match text.split_once('.') {
            Some((integer, fraction)) => {
                write!(f, "{integer}{}{fraction}", self.locale.decimal_separator)
            }
            None => f.write_str(text),
        }
    }
}

/// The hour a price is valid for, like `23-00`.
pub struct HourSpan<Tz: TimeZone>(pub DateTime<Tz>);

impl<Tz: TimeZone> Display for HourSpan<Tz> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let hour = self.0.hour();
        write!(f, "{hour:02}-{:02}", (hour + 1) % 24)
    }
}

#[cfg(test)]
mod tests {
    use chrono_tz::Europe::Stockholm;

    use super::*;

    #[test]
    fn test_fixed() {
        let locale = Locale::SWEDISH;
        assert_eq!(FormattedOre::fixed(KilowattHourPrice(0.123_4), locale).to_string(), "12,34");
        assert_eq!(FormattedOre::fixed(KilowattHourPrice(1.0), locale).to_string(), "100,00");
        assert_eq!(FormattedOre::fixed(KilowattHourPrice(0.0), locale).to_string(), "0,00");
        assert_eq!(FormattedOre::fixed(KilowattHourPrice(-0.05), locale).to_string(), "-5,00");
    }

    #[test]
    fn test_adaptive() {
        let locale = Locale::SWEDISH;
        assert_eq!(FormattedOre::adaptive(KilowattHourPrice(0.123_4), locale).to_string(), "12,34");
        assert_eq!(FormattedOre::adaptive(KilowattHourPrice(0.125), locale).to_string(), "12,5");
        assert_eq!(FormattedOre::adaptive(KilowattHourPrice(1.0), locale).to_string(), "100");
        assert_eq!(FormattedOre::adaptive(KilowattHourPrice(0.0), locale).to_string(), "0");
    }

    #[test]
    fn test_locale_is_explicit() {
        let locale = Locale { decimal_separator: '.' };
        assert_eq!(FormattedOre::fixed(KilowattHourPrice(0.5), locale).to_string(), "50.00");
    }

    #[test]
    fn test_hour_span() {
        let start = Stockholm.with_ymd_and_hms(2025, 1, 15, 7, 0, 0).unwrap();
        assert_eq!(HourSpan(start).to_string(), "07-08");
        let start = Stockholm.with_ymd_and_hms(2025, 1, 15, 23, 0, 0).unwrap();
        assert_eq!(HourSpan(start).to_string(), "23-00");
    }
}
