use chrono::{Days, NaiveDate};

use crate::{
    core::point::{PricePoint, PriceSeries},
    prelude::*,
};

/// How a series relates to the day before its expected start.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Continuation {
    /// Starts on the day after.
    Continues,

    /// Starts on the same day, for example when the provider echoes the requested day back.
    SameDay,

    /// Empty, or starts on any other day.
    Unrelated,
}

impl Continuation {
    /// Classify `series` by the calendar date of its first point, in that point's own timezone.
    pub fn of(series: &[PricePoint], date: NaiveDate) -> Self {
        let Some(first) = series.first() else {
            return Self::Unrelated;
        };
        let first_date = first.time_start.date_naive();
        if first_date == date {
            Self::SameDay
        } else if date.checked_add_days(Days::new(1)) == Some(first_date) {
            Self::Continues
        } else {
            Self::Unrelated
        }
    }
}

/// Concatenate the requested day with the next one when the latter actually continues it.
///
/// A next-day series that does not continue is dropped without an error.
#[instrument(skip_all, fields(on = %on, n_today = today.len(), n_tomorrow = tomorrow.len()))]
pub fn assemble(today: &[PricePoint], tomorrow: &[PricePoint], on: NaiveDate) -> PriceSeries {
    let mut series = today.to_vec();
    match Continuation::of(tomorrow, on) {
        Continuation::Continues => {
            series.extend_from_slice(tomorrow);
        }
        Continuation::SameDay => {
            warn!("the next day echoes the requested day, dropping it");
        }
        Continuation::Unrelated => {
            debug!("the next day does not continue the requested day, dropping it");
        }
    }
    series
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::point::fixtures::{date, hourly};

    #[test]
    fn test_continuation() {
        let on = date(2025, 1, 15);
        assert_eq!(Continuation::of(&[], on), Continuation::Unrelated);
        assert_eq!(Continuation::of(&hourly(on, &[1.0]), on), Continuation::SameDay);
        assert_eq!(
            Continuation::of(&hourly(date(2025, 1, 16), &[1.0]), on),
            Continuation::Continues
        );
        assert_eq!(
            Continuation::of(&hourly(date(2025, 1, 17), &[1.0]), on),
            Continuation::Unrelated
        );
        assert_eq!(
            Continuation::of(&hourly(date(2025, 1, 14), &[1.0]), on),
            Continuation::Unrelated
        );
    }

    #[test]
    fn test_continuation_across_year() {
        let on = date(2024, 12, 31);
        assert_eq!(
            Continuation::of(&hourly(date(2025, 1, 1), &[1.0]), on),
            Continuation::Continues
        );
    }

    #[test]
    fn test_appends_next_day() {
        let on = date(2025, 1, 15);
        let today = hourly(on, &[1.0, 2.0]);
        let tomorrow = hourly(date(2025, 1, 16), &[3.0]);
        let series = assemble(&today, &tomorrow, on);
        assert_eq!(series, [today.as_slice(), tomorrow.as_slice()].concat());
    }

    #[test]
    fn test_keeps_caller_order() {
        let on = date(2025, 1, 15);
        let mut today = hourly(on, &[1.0, 2.0, 3.0]);
        today.reverse();
        let mut tomorrow = hourly(date(2025, 1, 16), &[4.0, 5.0]);
        tomorrow.reverse();
        let series = assemble(&today, &tomorrow, on);
        assert_eq!(series[..3], today[..]);
        assert_eq!(series[3..], tomorrow[..]);
    }

    #[test]
    fn test_drops_echoed_day() {
        let on = date(2025, 1, 15);
        let today = hourly(on, &[1.0, 2.0]);
        let echo = hourly(on, &[1.0, 2.0]);
        assert_eq!(assemble(&today, &echo, on), today);
    }

    #[test]
    fn test_empty_inputs() {
        let on = date(2025, 1, 15);
        assert!(assemble(&[], &[], on).is_empty());

        let today = hourly(on, &[1.0]);
        assert_eq!(assemble(&today, &[], on), today);

        let tomorrow = hourly(date(2025, 1, 16), &[2.0]);
        assert_eq!(assemble(&[], &tomorrow, on), tomorrow);
    }
}
