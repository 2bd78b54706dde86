//! ISO week arithmetic for birthday lookups

use chrono::{Datelike, Duration, NaiveDate};

use crate::models::Birthday;

/// The seven dates, Monday first, of the ISO week containing `day`
pub fn iso_week_dates(day: NaiveDate) -> [NaiveDate; 7] {
    let monday = day - Duration::days(i64::from(day.weekday().num_days_from_monday()));
    std::array::from_fn(|offset| monday + Duration::days(offset as i64))
}

/// Whether the birthday's anniversary lands in the ISO week containing `today`
///
/// Each day of the week is checked against the anniversary in that day's own
/// year, so weeks spanning New Year match both December and January dates.
pub fn birthday_in_week(birthday: &Birthday, today: NaiveDate) -> bool {
    iso_week_dates(today)
        .iter()
        .any(|day| birthday.anniversary_in(day.year()) == Some(*day))
}
