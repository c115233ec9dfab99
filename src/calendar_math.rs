//!
//! Calendar arithmetic used by the date-picker.
//!
//! Month and year shifts don't clamp the day-of-month. The day is
//! carried over as is and any excess rolls into the following month.
//! `2024-01-31` plus one month gives `2024-03-02`.
//!

use chrono::{Datelike, Days, NaiveDate, Weekday};
use log::warn;

/// Weekdays in display order. The grid is Monday-first.
pub const WEEKDAYS: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

/// Gregorian leap year.
pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Build a date from possibly out-of-range components.
///
/// The month is normalized first, moving whole years. Then the day
/// is added to the first of that month, so day 0 is the last day of
/// the previous month and day 32 lands in the following month.
///
/// Results outside the range chrono can represent saturate to
/// [NaiveDate::MIN] / [NaiveDate::MAX].
pub fn normalize_date(year: i32, month: i32, day: i32) -> NaiveDate {
    let month0 = month as i64 - 1;
    let year = year as i64 + month0.div_euclid(12);
    let month = month0.rem_euclid(12) as u32 + 1;

    let Some(first) = i32::try_from(year)
        .ok()
        .and_then(|year| NaiveDate::from_ymd_opt(year, month, 1))
    else {
        return saturate(year < 0, year, month, day);
    };

    let offset = day as i64 - 1;
    let date = if offset >= 0 {
        first.checked_add_days(Days::new(offset as u64))
    } else {
        first.checked_sub_days(Days::new(offset.unsigned_abs()))
    };

    match date {
        Some(date) => date,
        None => saturate(offset < 0, year, month, day),
    }
}

fn saturate(low: bool, year: i64, month: u32, day: i32) -> NaiveDate {
    warn!("date out of range {}-{}-{}, saturated", year, month, day);
    if low {
        NaiveDate::MIN
    } else {
        NaiveDate::MAX
    }
}

/// Number of days in the given month.
///
/// Takes day 32 of the month, lets it roll over into the next month
/// and subtracts the day it lands on. December of the last year
/// chrono supports has no following month and always has 31 days.
pub fn days_in_month(year: i32, month: u32) -> u32 {
    let first = normalize_date(year, month as i32, 1);
    match first.checked_add_days(Days::new(31)) {
        Some(overflow) => 32 - overflow.day(),
        None => 31,
    }
}

/// Monday-first column for a weekday. Monday is 0, Sunday is 6.
pub fn weekday_offset(weekday: Weekday) -> usize {
    match weekday.num_days_from_sunday() {
        0 => 6,
        n => n as usize - 1,
    }
}

/// Weekday of the first day of the month.
pub fn first_weekday_of_month(year: i32, month: u32) -> Weekday {
    normalize_date(year, month as i32, 1).weekday()
}

/// Monday-first column of the first day of the month.
pub fn first_day_offset(year: i32, month: u32) -> usize {
    weekday_offset(first_weekday_of_month(year, month))
}

/// Number of grid rows needed to show the month with Monday-first
/// weeks. Between 4 and 6.
pub fn week_rows(year: i32, month: u32) -> usize {
    let cells = first_day_offset(year, month) + days_in_month(year, month) as usize;
    cells.div_ceil(7)
}

/// Shift by a number of months, day-of-month is carried over and
/// may roll into the next month.
pub fn add_months(date: NaiveDate, n: i32) -> NaiveDate {
    normalize_date(
        date.year(),
        (date.month() as i32).saturating_add(n),
        date.day() as i32,
    )
}

/// Shift by a number of years, month and day are carried over.
/// February 29th may roll into March 1st.
pub fn add_years(date: NaiveDate, n: i32) -> NaiveDate {
    normalize_date(
        date.year().saturating_add(n),
        date.month() as i32,
        date.day() as i32,
    )
}

/// Replace the year, keeping month and day. February 29th in a
/// non-leap year rolls into March 1st.
pub fn with_year(date: NaiveDate, year: i32) -> NaiveDate {
    normalize_date(year, date.month() as i32, date.day() as i32)
}

/// Replace the month with the first day of the given month.
/// `month0` is zero-based, values past 11 continue into the
/// following years.
pub fn first_of_month(date: NaiveDate, month0: u32) -> NaiveDate {
    let month = i32::try_from(month0).unwrap_or(i32::MAX - 1);
    normalize_date(date.year(), month + 1, 1)
}
