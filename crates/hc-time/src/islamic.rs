//! Tabular Islamic calendar arithmetic.
//!
//! The civil tabular calendar: months alternate 30 and 29 days, years have
//! 354 days with eleven 355-day leap years per 30-year cycle (years 2, 5,
//! 7, 10, 13, 16, 18, 21, 24, 26, 29 of the cycle), and the epoch
//! (1 Muharram, AH 1) is Friday, July 16, 622 CE in the Julian calendar.
//!
//! The Islamic year is 10–12 days shorter than the Gregorian one, so a
//! Gregorian year can contain zero, one, or two occurrences of a given
//! Islamic month/day pair.

use crate::date::Date;
use crate::julian_day::jdn_from_gregorian;
use hc_core::errors::{Error, Result};

/// JDN of 1 Muharram, AH 1 (civil epoch).
const EPOCH_JDN: i32 = 1_948_440;

/// Days in years 1 .. `year` (exclusive), i.e. days between the epoch and
/// the first day of `year`.
fn days_before_year(year: i32) -> i32 {
    354 * (year - 1) + (11 * year + 3) / 30
}

/// Days in months 1 .. `month` (exclusive) of any year.
fn days_before_month(month: u8) -> i32 {
    let m = month as i32;
    30 * (m - 1) - (m - 1) / 2
}

/// Return `true` if the Islamic year has 355 days.
pub fn is_leap_year(year: i32) -> bool {
    (11 * year + 14) % 30 < 11
}

/// Number of days in a month of a given year.
pub fn days_in_month(year: i32, month: u8) -> u8 {
    debug_assert!((1..=12).contains(&month));
    if month % 2 == 1 {
        30
    } else if month == 12 && is_leap_year(year) {
        30
    } else {
        29
    }
}

/// Convert an Islamic calendar date to its Julian Day Number.
pub fn jdn_from_islamic(year: i32, month: u8, day: u8) -> i32 {
    EPOCH_JDN + days_before_year(year) + days_before_month(month) + day as i32 - 1
}

/// The Islamic year containing the given Julian Day Number.
fn year_at_jdn(jdn: i32) -> i32 {
    (30 * (jdn - EPOCH_JDN) + 10646) / 10631
}

/// Return every occurrence of the Islamic `month`/`day` pair within the
/// given Gregorian year, as Gregorian dates in ascending order.
///
/// The result holds zero, one, or two dates.
pub fn islamic_dates_in_gregorian_year(
    gregorian_year: u16,
    month: u8,
    day: u8,
) -> Result<Vec<Date>> {
    if !(1..=12).contains(&month) || day == 0 || day > 30 {
        return Err(Error::Date(format!(
            "invalid Islamic calendar day {day} of month {month}"
        )));
    }
    let first = jdn_from_gregorian(gregorian_year as i32, 1, 1);
    let last = jdn_from_gregorian(gregorian_year as i32, 12, 31);
    let mut dates = Vec::new();
    for year in year_at_jdn(first)..=year_at_jdn(last) {
        if day > days_in_month(year, month) {
            continue;
        }
        let jdn = jdn_from_islamic(year, month, day);
        if (first..=last).contains(&jdn) {
            dates.push(Date::from_jdn(jdn)?);
        }
    }
    Ok(dates)
}
