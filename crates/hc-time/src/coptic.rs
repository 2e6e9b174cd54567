//! Coptic calendar arithmetic.
//!
//! Twelve 30-day months followed by a 5-day (6 in leap years) epagomenal
//! month; every year congruent to 3 mod 4 is a leap year.  The epoch
//! (1 Thoout, AM 1) is August 29, 284 CE in the Julian calendar.
//!
//! Ethiopian-Orthodox holiday rules are expressed in this chronology.

use crate::date::Date;
use crate::julian_day::jdn_from_gregorian;
use hc_core::errors::{Error, Result};

/// JDN of 1 Thoout, AM 1.
const EPOCH_JDN: i32 = 1_825_030;

/// Days between the epoch and the first day of `year`.
fn days_before_year(year: i32) -> i32 {
    365 * (year - 1) + year / 4
}

/// Return `true` if the Coptic year has 366 days.
pub fn is_leap_year(year: i32) -> bool {
    year.rem_euclid(4) == 3
}

/// Number of days in a month of a given year.
pub fn days_in_month(year: i32, month: u8) -> u8 {
    debug_assert!((1..=13).contains(&month));
    if month <= 12 {
        30
    } else if is_leap_year(year) {
        6
    } else {
        5
    }
}

/// Convert a Coptic calendar date to its Julian Day Number.
pub fn jdn_from_coptic(year: i32, month: u8, day: u8) -> i32 {
    EPOCH_JDN + days_before_year(year) + 30 * (month as i32 - 1) + day as i32 - 1
}

/// The Coptic year containing the given Julian Day Number.
fn year_at_jdn(jdn: i32) -> i32 {
    (4 * (jdn - EPOCH_JDN) + 1463) / 1461
}

/// Return every occurrence of the Coptic `month`/`day` pair within the
/// given Gregorian year, as Gregorian dates in ascending order.
///
/// The Coptic and Gregorian years are nearly the same length, so the result
/// holds at most one date for almost every rule; the general scan is kept
/// for symmetry with the Islamic chronology.
pub fn coptic_dates_in_gregorian_year(
    gregorian_year: u16,
    month: u8,
    day: u8,
) -> Result<Vec<Date>> {
    if !(1..=13).contains(&month) || day == 0 || day > 30 {
        return Err(Error::Date(format!(
            "invalid Coptic calendar day {day} of month {month}"
        )));
    }
    let first = jdn_from_gregorian(gregorian_year as i32, 1, 1);
    let last = jdn_from_gregorian(gregorian_year as i32, 12, 31);
    let mut dates = Vec::new();
    for year in year_at_jdn(first)..=year_at_jdn(last) {
        if day > days_in_month(year, month) {
            continue;
        }
        let jdn = jdn_from_coptic(year, month, day);
        if (first..=last).contains(&jdn) {
            dates.push(Date::from_jdn(jdn)?);
        }
    }
    Ok(dates)
}
