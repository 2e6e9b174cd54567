//! # hc-time
//!
//! Date, weekday, interval, and calendar-chronology arithmetic.
//!
//! All dates handed out by this crate are expressed in the proleptic
//! Gregorian calendar.  The chronology modules ([`easter`], [`islamic`],
//! [`coptic`]) compute in their own calendar systems internally and convert
//! results to the common Gregorian representation before returning them.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// Coptic calendar arithmetic (used for Ethiopian-Orthodox holidays).
pub mod coptic;

/// `Date` type.
pub mod date;

/// Easter Sunday computus for the Julian and Gregorian chronologies.
pub mod easter;

/// `DateInterval` — an inclusive range of dates.
pub mod interval;

/// Tabular Islamic calendar arithmetic.
pub mod islamic;

/// Julian Day Number conversions.
pub mod julian_day;

/// `Month` — month of the year.
pub mod month;

/// `Weekday` — day of the week.
pub mod weekday;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use date::Date;
pub use easter::Chronology;
pub use interval::DateInterval;
pub use month::Month;
pub use weekday::Weekday;
