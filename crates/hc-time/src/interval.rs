//! `DateInterval` — an inclusive range of dates.

use crate::date::Date;
use hc_core::errors::{Error, Result};

/// An inclusive interval of calendar dates, `[start, end]`.
///
/// Used to restrict holiday queries to an arbitrary date range spanning one
/// or more years.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DateInterval {
    start: Date,
    end: Date,
}

impl DateInterval {
    /// Create an interval from `start` through `end`, both inclusive.
    ///
    /// Returns an error if `start > end`.
    pub fn new(start: Date, end: Date) -> Result<Self> {
        if start > end {
            return Err(Error::InvalidArgument(format!(
                "interval start {start} is after end {end}"
            )));
        }
        Ok(Self { start, end })
    }

    /// The first date of the interval.
    pub fn start(&self) -> Date {
        self.start
    }

    /// The last date of the interval.
    pub fn end(&self) -> Date {
        self.end
    }

    /// Return `true` if `date` lies within the interval, bounds included.
    pub fn contains(&self, date: Date) -> bool {
        self.start <= date && date <= self.end
    }
}

impl std::fmt::Display for DateInterval {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}, {}]", self.start, self.end)
    }
}
