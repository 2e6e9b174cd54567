//! `Holiday` — the output record of every evaluation.

use hc_time::Date;

/// Classifier distinguishing official from unofficial holidays.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum HolidayType {
    /// A legally recognized public holiday.
    #[default]
    OfficialHoliday,
    /// An observed but not legally recognized holiday.
    UnofficialHoliday,
}

/// One computed holiday occurrence.
///
/// Equality and hashing cover all three fields, so identical records
/// produced by different rule evaluators collapse when collected into a
/// set.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Holiday {
    date: Date,
    description_key: String,
    holiday_type: HolidayType,
}

impl Holiday {
    /// Create a holiday record.
    pub fn new(date: Date, description_key: impl Into<String>, holiday_type: HolidayType) -> Self {
        Self {
            date,
            description_key: description_key.into(),
            holiday_type,
        }
    }

    /// The date of the occurrence, in the proleptic Gregorian calendar.
    pub fn date(&self) -> Date {
        self.date
    }

    /// Opaque key identifying the holiday for description lookup.
    pub fn description_key(&self) -> &str {
        &self.description_key
    }

    /// The holiday classifier.
    pub fn holiday_type(&self) -> HolidayType {
        self.holiday_type
    }
}

impl std::fmt::Display for Holiday {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.date, self.description_key)
    }
}
