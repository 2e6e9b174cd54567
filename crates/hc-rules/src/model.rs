//! Configuration and rule data model.
//!
//! A [`Configuration`] is one level of the country/region hierarchy; it
//! owns the [`RuleSet`] of holiday definitions attached directly to that
//! level plus an ordered list of sub-configurations.  The tree is built by
//! an external loader (file format out of scope here) and is read-only to
//! the evaluation machinery.
//!
//! Every rule struct embeds a [`RuleInfo`] with the metadata shared by all
//! kinds: description key, holiday classifier, validity bounds, and the
//! recurrence-cycle token.  The cycle token is kept textual so that
//! unrecognized tokens surface as configuration errors when the rule is
//! first evaluated, not silently at load time.

use crate::holiday::HolidayType;
use hc_time::{Chronology, Date, Month, Weekday};

// ── Hierarchy ─────────────────────────────────────────────────────────────────

/// One node of the holiday configuration hierarchy.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Configuration {
    /// Hierarchy id, unique among siblings and matched case-insensitively
    /// (e.g. a country or subdivision code).
    pub hierarchy: String,
    /// Human-readable description of this level.
    pub description: String,
    /// The holiday definitions owned directly by this level.
    pub holidays: RuleSet,
    /// Sub-configurations, one per child region.
    pub sub_configurations: Vec<Configuration>,
}

// ── Rule grouping ─────────────────────────────────────────────────────────────

/// The holiday definitions attached to one hierarchy level, grouped by
/// rule kind.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RuleSet {
    /// Fixed-date rules.
    pub fixed: Vec<FixedRule>,
    /// Rules relative to a fixed date.
    pub relative_to_fixed: Vec<RelativeToFixedRule>,
    /// Rules relative to Easter Sunday by day offset.
    pub relative_to_easter_sunday: Vec<RelativeToEasterRule>,
    /// Named Christian feasts derived from Easter Sunday.
    pub christian: Vec<ChristianHolidayRule>,
    /// Nth/last weekday of a month.
    pub fixed_weekday_in_month: Vec<FixedWeekdayInMonthRule>,
    /// First weekday occurrence between two fixed dates.
    pub fixed_weekday_between_fixed: Vec<FixedWeekdayBetweenFixedRule>,
    /// Nearest weekday occurrence relative to a fixed date.
    pub fixed_weekday_relative_to_fixed: Vec<FixedWeekdayRelativeToFixedRule>,
    /// Nearest weekday occurrence relative to a weekday-in-month anchor.
    pub relative_to_weekday_in_month: Vec<RelativeToWeekdayInMonthRule>,
    /// Islamic-calendar holidays.
    pub islamic: Vec<IslamicHolidayRule>,
    /// Hindu holidays.
    pub hindu: Vec<HinduHolidayRule>,
    /// Ethiopian-Orthodox holidays (Coptic calendar).
    pub ethiopian_orthodox: Vec<EthiopianOrthodoxHolidayRule>,
}

// ── Shared rule metadata ──────────────────────────────────────────────────────

/// Metadata shared by every rule kind.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RuleInfo {
    /// Opaque key identifying the holiday for description lookup.
    pub description_key: Option<String>,
    /// Official/unofficial classifier.
    pub holiday_type: HolidayType,
    /// First year (inclusive) the rule applies in, if bounded.
    pub valid_from: Option<u16>,
    /// Last year (inclusive) the rule applies in, if bounded.
    pub valid_to: Option<u16>,
    /// Recurrence-cycle token: `EVERY_YEAR`, `ODD_YEARS`, `EVEN_YEARS`, or
    /// `2_YEARS` … `6_YEARS` (case-insensitive).  `None` means every year.
    pub every: Option<String>,
}

impl RuleInfo {
    /// The description key, or the empty string when unset.
    pub fn effective_key(&self) -> String {
        self.description_key.clone().unwrap_or_default()
    }
}

/// Direction in which a moved date is searched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MoveDirection {
    /// Search forward, one day at a time.
    Next,
    /// Search backward, one day at a time.
    Previous,
}

/// Substitution instruction for a computed date falling on a disallowed
/// weekday: when the date falls on `substitute`, move it to the nearest
/// `weekday` in the `with` direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MovingCondition {
    /// The weekday that triggers the substitution.
    pub substitute: Weekday,
    /// Search direction.
    pub with: MoveDirection,
    /// The weekday the date is moved to.
    pub weekday: Weekday,
}

/// Search direction relative to a fixed date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum When {
    /// Search toward earlier dates.
    Before,
    /// Search toward later dates.
    After,
}

/// A month/day pair resolved against a requested year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FixedDay {
    /// Month of the year.
    pub month: Month,
    /// Day of the month.
    pub day: u8,
}

impl FixedDay {
    /// Resolve to a concrete date in `year`.
    pub fn resolve(&self, year: u16) -> hc_core::Result<Date> {
        Date::from_ymd(year, self.month.number(), self.day)
    }
}

// ── Rule kinds ────────────────────────────────────────────────────────────────

/// A holiday on a fixed month/day, optionally substituted by moving
/// conditions.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FixedRule {
    /// The fixed date.
    pub date: FixedDay,
    /// Moving conditions, applied in declaration order; first match wins.
    pub moving_conditions: Vec<MovingCondition>,
    /// Shared metadata.
    pub info: RuleInfo,
}

/// How a relative-to-fixed rule shifts off its anchor date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Shift {
    /// To the nearest occurrence of this weekday.
    Weekday(Weekday),
    /// By a fixed number of days.
    Days(u16),
}

/// A holiday at a weekday or day-count offset from a fixed anchor date.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RelativeToFixedRule {
    /// The anchor date.
    pub date: FixedDay,
    /// Search direction off the anchor.
    pub when: When,
    /// Weekday target or day count.
    pub shift: Shift,
    /// Shared metadata.
    pub info: RuleInfo,
}

/// A holiday at a signed day offset from Easter Sunday.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RelativeToEasterRule {
    /// Day offset from Easter Sunday (negative = before).
    pub days: i16,
    /// Calendar system used to reckon Easter Sunday.
    pub chronology: Chronology,
    /// Shared metadata.
    pub info: RuleInfo,
}

/// Named Christian feasts at well-known offsets from Easter Sunday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[allow(missing_docs)]
pub enum ChristianHolidayKind {
    Easter,
    CleanMonday,
    ShroveMonday,
    MardiGras,
    Carnival,
    AshWednesday,
    MaundyThursday,
    GoodFriday,
    EasterSaturday,
    EasterMonday,
    EasterTuesday,
    GeneralPrayerDay,
    AscensionDay,
    Pentecost,
    WhitSunday,
    WhitMonday,
    PentecostMonday,
    CorpusChristi,
    SacredHeart,
}

impl ChristianHolidayKind {
    /// The key-name fragment used to build the description key.
    pub fn key_name(&self) -> &'static str {
        match self {
            ChristianHolidayKind::Easter => "EASTER",
            ChristianHolidayKind::CleanMonday => "CLEAN_MONDAY",
            ChristianHolidayKind::ShroveMonday => "SHROVE_MONDAY",
            ChristianHolidayKind::MardiGras => "MARDI_GRAS",
            ChristianHolidayKind::Carnival => "CARNIVAL",
            ChristianHolidayKind::AshWednesday => "ASH_WEDNESDAY",
            ChristianHolidayKind::MaundyThursday => "MAUNDY_THURSDAY",
            ChristianHolidayKind::GoodFriday => "GOOD_FRIDAY",
            ChristianHolidayKind::EasterSaturday => "EASTER_SATURDAY",
            ChristianHolidayKind::EasterMonday => "EASTER_MONDAY",
            ChristianHolidayKind::EasterTuesday => "EASTER_TUESDAY",
            ChristianHolidayKind::GeneralPrayerDay => "GENERAL_PRAYER_DAY",
            ChristianHolidayKind::AscensionDay => "ASCENSION_DAY",
            ChristianHolidayKind::Pentecost => "PENTECOST",
            ChristianHolidayKind::WhitSunday => "WHIT_SUNDAY",
            ChristianHolidayKind::WhitMonday => "WHIT_MONDAY",
            ChristianHolidayKind::PentecostMonday => "PENTECOST_MONDAY",
            ChristianHolidayKind::CorpusChristi => "CORPUS_CHRISTI",
            ChristianHolidayKind::SacredHeart => "SACRED_HEART",
        }
    }
}

/// A named Christian feast, reckoned from Easter Sunday under the given
/// chronology.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ChristianHolidayRule {
    /// Which feast.
    pub kind: ChristianHolidayKind,
    /// Calendar system used to reckon Easter Sunday.
    pub chronology: Chronology,
    /// Moving conditions, applied to the computed feast date.
    pub moving_conditions: Vec<MovingCondition>,
    /// Shared metadata.
    pub info: RuleInfo,
}

/// Which occurrence of a weekday within a month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum WeekdayOccurrence {
    /// The first occurrence.
    First,
    /// The second occurrence.
    Second,
    /// The third occurrence.
    Third,
    /// The fourth occurrence.
    Fourth,
    /// The last occurrence.
    Last,
}

/// A weekday-in-month specification (e.g. "last Monday of May"), resolved
/// against a requested year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FixedWeekday {
    /// Which occurrence within the month.
    pub which: WeekdayOccurrence,
    /// The weekday to find.
    pub weekday: Weekday,
    /// The month to search.
    pub month: Month,
}

impl FixedWeekday {
    /// Resolve to a concrete date in `year`.
    pub fn resolve(&self, year: u16) -> hc_core::Result<Date> {
        let n = match self.which {
            WeekdayOccurrence::First => 1,
            WeekdayOccurrence::Second => 2,
            WeekdayOccurrence::Third => 3,
            WeekdayOccurrence::Fourth => 4,
            WeekdayOccurrence::Last => {
                return Date::last_weekday_in_month(self.weekday, year, self.month.number())
            }
        };
        Date::nth_weekday(n, self.weekday, year, self.month.number())
    }
}

/// The Nth (or last) occurrence of a weekday within a month.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FixedWeekdayInMonthRule {
    /// The weekday-in-month specification.
    pub fixed_weekday: FixedWeekday,
    /// Moving conditions, applied to the computed date.
    pub moving_conditions: Vec<MovingCondition>,
    /// Shared metadata.
    pub info: RuleInfo,
}

/// The first occurrence of a weekday within a fixed date range.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FixedWeekdayBetweenFixedRule {
    /// The weekday to find.
    pub weekday: Weekday,
    /// Start of the search range (inclusive).
    pub from: FixedDay,
    /// End of the search range (inclusive).
    pub to: FixedDay,
    /// Shared metadata.
    pub info: RuleInfo,
}

/// The nearest occurrence of a weekday before or after a fixed date.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FixedWeekdayRelativeToFixedRule {
    /// The weekday to find.
    pub weekday: Weekday,
    /// Search direction off the anchor.
    pub when: When,
    /// The anchor date.
    pub date: FixedDay,
    /// Shared metadata.
    pub info: RuleInfo,
}

/// The nearest occurrence of a weekday before or after a weekday-in-month
/// anchor (e.g. "Tuesday after the first Monday of November").
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RelativeToWeekdayInMonthRule {
    /// The weekday to find.
    pub weekday: Weekday,
    /// Search direction off the anchor.
    pub when: When,
    /// The anchor specification.
    pub fixed_weekday: FixedWeekday,
    /// Shared metadata.
    pub info: RuleInfo,
}

/// Well-known Islamic holidays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[allow(missing_docs)]
pub enum IslamicHolidayKind {
    NewYear,
    Aschura,
    MawlidAnNabi,
    LailatAlMiraj,
    LailatAlBarat,
    Ramadan,
    LailatAlQadr,
    IdAlFitr,
    IdUlAdha,
}

impl IslamicHolidayKind {
    /// The key-name fragment used to build the description key.
    pub fn key_name(&self) -> &'static str {
        match self {
            IslamicHolidayKind::NewYear => "NEWYEAR",
            IslamicHolidayKind::Aschura => "ASCHURA",
            IslamicHolidayKind::MawlidAnNabi => "MAWLID_AN_NABI",
            IslamicHolidayKind::LailatAlMiraj => "LAILAT_AL_MIRAJ",
            IslamicHolidayKind::LailatAlBarat => "LAILAT_AL_BARAT",
            IslamicHolidayKind::Ramadan => "RAMADAN",
            IslamicHolidayKind::LailatAlQadr => "LAILAT_AL_QADR",
            IslamicHolidayKind::IdAlFitr => "ID_AL_FITR",
            IslamicHolidayKind::IdUlAdha => "ID_UL_ADHA",
        }
    }
}

/// An Islamic-calendar holiday.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IslamicHolidayRule {
    /// Which holiday.
    pub kind: IslamicHolidayKind,
    /// Shared metadata.
    pub info: RuleInfo,
}

/// Hindu holidays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[allow(missing_docs)]
pub enum HinduHolidayKind {
    Holi,
}

impl HinduHolidayKind {
    /// The key-name fragment used to build the description key.
    pub fn key_name(&self) -> &'static str {
        match self {
            HinduHolidayKind::Holi => "HOLI",
        }
    }
}

/// A Hindu holiday.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HinduHolidayRule {
    /// Which holiday.
    pub kind: HinduHolidayKind,
    /// Shared metadata.
    pub info: RuleInfo,
}

/// Well-known Ethiopian-Orthodox holidays, expressed in the Coptic
/// calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[allow(missing_docs)]
pub enum EthiopianOrthodoxHolidayKind {
    Enkutatash,
    Meskel,
    Timkat,
}

impl EthiopianOrthodoxHolidayKind {
    /// The key-name fragment used to build the description key.
    pub fn key_name(&self) -> &'static str {
        match self {
            EthiopianOrthodoxHolidayKind::Enkutatash => "ENKUTATASH",
            EthiopianOrthodoxHolidayKind::Meskel => "MESKEL",
            EthiopianOrthodoxHolidayKind::Timkat => "TIMKAT",
        }
    }
}

/// An Ethiopian-Orthodox holiday.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EthiopianOrthodoxHolidayRule {
    /// Which holiday.
    pub kind: EthiopianOrthodoxHolidayKind,
    /// Shared metadata.
    pub info: RuleInfo,
}
