use std::collections::BTreeMap;

use chrono::{NaiveDate, Weekday};

use crate::month::Month;
use crate::utils::dates::{last_weekday_of_month, nth_weekday_of_month};

// HolidayRule

/// Where inside a year a holiday falls.
#[derive(Copy, Clone, Debug, Hash, Eq, PartialEq)]
pub enum HolidayRule {
    /// Same month and day every year.
    Fixed { month: Month, day: u32 },
    /// The `nth` occurrence (1-based) of a weekday in a month.
    NthWeekday { month: Month, weekday: Weekday, nth: u8 },
    /// The last occurrence of a weekday in a month.
    LastWeekday { month: Month, weekday: Weekday },
}

impl HolidayRule {
    /// Resolve the rule for a single year.
    ///
    /// Rules that don't materialize resolve to `None`: a fixed Feb 30, or a
    /// 5th weekday of a month that only holds four of them.
    pub fn date_in(self, year: i32) -> Option<NaiveDate> {
        match self {
            Self::Fixed { month, day } => NaiveDate::from_ymd_opt(year, month.number(), day),
            Self::NthWeekday { month, weekday, nth } => {
                nth_weekday_of_month(year, month.number(), weekday, nth)
            }
            Self::LastWeekday { month, weekday } => {
                last_weekday_of_month(year, month.number(), weekday)
            }
        }
    }
}

// Holiday

/// A named holiday together with the rule that places it each year.
#[derive(Copy, Clone, Debug, Hash, Eq, PartialEq)]
pub struct Holiday {
    name: &'static str,
    rule: HolidayRule,
}

impl Holiday {
    pub const fn fixed(name: &'static str, month: Month, day: u32) -> Self {
        Self { name, rule: HolidayRule::Fixed { month, day } }
    }

    pub const fn nth_weekday(name: &'static str, month: Month, weekday: Weekday, nth: u8) -> Self {
        Self { name, rule: HolidayRule::NthWeekday { month, weekday, nth } }
    }

    pub const fn last_weekday(name: &'static str, month: Month, weekday: Weekday) -> Self {
        Self { name, rule: HolidayRule::LastWeekday { month, weekday } }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn rule(&self) -> HolidayRule {
        self.rule
    }
}

/// The eight US federal holidays observed by payroll, kept on their actual
/// dates: a holiday landing on a weekend is not shifted to a workday.
const US_FEDERAL: &[Holiday] = &[
    Holiday::fixed("New Year's Day", Month::January, 1),
    Holiday::nth_weekday("MLK Day", Month::January, Weekday::Mon, 3),
    Holiday::last_weekday("Memorial Day", Month::May, Weekday::Mon),
    Holiday::fixed("Juneteenth", Month::June, 19),
    Holiday::fixed("Independence Day", Month::July, 4),
    Holiday::nth_weekday("Labor Day", Month::September, Weekday::Mon, 1),
    Holiday::nth_weekday("Thanksgiving", Month::November, Weekday::Thu, 4),
    Holiday::fixed("Christmas", Month::December, 25),
];

// HolidayCalendar

/// A set of holiday rules that can be resolved against any year.
#[derive(Clone, Debug)]
pub struct HolidayCalendar {
    holidays: Vec<Holiday>,
}

impl HolidayCalendar {
    /// Build a calendar from custom rules.
    pub fn new(holidays: impl IntoIterator<Item = Holiday>) -> Self {
        Self { holidays: holidays.into_iter().collect() }
    }

    /// The set of US federal holidays.
    pub fn us_federal() -> Self {
        Self { holidays: US_FEDERAL.to_vec() }
    }

    pub fn holidays(&self) -> &[Holiday] {
        &self.holidays
    }

    /// Resolve every rule of the calendar for one year.
    ///
    /// ```
    /// use chrono::NaiveDate;
    /// use payroll_calendar::HolidayCalendar;
    ///
    /// let holidays = HolidayCalendar::us_federal().holidays_for(2024);
    /// let mlk = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
    ///
    /// assert_eq!(holidays.name_for(mlk), Some("MLK Day"));
    /// assert_eq!(holidays.len(), 8);
    /// ```
    pub fn holidays_for(&self, year: i32) -> YearHolidays {
        YearHolidays {
            dates: (self.holidays.iter())
                .filter_map(|holiday| Some((holiday.rule.date_in(year)?, holiday.name)))
                .collect(),
        }
    }
}

// YearHolidays

/// All holidays of a single year, keyed by date.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct YearHolidays {
    dates: BTreeMap<NaiveDate, &'static str>,
}

impl YearHolidays {
    /// Display name of the holiday falling on a date, if any.
    pub fn name_for(&self, date: NaiveDate) -> Option<&'static str> {
        self.dates.get(&date).copied()
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.dates.contains_key(&date)
    }

    /// Iterate over the year's holidays in date order.
    pub fn iter(&self) -> impl Iterator<Item = (NaiveDate, &'static str)> + '_ {
        self.dates.iter().map(|(date, name)| (*date, *name))
    }

    pub fn len(&self) -> usize {
        self.dates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }
}
