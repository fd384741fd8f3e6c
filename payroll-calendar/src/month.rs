use std::fmt;
use std::iter;

use chrono::{Datelike, NaiveDate};

use crate::utils::dates::days_in_month;

pub use chrono::Weekday;

// Errors

#[derive(Clone, Debug)]
pub struct InvalidMonth;

// Month

#[derive(Copy, Clone, Debug, Hash, Eq, Ord, PartialEq, PartialOrd)]
pub enum Month {
    January = 1,
    February = 2,
    March = 3,
    April = 4,
    May = 5,
    June = 6,
    July = 7,
    August = 8,
    September = 9,
    October = 10,
    November = 11,
    December = 12,
}

impl Month {
    /// Month number as used by chrono, starting at 1 for January.
    #[inline]
    pub fn number(self) -> u32 {
        self as u32
    }

    #[inline]
    pub fn next(self) -> Self {
        let num = self as u32;
        ((num % 12) + 1).try_into().expect("invalid month")
    }

    /// Extract a month from a [`chrono::Datelike`].
    #[inline]
    pub fn from_date(date: impl Datelike) -> Self {
        match date.month().try_into() {
            Ok(month) => month,
            Err(InvalidMonth) => unreachable!("invalid month for date `{}`", date.month()),
        }
    }

    /// Stringify the month (`"January"`, `"February"`, ...).
    #[inline]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::January => "January",
            Self::February => "February",
            Self::March => "March",
            Self::April => "April",
            Self::May => "May",
            Self::June => "June",
            Self::July => "July",
            Self::August => "August",
            Self::September => "September",
            Self::October => "October",
            Self::November => "November",
            Self::December => "December",
        }
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", &self.as_str()[..3])
    }
}

impl TryFrom<u32> for Month {
    type Error = InvalidMonth;

    #[inline]
    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Ok(match value {
            1 => Self::January,
            2 => Self::February,
            3 => Self::March,
            4 => Self::April,
            5 => Self::May,
            6 => Self::June,
            7 => Self::July,
            8 => Self::August,
            9 => Self::September,
            10 => Self::October,
            11 => Self::November,
            12 => Self::December,
            _ => return Err(InvalidMonth),
        })
    }
}

// MonthWindow

/// A single month of a single year, the range all payday and holiday
/// lookups run over.
///
/// Years are bound to the range chrono can represent; any four digit year
/// is fine.
#[derive(Copy, Clone, Debug, Hash, Eq, Ord, PartialEq, PartialOrd)]
pub struct MonthWindow {
    year: i32,
    month: Month,
}

impl MonthWindow {
    pub fn new(year: i32, month: Month) -> Self {
        Self { year, month }
    }

    /// The window holding a given date.
    ///
    /// ```
    /// use chrono::NaiveDate;
    /// use payroll_calendar::{Month, MonthWindow};
    ///
    /// let date = NaiveDate::from_ymd_opt(2024, 2, 16).unwrap();
    /// assert_eq!(MonthWindow::containing(date), MonthWindow::new(2024, Month::February));
    /// ```
    pub fn containing(date: NaiveDate) -> Self {
        Self { year: date.year(), month: Month::from_date(date) }
    }

    pub fn year(self) -> i32 {
        self.year
    }

    pub fn month(self) -> Month {
        self.month
    }

    /// First date of the window.
    pub fn first_day(self) -> NaiveDate {
        NaiveDate::from_ymd_opt(self.year, self.month.number(), 1)
            .expect("window year out of range")
    }

    /// Last date of the window.
    pub fn last_day(self) -> NaiveDate {
        self.date_of(self.num_days()).expect("window year out of range")
    }

    /// Number of days in the window's month, accounting for leap years.
    ///
    /// ```
    /// use payroll_calendar::{Month, MonthWindow};
    ///
    /// assert_eq!(MonthWindow::new(2024, Month::February).num_days(), 29);
    /// assert_eq!(MonthWindow::new(2023, Month::February).num_days(), 28);
    /// ```
    pub fn num_days(self) -> u32 {
        days_in_month(self.year, self.month.number()).expect("window year out of range")
    }

    /// Date of given day of month, or `None` when the month is too short.
    pub fn date_of(self, day: u32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month.number(), day)
    }

    /// Check if a date falls inside the window, bounds included.
    pub fn contains(self, date: NaiveDate) -> bool {
        date.year() == self.year && date.month() == self.month.number()
    }

    /// Iterate over all dates of the window in order.
    pub fn dates(self) -> impl Iterator<Item = NaiveDate> {
        let last = self.last_day();

        iter::successors(Some(self.first_day()), move |date| {
            date.succ_opt().filter(|next| *next <= last)
        })
    }

    /// The window right after this one.
    ///
    /// ```
    /// use payroll_calendar::{Month, MonthWindow};
    ///
    /// let dec = MonthWindow::new(2024, Month::December);
    /// assert_eq!(dec.next(), MonthWindow::new(2025, Month::January));
    /// ```
    pub fn next(self) -> Self {
        let year = match self.month {
            Month::December => self.year + 1,
            _ => self.year,
        };

        Self { year, month: self.month.next() }
    }
}

impl fmt::Display for MonthWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.month, self.year)
    }
}
