#![doc = include_str!("../../README.md")]

pub mod error;
pub mod frequency;
pub mod grid;
pub mod holidays;
pub mod month;
pub mod schedule;

mod utils;

#[cfg(test)]
mod tests;

// Public re-exports
pub use crate::error::{Error, Result};
pub use crate::frequency::Frequency;
pub use crate::grid::{MonthGrid, YearSummary, YearView};
pub use crate::holidays::{Holiday, HolidayCalendar, HolidayRule, YearHolidays};
pub use crate::month::{Month, MonthWindow, Weekday};
pub use crate::schedule::{PaySchedule, PaydaySet};
pub use day_bitmap::MonthDays;
