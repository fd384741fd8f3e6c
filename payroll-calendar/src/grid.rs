use std::fmt;

use chrono::Datelike;
use rust_decimal::Decimal;

use crate::holidays::{HolidayCalendar, YearHolidays};
use crate::month::{Month, MonthWindow};
use crate::schedule::{PaySchedule, PaydaySet};

/// Order the columns render in, Sunday first as on paper calendars.
const DAY_TITLES: [&str; 7] = ["Su", "Mo", "Tu", "We", "Th", "Fr", "Sa"];

// MonthGrid

/// One month laid out as a 7-column text grid, with holidays and paydays
/// marked in the cells and spelled out below.
///
/// Every input of the layout is carried by the value itself, so rendering
/// the same grid twice gives the same text.
#[derive(Clone, Debug)]
pub struct MonthGrid<'h> {
    window: MonthWindow,
    holidays: &'h YearHolidays,
    paydays: PaydaySet,
    amount: Decimal,
}

impl<'h> MonthGrid<'h> {
    pub fn new(
        window: MonthWindow,
        holidays: &'h YearHolidays,
        paydays: PaydaySet,
        amount: Decimal,
    ) -> Self {
        Self { window, holidays, paydays, amount }
    }

    /// Money paid out over this month.
    pub fn total(&self) -> Decimal {
        self.paydays.total(self.amount)
    }
}

impl fmt::Display for MonthGrid<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} {}", self.window.month().as_str(), self.window.year())?;
        writeln!(f, "{}", DAY_TITLES.join("  "))?;

        let offset = self.window.first_day().weekday().num_days_from_sunday() as usize;
        let mut cells = vec!["   ".to_owned(); offset];

        for date in self.window.dates() {
            let mark = if self.paydays.contains(date) {
                '*'
            } else if self.holidays.contains(date) {
                '#'
            } else {
                ' '
            };

            cells.push(format!("{:>2}{mark}", date.day()));
        }

        for row in cells.chunks(7) {
            writeln!(f, "{}", row.join(" ").trim_end())?;
        }

        for date in self.window.dates() {
            if let Some(name) = self.holidays.name_for(date) {
                writeln!(f, "{:>2}  {name}", date.day())?;
            }

            if self.paydays.contains(date) {
                writeln!(f, "{:>2}  Payday", date.day())?;
            }
        }

        writeln!(f, "Month total: ${:.2}", self.total())
    }
}

// YearView

/// A whole year of month grids plus the closing summary line, the printable
/// counterpart of the scrolling calendar.
///
/// Holidays are resolved once when the view is built; paydays and totals
/// are computed on the fly while rendering.
#[derive(Clone, Debug)]
pub struct YearView<'a> {
    year: i32,
    holidays: YearHolidays,
    schedule: &'a PaySchedule,
    amount: Decimal,
}

impl<'a> YearView<'a> {
    pub fn new(
        year: i32,
        calendar: &HolidayCalendar,
        schedule: &'a PaySchedule,
        amount: Decimal,
    ) -> Self {
        Self { year, holidays: calendar.holidays_for(year), schedule, amount }
    }

    fn windows(&self) -> impl Iterator<Item = MonthWindow> {
        let year = self.year;

        (1..=12).map(move |num| {
            let month = Month::try_from(num).expect("invalid month number");
            MonthWindow::new(year, month)
        })
    }

    /// Grid for one month of the year.
    pub fn month(&self, month: Month) -> MonthGrid<'_> {
        let window = MonthWindow::new(self.year, month);
        let paydays = self.schedule.paydays_in(window);
        MonthGrid::new(window, &self.holidays, paydays, self.amount)
    }

    /// Counters over the twelve rendered months.
    pub fn summary(&self) -> YearSummary {
        let mut summary = YearSummary {
            months: 0,
            paydays: 0,
            total: Decimal::ZERO,
        };

        for window in self.windows() {
            let paydays = self.schedule.paydays_in(window);
            summary.months += 1;
            summary.paydays += paydays.len();
            summary.total += paydays.total(self.amount);
        }

        summary
    }
}

impl fmt::Display for YearView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for window in self.windows() {
            writeln!(f, "{}", self.month(window.month()))?;
        }

        write!(f, "{}", self.summary())
    }
}

// YearSummary

/// Totals accumulated over every rendered month.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct YearSummary {
    pub months: usize,
    pub paydays: usize,
    pub total: Decimal,
}

impl fmt::Display for YearSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Rendered months: {}. Current displayed total (sum of month totals): ${:.2}.",
            self.months, self.total,
        )
    }
}
