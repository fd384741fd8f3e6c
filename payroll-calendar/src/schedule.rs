use chrono::{Datelike, Duration, NaiveDate};
use day_bitmap::MonthDays;
use rust_decimal::Decimal;

use crate::frequency::Frequency;
use crate::month::MonthWindow;

// PaySchedule

/// A pay stream: how often paydays recur, anchored on the last payday
/// actually observed.
#[derive(Copy, Clone, Debug, Hash, Eq, PartialEq)]
pub struct PaySchedule {
    frequency: Frequency,
    anchor: Option<NaiveDate>,
}

impl PaySchedule {
    /// Schedule with no anchor yet. It yields no paydays until one is set.
    pub fn new(frequency: Frequency) -> Self {
        Self { frequency, anchor: None }
    }

    pub fn with_anchor(self, anchor: NaiveDate) -> Self {
        Self { anchor: Some(anchor), ..self }
    }

    /// Set the anchor from raw `YYYY-MM-DD` input.
    ///
    /// The anchor usually comes from a form field or an argument list, so a
    /// value that doesn't parse clears the anchor instead of failing and the
    /// schedule falls back to yielding no paydays.
    pub fn with_anchor_input(self, raw: &str) -> Self {
        match NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d") {
            Ok(anchor) => self.with_anchor(anchor),
            Err(_) => {
                #[cfg(feature = "log")]
                log::warn!("Ignoring malformed payday anchor `{raw}`");
                Self { anchor: None, ..self }
            }
        }
    }

    pub fn frequency(&self) -> Frequency {
        self.frequency
    }

    pub fn anchor(&self) -> Option<NaiveDate> {
        self.anchor
    }

    /// All paydays falling inside a month window.
    ///
    /// For weekly and biweekly schedules the anchor extends in both
    /// directions by the fixed step, so a window far before or after the
    /// anchor still gets the paydays consistent with the global sequence.
    /// Monthly schedules pay on the anchor's day of month, and a month too
    /// short for that day gets no payday at all.
    ///
    /// ```
    /// use payroll_calendar::{Frequency, Month, MonthWindow, PaySchedule};
    ///
    /// let schedule = PaySchedule::new(Frequency::Weekly).with_anchor_input("2024-01-05");
    /// let paydays = schedule.paydays_in(MonthWindow::new(2024, Month::January));
    ///
    /// let days: Vec<String> = paydays.iter().map(|date| date.to_string()).collect();
    /// assert_eq!(days, ["2024-01-05", "2024-01-12", "2024-01-19", "2024-01-26"]);
    /// ```
    pub fn paydays_in(&self, window: MonthWindow) -> PaydaySet {
        let mut days = MonthDays::new();

        if let Some(anchor) = self.anchor {
            match self.frequency.step_days() {
                None => {
                    // Months shorter than the anchor's day of month get no
                    // payday rather than one clamped to their last day.
                    if window.date_of(anchor.day()).is_some() {
                        days.insert(anchor.day());
                    }
                }
                Some(step) => {
                    let step = Duration::days(step.into());
                    let mut date = anchor;

                    while date > window.first_day() {
                        date -= step;
                    }

                    while date <= window.last_day() {
                        if date >= window.first_day() {
                            days.insert(date.day());
                        }

                        date += step;
                    }
                }
            }
        }

        PaydaySet { window, days }
    }

    /// Next payday falling strictly after a date, or `None` when the
    /// schedule has no anchor.
    pub fn next_payday_after(&self, date: NaiveDate) -> Option<NaiveDate> {
        let anchor = self.anchor?;

        match self.frequency.step_days() {
            Some(step) => {
                let step = i64::from(step);
                let gap = (date - anchor).num_days();

                // First multiple of the step landing strictly after `date`.
                let steps = gap.div_euclid(step) + 1;
                anchor.checked_add_signed(Duration::days(steps * step))
            }
            None => {
                let mut window = MonthWindow::containing(date);

                // A 29th, 30th or 31st shows up again within two months.
                for _ in 0..3 {
                    match window.date_of(anchor.day()) {
                        Some(payday) if payday > date => return Some(payday),
                        _ => window = window.next(),
                    }
                }

                None
            }
        }
    }
}

// PaydaySet

/// The paydays falling inside one month window.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct PaydaySet {
    window: MonthWindow,
    days: MonthDays,
}

impl PaydaySet {
    /// The empty set over a window.
    pub fn empty(window: MonthWindow) -> Self {
        Self { window, days: MonthDays::new() }
    }

    pub fn window(&self) -> MonthWindow {
        self.window
    }

    /// The backing bit set of days.
    pub fn days(&self) -> MonthDays {
        self.days
    }

    /// Check if a date is a payday. Dates outside the window never are.
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.window.contains(date) && self.days.contains(date.day())
    }

    pub fn len(&self) -> usize {
        self.days.count() as usize
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    /// Iterate over the paydays in date order.
    pub fn iter(&self) -> impl Iterator<Item = NaiveDate> {
        let window = self.window;

        (self.days.iter()).map(move |day| window.date_of(day).expect("payday outside its window"))
    }

    /// Money paid out over the window, given the amount of a single payday.
    ///
    /// ```
    /// use payroll_calendar::{Frequency, Month, MonthWindow, PaySchedule};
    /// use rust_decimal::Decimal;
    ///
    /// let schedule = PaySchedule::new(Frequency::Weekly).with_anchor_input("2024-01-05");
    /// let paydays = schedule.paydays_in(MonthWindow::new(2024, Month::January));
    ///
    /// assert_eq!(paydays.total(Decimal::new(15000, 2)), Decimal::new(60000, 2));
    /// ```
    pub fn total(&self, amount: Decimal) -> Decimal {
        amount * Decimal::from(self.days.count())
    }
}
