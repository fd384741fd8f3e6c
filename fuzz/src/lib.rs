//! Development module that shares the fuzzing logic between unit tests and
//! the actual fuzzing.

use arbitrary::Arbitrary;
use chrono::{Datelike, NaiveDate};

use payroll_calendar::{Frequency, HolidayCalendar, Month, MonthWindow, PaySchedule};

/// A fuzzing example
#[derive(Arbitrary, Clone, Debug)]
pub struct Data {
    pub year: u16,
    pub month_num: u8,
    pub frequency: Frequency,
    pub anchor: (u16, u8, u8),
    pub operation: Operation,
}

/// What operation to perform on the input
#[derive(Arbitrary, Clone, Debug)]
pub enum Operation {
    Holidays,
    Paydays,
    NextPayday,
}

fn schedule(data: &Data) -> Option<PaySchedule> {
    let (year, month, day) = data.anchor;

    if !(1900..=9999).contains(&year) {
        return None;
    }

    let anchor = NaiveDate::from_ymd_opt(i32::from(year), u32::from(month), u32::from(day))?;
    Some(PaySchedule::new(data.frequency).with_anchor(anchor))
}

/// Run a fuzzing test and return `true` if the example should be kept in
/// corpus.
pub fn run_fuzz_paydays(data: Data) -> bool {
    if !(1900..=9999).contains(&data.year) {
        return false;
    }

    let year = i32::from(data.year);

    let Ok(month) = Month::try_from(u32::from(data.month_num)) else {
        return false;
    };

    let window = MonthWindow::new(year, month);

    match &data.operation {
        Operation::Holidays => {
            let holidays = HolidayCalendar::us_federal().holidays_for(year);
            assert_eq!(holidays.len(), 8);

            for (date, name) in holidays.iter() {
                assert_eq!(date.year(), year);
                assert_eq!(holidays.name_for(date), Some(name));
            }

            let dates: Vec<NaiveDate> = holidays.iter().map(|(date, _)| date).collect();

            for pair in dates.windows(2) {
                assert!(pair[0] < pair[1]);
            }
        }
        Operation::Paydays => {
            let Some(schedule) = schedule(&data) else {
                return false;
            };

            let paydays = schedule.paydays_in(window);
            assert_eq!(paydays.window(), window);

            let dates: Vec<NaiveDate> = paydays.iter().collect();
            assert_eq!(dates.len(), paydays.len());

            for date in &dates {
                assert!(window.contains(*date));
                assert!(paydays.contains(*date));
            }

            let anchor = schedule.anchor().expect("schedule built without anchor");

            match schedule.frequency().step_days() {
                Some(step) => {
                    let step = i64::from(step);

                    for date in &dates {
                        assert_eq!((*date - anchor).num_days().rem_euclid(step), 0);
                    }

                    for pair in dates.windows(2) {
                        assert_eq!((pair[1] - pair[0]).num_days(), step);
                    }
                }
                None => {
                    assert!(dates.len() <= 1);

                    for date in &dates {
                        assert_eq!(date.day(), anchor.day());
                    }
                }
            }

            // Recomputing over the same window must be stable.
            assert_eq!(paydays, schedule.paydays_in(window));
        }
        Operation::NextPayday => {
            let Some(schedule) = schedule(&data) else {
                return false;
            };

            let start = window.first_day();

            if let Some(next) = schedule.next_payday_after(start) {
                assert!(next > start);

                let holding = MonthWindow::containing(next);
                assert!(schedule.paydays_in(holding).contains(next));
            }
        }
    }

    true
}
