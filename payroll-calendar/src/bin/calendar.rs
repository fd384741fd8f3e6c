use std::env;

use chrono::{Datelike, Local};
use rust_decimal::Decimal;

use payroll_calendar::{Error, Frequency, HolidayCalendar, PaySchedule, YearView};

fn main() {
    let mut args = env::args().skip(1);

    let frequency = args
        .next()
        .expect("Usage: ./calendar <FREQUENCY> [LAST_PAYDAY] [AMOUNT] [YEAR]");

    let frequency = match frequency.parse::<Frequency>() {
        Ok(val) => val,
        Err(err) => {
            panic!("{err}");
        }
    };

    let schedule = match args.next() {
        Some(raw) => PaySchedule::new(frequency).with_anchor_input(&raw),
        None => PaySchedule::new(frequency),
    };

    let amount = args.next().map(|raw| parse_amount(&raw)).unwrap_or(Decimal::ZERO);

    let year = match args.next() {
        Some(raw) => raw.parse().expect("YEAR must be a number"),
        None => Local::now().year(),
    };

    println!(" - frequency: {frequency}");

    if let Some(anchor) = schedule.anchor() {
        println!(" - last payday: {anchor:?}");

        if let Some(next) = schedule.next_payday_after(Local::now().date_naive()) {
            println!(" - next payday: {next:?}");
        }
    }

    println!();

    let calendar = HolidayCalendar::us_federal();
    let view = YearView::new(year, &calendar, &schedule, amount);
    println!("{view}");
}

/// An amount that doesn't look like a number renders as zero, but negative
/// pay is a hard error.
fn parse_amount(raw: &str) -> Decimal {
    let amount = raw.trim().parse().unwrap_or(Decimal::ZERO);

    if amount < Decimal::ZERO {
        panic!("{}", Error::InvalidAmount(raw.trim().to_string()));
    }

    amount
}
