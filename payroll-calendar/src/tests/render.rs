use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::{
    date, Frequency, HolidayCalendar, Month, MonthGrid, MonthWindow, PaySchedule, PaydaySet,
    YearView,
};

#[test]
fn november_2024_grid() {
    let calendar = HolidayCalendar::us_federal();
    let schedule = PaySchedule::new(Frequency::Weekly).with_anchor(date!("2024-11-01"));
    let view = YearView::new(2024, &calendar, &schedule, dec!(100.00));

    let expected = [
        "November 2024",
        "Su  Mo  Tu  We  Th  Fr  Sa",
        "                     1*  2",
        " 3   4   5   6   7   8*  9",
        "10  11  12  13  14  15* 16",
        "17  18  19  20  21  22* 23",
        "24  25  26  27  28# 29* 30",
        " 1  Payday",
        " 8  Payday",
        "15  Payday",
        "22  Payday",
        "28  Thanksgiving",
        "29  Payday",
        "Month total: $500.00",
        "",
    ];

    assert_eq!(view.month(Month::November).to_string(), expected.join("\n"));
}

#[test]
fn empty_schedule_still_renders() {
    let calendar = HolidayCalendar::us_federal();
    let schedule = PaySchedule::new(Frequency::Weekly);
    let view = YearView::new(2024, &calendar, &schedule, dec!(100.00));
    let text = view.month(Month::January).to_string();

    assert!(text.contains("15  MLK Day"));
    assert!(!text.contains("Payday"));
    assert!(text.ends_with("Month total: $0.00\n"));
}

#[test]
fn holidays_only_grid() {
    let holidays = HolidayCalendar::us_federal().holidays_for(2024);
    let window = MonthWindow::new(2024, Month::July);
    let grid = MonthGrid::new(window, &holidays, PaydaySet::empty(window), dec!(500.00));
    let text = grid.to_string();

    assert!(text.contains(" 4#"));
    assert!(text.contains(" 4  Independence Day"));
    assert!(!text.contains("Payday"));
    assert!(text.ends_with("Month total: $0.00\n"));
}

#[test]
fn zero_amount_renders_a_zero_total() {
    let calendar = HolidayCalendar::us_federal();
    let schedule = PaySchedule::new(Frequency::Monthly).with_anchor(date!("2024-01-15"));
    let view = YearView::new(2024, &calendar, &schedule, Decimal::ZERO);
    let text = view.month(Month::March).to_string();

    assert!(text.contains("15  Payday"));
    assert!(text.ends_with("Month total: $0.00\n"));
}

#[test]
fn year_summary_totals() {
    let calendar = HolidayCalendar::us_federal();
    let schedule = PaySchedule::new(Frequency::Weekly).with_anchor(date!("2024-01-05"));
    let view = YearView::new(2024, &calendar, &schedule, dec!(150.00));
    let summary = view.summary();

    // 2024 holds 52 Fridays aligned with the anchor.
    assert_eq!(summary.months, 12);
    assert_eq!(summary.paydays, 52);
    assert_eq!(summary.total, dec!(7800.00));

    assert_eq!(
        summary.to_string(),
        "Rendered months: 12. Current displayed total (sum of month totals): $7800.00.",
    );
}

#[test]
fn year_view_ends_with_the_summary() {
    let calendar = HolidayCalendar::us_federal();
    let schedule = PaySchedule::new(Frequency::Biweekly).with_anchor(date!("2024-01-05"));
    let view = YearView::new(2024, &calendar, &schedule, dec!(1000.00));
    let text = view.to_string();

    assert!(text.starts_with("January 2024\n"));
    assert!(text.contains("December 2024\n"));

    let summary = view.summary();
    assert!(text.ends_with(&summary.to_string()));
}
