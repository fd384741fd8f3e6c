use crate::{date, Month, MonthWindow};

#[test]
fn bounds() {
    let window = MonthWindow::new(2024, Month::February);

    assert_eq!(window.first_day(), date!("2024-02-01"));
    assert_eq!(window.last_day(), date!("2024-02-29"));
    assert_eq!(window.num_days(), 29);

    assert!(window.contains(date!("2024-02-01")));
    assert!(window.contains(date!("2024-02-29")));
    assert!(!window.contains(date!("2024-01-31")));
    assert!(!window.contains(date!("2024-03-01")));
}

#[test]
fn dates_cover_the_whole_window() {
    let window = MonthWindow::new(2023, Month::February);
    let dates: Vec<_> = window.dates().collect();

    assert_eq!(dates.len(), 28);
    assert_eq!(dates.first(), Some(&date!("2023-02-01")));
    assert_eq!(dates.last(), Some(&date!("2023-02-28")));
}

#[test]
fn date_of_checks_the_month_length() {
    let window = MonthWindow::new(2023, Month::April);

    assert_eq!(window.date_of(30), Some(date!("2023-04-30")));
    assert_eq!(window.date_of(31), None);
}

#[test]
fn stepping_over_year_end() {
    let window = MonthWindow::new(2024, Month::December);

    assert_eq!(window.next(), MonthWindow::new(2025, Month::January));
    assert_eq!(window.next().next(), MonthWindow::new(2025, Month::February));
}

#[test]
fn containing_matches_new() {
    let window = MonthWindow::containing(date!("2024-07-04"));
    assert_eq!(window, MonthWindow::new(2024, Month::July));
}
