use chrono::Datelike;

use crate::{date, Holiday, HolidayCalendar, HolidayRule, Month, Weekday};

#[test]
fn us_federal_2024() {
    let holidays = HolidayCalendar::us_federal().holidays_for(2024);

    assert_eq!(holidays.len(), 8);
    assert_eq!(holidays.name_for(date!("2024-01-01")), Some("New Year's Day"));
    assert_eq!(holidays.name_for(date!("2024-01-15")), Some("MLK Day"));
    assert_eq!(holidays.name_for(date!("2024-05-27")), Some("Memorial Day"));
    assert_eq!(holidays.name_for(date!("2024-06-19")), Some("Juneteenth"));
    assert_eq!(holidays.name_for(date!("2024-07-04")), Some("Independence Day"));
    assert_eq!(holidays.name_for(date!("2024-09-02")), Some("Labor Day"));
    assert_eq!(holidays.name_for(date!("2024-11-28")), Some("Thanksgiving"));
    assert_eq!(holidays.name_for(date!("2024-12-25")), Some("Christmas"));

    assert!(!holidays.contains(date!("2024-01-02")));
}

#[test]
fn moving_holidays_follow_their_weekday() {
    let calendar = HolidayCalendar::us_federal();

    for year in 1900..=2100 {
        let holidays = calendar.holidays_for(year);
        assert_eq!(holidays.len(), 8, "missing holidays in {year}");

        for (date, name) in holidays.iter() {
            let expected = match name {
                "MLK Day" | "Memorial Day" | "Labor Day" => Some(Weekday::Mon),
                "Thanksgiving" => Some(Weekday::Thu),
                _ => None,
            };

            if let Some(weekday) = expected {
                assert_eq!(date.weekday(), weekday, "{name} {year}");
            }
        }
    }
}

#[test]
fn weekend_holidays_are_not_shifted() {
    // July 4th 2020 falls on a Saturday and stays there.
    let holidays = HolidayCalendar::us_federal().holidays_for(2020);

    assert_eq!(date!("2020-07-04").weekday(), Weekday::Sat);
    assert_eq!(holidays.name_for(date!("2020-07-04")), Some("Independence Day"));
    assert!(!holidays.contains(date!("2020-07-03")));
    assert!(!holidays.contains(date!("2020-07-06")));
}

#[test]
fn rules_that_never_materialize() {
    let rule = HolidayRule::Fixed { month: Month::February, day: 30 };
    assert_eq!(rule.date_in(2024), None);

    let fifth = Holiday::nth_weekday("Fifth Monday", Month::February, Weekday::Mon, 5);
    let calendar = HolidayCalendar::new([fifth]);

    // Feb 2021 only has four Mondays, Feb 2016 has five.
    assert!(calendar.holidays_for(2021).is_empty());
    assert_eq!(calendar.holidays_for(2016).name_for(date!("2016-02-29")), Some("Fifth Monday"));
}
