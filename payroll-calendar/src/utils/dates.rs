use chrono::{Datelike, NaiveDate, Weekday};

/// Number of days in given month, or `None` when chrono can't represent it.
pub(crate) fn days_in_month(year: i32, month: u32) -> Option<u32> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)?;

    let next = match month {
        12 => NaiveDate::from_ymd_opt(year + 1, 1, 1)?,
        _ => NaiveDate::from_ymd_opt(year, month + 1, 1)?,
    };

    Some((next - first).num_days() as u32)
}

/// Date of the `nth` occurrence (1-based) of `weekday` in given month, or
/// `None` when the month doesn't hold that many occurrences.
pub(crate) fn nth_weekday_of_month(
    year: i32,
    month: u32,
    weekday: Weekday,
    nth: u8,
) -> Option<NaiveDate> {
    if !(1..=5).contains(&nth) {
        return None;
    }

    let first = NaiveDate::from_ymd_opt(year, month, 1)?;

    let offset =
        (7 + weekday.num_days_from_sunday() - first.weekday().num_days_from_sunday()) % 7;

    let day = 1 + offset + 7 * (u32::from(nth) - 1);
    NaiveDate::from_ymd_opt(year, month, day)
}

/// Date of the last occurrence of `weekday` in given month.
pub(crate) fn last_weekday_of_month(year: i32, month: u32, weekday: Weekday) -> Option<NaiveDate> {
    let last_day = days_in_month(year, month)?;
    let last = NaiveDate::from_ymd_opt(year, month, last_day)?;

    let back = (7 + last.weekday().num_days_from_sunday() - weekday.num_days_from_sunday()) % 7;
    NaiveDate::from_ymd_opt(year, month, last_day - back)
}
