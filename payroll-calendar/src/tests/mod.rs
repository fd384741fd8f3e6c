mod holidays;
mod month_window;
mod render;

#[macro_export]
macro_rules! date {
    ( $date: expr ) => {{
        use chrono::NaiveDate;
        NaiveDate::parse_from_str($date, "%Y-%m-%d").expect("invalid date literal")
    }};
}

#[macro_export]
macro_rules! payday_keys {
    (
        $frequency: expr,
        $anchor: expr,
        $year: expr,
        $month: expr
        $( , )?
    ) => {{
        use $crate::{Frequency, MonthWindow, PaySchedule};

        let frequency = $frequency.parse::<Frequency>()?;

        PaySchedule::new(frequency)
            .with_anchor_input($anchor)
            .paydays_in(MonthWindow::new($year, $month))
            .iter()
            .map(|date| date.to_string())
            .collect::<Vec<_>>()
    }};
}
