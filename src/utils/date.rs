use chrono::{Datelike, NaiveDate, Weekday};

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

/// Monday..Sunday bounds of the ISO week containing `d`.
pub fn iso_week_bounds(d: NaiveDate) -> (NaiveDate, NaiveDate) {
    let week = d.iso_week();
    let monday = NaiveDate::from_isoywd_opt(week.year(), week.week(), Weekday::Mon)
        .unwrap_or_else(|| d - chrono::Duration::days(d.weekday().num_days_from_monday() as i64));
    let sunday = monday + chrono::Duration::days(6);
    (monday, sunday)
}

/// The most recent `n` calendar dates ending today, oldest first.
pub fn last_n_days(n: u32) -> Vec<NaiveDate> {
    let today = today();
    (0..n as i64)
        .rev()
        .map(|off| today - chrono::Duration::days(off))
        .collect()
}
