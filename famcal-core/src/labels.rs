//! Korean display labels for dates and times.

use chrono::{Datelike, NaiveDate, NaiveTime, Timelike, Weekday};

use crate::picker::wheel::from_24h;

/// `오전 9:00`, `오후 12:05`.
pub fn time_label(time: NaiveTime) -> String {
    let (meridiem, hour12) = from_24h(time.hour());
    format!("{} {}:{:02}", meridiem.label(), hour12, time.minute())
}

/// `2월 7일 (토)`.
pub fn date_label(date: NaiveDate) -> String {
    format!("{}월 {}일 ({})", date.month(), date.day(), weekday_label(date.weekday()))
}

/// `2026년 2월`.
pub fn month_label(date: NaiveDate) -> String {
    format!("{}년 {}월", date.year(), date.month())
}

pub fn weekday_label(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Sun => "일",
        Weekday::Mon => "월",
        Weekday::Tue => "화",
        Weekday::Wed => "수",
        Weekday::Thu => "목",
        Weekday::Fri => "금",
        Weekday::Sat => "토",
    }
}
