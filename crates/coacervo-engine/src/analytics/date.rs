use chrono::{Datelike, NaiveDate, Weekday};

use crate::{EngineError, EngineResult};

pub const WEEKDAY_ORDER: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct YearMonth {
    pub year: i32,
    pub month: u32,
}

impl YearMonth {
    pub fn of(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    pub fn first_day(self) -> NaiveDate {
        NaiveDate::from_ymd_opt(self.year, self.month, 1).unwrap_or_default()
    }

    pub fn last_day(self) -> NaiveDate {
        let day = days_in_month(self.year, self.month);
        NaiveDate::from_ymd_opt(self.year, self.month, day).unwrap_or_default()
    }

    pub fn label(self) -> String {
        self.first_day().format("%b-%Y").to_string()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct QuarterKey {
    pub year: i32,
    pub quarter: u32,
}

impl QuarterKey {
    pub fn of(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            quarter: (date.month() - 1) / 3 + 1,
        }
    }

    pub fn label(self) -> String {
        format!("{} Q{}", self.year, self.quarter)
    }
}

pub const fn weekday_label(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

pub fn format_iso_date(date: &NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

pub fn parse_ledger_date(value: &str) -> Option<NaiveDate> {
    if looks_like_iso_date(value) {
        return NaiveDate::parse_from_str(value, "%Y-%m-%d").ok();
    }
    NaiveDate::parse_from_str(value, "%m/%d/%Y").ok()
}

pub fn parse_iso_date(value: &str, field_name: &str) -> EngineResult<NaiveDate> {
    if !looks_like_iso_date(value) {
        return Err(EngineError::invalid_argument(&format!(
            "`{field_name}` must use YYYY-MM-DD format with a real calendar date."
        )));
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|_| {
        EngineError::invalid_argument(&format!(
            "`{field_name}` must use YYYY-MM-DD format with valid calendar values."
        ))
    })
}

pub fn month_bounds(month: YearMonth) -> (NaiveDate, NaiveDate) {
    (month.first_day(), month.last_day())
}

fn looks_like_iso_date(value: &str) -> bool {
    if value.len() != 10 {
        return false;
    }
    let bytes = value.as_bytes();
    if bytes[4] != b'-' || bytes[7] != b'-' {
        return false;
    }

    for index in [0usize, 1, 2, 3, 5, 6, 8, 9] {
        if !bytes[index].is_ascii_digit() {
            return false;
        }
    }
    true
}

pub(crate) fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        _ => 31,
    }
}

fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

pub(crate) fn round_money(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
