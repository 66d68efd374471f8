//! Calendar ranges
//!
//! Week and month windows around a reference date, with the labels the
//! reports print for them. Weeks always start on Monday regardless of locale.

use chrono::{Datelike, Duration, NaiveDate};
use serde::Serialize;

/// Indonesian month names, index 0 = January
pub const MONTH_NAMES: [&str; 12] = [
    "Januari",
    "Februari",
    "Maret",
    "April",
    "Mei",
    "Juni",
    "Juli",
    "Agustus",
    "September",
    "Oktober",
    "November",
    "Desember",
];

/// An inclusive date window with a display label
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub label: String,
}

impl DateRange {
    /// Build a range labelled "d/m - d/m/yyyy"
    pub fn span(start: NaiveDate, end: NaiveDate) -> Self {
        Self {
            start,
            end,
            label: span_label(start, end),
        }
    }

    /// Check if a date falls within this range (both ends inclusive)
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }
}

/// Indonesian name for a 1-based month number
pub fn month_name(month: u32) -> &'static str {
    MONTH_NAMES[((month.clamp(1, 12)) - 1) as usize]
}

fn span_label(start: NaiveDate, end: NaiveDate) -> String {
    format!(
        "{}/{} - {}/{}/{}",
        start.day(),
        start.month(),
        end.day(),
        end.month(),
        end.year()
    )
}

/// Monday through Sunday week containing `date`
pub fn week_range(date: NaiveDate) -> DateRange {
    let days_since_monday = date.weekday().num_days_from_monday() as i64;
    let monday = date - Duration::days(days_since_monday);
    let sunday = monday + Duration::days(6);
    DateRange::span(monday, sunday)
}

/// First day of the month containing `date`
pub fn first_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

/// Last day of the month containing `date`: the day before the 1st of next month
pub fn last_of_month(date: NaiveDate) -> NaiveDate {
    let first = first_of_month(date);
    let next_first = first
        .checked_add_months(chrono::Months::new(1))
        .unwrap_or(NaiveDate::MAX);
    next_first.pred_opt().unwrap_or(first)
}

/// First through last day of the month containing `date`, labelled "Maret 2024"
pub fn month_range(date: NaiveDate) -> DateRange {
    DateRange {
        start: first_of_month(date),
        end: last_of_month(date),
        label: format!("{} {}", month_name(date.month()), date.year()),
    }
}

/// Date formatted as the id-ID locale short date, "1/3/2024"
pub fn short_date(date: NaiveDate) -> String {
    format!("{}/{}/{}", date.day(), date.month(), date.year())
}
