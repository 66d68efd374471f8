//! Weekly and monthly period reports
//!
//! Builds ordered buckets around a reference date and aggregates each one.
//! A single [`ReportPolicy`] decides how the buckets are laid out; callers pass
//! the same policy to every view so the terminal and the exported report
//! always agree.

use chrono::{Datelike, Duration, Months, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::aggregate::{aggregate_range, Totals};
use super::calendar::{first_of_month, last_of_month, month_range, week_range, DateRange};
use crate::models::Transaction;

/// Number of weeks in a trailing weekly report
pub const TRAILING_WEEKS: usize = 4;

/// Number of months in a trailing monthly report
pub const TRAILING_MONTHS: usize = 6;

/// How weekly and monthly buckets are laid out
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ReportPolicy {
    /// Weeks of the current month, months of the current year
    #[default]
    Calendar,
    /// The last 4 weeks and the last 6 months, counted back from today
    Trailing,
}

impl ReportPolicy {
    /// Heading for the weekly section of the text report
    pub const fn weekly_title(&self) -> &'static str {
        match self {
            Self::Calendar => "LAPORAN MINGGUAN BULAN INI",
            Self::Trailing => "LAPORAN MINGGUAN (4 MINGGU TERAKHIR)",
        }
    }

    /// Heading for the monthly section of the text report
    pub const fn monthly_title(&self) -> &'static str {
        match self {
            Self::Calendar => "LAPORAN BULANAN TAHUN INI",
            Self::Trailing => "LAPORAN BULANAN (6 BULAN TERAKHIR)",
        }
    }

    /// Weekly buckets for this policy
    pub fn weekly(&self, transactions: &[Transaction], today: NaiveDate) -> Vec<PeriodReport> {
        match self {
            Self::Calendar => weekly_reports_for_month(transactions, today),
            Self::Trailing => weekly_reports_trailing(transactions, today),
        }
    }

    /// Monthly buckets for this policy
    pub fn monthly(&self, transactions: &[Transaction], today: NaiveDate) -> Vec<PeriodReport> {
        match self {
            Self::Calendar => monthly_reports_for_year(transactions, today),
            Self::Trailing => monthly_reports_trailing(transactions, today),
        }
    }
}

impl fmt::Display for ReportPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Calendar => write!(f, "calendar"),
            Self::Trailing => write!(f, "trailing"),
        }
    }
}

impl FromStr for ReportPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "calendar" => Ok(Self::Calendar),
            "trailing" => Ok(Self::Trailing),
            other => Err(format!(
                "Unknown report policy '{}'. Use 'calendar' or 'trailing'",
                other
            )),
        }
    }
}

/// One bucket of a period report
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PeriodReport {
    /// Window covered by this bucket
    pub range: DateRange,
    /// Bucket name, e.g. "Minggu 2" or "Maret 2024"
    pub period: String,
    pub totals: Totals,
    /// Transactions dated inside the window
    pub transactions: Vec<Transaction>,
    /// Set on the monthly bucket that contains today
    pub is_current_month: bool,
}

impl PeriodReport {
    fn build(transactions: &[Transaction], range: DateRange, period: String) -> Self {
        let aggregated = aggregate_range(transactions, range.start, range.end);
        Self {
            range,
            period,
            totals: aggregated.totals,
            transactions: aggregated.transactions,
            is_current_month: false,
        }
    }

    pub fn transaction_count(&self) -> usize {
        self.transactions.len()
    }
}

fn week_period(number: usize) -> String {
    format!("Minggu {}", number)
}

/// Consecutive 7-day windows from the 1st of the current month, last one
/// clipped to the month end
pub fn weekly_reports_for_month(transactions: &[Transaction], today: NaiveDate) -> Vec<PeriodReport> {
    let month_end = last_of_month(today);
    let mut reports = Vec::new();
    let mut week_start = first_of_month(today);
    let mut week_number = 1;

    while week_start <= month_end {
        let week_end = (week_start + Duration::days(6)).min(month_end);
        let range = DateRange::span(week_start, week_end);
        reports.push(PeriodReport::build(transactions, range, week_period(week_number)));

        week_start = week_end + Duration::days(1);
        week_number += 1;
    }

    reports
}

/// The Monday-anchored week containing today and the three before it, oldest first
pub fn weekly_reports_trailing(transactions: &[Transaction], today: NaiveDate) -> Vec<PeriodReport> {
    let mut ranges: Vec<DateRange> = (0..TRAILING_WEEKS)
        .map(|weeks_back| week_range(today - Duration::days(7 * weeks_back as i64)))
        .collect();
    ranges.reverse();

    ranges
        .into_iter()
        .enumerate()
        .map(|(i, range)| PeriodReport::build(transactions, range, week_period(i + 1)))
        .collect()
}

fn month_report(transactions: &[Transaction], month_start: NaiveDate, today: NaiveDate) -> PeriodReport {
    let range = month_range(month_start);
    let period = range.label.clone();
    let mut report = PeriodReport::build(transactions, range, period);
    report.is_current_month =
        month_start.year() == today.year() && month_start.month() == today.month();
    report
}

/// All twelve months of the current year
pub fn monthly_reports_for_year(transactions: &[Transaction], today: NaiveDate) -> Vec<PeriodReport> {
    (1..=12)
        .filter_map(|month| NaiveDate::from_ymd_opt(today.year(), month, 1))
        .map(|month_start| month_report(transactions, month_start, today))
        .collect()
}

/// The six most recent months ending with the current one, oldest first
pub fn monthly_reports_trailing(transactions: &[Transaction], today: NaiveDate) -> Vec<PeriodReport> {
    let current = first_of_month(today);
    let mut reports: Vec<PeriodReport> = (0..TRAILING_MONTHS as u32)
        .filter_map(|months_back| current.checked_sub_months(Months::new(months_back)))
        .map(|month_start| month_report(transactions, month_start, today))
        .collect();
    reports.reverse();
    reports
}
