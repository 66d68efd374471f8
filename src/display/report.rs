//! Terminal views of the reporting engine
//!
//! These mirror the sections of the text report but are laid out for a
//! terminal: the dashboard cards, one block per period, and one per category.

use chrono::NaiveDate;

use crate::models::Money;
use crate::reports::{short_date, CategoryReport, LedgerSummary, PeriodReport, Totals};

/// Width of view headers and separators
const VIEW_WIDTH: usize = 44;

/// Heading and amount for a profit figure: "Keuntungan" or "Kerugian" with the magnitude
pub fn profit_label(profit: Money) -> (&'static str, Money) {
    if profit.is_negative() {
        ("Kerugian", profit.abs())
    } else {
        ("Keuntungan", profit)
    }
}

/// Format a header line centered in the view width
pub fn format_header(title: &str) -> String {
    let len = title.chars().count();
    let padding = VIEW_WIDTH.saturating_sub(len) / 2;
    format!("{}{}", " ".repeat(padding), title)
}

/// Format a separator line
pub fn separator() -> String {
    "─".repeat(VIEW_WIDTH)
}

fn push_totals(out: &mut String, totals: &Totals) {
    let (label, amount) = profit_label(totals.profit);
    out.push_str(&format!("  {:<12} {:>16}\n", "Pemasukan", totals.income.to_string()));
    out.push_str(&format!("  {:<12} {:>16}\n", "Pengeluaran", totals.expense.to_string()));
    out.push_str(&format!("  {:<12} {:>16}\n", label, amount.to_string()));
}

/// Dashboard: overall totals plus transaction counts
pub fn format_dashboard(store_name: &str, today: NaiveDate, summary: &LedgerSummary) -> String {
    let mut out = String::new();
    out.push_str(&format_header(store_name));
    out.push('\n');
    out.push_str(&format_header(&short_date(today)));
    out.push('\n');
    out.push_str(&separator());
    out.push('\n');

    let (label, amount) = profit_label(summary.totals.profit);
    out.push_str(&format!("Total Pemasukan    : {}\n", summary.totals.income));
    out.push_str(&format!("Total Pengeluaran  : {}\n", summary.totals.expense));
    out.push_str(&format!("{:<19}: {}\n", label, amount));
    out.push_str(&separator());
    out.push('\n');
    out.push_str(&format!(
        "Total Transaksi: {}  (Pemasukan: {}, Pengeluaran: {})\n",
        summary.transaction_count(),
        summary.income_count,
        summary.expense_count
    ));

    out
}

/// One block per period, oldest first
pub fn format_period_reports(title: &str, periods: &[PeriodReport]) -> String {
    let mut out = String::new();
    out.push_str(&format_header(title));
    out.push('\n');
    out.push_str(&separator());
    out.push('\n');

    for report in periods {
        let marker = if report.is_current_month { " *" } else { "" };
        if report.period == report.range.label {
            out.push_str(&format!("{}{}\n", report.period, marker));
        } else {
            out.push_str(&format!("{} ({}){}\n", report.period, report.range.label, marker));
        }
        push_totals(&mut out, &report.totals);
        out.push_str(&format!(
            "  {:<12} {:>16}\n",
            "Transaksi",
            format!("{} item", report.transaction_count())
        ));
        out.push('\n');
    }

    out
}

/// One block per category
pub fn format_category_reports(reports: &[CategoryReport]) -> String {
    let mut out = String::new();
    out.push_str(&format_header("LAPORAN PER KATEGORI"));
    out.push('\n');
    out.push_str(&separator());
    out.push('\n');

    for report in reports {
        out.push_str(&format!("{}\n", report.category));
        push_totals(&mut out, &report.totals);
        out.push_str(&format!(
            "  {:<12} {:>16}\n",
            "Transaksi",
            format!("{} item", report.transaction_count)
        ));
        out.push('\n');
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, Transaction, TransactionId, TransactionKind};
    use crate::reports::{category_reports, ReportPolicy};
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn txn(id: i64, kind: TransactionKind, amount: i64, category: Category) -> Transaction {
        Transaction::new(
            TransactionId::from_raw(id),
            kind,
            Money::from_rupiah(amount),
            category,
            date(2024, 3, 1),
        )
    }

    #[test]
    fn test_profit_label() {
        assert_eq!(
            profit_label(Money::from_rupiah(70_000)),
            ("Keuntungan", Money::from_rupiah(70_000))
        );
        assert_eq!(
            profit_label(Money::from_rupiah(-5_000)),
            ("Kerugian", Money::from_rupiah(5_000))
        );
        assert_eq!(profit_label(Money::zero()).0, "Keuntungan");
    }

    #[test]
    fn test_dashboard_shows_loss_as_magnitude() {
        let transactions = vec![txn(1, TransactionKind::Expense, 5_000, Category::Gas)];
        let out = format_dashboard(
            "Toko DGI",
            date(2024, 3, 1),
            &LedgerSummary::compute(&transactions),
        );
        assert!(out.contains("1/3/2024\n"));
        assert!(out.contains("Kerugian           : Rp\u{a0}5.000\n"));
        assert!(out.contains("Total Transaksi: 1  (Pemasukan: 0, Pengeluaran: 1)"));
    }

    #[test]
    fn test_period_view_marks_current_month() {
        let transactions = vec![txn(1, TransactionKind::Income, 100_000, Category::Gas)];
        let months = ReportPolicy::Trailing.monthly(&transactions, date(2024, 3, 1));
        let out = format_period_reports("LAPORAN BULANAN", &months);
        assert!(out.contains("Maret 2024 *\n"));
        assert!(out.contains("Oktober 2023\n"));
        assert!(out.contains("1 item"));
    }

    #[test]
    fn test_week_view_shows_range_label() {
        let weeks = ReportPolicy::Calendar.weekly(&[], date(2024, 3, 15));
        let out = format_period_reports("LAPORAN MINGGUAN", &weeks);
        assert!(out.contains("Minggu 1 (1/3 - 7/3/2024)\n"));
        assert!(out.contains("Minggu 5 (29/3 - 31/3/2024)\n"));
    }

    #[test]
    fn test_category_view_lists_every_category() {
        let out = format_category_reports(&category_reports(&[]));
        assert!(out.contains("Es Krim & Mainan\n"));
        assert!(out.contains("Gas\n"));
        assert_eq!(out.matches("0 item").count(), 2);
    }
}
