//! Full financial report
//!
//! Combines the overall summary, the period buckets, the category rows and the
//! transaction listing into one plain-text document. Rendering is a pure
//! function of its input: the same ledger and the same date always give the
//! same bytes.

use chrono::NaiveDate;
use serde::Serialize;

use super::aggregate::{LedgerSummary, Totals};
use super::calendar::short_date;
use super::category::{category_reports, CategoryReport};
use super::period::{PeriodReport, ReportPolicy};
use crate::models::Transaction;

/// Width of the banner and separator lines
pub const REPORT_WIDTH: usize = 40;

/// Everything the text report shows, computed for one reference date
#[derive(Debug, Clone, Serialize)]
pub struct FinancialReport {
    /// Date the report was generated for
    pub generated_at: NaiveDate,
    /// Bucket layout used for the weekly and monthly sections
    pub policy: ReportPolicy,
    pub summary: LedgerSummary,
    pub weekly: Vec<PeriodReport>,
    pub monthly: Vec<PeriodReport>,
    pub categories: Vec<CategoryReport>,
    /// Full listing, in stored order
    pub transactions: Vec<Transaction>,
}

impl FinancialReport {
    /// Compute every section of the report
    pub fn generate(transactions: &[Transaction], today: NaiveDate, policy: ReportPolicy) -> Self {
        Self {
            generated_at: today,
            policy,
            summary: LedgerSummary::compute(transactions),
            weekly: policy.weekly(transactions, today),
            monthly: policy.monthly(transactions, today),
            categories: category_reports(transactions),
            transactions: transactions.to_vec(),
        }
    }

    /// Render the plain-text document
    pub fn render_text(&self, store_name: &str) -> String {
        let mut out = String::new();
        let rule = "=".repeat(REPORT_WIDTH);
        let dashes = "-".repeat(REPORT_WIDTH);

        out.push_str(&rule);
        out.push('\n');
        out.push_str(&centered(
            &format!("LAPORAN KEUANGAN {}", store_name.to_uppercase()),
            REPORT_WIDTH,
        ));
        out.push('\n');
        out.push_str(&rule);
        out.push('\n');
        out.push_str(&format!("Tanggal: {}\n\n", short_date(self.generated_at)));

        out.push_str("RINGKASAN KEUANGAN:\n");
        out.push_str(&dashes);
        out.push('\n');
        let totals = &self.summary.totals;
        out.push_str(&format!("Total Pemasukan    : {}\n", totals.income));
        out.push_str(&format!("Total Pengeluaran  : {}\n", totals.expense));
        out.push_str(&format!("Keuntungan Bersih  : {}\n\n", totals.profit));

        out.push_str(&format!("{}:\n", self.policy.weekly_title()));
        out.push_str(&dashes);
        out.push('\n');
        for week in &self.weekly {
            out.push_str(&format!("\n{} ({}):\n", week.period, week.range.label));
            push_period_lines(&mut out, week);
        }

        out.push_str(&format!("\n\n{}:\n", self.policy.monthly_title()));
        out.push_str(&dashes);
        out.push('\n');
        for month in &self.monthly {
            out.push_str(&format!("\n{}:\n", month.period));
            push_period_lines(&mut out, month);
        }

        out.push_str("\n\nLAPORAN PER KATEGORI:\n");
        out.push_str(&dashes);
        out.push('\n');
        for row in &self.categories {
            out.push_str(&format!("\n{}:\n", row.category));
            push_totals_lines(&mut out, &row.totals);
        }

        out.push_str("\n\nDETAIL TRANSAKSI:\n");
        out.push_str(&dashes);
        out.push('\n');
        for (i, txn) in self.transactions.iter().enumerate() {
            let note = if txn.description.is_empty() {
                String::new()
            } else {
                format!(" - {}", txn.description)
            };
            out.push_str(&format!(
                "{}. {} | {} | {} | {}{}\n",
                i + 1,
                txn.date.format("%Y-%m-%d"),
                txn.category,
                txn.kind,
                txn.amount,
                note
            ));
        }

        out
    }
}

fn push_totals_lines(out: &mut String, totals: &Totals) {
    out.push_str(&format!("  Pemasukan    : {}\n", totals.income));
    out.push_str(&format!("  Pengeluaran  : {}\n", totals.expense));
    out.push_str(&format!("  Keuntungan   : {}\n", totals.profit));
}

fn push_period_lines(out: &mut String, report: &PeriodReport) {
    push_totals_lines(out, &report.totals);
    out.push_str(&format!(
        "  Transaksi    : {} item\n",
        report.transaction_count()
    ));
}

/// Left-pad `title` so it sits in the middle of `width` columns
fn centered(title: &str, width: usize) -> String {
    let len = title.chars().count();
    let padding = width.saturating_sub(len) / 2;
    format!("{}{}", " ".repeat(padding), title)
}

/// Generate the complete report text for `today`
pub fn generate_report_text(
    transactions: &[Transaction],
    today: NaiveDate,
    policy: ReportPolicy,
    store_name: &str,
) -> String {
    FinancialReport::generate(transactions, today, policy).render_text(store_name)
}

/// File name for a downloaded report, e.g. `Laporan_Keuangan_Toko_DGI_2024-03-01.txt`
pub fn report_file_name(store_name: &str, today: NaiveDate) -> String {
    let store: Vec<&str> = store_name.split_whitespace().collect();
    format!(
        "Laporan_Keuangan_{}_{}.txt",
        store.join("_"),
        today.format("%Y-%m-%d")
    )
}
